// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/crop/overlay.rs
//
// Crop overlay geometry (mask, border, handles, grid), handle hit-testing
// and cursor hints. Drawing itself is left to the host.
// Inspired by cosmic-viewer (https://codeberg.org/bhh by Bryan Hyland

use crate::app::view::crop::selection::{DisplayRect, DragHandle};

/// Cursor the host should show over the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorIcon {
    #[default]
    Crosshair,
    ResizeNwse,
    ResizeNesw,
    ResizeNs,
    ResizeEw,
    Move,
}

impl CursorIcon {
    /// CSS `cursor` keyword.
    pub fn as_css(self) -> &'static str {
        match self {
            CursorIcon::Crosshair => "crosshair",
            CursorIcon::ResizeNwse => "nwse-resize",
            CursorIcon::ResizeNesw => "nesw-resize",
            CursorIcon::ResizeNs => "ns-resize",
            CursorIcon::ResizeEw => "ew-resize",
            CursorIcon::Move => "move",
        }
    }
}

pub fn cursor_for_handle(handle: DragHandle) -> CursorIcon {
    match handle {
        DragHandle::None => CursorIcon::Crosshair,
        DragHandle::TopLeft | DragHandle::BottomRight => CursorIcon::ResizeNwse,
        DragHandle::TopRight | DragHandle::BottomLeft => CursorIcon::ResizeNesw,
        DragHandle::Top | DragHandle::Bottom => CursorIcon::ResizeNs,
        DragHandle::Left | DragHandle::Right => CursorIcon::ResizeEw,
        DragHandle::Move => CursorIcon::Move,
    }
}

/// Find what a pointer at `point` grabs: corners first, then edges, then
/// the interior. `DragHandle::None` means the pointer starts a new selection.
///
/// Corner hit-boxes are squares reaching `handle_size` from the corner on
/// each axis; edge bands reach `edge_threshold` from the edge and only span
/// the rectangle's extent along it.
pub fn hit_test(
    rect: DisplayRect,
    point: (f32, f32),
    handle_size: f32,
    edge_threshold: f32,
) -> DragHandle {
    let (px, py) = point;
    let DisplayRect { x, y, .. } = rect;
    let (right, bottom) = (rect.right(), rect.bottom());

    let corners = [
        (DragHandle::TopLeft, x, y),
        (DragHandle::TopRight, right, y),
        (DragHandle::BottomLeft, x, bottom),
        (DragHandle::BottomRight, right, bottom),
    ];
    for (handle, cx, cy) in corners {
        if (px - cx).abs() <= handle_size && (py - cy).abs() <= handle_size {
            return handle;
        }
    }

    let within_x = px >= x && px <= right;
    let within_y = py >= y && py <= bottom;
    if within_x && (py - y).abs() <= edge_threshold {
        return DragHandle::Top;
    }
    if within_x && (py - bottom).abs() <= edge_threshold {
        return DragHandle::Bottom;
    }
    if within_y && (px - x).abs() <= edge_threshold {
        return DragHandle::Left;
    }
    if within_y && (px - right).abs() <= edge_threshold {
        return DragHandle::Right;
    }

    if rect.contains(point) {
        return DragHandle::Move;
    }

    DragHandle::None
}

/// Centers of the eight resize handles: corners, then edge midpoints.
pub fn handle_points(rect: DisplayRect) -> [(DragHandle, (f32, f32)); 8] {
    let DisplayRect {
        x,
        y,
        width: w,
        height: h,
    } = rect;
    [
        (DragHandle::TopLeft, (x, y)),
        (DragHandle::TopRight, (x + w, y)),
        (DragHandle::BottomLeft, (x, y + h)),
        (DragHandle::BottomRight, (x + w, y + h)),
        (DragHandle::Top, (x + w / 2.0, y)),
        (DragHandle::Bottom, (x + w / 2.0, y + h)),
        (DragHandle::Left, (x, y + h / 2.0)),
        (DragHandle::Right, (x + w, y + h / 2.0)),
    ]
}

/// Everything needed to draw the selection on top of the captured frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Overlay {
    /// Selection outline.
    pub border: DisplayRect,
    /// Dimmed areas outside the selection: top, left, right, bottom.
    pub masks: [DisplayRect; 4],
    /// Handle centers; each handle is drawn as a `handle_size` square.
    pub handles: [(DragHandle, (f32, f32)); 8],
    pub handle_size: f32,
    /// Rule-of-thirds lines as `(from, to)` segments, when enabled.
    pub grid: Vec<((f32, f32), (f32, f32))>,
}

impl Overlay {
    pub fn new(
        bounds: (f32, f32),
        rect: DisplayRect,
        handle_size: f32,
        show_grid: bool,
    ) -> Self {
        let (surface_w, surface_h) = bounds;
        let DisplayRect {
            x,
            y,
            width: w,
            height: h,
        } = rect;
        let (right, bottom) = (rect.right(), rect.bottom());

        let masks = [
            DisplayRect::new(0.0, 0.0, surface_w, y.max(0.0)),
            DisplayRect::new(0.0, y, x.max(0.0), h),
            DisplayRect::new(right, y, (surface_w - right).max(0.0), h),
            DisplayRect::new(0.0, bottom, surface_w, (surface_h - bottom).max(0.0)),
        ];

        let mut grid = Vec::new();
        if show_grid && w > 10.0 && h > 10.0 {
            for i in 1..3 {
                let gx = x + w * i as f32 / 3.0;
                let gy = y + h * i as f32 / 3.0;
                grid.push(((gx, y), (gx, bottom)));
                grid.push(((x, gy), (right, gy)));
            }
        }

        Self {
            border: rect,
            masks,
            handles: handle_points(rect),
            handle_size,
            grid,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECT: DisplayRect = DisplayRect {
        x: 50.0,
        y: 40.0,
        width: 100.0,
        height: 80.0,
    };

    fn hit(px: f32, py: f32) -> DragHandle {
        hit_test(RECT, (px, py), 8.0, 5.0)
    }

    #[test]
    fn corners_win_over_edges() {
        assert_eq!(hit(50.0, 40.0), DragHandle::TopLeft);
        assert_eq!(hit(57.0, 47.0), DragHandle::TopLeft);
        assert_eq!(hit(150.0, 40.0), DragHandle::TopRight);
        assert_eq!(hit(44.0, 126.0), DragHandle::BottomLeft);
        assert_eq!(hit(158.0, 128.0), DragHandle::BottomRight);
    }

    #[test]
    fn edges_within_band() {
        assert_eq!(hit(100.0, 36.0), DragHandle::Top);
        assert_eq!(hit(100.0, 124.0), DragHandle::Bottom);
        assert_eq!(hit(46.0, 80.0), DragHandle::Left);
        assert_eq!(hit(154.0, 80.0), DragHandle::Right);
    }

    #[test]
    fn edge_band_is_bounded_by_span() {
        // Beyond the corner boxes and outside the perpendicular span.
        assert_eq!(hit(30.0, 40.0), DragHandle::None);
        assert_eq!(hit(150.0, 20.0), DragHandle::None);
    }

    #[test]
    fn interior_moves_and_outside_creates() {
        assert_eq!(hit(100.0, 80.0), DragHandle::Move);
        assert_eq!(hit(10.0, 10.0), DragHandle::None);
        assert_eq!(hit(100.0, 30.0), DragHandle::None);
    }

    #[test]
    fn cursor_mapping() {
        assert_eq!(cursor_for_handle(DragHandle::TopLeft).as_css(), "nwse-resize");
        assert_eq!(cursor_for_handle(DragHandle::BottomLeft).as_css(), "nesw-resize");
        assert_eq!(cursor_for_handle(DragHandle::Bottom).as_css(), "ns-resize");
        assert_eq!(cursor_for_handle(DragHandle::Right).as_css(), "ew-resize");
        assert_eq!(cursor_for_handle(DragHandle::Move).as_css(), "move");
        assert_eq!(cursor_for_handle(DragHandle::None).as_css(), "crosshair");
    }

    #[test]
    fn masks_surround_the_selection() {
        let overlay = Overlay::new((200.0, 150.0), RECT, 8.0, false);
        assert_eq!(overlay.masks[0], DisplayRect::new(0.0, 0.0, 200.0, 40.0));
        assert_eq!(overlay.masks[1], DisplayRect::new(0.0, 40.0, 50.0, 80.0));
        assert_eq!(overlay.masks[2], DisplayRect::new(150.0, 40.0, 50.0, 80.0));
        assert_eq!(overlay.masks[3], DisplayRect::new(0.0, 120.0, 200.0, 30.0));
        assert!(overlay.grid.is_empty());
    }

    #[test]
    fn handles_and_grid() {
        let overlay = Overlay::new((200.0, 150.0), RECT, 8.0, true);
        assert_eq!(overlay.handles[4], (DragHandle::Top, (100.0, 40.0)));
        assert_eq!(overlay.handles[7], (DragHandle::Right, (150.0, 80.0)));
        assert_eq!(overlay.grid.len(), 4);
        assert_eq!(overlay.grid[0], ((50.0 + 100.0 / 3.0, 40.0), (50.0 + 100.0 / 3.0, 120.0)));
    }
}
