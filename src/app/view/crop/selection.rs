// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/crop/selection.rs
//
// Crop selection state and drag handle types.
// Inspired by cosmic-viewer (https://codeberg.org/bhh by Bryan Hyland

/// Rectangle on the display surface, in display pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DisplayRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl DisplayRect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Axis-aligned bounding box of two points.
    pub fn from_corners((ax, ay): (f32, f32), (bx, by): (f32, f32)) -> Self {
        Self::new(ax.min(bx), ay.min(by), (bx - ax).abs(), (by - ay).abs())
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Inclusive on all four edges.
    pub fn contains(&self, (px, py): (f32, f32)) -> bool {
        px >= self.x && px <= self.right() && py >= self.y && py <= self.bottom()
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragHandle {
    #[default]
    None,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    Top,
    Bottom,
    Left,
    Right,
    Move,
}

/// Pointer interaction in progress.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    /// Drawing a fresh rectangle from `anchor`.
    Creating { anchor: (f32, f32) },
    /// Resizing or moving the rectangle that existed at drag start.
    Adjusting {
        handle: DragHandle,
        anchor: (f32, f32),
        start_region: DisplayRect,
    },
}

#[derive(Debug, Clone, Default)]
pub struct CropSelection {
    pub region: DisplayRect,
    pub state: DragState,
}

impl CropSelection {
    pub fn is_dragging(&self) -> bool {
        !matches!(self.state, DragState::Idle)
    }

    /// Handle being dragged; `DragHandle::None` while creating or idle.
    pub fn drag_handle(&self) -> DragHandle {
        match self.state {
            DragState::Adjusting { handle, .. } => handle,
            _ => DragHandle::None,
        }
    }

    pub fn start_new_selection(&mut self, x: f32, y: f32) {
        self.region = DisplayRect::new(x, y, 0.0, 0.0);
        self.state = DragState::Creating { anchor: (x, y) };
    }

    pub fn start_handle_drag(&mut self, handle: DragHandle, x: f32, y: f32) {
        if handle == DragHandle::None {
            self.start_new_selection(x, y);
            return;
        }
        self.state = DragState::Adjusting {
            handle,
            anchor: (x, y),
            start_region: self.region,
        };
    }

    /// Apply a pointer move. Returns `false` when no drag is in progress.
    pub fn update_drag(&mut self, x: f32, y: f32, bounds: (f32, f32), min_size: f32) -> bool {
        let (width, height) = bounds;
        match self.state {
            DragState::Idle => false,
            DragState::Creating { anchor } => {
                let pos = (x.clamp(0.0, width), y.clamp(0.0, height));
                self.region = DisplayRect::from_corners(anchor, pos);
                true
            }
            DragState::Adjusting {
                handle,
                anchor: (start_x, start_y),
                start_region,
            } => {
                let resized = resize_region(handle, start_region, x - start_x, y - start_y);
                self.region = clamp_region(resized, bounds, min_size);
                true
            }
        }
    }

    pub fn end_drag(&mut self) {
        self.state = DragState::Idle;
    }

    /// Select the whole surface and drop any drag in progress.
    pub fn reset(&mut self, bounds: (f32, f32)) {
        self.region = DisplayRect::new(0.0, 0.0, bounds.0, bounds.1);
        self.state = DragState::Idle;
    }

    pub fn has_selection(&self) -> bool {
        !self.region.is_empty()
    }
}

/// Apply the drag delta to the rectangle captured at drag start.
fn resize_region(handle: DragHandle, start: DisplayRect, dx: f32, dy: f32) -> DisplayRect {
    let DisplayRect {
        x: x0,
        y: y0,
        width: w0,
        height: h0,
    } = start;

    match handle {
        DragHandle::TopLeft => DisplayRect::new(x0 + dx, y0 + dy, w0 - dx, h0 - dy),
        DragHandle::TopRight => DisplayRect::new(x0, y0 + dy, w0 + dx, h0 - dy),
        DragHandle::BottomLeft => DisplayRect::new(x0 + dx, y0, w0 - dx, h0 + dy),
        DragHandle::BottomRight => DisplayRect::new(x0, y0, w0 + dx, h0 + dy),
        DragHandle::Top => DisplayRect::new(x0, y0 + dy, w0, h0 - dy),
        DragHandle::Bottom => DisplayRect::new(x0, y0, w0, h0 + dy),
        DragHandle::Left => DisplayRect::new(x0 + dx, y0, w0 - dx, h0),
        DragHandle::Right => DisplayRect::new(x0, y0, w0 + dx, h0),
        DragHandle::Move => DisplayRect::new(x0 + dx, y0 + dy, w0, h0),
        DragHandle::None => start,
    }
}

/// Keep `rect` on a `bounds` surface and at least `min_size` on each side.
///
/// Position is clamped against the pre-clamp size first, then the size
/// against the clamped position. A last pass pulls the origin back in when
/// the minimum size pushed the far edge past the surface.
fn clamp_region(rect: DisplayRect, bounds: (f32, f32), min_size: f32) -> DisplayRect {
    let (surface_w, surface_h) = bounds;
    let min_w = min_size.min(surface_w);
    let min_h = min_size.min(surface_h);

    let x = rect.x.min(surface_w - rect.width).max(0.0);
    let y = rect.y.min(surface_h - rect.height).max(0.0);
    let width = rect.width.min(surface_w - x).max(min_w);
    let height = rect.height.min(surface_h - y).max(min_h);

    let x = x.min(surface_w - width).max(0.0);
    let y = y.min(surface_h - height).max(0.0);

    DisplayRect::new(x, y, width, height)
}
