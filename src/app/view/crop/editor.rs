// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/crop/editor.rs
//
// Interactive crop-region editor: pointer commands, frame capture and the
// mapping of the selection to native pixels.

use crate::app::view::crop::overlay::{self, CursorIcon, Overlay};
use crate::app::view::crop::selection::{CropSelection, DisplayRect, DragHandle, DragState};
use crate::app::view::crop::surface::{DisplaySurface, FrameSource};
use crate::config::EditorConfig;
use crate::domain::operations::crop::CropRegion;

/// Owns the selection and the preview surface for one capture/edit/apply
/// cycle. Every operation is a no-op until a frame has been captured.
#[derive(Debug, Clone, Default)]
pub struct RegionEditor {
    config: EditorConfig,
    surface: Option<DisplaySurface>,
    selection: CropSelection,
}

impl RegionEditor {
    pub fn new(config: EditorConfig) -> Self {
        Self {
            config,
            surface: None,
            selection: CropSelection::default(),
        }
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn surface(&self) -> Option<&DisplaySurface> {
        self.surface.as_ref()
    }

    pub fn has_frame(&self) -> bool {
        self.surface.is_some()
    }

    /// Current selection in display pixels.
    pub fn region(&self) -> Option<DisplayRect> {
        self.surface.map(|_| self.selection.region)
    }

    pub fn state(&self) -> DragState {
        self.selection.state
    }

    pub fn is_dragging(&self) -> bool {
        self.selection.is_dragging()
    }

    /// Take a new frame: size the surface for it and select the full frame.
    ///
    /// Frames without pixels are ignored and leave the editor as it was.
    pub fn capture_frame<F: FrameSource + ?Sized>(&mut self, frame: &F) -> bool {
        let (width, height) = frame.dimensions();
        let Some(surface) = DisplaySurface::fit(
            width,
            height,
            self.config.max_preview_width,
            self.config.max_preview_height,
        ) else {
            log::warn!("Ignoring captured frame with size {width}x{height}");
            return false;
        };

        log::debug!(
            "Captured {width}x{height} frame, preview {}x{} at scale {:.4}",
            surface.display_width(),
            surface.display_height(),
            surface.scale()
        );
        self.surface = Some(surface);
        self.reset();
        true
    }

    /// Select the full surface.
    pub fn reset(&mut self) {
        if let Some(surface) = self.surface {
            self.selection.reset(surface.display_size());
        }
    }

    /// What a press at `(x, y)` would grab.
    pub fn hit_test(&self, x: f32, y: f32) -> DragHandle {
        if self.surface.is_none() {
            return DragHandle::None;
        }
        overlay::hit_test(
            self.selection.region,
            (x, y),
            self.config.handle_size,
            self.config.edge_threshold,
        )
    }

    /// Pointer pressed: grab a handle, the interior, or start a new selection.
    pub fn on_pointer_down(&mut self, x: f32, y: f32) -> DragHandle {
        let Some(surface) = self.surface else {
            return DragHandle::None;
        };
        let (width, height) = surface.display_size();
        let (x, y) = (x.clamp(0.0, width), y.clamp(0.0, height));

        let handle = self.hit_test(x, y);
        self.selection.start_handle_drag(handle, x, y);
        log::trace!("Crop drag start at ({x}, {y}) with {handle:?}");
        handle
    }

    /// Pointer moved: update the drag in progress, or just report the cursor
    /// for what is under the pointer.
    pub fn on_pointer_move(&mut self, x: f32, y: f32) -> CursorIcon {
        let Some(surface) = self.surface else {
            return CursorIcon::default();
        };
        if self.selection.is_dragging() {
            self.selection
                .update_drag(x, y, surface.display_size(), self.config.min_region_size);
            return overlay::cursor_for_handle(self.selection.drag_handle());
        }
        overlay::cursor_for_handle(self.hit_test(x, y))
    }

    /// Pointer released: finish the drag and return the updated field values.
    pub fn on_pointer_up(&mut self) -> Option<CropRegion> {
        if !self.selection.is_dragging() {
            return None;
        }
        self.selection.end_drag();
        let fields = self.source_fields();
        if let Some(fields) = fields {
            log::debug!("Crop selection {fields}");
        }
        fields
    }

    /// Pointer left the surface; same as releasing it.
    pub fn on_pointer_leave(&mut self) -> Option<CropRegion> {
        self.on_pointer_up()
    }

    /// Selection in native pixels as shown in the numeric fields.
    pub fn source_fields(&self) -> Option<CropRegion> {
        self.surface
            .map(|surface| surface.to_source(self.selection.region))
    }

    /// Selection in native pixels ready for the encoder: even width and height.
    pub fn to_source_rect(&self) -> Option<CropRegion> {
        self.source_fields().map(CropRegion::to_even)
    }

    /// Replace the selection with values typed in native pixels.
    ///
    /// Values are taken as they are; only the frame must be known.
    pub fn set_from_manual_input(&mut self, region: CropRegion) -> bool {
        let Some(surface) = self.surface else {
            return false;
        };
        self.selection.region = surface.to_display(region);
        self.selection.end_drag();
        true
    }

    /// `x=.. y=.. w=.. h=..` in native pixels.
    pub fn params_label(&self) -> Option<String> {
        self.source_fields().map(|region| region.to_string())
    }

    /// Geometry to redraw the selection with.
    pub fn overlay(&self) -> Option<Overlay> {
        self.surface.map(|surface| {
            Overlay::new(
                surface.display_size(),
                self.selection.region,
                self.config.handle_size,
                self.config.show_grid,
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Editor whose preview is exactly `width` x `height` at scale 1.
    fn editor_with_surface(width: u32, height: u32) -> RegionEditor {
        let mut editor = RegionEditor::default();
        assert!(editor.capture_frame(&(width, height)));
        editor
    }

    fn drag(editor: &mut RegionEditor, from: (f32, f32), to: (f32, f32)) -> Option<CropRegion> {
        editor.on_pointer_down(from.0, from.1);
        editor.on_pointer_move(to.0, to.1);
        editor.on_pointer_up()
    }

    #[test]
    fn nothing_happens_without_a_frame() {
        let mut editor = RegionEditor::default();
        assert_eq!(editor.on_pointer_down(10.0, 10.0), DragHandle::None);
        assert_eq!(editor.on_pointer_move(20.0, 20.0), CursorIcon::Crosshair);
        assert_eq!(editor.on_pointer_up(), None);
        assert!(!editor.set_from_manual_input(CropRegion::new(0, 0, 10, 10)));
        assert_eq!(editor.to_source_rect(), None);
        assert_eq!(editor.region(), None);
        assert_eq!(editor.overlay(), None);
        assert!(!editor.capture_frame(&(0, 0)));
    }

    #[test]
    fn capture_resets_to_full_frame() {
        let mut editor = RegionEditor::default();
        editor.capture_frame(&(1920, 1080));
        let surface = *editor.surface().unwrap();
        assert_eq!(surface.display_size(), (800.0, 450.0));
        assert_eq!(editor.region(), Some(surface.full_rect()));
        assert_eq!(editor.to_source_rect(), Some(CropRegion::new(0, 0, 1920, 1080)));
    }

    #[test]
    fn reset_after_edit_spans_surface() {
        let mut editor = editor_with_surface(200, 150);
        drag(&mut editor, (10.0, 10.0), (100.0, 80.0));
        editor.reset();
        assert_eq!(editor.region(), Some(DisplayRect::new(0.0, 0.0, 200.0, 150.0)));
    }

    #[test]
    fn new_capture_discards_previous_region() {
        let mut editor = editor_with_surface(200, 150);
        drag(&mut editor, (10.0, 10.0), (100.0, 80.0));
        editor.capture_frame(&(320, 240));
        assert_eq!(editor.region(), Some(DisplayRect::new(0.0, 0.0, 320.0, 240.0)));
    }

    #[test]
    fn create_drag_outside_selection() {
        let mut editor = editor_with_surface(200, 150);
        // Shrink first so the press lands outside the selection.
        editor.set_from_manual_input(CropRegion::new(150, 100, 40, 40));
        let fields = drag(&mut editor, (10.0, 10.0), (100.0, 80.0));
        assert_eq!(editor.region(), Some(DisplayRect::new(10.0, 10.0, 90.0, 70.0)));
        assert_eq!(fields, Some(CropRegion::new(10, 10, 90, 70)));
    }

    #[test]
    fn bottom_right_resize_is_clamped() {
        let mut editor = editor_with_surface(200, 150);
        editor.set_from_manual_input(CropRegion::new(10, 10, 90, 70));
        assert_eq!(editor.on_pointer_down(100.0, 80.0), DragHandle::BottomRight);
        editor.on_pointer_move(120.0, -120.0);
        editor.on_pointer_up();

        let rect = editor.region().unwrap();
        assert!(rect.height >= 10.0);
        assert!(rect.bottom() <= 150.0);
        assert!(rect.right() <= 200.0);
        assert_eq!(rect, DisplayRect::new(10.0, 10.0, 110.0, 10.0));
    }

    #[test]
    fn move_from_interior() {
        let mut editor = editor_with_surface(200, 150);
        editor.set_from_manual_input(CropRegion::new(20, 20, 60, 60));
        assert_eq!(editor.on_pointer_down(50.0, 50.0), DragHandle::Move);
        assert_eq!(editor.on_pointer_move(60.0, 70.0), CursorIcon::Move);
        editor.on_pointer_leave();
        assert_eq!(editor.region(), Some(DisplayRect::new(30.0, 40.0, 60.0, 60.0)));
        assert!(!editor.is_dragging());
    }

    #[test]
    fn idle_move_only_reports_cursor() {
        let mut editor = editor_with_surface(200, 150);
        editor.set_from_manual_input(CropRegion::new(20, 20, 60, 60));
        assert_eq!(editor.on_pointer_move(20.0, 20.0), CursorIcon::ResizeNwse);
        assert_eq!(editor.on_pointer_move(50.0, 20.0), CursorIcon::ResizeNs);
        assert_eq!(editor.on_pointer_move(150.0, 120.0), CursorIcon::Crosshair);
        assert_eq!(editor.region(), Some(DisplayRect::new(20.0, 20.0, 60.0, 60.0)));
        assert_eq!(editor.state(), DragState::Idle);
    }

    #[cfg(feature = "image")]
    #[test]
    fn captures_decoded_image() {
        let frame = image::DynamicImage::new_rgb8(1920, 1080);
        let mut editor = RegionEditor::default();
        assert!(editor.capture_frame(&frame));
        let surface = editor.surface().unwrap();
        assert_eq!(surface.native_size(), (1920, 1080));
        assert_eq!(surface.display_size(), (800.0, 450.0));
        assert_eq!(editor.to_source_rect(), Some(CropRegion::new(0, 0, 1920, 1080)));
    }

    #[test]
    fn half_scale_maps_to_double_size() {
        let mut editor = RegionEditor::default();
        editor.capture_frame(&(1600, 900));
        assert_eq!(editor.surface().unwrap().scale(), 0.5);
        editor.set_from_manual_input(CropRegion::new(400, 400, 100, 100));
        drag(&mut editor, (10.0, 10.0), (101.0, 81.0));
        assert_eq!(editor.region(), Some(DisplayRect::new(10.0, 10.0, 91.0, 71.0)));
        assert_eq!(editor.to_source_rect(), Some(CropRegion::new(20, 20, 182, 142)));
    }

    #[test]
    fn odd_native_width_is_made_even() {
        let mut editor = RegionEditor::default();
        editor.capture_frame(&(2400, 1350));
        let scale = editor.surface().unwrap().scale();
        assert!((scale - 1.0 / 3.0).abs() < 1e-9);
        editor.set_from_manual_input(CropRegion::new(0, 0, 30, 30));
        drag(&mut editor, (100.0, 100.0), (131.0, 150.0));

        assert_eq!(editor.source_fields(), Some(CropRegion::new(300, 300, 93, 150)));
        assert_eq!(editor.to_source_rect(), Some(CropRegion::new(300, 300, 92, 150)));
    }

    #[test]
    fn manual_input_round_trips_through_scale() {
        let mut editor = RegionEditor::default();
        editor.capture_frame(&(1600, 900));
        editor.set_from_manual_input(CropRegion::new(100, 50, 400, 300));
        assert_eq!(editor.region(), Some(DisplayRect::new(50.0, 25.0, 200.0, 150.0)));
        assert_eq!(editor.params_label().as_deref(), Some("x=100 y=50 w=400 h=300"));
    }

    #[test]
    fn overlay_follows_config() {
        let config = EditorConfig {
            show_grid: true,
            ..EditorConfig::default()
        };
        let mut editor = RegionEditor::new(config);
        editor.capture_frame(&(300, 300));
        let overlay = editor.overlay().unwrap();
        assert_eq!(overlay.border, DisplayRect::new(0.0, 0.0, 300.0, 300.0));
        assert_eq!(overlay.grid.len(), 4);
        assert_eq!(overlay.handle_size, editor.config().handle_size);
    }
}
