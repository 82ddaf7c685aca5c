// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/crop/mod.rs
//
// Crop selection module: editor, overlay geometry, selection state and
// preview surface.
// Inspired by cosmic-viewer (https://codeberg.org/bhh by Bryan Hyland

mod editor;
mod overlay;
mod selection;
mod surface;

pub use editor::RegionEditor;
pub use overlay::{CursorIcon, Overlay, cursor_for_handle, handle_points, hit_test};
pub use selection::{CropSelection, DisplayRect, DragHandle, DragState};
pub use surface::{DisplaySurface, FrameSource};
