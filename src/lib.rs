// SPDX-License-Identifier: GPL-3.0-or-later
// src/lib.rs
//
// Timecode arithmetic and interactive crop-region editing for a video
// cutting front-end.

pub mod app;
pub mod config;
pub mod constant;
pub mod domain;
pub mod error;

pub use app::view::crop::{DisplayRect, DisplaySurface, DragHandle, FrameSource, RegionEditor};
pub use app::{CropSession, EditorMessage, Outcome, update};
pub use config::EditorConfig;
pub use domain::operations::crop::{CropRegion, CropRequest};
pub use domain::time_range::{Playhead, TimeRange};
pub use error::ApplyCropError;
