// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/operations/crop.rs
//
// Crop operation domain model.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

use crate::domain::time_range::TimeRange;

/// Crop region in the source media's native pixel coordinates.
///
/// Pure domain model - represents a rectangular region to crop.
/// No UI concerns, just data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CropRegion {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl CropRegion {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Read the four numeric input fields (x, y, width, height).
    ///
    /// Fields that do not start with a non-negative integer read as 0.
    pub fn from_fields(fields: [&str; 4]) -> Self {
        let [x, y, w, h] = fields.map(parse_field);
        Self::new(x, y, w, h)
    }

    pub fn as_tuple(&self) -> (u32, u32, u32, u32) {
        (self.x, self.y, self.width, self.height)
    }

    /// Check if region has valid dimensions.
    pub fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Round width and height down to even numbers, as video encoders
    /// require for chroma-subsampled output.
    pub fn to_even(self) -> Self {
        Self {
            width: self.width & !1,
            height: self.height & !1,
            ..self
        }
    }
}

impl fmt::Display for CropRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "x={} y={} w={} h={}",
            self.x, self.y, self.width, self.height
        )
    }
}

/// Body of a crop-with-time request sent to the media backend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CropRequest {
    pub video_path: PathBuf,
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    /// Seconds from the start of the video.
    pub start_time: f64,
    /// Seconds from the start of the video.
    pub end_time: f64,
}

impl CropRequest {
    pub fn new(video_path: impl Into<PathBuf>, region: CropRegion, range: TimeRange) -> Self {
        Self {
            video_path: video_path.into(),
            x: region.x,
            y: region.y,
            width: region.width,
            height: region.height,
            start_time: range.start,
            end_time: range.end,
        }
    }

    pub fn region(&self) -> CropRegion {
        CropRegion::new(self.x, self.y, self.width, self.height)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

fn parse_field(text: &str) -> u32 {
    let text = text.trim();
    let end = text
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(text.len());
    // Overlong digit strings saturate rather than fall back to 0.
    match text[..end].parse::<u32>() {
        Ok(v) => v,
        Err(_) if end > 0 => u32::MAX,
        Err(_) => 0,
    }
}
