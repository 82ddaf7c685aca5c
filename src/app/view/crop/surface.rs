// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/crop/surface.rs
//
// Scaled preview surface for one captured frame, and the mapping between
// preview (display) coordinates and the frame's native pixels.

use crate::app::view::crop::selection::DisplayRect;
use crate::domain::operations::crop::CropRegion;

/// Anything a frame can be captured from: only its native size matters here.
pub trait FrameSource {
    /// Native `(width, height)` in pixels.
    fn dimensions(&self) -> (u32, u32);
}

impl FrameSource for (u32, u32) {
    fn dimensions(&self) -> (u32, u32) {
        *self
    }
}

#[cfg(feature = "image")]
impl FrameSource for image::DynamicImage {
    fn dimensions(&self) -> (u32, u32) {
        image::GenericImageView::dimensions(self)
    }
}

/// Preview surface the frame is drawn on, scaled down to fit a maximum box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplaySurface {
    native_width: u32,
    native_height: u32,
    scale: f64,
}

impl DisplaySurface {
    /// Fit a `native_width` x `native_height` frame into `max_width` x
    /// `max_height`, never scaling up. Returns `None` for an empty frame.
    pub fn fit(
        native_width: u32,
        native_height: u32,
        max_width: f32,
        max_height: f32,
    ) -> Option<Self> {
        if native_width == 0 || native_height == 0 {
            return None;
        }
        let scale_x = f64::from(max_width) / f64::from(native_width);
        let scale_y = f64::from(max_height) / f64::from(native_height);
        let scale = scale_x.min(scale_y).min(1.0);
        if !(scale.is_finite() && scale > 0.0) {
            return None;
        }
        Some(Self {
            native_width,
            native_height,
            scale,
        })
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn native_size(&self) -> (u32, u32) {
        (self.native_width, self.native_height)
    }

    #[allow(clippy::cast_possible_truncation)]
    pub fn display_width(&self) -> f32 {
        (f64::from(self.native_width) * self.scale) as f32
    }

    #[allow(clippy::cast_possible_truncation)]
    pub fn display_height(&self) -> f32 {
        (f64::from(self.native_height) * self.scale) as f32
    }

    pub fn display_size(&self) -> (f32, f32) {
        (self.display_width(), self.display_height())
    }

    /// The whole surface as a rectangle.
    pub fn full_rect(&self) -> DisplayRect {
        DisplayRect::new(0.0, 0.0, self.display_width(), self.display_height())
    }

    /// Map a display rectangle to native pixels, rounding to the nearest
    /// pixel and keeping the result inside the frame.
    pub fn to_source(&self, rect: DisplayRect) -> CropRegion {
        let x = self.to_native(rect.x, self.native_width);
        let y = self.to_native(rect.y, self.native_height);
        let width = self.to_native(rect.width, self.native_width - x);
        let height = self.to_native(rect.height, self.native_height - y);
        CropRegion::new(x, y, width, height)
    }

    /// Map a native-pixel region back onto the surface. No clamping.
    #[allow(clippy::cast_possible_truncation)]
    pub fn to_display(&self, region: CropRegion) -> DisplayRect {
        let scale = |v: u32| (f64::from(v) * self.scale) as f32;
        DisplayRect::new(
            scale(region.x),
            scale(region.y),
            scale(region.width),
            scale(region.height),
        )
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn to_native(&self, value: f32, limit: u32) -> u32 {
        let native = (f64::from(value) / self.scale).round();
        if native.is_nan() {
            return 0;
        }
        native.clamp(0.0, f64::from(limit)) as u32
    }
}
