// SPDX-License-Identifier: GPL-3.0-or-later
// src/constant.rs
//
// Constants that should not be changed by the user.

/// Seconds per hour (timecode arithmetic).
pub const SECONDS_PER_HOUR: f64 = 3600.0;

/// Seconds per minute (timecode arithmetic).
pub const SECONDS_PER_MINUTE: f64 = 60.0;

/// Duration granularity in minutes (durations are multiples of this).
pub const DURATION_STEP_MINUTES: f64 = 0.5;

/// Canonical timecode for zero or unparseable input.
pub const ZERO_TIMECODE: &str = "00:00:00";

/// Default maximum preview width in display pixels.
pub const PREVIEW_MAX_WIDTH: f32 = 800.0;

/// Default maximum preview height in display pixels.
pub const PREVIEW_MAX_HEIGHT: f32 = 450.0;

/// Default half-extent of the corner handle hit-box in display pixels.
pub const HANDLE_SIZE: f32 = 8.0;

/// Default thickness of the edge hit-band in display pixels.
pub const EDGE_THRESHOLD: f32 = 5.0;

/// Default minimum width/height of a resized region in display pixels.
pub const MIN_REGION_SIZE: f32 = 10.0;

/// Config directory name.
pub const CONFIG_DIR: &str = "clipcrop";

/// Config file name inside [`CONFIG_DIR`].
pub const CONFIG_FILE: &str = "config.json";
