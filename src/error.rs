// SPDX-License-Identifier: GPL-3.0-or-later
// src/error.rs
//
// Reasons an apply-crop request is refused.

use thiserror::Error;

/// Precondition that was not met when applying a crop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ApplyCropError {
    #[error("Select a video before applying a crop")]
    NoVideo,
    #[error("Capture a frame before applying a crop")]
    NoFrame,
    #[error("Select a crop region first")]
    EmptyRegion,
}
