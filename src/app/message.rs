// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/message.rs
//
// Editor messages: pointer events, user actions, and media signals.

use std::path::PathBuf;

use crate::domain::operations::crop::CropRegion;

#[derive(Debug, Clone, PartialEq)]
pub enum EditorMessage {
    // Media.
    SelectVideo(PathBuf),
    MediaLoaded {
        duration: f64,
    },
    CaptureFrame {
        width: u32,
        height: u32,
    },

    // Pointer, in display coordinates.
    PointerDown {
        x: f32,
        y: f32,
    },
    PointerMove {
        x: f32,
        y: f32,
    },
    PointerUp,
    PointerLeave,

    // Crop fields.
    ManualInput(CropRegion),
    ResetCrop,

    // Time range.
    SetStartText(String),
    SetEndText(String),
    MarkStart,
    MarkEnd,

    // Playback position.
    Seek(f64),
    SeekFraction(f64),
    Step(f64),

    // Apply.
    ApplyCrop,
}
