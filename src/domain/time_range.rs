// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/time_range.rs
//
// Start/end markers of a crop or cut, and the player position they are taken from.

use crate::domain::timecode;

/// Start and end of a clip in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TimeRange {
    pub start: f64,
    pub end: f64,
}

impl TimeRange {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Whole-media range `[0, duration]`, with the end as shown in its field.
    pub fn full(duration: f64) -> Self {
        Self::new(0.0, as_displayed(duration))
    }

    /// Build from the two timecode fields, tolerating malformed text.
    pub fn from_text(start: &str, end: &str) -> Self {
        Self::new(timecode::parse(start), timecode::parse(end))
    }

    pub fn set_start_text(&mut self, text: &str) {
        self.start = timecode::parse(text);
    }

    pub fn set_end_text(&mut self, text: &str) {
        self.end = timecode::parse(text);
    }

    /// Set the start marker from a player position, truncated to the
    /// whole second its field shows.
    pub fn mark_start(&mut self, seconds: f64) {
        self.start = as_displayed(seconds);
    }

    /// Set the end marker from a player position, truncated to the whole
    /// second its field shows.
    pub fn mark_end(&mut self, seconds: f64) {
        self.end = as_displayed(seconds);
    }

    pub fn start_text(&self) -> String {
        timecode::format(self.start)
    }

    pub fn end_text(&self) -> String {
        timecode::format(self.end)
    }

    /// Length in minutes, in half-minute steps. See [`timecode::duration`].
    pub fn duration_minutes(&self) -> f64 {
        timecode::duration_between(self.start, self.end)
    }
}

/// Playback position within a loaded media file.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Playhead {
    position: f64,
    duration: f64,
}

impl Playhead {
    pub fn new(duration: f64) -> Self {
        Self {
            position: 0.0,
            duration: sanitize(duration),
        }
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Jump to `seconds`, clamped to the media.
    pub fn seek(&mut self, seconds: f64) {
        self.position = sanitize(seconds).min(self.duration);
    }

    /// Move by `delta` seconds (negative steps back), clamped to the media.
    pub fn step(&mut self, delta: f64) {
        if delta.is_finite() {
            self.seek(self.position + delta);
        }
    }

    /// Jump to a fraction of the duration, as from a progress bar click.
    pub fn seek_fraction(&mut self, fraction: f64) {
        if fraction.is_finite() {
            self.seek(fraction.clamp(0.0, 1.0) * self.duration);
        }
    }

    /// Position as a fraction of the duration, for a progress bar fill.
    pub fn progress(&self) -> f64 {
        if self.duration > 0.0 {
            self.position / self.duration
        } else {
            0.0
        }
    }
}

/// Seconds read back from the `HH:MM:SS` text of `seconds`.
fn as_displayed(seconds: f64) -> f64 {
    timecode::parse(&timecode::format(seconds))
}

fn sanitize(seconds: f64) -> f64 {
    if seconds.is_finite() && seconds > 0.0 {
        seconds
    } else {
        0.0
    }
}
