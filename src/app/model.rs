// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/model.rs
//
// Crop session state: one instance per editing session, owned by the host.

use std::path::{Path, PathBuf};

use crate::app::view::crop::RegionEditor;
use crate::config::EditorConfig;
use crate::domain::operations::crop::CropRequest;
use crate::domain::time_range::{Playhead, TimeRange};
use crate::error::ApplyCropError;

#[derive(Debug, Clone, Default)]
pub struct CropSession {
    // Media.
    pub video_path: Option<PathBuf>,
    pub playhead: Playhead,

    // Tools.
    pub editor: RegionEditor,
    pub range: TimeRange,

    // UI state.
    pub last_error: Option<String>,
}

impl CropSession {
    pub fn new(config: EditorConfig) -> Self {
        Self {
            editor: RegionEditor::new(config),
            ..Self::default()
        }
    }

    pub fn set_error<S: Into<String>>(&mut self, msg: S) {
        self.last_error = Some(msg.into());
    }

    pub fn clear_error(&mut self) {
        self.last_error = None;
    }

    /// Switch to another video. Markers wait for [`Self::media_loaded`].
    pub fn select_video<P: AsRef<Path>>(&mut self, path: P) {
        let path = path.as_ref();
        log::info!("Selected video {}", path.display());
        self.video_path = Some(path.to_path_buf());
        self.playhead = Playhead::default();
        self.range = TimeRange::default();
        self.clear_error();
    }

    /// Media metadata arrived: markers default to the whole video.
    pub fn media_loaded(&mut self, duration: f64) {
        self.playhead = Playhead::new(duration);
        self.range = TimeRange::full(self.playhead.duration());
        log::debug!("Media duration {}", self.range.end_text());
    }

    /// Use the current playback position as the start marker.
    pub fn mark_start(&mut self) {
        self.range.mark_start(self.playhead.position());
    }

    /// Use the current playback position as the end marker.
    pub fn mark_end(&mut self) {
        self.range.mark_end(self.playhead.position());
    }

    /// Build the backend request for the current selection and markers.
    ///
    /// Refusals are recorded in `last_error`; nothing else changes.
    pub fn apply_crop(&mut self) -> Result<CropRequest, ApplyCropError> {
        match self.build_request() {
            Ok(request) => {
                self.clear_error();
                log::info!(
                    "Crop {} from {} to {} on {}",
                    request.region(),
                    self.range.start_text(),
                    self.range.end_text(),
                    request.video_path.display()
                );
                Ok(request)
            }
            Err(e) => {
                log::warn!("Crop refused: {e}");
                self.set_error(e.to_string());
                Err(e)
            }
        }
    }

    fn build_request(&self) -> Result<CropRequest, ApplyCropError> {
        let video_path = self.video_path.as_ref().ok_or(ApplyCropError::NoVideo)?;
        let region = self
            .editor
            .to_source_rect()
            .ok_or(ApplyCropError::NoFrame)?;
        if !region.is_valid() {
            return Err(ApplyCropError::EmptyRegion);
        }
        Ok(CropRequest::new(video_path.clone(), region, self.range))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::operations::crop::CropRegion;
    use crate::domain::timecode;

    fn session_with_frame() -> CropSession {
        let mut session = CropSession::default();
        session.select_video("uploads/clip.mp4");
        session.media_loaded(90.0);
        session.editor.capture_frame(&(1600, 900));
        session
    }

    #[test]
    fn refuses_without_video() {
        let mut session = CropSession::default();
        session.editor.capture_frame(&(640, 360));
        assert_eq!(session.apply_crop(), Err(ApplyCropError::NoVideo));
        assert!(session.last_error.is_some());
    }

    #[test]
    fn refuses_without_frame() {
        let mut session = CropSession::default();
        session.select_video("a.mp4");
        assert_eq!(session.apply_crop(), Err(ApplyCropError::NoFrame));
    }

    #[test]
    fn refuses_collapsed_region_and_keeps_it() {
        let mut session = session_with_frame();
        session.editor.set_from_manual_input(CropRegion::new(10, 10, 0, 40));
        let before = session.editor.region();
        assert_eq!(session.apply_crop(), Err(ApplyCropError::EmptyRegion));
        assert_eq!(session.editor.region(), before);
    }

    #[test]
    fn full_frame_request_uses_whole_video() {
        let mut session = session_with_frame();
        let request = session.apply_crop().unwrap();
        assert_eq!(request.region(), CropRegion::new(0, 0, 1600, 900));
        assert_eq!(request.start_time, 0.0);
        assert_eq!(request.end_time, 90.0);
        assert_eq!(request.video_path, PathBuf::from("uploads/clip.mp4"));
        assert!(session.last_error.is_none());
    }

    #[test]
    fn markers_follow_playhead() {
        let mut session = session_with_frame();
        session.playhead.seek(12.5);
        session.mark_start();
        session.playhead.step(30.0);
        session.mark_end();
        assert_eq!(session.range, TimeRange::new(12.0, 42.0));
        assert_eq!(session.range.duration_minutes(), 0.5);
    }

    #[test]
    fn request_sends_the_times_shown() {
        let mut session = CropSession::default();
        session.select_video("uploads/clip.mp4");
        session.media_loaded(90.7);
        session.editor.capture_frame(&(640, 360));
        session.playhead.seek(12.6);
        session.mark_start();

        let request = session.apply_crop().unwrap();
        assert_eq!(session.range.start_text(), "00:00:12");
        assert_eq!(session.range.end_text(), "00:01:30");
        assert_eq!(request.start_time, timecode::parse(&session.range.start_text()));
        assert_eq!(request.end_time, timecode::parse(&session.range.end_text()));
        assert_eq!((request.start_time, request.end_time), (12.0, 90.0));
    }

    #[test]
    fn selecting_video_clears_markers() {
        let mut session = session_with_frame();
        session.select_video("other.mp4");
        assert_eq!(session.range, TimeRange::default());
        assert_eq!(session.playhead.duration(), 0.0);
    }
}
