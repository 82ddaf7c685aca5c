// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/update.rs
//
// Apply an editor message to the session and tell the host what to refresh.

use crate::app::message::EditorMessage;
use crate::app::model::CropSession;
use crate::app::view::crop::CursorIcon;
use crate::domain::operations::crop::{CropRegion, CropRequest};
use crate::error::ApplyCropError;

/// What the host should do after a message was handled.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Nothing visible changed.
    None,
    /// Selection changed; redraw the overlay.
    Redraw,
    /// Pointer is hovering; show this cursor.
    Cursor(CursorIcon),
    /// Selection settled; redraw and refresh the numeric fields.
    Fields(CropRegion),
    /// Time markers changed; refresh the start/end fields.
    Markers,
    /// Crop accepted; send this request to the backend.
    Request(CropRequest),
    /// Crop refused; show the message.
    Rejected(ApplyCropError),
}

pub fn update(session: &mut CropSession, message: EditorMessage) -> Outcome {
    match message {
        EditorMessage::SelectVideo(path) => {
            session.select_video(path);
            Outcome::Markers
        }
        EditorMessage::MediaLoaded { duration } => {
            session.media_loaded(duration);
            Outcome::Markers
        }
        EditorMessage::CaptureFrame { width, height } => {
            if session.editor.capture_frame(&(width, height)) {
                fields_or_none(session)
            } else {
                Outcome::None
            }
        }

        EditorMessage::PointerDown { x, y } => {
            if !session.editor.has_frame() {
                return Outcome::None;
            }
            session.editor.on_pointer_down(x, y);
            Outcome::Redraw
        }
        EditorMessage::PointerMove { x, y } => {
            let dragging = session.editor.is_dragging();
            let cursor = session.editor.on_pointer_move(x, y);
            if dragging {
                Outcome::Redraw
            } else {
                Outcome::Cursor(cursor)
            }
        }
        EditorMessage::PointerUp => session
            .editor
            .on_pointer_up()
            .map_or(Outcome::None, Outcome::Fields),
        EditorMessage::PointerLeave => session
            .editor
            .on_pointer_leave()
            .map_or(Outcome::None, Outcome::Fields),

        EditorMessage::ManualInput(region) => {
            if session.editor.set_from_manual_input(region) {
                Outcome::Redraw
            } else {
                Outcome::None
            }
        }
        EditorMessage::ResetCrop => {
            session.editor.reset();
            fields_or_none(session)
        }

        EditorMessage::SetStartText(text) => {
            session.range.set_start_text(&text);
            Outcome::Markers
        }
        EditorMessage::SetEndText(text) => {
            session.range.set_end_text(&text);
            Outcome::Markers
        }
        EditorMessage::MarkStart => {
            session.mark_start();
            Outcome::Markers
        }
        EditorMessage::MarkEnd => {
            session.mark_end();
            Outcome::Markers
        }

        EditorMessage::Seek(seconds) => {
            session.playhead.seek(seconds);
            Outcome::None
        }
        EditorMessage::SeekFraction(fraction) => {
            session.playhead.seek_fraction(fraction);
            Outcome::None
        }
        EditorMessage::Step(delta) => {
            session.playhead.step(delta);
            Outcome::None
        }

        EditorMessage::ApplyCrop => match session.apply_crop() {
            Ok(request) => Outcome::Request(request),
            Err(e) => Outcome::Rejected(e),
        },
    }
}

fn fields_or_none(session: &CropSession) -> Outcome {
    session
        .editor
        .source_fields()
        .map_or(Outcome::None, Outcome::Fields)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::time_range::TimeRange;

    fn run(session: &mut CropSession, messages: Vec<EditorMessage>) -> Vec<Outcome> {
        messages
            .into_iter()
            .map(|message| update(session, message))
            .collect()
    }

    #[test]
    fn pointer_without_frame_is_ignored() {
        let mut session = CropSession::default();
        let outcomes = run(
            &mut session,
            vec![
                EditorMessage::PointerDown { x: 1.0, y: 1.0 },
                EditorMessage::PointerUp,
                EditorMessage::ManualInput(CropRegion::new(0, 0, 5, 5)),
                EditorMessage::ResetCrop,
            ],
        );
        assert!(outcomes.iter().all(|o| *o == Outcome::None));
    }

    #[test]
    fn full_cycle_produces_request() {
        let mut session = CropSession::default();
        let outcomes = run(
            &mut session,
            vec![
                EditorMessage::SelectVideo("uploads/talk.mp4".into()),
                EditorMessage::MediaLoaded { duration: 600.0 },
                EditorMessage::CaptureFrame {
                    width: 400,
                    height: 300,
                },
                EditorMessage::ManualInput(CropRegion::new(300, 250, 20, 20)),
                EditorMessage::PointerDown { x: 10.0, y: 10.0 },
                EditorMessage::PointerMove { x: 101.0, y: 81.0 },
                EditorMessage::PointerUp,
                EditorMessage::SetStartText("00:01:00".into()),
                EditorMessage::SetEndText("2:30".into()),
                EditorMessage::ApplyCrop,
            ],
        );

        assert_eq!(
            outcomes[2],
            Outcome::Fields(CropRegion::new(0, 0, 400, 300))
        );
        assert_eq!(outcomes[5], Outcome::Redraw);
        assert_eq!(outcomes[6], Outcome::Fields(CropRegion::new(10, 10, 91, 71)));
        assert_eq!(session.range, TimeRange::new(60.0, 150.0));

        let Outcome::Request(request) = &outcomes[9] else {
            panic!("expected a request, got {:?}", outcomes[9]);
        };
        assert_eq!(request.region(), CropRegion::new(10, 10, 90, 70));
        assert_eq!(request.start_time, 60.0);
        assert_eq!(request.end_time, 150.0);
    }

    #[test]
    fn hover_reports_cursor() {
        let mut session = CropSession::default();
        update(
            &mut session,
            EditorMessage::CaptureFrame {
                width: 200,
                height: 150,
            },
        );
        assert_eq!(
            update(&mut session, EditorMessage::PointerMove { x: 100.0, y: 75.0 }),
            Outcome::Cursor(CursorIcon::Move)
        );
    }

    #[test]
    fn apply_without_video_is_rejected() {
        let mut session = CropSession::default();
        assert_eq!(
            update(&mut session, EditorMessage::ApplyCrop),
            Outcome::Rejected(ApplyCropError::NoVideo)
        );
    }

    #[test]
    fn markers_from_playhead() {
        let mut session = CropSession::default();
        run(
            &mut session,
            vec![
                EditorMessage::MediaLoaded { duration: 100.0 },
                EditorMessage::SeekFraction(0.1),
                EditorMessage::MarkStart,
                EditorMessage::Step(45.8),
                EditorMessage::MarkEnd,
            ],
        );
        assert_eq!(session.range, TimeRange::new(10.0, 55.0));
        assert_eq!(session.range.end_text(), "00:00:55");
    }
}
