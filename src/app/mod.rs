// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/mod.rs
//
// Crop session: state, messages, update loop and editor view state.

pub mod message;
pub mod model;
pub mod update;
pub mod view;

pub use message::EditorMessage;
pub use model::CropSession;
pub use update::{Outcome, update};
