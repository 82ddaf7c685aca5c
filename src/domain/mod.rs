// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/mod.rs
//
// Pure domain types: timecodes, time ranges and crop operations.

pub mod operations;
pub mod time_range;
pub mod timecode;
