// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/mod.rs
//
// View-side state driven by pointer input.

pub mod crop;
