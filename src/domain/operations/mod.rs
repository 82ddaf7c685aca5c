// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/operations/mod.rs
//
// Media operations handed to the backend.

pub mod crop;
