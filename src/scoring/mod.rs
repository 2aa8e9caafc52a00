// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring: how a record earns its number.
//!
//! Each descriptive keyword is classified against a record independently
//! (see [`classify_keyword`]). The record then goes down one of two paths.
//! Strict scoring needs every keyword to hit and the university to be pinned
//! down. Loose scoring is the fallback when at least one keyword hit. The
//! strict path starts where the loose path tops out, so a fully matched,
//! anchored record always beats a partial one.

mod core;

pub use core::*;
