// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how search results get their numbers.
//!
//! Field weights do the heavy lifting. Title matches dominate, then codes,
//! keywords and finally the excerpt. Ranking is just "higher score first,
//! earlier in the index on a tie".

mod core;
pub mod ranking;

pub use core::*;
