// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime bindings.
//!
//! The native CLI uses the library directly. In the browser the same engine
//! and controller run as WASM behind a small JS glue script.

#[cfg(feature = "wasm")]
pub mod wasm;
