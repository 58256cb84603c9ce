// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Greetbridge — wire data model and error taxonomy shared across all crates.

pub mod config;
pub mod error;
pub mod types;

pub use config::{BridgeConfig, DEFAULT_CHANNEL};
pub use error::{BridgeError, Result};
pub use types::*;
