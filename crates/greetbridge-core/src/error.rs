// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for greetbridge.

use thiserror::Error;

use crate::types::MethodName;

/// Top-level error type for all bridge operations.
///
/// The first three variants are wire-plane: they map one-to-one onto the
/// failure envelopes of the channel contract and are encoded into a
/// `Response` before they ever reach the embedder.  The remaining variants
/// are host-plane: they describe a broken binding rather than a failed call
/// and are returned as ordinary `Err` values.
#[derive(Debug, Error)]
pub enum BridgeError {
    // -- Wire plane --
    #[error("required argument missing for {method}")]
    BadArguments { method: MethodName },

    #[error("method '{0}' is not implemented")]
    NotImplemented(String),

    #[error("native {method} call failed: {message}")]
    NativeCall { method: MethodName, message: String },

    // -- Host plane --
    #[error("no dispatcher attached to channel '{0}'")]
    NotAttached(String),

    #[error("background worker for channel '{0}' is no longer running")]
    WorkerGone(String),

    #[error("codec error: {0}")]
    Codec(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, BridgeError>;
