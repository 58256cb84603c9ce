// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// The native function surface the bridge forwards to.
//
// The functions behind this trait are precompiled and externally
// implemented; the bridge treats them as opaque collaborators.  It never
// inspects an error beyond forwarding its message verbatim to the host.

use thiserror::Error;

/// Opaque failure reported by the native function surface.
///
/// The message is carried across the channel unmodified — host-side code may
/// display it but the bridge never interprets it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct NativeError(pub String);

impl NativeError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    /// Consume the error, yielding the raw native message.
    pub fn into_message(self) -> String {
        self.0
    }
}

/// Outcome of one native call.
pub type NativeResult = std::result::Result<String, NativeError>;

/// The pair of precompiled functions exposed through the channel.
///
/// Implementations must tolerate concurrent invocation: the bridge itself
/// serialises calls per binding, but makes no ordering guarantee across
/// bindings or embedder threads.
pub trait NativeSurface: Send + Sync {
    /// Produce a greeting for `name`.
    fn say_hi(&self, name: &str) -> NativeResult;

    /// Produce a greeting for `name` after simulating work for `duration`.
    /// The duration is an uninterpreted string; parsing it is the native
    /// side's concern and a parse failure surfaces as a native error.
    fn say_hi_with_duration(&self, name: &str, duration: &str) -> NativeResult;
}
