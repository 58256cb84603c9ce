// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Bridge configuration.

use serde::{Deserialize, Serialize};

/// Channel name both sides of the bridge agree on.  This string is the
/// wire-level contract: the host invokes on it, the plugin binds to it.
pub const DEFAULT_CHANNEL: &str = "greetbridge.dev/greetings";

/// Per-binding settings, fixed at attach time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BridgeConfig {
    /// Channel name the dispatcher binds to.
    pub channel_name: String,
    /// Run dispatch on a dedicated worker thread so the host's primary
    /// thread is never blocked by a native call.  The native functions are
    /// synchronous and short-lived, so this is a throughput choice, not a
    /// correctness requirement.
    pub background_queue: bool,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            channel_name: DEFAULT_CHANNEL.to_string(),
            background_queue: true,
        }
    }
}

impl BridgeConfig {
    /// Configuration that dispatches on the caller's thread.
    pub fn inline() -> Self {
        Self {
            background_queue: false,
            ..Self::default()
        }
    }
}
