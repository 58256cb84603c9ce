// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Result encoder: collapses a dispatch outcome into the single wire reply
// envelope.

use greetbridge_core::{BridgeError, Response, Result, codes};

/// Map a dispatch outcome onto the wire contract.
///
/// Wire-plane errors map onto their agreed envelopes: `BadArguments` to a
/// message-less `BAD_ARGUMENTS` failure, a native error to the
/// method-specific code with the native message verbatim, and an unknown
/// method to the not-implemented envelope.  Host-plane errors never reach
/// this function through `Dispatcher::dispatch`; the mapping is total anyway
/// and tags them `INTERNAL`.
pub fn encode(outcome: Result<String>) -> Response {
    match outcome {
        Ok(payload) => Response::success(payload),
        Err(BridgeError::BadArguments { .. }) => Response::bad_arguments(),
        Err(BridgeError::NotImplemented(_)) => Response::NotImplemented,
        Err(BridgeError::NativeCall { method, message }) => {
            Response::native_failure(method, message)
        }
        Err(other) => Response::Failure {
            code: codes::INTERNAL.to_string(),
            message: Some(other.to_string()),
        },
    }
}
