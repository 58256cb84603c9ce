// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Wire-level types for the greetbridge method channel.
//
// A `Request` is what arrives off the channel: a method name plus a map of
// JSON-valued arguments.  A `Response` is the single reply envelope sent
// back.  Both sides of the channel agree on these shapes and on the failure
// code strings in [`codes`]; host-side code branches on the code string, so
// the strings are part of the wire contract and must never change.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Stable failure codes shared with host-side code.
pub mod codes {
    /// A required argument was missing, null, or not a string.
    pub const BAD_ARGUMENTS: &str = "BAD_ARGUMENTS";
    /// The native `sayHi` call returned an error.
    pub const SAY_HI_FAILED: &str = "SAY_HI_FAILED";
    /// The native `sayHiWithDuration` call returned an error.
    pub const SAY_HI_WITH_DURATION_FAILED: &str = "SAY_HI_WITH_DURATION_FAILED";
    /// A bridge-internal error leaked onto the wire.  Host-plane errors are
    /// normally surfaced as `Err` to the embedder, never encoded.
    pub const INTERNAL: &str = "INTERNAL";
}

/// The enumerated set of methods the bridge understands.
///
/// Crosses the wire only as its [`as_str`](Self::as_str) form inside
/// [`Request::method`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MethodName {
    SayHi,
    SayHiWithDuration,
}

impl MethodName {
    /// Resolve a wire method string to its enumerated form.
    /// Returns `None` for any method outside the supported set.
    pub fn from_method(method: &str) -> Option<Self> {
        match method {
            "sayHi" => Some(Self::SayHi),
            "sayHiWithDuration" => Some(Self::SayHiWithDuration),
            _ => None,
        }
    }

    /// The method name as it appears on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SayHi => "sayHi",
            Self::SayHiWithDuration => "sayHiWithDuration",
        }
    }

    /// Failure code reported when the native call behind this method errors.
    ///
    /// One code per method lets the host disambiguate the failure origin
    /// without parsing the message text.
    pub fn failure_code(&self) -> &'static str {
        match self {
            Self::SayHi => codes::SAY_HI_FAILED,
            Self::SayHiWithDuration => codes::SAY_HI_WITH_DURATION_FAILED,
        }
    }
}

impl std::fmt::Display for MethodName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single method-channel invocation as it arrives off the wire.
///
/// Constructed per call and discarded after producing a [`Response`]; no
/// state persists across requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Request {
    /// Wire method string.  Not pre-validated — unknown methods are rejected
    /// at dispatch time with a not-implemented reply, never an error.
    pub method: String,
    /// Argument map.  Values are JSON because method-channel codecs carry
    /// typed payloads; the bridge only consumes string-valued entries.
    #[serde(default)]
    pub arguments: HashMap<String, Value>,
}

impl Request {
    /// Create a request with no arguments.
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            arguments: HashMap::new(),
        }
    }

    /// Builder-style argument insertion.
    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.arguments.insert(key.into(), value.into());
        self
    }

    /// Look up a required string argument.
    ///
    /// Returns `None` when the key is absent, null, or holds a non-string
    /// value — all three are argument errors as far as dispatch is concerned.
    pub fn required_str(&self, key: &str) -> Option<&str> {
        self.arguments.get(key).and_then(Value::as_str)
    }
}

/// Reply envelope sent back over the channel.  Exactly one variant per call;
/// there are no partial or streaming responses.
///
/// `NotImplemented` is a distinct envelope rather than a failure code: the
/// host treats an unknown method as a no-op, not an error.  A
/// `BAD_ARGUMENTS` failure carries no message while a native failure carries
/// the native message verbatim; host code relies on that distinction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum Response {
    Success {
        payload: String,
    },
    #[serde(rename = "error")]
    Failure {
        code: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    NotImplemented,
}

impl Response {
    /// Success envelope carrying the native return value.
    pub fn success(payload: impl Into<String>) -> Self {
        Self::Success {
            payload: payload.into(),
        }
    }

    /// Failure envelope for a missing/null required argument.  No message.
    pub fn bad_arguments() -> Self {
        Self::Failure {
            code: codes::BAD_ARGUMENTS.to_string(),
            message: None,
        }
    }

    /// Failure envelope for a native call error, forwarding the native
    /// message verbatim under the method-specific code.
    pub fn native_failure(method: MethodName, message: impl Into<String>) -> Self {
        Self::Failure {
            code: method.failure_code().to_string(),
            message: Some(message.into()),
        }
    }
}
