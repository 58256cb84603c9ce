// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Call dispatcher: parses a wire request into a typed method call and routes
// it to the native function surface.
//
// Method routing is an enumerated tagged union rather than string lookup so
// that a request reaching the surface has compile-time-checked argument
// structure.  Argument validation happens entirely in `MethodCall::parse` —
// the surface is never invoked for a request that fails validation.

use std::sync::Arc;

use tracing::{debug, instrument};

use greetbridge_core::{BridgeError, MethodName, Request, Response, Result};

use crate::encode;
use crate::surface::NativeSurface;

/// Arguments for `sayHi`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SayHiArgs {
    pub name: String,
}

/// Arguments for `sayHiWithDuration`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SayHiWithDurationArgs {
    pub name: String,
    pub duration: String,
}

/// A wire request in typed form: method plus validated arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MethodCall {
    SayHi(SayHiArgs),
    SayHiWithDuration(SayHiWithDurationArgs),
}

impl MethodCall {
    /// Parse and validate a wire request.
    ///
    /// An unknown method yields `NotImplemented`; a required argument that
    /// is absent, null, or not a string yields `BadArguments` for the
    /// resolved method.
    pub fn parse(request: &Request) -> Result<Self> {
        let Some(method) = MethodName::from_method(&request.method) else {
            return Err(BridgeError::NotImplemented(request.method.clone()));
        };

        let missing = || BridgeError::BadArguments { method };

        match method {
            MethodName::SayHi => {
                let name = request.required_str("name").ok_or_else(missing)?;
                Ok(Self::SayHi(SayHiArgs { name: name.into() }))
            }
            MethodName::SayHiWithDuration => {
                let name = request.required_str("name").ok_or_else(missing)?;
                let duration = request.required_str("duration").ok_or_else(missing)?;
                Ok(Self::SayHiWithDuration(SayHiWithDurationArgs {
                    name: name.into(),
                    duration: duration.into(),
                }))
            }
        }
    }

    /// Which enumerated method this call targets.
    pub fn method(&self) -> MethodName {
        match self {
            Self::SayHi(_) => MethodName::SayHi,
            Self::SayHiWithDuration(_) => MethodName::SayHiWithDuration,
        }
    }
}

/// Routes validated calls to the native surface and encodes the outcome.
///
/// Stateless apart from the surface handle; dispatch is idempotent from the
/// caller's perspective when the surface is deterministic.
pub struct Dispatcher {
    surface: Arc<dyn NativeSurface>,
}

impl Dispatcher {
    pub fn new(surface: Arc<dyn NativeSurface>) -> Self {
        Self { surface }
    }

    /// Handle one wire request end to end.
    ///
    /// Always produces a response envelope — parse errors and native
    /// failures become failure envelopes, never panics, so a bad call can
    /// never take the binding down.
    #[instrument(skip_all, fields(method = %request.method))]
    pub fn dispatch(&self, request: &Request) -> Response {
        encode::encode(self.run(request))
    }

    fn run(&self, request: &Request) -> Result<String> {
        let call = MethodCall::parse(request)?;
        let method = call.method();
        debug!(%method, "invoking native surface");

        let outcome = match &call {
            MethodCall::SayHi(args) => self.surface.say_hi(&args.name),
            MethodCall::SayHiWithDuration(args) => self
                .surface
                .say_hi_with_duration(&args.name, &args.duration),
        };

        outcome.map_err(|e| BridgeError::NativeCall {
            method,
            message: e.into_message(),
        })
    }
}
