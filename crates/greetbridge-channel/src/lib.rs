// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Greetbridge Channel — the bridge mechanics between a host application and
// the native function surface: request parsing and dispatch, result
// encoding, the JSON wire codec, and the attach/detach channel registry.
// The wire data model itself lives in `greetbridge-core`.

pub mod codec;
pub mod dispatch;
pub mod encode;
pub mod registry;
pub mod surface;

mod worker;

pub use dispatch::{Dispatcher, MethodCall, SayHiArgs, SayHiWithDurationArgs};
pub use registry::{ChannelHandle, ChannelRegistry};
pub use surface::{NativeError, NativeResult, NativeSurface};
