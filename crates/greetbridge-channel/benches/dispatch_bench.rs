// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Criterion benchmarks for request parsing and end-to-end dispatch in the
// greetbridge-channel crate.

use std::sync::Arc;

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use greetbridge_channel::dispatch::{Dispatcher, MethodCall};
use greetbridge_channel::surface::{NativeResult, NativeSurface};
use greetbridge_core::Request;

struct FastGreeter;

impl NativeSurface for FastGreeter {
    fn say_hi(&self, name: &str) -> NativeResult {
        Ok(format!("Hi {name}!"))
    }

    fn say_hi_with_duration(&self, name: &str, _duration: &str) -> NativeResult {
        Ok(format!("Hi {name}!"))
    }
}

/// Benchmark parsing a request into its typed method call.
///
/// This is the argument-validation hot path every call pays before the
/// native surface is reached.
fn bench_parse(c: &mut Criterion) {
    let request = Request::new("sayHiWithDuration")
        .with_arg("name", "Alice")
        .with_arg("duration", "250ms");

    c.bench_function("method_call_parse", |b| {
        b.iter(|| {
            let call = MethodCall::parse(black_box(&request)).expect("parse failed");
            black_box(call);
        });
    });
}

/// Benchmark a full dispatch round trip against an in-process surface.
fn bench_dispatch(c: &mut Criterion) {
    let dispatcher = Dispatcher::new(Arc::new(FastGreeter));
    let request = Request::new("sayHi").with_arg("name", "Alice");

    c.bench_function("dispatch_say_hi", |b| {
        b.iter(|| {
            let response = dispatcher.dispatch(black_box(&request));
            black_box(response);
        });
    });
}

criterion_group!(benches, bench_parse, bench_dispatch);
criterion_main!(benches);
