// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Greetbridge demo host.
//
// Entry point. Initialises logging, attaches the reference greeting surface
// to the default channel, drives a handful of calls (including the failure
// shapes), prints each reply envelope, and detaches.

mod greeter;

use std::sync::Arc;

use greetbridge_channel::{ChannelRegistry, codec};
use greetbridge_core::{BridgeConfig, Request};

use greeter::Greeter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("greetbridge host starting");

    let registry = ChannelRegistry::new();
    let config = BridgeConfig::default();
    let channel = config.channel_name.clone();

    let handle = match registry.attach(config, Arc::new(Greeter)) {
        Ok(handle) => handle,
        Err(e) => {
            tracing::error!(error = %e, "failed to attach channel");
            std::process::exit(1);
        }
    };

    let name = std::env::args().nth(1).unwrap_or_else(|| "world".to_string());

    let calls = [
        Request::new("sayHi").with_arg("name", name.as_str()),
        Request::new("sayHiWithDuration")
            .with_arg("name", name.as_str())
            .with_arg("duration", "250ms"),
        // Missing `duration`: replies BAD_ARGUMENTS.
        Request::new("sayHiWithDuration").with_arg("name", name.as_str()),
        // Unparseable duration: the native error message is forwarded.
        Request::new("sayHiWithDuration")
            .with_arg("name", name.as_str())
            .with_arg("duration", "soon"),
        // Unknown method: replies notImplemented.
        Request::new("sayGoodbye"),
    ];

    for request in calls {
        match registry
            .invoke(&channel, &request)
            .and_then(|response| codec::encode_response(&response))
        {
            Ok(envelope) => {
                println!("{} -> {}", request.method, String::from_utf8_lossy(&envelope));
            }
            Err(e) => tracing::error!(method = %request.method, error = %e, "invoke failed"),
        }
    }

    registry.detach(handle);
    tracing::info!("greetbridge host shut down");
}
