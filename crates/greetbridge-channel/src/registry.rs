// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Channel registry: attach/detach lifecycle and request routing.
//
// The registry is owned explicitly by the host application — the bridge
// keeps no process-wide globals.  A binding moves `Unattached -> Attached ->
// Unattached`: attaching over a live binding replaces it (last writer wins),
// detaching an already-unattached channel is a no-op.  After detach no
// further request can reach the old dispatcher.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, info, instrument, warn};

use greetbridge_core::{BridgeConfig, BridgeError, Request, Response, Result};

use crate::codec;
use crate::dispatch::Dispatcher;
use crate::surface::NativeSurface;
use crate::worker::Worker;

/// One attached (channel, dispatcher, executor) triple.
struct Binding {
    dispatcher: Arc<Dispatcher>,
    worker: Option<Worker>,
}

impl Binding {
    fn invoke(&self, request: &Request) -> Result<Response> {
        match &self.worker {
            Some(worker) => worker.invoke(request.clone()),
            None => Ok(self.dispatcher.dispatch(request)),
        }
    }
}

/// Proof of attachment, consumed by [`ChannelRegistry::detach`].
#[derive(Debug)]
pub struct ChannelHandle {
    channel_name: String,
}

impl ChannelHandle {
    pub fn channel_name(&self) -> &str {
        &self.channel_name
    }
}

/// Host-owned table mapping channel names to their active bindings.
///
/// At most one binding per channel name at a time.  The lock guards only the
/// map itself and is never held across a dispatch, so attach/detach from the
/// host lifecycle cannot deadlock against in-flight calls.
#[derive(Default)]
pub struct ChannelRegistry {
    bindings: Mutex<HashMap<String, Arc<Binding>>>,
}

impl ChannelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a dispatcher for the configured channel name.
    ///
    /// When `config.background_queue` is set, calls on this binding run on a
    /// dedicated worker thread.  Attaching over an existing binding replaces
    /// it and tears the old one down.
    #[instrument(skip_all, fields(channel = %config.channel_name))]
    pub fn attach(
        &self,
        config: BridgeConfig,
        surface: Arc<dyn NativeSurface>,
    ) -> Result<ChannelHandle> {
        let dispatcher = Arc::new(Dispatcher::new(surface));
        let worker = if config.background_queue {
            Some(Worker::spawn(
                config.channel_name.clone(),
                Arc::clone(&dispatcher),
            )?)
        } else {
            None
        };
        let binding = Arc::new(Binding { dispatcher, worker });

        // Bind outside the insert statement so a replaced binding (and its
        // worker) drops after the lock is released.
        let replaced = {
            let mut bindings = self.lock();
            bindings.insert(config.channel_name.clone(), binding)
        };
        if replaced.is_some() {
            warn!("replacing an existing binding without detach");
        }
        info!(background = config.background_queue, "channel attached");

        Ok(ChannelHandle {
            channel_name: config.channel_name,
        })
    }

    /// Unbind the channel named by `handle`.
    ///
    /// Always safe: detaching an already-unattached channel is a no-op.  The
    /// binding's worker (if any) is joined before this returns.
    #[instrument(skip_all, fields(channel = %handle.channel_name))]
    pub fn detach(&self, handle: ChannelHandle) {
        let removed = self.lock().remove(&handle.channel_name);
        match removed {
            // Dropped here, outside the lock, joining the worker.
            Some(_binding) => info!("channel detached"),
            None => debug!("channel already unattached"),
        }
    }

    /// Route one request to the channel's bound dispatcher.
    pub fn invoke(&self, channel: &str, request: &Request) -> Result<Response> {
        let binding = self
            .lock()
            .get(channel)
            .cloned()
            .ok_or_else(|| BridgeError::NotAttached(channel.to_string()))?;
        binding.invoke(request)
    }

    /// Byte-level entry point for embedders that speak the wire codec.
    pub fn invoke_encoded(&self, channel: &str, request_bytes: &[u8]) -> Result<Vec<u8>> {
        let request = codec::decode_request(request_bytes)?;
        let response = self.invoke(channel, &request)?;
        codec::encode_response(&response)
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Arc<Binding>>> {
        // The lock only ever guards map operations, so a poisoned lock still
        // holds a consistent map.
        self.bindings.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
