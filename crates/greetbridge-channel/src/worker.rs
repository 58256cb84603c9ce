// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Background execution queue: one dedicated thread per channel binding.
//
// The worker drains dispatch jobs in arrival order and replies through a
// rendezvous channel per job.  Dropping the worker closes the job queue,
// which ends the thread's receive loop; the drop then joins the thread so a
// detached binding leaves nothing running.

use std::sync::Arc;
use std::sync::mpsc;
use std::thread::{self, JoinHandle};

use tracing::{debug, warn};

use greetbridge_core::{BridgeError, Request, Response, Result};

use crate::dispatch::Dispatcher;

struct Job {
    request: Request,
    reply: mpsc::SyncSender<Response>,
}

/// Single worker thread serving one channel binding.
pub(crate) struct Worker {
    tx: Option<mpsc::Sender<Job>>,
    handle: Option<JoinHandle<()>>,
    channel_name: String,
}

impl Worker {
    /// Spawn the worker thread for `channel_name`.
    pub(crate) fn spawn(channel_name: String, dispatcher: Arc<Dispatcher>) -> Result<Self> {
        let (tx, rx) = mpsc::channel::<Job>();
        let thread_channel = channel_name.clone();

        let handle = thread::Builder::new()
            .name(format!("greetbridge-{channel_name}"))
            .spawn(move || {
                for job in rx {
                    let response = dispatcher.dispatch(&job.request);
                    // The caller may have given up waiting; nothing to do then.
                    let _ = job.reply.send(response);
                }
                debug!(channel = %thread_channel, "worker queue closed, thread exiting");
            })?;

        Ok(Self {
            tx: Some(tx),
            handle: Some(handle),
            channel_name,
        })
    }

    /// Run one request on the worker thread and wait for its reply.
    pub(crate) fn invoke(&self, request: Request) -> Result<Response> {
        let gone = || BridgeError::WorkerGone(self.channel_name.clone());

        let (reply_tx, reply_rx) = mpsc::sync_channel(1);
        let job = Job {
            request,
            reply: reply_tx,
        };
        self.tx
            .as_ref()
            .ok_or_else(gone)?
            .send(job)
            .map_err(|_| gone())?;
        reply_rx.recv().map_err(|_| gone())
    }
}

impl Drop for Worker {
    fn drop(&mut self) {
        // Closing the sender first ends the receive loop; only then join.
        drop(self.tx.take());
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                warn!(channel = %self.channel_name, "worker thread panicked");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{NativeResult, NativeSurface};

    struct EchoSurface;

    impl NativeSurface for EchoSurface {
        fn say_hi(&self, name: &str) -> NativeResult {
            Ok(format!("Hi {name}!"))
        }

        fn say_hi_with_duration(&self, name: &str, _duration: &str) -> NativeResult {
            Ok(format!("Hi {name}!"))
        }
    }

    #[test]
    fn worker_dispatches_and_replies() {
        let dispatcher = Arc::new(Dispatcher::new(Arc::new(EchoSurface)));
        let worker = Worker::spawn("test/channel".into(), dispatcher).expect("spawn");

        let response = worker
            .invoke(Request::new("sayHi").with_arg("name", "Alice"))
            .expect("invoke");
        assert_eq!(response, Response::success("Hi Alice!"));
    }

    #[test]
    fn worker_serves_many_requests_in_order() {
        let dispatcher = Arc::new(Dispatcher::new(Arc::new(EchoSurface)));
        let worker = Worker::spawn("test/channel".into(), dispatcher).expect("spawn");

        for name in ["a", "b", "c", "d"] {
            let response = worker
                .invoke(Request::new("sayHi").with_arg("name", name))
                .expect("invoke");
            assert_eq!(response, Response::success(format!("Hi {name}!")));
        }
    }

    #[test]
    fn drop_joins_the_thread() {
        let dispatcher = Arc::new(Dispatcher::new(Arc::new(EchoSurface)));
        let worker = Worker::spawn("test/channel".into(), dispatcher).expect("spawn");
        // Drop must return, which means the thread exited.
        drop(worker);
    }
}
