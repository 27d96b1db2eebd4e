//! Event sink: the ingestion contract the capture backend writes into.
//!
//! One handler per event kind, all infallible and side-effect only. Events
//! travel over an unbounded channel into the owning [`CaptureSession`], so a
//! handler never blocks on view-side operations no matter how busy the
//! presentation path is.
//!
//! [`CaptureSession`]: crate::capture::session::CaptureSession

use crossbeam_channel::{unbounded, Sender};
use log::warn;

use crate::capture::events::{
    AddressInfo, CallStack, CallStackSample, CaptureEvent, TimingInterval,
};
use crate::capture::session::CaptureSession;
use crate::domain::{SinkError, Tid};

/// Build a connected sink/session pair for one capture run.
///
/// The sink side goes to the instrumentation backend (ingestion path); the
/// session side stays with the presentation path.
#[must_use]
pub fn capture_channel() -> (EventSink, CaptureSession) {
    let (tx, rx) = unbounded();
    (EventSink { tx }, CaptureSession::new(rx))
}

/// Ingestion handle held by the capture backend.
///
/// Cloneable so multiple producer threads can feed the same session.
#[derive(Debug, Clone)]
pub struct EventSink {
    tx: Sender<CaptureEvent>,
}

impl EventSink {
    /// Record one completed function call.
    pub fn on_timing(&self, interval: TimingInterval) {
        self.emit(CaptureEvent::Timing(interval));
    }

    /// Bind an opaque numeric key to a string. Rebinding an existing key is
    /// not an error; the last writer wins.
    pub fn on_symbol_binding(&self, key: u64, text: String) {
        self.emit(CaptureEvent::SymbolBinding { key, text });
    }

    /// Record a resolved call stack for downstream consumers.
    pub fn on_call_stack(&self, stack: CallStack) {
        self.emit(CaptureEvent::CallStack(stack));
    }

    /// Record a sampling hit against a previously delivered stack.
    pub fn on_call_stack_sample(&self, sample: CallStackSample) {
        self.emit(CaptureEvent::CallStackSample(sample));
    }

    /// Name a thread. Renaming is not an error; the last writer wins.
    pub fn on_thread_named(&self, tid: Tid, name: String) {
        self.emit(CaptureEvent::ThreadNamed { tid, name });
    }

    /// Supply module/function metadata for an address.
    pub fn on_address_resolved(&self, info: AddressInfo) {
        self.emit(CaptureEvent::AddressResolved(info));
    }

    /// Fallible variant for backends that want to stop producing once the
    /// session is gone.
    ///
    /// # Errors
    ///
    /// Returns [`SinkError::SessionClosed`] when the owning session has been
    /// dropped; the event is discarded.
    pub fn try_emit(&self, event: CaptureEvent) -> Result<(), SinkError> {
        self.tx.send(event).map_err(|_| SinkError::SessionClosed)
    }

    fn emit(&self, event: CaptureEvent) {
        if self.try_emit(event).is_err() {
            warn!("capture session closed, event dropped");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FunctionAddr, Timestamp};

    fn timing() -> TimingInterval {
        TimingInterval {
            function_addr: FunctionAddr(0x1000),
            start: Timestamp(0),
            end: Timestamp(10),
            tid: Tid(1),
        }
    }

    #[test]
    fn test_try_emit_reports_closed_session() {
        let (sink, session) = capture_channel();
        drop(session);

        let result = sink.try_emit(CaptureEvent::Timing(timing()));
        assert_eq!(result, Err(SinkError::SessionClosed));
    }

    #[test]
    fn test_handlers_never_fail_after_close() {
        let (sink, session) = capture_channel();
        drop(session);

        // Swallowed with a warning, not a panic
        sink.on_timing(timing());
        sink.on_thread_named(Tid(1), "worker".to_string());
    }

    #[test]
    fn test_cloned_sinks_feed_one_session() {
        let (sink, mut session) = capture_channel();
        let other = sink.clone();

        sink.on_timing(timing());
        other.on_timing(timing());

        assert_eq!(session.poll_events(), 2);
        assert_eq!(session.stats_or_default(FunctionAddr(0x1000)).count, 2);
    }
}
