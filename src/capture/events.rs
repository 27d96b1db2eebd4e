//! Capture event model
//!
//! One closed enum covers every event kind the instrumentation backend can
//! deliver. The backend never grows new kinds mid-session, so a tagged
//! variant per kind keeps dispatch exhaustive and the sink pluggable in
//! tests.

use crate::domain::{Duration, FunctionAddr, Tid, Timestamp};

/// One recorded function call: start/end pair on a specific thread.
///
/// Immutable once recorded. Intervals are stored in arrival order per thread
/// and never reordered during a live session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimingInterval {
    /// Absolute address of the called function.
    pub function_addr: FunctionAddr,
    /// Call entry time.
    pub start: Timestamp,
    /// Call exit time. Never earlier than `start`.
    pub end: Timestamp,
    /// Thread the call executed on.
    pub tid: Tid,
}

impl TimingInterval {
    /// Elapsed time of this call.
    #[must_use]
    pub fn duration(&self) -> Duration {
        Duration(self.end.0.saturating_sub(self.start.0))
    }
}

/// Module/function metadata for a resolved address.
///
/// Creates the function's descriptor the first time the address is seen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressInfo {
    /// Absolute address of the function in the target process.
    pub address: FunctionAddr,
    /// Demangled display name.
    pub function_name: String,
    /// Path of the module the function lives in.
    pub module_path: String,
}

/// A resolved call stack: ordered frame addresses, innermost first.
///
/// Recorded for downstream consumers (timeline, sampling report); the
/// statistics model does not depend on stack contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallStack {
    /// Backend-assigned stack identity, referenced by samples.
    pub id: u64,
    /// Frame return addresses, innermost first.
    pub frames: Vec<u64>,
}

/// One sampling hit referencing a previously delivered [`CallStack`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallStackSample {
    /// Identity of the sampled stack.
    pub stack_id: u64,
    /// Thread the sample was taken on.
    pub tid: Tid,
    /// Sample time.
    pub timestamp: Timestamp,
}

/// Every event kind the capture backend can deliver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureEvent {
    /// A completed function call.
    Timing(TimingInterval),
    /// Binds an opaque numeric key to a string. Last writer wins on rebind.
    SymbolBinding { key: u64, text: String },
    /// A resolved call stack.
    CallStack(CallStack),
    /// A sampling hit against a known stack.
    CallStackSample(CallStackSample),
    /// Human-readable name for a thread. Last writer wins on rename.
    ThreadNamed { tid: Tid, name: String },
    /// Metadata for a previously unseen function address.
    AddressResolved(AddressInfo),
}
