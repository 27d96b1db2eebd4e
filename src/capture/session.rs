//! Capture session: the presentation-side owner of all recorded data.
//!
//! The session drains the event channel fed by the [`EventSink`] and applies
//! each event fully before the next read, so a reader observes an interval
//! either completely or not at all. Draining happens on the presentation
//! path (`poll_events`), which is also where filters, sorts and extremal
//! queries run, so no locking is needed and ingestion never waits on the
//! view.
//!
//! [`EventSink`]: crate::capture::sink::EventSink

use std::collections::HashMap;

use crossbeam_channel::Receiver;
use log::debug;

use crate::capture::events::{AddressInfo, CallStack, CallStackSample, CaptureEvent};
use crate::capture::stats::{FunctionStats, StatsStore};
use crate::capture::timers::{TimerChain, TimerIndex};
use crate::domain::{FunctionAddr, Tid};

/// Identity record for an instrumentable function.
///
/// Immutable once captured; created when address metadata is first seen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDescriptor {
    /// Absolute address in the target process.
    pub address: FunctionAddr,
    /// Demangled display name.
    pub name: String,
    /// Path of the owning module.
    pub module: String,
}

/// Everything recorded since the session started. Replaced wholesale on
/// reset, never partially cleared.
#[derive(Debug, Default)]
struct SessionData {
    functions: HashMap<FunctionAddr, FunctionDescriptor>,
    stats: StatsStore,
    timers: TimerIndex,
    symbols: HashMap<u64, String>,
    thread_names: HashMap<Tid, String>,
    call_stacks: HashMap<u64, CallStack>,
    samples: Vec<CallStackSample>,
}

/// One capture session's aggregated state.
///
/// Owns the statistics store and the timer index. All methods run on the
/// presentation path; view operations are handed an explicit `&CaptureSession`
/// instead of reaching through a global.
#[derive(Debug)]
pub struct CaptureSession {
    rx: Receiver<CaptureEvent>,
    data: SessionData,
}

impl CaptureSession {
    pub(crate) fn new(rx: Receiver<CaptureEvent>) -> Self {
        Self { rx, data: SessionData::default() }
    }

    /// Drain and apply every event currently queued by the sink.
    ///
    /// Returns the number of events applied. Events queued after this call
    /// started are picked up on the next poll; readers may lag the newest
    /// interval but never observe a partial one.
    pub fn poll_events(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(event) = self.rx.try_recv() {
            self.apply(event);
            applied += 1;
        }
        applied
    }

    fn apply(&mut self, event: CaptureEvent) {
        match event {
            CaptureEvent::Timing(interval) => {
                self.data.stats.record_interval(&interval);
                self.data.timers.record(interval);
            }
            CaptureEvent::SymbolBinding { key, text } => {
                // Last writer wins on rebind
                self.data.symbols.insert(key, text);
            }
            CaptureEvent::CallStack(stack) => {
                self.data.call_stacks.insert(stack.id, stack);
            }
            CaptureEvent::CallStackSample(sample) => {
                self.data.samples.push(sample);
            }
            CaptureEvent::ThreadNamed { tid, name } => {
                // Last writer wins on rename
                self.data.thread_names.insert(tid, name);
            }
            CaptureEvent::AddressResolved(info) => {
                self.record_address_info(info);
            }
        }
    }

    fn record_address_info(&mut self, info: AddressInfo) {
        // Descriptors are immutable once captured; the first resolution wins
        self.data.functions.entry(info.address).or_insert_with(|| FunctionDescriptor {
            address: info.address,
            name: info.function_name,
            module: info.module_path,
        });
    }

    /// Discard all recorded data and start tracking afresh.
    ///
    /// A single atomic transition: the old data is replaced wholesale and
    /// events still queued from before the reset are discarded, so a reader
    /// never sees old and new session data mixed.
    pub fn reset(&mut self) {
        self.data = SessionData::default();
        let mut discarded = 0;
        while self.rx.try_recv().is_ok() {
            discarded += 1;
        }
        debug!("session reset, {discarded} stale queued events discarded");
    }

    // Statistics store surface

    /// Statistics for `addr`, or the zero-valued record when nothing has
    /// been recorded yet.
    #[must_use]
    pub fn stats_or_default(&self, addr: FunctionAddr) -> FunctionStats {
        self.data.stats.stats_or_default(addr)
    }

    /// Absolute address of a tracked function.
    #[must_use]
    pub fn absolute_address(&self, descriptor: &FunctionDescriptor) -> FunctionAddr {
        descriptor.address
    }

    /// Addresses with at least one recorded interval, in no particular order.
    pub fn tracked_addresses(&self) -> impl Iterator<Item = FunctionAddr> + '_ {
        self.data.stats.tracked_addresses()
    }

    /// Descriptor for `addr`, if its address metadata has arrived.
    #[must_use]
    pub fn descriptor(&self, addr: FunctionAddr) -> Option<&FunctionDescriptor> {
        self.data.functions.get(&addr)
    }

    /// Descriptor for `addr`, synthesizing a hex-named placeholder when the
    /// address has not been resolved (stripped binary, late metadata).
    #[must_use]
    pub fn descriptor_or_fallback(&self, addr: FunctionAddr) -> FunctionDescriptor {
        self.data.functions.get(&addr).cloned().unwrap_or_else(|| FunctionDescriptor {
            address: addr,
            name: format!("{addr}"),
            module: "<unknown>".to_string(),
        })
    }

    // Timer index surface

    /// Per-thread ordered timer chains, used by the extremal query.
    pub fn thread_chains(&self) -> impl Iterator<Item = &TimerChain> {
        self.data.timers.thread_chains()
    }

    /// Total intervals recorded across all threads.
    #[must_use]
    pub fn total_recorded_intervals(&self) -> usize {
        self.data.timers.total_recorded()
    }

    // Auxiliary lookups

    /// String bound to an opaque key, if any.
    #[must_use]
    pub fn symbol(&self, key: u64) -> Option<&str> {
        self.data.symbols.get(&key).map(String::as_str)
    }

    /// Human-readable name of a thread, if one was reported.
    #[must_use]
    pub fn thread_name(&self, tid: Tid) -> Option<&str> {
        self.data.thread_names.get(&tid).map(String::as_str)
    }

    /// Recorded call stack by backend identity.
    #[must_use]
    pub fn call_stack(&self, id: u64) -> Option<&CallStack> {
        self.data.call_stacks.get(&id)
    }

    /// Number of sampling hits recorded for downstream consumers.
    #[must_use]
    pub fn sample_count(&self) -> usize {
        self.data.samples.len()
    }

    /// True once any event has populated the session.
    #[must_use]
    pub fn has_data(&self) -> bool {
        !self.data.stats.is_empty() || !self.data.functions.is_empty()
    }
}
