//! Contracts implemented by the embedding application.
//!
//! The engine never reaches for a global "current capture" pointer; every
//! view and query call receives the collaborators it needs explicitly, so
//! tests construct isolated sessions with plain fake implementations.

use std::collections::HashSet;

use crate::capture::TimingInterval;
use crate::domain::{FunctionAddr, Timestamp};

/// Capture-session state owned by the host.
pub trait CaptureStatus {
    /// True while the backend is actively recording events.
    fn is_capturing(&self) -> bool;

    /// True once a session holds any recorded data.
    fn has_session_data(&self) -> bool;
}

/// Hooking state for a function, independent of its statistics.
pub trait HookState {
    /// Instrument the function.
    fn select(&mut self, addr: FunctionAddr);

    /// Remove the function's instrumentation.
    fn deselect(&mut self, addr: FunctionAddr);

    fn is_selected(&self, addr: FunctionAddr) -> bool;
}

/// Per-function frame-track opt-in, owned outside this core.
pub trait FrameTrackState {
    fn enable(&mut self, addr: FunctionAddr);

    fn disable(&mut self, addr: FunctionAddr);

    fn is_enabled(&self, addr: FunctionAddr) -> bool;

    /// Whether the recorded session data carries a frame track for the
    /// function, used when no live capture is connected.
    fn has_in_session_data(&self, addr: FunctionAddr) -> bool;
}

/// Timeline component that locates recorded intervals around a timestamp
/// bound and focuses the host's view on them.
pub trait TimelineNavigator {
    /// Nearest interval of `addr` starting at or after `bound`.
    fn next_interval_after(&self, addr: FunctionAddr, bound: Timestamp) -> Option<TimingInterval>;

    /// Nearest interval of `addr` ending at or before `bound`.
    fn previous_interval_before(
        &self,
        addr: FunctionAddr,
        bound: Timestamp,
    ) -> Option<TimingInterval>;
}

/// Rendering collaborator interested in which functions are visible.
///
/// Receives the visible address set after each filter recomputation, e.g.
/// to highlight the matching spans on a timeline.
pub trait VisibleSetListener {
    fn visible_functions_changed(&mut self, visible: &HashSet<FunctionAddr>);
}
