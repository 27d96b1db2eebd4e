//! Extremal queries over the timer index.
//!
//! These scans answer "which call of this function was the fastest/slowest"
//! by walking every thread chain in full. No per-address index is kept: the
//! queries run only on explicit user action, so O(total recorded intervals)
//! is the deliberate trade against write-path cost.

use crate::capture::{CaptureSession, TimingInterval};
use crate::domain::FunctionAddr;

/// Shortest and longest recorded call of `addr`.
///
/// Strict comparisons, so among equal durations the interval encountered
/// first in scan order stays the current extreme. `(None, None)` when no
/// interval matches.
#[must_use]
pub fn find_min_max_interval(
    session: &CaptureSession,
    addr: FunctionAddr,
) -> (Option<&TimingInterval>, Option<&TimingInterval>) {
    let mut min: Option<&TimingInterval> = None;
    let mut max: Option<&TimingInterval> = None;

    for chain in session.thread_chains() {
        for interval in chain.iter() {
            if interval.function_addr != addr {
                continue;
            }
            let elapsed = interval.duration();
            match min {
                Some(current) if elapsed >= current.duration() => {}
                _ => min = Some(interval),
            }
            match max {
                Some(current) if elapsed <= current.duration() => {}
                _ => max = Some(interval),
            }
        }
    }

    (min, max)
}
