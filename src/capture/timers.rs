//! Timer index: per-thread ordered collections of recorded intervals.
//!
//! Intervals append in arrival order into fixed-capacity blocks, so an
//! append never reallocates previously stored intervals and iteration walks
//! chains in recording order. The index keeps no per-address lookup
//! structure; extremal queries scan it wholesale.

use std::collections::HashMap;

use crate::capture::events::TimingInterval;
use crate::domain::Tid;

/// Intervals per block. A full block is sealed and a new one started.
const BLOCK_CAPACITY: usize = 1024;

/// One fixed-capacity run of intervals within a chain.
#[derive(Debug)]
struct TimerBlock {
    intervals: Vec<TimingInterval>,
}

impl TimerBlock {
    fn new() -> Self {
        Self { intervals: Vec::with_capacity(BLOCK_CAPACITY) }
    }

    fn is_full(&self) -> bool {
        self.intervals.len() == BLOCK_CAPACITY
    }
}

/// Ordered timer collection for a single thread.
///
/// Interval order equals arrival order; no reordering or compaction happens
/// during a live session.
#[derive(Debug, Default)]
pub struct TimerChain {
    blocks: Vec<TimerBlock>,
}

impl TimerChain {
    fn append(&mut self, interval: TimingInterval) {
        match self.blocks.last_mut() {
            Some(block) if !block.is_full() => block.intervals.push(interval),
            _ => {
                let mut block = TimerBlock::new();
                block.intervals.push(interval);
                self.blocks.push(block);
            }
        }
    }

    /// All intervals in recording order.
    pub fn iter(&self) -> impl Iterator<Item = &TimingInterval> {
        self.blocks.iter().flat_map(|block| block.intervals.iter())
    }

    /// Number of recorded intervals on this thread.
    #[must_use]
    pub fn len(&self) -> usize {
        self.blocks.iter().map(|block| block.intervals.len()).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

/// All per-thread timer chains of the current session.
#[derive(Debug, Default)]
pub struct TimerIndex {
    chains: HashMap<Tid, TimerChain>,
}

impl TimerIndex {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one interval to its thread's chain. Amortized O(1).
    pub fn record(&mut self, interval: TimingInterval) {
        self.chains.entry(interval.tid).or_default().append(interval);
    }

    /// Per-thread chains, in no particular thread order.
    pub fn thread_chains(&self) -> impl Iterator<Item = &TimerChain> {
        self.chains.values()
    }

    /// Total intervals recorded across all threads.
    #[must_use]
    pub fn total_recorded(&self) -> usize {
        self.chains.values().map(TimerChain::len).sum()
    }
}
