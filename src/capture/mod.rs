//! Capture pipeline: ingestion contract and session-owned aggregation.
//!
//! - `events`: the closed event type the backend delivers
//! - `sink`: ingestion handlers feeding the event channel
//! - `session`: presentation-side owner of all recorded data
//! - `stats`: per-function statistics aggregation
//! - `timers`: per-thread chunked interval storage

pub mod events;
pub mod session;
pub mod sink;
pub mod stats;
pub mod timers;

// Re-export common types
pub use events::{AddressInfo, CallStack, CallStackSample, CaptureEvent, TimingInterval};
pub use session::{CaptureSession, FunctionDescriptor};
pub use sink::{capture_channel, EventSink};
pub use stats::{FunctionStats, StatsStore};
pub use timers::{TimerChain, TimerIndex};
