//! # live-scope - Live Telemetry Aggregation and Query Engine
//!
//! live-scope is the data core of a dynamic-instrumentation profiler: it
//! ingests the stream of timing and symbol events produced by an attached
//! target process, incrementally maintains per-function statistics, and
//! answers sortable, filterable, extremal queries against them while the
//! capture session is still running.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │              Instrumentation Backend (Host)                 │
//! │        attach / inject / resolve symbols / sample           │
//! └──────────────────────────┬──────────────────────────────────┘
//!                            │ capture events
//!                            ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                  live-scope (This Crate)                    │
//! │                                                             │
//! │  ┌───────────┐    ┌──────────────────────────────┐          │
//! │  │ EventSink │───▶│        CaptureSession        │          │
//! │  │ (channel) │    │  StatsStore  +  TimerIndex   │          │
//! │  └───────────┘    └───────┬──────────────┬───────┘          │
//! │                           │              │                  │
//! │                           ▼              ▼                  │
//! │                ┌───────────────────┐  ┌────────────────┐    │
//! │                │ LiveFunctionsView │  │ Extremal Query │    │
//! │                │ (filter/sort)     │  │ (min/max scan) │    │
//! │                └───────────────────┘  └────────────────┘    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - [`capture`]: ingestion contract and session-owned aggregation
//!   - `sink`: one infallible handler per event kind, feeding a channel
//!   - `session`: presentation-side owner of everything recorded
//!   - `stats` / `timers`: per-function statistics, per-thread interval
//!     chains
//!
//! - [`view`]: the live functions table — stable descriptor arena plus a
//!   wholesale-recomputed visible set, substring AND filters, stable
//!   multi-criterion sorting, 300 ms refresh while recording
//!
//! - [`query`]: extremal scans (fastest/slowest recorded call)
//!
//! - [`host`]: contracts the embedding application implements (capture
//!   status, hooking, frame tracks, timeline navigation, highlighting)
//!
//! - [`domain`]: address/thread/time newtypes and the error enum
//!
//! ## Concurrency Model
//!
//! Single-writer, single-reader: the backend feeds the [`capture::EventSink`]
//! from its own thread while the presentation path owns the
//! [`capture::CaptureSession`] and drains pending events at its convenience
//! (`poll_events`). An event is applied fully or not at all, so readers may
//! lag the newest interval but never observe a partial one. Session reset
//! swaps in fresh data and discards stale queued events in one step.
//!
//! ## Typical Flow
//!
//! ```
//! use live_scope::capture::capture_channel;
//! use live_scope::view::{Column, LiveFunctionsView};
//! # use live_scope::capture::{AddressInfo, TimingInterval};
//! # use live_scope::domain::{FunctionAddr, Tid, Timestamp};
//! # struct NoHooks;
//! # impl live_scope::host::HookState for NoHooks {
//! #     fn select(&mut self, _: FunctionAddr) {}
//! #     fn deselect(&mut self, _: FunctionAddr) {}
//! #     fn is_selected(&self, _: FunctionAddr) -> bool { false }
//! # }
//!
//! let (sink, mut session) = capture_channel();
//! // backend thread: sink.on_timing(...), sink.on_address_resolved(...)
//! # sink.on_address_resolved(AddressInfo {
//! #     address: FunctionAddr(0x1000),
//! #     function_name: "alpha".to_string(),
//! #     module_path: "/bin/app".to_string(),
//! # });
//! # sink.on_timing(TimingInterval {
//! #     function_addr: FunctionAddr(0x1000),
//! #     start: Timestamp(0),
//! #     end: Timestamp(25),
//! #     tid: Tid(1),
//! # });
//!
//! // presentation path:
//! session.poll_events();
//! let mut view = LiveFunctionsView::new();
//! view.on_session_data_changed(&session);
//! view.sort(Column::Count, false, &session, &NoHooks);
//! assert_eq!(view.visible_count(), 1);
//! ```

pub mod capture;
pub mod domain;
pub mod host;
pub mod query;
pub mod view;
