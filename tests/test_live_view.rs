//! Live view tests: the full ingest → rebuild → filter → sort flow a host
//! drives, plus the sort/filter properties the view guarantees.

use std::collections::HashSet;

use live_scope::capture::{capture_channel, AddressInfo, CaptureSession, EventSink, TimingInterval};
use live_scope::domain::{Duration, FunctionAddr, Tid, Timestamp};
use live_scope::host::{CaptureStatus, HookState, VisibleSetListener};
use live_scope::view::{Column, LiveFunctionsView, RefreshTicker, SortOrder};

struct NoHooks;

impl HookState for NoHooks {
    fn select(&mut self, _: FunctionAddr) {}
    fn deselect(&mut self, _: FunctionAddr) {}
    fn is_selected(&self, _: FunctionAddr) -> bool {
        false
    }
}

struct Recording;

impl CaptureStatus for Recording {
    fn is_capturing(&self) -> bool {
        true
    }
    fn has_session_data(&self) -> bool {
        true
    }
}

#[derive(Default)]
struct Highlight {
    last: Option<HashSet<FunctionAddr>>,
}

impl VisibleSetListener for Highlight {
    fn visible_functions_changed(&mut self, visible: &HashSet<FunctionAddr>) {
        self.last = Some(visible.clone());
    }
}

fn resolve(sink: &EventSink, addr: u64, name: &str) {
    sink.on_address_resolved(AddressInfo {
        address: FunctionAddr(addr),
        function_name: name.to_string(),
        module_path: "/bin/app".to_string(),
    });
}

fn record_calls(sink: &EventSink, addr: u64, durations: &[u64]) {
    let mut start = 0u64;
    for &elapsed in durations {
        sink.on_timing(TimingInterval {
            function_addr: FunctionAddr(addr),
            start: Timestamp(start),
            end: Timestamp(start + elapsed),
            tid: Tid(1),
        });
        start += 1_000;
    }
}

fn rebuilt_view(session: &CaptureSession) -> LiveFunctionsView {
    let mut view = LiveFunctionsView::new();
    view.on_session_data_changed(session);
    view
}

#[test]
fn test_end_to_end_ingest_filter_sort() {
    let (sink, mut session) = capture_channel();
    resolve(&sink, 0x1000, "fft_forward");
    resolve(&sink, 0x2000, "hash_update");
    record_calls(&sink, 0x1000, &[10, 20, 30]);
    record_calls(&sink, 0x2000, &[500]);
    session.poll_events();

    // Statistics
    let stats = session.stats_or_default(FunctionAddr(0x1000));
    assert_eq!(stats.count, 3);
    assert_eq!(stats.total, Duration(60));
    assert_eq!(stats.min, Duration(10));
    assert_eq!(stats.max, Duration(30));
    assert_eq!(stats.average(), Duration(20));

    // Filter keeps the matching row
    let mut view = rebuilt_view(&session);
    let mut highlight = Highlight::default();
    view.set_filter("f", &session, &mut highlight);
    assert!(view.row_index_of(FunctionAddr(0x1000)).is_some());
    assert!(view.row_index_of(FunctionAddr(0x2000)).is_none());

    // Count-descending places the busier function first
    view.set_filter("", &session, &mut highlight);
    view.sort(Column::Count, false, &session, &NoHooks);
    assert_eq!(view.row(0).name, "fft_forward");
    assert_eq!(view.row(1).name, "hash_update");
}

#[test]
fn test_filter_requires_every_token() {
    let (sink, mut session) = capture_channel();
    resolve(&sink, 0x1, "foo_bar_baz");
    resolve(&sink, 0x2, "foo_only");
    resolve(&sink, 0x3, "bar_only");
    for addr in [0x1, 0x2, 0x3] {
        record_calls(&sink, addr, &[10]);
    }
    session.poll_events();

    let mut view = rebuilt_view(&session);
    let mut highlight = Highlight::default();
    view.set_filter("foo bar", &session, &mut highlight);

    assert_eq!(view.visible_count(), 1);
    assert_eq!(view.row(0).name, "foo_bar_baz");
    assert_eq!(highlight.last.unwrap(), HashSet::from([FunctionAddr(0x1)]));
}

#[test]
fn test_sort_stability_preserves_relative_order() {
    let (sink, mut session) = capture_channel();
    // Equal counts throughout; names chosen against address order
    resolve(&sink, 0x1, "zeta");
    resolve(&sink, 0x2, "alpha");
    resolve(&sink, 0x3, "mira");
    for addr in [0x1, 0x2, 0x3] {
        record_calls(&sink, addr, &[10, 10]);
    }
    session.poll_events();

    let mut view = rebuilt_view(&session);
    view.sort(Column::Function, false, &session, &NoHooks);
    let by_name: Vec<String> =
        (0..view.visible_count()).map(|row| view.row(row).name.clone()).collect();
    assert_eq!(by_name, ["alpha", "mira", "zeta"]);

    // Counts all equal: re-sorting by count must not disturb the name order
    view.sort(Column::Count, false, &session, &NoHooks);
    let after: Vec<String> =
        (0..view.visible_count()).map(|row| view.row(row).name.clone()).collect();
    assert_eq!(after, by_name);
}

#[test]
fn test_direction_flip_reverses_comparison_not_input() {
    let (sink, mut session) = capture_channel();
    resolve(&sink, 0x1, "alpha");
    resolve(&sink, 0x2, "beta");
    resolve(&sink, 0x3, "gamma");
    record_calls(&sink, 0x1, &[10]);
    record_calls(&sink, 0x2, &[10, 10]);
    record_calls(&sink, 0x3, &[10, 10, 10]);
    session.poll_events();

    let mut view = rebuilt_view(&session);
    view.sort(Column::Count, false, &session, &NoHooks);
    assert_eq!(view.sort_state(), Some((Column::Count, SortOrder::Descending)));
    assert_eq!(view.row(0).name, "gamma");

    view.sort(Column::Count, true, &session, &NoHooks);
    assert_eq!(view.sort_state(), Some((Column::Count, SortOrder::Ascending)));
    assert_eq!(view.row(0).name, "alpha");
}

#[test]
fn test_tick_driven_refresh_reorders_under_live_updates() {
    let (sink, mut session) = capture_channel();
    resolve(&sink, 0x1, "alpha");
    resolve(&sink, 0x2, "beta");
    record_calls(&sink, 0x1, &[10, 10]);
    record_calls(&sink, 0x2, &[10]);
    session.poll_events();

    let mut view = rebuilt_view(&session);
    view.sort(Column::Count, false, &session, &NoHooks);
    assert_eq!(view.row(0).name, "alpha");

    // beta overtakes alpha while the capture keeps recording
    record_calls(&sink, 0x2, &[10, 10, 10]);

    let ticker = RefreshTicker::with_period(std::time::Duration::from_millis(5));
    std::thread::sleep(std::time::Duration::from_millis(30));
    if ticker.due() {
        session.poll_events();
        view.refresh_on_tick(&session, &NoHooks, &Recording);
    }
    assert_eq!(view.row(0).name, "beta");
}

#[test]
fn test_data_changed_resets_to_identity_until_requested() {
    let (sink, mut session) = capture_channel();
    resolve(&sink, 0x2, "beta");
    resolve(&sink, 0x1, "alpha");
    record_calls(&sink, 0x2, &[10, 10, 10]);
    record_calls(&sink, 0x1, &[10]);
    session.poll_events();

    let mut view = rebuilt_view(&session);
    view.sort(Column::Count, false, &session, &NoHooks);
    assert_eq!(view.row(0).name, "beta");

    // Rebuild: identity (address) order, no sort remembered as active
    view.on_session_data_changed(&session);
    assert_eq!(view.row(0).name, "alpha");
    assert_eq!(view.sort_state(), None);
}

#[test]
fn test_view_after_reset_is_empty_until_repopulated() {
    let (sink, mut session) = capture_channel();
    resolve(&sink, 0x1, "alpha");
    record_calls(&sink, 0x1, &[10]);
    session.poll_events();

    let mut view = rebuilt_view(&session);
    assert_eq!(view.tracked_count(), 1);

    session.reset();
    view.on_session_data_changed(&session);
    assert_eq!(view.tracked_count(), 0);
    assert_eq!(view.visible_count(), 0);
}
