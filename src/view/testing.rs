//! Fake collaborator implementations shared by the view unit tests.

use std::cell::RefCell;
use std::collections::HashSet;

use crate::capture::TimingInterval;
use crate::domain::{FunctionAddr, Timestamp};
use crate::host::{
    CaptureStatus, FrameTrackState, HookState, TimelineNavigator, VisibleSetListener,
};

#[derive(Debug, Default)]
pub(crate) struct FakeHooks {
    selected: HashSet<FunctionAddr>,
}

impl HookState for FakeHooks {
    fn select(&mut self, addr: FunctionAddr) {
        self.selected.insert(addr);
    }

    fn deselect(&mut self, addr: FunctionAddr) {
        self.selected.remove(&addr);
    }

    fn is_selected(&self, addr: FunctionAddr) -> bool {
        self.selected.contains(&addr)
    }
}

#[derive(Debug, Default)]
pub(crate) struct FakeFrameTracks {
    enabled: HashSet<FunctionAddr>,
    pub(crate) in_session: HashSet<FunctionAddr>,
}

impl FrameTrackState for FakeFrameTracks {
    fn enable(&mut self, addr: FunctionAddr) {
        self.enabled.insert(addr);
    }

    fn disable(&mut self, addr: FunctionAddr) {
        self.enabled.remove(&addr);
    }

    fn is_enabled(&self, addr: FunctionAddr) -> bool {
        self.enabled.contains(&addr)
    }

    fn has_in_session_data(&self, addr: FunctionAddr) -> bool {
        self.in_session.contains(&addr)
    }
}

#[derive(Debug)]
pub(crate) struct FakeStatus {
    pub(crate) capturing: bool,
    pub(crate) has_data: bool,
}

impl CaptureStatus for FakeStatus {
    fn is_capturing(&self) -> bool {
        self.capturing
    }

    fn has_session_data(&self) -> bool {
        self.has_data
    }
}

#[derive(Debug, Default)]
pub(crate) struct RecordingHighlight {
    pub(crate) last: Option<HashSet<FunctionAddr>>,
}

impl VisibleSetListener for RecordingHighlight {
    fn visible_functions_changed(&mut self, visible: &HashSet<FunctionAddr>) {
        self.last = Some(visible.clone());
    }
}

/// Records the bound of every query; always reports "nothing found".
#[derive(Debug, Default)]
pub(crate) struct FakeTimeline {
    pub(crate) queries: RefCell<Vec<(String, Timestamp)>>,
}

impl TimelineNavigator for FakeTimeline {
    fn next_interval_after(
        &self,
        _addr: FunctionAddr,
        bound: Timestamp,
    ) -> Option<TimingInterval> {
        self.queries.borrow_mut().push(("after".to_string(), bound));
        None
    }

    fn previous_interval_before(
        &self,
        _addr: FunctionAddr,
        bound: Timestamp,
    ) -> Option<TimingInterval> {
        self.queries.borrow_mut().push(("before".to_string(), bound));
        None
    }
}
