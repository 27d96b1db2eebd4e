//! Row actions: the operations a host can offer on one visible function.
//!
//! Availability is derived from hook state, frame-track state, capture
//! connection and recorded statistics; applying an action forwards to the
//! owning collaborator. No menu or widget behavior lives here.

use crate::capture::{CaptureSession, TimingInterval};
use crate::domain::Timestamp;
use crate::host::{CaptureStatus, FrameTrackState, HookState, TimelineNavigator};
use crate::query::find_min_max_interval;
use crate::view::engine::LiveFunctionsView;

/// Which recorded occurrence of a function to navigate to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpKind {
    /// Earliest recorded call.
    First,
    /// Latest recorded call.
    Last,
    /// Shortest recorded call.
    Min,
    /// Longest recorded call.
    Max,
}

/// An operation applicable to one visible row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    /// Instrument the function.
    Hook,
    /// Remove the function's instrumentation.
    Unhook,
    EnableFrameTrack,
    DisableFrameTrack,
    /// Navigate the timeline to a recorded occurrence.
    Jump(JumpKind),
}

impl LiveFunctionsView {
    /// Actions applicable to the row at `visible_index`.
    ///
    /// Hooking requires a connected capture. Frame-track toggles consult the
    /// live state while connected and the recorded session data otherwise.
    /// Jumps require at least one recorded call.
    #[must_use]
    pub fn available_actions(
        &self,
        session: &CaptureSession,
        hooks: &dyn HookState,
        frame_tracks: &dyn FrameTrackState,
        status: &dyn CaptureStatus,
        visible_index: usize,
    ) -> Vec<RowAction> {
        let addr = session.absolute_address(self.row(visible_index));
        let mut actions = Vec::new();

        if status.is_capturing() {
            if hooks.is_selected(addr) {
                actions.push(RowAction::Unhook);
            } else {
                actions.push(RowAction::Hook);
            }
            if frame_tracks.is_enabled(addr) {
                actions.push(RowAction::DisableFrameTrack);
            } else {
                actions.push(RowAction::EnableFrameTrack);
            }
        } else if frame_tracks.has_in_session_data(addr) {
            actions.push(RowAction::DisableFrameTrack);
        } else {
            actions.push(RowAction::EnableFrameTrack);
        }

        if session.stats_or_default(addr).count > 0 {
            actions.extend([
                RowAction::Jump(JumpKind::First),
                RowAction::Jump(JumpKind::Last),
                RowAction::Jump(JumpKind::Min),
                RowAction::Jump(JumpKind::Max),
            ]);
        }

        actions
    }

    /// Apply a state-changing action to the row at `visible_index`.
    ///
    /// Unhooking also disables the function's frame track: a track on an
    /// unhooked function would record for the current session but silently
    /// stop on the next one.
    ///
    /// # Panics
    ///
    /// Jump actions carry no state change; resolving them through this
    /// entry point is a caller contract violation. Use
    /// [`jump_target`](Self::jump_target).
    pub fn apply_action(
        &self,
        action: RowAction,
        visible_index: usize,
        session: &CaptureSession,
        hooks: &mut dyn HookState,
        frame_tracks: &mut dyn FrameTrackState,
    ) {
        let addr = session.absolute_address(self.row(visible_index));
        match action {
            RowAction::Hook => hooks.select(addr),
            RowAction::Unhook => {
                hooks.deselect(addr);
                frame_tracks.disable(addr);
            }
            RowAction::EnableFrameTrack => {
                // A frame track only records while its function is hooked
                hooks.select(addr);
                frame_tracks.enable(addr);
            }
            RowAction::DisableFrameTrack => frame_tracks.disable(addr),
            RowAction::Jump(kind) => {
                panic!("jump action {kind:?} resolves via jump_target, not apply_action")
            }
        }
    }

    /// Resolve a jump to the concrete interval the host should focus.
    ///
    /// First/last occurrence delegate to the external timeline with the
    /// extreme timestamp bounds; min/max scan the timer index.
    #[must_use]
    pub fn jump_target(
        &self,
        session: &CaptureSession,
        timeline: &dyn TimelineNavigator,
        visible_index: usize,
        kind: JumpKind,
    ) -> Option<TimingInterval> {
        let addr = session.absolute_address(self.row(visible_index));
        match kind {
            JumpKind::First => timeline.next_interval_after(addr, Timestamp::MIN),
            JumpKind::Last => timeline.previous_interval_before(addr, Timestamp::MAX),
            JumpKind::Min => find_min_max_interval(session, addr).0.copied(),
            JumpKind::Max => find_min_max_interval(session, addr).1.copied(),
        }
    }
}
