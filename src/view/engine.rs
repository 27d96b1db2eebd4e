//! Live functions view: the working set of visible rows over the
//! statistics store.
//!
//! # State Management
//!
//! Two explicit layers keep references valid across mutation:
//! - `functions` - a stable arena of tracked descriptors, addressed by index
//! - `visible` - an ordered sequence of indices into that arena, the current
//!   filter+sort result
//!
//! The visible set is recomputed wholesale on every filter or sort request,
//! never patched incrementally, so no positional pointer survives a
//! filter/sort boundary.
//!
//! # Live Updates
//!
//! While a capture is recording, new functions and fresh statistics appear
//! gradually. A periodic tick re-applies the current sort only; the filter
//! is a user-explicit action and is never re-run behind the user's back.

use std::collections::HashSet;

use log::debug;

use crate::capture::{CaptureSession, FunctionDescriptor};
use crate::domain::FunctionAddr;
use crate::host::{CaptureStatus, HookState, VisibleSetListener};
use crate::view::columns::{comparator_for, Column, SortContext, SortOrder};

/// Name prefix of the trampolines injected by the instrumentation layer.
/// They show up in the statistics store like any hooked function but are
/// never listed in the live table.
const PROBE_PREFIX: &str = "__scope_probe_";

fn is_probe_helper(name: &str) -> bool {
    name.starts_with(PROBE_PREFIX)
}

/// Sortable, filterable view over the tracked functions of one session.
#[derive(Debug)]
pub struct LiveFunctionsView {
    /// Stable arena of tracked descriptors. Grows via
    /// `on_session_data_changed`, never shrinks mid-session.
    functions: Vec<FunctionDescriptor>,
    /// Current filter+sort result: indices into `functions`.
    visible: Vec<usize>,
    /// Free-text filter, kept verbatim for re-application on request.
    filter: String,
    /// Active sort column; `None` until a sort is explicitly requested.
    sort_column: Option<Column>,
    /// Per-column direction, remembered across sort requests.
    sort_orders: [SortOrder; Column::ALL.len()],
}

impl Default for LiveFunctionsView {
    fn default() -> Self {
        Self::new()
    }
}

impl LiveFunctionsView {
    #[must_use]
    pub fn new() -> Self {
        let mut sort_orders = [SortOrder::Ascending; Column::ALL.len()];
        for column in Column::ALL {
            sort_orders[column.index()] = column.default_order();
        }
        Self {
            functions: Vec::new(),
            visible: Vec::new(),
            filter: String::new(),
            sort_column: None,
            sort_orders,
        }
    }

    /// Rebuild the tracked sequence from the session's current key set.
    ///
    /// Instrumentation trampolines are excluded; the visible set resets to
    /// identity order. Neither filter nor sort is re-applied until
    /// explicitly requested again.
    pub fn on_session_data_changed(&mut self, session: &CaptureSession) {
        self.functions.clear();
        self.visible.clear();
        self.sort_column = None;

        let mut addrs: Vec<FunctionAddr> = session.tracked_addresses().collect();
        addrs.sort_unstable();
        for addr in addrs {
            let descriptor = session.descriptor_or_fallback(addr);
            if is_probe_helper(&descriptor.name) {
                continue;
            }
            self.functions.push(descriptor);
        }
        self.visible = (0..self.functions.len()).collect();
        debug!("tracked function list rebuilt: {} functions", self.functions.len());
    }

    /// Apply a free-text filter and push the resulting visible address set
    /// to the highlighting collaborator.
    ///
    /// `text` is tokenized on whitespace; a row stays visible only if every
    /// token is a case-insensitive substring of its display name. The empty
    /// filter keeps every tracked row.
    pub fn set_filter(
        &mut self,
        text: &str,
        session: &CaptureSession,
        highlight: &mut dyn VisibleSetListener,
    ) {
        self.filter = text.to_string();
        self.rebuild_visible();

        let visible: HashSet<FunctionAddr> = self
            .visible
            .iter()
            .map(|&index| session.absolute_address(&self.functions[index]))
            .collect();
        highlight.visible_functions_changed(&visible);
    }

    fn rebuild_visible(&mut self) {
        let tokens: Vec<String> =
            self.filter.to_lowercase().split_whitespace().map(str::to_string).collect();

        self.visible = self
            .functions
            .iter()
            .enumerate()
            .filter(|(_, function)| {
                let name = function.name.to_lowercase();
                tokens.iter().all(|token| name.contains(token.as_str()))
            })
            .map(|(index, _)| index)
            .collect();
    }

    /// Sort the visible set by `column`.
    ///
    /// Re-sorting the active column with `toggle` set flips its stored
    /// direction; switching to another column applies that column's default
    /// direction. The sort is stable: rows comparing equal keep their
    /// relative order.
    pub fn sort(
        &mut self,
        column: Column,
        toggle: bool,
        session: &CaptureSession,
        hooks: &dyn HookState,
    ) {
        match self.sort_column {
            Some(active) if active == column => {
                if toggle {
                    let order = &mut self.sort_orders[column.index()];
                    *order = order.flipped();
                }
            }
            _ => self.sort_orders[column.index()] = column.default_order(),
        }
        self.sort_column = Some(column);
        self.apply_sort(session, hooks);
    }

    fn apply_sort(&mut self, session: &CaptureSession, hooks: &dyn HookState) {
        let Some(column) = self.sort_column else {
            return;
        };
        let ascending = self.sort_orders[column.index()] == SortOrder::Ascending;
        let compare = comparator_for(column);
        let ctx = SortContext { session, hooks };
        let functions = &self.functions;

        // Direction flips the comparator's result, not the input order, so
        // stability is preserved either way.
        self.visible.sort_by(|&a, &b| {
            let ordering = compare(&ctx, &functions[a], &functions[b]);
            if ascending {
                ordering
            } else {
                ordering.reverse()
            }
        });
    }

    /// Re-apply the current sort while a capture is recording.
    ///
    /// Called from the 300 ms refresh tick. The filter is not re-applied:
    /// newly appearing functions must not reshuffle the visible name set
    /// without an explicit sort or filter request.
    pub fn refresh_on_tick(
        &mut self,
        session: &CaptureSession,
        hooks: &dyn HookState,
        status: &dyn CaptureStatus,
    ) {
        if status.is_capturing() {
            self.apply_sort(session, hooks);
        }
    }

    /// Descriptor shown at `visible_index`.
    ///
    /// # Panics
    ///
    /// Out-of-range indices are a caller contract violation, not a
    /// recoverable state; callers check `visible_count` first.
    #[must_use]
    pub fn row(&self, visible_index: usize) -> &FunctionDescriptor {
        assert!(
            visible_index < self.visible.len(),
            "row {visible_index} out of range, {} rows visible",
            self.visible.len()
        );
        &self.functions[self.visible[visible_index]]
    }

    /// Current visible row of `addr`, if the function passes the filter.
    #[must_use]
    pub fn row_index_of(&self, addr: FunctionAddr) -> Option<usize> {
        self.visible
            .iter()
            .position(|&index| self.functions[index].address == addr)
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    #[must_use]
    pub fn tracked_count(&self) -> usize {
        self.functions.len()
    }

    #[must_use]
    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// Active sort column and its current direction, once a sort has been
    /// requested.
    #[must_use]
    pub fn sort_state(&self) -> Option<(Column, SortOrder)> {
        self.sort_column.map(|column| (column, self.sort_orders[column.index()]))
    }

    /// Cell text for one row and column.
    ///
    /// Counts format as integers, time columns as human-friendly durations,
    /// the address as hexadecimal.
    #[must_use]
    pub fn display_value(
        &self,
        session: &CaptureSession,
        hooks: &dyn HookState,
        visible_index: usize,
        column: Column,
    ) -> String {
        let function = self.row(visible_index);
        let stats = session.stats_or_default(function.address);
        match column {
            Column::Hooked => {
                if hooks.is_selected(function.address) {
                    "[X]".to_string()
                } else {
                    "[ ]".to_string()
                }
            }
            Column::Function => function.name.clone(),
            Column::Count => format!("{}", stats.count),
            Column::TimeTotal => stats.total.to_string(),
            Column::TimeAvg => stats.average().to_string(),
            Column::TimeMin => stats.min.to_string(),
            Column::TimeMax => stats.max.to_string(),
            Column::Module => function.module.clone(),
            Column::Address => session.absolute_address(function).to_string(),
        }
    }
}
