//! Column model and comparator dispatch for the live functions table.
//!
//! Each column carries a title and a configured default sort direction; the
//! comparator table maps a column to a plain function value looked up at
//! sort time.

use std::cmp::Ordering;

use crate::capture::{CaptureSession, FunctionDescriptor};
use crate::host::HookState;

/// Sort direction for one column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }
}

/// Columns of the live functions table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    /// Whether the function is currently hooked.
    Hooked,
    /// Display name.
    Function,
    /// Recorded call count.
    Count,
    /// Total elapsed time.
    TimeTotal,
    /// Mean elapsed time.
    TimeAvg,
    /// Shortest recorded call.
    TimeMin,
    /// Longest recorded call.
    TimeMax,
    /// Owning module path.
    Module,
    /// Absolute address.
    Address,
}

impl Column {
    pub const ALL: [Column; 9] = [
        Column::Hooked,
        Column::Function,
        Column::Count,
        Column::TimeTotal,
        Column::TimeAvg,
        Column::TimeMin,
        Column::TimeMax,
        Column::Module,
        Column::Address,
    ];

    pub(crate) fn index(self) -> usize {
        match self {
            Column::Hooked => 0,
            Column::Function => 1,
            Column::Count => 2,
            Column::TimeTotal => 3,
            Column::TimeAvg => 4,
            Column::TimeMin => 5,
            Column::TimeMax => 6,
            Column::Module => 7,
            Column::Address => 8,
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Column::Hooked => "Hooked",
            Column::Function => "Function",
            Column::Count => "Count",
            Column::TimeTotal => "Total",
            Column::TimeAvg => "Avg",
            Column::TimeMin => "Min",
            Column::TimeMax => "Max",
            Column::Module => "Module",
            Column::Address => "Address",
        }
    }

    /// Direction applied when the column first becomes the sort column.
    /// Stat columns default to descending so the heaviest rows surface.
    #[must_use]
    pub fn default_order(self) -> SortOrder {
        match self {
            Column::Function | Column::Module | Column::Address => SortOrder::Ascending,
            Column::Hooked
            | Column::Count
            | Column::TimeTotal
            | Column::TimeAvg
            | Column::TimeMin
            | Column::TimeMax => SortOrder::Descending,
        }
    }
}

/// Read-only context a comparator evaluates rows against.
pub(crate) struct SortContext<'a> {
    pub session: &'a CaptureSession,
    pub hooks: &'a dyn HookState,
}

pub(crate) type Comparator =
    fn(&SortContext<'_>, &FunctionDescriptor, &FunctionDescriptor) -> Ordering;

/// Comparator lookup: one function value per column.
pub(crate) fn comparator_for(column: Column) -> Comparator {
    match column {
        Column::Hooked => by_hooked,
        Column::Function => by_name,
        Column::Count => by_count,
        Column::TimeTotal => by_total,
        Column::TimeAvg => by_average,
        Column::TimeMin => by_min,
        Column::TimeMax => by_max,
        Column::Module => by_module,
        Column::Address => by_address,
    }
}

fn by_hooked(ctx: &SortContext<'_>, a: &FunctionDescriptor, b: &FunctionDescriptor) -> Ordering {
    ctx.hooks.is_selected(a.address).cmp(&ctx.hooks.is_selected(b.address))
}

fn by_name(_: &SortContext<'_>, a: &FunctionDescriptor, b: &FunctionDescriptor) -> Ordering {
    a.name.cmp(&b.name)
}

fn by_module(_: &SortContext<'_>, a: &FunctionDescriptor, b: &FunctionDescriptor) -> Ordering {
    a.module.cmp(&b.module)
}

fn by_address(_: &SortContext<'_>, a: &FunctionDescriptor, b: &FunctionDescriptor) -> Ordering {
    a.address.cmp(&b.address)
}

// Stat comparators read through the or-default lookup, so rows with no
// recorded calls compare as the zero record.

fn by_count(ctx: &SortContext<'_>, a: &FunctionDescriptor, b: &FunctionDescriptor) -> Ordering {
    let stats_a = ctx.session.stats_or_default(a.address);
    let stats_b = ctx.session.stats_or_default(b.address);
    stats_a.count.cmp(&stats_b.count)
}

fn by_total(ctx: &SortContext<'_>, a: &FunctionDescriptor, b: &FunctionDescriptor) -> Ordering {
    let stats_a = ctx.session.stats_or_default(a.address);
    let stats_b = ctx.session.stats_or_default(b.address);
    stats_a.total.cmp(&stats_b.total)
}

fn by_average(ctx: &SortContext<'_>, a: &FunctionDescriptor, b: &FunctionDescriptor) -> Ordering {
    let stats_a = ctx.session.stats_or_default(a.address);
    let stats_b = ctx.session.stats_or_default(b.address);
    stats_a.average().cmp(&stats_b.average())
}

fn by_min(ctx: &SortContext<'_>, a: &FunctionDescriptor, b: &FunctionDescriptor) -> Ordering {
    let stats_a = ctx.session.stats_or_default(a.address);
    let stats_b = ctx.session.stats_or_default(b.address);
    stats_a.min.cmp(&stats_b.min)
}

fn by_max(ctx: &SortContext<'_>, a: &FunctionDescriptor, b: &FunctionDescriptor) -> Ordering {
    let stats_a = ctx.session.stats_or_default(a.address);
    let stats_b = ctx.session.stats_or_default(b.address);
    stats_a.max.cmp(&stats_b.max)
}
