//! Domain types providing compile-time safety and self-documentation
//!
//! These newtype wrappers prevent common bugs like passing a raw timestamp
//! where a function address is expected, and make signatures expressive.

use std::fmt;

/// Absolute address of an instrumented function
///
/// Identifies a function in the target process. Addresses are stable for the
/// lifetime of a capture session and key every statistics lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FunctionAddr(pub u64);

impl fmt::Display for FunctionAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:x}", self.0)
    }
}

/// Thread ID
///
/// Represents a thread ID in the target process, as assigned by the kernel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tid(pub u32);

impl fmt::Display for Tid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TID:{}", self.0)
    }
}

/// Timestamp in nanoseconds
///
/// Represents an absolute point in time as nanoseconds since capture start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp(pub u64);

impl Timestamp {
    /// Earliest representable timestamp, used as the lower bound for
    /// "first occurrence" timeline queries.
    pub const MIN: Timestamp = Timestamp(u64::MIN);

    /// Latest representable timestamp, used as the upper bound for
    /// "last occurrence" timeline queries.
    pub const MAX: Timestamp = Timestamp(u64::MAX);

    /// Convert to seconds (f64)
    #[must_use]
    pub fn as_seconds(self) -> f64 {
        self.0 as f64 / 1_000_000_000.0
    }

    /// Convert to microseconds (u64)
    #[must_use]
    pub fn as_micros(self) -> u64 {
        self.0 / 1_000
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}s", self.as_seconds())
    }
}

/// Duration in nanoseconds
///
/// Represents the elapsed time of one recorded function call, or an
/// aggregate of such times.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Duration(pub u64);

impl Duration {
    pub const ZERO: Duration = Duration(0);

    /// Convert to milliseconds (f64)
    #[must_use]
    pub fn as_millis(self) -> f64 {
        self.0 as f64 / 1_000_000.0
    }

    /// Convert to seconds (f64)
    #[must_use]
    pub fn as_seconds(self) -> f64 {
        self.0 as f64 / 1_000_000_000.0
    }

    /// Convert to microseconds (u64)
    #[must_use]
    pub fn as_micros(self) -> u64 {
        self.0 / 1_000
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 < 1_000 {
            write!(f, "{}ns", self.0)
        } else if self.0 < 1_000_000 {
            write!(f, "{:.2}us", self.0 as f64 / 1_000.0)
        } else if self.0 < 1_000_000_000 {
            write!(f, "{:.2}ms", self.as_millis())
        } else {
            write!(f, "{:.2}s", self.as_seconds())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_function_addr_display_is_hex() {
        assert_eq!(FunctionAddr(0x4011a0).to_string(), "0x4011a0");
        assert_eq!(FunctionAddr(0).to_string(), "0x0");
    }

    #[test]
    fn test_tid_display() {
        assert_eq!(Tid(1234).to_string(), "TID:1234");
    }

    #[test]
    fn test_timestamp_conversions() {
        let ts = Timestamp(1_500_000_000); // 1.5 seconds
        assert_eq!(ts.as_seconds(), 1.5);
        assert_eq!(ts.as_micros(), 1_500_000);
    }

    #[test]
    fn test_timestamp_bounds_order() {
        assert!(Timestamp::MIN < Timestamp(1));
        assert!(Timestamp(u64::MAX - 1) < Timestamp::MAX);
    }

    #[test]
    fn test_duration_conversions() {
        let dur = Duration(5_000_000); // 5 milliseconds
        assert_eq!(dur.as_millis(), 5.0);
        assert_eq!(dur.as_seconds(), 0.005);
        assert_eq!(dur.as_micros(), 5_000);
    }

    #[test]
    fn test_duration_display_tiers() {
        assert_eq!(Duration(750).to_string(), "750ns");
        assert_eq!(Duration(12_500).to_string(), "12.50us");
        assert_eq!(Duration(5_000_000).to_string(), "5.00ms");
        assert_eq!(Duration(1_500_000_000).to_string(), "1.50s");
    }
}
