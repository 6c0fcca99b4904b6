//! Runs every registered sort over the fixture and reports PASS/FAIL per routine.
//!
//! Report layout for one routine:
//!
//! ```text
//! --- Testing Bubble Sort ---
//! Original: [64, 34, 25, 12, 22, 11, 90]
//! Sorted: [11, 12, 22, 25, 34, 64, 90]
//! Result: PASS
//!
//! ```
//!
//! followed, after all routines, by a single summary line.

use std::io::{self, Write};
use std::ops::{BitOr, BitOrAssign};
use std::process::ExitCode;

use crate::fixture;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TestStatus {
    Pass,
    Fail,
}

impl TestStatus {
    /// Process exit code for this status.
    pub fn code(self) -> u8 {
        match self {
            TestStatus::Pass => 0,
            TestStatus::Fail => 1,
        }
    }

    pub fn is_pass(self) -> bool {
        self == TestStatus::Pass
    }
}

impl BitOr for TestStatus {
    type Output = TestStatus;

    fn bitor(self, rhs: TestStatus) -> TestStatus {
        if self.is_pass() && rhs.is_pass() {
            TestStatus::Pass
        } else {
            TestStatus::Fail
        }
    }
}

impl BitOrAssign for TestStatus {
    fn bitor_assign(&mut self, rhs: TestStatus) {
        *self = *self | rhs;
    }
}

impl From<TestStatus> for ExitCode {
    fn from(status: TestStatus) -> ExitCode {
        ExitCode::from(status.code())
    }
}

/// A sort routine as seen by the runner.
#[derive(Copy, Clone)]
pub struct SortRoutine {
    /// Human readable name used in the report header.
    pub name: &'static str,
    pub sort: fn(&mut [i32]),
}

/// All routines enabled in this build, in report order.
pub fn routines() -> Vec<SortRoutine> {
    #[allow(unused_mut)]
    let mut routines = Vec::new();

    #[cfg(feature = "bubble_sort")]
    routines.push(SortRoutine {
        name: "Bubble Sort",
        sort: crate::stable::rust_bubble::sort::<i32>,
    });

    #[cfg(feature = "insertion_sort")]
    routines.push(SortRoutine {
        name: "Insertion Sort",
        sort: crate::stable::rust_insertion::sort::<i32>,
    });

    routines
}

/// Writes `v` as `<prefix>: [a, b, c]` followed by a newline.
pub fn write_array<W: Write>(out: &mut W, prefix: &str, v: &[i32]) -> io::Result<()> {
    write!(out, "{prefix}: [")?;
    for (i, val) in v.iter().enumerate() {
        if i != 0 {
            write!(out, ", ")?;
        }
        write!(out, "{val}")?;
    }
    writeln!(out, "]")
}

/// Sorts a fresh copy of the fixture with `routine` and reports whether it matches the expected
/// result.
pub fn run_test<W: Write>(out: &mut W, routine: &SortRoutine) -> io::Result<TestStatus> {
    writeln!(out, "--- Testing {} ---", routine.name)?;

    let mut test_arr = fixture::INPUT;
    write_array(out, "Original", &test_arr)?;

    (routine.sort)(&mut test_arr);
    write_array(out, "Sorted", &test_arr)?;

    let status = if test_arr == fixture::EXPECTED {
        TestStatus::Pass
    } else {
        TestStatus::Fail
    };

    match status {
        TestStatus::Pass => writeln!(out, "Result: PASS\n")?,
        TestStatus::Fail => writeln!(out, "Result: FAIL\n")?,
    }

    Ok(status)
}

/// Runs every routine in order and prints the summary line. Returns the combined status, which is
/// `Fail` if any single routine failed.
pub fn run_all<W: Write>(out: &mut W, routines: &[SortRoutine]) -> io::Result<TestStatus> {
    let mut status = TestStatus::Pass;

    for routine in routines {
        status |= run_test(out, routine)?;
    }

    match status {
        TestStatus::Pass => writeln!(out, "All tests passed!")?,
        TestStatus::Fail => writeln!(out, "One or more tests failed.")?,
    }

    Ok(status)
}
