//! `DateRange` — an inclusive run of consecutive dates.

use std::iter::FusedIterator;

use crate::date::ShireDate;

/// Iterator over every date from a start to an end date, both inclusive.
///
/// Empty when the start is after the end.
#[derive(Debug, Clone)]
pub struct DateRange {
    front: ShireDate,
    back: ShireDate,
    exhausted: bool,
}

impl DateRange {
    /// Create the range `[start, end]`.
    pub fn new(start: ShireDate, end: ShireDate) -> Self {
        Self {
            front: start,
            back: end,
            exhausted: start > end,
        }
    }

    /// Number of dates not yet yielded.
    fn remaining(&self) -> usize {
        if self.exhausted {
            0
        } else {
            usize::try_from(self.front.days_between(self.back) + 1).unwrap_or(usize::MAX)
        }
    }
}

impl Iterator for DateRange {
    type Item = ShireDate;

    fn next(&mut self) -> Option<ShireDate> {
        if self.exhausted {
            return None;
        }
        let d = self.front;
        if d == self.back {
            self.exhausted = true;
        } else {
            self.front = d.next_day();
        }
        Some(d)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

impl DoubleEndedIterator for DateRange {
    fn next_back(&mut self) -> Option<ShireDate> {
        if self.exhausted {
            return None;
        }
        let d = self.back;
        if d == self.front {
            self.exhausted = true;
        } else {
            self.back = d.prev_day();
        }
        Some(d)
    }
}

impl ExactSizeIterator for DateRange {}

impl FusedIterator for DateRange {}
