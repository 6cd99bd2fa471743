// crates/dropdowns-core/src/provider/numbers.rs
use crate::error::{ensure_positive, Result};
use crate::model::{Direction, NumberOption};

/// Generator for numeric pick lists (quantities, ratings, ages, ...).
#[derive(Debug, Clone, Copy, Default)]
pub struct Numbers;

impl Numbers {
    pub const fn new() -> Self {
        Numbers
    }

    /// An inclusive range between `start` and `end`, step 1, ascending.
    ///
    /// The bounds may be given in either order.
    ///
    /// # Examples
    /// ```
    /// use dropdowns_core::dropdowns;
    ///
    /// let tens = dropdowns().numbers().range(0, 100).step(10).build()?;
    /// assert_eq!(tens.len(), 11);
    ///
    /// let countdown = dropdowns().numbers().range(1, 10).descending().build()?;
    /// assert_eq!(countdown[0].number, 10);
    /// # Ok::<(), dropdowns_core::DropdownError>(())
    /// ```
    pub fn range(&self, start: i32, end: i32) -> NumberRange {
        NumberRange {
            start,
            end,
            step: 1,
            direction: Direction::Ascending,
        }
    }
}

/// A configured number range; nothing is generated until [`NumberRange::build`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberRange {
    start: i32,
    end: i32,
    step: i32,
    direction: Direction,
}

impl NumberRange {
    /// Distance between consecutive values. Must be positive; checked in `build`.
    pub fn step(mut self, step: i32) -> Self {
        self.step = step;
        self
    }

    pub fn descending(self) -> Self {
        self.direction(Direction::Descending)
    }

    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Counts up from the smaller bound in `step` increments, never passing
    /// the larger bound, then reverses when descending.
    ///
    /// So `range(0, 10).step(3)` is `0 3 6 9` and, descending, `9 6 3 0`.
    pub fn build(&self) -> Result<Vec<NumberOption>> {
        ensure_positive("step", self.step)?;

        let min = self.start.min(self.end);
        let max = self.start.max(self.end);
        let span = (i64::from(max) - i64::from(min)) / i64::from(self.step);
        let mut numbers = Vec::with_capacity(usize::try_from(span + 1).unwrap_or(0));

        let mut n = min;
        loop {
            numbers.push(NumberOption::new(n));
            match n.checked_add(self.step) {
                Some(next) if next <= max => n = next,
                _ => break,
            }
        }

        if self.direction.is_descending() {
            numbers.reverse();
        }
        tracing::trace!(
            start = self.start,
            end = self.end,
            step = self.step,
            count = numbers.len(),
            "generated number range"
        );
        Ok(numbers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DropdownError;

    fn values(list: &[NumberOption]) -> Vec<i32> {
        list.iter().map(|n| n.number).collect()
    }

    #[test]
    fn stepped_range_stops_before_the_end() {
        let list = Numbers.range(0, 10).step(3).build().unwrap();
        assert_eq!(values(&list), [0, 3, 6, 9]);
    }

    #[test]
    fn descending_reverses_the_ascending_walk() {
        let list = Numbers.range(0, 10).step(3).descending().build().unwrap();
        assert_eq!(values(&list), [9, 6, 3, 0]);
    }

    #[test]
    fn swapped_bounds_are_normalized() {
        let list = Numbers.range(5, 1).build().unwrap();
        assert_eq!(values(&list), [1, 2, 3, 4, 5]);
    }

    #[test]
    fn zero_step_is_rejected() {
        let err = Numbers.range(1, 5).step(0).build().unwrap_err();
        assert!(matches!(err, DropdownError::NonPositive { param: "step", value: 0 }));
    }

    #[test]
    fn upper_edge_does_not_overflow() {
        let list = Numbers.range(i32::MAX - 2, i32::MAX).step(2).build().unwrap();
        assert_eq!(values(&list), [i32::MAX - 2, i32::MAX]);

        let list = Numbers.range(i32::MAX - 1, i32::MAX).step(5).build().unwrap();
        assert_eq!(values(&list), [i32::MAX - 1]);
    }
}
