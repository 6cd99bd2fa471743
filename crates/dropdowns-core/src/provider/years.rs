// crates/dropdowns-core/src/provider/years.rs
use crate::error::{ensure_positive, DropdownError, Result};
use crate::model::{Direction, YearOption};
use chrono::{Datelike, Local};

/// Generator for year pick lists, relative to the current year.
///
/// The current year is read from the local clock on every call unless it
/// was pinned with [`Years::with_current_year`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Years {
    current_year: Option<i32>,
}

impl Years {
    pub const fn new() -> Self {
        Self { current_year: None }
    }

    /// A generator that treats `year` as the current year.
    pub const fn with_current_year(year: i32) -> Self {
        Self {
            current_year: Some(year),
        }
    }

    pub fn current_year(&self) -> i32 {
        self.current_year.unwrap_or_else(|| Local::now().year())
    }

    /// Every year between `start` and `end` inclusive; bounds in either order.
    pub fn range(&self, start: i32, end: i32, direction: Direction) -> Vec<YearOption> {
        generate(start, end, direction)
    }

    /// The last `count` years ending with the current one, newest first.
    ///
    /// ```
    /// use dropdowns_core::Years;
    ///
    /// let years = Years::with_current_year(2025).last(3)?;
    /// let labels: Vec<i32> = years.iter().map(|y| y.year).collect();
    /// assert_eq!(labels, [2025, 2024, 2023]);
    /// # Ok::<(), dropdowns_core::DropdownError>(())
    /// ```
    pub fn last(&self, count: i32) -> Result<Vec<YearOption>> {
        self.last_with(count, Direction::Descending)
    }

    pub fn last_with(&self, count: i32, direction: Direction) -> Result<Vec<YearOption>> {
        ensure_positive("count", count)?;
        let current = self.current_year();
        let start = current
            .checked_sub(count - 1)
            .ok_or_else(|| out_of_range(count))?;
        Ok(generate(start, current, direction))
    }

    /// The next `count` years starting with the current one, oldest first.
    pub fn next(&self, count: i32) -> Result<Vec<YearOption>> {
        self.next_with(count, Direction::Ascending)
    }

    pub fn next_with(&self, count: i32, direction: Direction) -> Result<Vec<YearOption>> {
        ensure_positive("count", count)?;
        let current = self.current_year();
        let end = current
            .checked_add(count - 1)
            .ok_or_else(|| out_of_range(count))?;
        Ok(generate(current, end, direction))
    }
}

fn out_of_range(count: i32) -> DropdownError {
    DropdownError::OutOfRange {
        param: "count",
        value: i64::from(count),
    }
}

fn generate(start: i32, end: i32, direction: Direction) -> Vec<YearOption> {
    let (min, max) = (start.min(end), start.max(end));
    let mut years: Vec<YearOption> = (min..=max).map(YearOption::new).collect();
    if direction.is_descending() {
        years.reverse();
    }
    years
}

#[cfg(test)]
mod tests {
    use super::*;

    fn years(list: &[YearOption]) -> Vec<i32> {
        list.iter().map(|y| y.year).collect()
    }

    #[test]
    fn next_counts_forward_from_the_current_year() {
        let list = Years::with_current_year(2024).next(3).unwrap();
        assert_eq!(years(&list), [2024, 2025, 2026]);
    }

    #[test]
    fn direction_overrides_the_default() {
        let y = Years::with_current_year(2024);
        assert_eq!(years(&y.last_with(2, Direction::Ascending).unwrap()), [2023, 2024]);
        assert_eq!(years(&y.next_with(2, Direction::Descending).unwrap()), [2025, 2024]);
    }

    #[test]
    fn range_normalizes_bounds() {
        let list = Years::new().range(2000, 1998, Direction::Ascending);
        assert_eq!(years(&list), [1998, 1999, 2000]);
    }

    #[test]
    fn count_must_be_positive() {
        let err = Years::with_current_year(2024).last(0).unwrap_err();
        assert_eq!(err.param(), Some("count"));
        assert!(Years::with_current_year(2024).next(-1).is_err());
    }

    #[test]
    fn spans_past_the_year_domain_are_rejected() {
        let err = Years::with_current_year(i32::MAX).next(2).unwrap_err();
        assert!(matches!(err, DropdownError::OutOfRange { .. }));
        assert!(Years::with_current_year(i32::MIN).last(2).is_err());
    }
}
