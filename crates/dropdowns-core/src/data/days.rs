// crates/dropdowns-core/src/data/days.rs
use crate::raw::DayRaw;

/// Week starting on Sunday (0) through Saturday (6).
pub(crate) static DAYS: &[DayRaw] = &[
    DayRaw { name: "Sunday", abbreviation: "Sun", short_abbreviation: "Su", number: 0 },
    DayRaw { name: "Monday", abbreviation: "Mon", short_abbreviation: "M", number: 1 },
    DayRaw { name: "Tuesday", abbreviation: "Tue", short_abbreviation: "Tu", number: 2 },
    DayRaw { name: "Wednesday", abbreviation: "Wed", short_abbreviation: "We", number: 3 },
    DayRaw { name: "Thursday", abbreviation: "Thu", short_abbreviation: "Th", number: 4 },
    DayRaw { name: "Friday", abbreviation: "Fri", short_abbreviation: "F", number: 5 },
    DayRaw { name: "Saturday", abbreviation: "Sat", short_abbreviation: "Sa", number: 6 },
];
