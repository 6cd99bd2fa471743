// crates/dropdowns-core/src/data/months.rs
use crate::raw::MonthRaw;

pub(crate) static MONTHS: &[MonthRaw] = &[
    MonthRaw { name: "January", abbreviation: "Jan", number: 1 },
    MonthRaw { name: "February", abbreviation: "Feb", number: 2 },
    MonthRaw { name: "March", abbreviation: "Mar", number: 3 },
    MonthRaw { name: "April", abbreviation: "Apr", number: 4 },
    MonthRaw { name: "May", abbreviation: "May", number: 5 },
    MonthRaw { name: "June", abbreviation: "Jun", number: 6 },
    MonthRaw { name: "July", abbreviation: "Jul", number: 7 },
    MonthRaw { name: "August", abbreviation: "Aug", number: 8 },
    MonthRaw { name: "September", abbreviation: "Sep", number: 9 },
    MonthRaw { name: "October", abbreviation: "Oct", number: 10 },
    MonthRaw { name: "November", abbreviation: "Nov", number: 11 },
    MonthRaw { name: "December", abbreviation: "Dec", number: 12 },
];
