// crates/dropdowns-core/src/data/marital_statuses.rs
use crate::raw::CodedRaw;

pub(crate) static MARITAL_STATUSES: &[CodedRaw] = &[
    CodedRaw { name: "Single", code: "S", number: 1 },
    CodedRaw { name: "Married", code: "M", number: 2 },
    CodedRaw { name: "Divorced", code: "D", number: 3 },
    CodedRaw { name: "Widowed", code: "W", number: 4 },
    CodedRaw { name: "Separated", code: "SP", number: 5 },
    CodedRaw { name: "Domestic Partnership", code: "DP", number: 6 },
];
