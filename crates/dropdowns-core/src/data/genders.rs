// crates/dropdowns-core/src/data/genders.rs
use crate::raw::CodedRaw;

pub(crate) static GENDERS: &[CodedRaw] = &[
    CodedRaw { name: "Male", code: "M", number: 1 },
    CodedRaw { name: "Female", code: "F", number: 2 },
    CodedRaw { name: "Prefer Not to Say", code: "U", number: 3 },
];
