// crates/dropdowns-core/src/data/yes_no.rs
use crate::raw::YesNoRaw;

pub(crate) static YES_NO: &[YesNoRaw] = &[
    YesNoRaw { name: "Yes", code: "Y", number: 1, preset: "Basic" },
    YesNoRaw { name: "No", code: "N", number: 2, preset: "Basic" },
    YesNoRaw { name: "N/A", code: "NA", number: 3, preset: "Extended" },
    YesNoRaw { name: "Unknown", code: "U", number: 4, preset: "Extended" },
];
