// crates/dropdowns-core/src/data/canadian_provinces.rs
use crate::raw::ProvinceRaw;

/// Ten provinces followed by three territories.
pub(crate) static CANADIAN_PROVINCES: &[ProvinceRaw] = &[
    ProvinceRaw { name: "Alberta", abbreviation: "AB", is_territory: false },
    ProvinceRaw { name: "British Columbia", abbreviation: "BC", is_territory: false },
    ProvinceRaw { name: "Manitoba", abbreviation: "MB", is_territory: false },
    ProvinceRaw { name: "New Brunswick", abbreviation: "NB", is_territory: false },
    ProvinceRaw { name: "Newfoundland and Labrador", abbreviation: "NL", is_territory: false },
    ProvinceRaw { name: "Nova Scotia", abbreviation: "NS", is_territory: false },
    ProvinceRaw { name: "Ontario", abbreviation: "ON", is_territory: false },
    ProvinceRaw { name: "Prince Edward Island", abbreviation: "PE", is_territory: false },
    ProvinceRaw { name: "Quebec", abbreviation: "QC", is_territory: false },
    ProvinceRaw { name: "Saskatchewan", abbreviation: "SK", is_territory: false },
    ProvinceRaw { name: "Northwest Territories", abbreviation: "NT", is_territory: true },
    ProvinceRaw { name: "Nunavut", abbreviation: "NU", is_territory: true },
    ProvinceRaw { name: "Yukon", abbreviation: "YT", is_territory: true },
];
