// crates/dropdowns-core/src/data/us_states.rs
use crate::raw::UsStateRaw;

/// The 50 states, then the District of Columbia, then the inhabited territories.
pub(crate) static US_STATES: &[UsStateRaw] = &[
    UsStateRaw { name: "Alabama", abbreviation: "AL", is_territory: false, is_dc: false },
    UsStateRaw { name: "Alaska", abbreviation: "AK", is_territory: false, is_dc: false },
    UsStateRaw { name: "Arizona", abbreviation: "AZ", is_territory: false, is_dc: false },
    UsStateRaw { name: "Arkansas", abbreviation: "AR", is_territory: false, is_dc: false },
    UsStateRaw { name: "California", abbreviation: "CA", is_territory: false, is_dc: false },
    UsStateRaw { name: "Colorado", abbreviation: "CO", is_territory: false, is_dc: false },
    UsStateRaw { name: "Connecticut", abbreviation: "CT", is_territory: false, is_dc: false },
    UsStateRaw { name: "Delaware", abbreviation: "DE", is_territory: false, is_dc: false },
    UsStateRaw { name: "Florida", abbreviation: "FL", is_territory: false, is_dc: false },
    UsStateRaw { name: "Georgia", abbreviation: "GA", is_territory: false, is_dc: false },
    UsStateRaw { name: "Hawaii", abbreviation: "HI", is_territory: false, is_dc: false },
    UsStateRaw { name: "Idaho", abbreviation: "ID", is_territory: false, is_dc: false },
    UsStateRaw { name: "Illinois", abbreviation: "IL", is_territory: false, is_dc: false },
    UsStateRaw { name: "Indiana", abbreviation: "IN", is_territory: false, is_dc: false },
    UsStateRaw { name: "Iowa", abbreviation: "IA", is_territory: false, is_dc: false },
    UsStateRaw { name: "Kansas", abbreviation: "KS", is_territory: false, is_dc: false },
    UsStateRaw { name: "Kentucky", abbreviation: "KY", is_territory: false, is_dc: false },
    UsStateRaw { name: "Louisiana", abbreviation: "LA", is_territory: false, is_dc: false },
    UsStateRaw { name: "Maine", abbreviation: "ME", is_territory: false, is_dc: false },
    UsStateRaw { name: "Maryland", abbreviation: "MD", is_territory: false, is_dc: false },
    UsStateRaw { name: "Massachusetts", abbreviation: "MA", is_territory: false, is_dc: false },
    UsStateRaw { name: "Michigan", abbreviation: "MI", is_territory: false, is_dc: false },
    UsStateRaw { name: "Minnesota", abbreviation: "MN", is_territory: false, is_dc: false },
    UsStateRaw { name: "Mississippi", abbreviation: "MS", is_territory: false, is_dc: false },
    UsStateRaw { name: "Missouri", abbreviation: "MO", is_territory: false, is_dc: false },
    UsStateRaw { name: "Montana", abbreviation: "MT", is_territory: false, is_dc: false },
    UsStateRaw { name: "Nebraska", abbreviation: "NE", is_territory: false, is_dc: false },
    UsStateRaw { name: "Nevada", abbreviation: "NV", is_territory: false, is_dc: false },
    UsStateRaw { name: "New Hampshire", abbreviation: "NH", is_territory: false, is_dc: false },
    UsStateRaw { name: "New Jersey", abbreviation: "NJ", is_territory: false, is_dc: false },
    UsStateRaw { name: "New Mexico", abbreviation: "NM", is_territory: false, is_dc: false },
    UsStateRaw { name: "New York", abbreviation: "NY", is_territory: false, is_dc: false },
    UsStateRaw { name: "North Carolina", abbreviation: "NC", is_territory: false, is_dc: false },
    UsStateRaw { name: "North Dakota", abbreviation: "ND", is_territory: false, is_dc: false },
    UsStateRaw { name: "Ohio", abbreviation: "OH", is_territory: false, is_dc: false },
    UsStateRaw { name: "Oklahoma", abbreviation: "OK", is_territory: false, is_dc: false },
    UsStateRaw { name: "Oregon", abbreviation: "OR", is_territory: false, is_dc: false },
    UsStateRaw { name: "Pennsylvania", abbreviation: "PA", is_territory: false, is_dc: false },
    UsStateRaw { name: "Rhode Island", abbreviation: "RI", is_territory: false, is_dc: false },
    UsStateRaw { name: "South Carolina", abbreviation: "SC", is_territory: false, is_dc: false },
    UsStateRaw { name: "South Dakota", abbreviation: "SD", is_territory: false, is_dc: false },
    UsStateRaw { name: "Tennessee", abbreviation: "TN", is_territory: false, is_dc: false },
    UsStateRaw { name: "Texas", abbreviation: "TX", is_territory: false, is_dc: false },
    UsStateRaw { name: "Utah", abbreviation: "UT", is_territory: false, is_dc: false },
    UsStateRaw { name: "Vermont", abbreviation: "VT", is_territory: false, is_dc: false },
    UsStateRaw { name: "Virginia", abbreviation: "VA", is_territory: false, is_dc: false },
    UsStateRaw { name: "Washington", abbreviation: "WA", is_territory: false, is_dc: false },
    UsStateRaw { name: "West Virginia", abbreviation: "WV", is_territory: false, is_dc: false },
    UsStateRaw { name: "Wisconsin", abbreviation: "WI", is_territory: false, is_dc: false },
    UsStateRaw { name: "Wyoming", abbreviation: "WY", is_territory: false, is_dc: false },
    UsStateRaw { name: "District of Columbia", abbreviation: "DC", is_territory: false, is_dc: true },
    UsStateRaw { name: "American Samoa", abbreviation: "AS", is_territory: true, is_dc: false },
    UsStateRaw { name: "Guam", abbreviation: "GU", is_territory: true, is_dc: false },
    UsStateRaw { name: "Northern Mariana Islands", abbreviation: "MP", is_territory: true, is_dc: false },
    UsStateRaw { name: "Puerto Rico", abbreviation: "PR", is_territory: true, is_dc: false },
    UsStateRaw { name: "U.S. Virgin Islands", abbreviation: "VI", is_territory: true, is_dc: false },
];
