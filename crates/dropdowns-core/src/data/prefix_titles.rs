// crates/dropdowns-core/src/data/prefix_titles.rs
use crate::raw::TitleRaw;

pub(crate) static PREFIX_TITLES: &[TitleRaw] = &[
    TitleRaw { name: "Mister", abbreviation: "Mr.", category: "Civilian", number: 1 },
    TitleRaw { name: "Miss", abbreviation: "Miss", category: "Civilian", number: 2 },
    TitleRaw { name: "Ms", abbreviation: "Ms.", category: "Civilian", number: 3 },
    TitleRaw { name: "Mistress", abbreviation: "Mrs.", category: "Civilian", number: 4 },
    TitleRaw { name: "Doctor", abbreviation: "Dr.", category: "Professional", number: 5 },
    TitleRaw { name: "Professor", abbreviation: "Prof.", category: "Professional", number: 6 },
    TitleRaw { name: "Reverend", abbreviation: "Rev.", category: "Religious", number: 7 },
    TitleRaw { name: "Father", abbreviation: "Fr.", category: "Religious", number: 8 },
    TitleRaw { name: "Honorable", abbreviation: "Hon.", category: "Honorific", number: 9 },
];
