// crates/dropdowns-core/src/data/suffixes.rs
use crate::raw::TitleRaw;

pub(crate) static SUFFIXES: &[TitleRaw] = &[
    TitleRaw { name: "Junior", abbreviation: "Jr.", category: "Generational", number: 1 },
    TitleRaw { name: "Senior", abbreviation: "Sr.", category: "Generational", number: 2 },
    TitleRaw { name: "The Second", abbreviation: "II", category: "Generational", number: 3 },
    TitleRaw { name: "The Third", abbreviation: "III", category: "Generational", number: 4 },
    TitleRaw { name: "The Fourth", abbreviation: "IV", category: "Generational", number: 5 },
    TitleRaw { name: "The Fifth", abbreviation: "V", category: "Generational", number: 6 },
    TitleRaw { name: "Doctor of Philosophy", abbreviation: "PhD", category: "Academic", number: 7 },
    TitleRaw { name: "Doctor of Medicine", abbreviation: "MD", category: "Academic", number: 8 },
    TitleRaw { name: "Doctor of Dental Surgery", abbreviation: "DDS", category: "Academic", number: 9 },
    TitleRaw { name: "Doctor of Education", abbreviation: "EdD", category: "Academic", number: 10 },
    TitleRaw { name: "Juris Doctor", abbreviation: "JD", category: "Academic", number: 11 },
    TitleRaw { name: "Master of Business Administration", abbreviation: "MBA", category: "Academic", number: 12 },
    TitleRaw { name: "Master of Science", abbreviation: "MS", category: "Academic", number: 13 },
    TitleRaw { name: "Master of Arts", abbreviation: "MA", category: "Academic", number: 14 },
    TitleRaw { name: "Bachelor of Science", abbreviation: "BS", category: "Academic", number: 15 },
    TitleRaw { name: "Bachelor of Arts", abbreviation: "BA", category: "Academic", number: 16 },
    TitleRaw { name: "Esquire", abbreviation: "Esq.", category: "Professional", number: 17 },
    TitleRaw { name: "Certified Public Accountant", abbreviation: "CPA", category: "Professional", number: 18 },
    TitleRaw { name: "Professional Engineer", abbreviation: "PE", category: "Professional", number: 19 },
    TitleRaw { name: "Registered Nurse", abbreviation: "RN", category: "Professional", number: 20 },
    TitleRaw { name: "Licensed Practical Nurse", abbreviation: "LPN", category: "Professional", number: 21 },
    TitleRaw { name: "Certified Financial Planner", abbreviation: "CFP", category: "Professional", number: 22 },
];
