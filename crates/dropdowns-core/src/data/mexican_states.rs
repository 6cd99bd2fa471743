// crates/dropdowns-core/src/data/mexican_states.rs
use crate::raw::MexicanStateRaw;

/// The 31 states in alphabetical order, then Mexico City (ISO 3166-2:MX codes).
pub(crate) static MEXICAN_STATES: &[MexicanStateRaw] = &[
    MexicanStateRaw { name: "Aguascalientes", abbreviation: "AGU", is_federal_district: false },
    MexicanStateRaw { name: "Baja California", abbreviation: "BCN", is_federal_district: false },
    MexicanStateRaw { name: "Baja California Sur", abbreviation: "BCS", is_federal_district: false },
    MexicanStateRaw { name: "Campeche", abbreviation: "CAM", is_federal_district: false },
    MexicanStateRaw { name: "Chiapas", abbreviation: "CHP", is_federal_district: false },
    MexicanStateRaw { name: "Chihuahua", abbreviation: "CHH", is_federal_district: false },
    MexicanStateRaw { name: "Coahuila", abbreviation: "COA", is_federal_district: false },
    MexicanStateRaw { name: "Colima", abbreviation: "COL", is_federal_district: false },
    MexicanStateRaw { name: "Durango", abbreviation: "DUR", is_federal_district: false },
    MexicanStateRaw { name: "Guanajuato", abbreviation: "GUA", is_federal_district: false },
    MexicanStateRaw { name: "Guerrero", abbreviation: "GRO", is_federal_district: false },
    MexicanStateRaw { name: "Hidalgo", abbreviation: "HID", is_federal_district: false },
    MexicanStateRaw { name: "Jalisco", abbreviation: "JAL", is_federal_district: false },
    MexicanStateRaw { name: "México", abbreviation: "MEX", is_federal_district: false },
    MexicanStateRaw { name: "Michoacán", abbreviation: "MIC", is_federal_district: false },
    MexicanStateRaw { name: "Morelos", abbreviation: "MOR", is_federal_district: false },
    MexicanStateRaw { name: "Nayarit", abbreviation: "NAY", is_federal_district: false },
    MexicanStateRaw { name: "Nuevo León", abbreviation: "NLE", is_federal_district: false },
    MexicanStateRaw { name: "Oaxaca", abbreviation: "OAX", is_federal_district: false },
    MexicanStateRaw { name: "Puebla", abbreviation: "PUE", is_federal_district: false },
    MexicanStateRaw { name: "Querétaro", abbreviation: "QUE", is_federal_district: false },
    MexicanStateRaw { name: "Quintana Roo", abbreviation: "ROO", is_federal_district: false },
    MexicanStateRaw { name: "San Luis Potosí", abbreviation: "SLP", is_federal_district: false },
    MexicanStateRaw { name: "Sinaloa", abbreviation: "SIN", is_federal_district: false },
    MexicanStateRaw { name: "Sonora", abbreviation: "SON", is_federal_district: false },
    MexicanStateRaw { name: "Tabasco", abbreviation: "TAB", is_federal_district: false },
    MexicanStateRaw { name: "Tamaulipas", abbreviation: "TAM", is_federal_district: false },
    MexicanStateRaw { name: "Tlaxcala", abbreviation: "TLA", is_federal_district: false },
    MexicanStateRaw { name: "Veracruz", abbreviation: "VER", is_federal_district: false },
    MexicanStateRaw { name: "Yucatán", abbreviation: "YUC", is_federal_district: false },
    MexicanStateRaw { name: "Zacatecas", abbreviation: "ZAC", is_federal_district: false },
    MexicanStateRaw { name: "Ciudad de México", abbreviation: "CMX", is_federal_district: true },
];
