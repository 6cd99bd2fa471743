// crates/dropdowns-core/src/provider/regions.rs
use super::find_by;
use crate::builder::{CanadianProvincesBuilder, MexicanStatesBuilder, UsStatesBuilder};
use crate::model::{convert, CanadianProvince, MexicanState, UsState};

provider! {
    /// The 50 US states, the District of Columbia and five territories.
    UsStates => UsState, "us-states", convert::us_states, UsStatesBuilder
}

impl UsStates {
    /// The 50 states only.
    pub fn states50(&self) -> Vec<&UsState> {
        self.all().iter().filter(|s| s.is_state()).collect()
    }

    /// The 50 states plus DC.
    pub fn states_and_dc(&self) -> Vec<&UsState> {
        self.all().iter().filter(|s| !s.is_territory).collect()
    }

    pub fn territories(&self) -> Vec<&UsState> {
        self.all().iter().filter(|s| s.is_territory).collect()
    }

    pub fn by_abbreviation(&self, abbreviation: &str) -> Option<&UsState> {
        find_by(self.all(), abbreviation, |s| s.abbreviation)
    }

    pub fn by_name(&self, name: &str) -> Option<&UsState> {
        find_by(self.all(), name, |s| s.name)
    }
}

provider! {
    /// Ten provinces and three territories.
    CanadianProvinces => CanadianProvince, "canadian-provinces", convert::canadian_provinces, CanadianProvincesBuilder
}

impl CanadianProvinces {
    pub fn provinces(&self) -> Vec<&CanadianProvince> {
        self.all().iter().filter(|p| !p.is_territory).collect()
    }

    pub fn territories(&self) -> Vec<&CanadianProvince> {
        self.all().iter().filter(|p| p.is_territory).collect()
    }

    pub fn by_abbreviation(&self, abbreviation: &str) -> Option<&CanadianProvince> {
        find_by(self.all(), abbreviation, |p| p.abbreviation)
    }

    pub fn by_name(&self, name: &str) -> Option<&CanadianProvince> {
        find_by(self.all(), name, |p| p.name)
    }
}

provider! {
    /// The 31 Mexican states followed by Mexico City.
    MexicanStates => MexicanState, "mexican-states", convert::mexican_states, MexicanStatesBuilder
}

impl MexicanStates {
    /// The 31 states, without Mexico City.
    pub fn states(&self) -> Vec<&MexicanState> {
        self.all().iter().filter(|s| !s.is_federal_district).collect()
    }

    /// Everything; same content as [`MexicanStates::all`].
    pub fn states_and_cdmx(&self) -> Vec<&MexicanState> {
        self.all().iter().collect()
    }

    pub fn by_abbreviation(&self, abbreviation: &str) -> Option<&MexicanState> {
        find_by(self.all(), abbreviation, |s| s.abbreviation)
    }

    /// Name lookup; accents must match (`"Querétaro"`, not `"Queretaro"`).
    pub fn by_name(&self, name: &str) -> Option<&MexicanState> {
        find_by(self.all(), name, |s| s.name)
    }
}
