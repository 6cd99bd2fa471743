// crates/dropdowns-core/src/provider/countries.rs
use super::{distinct, filter_by, find_by};
use crate::builder::CountriesBuilder;
use crate::model::{convert, Country};

provider! {
    /// Countries keyed by ISO 3166-1 alpha-2 code.
    ///
    /// # Examples
    /// ```
    /// use dropdowns_core::dropdowns;
    ///
    /// let countries = dropdowns().countries();
    /// assert_eq!(countries.by_alpha3_code("deu").map(|c| c.alpha2), Some("DE"));
    /// assert!(countries.by_continent("Europe").iter().all(|c| c.continent == "Europe"));
    /// ```
    Countries => Country, "countries", convert::countries, CountriesBuilder
}

impl Countries {
    /// Countries on `continent`, table order. Blank or unknown → empty.
    pub fn by_continent(&self, continent: &str) -> Vec<&Country> {
        filter_by(self.all(), continent, |c| c.continent)
    }

    pub fn by_alpha2_code(&self, code: &str) -> Option<&Country> {
        find_by(self.all(), code, |c| c.alpha2)
    }

    pub fn by_alpha3_code(&self, code: &str) -> Option<&Country> {
        find_by(self.all(), code, |c| c.alpha3)
    }

    /// Looks up the three-digit numeric code (`"840"`). Leading zeros are significant.
    pub fn by_numeric_code(&self, code: &str) -> Option<&Country> {
        find_by(self.all(), code, |c| c.numeric_code)
    }

    pub fn by_name(&self, name: &str) -> Option<&Country> {
        find_by(self.all(), name, |c| c.name)
    }

    /// Continent names in order of first appearance.
    pub fn continents(&self) -> Vec<&'static str> {
        distinct(self.all(), |c| c.continent)
    }
}
