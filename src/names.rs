/*!
Reverse name dictionaries.

The forward direction (enum to string) is a direct index into the
generated name tables via [`TimeZone::name`] and [`Abbreviation::name`]
and needs no dictionary. The reverse direction is served by the types
here: explicitly constructed, immutable values that callers build once
and pass where needed. There is no hidden singleton and no lazy global
initialization; construction is cheap (one sort over a static table)
and visible at the call site.
*/

use alloc::{string::String, vec::Vec};

use crate::zone::{Abbreviation, TimeZone};

/// A string-to-[`TimeZone`] dictionary over the catalog's canonical
/// IANA names.
#[derive(Clone, Debug)]
pub struct TimeZoneNames {
    /// (name, zone), sorted by name for binary search.
    index: Vec<(&'static str, TimeZone)>,
}

impl TimeZoneNames {
    /// Builds the dictionary from the generated name table.
    pub fn new() -> TimeZoneNames {
        let mut index: Vec<(&'static str, TimeZone)> =
            TimeZone::iter().map(|zone| (zone.name(), zone)).collect();
        index.sort_unstable_by_key(|&(name, _)| name);
        TimeZoneNames { index }
    }

    /// Looks up a zone by its canonical IANA name, e.g.
    /// `Europe/London`. Exact match only.
    pub fn get(&self, name: &str) -> Option<TimeZone> {
        let i = self
            .index
            .binary_search_by_key(&name, |&(name, _)| name)
            .ok()?;
        Some(self.index[i].1)
    }

    /// Normalizes an IANA name into the identifier form used for the
    /// generated enum variants: `/` and `-` become `_`.
    ///
    /// `enum_name("America/Port-au-Prince")` is
    /// `"America_Port_au_Prince"`. This does not check that the zone
    /// exists.
    pub fn enum_name(name: &str) -> String {
        name.chars()
            .map(|c| if c == '/' || c == '-' { '_' } else { c })
            .collect()
    }
}

impl Default for TimeZoneNames {
    fn default() -> TimeZoneNames {
        TimeZoneNames::new()
    }
}

/// A string-to-[`Abbreviation`] dictionary over the display
/// abbreviations referenced by the catalog.
#[derive(Clone, Debug)]
pub struct AbbreviationNames {
    /// (name, abbreviation), sorted by name for binary search.
    index: Vec<(&'static str, Abbreviation)>,
}

impl AbbreviationNames {
    /// Builds the dictionary from the generated name table.
    pub fn new() -> AbbreviationNames {
        let mut index: Vec<(&'static str, Abbreviation)> = Abbreviation::iter()
            .map(|abbreviation| (abbreviation.name(), abbreviation))
            .collect();
        index.sort_unstable_by_key(|&(name, _)| name);
        AbbreviationNames { index }
    }

    /// Looks up an abbreviation by its display form, e.g. `BST` or
    /// `+0545`. Exact match only.
    pub fn get(&self, name: &str) -> Option<Abbreviation> {
        let i = self
            .index
            .binary_search_by_key(&name, |&(name, _)| name)
            .ok()?;
        Some(self.index[i].1)
    }
}

impl Default for AbbreviationNames {
    fn default() -> AbbreviationNames {
        AbbreviationNames::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zone_lookup_roundtrips() {
        let names = TimeZoneNames::new();
        for zone in TimeZone::iter() {
            assert_eq!(names.get(zone.name()), Some(zone));
        }
        assert_eq!(names.get("Europe/London"), Some(TimeZone::Europe_London));
        assert_eq!(names.get("Invalid"), None);
        assert_eq!(names.get("Europe/Atlantis"), None);
        assert_eq!(names.get("europe/london"), None);
    }

    #[test]
    fn abbreviation_lookup_roundtrips() {
        let names = AbbreviationNames::new();
        for abbreviation in Abbreviation::iter() {
            assert_eq!(names.get(abbreviation.name()), Some(abbreviation));
        }
        assert_eq!(names.get("BST"), Some(Abbreviation::BST));
        assert_eq!(names.get("+0545"), Some(Abbreviation::p0545));
        assert_eq!(names.get("Invalid"), None);
        assert_eq!(names.get("XYZ"), None);
    }

    #[test]
    fn enum_name_normalization() {
        assert_eq!(
            TimeZoneNames::enum_name("America/Port-au-Prince"),
            "America_Port_au_Prince",
        );
        assert_eq!(TimeZoneNames::enum_name("Europe/London"), "Europe_London");
        assert_eq!(TimeZoneNames::enum_name("UTC"), "UTC");
    }
}
