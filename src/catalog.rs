use alloc::vec::Vec;

use crate::{
    error::{err, Error},
    generated,
    rule::Rule,
    zone::TimeZone,
};

const NO_RULES: &[Rule] = &[];

/// An immutable table mapping each supported time zone to its ordered
/// rule sequence.
///
/// A catalog is built once, usually via [`Catalog::bundled`] from the
/// generated tables, and then only read. It has no interior mutability,
/// so any number of threads may query it concurrently without locks.
///
/// Zone ordinals are contiguous, so dispatch is a dense index rather
/// than a hash lookup: `rules_for` is an array access.
#[derive(Debug)]
pub struct Catalog {
    /// Rule sequences indexed by zone ordinal. Ordinal 0 (`Invalid`)
    /// and any zone absent from the source table hold an empty slice.
    zones: Vec<&'static [Rule]>,
    zone_count: usize,
    rule_count: usize,
}

impl Catalog {
    /// Builds a catalog from a `(zone, rules)` table, validating every
    /// data invariant the resolver later relies on.
    ///
    /// This is the build-time validation pass: malformed data is
    /// rejected here with an error naming the offending zone, so the
    /// query path never has to handle it. A table entry is rejected
    /// when it names `TimeZone::Invalid`, repeats a zone, carries an
    /// empty sequence, contains a sentinel rule, or is not strictly
    /// ascending by start instant. The last check also catches
    /// duplicate start instants, where which rule wins would be
    /// undefined.
    pub fn new(table: &[(TimeZone, &'static [Rule])]) -> Result<Catalog, Error> {
        let mut zones = Vec::new();
        zones.resize(generated::timezone::TIME_ZONES.len(), NO_RULES);
        let mut zone_count = 0;
        let mut rule_count = 0;
        for &(zone, rules) in table {
            if zone == TimeZone::Invalid {
                return Err(err!("catalog table names the Invalid zone"));
            }
            let slot = &mut zones[zone.ordinal() as usize];
            if !slot.is_empty() {
                return Err(err!("duplicate catalog entry for {}", zone.name()));
            }
            if rules.is_empty() {
                return Err(err!("{} has no rules", zone.name()));
            }
            for (i, rule) in rules.iter().enumerate() {
                if !rule.is_valid() {
                    return Err(err!(
                        "{} rule {i} is the invalid sentinel",
                        zone.name(),
                    ));
                }
                if i > 0 && rules[i - 1].time_start() >= rule.time_start() {
                    return Err(err!(
                        "{} rules are not strictly ascending at index {i} \
                         ({} >= {})",
                        zone.name(),
                        rules[i - 1].time_start(),
                        rule.time_start(),
                    ));
                }
            }
            *slot = rules;
            zone_count += 1;
            rule_count += rules.len();
        }
        debug!("catalog built: {zone_count} zones, {rule_count} rules");
        Ok(Catalog { zones, zone_count, rule_count })
    }

    /// Builds the catalog of generated rule tables bundled with this
    /// crate.
    ///
    /// The generator guarantees the invariants `Catalog::new` checks
    /// (and `Rule::new`'s range checks have already run during const
    /// evaluation of the tables), so this skips re-validation. A test
    /// pushes the bundled tables through `Catalog::new` anyway.
    pub fn bundled() -> Catalog {
        let table = &generated::rules::ZONE_RULES;
        let mut zones = Vec::new();
        zones.resize(generated::timezone::TIME_ZONES.len(), NO_RULES);
        let mut rule_count = 0;
        for &(zone, rules) in table {
            zones[zone.ordinal() as usize] = rules;
            rule_count += rules.len();
        }
        Catalog { zones, zone_count: table.len(), rule_count }
    }

    /// The rule sequence for the given zone, ascending by start
    /// instant, or `None` for `Invalid` or a zone this catalog does not
    /// cover.
    #[inline]
    pub fn rules_for(&self, zone: TimeZone) -> Option<&'static [Rule]> {
        match self.zones.get(zone.ordinal() as usize) {
            Some(rules) if !rules.is_empty() => Some(rules),
            _ => None,
        }
    }

    /// The number of zones with at least one rule.
    pub fn zone_count(&self) -> usize {
        self.zone_count
    }

    /// The total number of rules across all zones.
    pub fn rule_count(&self) -> usize {
        self.rule_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zone::Abbreviation;
    use alloc::string::ToString;

    #[test]
    fn bundled_passes_validation() {
        let catalog = Catalog::new(&generated::rules::ZONE_RULES).unwrap();
        assert_eq!(catalog.zone_count(), TimeZone::count());
        assert!(catalog.rule_count() >= catalog.zone_count());
    }

    #[test]
    fn bundled_matches_validated() {
        let bundled = Catalog::bundled();
        let validated = Catalog::new(&generated::rules::ZONE_RULES).unwrap();
        assert_eq!(bundled.zone_count(), validated.zone_count());
        assert_eq!(bundled.rule_count(), validated.rule_count());
        for zone in TimeZone::iter() {
            assert_eq!(bundled.rules_for(zone), validated.rules_for(zone));
        }
    }

    #[test]
    fn every_bundled_zone_has_rules() {
        let catalog = Catalog::bundled();
        for zone in TimeZone::iter() {
            let rules = catalog.rules_for(zone)
                .unwrap_or_else(|| panic!("no rules for {}", zone.name()));
            assert!(!rules.is_empty());
        }
        assert!(catalog.rules_for(TimeZone::Invalid).is_none());
    }

    /// DEBUG COMMAND
    ///
    /// Takes the environment variable `TINYTZ_DEBUG_ZONE` as input,
    /// treats the value as an IANA zone name and dumps that zone's
    /// bundled rule sequence in a human readable table.
    #[cfg(feature = "std")]
    #[test]
    fn debug_zone() -> anyhow::Result<()> {
        use alloc::{string::String, vec};
        use std::io::Write;

        const ENV: &str = "TINYTZ_DEBUG_ZONE";
        let Some(value) = std::env::var_os(ENV) else { return Ok(()) };
        let Ok(value) = value.into_string() else {
            anyhow::bail!("{ENV} has invalid UTF-8")
        };
        let Some(zone) = crate::names::TimeZoneNames::new().get(&value)
        else {
            anyhow::bail!("unsupported time zone {value:?}")
        };
        let catalog = Catalog::bundled();
        let rules = catalog.rules_for(zone).expect("bundled zones have rules");

        let mut out = tabwriter::TabWriter::new(vec![])
            .alignment(tabwriter::Alignment::Left);
        writeln!(out, "RULES FOR {}", zone.name())?;
        for (i, rule) in rules.iter().enumerate() {
            let start = crate::civil::to_iso_string(rule.time_start())
                .unwrap_or_else(|_| String::from("<pre-history>"));
            writeln!(
                out,
                "  {i:04}:\t{start}\tunix={unix}\t{abbreviation}\t\
                 offset={offset}\t{dst}",
                unix = rule.time_start(),
                abbreviation = rule.abbreviation(),
                offset = rule.gmt_offset(),
                dst = if rule.is_dst() { "dst" } else { "" },
            )?;
        }
        std::eprint!("{}", String::from_utf8(out.into_inner().unwrap()).unwrap());
        Ok(())
    }

    #[test]
    fn rejects_invalid_zone() {
        static RULES: [Rule; 1] =
            [Rule::new(0, Abbreviation::GMT, 0, false)];
        let err = Catalog::new(&[(TimeZone::Invalid, &RULES[..])]).unwrap_err();
        assert!(err.to_string().contains("Invalid"), "{err}");
    }

    #[test]
    fn rejects_duplicate_zone() {
        static RULES: [Rule; 1] =
            [Rule::new(0, Abbreviation::GMT, 0, false)];
        let table = [
            (TimeZone::Europe_London, &RULES[..]),
            (TimeZone::Europe_London, &RULES[..]),
        ];
        let err = Catalog::new(&table).unwrap_err();
        assert!(err.to_string().contains("duplicate"), "{err}");
    }

    #[test]
    fn rejects_empty_sequence() {
        let err =
            Catalog::new(&[(TimeZone::Europe_London, &[][..])]).unwrap_err();
        assert!(err.to_string().contains("no rules"), "{err}");
    }

    #[test]
    fn rejects_sentinel_rule() {
        static RULES: [Rule; 2] =
            [Rule::new(0, Abbreviation::GMT, 0, false), Rule::INVALID];
        let err =
            Catalog::new(&[(TimeZone::Europe_London, &RULES[..])]).unwrap_err();
        assert!(err.to_string().contains("sentinel"), "{err}");
    }

    #[test]
    fn rejects_unsorted_rules() {
        static RULES: [Rule; 3] = [
            Rule::new(100, Abbreviation::GMT, 0, false),
            Rule::new(300, Abbreviation::BST, 3600, true),
            Rule::new(200, Abbreviation::GMT, 0, false),
        ];
        let err =
            Catalog::new(&[(TimeZone::Europe_London, &RULES[..])]).unwrap_err();
        assert!(err.to_string().contains("ascending"), "{err}");
    }

    #[test]
    fn rejects_duplicate_time_start() {
        static RULES: [Rule; 2] = [
            Rule::new(100, Abbreviation::GMT, 0, false),
            Rule::new(100, Abbreviation::BST, 3600, true),
        ];
        let err =
            Catalog::new(&[(TimeZone::Europe_London, &RULES[..])]).unwrap_err();
        assert!(err.to_string().contains("ascending"), "{err}");
    }
}
