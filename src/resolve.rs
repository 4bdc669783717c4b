use crate::{catalog::Catalog, rule::Rule, zone::TimeZone};

/// Scans `rules` backward from the last element and returns the index
/// of the first rule whose start instant is at or before `instant`.
///
/// Queries cluster near "now", which sits near the end of each zone's
/// chronologically sorted sequence, so a backward linear scan beats a
/// binary search on expected comparisons for the dominant access
/// pattern. Worst case is O(n) in the zone's rule count, which is small
/// and bounded.
fn scan(rules: &[Rule], instant: i64) -> Option<usize> {
    rules.iter().rposition(|rule| rule.time_start() <= instant)
}

impl Catalog {
    /// Resolves the single rule in effect for `zone` at the given UTC
    /// instant, without a cache.
    ///
    /// Returns [`Rule::INVALID`] when the zone is unknown or the
    /// instant predates the zone's earliest rule. Instants before a
    /// zone's recorded history get no extrapolated offset.
    pub fn resolve(&self, zone: TimeZone, instant: i64) -> Rule {
        let Some(rules) = self.rules_for(zone) else {
            return Rule::INVALID;
        };
        match scan(rules, instant) {
            Some(i) => rules[i],
            None => Rule::INVALID,
        }
    }

    /// Converts a UTC instant to the civil (local) instant in `zone`,
    /// without a cache.
    ///
    /// `None` when no rule applies, or when the shifted instant
    /// overflows `i64`.
    pub fn to_local(&self, zone: TimeZone, utc: i64) -> Option<i64> {
        let rule = self.resolve(zone, utc);
        if !rule.is_valid() {
            return None;
        }
        utc.checked_add(rule.gmt_offset() as i64)
    }

    /// Converts a civil (local) instant in `zone` to UTC, without a
    /// cache.
    ///
    /// This is an approximation: rule start instants are UTC-based, but
    /// the correct probe key (the UTC instant) is exactly what is being
    /// solved for, so the local instant is used as the probe key
    /// instead. Within the window around an offset transition
    /// (typically at most a few hours wide) this can resolve to the
    /// neighboring rule and return a result off by the offset
    /// difference. Callers needing transition-exact inversion should
    /// treat this method as unsupported for instants near a transition.
    pub fn from_local(&self, zone: TimeZone, local: i64) -> Option<i64> {
        let rule = self.resolve(zone, local);
        if !rule.is_valid() {
            return None;
        }
        local.checked_sub(rule.gmt_offset() as i64)
    }
}

/// A single-slot memo of the most recent successful resolution.
///
/// The cache is an explicit, caller-owned value rather than a
/// thread-local static, which keeps ownership and lifetime visible and
/// makes it resettable in tests. One cache belongs to one execution
/// context: share a catalog across threads, not a cache.
///
/// A hit requires the queried instant to fall inside the cached rule's
/// validity interval `[rule.time_start(), until)`, where `until` is the
/// next rule's start (or `i64::MAX` for a zone's last rule). Bounding
/// the interval on both ends means a hit is exactly the rule a full
/// scan would find, for any query order; the cache can change only the
/// cost of a query, never its result.
#[derive(Clone, Debug, Default)]
pub struct Cache {
    zone: TimeZone,
    rule: Rule,
    until: i64,
}

impl Cache {
    /// Creates an empty cache.
    pub fn new() -> Cache {
        Cache::default()
    }

    /// Empties the cache. Never required for correctness.
    pub fn reset(&mut self) {
        *self = Cache::new();
    }

    #[inline]
    fn get(&self, zone: TimeZone, instant: i64) -> Option<Rule> {
        if zone == self.zone
            && self.rule.is_valid()
            && self.rule.time_start() <= instant
            && instant < self.until
        {
            Some(self.rule)
        } else {
            None
        }
    }
}

/// A per-context handle bundling a catalog reference with a [`Cache`].
///
/// This is the intended entry point for conversion queries. The
/// repetitive case (same zone, non-decreasing instants, as in log
/// timestamping or a render loop) hits the cache and skips the scan
/// entirely. Callers with erratic query patterns can use the equivalent
/// methods on [`Catalog`] directly and pay the scan every time.
///
/// ```
/// use tinytz::{Catalog, Resolver, TimeZone};
///
/// let catalog = Catalog::bundled();
/// let mut resolver = Resolver::new(&catalog);
/// // 2024-01-15T12:00:00Z, London on GMT.
/// assert_eq!(
///     resolver.to_local(TimeZone::Europe_London, 1705320000),
///     Some(1705320000),
/// );
/// ```
#[derive(Debug)]
pub struct Resolver<'c> {
    catalog: &'c Catalog,
    cache: Cache,
}

impl<'c> Resolver<'c> {
    /// Creates a resolver over the given catalog with an empty cache.
    pub fn new(catalog: &'c Catalog) -> Resolver<'c> {
        Resolver { catalog, cache: Cache::new() }
    }

    /// The catalog this resolver reads.
    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    /// Empties the cache. Never required for correctness.
    pub fn reset(&mut self) {
        self.cache.reset();
    }

    /// Resolves the single rule in effect for `zone` at the given UTC
    /// instant, consulting and updating the cache.
    ///
    /// Returns [`Rule::INVALID`] when the zone is unknown or the
    /// instant predates the zone's earliest rule; failed resolutions
    /// leave the cache untouched.
    pub fn resolve(&mut self, zone: TimeZone, instant: i64) -> Rule {
        if let Some(rule) = self.cache.get(zone, instant) {
            return rule;
        }
        let Some(rules) = self.catalog.rules_for(zone) else {
            return Rule::INVALID;
        };
        let Some(i) = scan(rules, instant) else {
            return Rule::INVALID;
        };
        trace!(
            "cache miss: scanned {} of {} rules for {}",
            rules.len() - i,
            rules.len(),
            zone.name(),
        );
        let until = match rules.get(i + 1) {
            Some(next) => next.time_start(),
            None => i64::MAX,
        };
        self.cache = Cache { zone, rule: rules[i], until };
        rules[i]
    }

    /// Converts a UTC instant to the civil (local) instant in `zone`.
    ///
    /// `None` when no rule applies, or when the shifted instant
    /// overflows `i64`.
    pub fn to_local(&mut self, zone: TimeZone, utc: i64) -> Option<i64> {
        let rule = self.resolve(zone, utc);
        if !rule.is_valid() {
            return None;
        }
        utc.checked_add(rule.gmt_offset() as i64)
    }

    /// Converts a civil (local) instant in `zone` to UTC.
    ///
    /// Carries the same transition-window approximation as
    /// [`Catalog::from_local`].
    pub fn from_local(&mut self, zone: TimeZone, local: i64) -> Option<i64> {
        let rule = self.resolve(zone, local);
        if !rule.is_valid() {
            return None;
        }
        local.checked_sub(rule.gmt_offset() as i64)
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;
    use crate::zone::Abbreviation;

    fn three_rule_catalog() -> Catalog {
        static RULES: [Rule; 3] = [
            Rule::new(100, Abbreviation::GMT, 0, false),
            Rule::new(200, Abbreviation::BST, 3600, true),
            Rule::new(300, Abbreviation::GMT, 0, false),
        ];
        Catalog::new(&[(TimeZone::Europe_London, &RULES[..])]).unwrap()
    }

    #[test]
    fn backward_scan_picks_latest_applicable() {
        let catalog = three_rule_catalog();
        let zone = TimeZone::Europe_London;
        assert_eq!(catalog.resolve(zone, 250).time_start(), 200);
        assert!(!catalog.resolve(zone, 50).is_valid());
        assert_eq!(catalog.resolve(zone, 300).time_start(), 300);
        assert_eq!(catalog.resolve(zone, 1_000_000).time_start(), 300);
        assert_eq!(catalog.resolve(zone, 100).time_start(), 100);
        assert!(!catalog.resolve(zone, 99).is_valid());
    }

    #[test]
    fn cached_resolution_matches_uncached() {
        let catalog = three_rule_catalog();
        let zone = TimeZone::Europe_London;
        let mut resolver = Resolver::new(&catalog);
        // Non-decreasing instants, crossing both transitions.
        for instant in [0, 50, 100, 150, 199, 200, 250, 299, 300, 1_000] {
            assert_eq!(
                resolver.resolve(zone, instant),
                catalog.resolve(zone, instant),
                "instant {instant}",
            );
        }
        // And out-of-order queries, which can only miss, never lie.
        for instant in [500, 150, 99, 300, 250, 100] {
            assert_eq!(
                resolver.resolve(zone, instant),
                catalog.resolve(zone, instant),
                "instant {instant}",
            );
        }
    }

    #[test]
    fn cache_is_not_observable() {
        let catalog = Catalog::bundled();
        let mut resolver = Resolver::new(&catalog);
        let zone = TimeZone::America_New_York;
        let t = 1710054000; // 2024-03-10T07:00:00Z, EDT begins
        let first = resolver.to_local(zone, t);
        let _ = resolver.to_local(zone, t - 1);
        let _ = resolver.to_local(TimeZone::Asia_Tokyo, t);
        assert_eq!(resolver.to_local(zone, t), first);
        resolver.reset();
        assert_eq!(resolver.to_local(zone, t), first);
    }

    #[test]
    fn cache_zone_change_invalidates() {
        let catalog = Catalog::bundled();
        let mut resolver = Resolver::new(&catalog);
        let t = 1721044800; // 2024-07-15T12:00:00Z
        assert_eq!(
            resolver.to_local(TimeZone::Europe_London, t),
            Some(t + 3600),
        );
        assert_eq!(
            resolver.to_local(TimeZone::Europe_Paris, t),
            Some(t + 7200),
        );
        assert_eq!(
            resolver.to_local(TimeZone::Europe_London, t),
            Some(t + 3600),
        );
    }

    #[test]
    fn unknown_zone() {
        let catalog = Catalog::bundled();
        let mut resolver = Resolver::new(&catalog);
        assert!(!resolver.resolve(TimeZone::Invalid, 0).is_valid());
        assert_eq!(resolver.to_local(TimeZone::Invalid, 0), None);
        assert_eq!(resolver.from_local(TimeZone::Invalid, 0), None);
        assert_eq!(catalog.to_local(TimeZone::Invalid, 0), None);
    }

    #[test]
    fn bundled_conversions() {
        let catalog = Catalog::bundled();
        let mut resolver = Resolver::new(&catalog);
        let tests: &[(TimeZone, i64, i32, Abbreviation, bool)] = &[
            // 2024-01-15T12:00:00Z: London on GMT.
            (TimeZone::Europe_London, 1705320000, 0, Abbreviation::GMT, false),
            // 2024-07-15T12:00:00Z: London on BST.
            (TimeZone::Europe_London, 1721044800, 3600, Abbreviation::BST, true),
            // One second before BST begins.
            (TimeZone::Europe_London, 1711846799, 0, Abbreviation::GMT, false),
            // The exact instant BST begins (inclusive).
            (TimeZone::Europe_London, 1711846800, 3600, Abbreviation::BST, true),
            // One second before EDT begins.
            (
                TimeZone::America_New_York,
                1710053999,
                -18000,
                Abbreviation::EST,
                false,
            ),
            (
                TimeZone::America_New_York,
                1710054000,
                -14400,
                Abbreviation::EDT,
                true,
            ),
            // The exact instant EDT ends.
            (
                TimeZone::America_New_York,
                1730613600,
                -18000,
                Abbreviation::EST,
                false,
            ),
            // Fractional-hour offset, no DST since 1986.
            (TimeZone::Asia_Kathmandu, 1717200000, 20700, Abbreviation::p0545, false),
            // Newfoundland: -03:30 standard, -02:30 daylight.
            (TimeZone::America_St_Johns, 1705276800, -12600, Abbreviation::NST, false),
            (TimeZone::America_St_Johns, 1721001600, -9000, Abbreviation::NDT, true),
            // Dublin models winter GMT as the DST side.
            (TimeZone::Europe_Dublin, 1705276800, 0, Abbreviation::GMT, true),
            (TimeZone::Europe_Dublin, 1721001600, 3600, Abbreviation::IST, false),
            // Southern hemisphere: January is daylight time.
            (TimeZone::Australia_Sydney, 1705276800, 39600, Abbreviation::AEDT, true),
            // Apia after its 2011 jump across the date line.
            (TimeZone::Pacific_Apia, 1326585600, 50400, Abbreviation::p14, true),
            (TimeZone::Pacific_Honolulu, 1705276800, -36000, Abbreviation::HST, false),
            (TimeZone::UTC, 1705276800, 0, Abbreviation::UTC, false),
        ];
        for &(zone, utc, offset, abbreviation, is_dst) in tests {
            let rule = resolver.resolve(zone, utc);
            assert!(rule.is_valid(), "{} at {utc}", zone.name());
            assert_eq!(rule.gmt_offset(), offset, "{} at {utc}", zone.name());
            assert_eq!(
                rule.abbreviation(),
                abbreviation,
                "{} at {utc}",
                zone.name(),
            );
            assert_eq!(rule.is_dst(), is_dst, "{} at {utc}", zone.name());
            assert_eq!(
                resolver.to_local(zone, utc),
                Some(utc + offset as i64),
                "{} at {utc}",
                zone.name(),
            );
        }
    }

    #[test]
    fn from_local_inverts_away_from_transitions() {
        let catalog = Catalog::bundled();
        let mut resolver = Resolver::new(&catalog);
        let tests: &[(TimeZone, i64)] = &[
            (TimeZone::Europe_London, 1705320000),
            (TimeZone::Europe_London, 1721044800),
            (TimeZone::America_New_York, 1721044800),
            (TimeZone::Asia_Kathmandu, 1717200000),
            (TimeZone::UTC, 1705276800),
        ];
        for &(zone, utc) in tests {
            let local = resolver.to_local(zone, utc).unwrap();
            assert_eq!(
                resolver.from_local(zone, local),
                Some(utc),
                "{} at {utc}",
                zone.name(),
            );
        }
    }

    #[test]
    fn from_local_is_approximate_near_transitions() {
        // London, 2024-03-31: at 01:00:00Z the offset jumps from +0 to
        // +1. The local instant 01:30 that morning never existed on a
        // wall clock, yet from_local still answers, using the local
        // instant as the probe key. Pin the documented behavior.
        let catalog = Catalog::bundled();
        let local = 1711846800 + 1800;
        let utc = catalog.from_local(TimeZone::Europe_London, local).unwrap();
        assert_eq!(utc, local - 3600);
    }

    #[test]
    fn instant_before_recorded_history() {
        static RULES: [Rule; 1] =
            [Rule::new(1000, Abbreviation::GMT, 0, false)];
        let catalog =
            Catalog::new(&[(TimeZone::Europe_London, &RULES[..])]).unwrap();
        assert!(!catalog.resolve(TimeZone::Europe_London, 999).is_valid());
        assert_eq!(catalog.to_local(TimeZone::Europe_London, 999), None);
        assert_eq!(
            catalog.to_local(TimeZone::Europe_London, 1000),
            Some(1000),
        );
    }

    quickcheck::quickcheck! {
        fn prop_cached_matches_uncached(
            ordinal: u16,
            instants: Vec<i64>
        ) -> bool {
            let catalog = Catalog::bundled();
            let zone = TimeZone::from_ordinal(
                ordinal % (TimeZone::count() as u16 + 1),
            )
            .unwrap();
            let mut instants = instants;
            instants.sort_unstable();
            let mut resolver = Resolver::new(&catalog);
            instants.iter().all(|&instant| {
                resolver.resolve(zone, instant)
                    == catalog.resolve(zone, instant)
            })
        }

        fn prop_resolution_is_deterministic(
            instants: Vec<i64>,
            probe: i64
        ) -> bool {
            let catalog = Catalog::bundled();
            let zone = TimeZone::Europe_London;
            let mut resolver = Resolver::new(&catalog);
            let expected = catalog.resolve(zone, probe);
            // Arbitrary interleaved history must not change the answer.
            for &instant in &instants {
                resolver.resolve(zone, instant);
            }
            resolver.resolve(zone, probe) == expected
        }
    }
}
