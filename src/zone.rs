pub use crate::generated::{abbreviation::Abbreviation, timezone::TimeZone};

use crate::generated::{
    abbreviation::{ABBREVIATIONS, ABBREVIATION_NAMES},
    timezone::{TIME_ZONES, TIME_ZONE_NAMES},
};

impl TimeZone {
    /// The number of supported time zones, excluding `Invalid`.
    pub const fn count() -> usize {
        TIME_ZONES.len() - 1
    }

    /// This zone's ordinal. `Invalid` is 0; real zones are contiguous
    /// from 1.
    #[inline]
    pub const fn ordinal(self) -> u16 {
        self as u16
    }

    /// The zone with the given ordinal, or `None` when out of range.
    ///
    /// `from_ordinal(0)` is `Some(TimeZone::Invalid)`.
    #[inline]
    pub const fn from_ordinal(ordinal: u16) -> Option<TimeZone> {
        if (ordinal as usize) < TIME_ZONES.len() {
            Some(TIME_ZONES[ordinal as usize])
        } else {
            None
        }
    }

    /// The first valid zone, i.e. ordinal 1.
    pub const fn first() -> TimeZone {
        TIME_ZONES[1]
    }

    /// The cyclic successor of this zone.
    ///
    /// Stepping past the last valid zone yields `Invalid`, and stepping
    /// `Invalid` yields the first valid zone. Repeatedly calling `next`
    /// therefore visits every zone and returns to the starting point,
    /// which is how "list all zones" loops terminate.
    #[inline]
    pub const fn next(self) -> TimeZone {
        let next = self as u16 + 1;
        if (next as usize) >= TIME_ZONES.len() {
            TimeZone::Invalid
        } else {
            TIME_ZONES[next as usize]
        }
    }

    /// Iterates over every valid zone in ordinal order.
    pub fn iter() -> impl Iterator<Item = TimeZone> {
        (1..TIME_ZONES.len()).map(|ordinal| TIME_ZONES[ordinal])
    }

    /// The canonical IANA name of this zone, e.g. `Europe/London`.
    ///
    /// `Invalid` reports the name `Invalid`, which is not a real zone
    /// name (IANA names always contain `/` or are all-uppercase).
    pub fn name(self) -> &'static str {
        TIME_ZONE_NAMES[self as usize]
    }
}

impl Default for TimeZone {
    fn default() -> TimeZone {
        TimeZone::Invalid
    }
}

impl core::fmt::Display for TimeZone {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

impl Abbreviation {
    /// The number of known abbreviations, excluding `Invalid`.
    pub const fn count() -> usize {
        ABBREVIATIONS.len() - 1
    }

    /// This abbreviation's ordinal. `Invalid` is 0; real abbreviations
    /// are contiguous from 1.
    #[inline]
    pub const fn ordinal(self) -> u16 {
        self as u16
    }

    /// The abbreviation with the given ordinal, or `None` when out of
    /// range.
    #[inline]
    pub const fn from_ordinal(ordinal: u16) -> Option<Abbreviation> {
        if (ordinal as usize) < ABBREVIATIONS.len() {
            Some(ABBREVIATIONS[ordinal as usize])
        } else {
            None
        }
    }

    /// The first valid abbreviation, i.e. ordinal 1.
    pub const fn first() -> Abbreviation {
        ABBREVIATIONS[1]
    }

    /// The cyclic successor of this abbreviation, with the same wrap
    /// semantics as [`TimeZone::next`].
    #[inline]
    pub const fn next(self) -> Abbreviation {
        let next = self as u16 + 1;
        if (next as usize) >= ABBREVIATIONS.len() {
            Abbreviation::Invalid
        } else {
            ABBREVIATIONS[next as usize]
        }
    }

    /// Iterates over every valid abbreviation in ordinal order.
    pub fn iter() -> impl Iterator<Item = Abbreviation> {
        (1..ABBREVIATIONS.len()).map(|ordinal| ABBREVIATIONS[ordinal])
    }

    /// The display form of this abbreviation, e.g. `BST` or `+0545`.
    ///
    /// Unlike the variant identifier, this is the form that appears in
    /// the IANA data, so signs are `+`/`-` rather than `p`/`m`.
    pub fn name(self) -> &'static str {
        ABBREVIATION_NAMES[self as usize]
    }
}

impl Default for Abbreviation {
    fn default() -> Abbreviation {
        Abbreviation::Invalid
    }
}

impl core::fmt::Display for Abbreviation {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for TimeZone {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for TimeZone {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> Result<TimeZone, D::Error> {
        struct Visitor;

        impl<'de> serde::de::Visitor<'de> for Visitor {
            type Value = TimeZone;

            fn expecting(
                &self,
                f: &mut core::fmt::Formatter,
            ) -> core::fmt::Result {
                f.write_str("an IANA time zone name")
            }

            fn visit_str<E: serde::de::Error>(
                self,
                value: &str,
            ) -> Result<TimeZone, E> {
                TimeZone::iter()
                    .find(|zone| zone.name() == value)
                    .ok_or_else(|| {
                        E::custom(format_args!(
                            "unsupported time zone name {value:?}"
                        ))
                    })
            }
        }

        deserializer.deserialize_str(Visitor)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Abbreviation {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Abbreviation {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Abbreviation, D::Error> {
        struct Visitor;

        impl<'de> serde::de::Visitor<'de> for Visitor {
            type Value = Abbreviation;

            fn expecting(
                &self,
                f: &mut core::fmt::Formatter,
            ) -> core::fmt::Result {
                f.write_str("a time zone abbreviation")
            }

            fn visit_str<E: serde::de::Error>(
                self,
                value: &str,
            ) -> Result<Abbreviation, E> {
                Abbreviation::iter()
                    .find(|abbreviation| abbreviation.name() == value)
                    .ok_or_else(|| {
                        E::custom(format_args!(
                            "unknown abbreviation {value:?}"
                        ))
                    })
            }
        }

        deserializer.deserialize_str(Visitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinals_are_contiguous() {
        for (ordinal, zone) in TimeZone::iter().enumerate() {
            assert_eq!(zone.ordinal() as usize, ordinal + 1);
            assert_eq!(TimeZone::from_ordinal(zone.ordinal()), Some(zone));
        }
        assert_eq!(TimeZone::from_ordinal(0), Some(TimeZone::Invalid));
        let past_end = TimeZone::count() as u16 + 1;
        assert_eq!(TimeZone::from_ordinal(past_end), None);
    }

    #[test]
    fn enumeration_wraps() {
        assert_eq!(TimeZone::Invalid.next(), TimeZone::first());
        assert_eq!(TimeZone::first().ordinal(), 1);

        let mut zone = TimeZone::Invalid.next();
        let mut seen = 0;
        while zone != TimeZone::Invalid {
            seen += 1;
            zone = zone.next();
        }
        assert_eq!(seen, TimeZone::count());

        // The last valid zone steps to Invalid.
        let last = TimeZone::from_ordinal(TimeZone::count() as u16).unwrap();
        assert_eq!(last.next(), TimeZone::Invalid);
    }

    #[test]
    fn abbreviation_enumeration_wraps() {
        assert_eq!(Abbreviation::Invalid.next(), Abbreviation::first());
        let last =
            Abbreviation::from_ordinal(Abbreviation::count() as u16).unwrap();
        assert_eq!(last.next(), Abbreviation::Invalid);
        assert_eq!(Abbreviation::iter().count(), Abbreviation::count());
    }

    #[test]
    fn names() {
        assert_eq!(TimeZone::Europe_London.name(), "Europe/London");
        assert_eq!(TimeZone::America_New_York.name(), "America/New_York");
        assert_eq!(TimeZone::Invalid.name(), "Invalid");
        assert_eq!(Abbreviation::BST.name(), "BST");
        assert_eq!(Abbreviation::p0545.name(), "+0545");
        assert_eq!(Abbreviation::m03.name(), "-03");
    }

    #[test]
    fn abbreviation_ordinals_fit_encoding() {
        // The packed rule reserves 9 bits for the abbreviation.
        assert!(Abbreviation::count() <= 511);
    }
}
