use crate::zone::Abbreviation;

/// The maximum magnitude of a rule's start instant, i.e. `2^35 - 1`.
///
/// 35 bits of seconds-from-epoch reaches from the year 881 to the year
/// 3058, comfortably beyond both ends of recorded zone history. The
/// catalog data currently spans `[-4260212373, 16720524000]`.
pub(crate) const TIME_START_MAX: i64 = (1 << 35) - 1;

/// The maximum magnitude of a rule's UTC offset, in seconds.
///
/// Real offsets (including pre-standardization local mean time) span
/// `[-57360, 54822]`; the field holds a full 16-bit magnitude.
pub(crate) const GMT_OFFSET_MAX: i32 = 0xFFFF;

/// A single time zone transition rule, packed into 8 bytes.
///
/// A rule states: from [`Rule::time_start`] (inclusive, UTC seconds from
/// the Unix epoch) until superseded by the next rule for the same zone,
/// the zone's offset from UTC is [`Rule::gmt_offset`] seconds, daylight
/// saving is [`Rule::is_dst`], and the display abbreviation is
/// [`Rule::abbreviation`].
///
/// The packing is the point of this type: a zone's complete history is a
/// contiguous array of these, and the resolver scans that array on every
/// cache miss. Eight bytes per rule keeps long sequences dense in cache.
/// The layout (bit 15 down to bit 0 of the `data` field; bit 15 is
/// unused):
///
/// ```text
/// 1
/// 5--------------0
///  ^^^^^^^^^        abbreviation ordinal | 9 bits (14-6)
///           ^       is_dst               | 1 bit  (5)
///            ^      gmt_offset sign      | 1 bit  (4)
///             ^     time_start sign      | 1 bit  (3)
///              ^^^  time_start bits 32-34         (2-0)
/// ```
///
/// with the low 32 bits of `|time_start|` and the 16-bit `|gmt_offset|`
/// stored in the two remaining fields. Sign/magnitude rather than two's
/// complement keeps the split-field reassembly branch-light.
///
/// An all-zero bit pattern is the invalid sentinel, returned by lookups
/// that find nothing. This is only unambiguous because abbreviation
/// ordinal 0 is reserved: every real rule has a nonzero `data` field.
/// [`Catalog::new`](crate::Catalog::new) enforces that no sentinel rule
/// enters a catalog.
#[derive(Clone, Copy, Default, Eq, PartialEq)]
pub struct Rule {
    /// Low 32 bits of `|time_start|`.
    start: u32,
    /// `|gmt_offset|` in seconds.
    offset: u16,
    /// Abbreviation, flags, signs and the high bits of `|time_start|`.
    data: u16,
}

// The packing above is pointless if padding sneaks in.
const _: () = assert!(core::mem::size_of::<Rule>() == 8);

impl Rule {
    /// The invalid sentinel rule. `is_valid` returns `false` for this
    /// and only this value.
    pub const INVALID: Rule = Rule { start: 0, offset: 0, data: 0 };

    /// Packs a rule from its four logical fields.
    ///
    /// # Panics
    ///
    /// When `|time_start| > 2^35 - 1` or `|gmt_offset| > 65535`. These
    /// are data-integrity bounds, not runtime conditions: catalog data
    /// is baked in as `static` arrays of `Rule::new` calls, so a
    /// violation fails const evaluation and the build, never a query.
    pub const fn new(
        time_start: i64,
        abbreviation: Abbreviation,
        gmt_offset: i32,
        is_dst: bool,
    ) -> Rule {
        let start_magnitude = time_start.unsigned_abs();
        if start_magnitude > TIME_START_MAX as u64 {
            panic!("rule start instant magnitude exceeds 35 bits");
        }
        let offset_magnitude = gmt_offset.unsigned_abs();
        if offset_magnitude > GMT_OFFSET_MAX as u32 {
            panic!("rule UTC offset magnitude exceeds 16 bits");
        }
        // Abbreviation ordinals are generated and top out far below 512,
        // but the 9-bit budget is still a hard encoding limit.
        if abbreviation as u16 > 0x1FF {
            panic!("abbreviation ordinal exceeds 9 bits");
        }
        let data = (abbreviation as u16) << 6
            | (is_dst as u16) << 5
            | ((gmt_offset < 0) as u16) << 4
            | ((time_start < 0) as u16) << 3
            | (start_magnitude >> 32) as u16;
        Rule { start: start_magnitude as u32, offset: offset_magnitude as u16, data }
    }

    /// Returns false only for the all-zero sentinel.
    ///
    /// Relies on abbreviation ordinal 0 being unused by real rules.
    #[inline]
    pub const fn is_valid(self) -> bool {
        self.data != 0
    }

    /// The instant (UTC seconds from the Unix epoch) from which this
    /// rule applies, inclusive.
    #[inline]
    pub const fn time_start(self) -> i64 {
        let magnitude = ((self.data & 0b111) as i64) << 32 | self.start as i64;
        if self.data & (1 << 3) != 0 {
            -magnitude
        } else {
            magnitude
        }
    }

    /// The zone's offset from UTC, in seconds. `local = utc + offset`.
    #[inline]
    pub const fn gmt_offset(self) -> i32 {
        let magnitude = self.offset as i32;
        if self.data & (1 << 4) != 0 {
            -magnitude
        } else {
            magnitude
        }
    }

    /// Whether daylight saving time is in effect under this rule.
    #[inline]
    pub const fn is_dst(self) -> bool {
        self.data & (1 << 5) != 0
    }

    /// The display abbreviation in effect under this rule.
    ///
    /// The sentinel rule (and only the sentinel rule) reports
    /// `Abbreviation::Invalid`.
    #[inline]
    pub const fn abbreviation(self) -> Abbreviation {
        match Abbreviation::from_ordinal(self.data >> 6) {
            Some(abbreviation) => abbreviation,
            // Unreachable for rules built by `Rule::new`, but decoding
            // must stay total.
            None => Abbreviation::Invalid,
        }
    }
}

impl core::fmt::Debug for Rule {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !self.is_valid() {
            return f.write_str("Rule(invalid)");
        }
        f.debug_struct("Rule")
            .field("time_start", &self.time_start())
            .field("abbreviation", &self.abbreviation())
            .field("gmt_offset", &self.gmt_offset())
            .field("is_dst", &self.is_dst())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_examples() {
        let tests: &[(i64, Abbreviation, i32, bool)] = &[
            (0, Abbreviation::GMT, 0, false),
            (1711846800, Abbreviation::BST, 3600, true),
            (-2717647200, Abbreviation::CST, -21600, false),
            (-34359738367, Abbreviation::LMT, -75, false),
            (34359738367, Abbreviation::UTC, 0, false),
            (504901800, Abbreviation::p0545, 20700, false),
            (-1, Abbreviation::NST, -12600, false),
            (1, Abbreviation::NDT, -9000, true),
            (16720524000, Abbreviation::GMT, 65535, false),
            (-4260212373, Abbreviation::LMT, -65535, false),
        ];
        for &(time_start, abbreviation, gmt_offset, is_dst) in tests {
            let rule = Rule::new(time_start, abbreviation, gmt_offset, is_dst);
            assert!(rule.is_valid());
            assert_eq!(rule.time_start(), time_start, "{rule:?}");
            assert_eq!(rule.abbreviation(), abbreviation, "{rule:?}");
            assert_eq!(rule.gmt_offset(), gmt_offset, "{rule:?}");
            assert_eq!(rule.is_dst(), is_dst, "{rule:?}");
        }
    }

    #[test]
    fn sentinel_is_invalid() {
        assert!(!Rule::INVALID.is_valid());
        assert!(!Rule::default().is_valid());
        assert_eq!(Rule::default(), Rule::INVALID);
        assert_eq!(Rule::INVALID.time_start(), 0);
        assert_eq!(Rule::INVALID.gmt_offset(), 0);
        assert_eq!(Rule::INVALID.abbreviation(), Abbreviation::Invalid);
        assert!(!Rule::INVALID.is_dst());
    }

    #[test]
    fn no_real_rule_is_sentinel() {
        // Even the most degenerate encodable rule has a nonzero data
        // field, because its abbreviation ordinal is nonzero.
        let rule = Rule::new(0, Abbreviation::LMT, 0, false);
        assert!(rule.is_valid());
    }

    #[test]
    fn data_field_bit_positions() {
        // Ordinal 1, dst set, both signs set, a start magnitude that
        // needs bit 34. Every documented bit position, exercised.
        let rule = Rule::new(-(1 << 34), Abbreviation::first(), -1, true);
        assert_eq!(rule.data >> 15, 0);
        assert_eq!((rule.data >> 6) & 0x1FF, 1);
        assert_eq!((rule.data >> 5) & 1, 1);
        assert_eq!((rule.data >> 4) & 1, 1);
        assert_eq!((rule.data >> 3) & 1, 1);
        assert_eq!(rule.data & 0b111, 0b100);
    }

    #[test]
    fn const_constructible() {
        const RULE: Rule = Rule::new(1711846800, Abbreviation::BST, 3600, true);
        assert_eq!(RULE.gmt_offset(), 3600);
    }

    quickcheck::quickcheck! {
        fn prop_roundtrip(
            start: i64,
            ordinal: u16,
            offset: i32,
            is_dst: bool
        ) -> bool {
            let time_start = start % (TIME_START_MAX + 1);
            let gmt_offset = offset % (GMT_OFFSET_MAX + 1);
            let count = crate::zone::Abbreviation::count() as u16;
            let abbreviation =
                Abbreviation::from_ordinal(ordinal % count + 1).unwrap();
            let rule = Rule::new(time_start, abbreviation, gmt_offset, is_dst);
            rule.is_valid()
                && rule.time_start() == time_start
                && rule.gmt_offset() == gmt_offset
                && rule.abbreviation() == abbreviation
                && rule.is_dst() == is_dst
        }
    }
}
