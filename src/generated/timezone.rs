// DO NOT EDIT. Generated by data/create-tables.py from the IANA Time
// Zone Database (tzdata 2025b).

/// A time zone supported by the bundled rule catalog.
///
/// Ordinal 0 is the reserved `Invalid` sentinel; real zones
/// are contiguous from 1.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
#[allow(non_camel_case_types)]
#[repr(u16)]
pub enum TimeZone {
    Invalid = 0,
    America_Chicago = 1,
    America_Denver = 2,
    America_Los_Angeles = 3,
    America_New_York = 4,
    America_Phoenix = 5,
    America_Sao_Paulo = 6,
    America_St_Johns = 7,
    Asia_Kathmandu = 8,
    Asia_Kolkata = 9,
    Asia_Tokyo = 10,
    Australia_Adelaide = 11,
    Australia_Sydney = 12,
    Europe_Dublin = 13,
    Europe_London = 14,
    Europe_Paris = 15,
    Pacific_Apia = 16,
    Pacific_Auckland = 17,
    Pacific_Honolulu = 18,
    UTC = 19,
}

pub(crate) const TIME_ZONES: [TimeZone; 20] = [
    TimeZone::Invalid,
    TimeZone::America_Chicago,
    TimeZone::America_Denver,
    TimeZone::America_Los_Angeles,
    TimeZone::America_New_York,
    TimeZone::America_Phoenix,
    TimeZone::America_Sao_Paulo,
    TimeZone::America_St_Johns,
    TimeZone::Asia_Kathmandu,
    TimeZone::Asia_Kolkata,
    TimeZone::Asia_Tokyo,
    TimeZone::Australia_Adelaide,
    TimeZone::Australia_Sydney,
    TimeZone::Europe_Dublin,
    TimeZone::Europe_London,
    TimeZone::Europe_Paris,
    TimeZone::Pacific_Apia,
    TimeZone::Pacific_Auckland,
    TimeZone::Pacific_Honolulu,
    TimeZone::UTC,
];

pub(crate) static TIME_ZONE_NAMES: [&str; 20] = [
    "Invalid",
    "America/Chicago",
    "America/Denver",
    "America/Los_Angeles",
    "America/New_York",
    "America/Phoenix",
    "America/Sao_Paulo",
    "America/St_Johns",
    "Asia/Kathmandu",
    "Asia/Kolkata",
    "Asia/Tokyo",
    "Australia/Adelaide",
    "Australia/Sydney",
    "Europe/Dublin",
    "Europe/London",
    "Europe/Paris",
    "Pacific/Apia",
    "Pacific/Auckland",
    "Pacific/Honolulu",
    "UTC",
];
