// DO NOT EDIT. Generated by data/create-tables.py from the IANA Time
// Zone Database (tzdata 2025b).

/// A zone abbreviation referenced by the bundled rules.
///
/// Ordinal 0 is the reserved `Invalid` sentinel. Keeping it
/// unused is what makes the all-zero packed rule
/// distinguishable from every real rule.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
#[allow(non_camel_case_types)]
#[repr(u16)]
pub enum Abbreviation {
    Invalid = 0,
    p0530 = 1,
    p0545 = 2,
    p0630 = 3,
    p13 = 4,
    p14 = 5,
    m02 = 6,
    m03 = 7,
    m10 = 8,
    m11 = 9,
    m1130 = 10,
    ACDT = 11,
    ACST = 12,
    AEDT = 13,
    AEST = 14,
    BDST = 15,
    BST = 16,
    CDT = 17,
    CEST = 18,
    CET = 19,
    CPT = 20,
    CST = 21,
    CWT = 22,
    DMT = 23,
    EDT = 24,
    EPT = 25,
    EST = 26,
    EWT = 27,
    GMT = 28,
    HDT = 29,
    HMT = 30,
    HPT = 31,
    HST = 32,
    HWT = 33,
    IST = 34,
    JDT = 35,
    JST = 36,
    LMT = 37,
    MDT = 38,
    MMT = 39,
    MPT = 40,
    MST = 41,
    MWT = 42,
    NDDT = 43,
    NDT = 44,
    NPT = 45,
    NST = 46,
    NWT = 47,
    NZDT = 48,
    NZMT = 49,
    NZST = 50,
    PDT = 51,
    PMT = 52,
    PPT = 53,
    PST = 54,
    PWT = 55,
    UTC = 56,
    WEMT = 57,
    WEST = 58,
    WET = 59,
}

pub(crate) const ABBREVIATIONS: [Abbreviation; 60] = [
    Abbreviation::Invalid,
    Abbreviation::p0530,
    Abbreviation::p0545,
    Abbreviation::p0630,
    Abbreviation::p13,
    Abbreviation::p14,
    Abbreviation::m02,
    Abbreviation::m03,
    Abbreviation::m10,
    Abbreviation::m11,
    Abbreviation::m1130,
    Abbreviation::ACDT,
    Abbreviation::ACST,
    Abbreviation::AEDT,
    Abbreviation::AEST,
    Abbreviation::BDST,
    Abbreviation::BST,
    Abbreviation::CDT,
    Abbreviation::CEST,
    Abbreviation::CET,
    Abbreviation::CPT,
    Abbreviation::CST,
    Abbreviation::CWT,
    Abbreviation::DMT,
    Abbreviation::EDT,
    Abbreviation::EPT,
    Abbreviation::EST,
    Abbreviation::EWT,
    Abbreviation::GMT,
    Abbreviation::HDT,
    Abbreviation::HMT,
    Abbreviation::HPT,
    Abbreviation::HST,
    Abbreviation::HWT,
    Abbreviation::IST,
    Abbreviation::JDT,
    Abbreviation::JST,
    Abbreviation::LMT,
    Abbreviation::MDT,
    Abbreviation::MMT,
    Abbreviation::MPT,
    Abbreviation::MST,
    Abbreviation::MWT,
    Abbreviation::NDDT,
    Abbreviation::NDT,
    Abbreviation::NPT,
    Abbreviation::NST,
    Abbreviation::NWT,
    Abbreviation::NZDT,
    Abbreviation::NZMT,
    Abbreviation::NZST,
    Abbreviation::PDT,
    Abbreviation::PMT,
    Abbreviation::PPT,
    Abbreviation::PST,
    Abbreviation::PWT,
    Abbreviation::UTC,
    Abbreviation::WEMT,
    Abbreviation::WEST,
    Abbreviation::WET,
];

pub(crate) static ABBREVIATION_NAMES: [&str; 60] = [
    "Invalid",
    "+0530",
    "+0545",
    "+0630",
    "+13",
    "+14",
    "-02",
    "-03",
    "-10",
    "-11",
    "-1130",
    "ACDT",
    "ACST",
    "AEDT",
    "AEST",
    "BDST",
    "BST",
    "CDT",
    "CEST",
    "CET",
    "CPT",
    "CST",
    "CWT",
    "DMT",
    "EDT",
    "EPT",
    "EST",
    "EWT",
    "GMT",
    "HDT",
    "HMT",
    "HPT",
    "HST",
    "HWT",
    "IST",
    "JDT",
    "JST",
    "LMT",
    "MDT",
    "MMT",
    "MPT",
    "MST",
    "MWT",
    "NDDT",
    "NDT",
    "NPT",
    "NST",
    "NWT",
    "NZDT",
    "NZMT",
    "NZST",
    "PDT",
    "PMT",
    "PPT",
    "PST",
    "PWT",
    "UTC",
    "WEMT",
    "WEST",
    "WET",
];
