// src/canon/tables.rs
//
// The dashboard calls the same viruses, provinces, regions (province groups)
// and country by several names over time. Each maps to one abbreviation.
// Keys are lowercase; values are the canonical codes.

pub static VIRUSES: &[(&str, &str)] = &[
    ("parainfluenza", "hpiv"),
    ("piv", "hpiv"),
    ("para", "hpiv"),
    ("adenovirus", "adv"),
    ("adeno", "adv"),
    ("human metapneumovirus", "hmpv"),
    ("enterovirus_rhinovirus", "evrv"),
    ("rhinovirus", "evrv"),
    ("rhv", "evrv"),
    ("entero_rhino", "evrv"),
    ("rhino", "evrv"),
    ("ev_rv", "evrv"),
    ("coronavirus", "hcov"),
    ("coron", "hcov"),
    ("coro", "hcov"),
    ("respiratory syncytial virus", "rsv"),
    ("influenza", "flu"),
    ("sars-cov-2", "sarscov2"),
];

pub static GEOS: &[(&str, &str)] = &[
    ("newfoundland", "nl"),
    ("newfoundland and labrador", "nl"),
    ("prince edward island", "pe"),
    ("nova scotia", "ns"),
    ("new brunswick", "nb"),
    ("québec", "qc"),
    ("quebec", "qc"),
    ("ontario", "on"),
    ("manitoba", "mb"),
    ("saskatchewan", "sk"),
    ("alberta", "ab"),
    ("british columbia", "bc"),
    ("yukon", "yt"),
    ("northwest territories", "nt"),
    ("nunavut", "nu"),
    ("canada", "ca"),
    ("can", "ca"),
    ("at", "atlantic"),
    ("atl", "atlantic"),
    ("pr", "prairies"),
    ("terr", "territories"),
    ("uhn sinai hospital", "uhn mount sinai hospital"),
];

// Groups of neighbouring provinces. Québec and Ontario report as their own
// region, so they appear here under every spelling.
pub static REGIONS: &[&str] = &[
    "atlantic",
    "atl",
    "at",
    "province of québec",
    "québec",
    "qc",
    "province of ontario",
    "ontario",
    "on",
    "prairies",
    "pr",
    "british columbia",
    "bc",
    "territories",
    "terr",
];

pub static NATION: &[&str] = &["canada", "can", "ca"];
