// tests/canonicalize.rs
use rvdss_scrape::canon::{
    GeoType, abbreviate_geo, abbreviate_virus, canonicalize_columns, classify_geo, normalize_date,
};
use rvdss_scrape::Error;

const HEADERS: &[&str] = &[
    "epiweek",
    "time_value",
    "issue",
    "geo_type",
    "geo_value",
    "Flu Tests",
    "Total Flu Tested",
    "RSV %",
    "Para Positive",
    "Influenza A Positive",
    "SARS-CoV-2 %",
    "hMPV tests",
    "Adeno Positive Tests",
];

#[test]
fn dashboard_headers() {
    let out = canonicalize_columns(HEADERS);
    assert_eq!(
        out[5..],
        [
            "flu tests",
            "flu tests",
            "rsv_pct_positive",
            "hpiv positive_tests",
            "flua positive_tests",
            "sarscov2_pct_positive",
            "hmpv tests",
            "adv positive_tests",
        ]
        .map(String::from)
    );
    assert_eq!(out[..5], HEADERS[..5].iter().map(|h| h.to_string()).collect::<Vec<_>>()[..]);
}

#[test]
fn column_canonicalizer_is_idempotent() {
    let once = canonicalize_columns(HEADERS);
    let twice = canonicalize_columns(&once);
    assert_eq!(once, twice);

    let nested = ["total at flu tests", "Total AT Tests", "fluapos", "flubpos"];
    let once = canonicalize_columns(&nested);
    assert_eq!(once, ["atl flu tests", "atl tests", "flua_positive_tests", "flub_positive_tests"]);
    assert_eq!(canonicalize_columns(&once), once);
}

#[test]
fn value_canonicalizers_on_dashboard_labels() {
    assert_eq!(abbreviate_virus("Respiratory syncytial virus"), "rsv");
    assert_eq!(abbreviate_virus("Human metapneumovirus"), "hmpv");
    assert_eq!(abbreviate_geo("Province of Québec"), "qc");
    assert_eq!(abbreviate_geo("Newfoundland and Labrador"), "nl");
    assert_eq!(abbreviate_geo("Some New Lab"), "some new lab");
    assert_eq!(abbreviate_geo("Hôpital Sainte-Justine"), "hôpital sainte justine");
    assert_eq!(abbreviate_geo("Montréal (CUSM)"), "montréal cusm");
}

#[test]
fn geography_levels() {
    assert_eq!(classify_geo("ca", GeoType::Province), GeoType::Nation);
    assert_eq!(classify_geo("on", GeoType::Province), GeoType::Region);
    assert_eq!(classify_geo("uhn mount sinai hospital", GeoType::Lab), GeoType::Lab);
}

#[test]
fn dates() {
    assert_eq!(normalize_date("2024-03-15").unwrap(), "2024-03-15");
    assert_eq!(normalize_date("15/03/2024").unwrap(), "2024-03-15");
    assert_eq!(normalize_date("15-03-2024").unwrap(), "2024-03-15");
    assert!(matches!(normalize_date("not-a-date"), Err(Error::Format(_))));
}
