// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://health-infobase.canada.ca/src/data/respiratory-virus-detections/";
pub const UPDATE_DATE_RESOURCE: &str = "RVD_UpdateDate.csv";
pub const WEEKLY_DATA_RESOURCE: &str = "RVD_WeeklyData.csv";
pub const CURRENT_WEEK_RESOURCE: &str = "RVD_CurrentWeekTable.csv";
// The dashboard refuses requests without a browser-looking agent
pub const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/126.0.0.0 Safari/537.36";
pub const REQUEST_TIMEOUT_SECS: u64 = 60;

// Persisted history
pub const DEFAULT_DATA_DIR: &str = "data";
pub const DETECTIONS_FILE: &str = "respiratory_detections.csv";
pub const POSITIVE_FILE: &str = "positive_tests.csv";
pub const INDEX_COLUMNS: [&str; 5] = ["epiweek", "time_value", "issue", "geo_type", "geo_value"];

// Seasons roll over at this epiweek
pub const SEASON_START_WEEK: u32 = 35;

// Logging
pub const LOG_LEVEL: &str = "info";
