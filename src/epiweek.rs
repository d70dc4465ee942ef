// src/epiweek.rs
//! Epidemiological weeks (CDC/MMWR calendar).
//!
//! Weeks run Sunday to Saturday. Week 1 of a year is the first week that has
//! at least four days in that calendar year, so a year has 52 or 53 weeks and
//! its first week may start in late December.
//!
//! An [`Epiweek`] renders as `YYYYWW` (`202410`), which is also its integer
//! code in the persisted tables.

use std::fmt;

use chrono::{Datelike, Duration, NaiveDate};

use crate::config::consts::SEASON_START_WEEK;
use crate::error::{Error, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Epiweek {
    year: i32,
    week: u32,
}

/// Week `week` of epidemiological year `year`; fails outside that year's calendar.
pub fn epiweek_of(year: i32, week: u32) -> Result<Epiweek> {
    Epiweek::new(year, week)
}

impl Epiweek {
    pub fn new(year: i32, week: u32) -> Result<Self> {
        let invalid = Error::InvalidWeek { year, week };
        if !(1..=9998).contains(&year) || week == 0 {
            return Err(invalid);
        }
        match weeks_in_year(year) {
            Some(n) if week <= n => Ok(Self { year, week }),
            _ => Err(invalid),
        }
    }

    /// The epiweek a calendar date falls in.
    pub fn from_date(date: NaiveDate) -> Result<Self> {
        let year = date.year();
        let bad = || Error::Format(date.to_string());

        let mut epi_year = year;
        let mut start = year_start(year).ok_or_else(bad)?;
        let next = year_start(year + 1).ok_or_else(bad)?;
        if date >= next {
            epi_year = year + 1;
            start = next;
        } else if date < start {
            epi_year = year - 1;
            start = year_start(year - 1).ok_or_else(bad)?;
        }

        let week = ((date - start).num_days() / 7 + 1) as u32;
        Self::new(epi_year, week)
    }

    pub fn year(&self) -> i32 { self.year }
    pub fn week(&self) -> u32 { self.week }

    /// Integer form, `year * 100 + week`.
    pub fn code(&self) -> u32 {
        self.year as u32 * 100 + self.week
    }
}

impl fmt::Display for Epiweek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:02}", self.year, self.week)
    }
}

/// Sunday starting week 1 of `year`.
fn year_start(year: i32) -> Option<NaiveDate> {
    let jan1 = NaiveDate::from_ymd_opt(year, 1, 1)?;
    let dow = i64::from(jan1.weekday().num_days_from_sunday());
    // Jan 1 on Sun..Wed: week 1 contains it. Thu..Sat: week 1 starts after it.
    let shift = if dow <= 3 { -dow } else { 7 - dow };
    jan1.checked_add_signed(Duration::days(shift))
}

fn weeks_in_year(year: i32) -> Option<u32> {
    let days = (year_start(year + 1)? - year_start(year)?).num_days();
    Some((days / 7) as u32)
}

/// Surveillance season directory for a date: `season_<start>_<end>`, where a
/// season opens at epiweek 35.
pub fn season_for(date: NaiveDate) -> Result<String> {
    let ew = Epiweek::from_date(date)?;
    let start = if ew.week() >= SEASON_START_WEEK { ew.year() } else { ew.year() - 1 };
    Ok(format!("season_{}_{}", start, start + 1))
}
