// src/canon/columns.rs
//! Header canonicalization for the dashboard tables.
//!
//! Headers have been spelled many ways across seasons ("A(H1N1) 2009 Positive",
//! "Total Flu Tested", "Para %", …). The rules below rewrite them into one
//! scheme: `<virus or subtype>[ <signal>]`, with the signal spelled `tests`,
//! `positive_tests` or `_pct_positive`.
//!
//! Rules run in a fixed order. Later rules expect tokens produced by earlier
//! ones: subtype harmonization runs before virus abbreviation (so `a_h1` is not
//! split by it), and signal unification runs last. A single pass can leave
//! work for the next one ("total at …" only exposes the leading `at` once
//! `total ` is gone), so the sequence is repeated until the header stops
//! changing.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::virus::abbreviate_virus;
use crate::core::sanitize::normalize_ws;

enum Rule {
    Replace(Regex, &'static str),
    Apply(fn(&str) -> String),
}

impl Rule {
    fn replace(pattern: &str, with: &'static str) -> Self {
        Rule::Replace(Regex::new(pattern).expect("column rule pattern"), with)
    }

    fn apply(&self, name: &str) -> String {
        match self {
            Rule::Replace(re, with) => re.replace_all(name, *with).into_owned(),
            Rule::Apply(f) => f(name),
        }
    }
}

static RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    vec![
        // whitespace and case
        Rule::Apply(|s| s.replace('\u{a0}', " ").to_lowercase()),
        // "flu.1": suffix added to repeated headers when the CSV is read
        Rule::replace(r"\.\d+$", ""),
        // punctuation
        Rule::replace(r"\.", ""),
        Rule::replace(r"\(all\)", ""),
        Rule::replace(r"\s*\(|\)", ""),
        Rule::replace("/", "_"),
        Rule::Apply(normalize_ws),
        // geography tokens
        Rule::replace(r"^at\b", "atl"),
        Rule::replace("canada", "can"),
        Rule::replace(r"\bcb\b", "bc"),
        // influenza subtypes
        Rule::replace(r"h1n1 2009 |h1n12009|a_h1|ah1\b", "ah1n1pdm09"),
        Rule::replace("a_uns", "auns"),
        Rule::replace("a_h3", "ah3"),
        // viruses
        Rule::Apply(abbreviate_virus),
        Rule::replace("flu a", "flua"),
        Rule::replace("flu b", "flub"),
        Rule::replace(r"flutest\b", "flu test"),
        // other subtypes
        Rule::replace("other hpiv|other_hpiv|hpiv_other", "hpivother"),
        Rule::replace("bpositive", "b_positive"),
        Rule::replace("apositive", "a_positive"),
        Rule::replace("hpiv_([1-4])", "hpiv${1}"),
        // signal types, last
        Rule::replace("positive tests", "positive_tests"),
        Rule::Apply(unify_positive),
        Rule::replace(r"test\b|tested", "tests"),
        Rule::replace(r" *%", "_pct_positive"),
        Rule::replace("total ", ""),
        Rule::Apply(|s| s.trim().to_string()),
    ]
});

static POSITIVE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(pct_)?(?:positive|pos)\b").expect("positive pattern"));

/// `positive` / `pos` → `positive_tests`, leaving an existing `pct_positive` alone.
fn unify_positive(name: &str) -> String {
    POSITIVE
        .replace_all(name, |caps: &Captures| {
            if caps.get(1).is_some() {
                s!(&caps[0])
            } else {
                s!("positive_tests")
            }
        })
        .into_owned()
}

// Every rule shrinks the header or consumes its own trigger, so a few passes
// always reach the fixpoint.
const MAX_PASSES: usize = 8;

fn apply_rules(name: &str) -> String {
    RULES.iter().fold(s!(name), |acc, rule| rule.apply(&acc))
}

/// Canonicalize one header: the fixpoint of the rule sequence.
pub fn canonicalize_column(name: &str) -> String {
    let mut current = apply_rules(name);
    for _ in 1..MAX_PASSES {
        let next = apply_rules(&current);
        if next == current {
            break;
        }
        current = next;
    }
    current
}

/// Canonicalize a whole header row, order preserved.
pub fn canonicalize_columns<S: AsRef<str>>(names: &[S]) -> Vec<String> {
    names.iter().map(|n| canonicalize_column(n.as_ref())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canon(s: &str) -> String {
        canonicalize_column(s)
    }

    #[test]
    fn punctuation_and_suffixes() {
        assert_eq!(canon("flu tests.1"), "flu tests");
        assert_eq!(canon("Flu\u{a0}\u{a0}Tested"), "flu tests");
        assert_eq!(canon("RSV (all) %"), "rsv_pct_positive");
        assert_eq!(canon("hpiv (other) tests"), "hpivother tests");
        assert_eq!(canon("HPIV 1/2 tests"), "hpiv 1_2 tests");
    }

    #[test]
    fn geography_tokens() {
        assert_eq!(canon("at flu tests"), "atl flu tests");
        assert_eq!(canon("canada flu tests"), "can flu tests");
        assert_eq!(canon("cb flu tests"), "bc flu tests");
        // "total " goes late, after the anchored `at` rule has run once
        assert_eq!(canon("total at flu tests"), "atl flu tests");
        assert_eq!(canon("Total AT Tests"), "atl tests");
    }

    #[test]
    fn influenza_subtypes() {
        assert_eq!(canon("h1n1 2009 positive"), "ah1n1pdm09positive_tests");
        assert_eq!(canon("a_h1 positive"), "ah1n1pdm09 positive_tests");
        assert_eq!(canon("ah1 positive"), "ah1n1pdm09 positive_tests");
        assert_eq!(canon("a_uns positive"), "auns positive_tests");
        assert_eq!(canon("a_h3 positive"), "ah3 positive_tests");
        assert_eq!(canon("influenza a positive"), "flua positive_tests");
        assert_eq!(canon("influenza b positive"), "flub positive_tests");
        assert_eq!(canon("flutest"), "flu tests");
    }

    #[test]
    fn other_subtypes() {
        assert_eq!(canon("other parainfluenza positive"), "hpivother positive_tests");
        assert_eq!(canon("Other PIV positive"), "hpivother positive_tests");
        assert_eq!(canon("hpiv_other positive"), "hpivother positive_tests");
        assert_eq!(canon("hpiv_1 positive"), "hpiv1 positive_tests");
        // "_" is a word character: an underscore-joined synonym is not a whole word
        assert_eq!(canon("para_3 positive"), "para_3 positive_tests");
        assert_eq!(canon("fluapositive"), "flua_positive_tests");
        assert_eq!(canon("flubpositive"), "flub_positive_tests");
        // `pos` only becomes `positive` after the subtype join has run once
        assert_eq!(canon("fluapos"), "flua_positive_tests");
        assert_eq!(canon("flubpos"), "flub_positive_tests");
    }

    #[test]
    fn signal_types() {
        assert_eq!(canon("Total Flu Tested"), "flu tests");
        assert_eq!(canon("RSV Positive Tests"), "rsv positive_tests");
        assert_eq!(canon("RSV pos"), "rsv positive_tests");
        assert_eq!(canon("SARS-CoV-2 %"), "sarscov2_pct_positive");
        assert_eq!(canon("Adenovirus test"), "adv tests");
    }

    #[test]
    fn index_like_headers_untouched() {
        for h in ["epiweek", "issue", "week", "year", "date", "reportinglaboratory"] {
            assert_eq!(canon(h), h);
        }
    }

    #[test]
    fn idempotent() {
        let raw = [
            "week", "date", "Reporting Laboratory", "flu tested", "flua_positive.1",
            "A(H1N1) 2009 positive", "a_uns positive", "a_h3 positive", "fluapositive",
            "Total RSV Tests", "RSV %", "para_other positive", "para_3 positive",
            "hmpv pos", "rhino tested", "ev_rv positive", "coro %", "sars-cov-2 positive tests",
            "at flu tests", "canada tests", "cb tests", "flu_pct_positive", "positive_tests",
            "total at flu tests", "Total AT Tests", "fluapos", "flubpos", "cancanadaada tests",
        ];
        let once = canonicalize_columns(&raw);
        let twice = canonicalize_columns(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn single_pass_is_not_enough_for_nested_tokens() {
        assert_eq!(apply_rules("fluapos"), "fluapositive_tests");
        assert_eq!(canon("fluapos"), "flua_positive_tests");
        // removing the inner "canada" exposes an outer one
        assert_eq!(canon("cancanadaada tests"), "cancan tests");
    }
}
