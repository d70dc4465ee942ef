// src/canon/virus.rs
use std::sync::LazyLock;

use super::synonyms::SynonymMatcher;
use super::tables::VIRUSES;

static VIRUS_MATCHER: LazyLock<SynonymMatcher> = LazyLock::new(|| SynonymMatcher::new(VIRUSES));

/// Lowercase and abbreviate every known virus name in `text`.
///
/// Works on whole words, so it applies equally to a bare value ("Influenza")
/// and to a compound header ("influenza a tests" → "flu a tests").
/// Unknown names pass through lowercased.
pub fn abbreviate_virus(text: &str) -> String {
    let lower = text.to_lowercase();
    VIRUS_MATCHER.replace_words(&lower).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_synonym_maps_to_its_code() {
        for (raw, code) in VIRUSES {
            assert_eq!(abbreviate_virus(raw), *code, "synonym {raw}");
            assert_eq!(abbreviate_virus(code), *code, "code {code}");
        }
    }

    #[test]
    fn mixed_case_and_multi_word() {
        assert_eq!(abbreviate_virus("Influenza A"), "flu a");
        assert_eq!(abbreviate_virus("Human Metapneumovirus"), "hmpv");
        assert_eq!(abbreviate_virus("SARS-CoV-2"), "sarscov2");
        assert_eq!(abbreviate_virus("Respiratory syncytial virus positive"), "rsv positive");
    }

    #[test]
    fn unknown_passes_through_lowercased() {
        assert_eq!(abbreviate_virus("Bocavirus"), "bocavirus");
        assert_eq!(abbreviate_virus("hpiv"), "hpiv");
    }
}
