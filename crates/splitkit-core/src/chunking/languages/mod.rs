//! Per-content separator tables
//!
//! Adding a language means adding one table here and one arm to
//! [`code_profile`].

pub mod javascript;
pub mod markdown;
pub mod python;

use super::profile::{SeparatorProfile, GENERIC};
use splitkit_config::Language;

/// Separator table for code written in `language`
pub fn code_profile(language: Language) -> &'static SeparatorProfile {
    match language {
        Language::Python => &python::PROFILE,
        Language::JavaScript => &javascript::PROFILE,
    }
}

/// Every built-in profile, generic first
pub fn all_profiles() -> Vec<&'static SeparatorProfile> {
    let mut profiles = vec![&GENERIC, &markdown::PROFILE];
    profiles.extend(Language::ALL.iter().map(|&language| code_profile(language)));
    profiles
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chunking::profile::ContentKind;

    #[test]
    fn test_every_profile_ends_with_fallbacks() {
        for profile in all_profiles() {
            let n = profile.separators.len();
            assert!(n >= 4, "{} too short", profile.kind);
            assert_eq!(&profile.separators[n - 3..], &["\n", " ", ""], "{}", profile.kind);
        }
    }

    #[test]
    fn test_code_profile_matches_language() {
        for &language in Language::ALL {
            assert_eq!(code_profile(language).kind, ContentKind::Code(language));
        }
    }

    #[test]
    fn test_no_duplicate_separators() {
        for profile in all_profiles() {
            let mut seen = std::collections::HashSet::new();
            for sep in profile.separators {
                assert!(seen.insert(*sep), "{} repeats {:?}", profile.kind, sep);
            }
        }
    }
}
