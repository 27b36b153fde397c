//! Skill extraction — plain case-insensitive substring search over the vocabulary.
//!
//! No tokenization or word boundaries: "java" is found inside "javascript". The
//! built-in vocabulary avoids single-letter entries to keep that tolerable.

use std::collections::BTreeSet;

use crate::screening::vocabulary::SkillVocabulary;

/// A set of skills, each a member of the vocabulary it was extracted with.
pub type SkillSet = BTreeSet<String>;

/// Returns every vocabulary skill that occurs anywhere in `text`, ignoring case.
pub fn extract_skills(text: &str, vocabulary: &SkillVocabulary) -> SkillSet {
    let text_lower = text.to_lowercase();
    vocabulary
        .iter()
        .filter(|skill| text_lower.contains(skill))
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn vocab(skills: &[&str]) -> SkillVocabulary {
        SkillVocabulary::from_entries(skills.iter().copied())
    }

    #[test]
    fn test_extracts_case_insensitively() {
        let skills = extract_skills("Looking for Python and SQL skills", &vocab(&["python", "sql"]));
        assert_eq!(skills, SkillSet::from(["python".to_string(), "sql".to_string()]));
    }

    #[test]
    fn test_empty_text_yields_empty_set() {
        assert!(extract_skills("", &SkillVocabulary::builtin()).is_empty());
    }

    #[test]
    fn test_substring_match_is_not_word_aware() {
        let skills = extract_skills("Senior JavaScript engineer", &vocab(&["java", "javascript"]));
        assert!(skills.contains("java"));
        assert!(skills.contains("javascript"));
    }

    #[test]
    fn test_special_characters_match_literally() {
        let vocabulary = SkillVocabulary::builtin();
        let skills = extract_skills("Built APIs in C++ and Node.js", &vocabulary);
        assert!(skills.contains("c++"));
        assert!(skills.contains("node.js"));
        assert!(!extract_skills("node js", &vocabulary).contains("node.js"));
    }

    #[test]
    fn test_multi_word_skill_requires_exact_spacing() {
        let vocabulary = vocab(&["machine learning"]);
        assert!(extract_skills("Machine Learning engineer", &vocabulary).contains("machine learning"));
        assert!(extract_skills("machine  learning", &vocabulary).is_empty());
    }

    #[test]
    fn test_duplicate_mentions_collapse() {
        let skills = extract_skills("git git GIT", &vocab(&["git"]));
        assert_eq!(skills.len(), 1);
    }

    proptest! {
        #[test]
        fn extracted_skills_are_subset_of_vocabulary(text in "\\PC{0,200}") {
            let vocabulary = SkillVocabulary::builtin();
            let skills = extract_skills(&text, &vocabulary);
            prop_assert!(skills.iter().all(|s| vocabulary.contains(s)));
        }
    }
}
