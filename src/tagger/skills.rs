use crate::constants::DEFAULT_SKILLS;
use crate::error::ResumeError;
use regex::Regex;
use std::collections::HashSet;

/// Fixed vocabulary of skills, shared by resume and job description matching
///
/// A skill is found when its phrase occurs in the lowercased text and is not
/// glued to a word character on either side, so "java" is not found in
/// "javascript" while "c++" is found in "c++ developer".
#[derive(Debug, Clone)]
pub struct SkillVocabulary {
    entries: Vec<SkillPattern>,
}

#[derive(Debug, Clone)]
struct SkillPattern {
    skill: String,
    pattern: Regex,
}

impl SkillVocabulary {
    /// Build a vocabulary; entries are lowercased, trimmed and de-duplicated
    pub fn new<'a, I>(skills: I) -> Result<Self, ResumeError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut seen = HashSet::new();
        let mut entries = Vec::new();

        for raw in skills {
            let skill = raw.trim().to_lowercase();
            if skill.is_empty() || !seen.insert(skill.clone()) {
                continue;
            }
            let pattern = Regex::new(&format!(r"(?:^|\W){}(?:\W|$)", regex::escape(&skill)))
                .map_err(|e| ResumeError::Config(format!("invalid skill '{}': {}", skill, e)))?;
            entries.push(SkillPattern { skill, pattern });
        }

        if entries.is_empty() {
            return Err(ResumeError::Config(
                "skill vocabulary must contain at least one skill".to_string(),
            ));
        }

        Ok(Self { entries })
    }

    /// The built-in vocabulary
    pub fn builtin() -> Self {
        Self::new(DEFAULT_SKILLS.iter().copied()).expect("built-in skill vocabulary is valid")
    }

    /// Skills present in `text`, in vocabulary order
    pub fn extract(&self, text: &str) -> Vec<String> {
        let text_lower = text.to_lowercase();
        self.entries
            .iter()
            .filter(|entry| entry.pattern.is_match(&text_lower))
            .map(|entry| entry.skill.clone())
            .collect()
    }

    pub fn skills(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.skill.as_str())
    }

    pub fn contains(&self, skill: &str) -> bool {
        self.entries.iter().any(|entry| entry.skill == skill)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for SkillVocabulary {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_word_matching() {
        let vocabulary = SkillVocabulary::builtin();
        let skills = vocabulary.extract("JavaScript developer");
        assert!(skills.contains(&"javascript".to_string()));
        assert!(!skills.contains(&"java".to_string()));
    }

    #[test]
    fn test_java_and_javascript_both_present() {
        let vocabulary = SkillVocabulary::builtin();
        let skills = vocabulary.extract("Java and JavaScript");
        assert_eq!(skills, vec!["java", "javascript"]);
    }

    #[test]
    fn test_phrases_and_symbols() {
        let vocabulary = SkillVocabulary::builtin();
        let skills = vocabulary.extract(
            "Machine Learning with C++, Node.js services, CI/CD pipelines and Power BI dashboards.",
        );
        assert_eq!(
            skills,
            vec!["c++", "node.js", "machine learning", "power bi", "ci/cd"]
        );
    }

    #[test]
    fn test_skill_at_text_edges() {
        let vocabulary = SkillVocabulary::builtin();
        assert_eq!(vocabulary.extract("python"), vec!["python"]);
        assert_eq!(vocabulary.extract("c++"), vec!["c++"]);
    }

    #[test]
    fn test_no_substring_false_positives() {
        let vocabulary = SkillVocabulary::builtin();
        // "ai" inside "maintain", "git" inside "digital", "css" inside "success"
        assert!(vocabulary.extract("maintain digital success").is_empty());
    }

    #[test]
    fn test_vocabulary_order_is_preserved() {
        let vocabulary = SkillVocabulary::builtin();
        let skills = vocabulary.extract("docker, python, aws");
        assert_eq!(skills, vec!["python", "aws", "docker"]);
    }

    #[test]
    fn test_custom_vocabulary_normalizes_and_dedups() {
        let vocabulary = SkillVocabulary::new([" Rust ", "rust", "GO", ""]).unwrap();
        assert_eq!(vocabulary.skills().collect::<Vec<_>>(), vec!["rust", "go"]);
        assert!(vocabulary.contains("go"));
        assert_eq!(vocabulary.extract("Rust and Go"), vec!["rust", "go"]);
    }

    #[test]
    fn test_empty_vocabulary_is_rejected() {
        assert!(matches!(
            SkillVocabulary::new(["", "  "]),
            Err(ResumeError::Config(_))
        ));
    }

    #[test]
    fn test_extraction_is_pure() {
        let vocabulary = SkillVocabulary::builtin();
        let text = "Python, SQL and Tableau for data analysis.";
        assert_eq!(vocabulary.extract(text), vocabulary.extract(text));
    }
}
