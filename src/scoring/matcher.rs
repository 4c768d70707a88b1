use crate::constants::{LEXICAL_WEIGHT, SKILL_WEIGHT};
use crate::models::{MatchResult, ResumeRecord};
use crate::nlp::StopWords;
use crate::scoring::tfidf::{cosine_similarity, TfidfVectorizer};
use crate::tagger::SkillVocabulary;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::debug;

/// Ranks resume records against a job description
///
/// Combined score is `0.4 * lexical + 0.6 * skill overlap`, where lexical is
/// the TF-IDF cosine similarity between job description and resume text, and
/// skill overlap is the share of job skills the resume also has.
#[derive(Debug, Clone)]
pub struct ResumeMatcher {
    vocabulary: Arc<SkillVocabulary>,
    stopwords: Arc<StopWords>,
}

impl ResumeMatcher {
    pub fn new(vocabulary: Arc<SkillVocabulary>, stopwords: Arc<StopWords>) -> Self {
        Self {
            vocabulary,
            stopwords,
        }
    }

    /// Skills the job description asks for, in vocabulary order
    pub fn job_skills(&self, job_description: &str) -> Vec<String> {
        self.vocabulary.extract(job_description)
    }

    /// Score every resume and return results best first
    ///
    /// Ties keep the input order.
    pub fn score(&self, resumes: &[ResumeRecord], job_description: &str) -> Vec<MatchResult> {
        let job_skills = self.job_skills(job_description);
        let lexical = self.lexical_similarities(resumes, job_description);

        let mut results: Vec<MatchResult> = resumes
            .iter()
            .zip(lexical)
            .enumerate()
            .map(|(record_index, (resume, lexical_similarity))| {
                let resume_skills: HashSet<&str> =
                    resume.skills().iter().map(String::as_str).collect();
                let matched_skills: Vec<String> = job_skills
                    .iter()
                    .filter(|skill| resume_skills.contains(skill.as_str()))
                    .cloned()
                    .collect();
                let skill_overlap = matched_skills.len() as f64 / job_skills.len().max(1) as f64;

                MatchResult {
                    resume_name: resume.name().to_string(),
                    record_index,
                    score: LEXICAL_WEIGHT * lexical_similarity + SKILL_WEIGHT * skill_overlap,
                    lexical_similarity,
                    skill_overlap,
                    matched_skills,
                }
            })
            .collect();

        results.sort_by(|a, b| b.score.total_cmp(&a.score));
        results
    }

    /// TF-IDF cosine similarity of each resume against the job description
    ///
    /// All zeros when the collection has no usable terms.
    pub fn lexical_similarities(&self, resumes: &[ResumeRecord], job_description: &str) -> Vec<f64> {
        let documents: Vec<&str> = std::iter::once(job_description)
            .chain(resumes.iter().map(ResumeRecord::raw_text))
            .collect();

        let vectorizer = TfidfVectorizer::new(&self.stopwords);
        match vectorizer.fit_transform(&documents) {
            Ok(rows) => {
                let (job, resume_rows) = rows.split_at(1);
                resume_rows
                    .iter()
                    .map(|row| cosine_similarity(&job[0], row).clamp(0.0, 1.0))
                    .collect()
            }
            Err(e) => {
                debug!(error = %e, "lexical similarity unavailable, using zero");
                vec![0.0; resumes.len()]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Attributes;

    fn matcher() -> ResumeMatcher {
        ResumeMatcher::new(
            Arc::new(SkillVocabulary::builtin()),
            Arc::new(StopWords::english()),
        )
    }

    fn record(name: &str, text: &str) -> ResumeRecord {
        let skills = SkillVocabulary::builtin().extract(text);
        ResumeRecord::new(
            name,
            text,
            Attributes {
                skills,
                ..Attributes::default()
            },
        )
    }

    const JOB: &str = "Looking for a Python developer with AWS and Docker experience.";

    #[test]
    fn test_python_aws_docker_scenario() {
        let matcher = matcher();
        let resumes = vec![
            record("b.pdf", "Whisk the eggs, fold in flour and bake for forty minutes."),
            record(
                "a.pdf",
                "Experienced Python engineer, AWS certified, familiar with Docker and Kubernetes.",
            ),
        ];

        assert_eq!(matcher.job_skills(JOB), vec!["python", "aws", "docker"]);

        let results = matcher.score(&resumes, JOB);
        assert_eq!(results[0].resume_name, "a.pdf");
        assert_eq!(results[1].resume_name, "b.pdf");
        assert_eq!(results[0].skill_overlap, 1.0);
        assert_eq!(results[0].matched_skills, vec!["python", "aws", "docker"]);
        assert_eq!(results[1].skill_overlap, 0.0);
        assert_eq!(results[1].matched_skills_display(), "None");
        assert!(results[0].score > results[1].score);
    }

    #[test]
    fn test_job_without_skills_gives_zero_overlap() {
        let matcher = matcher();
        let resumes = vec![
            record("a.pdf", "Python, AWS and Docker expert."),
            record("b.pdf", "Barista with latte art skills."),
        ];
        let results = matcher.score(&resumes, "We need a friendly barista for our cafe.");
        for result in &results {
            assert_eq!(result.skill_overlap, 0.0);
            assert!(result.matched_skills.is_empty());
        }
        assert_eq!(results[0].resume_name, "b.pdf");
    }

    #[test]
    fn test_scores_are_bounded() {
        let matcher = matcher();
        let resumes = vec![
            record("same.pdf", JOB),
            record("partial.pdf", "Python scripts"),
            record("empty.pdf", "the of and"),
        ];
        for result in matcher.score(&resumes, JOB) {
            assert!((0.0..=1.0).contains(&result.score), "{}", result.score);
            assert!((0.0..=1.0).contains(&result.lexical_similarity));
            assert!((0.0..=1.0).contains(&result.skill_overlap));
        }
    }

    #[test]
    fn test_copy_of_job_has_highest_lexical_similarity() {
        let matcher = matcher();
        let resumes = vec![
            record("other.pdf", "Java developer with Kubernetes and Azure background."),
            record("copy.pdf", JOB),
            record("partial.pdf", "Python developer."),
        ];
        let lexical = matcher.lexical_similarities(&resumes, JOB);
        assert!((lexical[1] - 1.0).abs() < 1e-9);
        assert!(lexical[1] >= lexical[0]);
        assert!(lexical[1] >= lexical[2]);
    }

    #[test]
    fn test_degenerate_vocabulary_falls_back_to_zero() {
        let matcher = matcher();
        let resumes = vec![record("a.pdf", "I am"), record("b.pdf", "")];
        let lexical = matcher.lexical_similarities(&resumes, "a the");
        assert_eq!(lexical, vec![0.0, 0.0]);

        let results = matcher.score(&resumes, "a the");
        assert!(results.iter().all(|r| r.score == 0.0));
    }

    #[test]
    fn test_ties_keep_input_order() {
        let matcher = matcher();
        let resumes = vec![
            record("first.pdf", "cooking"),
            record("second.pdf", "cooking"),
            record("third.pdf", "cooking"),
        ];
        let names: Vec<String> = matcher
            .score(&resumes, "Rust developer")
            .into_iter()
            .map(|r| r.resume_name)
            .collect();
        assert_eq!(names, vec!["first.pdf", "second.pdf", "third.pdf"]);
    }

    #[test]
    fn test_results_point_back_to_their_records() {
        let matcher = matcher();
        let resumes = vec![
            record("cv.pdf", "Pastry chef and baker"),
            record("cv.pdf", "Python engineer on AWS"),
        ];
        let results = matcher.score(&resumes, "Python developer with AWS");
        assert_eq!(results[0].record_index, 1);
        assert_eq!(results[1].record_index, 0);
    }

    #[test]
    fn test_scoring_is_deterministic() {
        let matcher = matcher();
        let resumes = vec![
            record("a.pdf", "Python and SQL analyst with Tableau."),
            record("b.pdf", "Docker, Kubernetes, AWS and Python."),
            record("c.pdf", "Agile scrum master."),
        ];
        let job = "Python engineer with AWS, SQL and Docker.";
        assert_eq!(matcher.score(&resumes, job), matcher.score(&resumes, job));
    }

    #[test]
    fn test_empty_resume_list() {
        assert!(matcher().score(&[], JOB).is_empty());
    }
}
