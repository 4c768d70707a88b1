pub mod sentences;
pub mod skills;

pub use sentences::KeywordTagger;
pub use skills::SkillVocabulary;

use crate::models::Attributes;
use crate::nlp::SentenceTokenizer;

/// Derives skills and education/experience sentences from resume text
#[derive(Debug, Clone)]
pub struct AttributeExtractor {
    education: KeywordTagger,
    experience: KeywordTagger,
}

impl AttributeExtractor {
    pub fn new() -> Self {
        Self {
            education: KeywordTagger::education(),
            experience: KeywordTagger::experience(),
        }
    }

    pub fn extract_attributes(
        &self,
        text: &str,
        vocabulary: &SkillVocabulary,
        tokenizer: &SentenceTokenizer,
    ) -> Attributes {
        let sentences = tokenizer.tokenize(text);

        Attributes {
            skills: vocabulary.extract(text),
            education: self.education.tag(&sentences),
            experience: self.experience.tag(&sentences),
        }
    }
}

impl Default for AttributeExtractor {
    fn default() -> Self {
        Self::new()
    }
}
