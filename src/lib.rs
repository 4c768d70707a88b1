pub mod config;
pub mod constants;
pub mod error;
pub mod extractor;
pub mod models;
pub mod nlp;
pub mod parser;
pub mod pipeline;
pub mod scoring;
pub mod tagger;
pub mod utils;

pub use config::Config;
pub use error::ResumeError;
pub use extractor::extract_text;
pub use models::{Attributes, FileFailure, MatchReport, MatchResult, ResumeRecord, ResumeUpload};
pub use parser::ResumeParser;
pub use pipeline::MatchEngine;
pub use scoring::ResumeMatcher;
pub use tagger::{AttributeExtractor, SkillVocabulary};
