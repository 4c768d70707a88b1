pub mod matcher;
pub mod tfidf;

pub use matcher::ResumeMatcher;
pub use tfidf::{cosine_similarity, SparseVector, TfidfVectorizer, VectorizeError};
