/// Constants used throughout resume-match
/// Vocabulary, keyword lists and language data live here so resume-side and
/// job-side extraction always read the same lists

/// Built-in skill vocabulary (lowercase, matched as whole phrases)
/// Replaced wholesale by `[skills] vocabulary` in settings.toml
pub const DEFAULT_SKILLS: &[&str] = &[
    "python",
    "java",
    "c++",
    "sql",
    "javascript",
    "react",
    "angular",
    "node.js",
    "html",
    "css",
    "aws",
    "azure",
    "gcp",
    "docker",
    "kubernetes",
    "machine learning",
    "data science",
    "ai",
    "tensorflow",
    "pytorch",
    "nlp",
    "data analysis",
    "statistics",
    "excel",
    "tableau",
    "power bi",
    "git",
    "ci/cd",
    "agile",
    "scrum",
    "project management",
    "communication",
];

/// Sentences containing any of these (substring, case-insensitive) are education
pub const EDUCATION_KEYWORDS: &[&str] = &[
    "bachelor",
    "master",
    "phd",
    "degree",
    "university",
    "college",
    "school",
    "institute",
    "diploma",
];

/// Sentences containing any of these (substring, case-insensitive) are experience
pub const EXPERIENCE_KEYWORDS: &[&str] = &[
    "experience",
    "work",
    "employment",
    "job",
    "career",
    "position",
    "role",
];

/// Weight of TF-IDF cosine similarity in the combined score
pub const LEXICAL_WEIGHT: f64 = 0.4;

/// Weight of skill overlap in the combined score
pub const SKILL_WEIGHT: f64 = 0.6;

/// Display marker for a result with no matched skills
pub const NO_MATCH_MARKER: &str = "None";

/// Number of top results shown with full details by default
pub const DEFAULT_TOP_N: usize = 3;

/// Supported resume file extensions (lowercase, without the dot)
pub const SUPPORTED_EXTENSIONS: &[&str] = &["pdf", "docx"];

/// Default settings file locations, tried in order
pub const DEFAULT_CONFIG_PATHS: &[&str] = &[
    "config/settings.toml",
    "./config/settings.toml",
    "~/.config/resume-match/settings.toml",
];

/// Tokens that end with a period without ending the sentence
/// Stored lowercase and without the final period
pub const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "vs", "etc", "e.g", "i.e", "inc", "ltd",
    "co", "corp", "dept", "univ", "approx", "est", "fig", "mt", "jan", "feb", "mar", "apr", "jun",
    "jul", "aug", "sep", "sept", "oct", "nov", "dec", "b.s", "b.a", "b.sc", "m.s", "m.a", "m.sc",
    "ph.d", "m.d", "u.s", "u.k",
];

/// English stop words removed before TF-IDF vectorization
pub const ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "about", "above", "across", "after", "afterwards", "again", "against", "all", "almost",
    "alone", "along", "already", "also", "although", "always", "am", "among", "amongst",
    "amoungst", "amount", "an", "and", "another", "any", "anyhow", "anyone", "anything", "anyway",
    "anywhere", "are", "around", "as", "at", "back", "be", "became", "because", "become",
    "becomes", "becoming", "been", "before", "beforehand", "behind", "being", "below", "beside",
    "besides", "between", "beyond", "bill", "both", "bottom", "but", "by", "call", "can",
    "cannot", "cant", "co", "con", "could", "couldnt", "cry", "de", "describe", "detail", "do",
    "done", "down", "due", "during", "each", "eg", "eight", "either", "eleven", "else",
    "elsewhere", "empty", "enough", "etc", "even", "ever", "every", "everyone", "everything",
    "everywhere", "except", "few", "fifteen", "fifty", "fill", "find", "fire", "first", "five",
    "for", "former", "formerly", "forty", "found", "four", "from", "front", "full", "further",
    "get", "give", "go", "had", "has", "hasnt", "have", "he", "hence", "her", "here",
    "hereafter", "hereby", "herein", "hereupon", "hers", "herself", "him", "himself", "his",
    "how", "however", "hundred", "i", "ie", "if", "in", "inc", "indeed", "interest", "into",
    "is", "it", "its", "itself", "keep", "last", "latter", "latterly", "least", "less", "ltd",
    "made", "many", "may", "me", "meanwhile", "might", "mill", "mine", "more", "moreover",
    "most", "mostly", "move", "much", "must", "my", "myself", "name", "namely", "neither",
    "never", "nevertheless", "next", "nine", "no", "nobody", "none", "noone", "nor", "not",
    "nothing", "now", "nowhere", "of", "off", "often", "on", "once", "one", "only", "onto", "or",
    "other", "others", "otherwise", "our", "ours", "ourselves", "out", "over", "own", "part",
    "per", "perhaps", "please", "put", "rather", "re", "same", "see", "seem", "seemed",
    "seeming", "seems", "serious", "several", "she", "should", "show", "side", "since",
    "sincere", "six", "sixty", "so", "some", "somehow", "someone", "something", "sometime",
    "sometimes", "somewhere", "still", "such", "system", "take", "ten", "than", "that", "the",
    "their", "them", "themselves", "then", "thence", "there", "thereafter", "thereby",
    "therefore", "therein", "thereupon", "these", "they", "thick", "thin", "third", "this",
    "those", "though", "three", "through", "throughout", "thru", "thus", "to", "together", "too",
    "top", "toward", "towards", "twelve", "twenty", "two", "un", "under", "until", "up", "upon",
    "us", "very", "via", "was", "we", "well", "were", "what", "whatever", "when", "whence",
    "whenever", "where", "whereafter", "whereas", "whereby", "wherein", "whereupon", "wherever",
    "whether", "which", "while", "whither", "who", "whoever", "whole", "whom", "whose", "why",
    "will", "with", "within", "without", "would", "yet", "you", "your", "yours", "yourself",
    "yourselves",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weights_sum_to_one() {
        assert!((LEXICAL_WEIGHT + SKILL_WEIGHT - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_default_skills_are_lowercase_and_unique() {
        let mut seen = std::collections::HashSet::new();
        for skill in DEFAULT_SKILLS {
            assert_eq!(*skill, skill.to_lowercase());
            assert!(seen.insert(*skill), "duplicate skill: {}", skill);
        }
    }

    #[test]
    fn test_abbreviations_have_no_trailing_period() {
        assert!(ABBREVIATIONS.iter().all(|a| !a.ends_with('.')));
    }
}
