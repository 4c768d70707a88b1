use crate::constants::SUPPORTED_EXTENSIONS;
use std::path::Path;

/// Get file extension from a file name (without the dot, lowercase)
pub fn get_extension(filename: &str) -> Option<String> {
    Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|s| s.to_lowercase())
}

/// Whether a path looks like a resume this crate can read
pub fn is_supported_file(path: &Path) -> bool {
    path.to_str()
        .and_then(get_extension)
        .map(|ext| SUPPORTED_EXTENSIONS.contains(&ext.as_str()))
        .unwrap_or(false)
}

/// Shorten text for single-line display, appending "..." when cut
pub fn truncate_for_display(text: &str, max_chars: usize) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.chars().count() <= max_chars {
        return collapsed;
    }
    let cut: String = collapsed.chars().take(max_chars).collect();
    format!("{}...", cut.trim_end())
}
