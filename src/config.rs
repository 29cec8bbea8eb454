use serde::{Deserialize, Serialize};

/// Search compilation configuration
///
/// Covers the two knobs the compiler itself cares about: whether multilingual
/// search is enabled (which decides if Unicode normalization folds the result
/// down to ASCII) and how result highlighting is fragmented.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchConfig {
    /// When false, normalized text is folded to an ASCII-only approximation.
    pub enable_multilingual_search: bool,
    /// Highlight fragment size in characters.
    pub highlight_fragment_size: u32,
    /// Number of highlight fragments returned per field.
    pub highlight_number_of_fragments: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            enable_multilingual_search: false,
            highlight_fragment_size: 200,
            highlight_number_of_fragments: 1,
        }
    }
}

impl SearchConfig {
    /// Enable or disable multilingual search
    pub fn with_multilingual_search(mut self, enabled: bool) -> Self {
        self.enable_multilingual_search = enabled;
        self
    }

    /// Set the highlight fragment size
    pub fn with_highlight_fragment_size(mut self, size: u32) -> Self {
        self.highlight_fragment_size = size;
        self
    }

    /// Set the number of highlight fragments
    pub fn with_highlight_fragments(mut self, count: u32) -> Self {
        self.highlight_number_of_fragments = count;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SearchConfig::default();
        assert!(!config.enable_multilingual_search);
        assert_eq!(config.highlight_fragment_size, 200);
        assert_eq!(config.highlight_number_of_fragments, 1);
    }

    #[test]
    fn test_config_builder() {
        let config = SearchConfig::default()
            .with_multilingual_search(true)
            .with_highlight_fragment_size(400)
            .with_highlight_fragments(3);

        assert!(config.enable_multilingual_search);
        assert_eq!(config.highlight_fragment_size, 400);
        assert_eq!(config.highlight_number_of_fragments, 3);
    }
}
