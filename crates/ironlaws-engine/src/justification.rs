//! Detects justification language in an action's reasoning.

use regex::{Regex, RegexBuilder};

use ironlaws_core::config::defaults;
use ironlaws_core::errors::ConfigError;

/// Case-insensitive, word-bounded matcher over the configured keywords.
#[derive(Debug, Clone)]
pub struct JustificationMatcher {
    pattern: Option<Regex>,
}

impl JustificationMatcher {
    pub fn new(keywords: &[String]) -> Result<Self, ConfigError> {
        let alternatives: Vec<String> = keywords
            .iter()
            .map(|k| k.trim())
            .filter(|k| !k.is_empty())
            .map(regex::escape)
            .collect();
        if alternatives.is_empty() {
            return Ok(Self { pattern: None });
        }

        let source = format!(r"\b(?:{})\b", alternatives.join("|"));
        let pattern = RegexBuilder::new(&source)
            .case_insensitive(true)
            .build()
            .map_err(|e| ConfigError::InvalidKeyword {
                keyword: source.clone(),
                reason: e.to_string(),
            })?;
        Ok(Self {
            pattern: Some(pattern),
        })
    }

    /// Matcher over the built-in keyword list.
    pub fn default_keywords() -> Self {
        let keywords: Vec<String> = defaults::DEFAULT_JUSTIFICATION_KEYWORDS
            .iter()
            .map(|k| k.to_string())
            .collect();
        // Escaped literals always compile.
        Self::new(&keywords).unwrap_or(Self { pattern: None })
    }

    pub fn is_justified(&self, reasoning: &str) -> bool {
        self.pattern
            .as_ref()
            .is_some_and(|p| p.is_match(reasoning))
    }

    /// The first justification phrase found, for log messages.
    pub fn find<'a>(&self, reasoning: &'a str) -> Option<&'a str> {
        self.pattern
            .as_ref()
            .and_then(|p| p.find(reasoning))
            .map(|m| m.as_str())
    }
}
