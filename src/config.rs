//! Parser configuration

use crate::tokens::classify::is_id;
use crate::tokens::Keyword;

/// Declaration keyword used when none is configured
pub const DEFAULT_DECL_KEYWORD: &str = "DataType";

/// Nesting limit used when none is configured
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Reasons a configuration cannot be used for parsing
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("declaration keyword '{0}' is not a valid identifier")]
    InvalidDeclKeyword(String),
    #[error("declaration keyword '{0}' is reserved")]
    ReservedDeclKeyword(String),
}

/// Settings that shape how a token stream is parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    /// Keyword that introduces a declaration statement
    pub decl_keyword: String,
    /// Maximum nesting of statements, blocks and parenthesized expressions
    pub max_depth: usize,
}

impl ParserConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_decl_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.decl_keyword = keyword.into();
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Check that the declaration keyword can start a declaration.
    ///
    /// It must have identifier shape and must not be `if`, `else` or `while`,
    /// otherwise declarations would be unreachable or shadow a control keyword.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_id(&self.decl_keyword) {
            return Err(ConfigError::InvalidDeclKeyword(self.decl_keyword.clone()));
        }
        if Keyword::from_str(&self.decl_keyword).is_some() {
            return Err(ConfigError::ReservedDeclKeyword(self.decl_keyword.clone()));
        }
        Ok(())
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            decl_keyword: DEFAULT_DECL_KEYWORD.to_string(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ParserConfig::default();
        assert_eq!(config.decl_keyword, "DataType");
        assert_eq!(config.max_depth, 256);
    }

    #[test]
    fn test_builders() {
        let config = ParserConfig::new().with_decl_keyword("var").with_max_depth(8);
        assert_eq!(config.decl_keyword, "var");
        assert_eq!(config.max_depth, 8);
    }

    #[test]
    fn test_validate_accepts_identifiers() {
        assert_eq!(ParserConfig::default().validate(), Ok(()));
        assert_eq!(ParserConfig::new().with_decl_keyword("var").validate(), Ok(()));
        assert_eq!(ParserConfig::new().with_decl_keyword("_t1").validate(), Ok(()));
    }

    #[test]
    fn test_validate_rejects_bad_keywords() {
        for keyword in ["", "{", "1abc", "a-b", ";"] {
            assert_eq!(
                ParserConfig::new().with_decl_keyword(keyword).validate(),
                Err(ConfigError::InvalidDeclKeyword(keyword.to_string()))
            );
        }
        for keyword in ["if", "else", "while"] {
            assert_eq!(
                ParserConfig::new().with_decl_keyword(keyword).validate(),
                Err(ConfigError::ReservedDeclKeyword(keyword.to_string()))
            );
        }
    }
}
