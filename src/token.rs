//! Token representation for segmented Japanese text.
//!
//! A token covers a contiguous span of the input; concatenating the texts of
//! all tokens reproduces the input (minus stripped carriage returns).

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::dictionary::WordEntry;

/// A single token from segmentation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Token {
    /// A span matched against the dictionary, with every entry that matched
    /// the surface or one of its candidate base forms
    Word {
        text: String,
        entries: Vec<Arc<WordEntry>>,
    },
    /// A kanji-bearing span the dictionary could not account for
    Unknown { text: String },
    /// A run of kana passed through without dictionary lookup
    Kana { text: String },
    /// Anything else: punctuation, latin text, digits, whitespace
    Other { text: String },
}

impl Token {
    /// The surface text this token covers
    pub fn text(&self) -> &str {
        match self {
            Token::Word { text, .. }
            | Token::Unknown { text }
            | Token::Kana { text }
            | Token::Other { text } => text,
        }
    }

    /// Check if this token carries dictionary entries
    pub fn is_word(&self) -> bool {
        matches!(self, Token::Word { .. })
    }

    /// Check if this is a plain kana run
    pub fn is_kana(&self) -> bool {
        matches!(self, Token::Kana { .. })
    }

    /// Check if the dictionary failed on this span
    pub fn is_unknown(&self) -> bool {
        matches!(self, Token::Unknown { .. })
    }

    /// The dictionary entries, empty for non-word tokens
    pub fn entries(&self) -> &[Arc<WordEntry>] {
        match self {
            Token::Word { entries, .. } => entries,
            _ => &[],
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Word { text, entries } => {
                write!(f, "{}", text)?;
                if let Some(entry) = entries.first() {
                    write!(f, "/{}", entry.reading())?;
                }
                Ok(())
            }
            Token::Unknown { text } => write!(f, "{}/?", text),
            Token::Kana { text } | Token::Other { text } => write!(f, "{}", text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::align::align;

    fn word(text: &str, reading: &str) -> Token {
        Token::Word {
            text: text.to_string(),
            entries: vec![Arc::new(WordEntry {
                text: text.to_string(),
                furigana: align(text, reading),
                meanings: Vec::new(),
                grammar_info: Vec::new(),
                extra_tags: Vec::new(),
            })],
        }
    }

    #[test]
    fn test_text_accessor() {
        assert_eq!(word("猫", "ねこ").text(), "猫");
        assert_eq!(Token::Kana { text: "です".to_string() }.text(), "です");
        assert_eq!(Token::Unknown { text: "謎".to_string() }.text(), "謎");
    }

    #[test]
    fn test_predicates() {
        let token = word("猫", "ねこ");
        assert!(token.is_word());
        assert!(!token.is_kana());
        assert_eq!(token.entries().len(), 1);

        let kana = Token::Kana { text: "です".to_string() };
        assert!(kana.is_kana());
        assert!(kana.entries().is_empty());

        assert!(Token::Unknown { text: "謎".to_string() }.is_unknown());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", word("猫", "ねこ")), "猫/ねこ");
        assert_eq!(
            format!("{}", Token::Unknown { text: "謎語".to_string() }),
            "謎語/?"
        );
    }
}
