//! # wakachi-rs
//!
//! A dictionary-based Japanese tokenizer and lemmatizer written in Rust.
//!
//! Text is segmented by script class: kana runs pass through as-is, and
//! kanji-bearing spans are resolved against a merged word index with a
//! partition search that allows the last word of a span to extend into the
//! following kana (so conjugated forms like 食べました map back to 食べる).
//! Spans the dictionary cannot account for, and spans with more than one
//! equally good reading, become explicit unknown tokens instead of guesses.
//!
//! ## Quick Start
//!
//! ```rust
//! use wakachi_rs::{Lexer, WordIndexBuilder};
//!
//! // Build an index from TSV data
//! let tsv = "猫\tねこ\tnoun (common) (futsuumeishi)\tcat\tCommon word\n\
//!            食べる\tたべる\tIchidan verb\tto eat\t";
//! let mut builder = WordIndexBuilder::new();
//! builder.load_tsv(tsv).unwrap();
//!
//! // Create a lexer and segment text
//! let mut lexer = Lexer::new(builder.build());
//! let tokens = lexer.tokenize("猫が食べました");
//!
//! for token in &tokens {
//!     println!("{}", token);
//! }
//! ```
//!
//! ## Lemmatization
//!
//! The conjugation rules are also usable on their own:
//!
//! ```rust
//! use wakachi_rs::lemma_forms;
//!
//! assert!(lemma_forms("食べました").contains(&"食べる".to_string()));
//! ```

pub mod align;
pub mod dictionary;
pub mod grammar;
pub mod kana;
pub mod lemmatizer;
pub mod lexer;
pub mod token;

// Re-export main types for convenience
pub use align::align;
pub use dictionary::{
    DictionaryError, MeaningEntry, MeaningTag, NameDictionary, NameEntry, NameKind, RawEntry,
    RawGloss, WordEntry, WordIndex, WordIndexBuilder,
};
pub use grammar::PartOfSpeech;
pub use kana::CharClass;
pub use lemmatizer::lemma_forms;
pub use lexer::{Lexer, MAX_WORD_LENGTH};
pub use token::Token;

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
