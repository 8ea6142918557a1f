//! The merged word dictionary.
//!
//! This module defines the dictionary entry model and the [`WordIndex`], a
//! read-only mapping from surface text to entries merged from several source
//! dictionaries: a primary bilingual dictionary, a common-words overlay whose
//! tags augment existing entries, and a names dictionary consulted only when
//! the primary index has no entry.
//!
//! The index is built once through [`WordIndexBuilder`] and never mutated
//! afterwards; entries are shared by `Arc` so any number of concurrent
//! lexer invocations can read them without locking.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

use crate::align::align;
use crate::grammar::PartOfSpeech;
use crate::kana;

/// Errors that can occur while building the dictionary.
///
/// These are deliberately fatal: a description that does not match the fixed
/// vocabulary means the source format has drifted, and silently dropping the
/// entry would corrupt everything built on top of the index.
#[derive(Debug)]
pub enum DictionaryError {
    /// A part-of-speech description matched no known label
    UnknownPartOfSpeech(String),
    /// A name classification letter code matched no known kind
    UnknownNameCode(String),
    /// A dictionary line could not be parsed at all
    MalformedEntry(String),
}

impl std::fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DictionaryError::UnknownPartOfSpeech(desc) => {
                write!(f, "Unknown part of speech: '{}'", desc)
            }
            DictionaryError::UnknownNameCode(code) => {
                write!(f, "Unknown name classification code: \"{}\"", code)
            }
            DictionaryError::MalformedEntry(line) => write!(f, "Malformed entry: {}", line),
        }
    }
}

impl std::error::Error for DictionaryError {}

/// A tag attached to a meaning, with optional free-form class markers
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MeaningTag {
    pub tag: String,
    pub classes: Vec<String>,
}

/// One gloss group of a dictionary entry: either a bare tag line or a
/// meaning with its own sub-tags
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MeaningEntry {
    /// A free-form tag string applying to the following meanings
    Tags(String),
    /// A gloss with its sub-tags
    Meaning { meaning: String, tags: Vec<MeaningTag> },
}

impl std::fmt::Display for MeaningEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MeaningEntry::Tags(tags) => write!(f, "{}", tags),
            MeaningEntry::Meaning { meaning, .. } => write!(f, "{}", meaning),
        }
    }
}

/// One sense-bearing dictionary entry.
///
/// `furigana` holds one reading-fragment per character of `text`, with an
/// empty fragment where the character is already kana. The entry's full
/// reading is not stored; it is reconstructed on demand by [`Self::reading`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordEntry {
    pub text: String,
    pub furigana: Vec<String>,
    pub meanings: Vec<MeaningEntry>,
    pub grammar_info: Vec<PartOfSpeech>,
    pub extra_tags: Vec<String>,
}

impl WordEntry {
    /// Reconstruct the word's reading: per character, the furigana fragment
    /// for kanji, the character itself where it is plain hiragana.
    pub fn reading(&self) -> String {
        let chars: Vec<char> = self.text.chars().collect();
        let mut reading = String::new();
        for (index, fragment) in self.furigana.iter().enumerate() {
            match chars.get(index) {
                Some(&c) if fragment.is_empty() && kana::is_hiragana(c) => reading.push(c),
                _ => reading.push_str(fragment),
            }
        }
        reading
    }

    /// Per-character (character, reading-fragment) pairs, or `None` when the
    /// furigana is absent or degraded (fragment count differs from the
    /// character count, or a fragment/kana mismatch). Callers must treat
    /// per-character reading queries as unavailable in that case.
    pub fn furigana_pairs(&self) -> Option<Vec<(char, String)>> {
        let chars: Vec<char> = self.text.chars().collect();
        if self.furigana.len() != chars.len() {
            return None;
        }

        let mut pairs = Vec::with_capacity(chars.len());
        for (index, fragment) in self.furigana.iter().enumerate() {
            let c = chars[index];
            if fragment.is_empty() != kana::is_kana(c) {
                return None;
            }
            pairs.push((c, fragment.clone()));
        }
        Some(pairs)
    }

    /// Whether the entry carries the "Common word" tag
    pub fn is_common(&self) -> bool {
        self.extra_tags.iter().any(|t| t == "Common word")
    }

    /// JLPT level stated by the entry's tags (5 = easiest), if any
    pub fn jlpt_level(&self) -> Option<u8> {
        for (tag, level) in [
            ("JLPT N5", 5),
            ("JLPT N4", 4),
            ("JLPT N3", 3),
            ("JLPT N2", 2),
            ("JLPT N1", 1),
        ] {
            if self.extra_tags.iter().any(|t| t == tag) {
                return Some(level);
            }
        }
        None
    }

    /// Build an entry from a raw source-dictionary record.
    ///
    /// The furigana is aligned from the first reading. Glosses are taken from
    /// the first language in `preferred_langs` that has any; if none matches,
    /// all glosses are kept in source order. Fails when a part-of-speech
    /// description is outside the known vocabulary.
    pub fn from_raw(raw: &RawEntry, preferred_langs: &[&str]) -> Result<WordEntry, DictionaryError> {
        let mut grammar_info = Vec::new();
        for description in &raw.parts_of_speech {
            let pos = PartOfSpeech::from_description(description)
                .ok_or_else(|| DictionaryError::UnknownPartOfSpeech(description.clone()))?;
            if !grammar_info.contains(&pos) {
                grammar_info.push(pos);
            }
        }

        let glosses: Vec<&RawGloss> = preferred_langs
            .iter()
            .find_map(|lang| {
                let matching: Vec<&RawGloss> =
                    raw.glosses.iter().filter(|g| g.lang == *lang).collect();
                if matching.is_empty() {
                    None
                } else {
                    Some(matching)
                }
            })
            .unwrap_or_else(|| raw.glosses.iter().collect());

        let furigana = raw
            .readings
            .first()
            .map(|reading| align(&raw.text, reading))
            .unwrap_or_default();

        Ok(WordEntry {
            text: raw.text.clone(),
            furigana,
            meanings: glosses
                .into_iter()
                .map(|g| MeaningEntry::Meaning {
                    meaning: g.text.clone(),
                    tags: Vec::new(),
                })
                .collect(),
            grammar_info,
            extra_tags: Vec::new(),
        })
    }

    /// Synthesize an entry from a names-dictionary hit
    fn from_name(text: &str, entry: &NameEntry) -> WordEntry {
        WordEntry {
            text: text.to_string(),
            furigana: align(text, &entry.reading),
            meanings: vec![MeaningEntry::Meaning {
                meaning: entry.meaning.clone(),
                tags: entry
                    .kinds
                    .iter()
                    .map(|kind| MeaningTag {
                        tag: kind.description().to_string(),
                        classes: Vec::new(),
                    })
                    .collect(),
            }],
            grammar_info: vec![PartOfSpeech::NPr],
            extra_tags: Vec::new(),
        }
    }
}

impl std::fmt::Display for WordEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.text, self.reading())?;
        if let Some(meaning) = self.meanings.first() {
            write!(f, ": {}", meaning)?;
        }
        Ok(())
    }
}

/// A record as exposed by the dictionary-loading collaborator
#[derive(Debug, Clone, Default)]
pub struct RawEntry {
    /// Surface (dictionary) form
    pub text: String,
    /// Phonetic readings, most common first
    pub readings: Vec<String>,
    /// Glosses tagged by language
    pub glosses: Vec<RawGloss>,
    /// Part-of-speech descriptions, matched against the fixed vocabulary
    pub parts_of_speech: Vec<String>,
}

/// A single gloss with its language tag
#[derive(Debug, Clone, Default)]
pub struct RawGloss {
    pub lang: String,
    pub text: String,
}

/// Classification of a names-dictionary entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NameKind {
    Surname,
    PlaceName,
    PersonName,
    GivenName,
    FemaleGivenName,
    MaleGivenName,
    FullPersonName,
    ProductName,
    CompanyName,
    OrganizationName,
    Station,
    WorkOfArt,
}

impl NameKind {
    /// Parse the single-letter classification code of the names dictionary
    pub fn from_code(code: &str) -> Result<NameKind, DictionaryError> {
        Ok(match code {
            "s" => NameKind::Surname,
            "p" => NameKind::PlaceName,
            "u" => NameKind::PersonName,
            "g" => NameKind::GivenName,
            "f" => NameKind::FemaleGivenName,
            "m" => NameKind::MaleGivenName,
            "h" => NameKind::FullPersonName,
            "pr" => NameKind::ProductName,
            "c" => NameKind::CompanyName,
            "o" => NameKind::OrganizationName,
            "st" => NameKind::Station,
            "wk" => NameKind::WorkOfArt,
            _ => return Err(DictionaryError::UnknownNameCode(code.to_string())),
        })
    }

    /// Human-readable classification
    pub fn description(&self) -> &'static str {
        match self {
            NameKind::Surname => "surname",
            NameKind::PlaceName => "place name",
            NameKind::PersonName => "person name",
            NameKind::GivenName => "given name",
            NameKind::FemaleGivenName => "female given name",
            NameKind::MaleGivenName => "male given name",
            NameKind::FullPersonName => "full person name",
            NameKind::ProductName => "product name",
            NameKind::CompanyName => "company name",
            NameKind::OrganizationName => "organization name",
            NameKind::Station => "station",
            NameKind::WorkOfArt => "work of art",
        }
    }
}

/// One entry of the names dictionary
#[derive(Debug, Clone)]
pub struct NameEntry {
    pub reading: String,
    pub kinds: Vec<NameKind>,
    pub meaning: String,
}

/// Line format of the names dictionary:
/// `text [reading] /(codes) meaning/` with reading and codes optional
static NAME_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.*?) (?:\[(.*)\] )?/(?:\((.*?)\) )?(.*)/$").unwrap());

/// The names dictionary, used only as a lookup fallback
#[derive(Debug, Default)]
pub struct NameDictionary {
    entries: HashMap<String, Vec<NameEntry>>,
}

impl NameDictionary {
    /// Parse the names dictionary from its line-oriented text format.
    ///
    /// Unparseable lines are reported on stderr and skipped; an unknown
    /// classification code is fatal (same strictness as part-of-speech drift).
    pub fn parse(content: &str) -> Result<NameDictionary, DictionaryError> {
        let mut entries: HashMap<String, Vec<NameEntry>> = HashMap::new();

        for line in content.lines() {
            if line.is_empty() {
                continue;
            }
            let Some(captures) = NAME_LINE.captures(line) else {
                eprintln!("[WARN] Not parsed: {}", line);
                continue;
            };

            let text = captures.get(1).map_or("", |m| m.as_str());
            let reading = captures.get(2).map_or("", |m| m.as_str());
            let kinds = match captures.get(3) {
                Some(codes) => codes
                    .as_str()
                    .split(',')
                    .map(NameKind::from_code)
                    .collect::<Result<Vec<_>, _>>()?,
                None => Vec::new(),
            };
            let meaning = captures.get(4).map_or("", |m| m.as_str());

            entries.entry(text.to_string()).or_default().push(NameEntry {
                reading: reading.to_string(),
                kinds,
                meaning: meaning.to_string(),
            });
        }

        Ok(NameDictionary { entries })
    }

    /// Look up the entries for a surface text
    pub fn lookup(&self, text: &str) -> &[NameEntry] {
        self.entries.get(text).map_or(&[], |list| list.as_slice())
    }

    /// Number of distinct surface texts
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the dictionary is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The merged, read-only word index
#[derive(Debug, Default)]
pub struct WordIndex {
    words: HashMap<String, Vec<Arc<WordEntry>>>,
    names: Option<NameDictionary>,
}

impl WordIndex {
    /// Look up all entries for a surface text.
    ///
    /// Falls back to the names dictionary when the primary index has no
    /// entry; name hits are synthesized into entries on each lookup rather
    /// than pre-merged. An empty result is not an error — it is the signal
    /// the lexer uses to mark a span unknown.
    pub fn lookup(&self, text: &str) -> Vec<Arc<WordEntry>> {
        if let Some(list) = self.words.get(text) {
            return list.clone();
        }
        if let Some(names) = &self.names {
            return names
                .lookup(text)
                .iter()
                .map(|entry| Arc::new(WordEntry::from_name(text, entry)))
                .collect();
        }
        Vec::new()
    }

    /// Check whether any source knows this surface text
    pub fn contains(&self, text: &str) -> bool {
        self.words.contains_key(text)
            || self
                .names
                .as_ref()
                .is_some_and(|names| !names.lookup(text).is_empty())
    }

    /// Find the best existing entry with the same text and computed reading
    /// as the hint, or return the hint itself if no such entry exists
    pub fn lookup_with_reading(&self, hint: &Arc<WordEntry>) -> Arc<WordEntry> {
        let reading = hint.reading();
        self.lookup(&hint.text)
            .into_iter()
            .find(|entry| entry.reading() == reading)
            .unwrap_or_else(|| Arc::clone(hint))
    }

    /// Number of distinct surface texts in the primary index
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the primary index is empty
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Gloss languages used when a caller does not specify a preference
pub const DEFAULT_GLOSS_LANGS: &[&str] = &["eng"];

/// Builder assembling a [`WordIndex`] from its ordered sources.
///
/// Order matters: primary entries are inserted first, overlays are merged
/// after so their tags augment rather than replace.
#[derive(Debug, Default)]
pub struct WordIndexBuilder {
    words: HashMap<String, Vec<WordEntry>>,
    names: Option<NameDictionary>,
}

impl WordIndexBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        WordIndexBuilder::default()
    }

    /// Append an entry from the primary dictionary (no merging)
    pub fn insert(&mut self, entry: WordEntry) {
        self.words.entry(entry.text.clone()).or_default().push(entry);
    }

    /// Convert and append a raw primary-dictionary record
    pub fn insert_raw(&mut self, raw: &RawEntry) -> Result<(), DictionaryError> {
        self.insert(WordEntry::from_raw(raw, DEFAULT_GLOSS_LANGS)?);
        Ok(())
    }

    /// Merge an overlay entry: when an existing entry shares the text and the
    /// computed reading, tags are unioned and the newer furigana wins;
    /// otherwise the entry is appended as a distinct sense.
    pub fn merge(&mut self, entry: WordEntry) {
        let list = self.words.entry(entry.text.clone()).or_default();
        let reading = entry.reading();
        for existing in list.iter_mut() {
            if existing.reading() == reading {
                for tag in entry.extra_tags {
                    if !existing.extra_tags.contains(&tag) {
                        existing.extra_tags.push(tag);
                    }
                }
                existing.furigana = entry.furigana;
                return;
            }
        }
        list.push(entry);
    }

    /// Attach the names dictionary used as lookup fallback
    pub fn names(&mut self, names: NameDictionary) {
        self.names = Some(names);
    }

    /// Load words from a TSV string
    /// (format: text, reading, pos descriptions, glosses, tags; the last
    /// three are `;`-separated). Fails on unknown part-of-speech
    /// descriptions.
    pub fn load_tsv(&mut self, content: &str) -> Result<(), DictionaryError> {
        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let parts: Vec<&str> = line.split('\t').collect();
            let text = parts[0];
            if text.is_empty() {
                return Err(DictionaryError::MalformedEntry(line.to_string()));
            }
            let reading = parts.get(1).copied().unwrap_or("");

            let split_list = |field: Option<&&str>| -> Vec<String> {
                field
                    .map(|s| {
                        s.split(';')
                            .map(str::trim)
                            .filter(|s| !s.is_empty())
                            .map(String::from)
                            .collect()
                    })
                    .unwrap_or_default()
            };

            let mut grammar_info = Vec::new();
            for description in split_list(parts.get(2)) {
                let pos = PartOfSpeech::from_description(&description)
                    .ok_or(DictionaryError::UnknownPartOfSpeech(description))?;
                if !grammar_info.contains(&pos) {
                    grammar_info.push(pos);
                }
            }

            let meanings = split_list(parts.get(3))
                .into_iter()
                .map(|meaning| MeaningEntry::Meaning {
                    meaning,
                    tags: Vec::new(),
                })
                .collect();

            self.merge(WordEntry {
                text: text.to_string(),
                furigana: align(text, reading),
                meanings,
                grammar_info,
                extra_tags: split_list(parts.get(4)),
            });
        }
        Ok(())
    }

    /// Build the read-only index
    pub fn build(self) -> WordIndex {
        WordIndex {
            words: self
                .words
                .into_iter()
                .map(|(text, list)| (text, list.into_iter().map(Arc::new).collect()))
                .collect(),
            names: self.names,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(text: &str, reading: &str, tags: &[&str]) -> WordEntry {
        WordEntry {
            text: text.to_string(),
            furigana: align(text, reading),
            meanings: Vec::new(),
            grammar_info: Vec::new(),
            extra_tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn test_reading_reconstruction() {
        let word = entry("食べる", "たべる", &[]);
        assert_eq!(word.furigana, vec!["た", "", ""]);
        assert_eq!(word.reading(), "たべる");

        let word = entry("医薬", "いやく", &[]);
        assert_eq!(word.reading(), "いやく");
    }

    #[test]
    fn test_katakana_reading() {
        let word = entry("タクシー", "たくしー", &[]);
        assert_eq!(word.furigana, vec!["た", "く", "し", "ー"]);
        assert_eq!(word.reading(), "たくしー");

        let word = entry("ピザ屋", "ぴざや", &[]);
        assert_eq!(word.reading(), "ぴざや");
    }

    #[test]
    fn test_furigana_pairs() {
        let word = entry("食べる", "たべる", &[]);
        let pairs = word.furigana_pairs().unwrap();
        assert_eq!(pairs[0], ('食', "た".to_string()));
        assert_eq!(pairs[1], ('べ', String::new()));

        // degraded alignment: single bucket for a two-character word
        let degraded = WordEntry {
            furigana: vec!["ねこいぬ".to_string()],
            ..entry("猫犬", "", &[])
        };
        assert!(degraded.furigana_pairs().is_none());
    }

    #[test]
    fn test_tags() {
        let word = entry("猫", "ねこ", &["Common word", "JLPT N5"]);
        assert!(word.is_common());
        assert_eq!(word.jlpt_level(), Some(5));
        assert_eq!(entry("猫", "ねこ", &[]).jlpt_level(), None);
    }

    #[test]
    fn test_lookup_and_miss() {
        let mut builder = WordIndexBuilder::new();
        builder.insert(entry("猫", "ねこ", &[]));
        let index = builder.build();

        assert_eq!(index.lookup("猫").len(), 1);
        assert!(index.contains("猫"));
        assert!(index.lookup("犬").is_empty()); // a miss is not an error
        assert!(!index.contains("犬"));
    }

    #[test]
    fn test_merge_unions_tags() {
        let mut builder = WordIndexBuilder::new();
        builder.insert(entry("猫", "ねこ", &["JLPT N5"]));
        builder.merge(entry("猫", "ねこ", &["Common word", "JLPT N5"]));
        let index = builder.build();

        let entries = index.lookup("猫");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].extra_tags, vec!["JLPT N5", "Common word"]);
    }

    #[test]
    fn test_merge_keeps_distinct_readings() {
        // 辛い reads both からい and つらい; they stay separate senses
        let mut builder = WordIndexBuilder::new();
        builder.insert(entry("辛い", "からい", &[]));
        builder.merge(entry("辛い", "つらい", &[]));
        let index = builder.build();

        assert_eq!(index.lookup("辛い").len(), 2);
    }

    #[test]
    fn test_merge_keeps_distinct_katakana_readings() {
        // the merge key is the computed reading, which must not collapse
        // for katakana entries
        let mut builder = WordIndexBuilder::new();
        builder.insert(entry("メートル", "めーとる", &[]));
        builder.merge(entry("メートル", "メートル", &[]));
        let index = builder.build();

        assert_eq!(index.lookup("メートル").len(), 2);
    }

    #[test]
    fn test_from_raw() {
        let raw = RawEntry {
            text: "食べる".to_string(),
            readings: vec!["たべる".to_string()],
            glosses: vec![
                RawGloss {
                    lang: "eng".to_string(),
                    text: "to eat".to_string(),
                },
                RawGloss {
                    lang: "ger".to_string(),
                    text: "essen".to_string(),
                },
            ],
            parts_of_speech: vec!["Ichidan verb".to_string(), "transitive verb".to_string()],
        };

        let word = WordEntry::from_raw(&raw, DEFAULT_GLOSS_LANGS).unwrap();
        assert_eq!(word.reading(), "たべる");
        assert_eq!(word.grammar_info, vec![PartOfSpeech::V1, PartOfSpeech::Vt]);
        assert_eq!(word.meanings.len(), 1);
    }

    #[test]
    fn test_from_raw_unknown_pos_is_fatal() {
        let raw = RawEntry {
            text: "猫".to_string(),
            readings: vec!["ねこ".to_string()],
            parts_of_speech: vec!["cromulent verb".to_string()],
            ..Default::default()
        };
        assert!(matches!(
            WordEntry::from_raw(&raw, DEFAULT_GLOSS_LANGS),
            Err(DictionaryError::UnknownPartOfSpeech(_))
        ));
    }

    #[test]
    fn test_name_dictionary_parse() {
        let content = "田中 [たなか] /(s) Tanaka/\n東京 [とうきょう] /(p) Tokyo/";
        let names = NameDictionary::parse(content).unwrap();
        assert_eq!(names.len(), 2);

        let hits = names.lookup("田中");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].reading, "たなか");
        assert_eq!(hits[0].kinds, vec![NameKind::Surname]);
        assert_eq!(hits[0].meaning, "Tanaka");
    }

    #[test]
    fn test_name_dictionary_unknown_code_is_fatal() {
        let content = "田中 [たなか] /(zz) Tanaka/";
        assert!(matches!(
            NameDictionary::parse(content),
            Err(DictionaryError::UnknownNameCode(_))
        ));
    }

    #[test]
    fn test_names_fallback_synthesized_on_lookup() {
        let mut builder = WordIndexBuilder::new();
        builder.insert(entry("猫", "ねこ", &[]));
        builder.names(NameDictionary::parse("田中 [たなか] /(s) Tanaka/").unwrap());
        let index = builder.build();

        let hits = index.lookup("田中");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].reading(), "たなか");
        assert_eq!(hits[0].grammar_info, vec![PartOfSpeech::NPr]);
        assert!(index.contains("田中"));

        // the primary index takes precedence over names
        assert_eq!(index.lookup("猫")[0].reading(), "ねこ");
    }

    #[test]
    fn test_lookup_with_reading() {
        let mut builder = WordIndexBuilder::new();
        builder.insert(entry("辛い", "からい", &["Common word"]));
        builder.insert(entry("辛い", "つらい", &[]));
        let index = builder.build();

        let hint = Arc::new(entry("辛い", "つらい", &["from a deck"]));
        let found = index.lookup_with_reading(&hint);
        assert_eq!(found.reading(), "つらい");
        assert!(found.extra_tags.is_empty()); // the indexed entry, not the hint

        let unknown_hint = Arc::new(entry("謎語", "なぞご", &[]));
        let fallback = index.lookup_with_reading(&unknown_hint);
        assert_eq!(fallback.text, "謎語");
        assert!(Arc::ptr_eq(&fallback, &unknown_hint));
    }

    #[test]
    fn test_load_tsv() {
        let tsv = "猫\tねこ\tnoun (common) (futsuumeishi)\tcat\tCommon word\n\
                   食べる\tたべる\tIchidan verb; transitive verb\tto eat\t\n\
                   # comment line\n";
        let mut builder = WordIndexBuilder::new();
        builder.load_tsv(tsv).unwrap();
        let index = builder.build();

        assert_eq!(index.len(), 2);
        let cat = index.lookup("猫");
        assert_eq!(cat[0].grammar_info, vec![PartOfSpeech::N]);
        assert!(cat[0].is_common());

        let mut builder = WordIndexBuilder::new();
        assert!(builder.load_tsv("猫\tねこ\tcromulent verb\t\t").is_err());
    }
}
