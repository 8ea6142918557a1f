//! Integration tests exercising the whole segmentation pipeline.
//!
//! These build small dictionaries by hand and verify the interplay of
//! alignment, lemmatization, the merged index and the lexer.

use std::sync::Arc;
use wakachi_rs::{
    align, lemma_forms, CharClass, Lexer, MeaningEntry, NameDictionary, Token, WordEntry,
    WordIndexBuilder,
};

fn entry(text: &str, reading: &str, tags: &[&str]) -> WordEntry {
    WordEntry {
        text: text.to_string(),
        furigana: align(text, reading),
        meanings: Vec::new(),
        grammar_info: Vec::new(),
        extra_tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

fn make_lexer(words: &[(&str, &str)]) -> Lexer {
    let mut builder = WordIndexBuilder::new();
    for (text, reading) in words {
        builder.insert(entry(text, reading, &[]));
    }
    Lexer::new(builder.build())
}

fn texts(tokens: &[Token]) -> Vec<String> {
    tokens.iter().map(|t| t.text().to_string()).collect()
}

// =============================================================================
// Character Classification Tests
// =============================================================================

#[test]
fn test_char_classes() {
    assert_eq!(CharClass::of('猫'), CharClass::Kanji);
    assert_eq!(CharClass::of('々'), CharClass::Kanji);
    assert_eq!(CharClass::of('ね'), CharClass::Hiragana);
    assert_eq!(CharClass::of('ネ'), CharClass::Katakana);
    assert_eq!(CharClass::of('ﾈ'), CharClass::Katakana); // half-width
    assert_eq!(CharClass::of('A'), CharClass::Other);
    assert_eq!(CharClass::of('。'), CharClass::Other);
}

// =============================================================================
// Alignment Tests
// =============================================================================

#[test]
fn test_alignment_through_entries() {
    let word = entry("思い出す", "おもいだす", &[]);
    assert_eq!(word.furigana, vec!["おも", "", "だ", ""]);
    assert_eq!(word.reading(), "おもいだす");

    let pairs = word.furigana_pairs().expect("alignment should be exact");
    assert_eq!(pairs[0], ('思', "おも".to_string()));
    assert_eq!(pairs[2], ('出', "だ".to_string()));
}

#[test]
fn test_alignment_exactness() {
    for (written, reading) in [
        ("食べ物", "たべもの"),
        ("入り口", "いりぐち"),
        ("東京", "とうきょう"),
        ("白黒", "しろくろ"),
    ] {
        let word = entry(written, reading, &[]);
        assert_eq!(word.reading(), reading, "reading of {}", written);
        assert!(word.furigana_pairs().is_some(), "pairs of {}", written);
    }
}

// =============================================================================
// Lemmatization Tests
// =============================================================================

#[test]
fn test_lemma_forms_common_conjugations() {
    for (surface, lemma) in [
        ("食べました", "食べる"),
        ("食べて", "食べる"),
        ("飲んだ", "飲む"),
        ("書きます", "書く"),
        ("行かない", "行く"),
        ("高かった", "高い"),
        ("高くない", "高い"),
    ] {
        assert!(
            lemma_forms(surface).contains(&lemma.to_string()),
            "{} should yield {}",
            surface,
            lemma
        );
    }
}

#[test]
fn test_lemma_forms_exclude_surface() {
    for surface in ["食べました", "食べる", "ですます"] {
        assert!(!lemma_forms(surface).contains(&surface.to_string()));
    }
}

// =============================================================================
// Dictionary Tests
// =============================================================================

#[test]
fn test_overlay_merge() {
    let mut builder = WordIndexBuilder::new();
    builder.insert(entry("猫", "ねこ", &[]));
    builder.merge(entry("猫", "ねこ", &["Common word", "JLPT N5"]));
    let index = builder.build();

    let entries = index.lookup("猫");
    assert_eq!(entries.len(), 1);
    assert!(entries[0].is_common());
    assert_eq!(entries[0].jlpt_level(), Some(5));
}

#[test]
fn test_names_fallback() {
    let names = NameDictionary::parse("山田 [やまだ] /(s) Yamada/").unwrap();
    let mut builder = WordIndexBuilder::new();
    builder.insert(entry("猫", "ねこ", &[]));
    builder.names(names);

    let mut lexer = Lexer::new(builder.build());
    let tokens = lexer.tokenize("山田です");
    assert_eq!(texts(&tokens), vec!["山田", "です"]);
    assert!(tokens[0].is_word());
    assert_eq!(tokens[0].entries()[0].reading(), "やまだ");
}

#[test]
fn test_reading_hint_lookup() {
    let mut builder = WordIndexBuilder::new();
    builder.insert(entry("辛い", "からい", &["Common word"]));
    builder.insert(entry("辛い", "つらい", &[]));
    let index = builder.build();

    let hint = Arc::new(entry("辛い", "からい", &[]));
    let found = index.lookup_with_reading(&hint);
    assert!(found.is_common());

    let missing = Arc::new(entry("辛い", "しんい", &[]));
    let fallback = index.lookup_with_reading(&missing);
    assert!(Arc::ptr_eq(&fallback, &missing));
}

// =============================================================================
// Lexer Tests
// =============================================================================

#[test]
fn test_basic_sentence() {
    let mut lexer = make_lexer(&[("猫", "ねこ"), ("魚", "さかな"), ("食べる", "たべる")]);
    let tokens = lexer.tokenize("猫が魚を食べました。");

    assert_eq!(
        texts(&tokens),
        vec!["猫", "が", "魚", "を", "食べました", "。"]
    );
    assert_eq!(tokens[4].entries()[0].text, "食べる");
}

#[test]
fn test_kana_runs_never_split() {
    let mut lexer = make_lexer(&[("猫", "ねこ")]);
    let tokens = lexer.tokenize("これはひらがなだけ");
    assert_eq!(tokens.len(), 1);
    assert!(tokens[0].is_kana());
}

#[test]
fn test_kanji_run_resolution() {
    let mut lexer = make_lexer(&[("東京", "とうきょう"), ("都", "と"), ("猫", "ねこ")]);
    let tokens = lexer.tokenize("東京都の猫");
    assert_eq!(texts(&tokens), vec!["東京", "都", "の", "猫"]);
}

#[test]
fn test_ambiguity_is_not_guessed() {
    let mut lexer = make_lexer(&[
        ("東", "ひがし"),
        ("京都", "きょうと"),
        ("東京", "とうきょう"),
        ("都", "と"),
    ]);
    let tokens = lexer.tokenize("東京都");
    assert_eq!(tokens.len(), 1);
    assert!(tokens[0].is_unknown());
}

#[test]
fn test_unknown_runs_are_explicit() {
    let mut lexer = make_lexer(&[("猫", "ねこ")]);
    let tokens = lexer.tokenize("謎語を読む");
    assert!(tokens[0].is_unknown());
    assert_eq!(tokens[0].text(), "謎語");
}

#[test]
fn test_round_trip_property() {
    let mut lexer = make_lexer(&[("猫", "ねこ"), ("食べる", "たべる"), ("東京", "とうきょう")]);
    for input in [
        "猫が食べます。",
        "東京へ行く!",
        "カタカナ、ひらがな、漢字。",
        "mixed latin and 猫",
        "",
    ] {
        let tokens = lexer.tokenize(input);
        let rebuilt: String = tokens.iter().map(Token::text).collect();
        assert_eq!(rebuilt, input);
    }
}

#[test]
fn test_empty_input() {
    let mut lexer = make_lexer(&[]);
    assert!(lexer.tokenize("").is_empty());
}

// =============================================================================
// End-to-End TSV Pipeline Tests
// =============================================================================

#[test]
fn test_tsv_pipeline() {
    let tsv = "猫\tねこ\tnoun (common) (futsuumeishi)\tcat\tCommon word; JLPT N5\n\
               食べる\tたべる\tIchidan verb; transitive verb\tto eat; to live on\t\n\
               # comment\n";
    let mut builder = WordIndexBuilder::new();
    builder.load_tsv(tsv).unwrap();

    let mut lexer = Lexer::new(builder.build());
    let tokens = lexer.tokenize("猫は食べます");
    assert_eq!(texts(&tokens), vec!["猫", "は", "食べます"]);

    let cat = &tokens[0].entries()[0];
    assert!(cat.is_common());
    assert_eq!(cat.jlpt_level(), Some(5));

    let eat = &tokens[2].entries()[0];
    assert_eq!(eat.text, "食べる");
    assert_eq!(eat.meanings.len(), 2);
    assert!(matches!(&eat.meanings[0], MeaningEntry::Meaning { meaning, .. } if meaning == "to eat"));
}

#[test]
fn test_json_serialization() {
    let mut lexer = make_lexer(&[("猫", "ねこ")]);
    let tokens = lexer.tokenize("猫です");

    let json = serde_json::to_string(&tokens).unwrap();
    assert!(json.contains("\"kind\":\"word\""));
    assert!(json.contains("\"kind\":\"kana\""));

    let back: Vec<Token> = serde_json::from_str(&json).unwrap();
    assert_eq!(texts(&back), texts(&tokens));
}

// =============================================================================
// Concurrency Tests
// =============================================================================

#[test]
fn test_shared_index_across_threads() {
    let mut builder = WordIndexBuilder::new();
    builder.insert(entry("猫", "ねこ", &[]));
    let index = Arc::new(builder.build());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let index = Arc::clone(&index);
            std::thread::spawn(move || {
                let mut lexer = Lexer::with_arc(index);
                texts(&lexer.tokenize("猫です"))
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), vec!["猫", "です"]);
    }
}
