//! Character classification for Japanese text.
//!
//! This module categorizes characters into the classes the lexer cares about
//! (kanji, hiragana, katakana, other) and provides the kana feature
//! decomposition (consonant row, vowel, voicing sign, small form) used to
//! compute conjugation-related character shifts.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Character classes used in Japanese text processing.
///
/// Classes are mutually exclusive and total: every character falls into
/// exactly one of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CharClass {
    /// CJK ideograph (or an ideographic iteration mark 々〆〇)
    Kanji,
    /// Hiragana
    Hiragana,
    /// Katakana (full-width or half-width)
    Katakana,
    /// Anything else (punctuation, latin, digits, ...)
    #[default]
    Other,
}

impl CharClass {
    /// Classify a single character.
    pub fn of(c: char) -> Self {
        if is_kanji(c) {
            CharClass::Kanji
        } else if is_hiragana(c) {
            CharClass::Hiragana
        } else if is_katakana(c) {
            CharClass::Katakana
        } else {
            CharClass::Other
        }
    }

    /// Check if this class is phonetic kana (hiragana or katakana)
    pub fn is_kana(&self) -> bool {
        matches!(self, CharClass::Hiragana | CharClass::Katakana)
    }
}

/// Check if a character is a kanji (CJK unified ideograph or iteration mark)
pub fn is_kanji(c: char) -> bool {
    ('\u{4e00}'..='\u{9fa5}').contains(&c) || ('\u{3005}'..='\u{3007}').contains(&c)
}

/// Check if a character lies in the kana blocks (hiragana, katakana and the
/// phonetic extensions between them). Wider than `is_hiragana || is_katakana`;
/// this is the range the lexer treats as one kana run.
pub fn is_kana(c: char) -> bool {
    ('\u{3040}'..='\u{31ff}').contains(&c)
}

/// Check if a character is hiragana
pub fn is_hiragana(c: char) -> bool {
    ('\u{3041}'..='\u{309e}').contains(&c)
}

/// Check if a character is full-width katakana
pub fn is_full_width_katakana(c: char) -> bool {
    ('\u{30a1}'..='\u{30fe}').contains(&c)
}

/// Check if a character is half-width katakana
pub fn is_half_width_katakana(c: char) -> bool {
    ('\u{ff66}'..='\u{ff9d}').contains(&c)
}

/// Check if a character is katakana (full-width or half-width)
pub fn is_katakana(c: char) -> bool {
    is_full_width_katakana(c) || is_half_width_katakana(c)
}

/// Convert hiragana to the corresponding katakana, other characters pass through
pub fn to_katakana(c: char) -> char {
    if is_hiragana(c) {
        char::from_u32(c as u32 + 0x60).unwrap_or(c)
    } else {
        c
    }
}

/// Convert katakana to the corresponding hiragana, other characters pass through
pub fn to_hiragana(c: char) -> char {
    if is_full_width_katakana(c) {
        char::from_u32(c as u32 - 0x60).unwrap_or(c)
    } else if is_half_width_katakana(c) {
        char::from_u32(c as u32 - 0xcf25).unwrap_or(c)
    } else {
        c
    }
}

/// Add a dakuten to a voiceable hiragana (か→が), other characters pass through
pub fn to_voiced_hiragana(c: char) -> char {
    const VOICEABLE: &str = "かきくけこさしすせそたちつてとはひふへほ";
    if VOICEABLE.contains(c) {
        char::from_u32(c as u32 + 1).unwrap_or(c)
    } else {
        c
    }
}

/// Strip the voicing sign from a hiragana (が→か, ぱ→は), other characters
/// pass through
pub fn to_plain_hiragana(c: char) -> char {
    match KanaFeatures::of(c) {
        Some(f) if f.sign != KanaSign::Plain => {
            f.with_sign(KanaSign::Plain).to_char().unwrap_or(c)
        }
        _ => c,
    }
}

/// Consonant row of a kana character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KanaRow {
    Empty,
    K,
    S,
    T,
    N,
    H,
    M,
    Y,
    R,
    W,
}

/// Vowel of a kana character. `N` is the moraic nasal ん, which has no vowel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KanaVowel {
    A,
    I,
    U,
    E,
    O,
    N,
}

/// Voicing sign of a kana character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KanaSign {
    Plain,
    Dakuten,
    Handakuten,
}

/// Feature decomposition of a hiragana character.
///
/// A character is fully determined by (row, vowel, sign, small); changing one
/// feature while holding the others fixed yields a sibling character, which is
/// how the lemmatizer computes conjugation stems (e.g. き → く by shifting the
/// vowel from I to U).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KanaFeatures {
    pub row: KanaRow,
    pub vowel: KanaVowel,
    pub sign: KanaSign,
    pub small: bool,
}

#[rustfmt::skip]
const DECOMPOSITION: &[(char, KanaRow, KanaVowel, KanaSign, bool)] = &[
    ('あ', KanaRow::Empty, KanaVowel::A, KanaSign::Plain, false),
    ('い', KanaRow::Empty, KanaVowel::I, KanaSign::Plain, false),
    ('う', KanaRow::Empty, KanaVowel::U, KanaSign::Plain, false),
    ('え', KanaRow::Empty, KanaVowel::E, KanaSign::Plain, false),
    ('お', KanaRow::Empty, KanaVowel::O, KanaSign::Plain, false),
    ('か', KanaRow::K, KanaVowel::A, KanaSign::Plain, false),
    ('き', KanaRow::K, KanaVowel::I, KanaSign::Plain, false),
    ('く', KanaRow::K, KanaVowel::U, KanaSign::Plain, false),
    ('け', KanaRow::K, KanaVowel::E, KanaSign::Plain, false),
    ('こ', KanaRow::K, KanaVowel::O, KanaSign::Plain, false),
    ('さ', KanaRow::S, KanaVowel::A, KanaSign::Plain, false),
    ('し', KanaRow::S, KanaVowel::I, KanaSign::Plain, false),
    ('す', KanaRow::S, KanaVowel::U, KanaSign::Plain, false),
    ('せ', KanaRow::S, KanaVowel::E, KanaSign::Plain, false),
    ('そ', KanaRow::S, KanaVowel::O, KanaSign::Plain, false),
    ('た', KanaRow::T, KanaVowel::A, KanaSign::Plain, false),
    ('ち', KanaRow::T, KanaVowel::I, KanaSign::Plain, false),
    ('つ', KanaRow::T, KanaVowel::U, KanaSign::Plain, false),
    ('て', KanaRow::T, KanaVowel::E, KanaSign::Plain, false),
    ('と', KanaRow::T, KanaVowel::O, KanaSign::Plain, false),
    ('な', KanaRow::N, KanaVowel::A, KanaSign::Plain, false),
    ('に', KanaRow::N, KanaVowel::I, KanaSign::Plain, false),
    ('ぬ', KanaRow::N, KanaVowel::U, KanaSign::Plain, false),
    ('ね', KanaRow::N, KanaVowel::E, KanaSign::Plain, false),
    ('の', KanaRow::N, KanaVowel::O, KanaSign::Plain, false),
    ('は', KanaRow::H, KanaVowel::A, KanaSign::Plain, false),
    ('ひ', KanaRow::H, KanaVowel::I, KanaSign::Plain, false),
    ('ふ', KanaRow::H, KanaVowel::U, KanaSign::Plain, false),
    ('へ', KanaRow::H, KanaVowel::E, KanaSign::Plain, false),
    ('ほ', KanaRow::H, KanaVowel::O, KanaSign::Plain, false),
    ('ま', KanaRow::M, KanaVowel::A, KanaSign::Plain, false),
    ('み', KanaRow::M, KanaVowel::I, KanaSign::Plain, false),
    ('む', KanaRow::M, KanaVowel::U, KanaSign::Plain, false),
    ('め', KanaRow::M, KanaVowel::E, KanaSign::Plain, false),
    ('も', KanaRow::M, KanaVowel::O, KanaSign::Plain, false),
    ('や', KanaRow::Y, KanaVowel::A, KanaSign::Plain, false),
    ('ゆ', KanaRow::Y, KanaVowel::U, KanaSign::Plain, false),
    ('よ', KanaRow::Y, KanaVowel::O, KanaSign::Plain, false),
    ('ら', KanaRow::R, KanaVowel::A, KanaSign::Plain, false),
    ('り', KanaRow::R, KanaVowel::I, KanaSign::Plain, false),
    ('る', KanaRow::R, KanaVowel::U, KanaSign::Plain, false),
    ('れ', KanaRow::R, KanaVowel::E, KanaSign::Plain, false),
    ('ろ', KanaRow::R, KanaVowel::O, KanaSign::Plain, false),
    ('わ', KanaRow::W, KanaVowel::A, KanaSign::Plain, false),
    ('ゐ', KanaRow::W, KanaVowel::I, KanaSign::Plain, false),
    ('ゑ', KanaRow::W, KanaVowel::E, KanaSign::Plain, false),
    ('を', KanaRow::W, KanaVowel::O, KanaSign::Plain, false),
    ('ん', KanaRow::N, KanaVowel::N, KanaSign::Plain, false),
    ('が', KanaRow::K, KanaVowel::A, KanaSign::Dakuten, false),
    ('ぎ', KanaRow::K, KanaVowel::I, KanaSign::Dakuten, false),
    ('ぐ', KanaRow::K, KanaVowel::U, KanaSign::Dakuten, false),
    ('げ', KanaRow::K, KanaVowel::E, KanaSign::Dakuten, false),
    ('ご', KanaRow::K, KanaVowel::O, KanaSign::Dakuten, false),
    ('ざ', KanaRow::S, KanaVowel::A, KanaSign::Dakuten, false),
    ('じ', KanaRow::S, KanaVowel::I, KanaSign::Dakuten, false),
    ('ず', KanaRow::S, KanaVowel::U, KanaSign::Dakuten, false),
    ('ぜ', KanaRow::S, KanaVowel::E, KanaSign::Dakuten, false),
    ('ぞ', KanaRow::S, KanaVowel::O, KanaSign::Dakuten, false),
    ('だ', KanaRow::T, KanaVowel::A, KanaSign::Dakuten, false),
    ('ぢ', KanaRow::T, KanaVowel::I, KanaSign::Dakuten, false),
    ('づ', KanaRow::T, KanaVowel::U, KanaSign::Dakuten, false),
    ('で', KanaRow::T, KanaVowel::E, KanaSign::Dakuten, false),
    ('ど', KanaRow::T, KanaVowel::O, KanaSign::Dakuten, false),
    ('ば', KanaRow::H, KanaVowel::A, KanaSign::Dakuten, false),
    ('び', KanaRow::H, KanaVowel::I, KanaSign::Dakuten, false),
    ('ぶ', KanaRow::H, KanaVowel::U, KanaSign::Dakuten, false),
    ('べ', KanaRow::H, KanaVowel::E, KanaSign::Dakuten, false),
    ('ぼ', KanaRow::H, KanaVowel::O, KanaSign::Dakuten, false),
    ('ゔ', KanaRow::Empty, KanaVowel::U, KanaSign::Dakuten, false),
    ('ぱ', KanaRow::H, KanaVowel::A, KanaSign::Handakuten, false),
    ('ぴ', KanaRow::H, KanaVowel::I, KanaSign::Handakuten, false),
    ('ぷ', KanaRow::H, KanaVowel::U, KanaSign::Handakuten, false),
    ('ぺ', KanaRow::H, KanaVowel::E, KanaSign::Handakuten, false),
    ('ぽ', KanaRow::H, KanaVowel::O, KanaSign::Handakuten, false),
    ('ぁ', KanaRow::Empty, KanaVowel::A, KanaSign::Plain, true),
    ('ぃ', KanaRow::Empty, KanaVowel::I, KanaSign::Plain, true),
    ('ぅ', KanaRow::Empty, KanaVowel::U, KanaSign::Plain, true),
    ('ぇ', KanaRow::Empty, KanaVowel::E, KanaSign::Plain, true),
    ('ぉ', KanaRow::Empty, KanaVowel::O, KanaSign::Plain, true),
    ('っ', KanaRow::T, KanaVowel::U, KanaSign::Plain, true),
    ('ゃ', KanaRow::Y, KanaVowel::A, KanaSign::Plain, true),
    ('ゅ', KanaRow::Y, KanaVowel::U, KanaSign::Plain, true),
    ('ょ', KanaRow::Y, KanaVowel::O, KanaSign::Plain, true),
    ('ゎ', KanaRow::W, KanaVowel::A, KanaSign::Plain, true),
    ('ゕ', KanaRow::K, KanaVowel::A, KanaSign::Plain, true),
    ('ゖ', KanaRow::K, KanaVowel::E, KanaSign::Plain, true),
];

/// Lazily initialized map from character to features
static FEATURE_MAP: Lazy<HashMap<char, KanaFeatures>> = Lazy::new(|| {
    DECOMPOSITION
        .iter()
        .map(|&(c, row, vowel, sign, small)| {
            (
                c,
                KanaFeatures {
                    row,
                    vowel,
                    sign,
                    small,
                },
            )
        })
        .collect()
});

/// Reverse map from features to character
static CHAR_MAP: Lazy<HashMap<KanaFeatures, char>> =
    Lazy::new(|| FEATURE_MAP.iter().map(|(&c, &f)| (f, c)).collect());

impl KanaFeatures {
    /// Decompose a hiragana character, `None` for anything else
    pub fn of(c: char) -> Option<KanaFeatures> {
        FEATURE_MAP.get(&c).copied()
    }

    /// Recompose into a character, `None` if the feature combination does not
    /// correspond to an existing kana
    pub fn to_char(self) -> Option<char> {
        CHAR_MAP.get(&self).copied()
    }

    /// Same features with a different vowel
    pub fn with_vowel(self, vowel: KanaVowel) -> KanaFeatures {
        KanaFeatures { vowel, ..self }
    }

    /// Same features with a different voicing sign
    pub fn with_sign(self, sign: KanaSign) -> KanaFeatures {
        KanaFeatures { sign, ..self }
    }
}

/// Shift the vowel of a hiragana character, holding row, sign and size fixed.
///
/// Returns `None` when the input is not hiragana or the shifted combination
/// does not exist (e.g. や has no I-vowel sibling).
pub fn shift_vowel(c: char, vowel: KanaVowel) -> Option<char> {
    KanaFeatures::of(c)?.with_vowel(vowel).to_char()
}
