//! Furigana alignment.
//!
//! Aligns a word's written form against its phonetic reading, producing one
//! reading-fragment per character. Hiragana characters of the written form
//! get an empty fragment (they read as themselves); everything else, kanji
//! and katakana alike, gets the slice of the reading between the surrounding
//! hiragana anchors.

use crate::kana;

/// Align a written form against its reading.
///
/// Returns one fragment per character of `written` when an alignment is
/// derivable. Hiragana characters of the written form occurring exactly once
/// in the reading anchor the split; the rest of the reading is distributed
/// proportionally. When even the proportional distribution cannot consume the
/// reading exactly, the whole reading is returned as a single fragment —
/// callers detect that degraded case by comparing lengths
/// (see [`WordEntry::furigana_pairs`](crate::WordEntry::furigana_pairs)).
///
/// Katakana is not transparent here: a katakana written form carries its
/// reading in the fragments, so the computed reading survives (メートル read
/// as めーとる keeps its hiragana reading).
pub fn align(written: &str, reading: &str) -> Vec<String> {
    let text: Vec<char> = written.chars().collect();
    // an all-hiragana written form reads as itself, no alignment needed
    if !text.is_empty() && text.iter().all(|&c| kana::is_hiragana(c)) {
        return vec![String::new(); text.len()];
    }
    let reading: Vec<char> = reading.chars().collect();
    align_chars(&text, &reading)
}

fn align_chars(text: &[char], reading: &[char]) -> Vec<String> {
    for (index, &c) in text.iter().enumerate() {
        // only hiragana anchors a split; katakana (ー in particular) must
        // keep a real fragment or the computed reading loses it
        if !kana::is_hiragana(c) {
            continue;
        }
        let Some(split) = unique_occurrence(c, reading) else {
            continue;
        };

        let mut result = align_chars(&text[..index], &reading[..split]);
        result.push(String::new());
        result.extend(align_chars(&text[index + 1..], &reading[split + 1..]));
        return result;
    }

    proportional(text, reading)
}

/// Index of `c` in `reading` if it occurs exactly once
fn unique_occurrence(c: char, reading: &[char]) -> Option<usize> {
    let mut found = None;
    for (i, &r) in reading.iter().enumerate() {
        if r == c {
            if found.is_some() {
                return None;
            }
            found = Some(i);
        }
    }
    found
}

/// Distribute the reading across the characters in proportion, with a running
/// fractional accumulator. Falls back to a single whole-reading fragment when
/// the rounding does not consume the reading exactly.
fn proportional(text: &[char], reading: &[char]) -> Vec<String> {
    if text.is_empty() {
        return if reading.is_empty() {
            Vec::new()
        } else {
            vec![reading.iter().collect()]
        };
    }

    let step = reading.len() as f64 / text.len() as f64;
    let mut position = 0.01;
    let mut int_position = 0;
    let mut result = Vec::with_capacity(text.len());
    for _ in 0..text.len() {
        position += step;
        let new_position = (position as usize).min(reading.len());
        result.push(reading[int_position..new_position].iter().collect());
        int_position = new_position;
    }
    if int_position != reading.len() {
        return vec![reading.iter().collect()];
    }
    result
}
