//! Deinflection of Japanese verbs and adjectives.
//!
//! Given an inflected surface form, produces the candidate dictionary (lemma)
//! forms obtained by reversing known conjugation patterns. Verb and adjective
//! rules run independently and the results are unioned. Each rule is a pure
//! suffix rewrite; several rules may fire on the same input and all rewrites
//! are kept, so ambiguity is preserved for the caller to resolve against the
//! dictionary.
//!
//! Rules chain in two layers: terminal forms (ます, た, て, ない, ...) are
//! first rewritten back to a plain form, then voice and mood forms
//! (causative, passive, potential) are reduced to the base verb. Both the
//! intermediate and the final forms are reported.

use crate::kana::{shift_vowel, KanaFeatures, KanaVowel};

/// Produce the candidate dictionary forms for an inflected surface.
///
/// An empty result means no deinflection rule fired; the surface should be
/// looked up as-is. The surface itself is never included in the result.
/// Unrecognized suffixes are not an error.
pub fn lemma_forms(surface: &str) -> Vec<String> {
    let mut forms: Vec<String> = Vec::new();
    for candidate in verbs::normal_forms(surface)
        .into_iter()
        .chain(adjectives::normal_forms(surface))
    {
        if candidate != surface && !forms.contains(&candidate) {
            forms.push(candidate);
        }
    }
    forms
}

/// Last `n`-th character's kana features (1 = last character)
fn features_from_end(text: &str, n: usize) -> Option<KanaFeatures> {
    let c = text.chars().rev().nth(n - 1)?;
    KanaFeatures::of(c)
}

/// Drop the last `n` characters (not bytes)
fn drop_last(text: &str, n: usize) -> &str {
    let mut end = text.len();
    let mut indices = text.char_indices().rev();
    for _ in 0..n {
        match indices.next() {
            Some((i, _)) => end = i,
            None => return "",
        }
    }
    &text[..end]
}

mod verbs {
    use super::*;

    /// All candidate base verbs for a surface, identity included.
    /// する-verbs are deliberately ignored; they parse as noun + する.
    pub(super) fn normal_forms(text: &str) -> Vec<String> {
        plain_forms(text)
            .iter()
            .flat_map(|t| base_verbs(t))
            .collect()
    }

    /// Reduce voice/mood variations of the dictionary form (causative,
    /// passive, potential) to the base verb
    fn base_verbs(text: &str) -> Vec<String> {
        let mut out = vec![text.to_string()];
        out.extend(from_causative(text));
        out.extend(from_passive(text));
        out.extend(from_potential(text));
        out
    }

    /// Rewrite terminal suffixes (-ます, -て and so on) back to a plain,
    /// possibly still derived, dictionary form
    fn plain_forms(text: &str) -> Vec<String> {
        let mut out = vec![text.to_string()];
        out.extend(from_masu(text));
        out.extend(from_mashita(text));
        out.extend(from_masen(text));
        out.extend(from_nai(text));
        out.extend(from_nakatta(text));
        out.extend(from_ta(text));
        out.extend(from_te(text));
        out.extend(from_zu(text));
        out.extend(from_i_stem(text));
        out.extend(from_volitional(text));
        out
    }

    fn from_zu(text: &str) -> Vec<String> {
        if text.ends_with('ず') {
            from_a_stem(drop_last(text, 1))
        } else {
            Vec::new()
        }
    }

    fn from_nakatta(text: &str) -> Vec<String> {
        adjectives::from_past(text)
            .iter()
            .flat_map(|t| from_nai(t))
            .collect()
    }

    fn from_potential(text: &str) -> Vec<String> {
        let mut out = Vec::new();
        if text.ends_with("られる") {
            out.push(format!("{}る", drop_last(text, 3)));
        }
        if text.ends_with('る') {
            if let Some(f) = features_from_end(text, 2) {
                if f.vowel == KanaVowel::E {
                    if let Some(c) = f.with_vowel(KanaVowel::U).to_char() {
                        out.push(format!("{}{}", drop_last(text, 2), c));
                    }
                }
            }
        }
        out
    }

    fn from_passive(text: &str) -> Vec<String> {
        from_pass_caus(text, 'ら', "れる")
    }

    fn from_causative(text: &str) -> Vec<String> {
        from_pass_caus(text, 'さ', "せる")
    }

    fn from_pass_caus(text: &str, particle: char, suffix: &str) -> Vec<String> {
        let mut out = Vec::new();
        // godan: the a-row stem directly precedes the suffix
        if text.ends_with(suffix)
            && features_from_end(text, 3).map(|f| f.vowel) == Some(KanaVowel::A)
        {
            out.extend(from_a_stem(drop_last(text, 2)));
        }
        // ichidan: られる / させる
        if text.ends_with(&format!("{}{}", particle, suffix)) {
            out.extend(from_a_stem(drop_last(text, 3)));
        }
        out
    }

    fn from_volitional(text: &str) -> Vec<String> {
        if text.ends_with("よう") {
            return vec![format!("{}る", drop_last(text, 2))];
        }
        if text.ends_with('う') {
            if let Some(f) = features_from_end(text, 2) {
                if f.vowel == KanaVowel::O {
                    if let Some(c) = f.with_vowel(KanaVowel::U).to_char() {
                        return vec![format!("{}{}", drop_last(text, 2), c)];
                    }
                }
            }
        }
        Vec::new()
    }

    fn from_nai(text: &str) -> Vec<String> {
        if text.ends_with("ない") {
            from_a_stem(drop_last(text, 2))
        } else {
            Vec::new()
        }
    }

    fn from_te_ta(text: &str, t: char, d: char) -> Vec<String> {
        let stem1 = drop_last(text, 1);
        let stem2 = drop_last(text, 2);
        let mut out = if text.ends_with(&format!("っ{}", t)) {
            vec![
                format!("{}う", stem2),
                format!("{}つ", stem2),
                format!("{}る", stem2),
            ]
        } else if text.ends_with(&format!("ん{}", d)) {
            vec![
                format!("{}む", stem2),
                format!("{}ぬ", stem2),
                format!("{}ぶ", stem2),
            ]
        } else if text.ends_with(&format!("い{}", t)) {
            vec![format!("{}く", stem2)]
        } else if text.ends_with(&format!("い{}", d)) {
            vec![format!("{}ぐ", stem2)]
        } else if text.ends_with(&format!("し{}", t)) {
            vec![format!("{}す", stem2)]
        } else {
            Vec::new()
        };
        // ichidan: plain て/た directly after the stem
        if text.ends_with(t) {
            out.push(format!("{}る", stem1));
        }
        out
    }

    fn from_te(text: &str) -> Vec<String> {
        from_te_ta(text, 'て', 'で')
    }

    fn from_ta(text: &str) -> Vec<String> {
        from_te_ta(text, 'た', 'だ')
    }

    fn from_mashita(text: &str) -> Vec<String> {
        if text.ends_with("ました") {
            from_i_stem(drop_last(text, 3))
        } else {
            Vec::new()
        }
    }

    fn from_masen(text: &str) -> Vec<String> {
        if text.ends_with("ません") {
            from_i_stem(drop_last(text, 3))
        } else {
            Vec::new()
        }
    }

    fn from_masu(text: &str) -> Vec<String> {
        if text.ends_with("ます") {
            from_i_stem(drop_last(text, 2))
        } else {
            Vec::new()
        }
    }

    /// Reverse the pre-masu stem: godan i-row shifts back to the u-row,
    /// ichidan e-row stems take る
    fn from_i_stem(text: &str) -> Vec<String> {
        let Some(last) = text.chars().last() else {
            return Vec::new();
        };
        let Some(features) = KanaFeatures::of(last) else {
            return Vec::new();
        };
        match features.vowel {
            KanaVowel::I => match features.with_vowel(KanaVowel::U).to_char() {
                Some(c) => vec![format!("{}{}", drop_last(text, 1), c)],
                None => Vec::new(),
            },
            KanaVowel::E => vec![format!("{}る", text)],
            _ => Vec::new(),
        }
    }

    /// Reverse an a-row stem (negative/passive/causative base): either an
    /// ichidan verb (stem + る) or a godan verb with the a-row kana shifted
    /// back to the u-row (わ maps back to う, not ゔ)
    fn from_a_stem(text: &str) -> Vec<String> {
        let Some(last) = text.chars().last() else {
            return Vec::new();
        };
        let Some(features) = KanaFeatures::of(last) else {
            return Vec::new();
        };
        let mut out = vec![format!("{}る", text)];
        if features.vowel == KanaVowel::A {
            let new_kana = if last == 'わ' {
                Some('う')
            } else {
                shift_vowel(last, KanaVowel::U)
            };
            if let Some(c) = new_kana {
                out.push(format!("{}{}", drop_last(text, 1), c));
            }
        }
        out
    }
}

mod adjectives {
    use super::*;

    /// All candidate base adjectives for a surface, identity included.
    /// な-adjectives are deliberately ignored; they parse as nouns.
    pub(super) fn normal_forms(text: &str) -> Vec<String> {
        plain_forms(text)
            .iter()
            .flat_map(|t| base_adjectives(t))
            .collect()
    }

    fn base_adjectives(text: &str) -> Vec<String> {
        let mut out = vec![text.to_string()];
        out.extend(from_negative(text));
        out
    }

    fn plain_forms(text: &str) -> Vec<String> {
        let mut out = vec![text.to_string()];
        out.extend(from_adverbial(text));
        out.extend(from_past(text));
        out.extend(from_noun(text));
        out
    }

    fn from_noun(text: &str) -> Vec<String> {
        if text.ends_with('さ') {
            vec![format!("{}い", drop_last(text, 1))]
        } else {
            Vec::new()
        }
    }

    /// Also feeds the verb なかった rule, hence visible to the sibling module
    pub(super) fn from_past(text: &str) -> Vec<String> {
        if text.ends_with("かった") {
            vec![format!("{}い", drop_last(text, 3))]
        } else {
            Vec::new()
        }
    }

    fn from_negative(text: &str) -> Vec<String> {
        if text.ends_with("くない") {
            vec![format!("{}い", drop_last(text, 3))]
        } else {
            Vec::new()
        }
    }

    fn from_adverbial(text: &str) -> Vec<String> {
        if text.ends_with('く') {
            vec![format!("{}い", drop_last(text, 1))]
        } else {
            Vec::new()
        }
    }
}
