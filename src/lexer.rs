//! The segmenter.
//!
//! Scans input character by character, classifying spans as kanji runs, kana
//! runs or other text. Kanji runs are resolved against the dictionary with a
//! partition search: the run is split into dictionary words, and the last word
//! may extend into the following kana to capture conjugation endings. A run
//! with no valid split, or with more than one equally-sized split, becomes an
//! unknown token rather than a guess.

use std::sync::Arc;

use crate::dictionary::WordIndex;
use crate::kana;
use crate::lemmatizer::lemma_forms;
use crate::token::Token;

/// Most kana characters a word may consume past its kanji run
pub const MAX_WORD_LENGTH: usize = 10;

/// The segmenter.
///
/// Holds a shared reference to the word index; the scanning state lives in
/// the lexer itself, so concurrent segmentation uses one `Lexer` per thread
/// over the same index.
pub struct Lexer {
    words: Arc<WordIndex>,
    chars: Vec<char>,
    index: usize,
}

impl Lexer {
    /// Create a new lexer over the given index
    pub fn new(words: WordIndex) -> Self {
        Lexer::with_arc(Arc::new(words))
    }

    /// Create a new lexer with a shared index reference
    pub fn with_arc(words: Arc<WordIndex>) -> Self {
        Lexer {
            words,
            chars: Vec::new(),
            index: 0,
        }
    }

    /// Get the Arc reference to the index (for sharing)
    pub fn words_arc(&self) -> Arc<WordIndex> {
        Arc::clone(&self.words)
    }

    /// Segment a string into tokens.
    ///
    /// Dropping carriage returns is the only mutation of the input:
    /// concatenating the token texts reproduces it otherwise. No Unicode
    /// normalization is applied; callers wanting NFC normalize before
    /// calling.
    pub fn tokenize(&mut self, text: &str) -> Vec<Token> {
        self.chars = text.chars().filter(|&c| c != '\r').collect();
        self.index = 0;

        let mut tokens = Vec::new();
        while self.index < self.chars.len() {
            self.next_sequence(&mut tokens);
        }
        tokens
    }

    fn next_sequence(&mut self, tokens: &mut Vec<Token>) {
        let c = self.chars[self.index];
        if kana::is_kanji(c) {
            let start = self.index;
            while self.index < self.chars.len() && kana::is_kanji(self.chars[self.index]) {
                self.index += 1;
            }
            match self.try_split_word(start) {
                Some(words) => tokens.extend(words),
                None => tokens.push(Token::Unknown {
                    text: self.text_at(start, self.index),
                }),
            }
        } else if kana::is_kana(c) {
            let start = self.index;
            while self.index < self.chars.len() && kana::is_kana(self.chars[self.index]) {
                self.index += 1;
            }
            tokens.push(Token::Kana {
                text: self.text_at(start, self.index),
            });
        } else {
            self.index += 1;
            tokens.push(Token::Other { text: c.to_string() });
        }
    }

    /// Resolve the kanji run `chars[chunk_start..self.index]` into words.
    ///
    /// Splits are tried by increasing word count; the first count with any
    /// valid split wins. Within a split, every word but the last must exist
    /// in the dictionary as-is, and the last word may extend into the kana
    /// following the run (see [`Self::try_extend`]). More than one valid
    /// split at the winning count is ambiguity: it is reported on stderr and
    /// the run stays unresolved. On success the scan position moves past the
    /// consumed extension.
    fn try_split_word(&mut self, chunk_start: usize) -> Option<Vec<Token>> {
        let chunk_len = self.index - chunk_start;

        for word_count in 1..=chunk_len {
            // prefix word lengths partition the run, leaving at least one
            // character for the last word
            let mut variants: Vec<(Vec<usize>, usize)> = Vec::new();
            iterate_partitions(word_count - 1, chunk_len - 1, &mut |prefix_lens| {
                let mut offset = chunk_start;
                for &len in prefix_lens {
                    let piece = self.text_at(offset, offset + len);
                    if !self.words.contains(&piece) {
                        return;
                    }
                    offset += len;
                }
                if let Some(end) = self.try_extend(offset) {
                    let variant = (prefix_lens.to_vec(), end);
                    if !variants.contains(&variant) {
                        variants.push(variant);
                    }
                }
            });

            if variants.len() > 1 {
                let chunk = self.text_at(chunk_start, self.index);
                eprintln!(
                    "[WARN] Ambiguous segmentation of '{}' ({} variants):",
                    chunk,
                    variants.len()
                );
                for (prefix_lens, end) in &variants {
                    eprintln!("[WARN]   {}", self.render_variant(chunk_start, prefix_lens, *end));
                }
                return None;
            }

            if let Some((prefix_lens, end)) = variants.pop() {
                let mut tokens = Vec::new();
                let mut offset = chunk_start;
                for &len in &prefix_lens {
                    let piece = self.text_at(offset, offset + len);
                    tokens.push(Token::Word {
                        entries: self.words.lookup(&piece),
                        text: piece,
                    });
                    offset += len;
                }

                let last = self.text_at(offset, end);
                let mut entries = Vec::new();
                let mut candidates = vec![last.clone()];
                candidates.extend(lemma_forms(&last));
                for candidate in candidates {
                    if self.words.contains(&candidate) {
                        entries.extend(self.words.lookup(&candidate));
                    }
                }
                tokens.push(Token::Word { text: last, entries });

                self.index = end;
                return Some(tokens);
            }
        }

        None
    }

    /// Find the furthest end index of a word starting at `start`.
    ///
    /// The base span `chars[start..self.index]` may grow into the following
    /// kana, one character at a time, consuming at most [`MAX_WORD_LENGTH`]
    /// kana past the run; the furthest extension whose surface or candidate
    /// base form exists in the dictionary wins. `None` means not even the
    /// base span is known.
    fn try_extend(&self, start: usize) -> Option<usize> {
        let chunk = self.text_at(start, self.index);
        let mut best = if self.known(&chunk) {
            Some(self.index)
        } else {
            None
        };

        let mut local = self.index;
        while local < self.chars.len()
            && local - self.index < MAX_WORD_LENGTH
            && kana::is_kana(self.chars[local])
        {
            local += 1;
            let candidate = self.text_at(start, local);
            if self.known(&candidate) {
                best = Some(local);
            }
        }
        best
    }

    /// Whether the text or one of its candidate base forms is in the index
    fn known(&self, text: &str) -> bool {
        self.words.contains(text)
            || lemma_forms(text)
                .iter()
                .any(|form| self.words.contains(form))
    }

    fn text_at(&self, start: usize, end: usize) -> String {
        self.chars[start..end].iter().collect()
    }

    fn render_variant(&self, chunk_start: usize, prefix_lens: &[usize], end: usize) -> String {
        let mut parts = Vec::with_capacity(prefix_lens.len() + 1);
        let mut offset = chunk_start;
        for &len in prefix_lens {
            parts.push(self.text_at(offset, offset + len));
            offset += len;
        }
        parts.push(self.text_at(offset, end));
        parts.join("|")
    }
}

/// Call `f` with every `count`-tuple of positive lengths whose total is at
/// most `sum`, in odometer order. A zero `count` yields one empty tuple.
fn iterate_partitions(count: usize, sum: usize, f: &mut impl FnMut(&[usize])) {
    if count == 0 {
        f(&[]);
        return;
    }
    if sum < count {
        return;
    }

    let mut parts = vec![1usize; count];
    loop {
        f(&parts);
        let mut position = 0;
        loop {
            parts[position] += 1;
            if parts.iter().sum::<usize>() <= sum {
                break;
            }
            parts[position] = 1;
            position += 1;
            if position == count {
                return;
            }
        }
    }
}
