//! The fixed part-of-speech vocabulary of the source dictionaries.
//!
//! Source dictionaries describe grammar with free-text labels drawn from a
//! closed set. Lookup is strict on purpose: a description that matches no
//! known label indicates dictionary-format drift and is treated as a fatal
//! load-time error by the dictionary builder, because silently dropping a
//! grammatical category would corrupt the filtering features built on top.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

macro_rules! parts_of_speech {
    ($($variant:ident => $description:literal),* $(,)?) => {
        /// A part-of-speech marker as stated by the source dictionary
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum PartOfSpeech {
            $($variant),*
        }

        impl PartOfSpeech {
            /// All known markers
            pub const ALL: &'static [PartOfSpeech] = &[$(PartOfSpeech::$variant),*];

            /// The canonical description of this marker
            pub fn description(&self) -> &'static str {
                match self {
                    $(PartOfSpeech::$variant => $description),*
                }
            }
        }
    };
}

parts_of_speech! {
    AdjF => "noun or verb acting prenominally",
    AdjI => "adjective (keiyoushi)",
    AdjIx => "adjective (keiyoushi) - yoi/ii class",
    AdjKari => "kari adjective (archaic)",
    AdjKu => "ku adjective (archaic)",
    AdjNa => "adjectival nouns or quasi-adjectives (keiyodoshi)",
    AdjNari => "archaic/formal form of na-adjective",
    AdjNo => "nouns which may take the genitive case particle `no'",
    AdjPn => "pre-noun adjectival (rentaishi)",
    AdjShiku => "shiku adjective (archaic)",
    AdjT => "`taru' adjective",
    Adv => "adverb (fukushi)",
    AdvTo => "adverb taking the `to' particle",
    Aux => "auxiliary",
    AuxAdj => "auxiliary adjective",
    AuxV => "auxiliary verb",
    Conj => "conjunction",
    Cop => "copula",
    Ctr => "counter",
    Exp => "Expressions (phrases, clauses, etc.)",
    Int => "interjection (kandoushi)",
    N => "noun (common) (futsuumeishi)",
    NAdv => "adverbial noun (fukushitekimeishi)",
    NPr => "proper noun",
    NPref => "noun, used as a prefix",
    NSuf => "noun, used as a suffix",
    NT => "noun (temporal) (jisoumeishi)",
    Num => "numeric",
    Pn => "pronoun",
    Pref => "prefix",
    Prt => "particle",
    Suf => "suffix",
    Unc => "unclassified",
    VUnspec => "verb unspecified",
    V1 => "Ichidan verb",
    V1S => "Ichidan verb - kureru special class",
    V2AS => "Nidan verb with 'u' ending (archaic)",
    V2BK => "Nidan verb (upper class) with bu ending (archaic)",
    V2BS => "Nidan verb (lower class) with bu ending (archaic)",
    V2DK => "Nidan verb (upper class) with dzu ending (archaic)",
    V2DS => "Nidan verb (lower class) with dzu ending (archaic)",
    V2GK => "Nidan verb (upper class) with gu ending (archaic)",
    V2GS => "Nidan verb (lower class) with gu ending (archaic)",
    V2HK => "Nidan verb (upper class) with hu/fu ending (archaic)",
    V2HS => "Nidan verb (lower class) with hu/fu ending (archaic)",
    V2KK => "Nidan verb (upper class) with ku ending (archaic)",
    V2KS => "Nidan verb (lower class) with ku ending (archaic)",
    V2MK => "Nidan verb (upper class) with mu ending (archaic)",
    V2MS => "Nidan verb (lower class) with mu ending (archaic)",
    V2NS => "Nidan verb (lower class) with nu ending (archaic)",
    V2RK => "Nidan verb (upper class) with ru ending (archaic)",
    V2RS => "Nidan verb (lower class) with ru ending (archaic)",
    V2SS => "Nidan verb (lower class) with su ending (archaic)",
    V2TK => "Nidan verb (upper class) with tsu ending (archaic)",
    V2TS => "Nidan verb (lower class) with tsu ending (archaic)",
    V2WS => "Nidan verb (lower class) with u ending and we conjugation (archaic)",
    V2YK => "Nidan verb (upper class) with yu ending (archaic)",
    V2YS => "Nidan verb (lower class) with yu ending (archaic)",
    V2ZS => "Nidan verb (lower class) with zu ending (archaic)",
    V4B => "Yodan verb with bu ending (archaic)",
    V4G => "Yodan verb with gu ending (archaic)",
    V4H => "Yodan verb with `hu/fu' ending (archaic)",
    V4K => "Yodan verb with ku ending (archaic)",
    V4M => "Yodan verb with mu ending (archaic)",
    V4N => "Yodan verb with nu ending (archaic)",
    V4R => "Yodan verb with `ru' ending (archaic)",
    V4S => "Yodan verb with su ending (archaic)",
    V4T => "Yodan verb with tsu ending (archaic)",
    V5Aru => "Godan verb - -aru special class",
    V5B => "Godan verb with `bu' ending",
    V5G => "Godan verb with `gu' ending",
    V5K => "Godan verb with `ku' ending",
    V5KS => "Godan verb - Iku/Yuku special class",
    V5M => "Godan verb with `mu' ending",
    V5N => "Godan verb with `nu' ending",
    V5R => "Godan verb with `ru' ending",
    V5RI => "Godan verb with `ru' ending (irregular verb)",
    V5S => "Godan verb with `su' ending",
    V5T => "Godan verb with `tsu' ending",
    V5U => "Godan verb with `u' ending",
    V5US => "Godan verb with `u' ending (special class)",
    V5Uru => "Godan verb - Uru old class verb (old form of Eru)",
    Vi => "intransitive verb",
    Vk => "Kuru verb - special class",
    Vn => "irregular nu verb",
    Vr => "irregular ru verb, plain form ends with -ri",
    Vs => "noun or participle which takes the aux. verb suru",
    VsC => "su verb - precursor to the modern suru",
    VsI => "suru verb - included",
    VsS => "suru verb - special class",
    Vt => "transitive verb",
    Vz => "Ichidan verb - zuru verb (alternative form of -jiru verbs)",
}

/// Godan/ichidan verb markers (conjugate through the lemmatizer's rules)
pub const DAN_VERBS: &[PartOfSpeech] = &[
    PartOfSpeech::V1,
    PartOfSpeech::V1S,
    PartOfSpeech::V5Aru,
    PartOfSpeech::V5B,
    PartOfSpeech::V5G,
    PartOfSpeech::V5K,
    PartOfSpeech::V5KS,
    PartOfSpeech::V5M,
    PartOfSpeech::V5N,
    PartOfSpeech::V5R,
    PartOfSpeech::V5RI,
    PartOfSpeech::V5S,
    PartOfSpeech::V5T,
    PartOfSpeech::V5U,
    PartOfSpeech::V5US,
    PartOfSpeech::V5Uru,
];

/// する-verb markers
pub const SURU_VERBS: &[PartOfSpeech] = &[
    PartOfSpeech::Vs,
    PartOfSpeech::VsC,
    PartOfSpeech::VsI,
    PartOfSpeech::VsS,
];

/// い-adjective markers
pub const I_ADJECTIVES: &[PartOfSpeech] = &[PartOfSpeech::AdjI, PartOfSpeech::AdjIx];

fn normalize(text: &str) -> String {
    text.to_lowercase().replace(['`', '\''], "")
}

static DESCRIPTION_MAP: Lazy<HashMap<String, PartOfSpeech>> = Lazy::new(|| {
    PartOfSpeech::ALL
        .iter()
        .map(|&pos| (normalize(pos.description()), pos))
        .collect()
});

impl PartOfSpeech {
    /// Look up a marker by its description. Matching ignores case, backticks
    /// and apostrophes. `None` means the description is not part of the known
    /// vocabulary; the dictionary builder treats that as fatal.
    pub fn from_description(description: &str) -> Option<PartOfSpeech> {
        DESCRIPTION_MAP.get(&normalize(description)).copied()
    }
}
