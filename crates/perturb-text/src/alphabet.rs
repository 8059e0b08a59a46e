//! Languages and their substitution/insertion character pools.
//!
//! The built-in Hindi and Igbo pools are deliberately *simplified* script
//! representations and stay that way until proper linguistic handling lands
//! (Unicode segmentation, Devanagari matras/conjuncts, Igbo digraphs). They
//! are plain data, not logic: callers needing a better pool build one with
//! [`Alphabet::custom`] and pass it to
//! [`add_char_noise_with_alphabet`](crate::noise::add_char_noise_with_alphabet).

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use rand::seq::SliceRandom;

use perturb_core::error::InvalidInput;

// ---------------------------------------------------------------------------
// Language
// ---------------------------------------------------------------------------

/// Languages with a built-in character pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    English,
    Hindi,
    Igbo,
}

impl Language {
    /// All supported languages.
    pub const ALL: [Self; 3] = [Self::English, Self::Hindi, Self::Igbo];
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::English => "english",
            Self::Hindi => "hindi",
            Self::Igbo => "igbo",
        };
        f.write_str(name)
    }
}

impl FromStr for Language {
    type Err = InvalidInput;

    /// Case-insensitive parse, matching the CLI surface.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "english" => Ok(Self::English),
            "hindi" => Ok(Self::Hindi),
            "igbo" => Ok(Self::Igbo),
            _ => Err(InvalidInput::UnknownLanguage(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Built-in pools
// ---------------------------------------------------------------------------

/// ASCII letters, digits, punctuation, and space.
const ENGLISH: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789\
                       !\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~ ";

/// Simplified Devanagari: independent vowels and base consonants plus basic
/// punctuation. No matras, conjuncts, or virama, so random insertion and
/// substitution can produce sequences no Hindi writer would type.
const HINDI: &str = "अआइईउऊएऐओऔकखगघचछजझटठडढतथदधनपफबभमयरलवशषसह.,!?' ";

/// Simplified Igbo: base Latin, digits, basic punctuation, and the
/// dotted-letter extensions. Digraphs (ch, gb, kp, ...) are not represented
/// as pool entries; noise operates on single code points.
const IGBO: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789 .,!?'ịỊọỌụỤṅṄ";

// ---------------------------------------------------------------------------
// Alphabet
// ---------------------------------------------------------------------------

/// Ordered character pool used as the source for substitutions and
/// insertions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    chars: Vec<char>,
}

impl Alphabet {
    /// The built-in pool for a language.
    pub fn for_language(language: Language) -> Self {
        let source = match language {
            Language::English => ENGLISH,
            Language::Hindi => HINDI,
            Language::Igbo => IGBO,
        };
        Self {
            chars: source.chars().collect(),
        }
    }

    /// Build a pool from arbitrary characters, in the given order.
    pub fn custom<I: IntoIterator<Item = char>>(chars: I) -> Self {
        Self {
            chars: chars.into_iter().collect(),
        }
    }

    /// Number of characters in the pool.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Whether the pool has no characters.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Whether the pool contains `c`.
    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    /// Draw one character uniformly at random.
    ///
    /// Panics if the pool is empty; callers validate non-emptiness first.
    pub(crate) fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> char {
        *self.chars.choose(rng).expect("alphabet validated non-empty")
    }

    /// Draw a character guaranteed to differ from `original` whenever the
    /// pool holds any other character; a pool of only `original` yields it
    /// back.
    pub(crate) fn pick_different<R: Rng + ?Sized>(&self, original: char, rng: &mut R) -> char {
        let candidate = self.pick(rng);
        if candidate != original {
            return candidate;
        }
        let others: Vec<char> = self
            .chars
            .iter()
            .copied()
            .filter(|&c| c != original)
            .collect();
        match others.choose(rng) {
            Some(&c) => c,
            None => candidate,
        }
    }
}
