//! The four edit operations and the select-then-rebuild noise pass.

use std::fmt;
use std::str::FromStr;

use rand::Rng;

use perturb_core::error::InvalidInput;
use perturb_core::level::NoiseLevel;
use perturb_core::profile::SeverityProfile;
use perturb_core::seed::seed_rng;

use crate::alphabet::{Alphabet, Language};

// ---------------------------------------------------------------------------
// NoiseOp
// ---------------------------------------------------------------------------

/// Character-level edit operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoiseOp {
    /// Replace the character with one drawn from the alphabet, guaranteed
    /// to differ from the original whenever the alphabet holds any other
    /// character.
    Substitute,
    /// Omit the character.
    Delete,
    /// Emit one alphabet character before the original character.
    Insert,
    /// Exchange the character with its immediate successor in the original
    /// text. A swap at the final index has no successor and is skipped
    /// silently; a selected position whose character was already consumed by
    /// the previous position's swap is likewise skipped. Both skipped
    /// positions still count toward the selected-edit total, so the output
    /// length always equals the input length.
    Swap,
}

impl NoiseOp {
    /// All operations.
    pub const ALL: [Self; 4] = [Self::Substitute, Self::Delete, Self::Insert, Self::Swap];
}

impl fmt::Display for NoiseOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Substitute => "substitute",
            Self::Delete => "delete",
            Self::Insert => "insert",
            Self::Swap => "swap",
        };
        f.write_str(name)
    }
}

impl FromStr for NoiseOp {
    type Err = InvalidInput;

    /// Case-insensitive parse, matching the CLI surface.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "substitute" => Ok(Self::Substitute),
            "delete" => Ok(Self::Delete),
            "insert" => Ok(Self::Insert),
            "swap" => Ok(Self::Swap),
            _ => Err(InvalidInput::UnknownOperation(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// add_char_noise
// ---------------------------------------------------------------------------

/// Apply `op` to a level-dependent fraction of `text`'s characters.
///
/// The edit fraction comes from `profile.text_edit_fraction`; replacement
/// characters come from the built-in pool for `language`. Randomness is
/// drawn only from `rng`, so a seeded RNG reproduces the output exactly.
///
/// # Errors
///
/// Returns [`InvalidInput::EmptyText`] if `text` has no characters.
pub fn add_char_noise<R: Rng + ?Sized>(
    text: &str,
    language: Language,
    level: NoiseLevel,
    op: NoiseOp,
    profile: &SeverityProfile,
    rng: &mut R,
) -> Result<String, InvalidInput> {
    let alphabet = Alphabet::for_language(language);
    add_char_noise_with_alphabet(text, &alphabet, profile.text_edit_fraction.value(level), op, rng)
}

/// [`add_char_noise`] with the default severity profile and an optional
/// seed (`None` seeds from OS entropy).
///
/// # Errors
///
/// Returns [`InvalidInput::EmptyText`] if `text` has no characters.
pub fn add_char_noise_seeded(
    text: &str,
    language: Language,
    level: NoiseLevel,
    op: NoiseOp,
    seed: Option<u64>,
) -> Result<String, InvalidInput> {
    let mut rng = seed_rng(seed);
    add_char_noise(text, language, level, op, &SeverityProfile::default(), &mut rng)
}

/// Apply `op` to `round(fraction × char_count)` characters, minimum one,
/// drawing replacements from a caller-supplied alphabet.
///
/// Positions are sampled without replacement from the *original* character
/// indices, then the output is rebuilt in one pass over an immutable
/// snapshot of the input. Length-changing operations therefore cannot shift
/// which characters are edited, and the requested fraction holds for every
/// operation.
///
/// `fraction` must be in `(0, 1]`; profile validation guarantees this for
/// the built-in tables.
///
/// # Errors
///
/// Returns [`InvalidInput::EmptyText`] if `text` has no characters, or
/// [`InvalidInput::EmptyAlphabet`] if the pool has none.
pub fn add_char_noise_with_alphabet<R: Rng + ?Sized>(
    text: &str,
    alphabet: &Alphabet,
    fraction: f32,
    op: NoiseOp,
    rng: &mut R,
) -> Result<String, InvalidInput> {
    let chars: Vec<char> = text.chars().collect();
    if chars.is_empty() {
        return Err(InvalidInput::EmptyText);
    }
    if alphabet.is_empty() {
        return Err(InvalidInput::EmptyAlphabet);
    }

    let count = edit_count(fraction, chars.len());
    let mut selected = vec![false; chars.len()];
    for index in rand::seq::index::sample(rng, chars.len(), count) {
        selected[index] = true;
    }

    let mut out = String::with_capacity(chars.len() + count);
    let mut i = 0;
    while i < chars.len() {
        if !selected[i] {
            out.push(chars[i]);
            i += 1;
            continue;
        }
        match op {
            NoiseOp::Substitute => {
                out.push(alphabet.pick_different(chars[i], rng));
                i += 1;
            }
            NoiseOp::Delete => {
                i += 1;
            }
            NoiseOp::Insert => {
                out.push(alphabet.pick(rng));
                out.push(chars[i]);
                i += 1;
            }
            NoiseOp::Swap => {
                if i + 1 < chars.len() {
                    out.push(chars[i + 1]);
                    out.push(chars[i]);
                    // The successor is consumed here, even if it was itself
                    // selected; advancing by two skips its own edit.
                    i += 2;
                } else {
                    // Final index has no successor: skip silently.
                    out.push(chars[i]);
                    i += 1;
                }
            }
        }
    }
    Ok(out)
}

/// Number of characters to edit: `round(fraction × len)`, at least one for
/// non-empty text, never more than `len`.
fn edit_count(fraction: f32, len: usize) -> usize {
    let rounded = (fraction * len as f32).round() as usize;
    rounded.clamp(1, len)
}

#[cfg(test)]
mod tests {
    use super::*;
    use perturb_test_utils::seeded_rng;

    const SAMPLE: &str = "A typical English question about the image content?";

    fn noised(text: &str, op: NoiseOp, level: NoiseLevel, seed: u64) -> String {
        add_char_noise_seeded(text, Language::English, level, op, Some(seed)).unwrap()
    }

    #[test]
    fn op_parse_is_case_insensitive() {
        assert_eq!("Swap".parse::<NoiseOp>().unwrap(), NoiseOp::Swap);
        assert_eq!("DELETE".parse::<NoiseOp>().unwrap(), NoiseOp::Delete);
    }

    #[test]
    fn op_parse_rejects_unknown() {
        let err = "rotate".parse::<NoiseOp>().unwrap_err();
        assert_eq!(err, InvalidInput::UnknownOperation("rotate".into()));
    }

    #[test]
    fn op_display_round_trips_through_parse() {
        for op in NoiseOp::ALL {
            assert_eq!(op.to_string().parse::<NoiseOp>().unwrap(), op);
        }
    }

    #[test]
    fn empty_text_is_rejected() {
        let err = add_char_noise_seeded(
            "",
            Language::English,
            NoiseLevel::Low,
            NoiseOp::Substitute,
            Some(42),
        )
        .unwrap_err();
        assert_eq!(err, InvalidInput::EmptyText);
    }

    #[test]
    fn empty_alphabet_is_rejected() {
        let mut rng = seeded_rng(42);
        let alphabet = Alphabet::custom([]);
        let err = add_char_noise_with_alphabet("hello", &alphabet, 0.25, NoiseOp::Insert, &mut rng)
            .unwrap_err();
        assert_eq!(err, InvalidInput::EmptyAlphabet);
    }

    #[test]
    fn fixed_seed_is_deterministic() {
        for op in NoiseOp::ALL {
            for level in NoiseLevel::ALL {
                let a = noised(SAMPLE, op, level, 42);
                let b = noised(SAMPLE, op, level, 42);
                assert_eq!(a, b, "op={op} level={level}");
            }
        }
    }

    #[test]
    fn different_seeds_give_different_output() {
        let a = noised(SAMPLE, NoiseOp::Substitute, NoiseLevel::High, 42);
        let b = noised(SAMPLE, NoiseOp::Substitute, NoiseLevel::High, 43);
        assert_ne!(a, b);
    }

    #[test]
    fn substitute_preserves_length() {
        for level in NoiseLevel::ALL {
            let out = noised(SAMPLE, NoiseOp::Substitute, level, 42);
            assert_eq!(out.chars().count(), SAMPLE.chars().count());
        }
    }

    #[test]
    fn swap_preserves_length() {
        for level in NoiseLevel::ALL {
            let out = noised(SAMPLE, NoiseOp::Swap, level, 42);
            assert_eq!(out.chars().count(), SAMPLE.chars().count());
        }
    }

    #[test]
    fn delete_removes_exactly_edit_count_chars() {
        let len = SAMPLE.chars().count();
        for level in NoiseLevel::ALL {
            let fraction = SeverityProfile::default().text_edit_fraction.value(level);
            let expected = (fraction * len as f32).round().max(1.0) as usize;
            let out = noised(SAMPLE, NoiseOp::Delete, level, 42);
            assert_eq!(out.chars().count(), len - expected, "level={level}");
        }
    }

    #[test]
    fn insert_adds_exactly_edit_count_chars() {
        let len = SAMPLE.chars().count();
        for level in NoiseLevel::ALL {
            let fraction = SeverityProfile::default().text_edit_fraction.value(level);
            let expected = (fraction * len as f32).round().max(1.0) as usize;
            let out = noised(SAMPLE, NoiseOp::Insert, level, 42);
            assert_eq!(out.chars().count(), len + expected, "level={level}");
        }
    }

    #[test]
    fn hello_at_low_level_gets_exactly_one_substitution() {
        // round(0.05 * 5) = 0, so the minimum-one rule kicks in.
        let out = noised("hello", NoiseOp::Substitute, NoiseLevel::Low, 42);
        assert_eq!(out.chars().count(), 5);
        let differing = out
            .chars()
            .zip("hello".chars())
            .filter(|(a, b)| a != b)
            .count();
        assert_eq!(differing, 1);
    }

    #[test]
    fn substituted_chars_come_from_the_alphabet() {
        let mut rng = seeded_rng(42);
        let alphabet = Alphabet::custom(['#', '@']);
        let out =
            add_char_noise_with_alphabet("hello world", &alphabet, 1.0, NoiseOp::Substitute, &mut rng)
                .unwrap();
        assert!(out.chars().all(|c| c == '#' || c == '@'));
    }

    #[test]
    fn inserted_chars_come_from_the_alphabet() {
        let mut rng = seeded_rng(42);
        let alphabet = Alphabet::custom(['#']);
        let out = add_char_noise_with_alphabet("abc", &alphabet, 1.0, NoiseOp::Insert, &mut rng)
            .unwrap();
        assert_eq!(out.chars().filter(|&c| c == '#').count(), 3);
        // Original characters survive in order.
        let rest: String = out.chars().filter(|&c| c != '#').collect();
        assert_eq!(rest, "abc");
    }

    #[test]
    fn swap_exchanges_adjacent_pairs() {
        let mut rng = seeded_rng(42);
        let alphabet = Alphabet::for_language(Language::English);
        // Fraction 1.0 selects every position, so the outcome is fixed:
        // pairs swap, and the odd final index is skipped.
        let out = add_char_noise_with_alphabet("abcde", &alphabet, 1.0, NoiseOp::Swap, &mut rng)
            .unwrap();
        assert_eq!(out, "badce");
    }

    #[test]
    fn swap_at_final_index_is_skipped_without_panic() {
        let mut rng = seeded_rng(42);
        let alphabet = Alphabet::for_language(Language::English);
        // Single character: the only position is the final index.
        let out = add_char_noise_with_alphabet("x", &alphabet, 1.0, NoiseOp::Swap, &mut rng)
            .unwrap();
        assert_eq!(out, "x");
    }

    #[test]
    fn delete_everything_yields_empty_string() {
        let mut rng = seeded_rng(42);
        let alphabet = Alphabet::for_language(Language::English);
        let out = add_char_noise_with_alphabet("abc", &alphabet, 1.0, NoiseOp::Delete, &mut rng)
            .unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn multibyte_text_is_edited_by_chars_not_bytes() {
        let hindi = "यह छवि में क्या है?";
        let len = hindi.chars().count();
        for op in [NoiseOp::Substitute, NoiseOp::Swap] {
            let out =
                add_char_noise_seeded(hindi, Language::Hindi, NoiseLevel::High, op, Some(42))
                    .unwrap();
            assert_eq!(out.chars().count(), len, "op={op}");
        }
    }

    #[test]
    fn edit_count_applies_minimum_one() {
        assert_eq!(edit_count(0.05, 5), 1);
        assert_eq!(edit_count(0.05, 1), 1);
    }

    #[test]
    fn edit_count_rounds_and_caps_at_length() {
        assert_eq!(edit_count(0.25, 100), 25);
        assert_eq!(edit_count(0.15, 10), 2); // round(1.5) = 2
        assert_eq!(edit_count(1.0, 7), 7);
    }
}
