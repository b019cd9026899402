//! Plugboard (Steckerbrett).
//!
//! Cables swap pairs of letters before the signal enters the rotors and again
//! after it leaves them. Unplugged letters pass straight through.
//!
//! # Invariants
//!
//! - `mapping[mapping[x]] == x` for every letter.
//! - At most `max_pairs` letters are swapped.

use crate::{ALPHABET_LEN, ConfigurationError, Letter};

/// Number of cables issued with the historical machine.
pub const MAX_PLUGBOARD_PAIRS: usize = 13;

/// Symmetric pairwise letter swap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plugboard {
    mapping: [Letter; ALPHABET_LEN as usize],
    max_pairs: usize,
}

impl Plugboard {
    /// Empty plugboard allowing up to [`MAX_PLUGBOARD_PAIRS`] cables.
    pub fn new() -> Self {
        Self::with_max_pairs(MAX_PLUGBOARD_PAIRS)
    }

    /// Empty plugboard with a custom cable limit.
    pub fn with_max_pairs(max_pairs: usize) -> Self {
        let mut mapping = [Letter::A; ALPHABET_LEN as usize];
        for letter in Letter::all() {
            mapping[usize::from(letter.index())] = letter;
        }
        Self { mapping, max_pairs }
    }

    /// Plugboard with the given cables, using the default cable limit.
    pub fn from_pairs(pairs: &[(Letter, Letter)]) -> Result<Self, ConfigurationError> {
        let mut plugboard = Self::new();
        plugboard.configure(pairs)?;
        Ok(plugboard)
    }

    /// Replace all cables.
    ///
    /// On error the previous cabling is kept.
    pub fn configure(&mut self, pairs: &[(Letter, Letter)]) -> Result<(), ConfigurationError> {
        if pairs.len() > self.max_pairs {
            return Err(ConfigurationError::TooManyPlugboardPairs {
                count: pairs.len(),
                max: self.max_pairs,
            });
        }

        let mut next = Self::with_max_pairs(self.max_pairs);
        let mut used = [false; ALPHABET_LEN as usize];
        for &(a, b) in pairs {
            if a == b {
                return Err(ConfigurationError::SelfPairedPlugboardLetter(a));
            }
            for letter in [a, b] {
                let slot = &mut used[usize::from(letter.index())];
                if *slot {
                    return Err(ConfigurationError::DuplicatePlugboardLetter(letter));
                }
                *slot = true;
            }
            next.mapping[usize::from(a.index())] = b;
            next.mapping[usize::from(b.index())] = a;
        }

        self.mapping = next.mapping;
        Ok(())
    }

    /// Swap a letter through the cables.
    pub fn swap(&self, letter: Letter) -> Letter {
        self.mapping[usize::from(letter.index())]
    }

    /// Current cables, each reported once with the lower letter first.
    pub fn pairs(&self) -> Vec<(Letter, Letter)> {
        Letter::all()
            .filter_map(|a| {
                let b = self.swap(a);
                (a < b).then_some((a, b))
            })
            .collect()
    }

    /// Cable limit.
    pub fn max_pairs(&self) -> usize {
        self.max_pairs
    }

    /// Parse whitespace-separated letter pairs such as `"AB CD EF"`.
    ///
    /// Only the syntax is checked here; duplicates and limits are checked by
    /// [`Plugboard::configure`].
    pub fn parse_pairs(cables: &str) -> Result<Vec<(Letter, Letter)>, ConfigurationError> {
        cables.split_whitespace()
            .map(|token| {
                let mut chars = token.chars();
                match (chars.next(), chars.next(), chars.next()) {
                    (Some(a), Some(b), None) => Ok((plug_letter(a)?, plug_letter(b)?)),
                    _ => Err(ConfigurationError::MalformedPlugboardPair(token.to_string())),
                }
            })
            .collect()
    }
}

impl Default for Plugboard {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert a character for use in a plugboard pair.
pub(crate) fn plug_letter(c: char) -> Result<Letter, ConfigurationError> {
    Letter::from_char(c).map_err(|_| ConfigurationError::InvalidPlugboardLetter(c))
}
