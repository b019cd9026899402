//! Substitution tables shared by rotors and reflectors.
//!
//! A table maps contact index to contact index. Catalog tables are built at
//! compile time from their historical letter strings; custom tables are
//! parsed and checked at runtime.

use crate::{ALPHABET_LEN, Letter};

/// Contact-to-contact mapping over the alphabet.
pub(crate) type Table = [u8; ALPHABET_LEN as usize];

/// Build a table from a 26-letter upper-case wiring string.
pub(crate) const fn table(letters: &[u8; ALPHABET_LEN as usize]) -> Table {
    let mut out = [0u8; ALPHABET_LEN as usize];
    let mut i = 0;
    while i < out.len() {
        out[i] = letters[i] - b'A';
        i += 1;
    }
    out
}

/// Inverse of a permutation table.
pub(crate) const fn invert(table: &Table) -> Table {
    let mut out = [0u8; ALPHABET_LEN as usize];
    let mut i = 0;
    while i < out.len() {
        out[table[i] as usize] = i as u8;
        i += 1;
    }
    out
}

/// Parse a wiring string into a permutation table.
///
/// Returns a human-readable reason on failure so callers can wrap it in the
/// error variant for their component.
pub(crate) fn parse_permutation(wiring: &str) -> Result<Table, String> {
    let count = wiring.chars().count();
    if count != usize::from(ALPHABET_LEN) {
        return Err(format!("expected {ALPHABET_LEN} letters, got {count}"));
    }

    let mut out = [0u8; ALPHABET_LEN as usize];
    let mut seen = [false; ALPHABET_LEN as usize];
    for (contact, c) in wiring.chars().enumerate() {
        let letter = Letter::from_char(c).map_err(|e| e.to_string())?;
        let index = usize::from(letter.index());
        if seen[index] {
            return Err(format!("letter {letter} appears more than once"));
        }
        seen[index] = true;
        out[contact] = letter.index();
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invert_round_trips() {
        let forward = table(b"EKMFLGDQVZNTOWYHXUSPAIBRCJ");
        let backward = invert(&forward);
        for i in 0..forward.len() {
            assert_eq!(backward[forward[i] as usize] as usize, i);
        }
    }

    #[test]
    fn parse_rejects_bad_wiring() {
        assert!(parse_permutation("ABC").is_err());
        assert!(parse_permutation("AACDEFGHIJKLMNOPQRSTUVWXYZ").is_err());
        assert!(parse_permutation("ABCDEFGHIJKLMNOPQRSTUVWXY1").is_err());
        assert_eq!(
            parse_permutation("abcdefghijklmnopqrstuvwxyz"),
            Ok(table(b"ABCDEFGHIJKLMNOPQRSTUVWXYZ"))
        );
    }
}
