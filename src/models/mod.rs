use std::fmt;

use rand::{Rng, rng};

/// Identifiers longer than this are rejected at the request boundary.
pub const MAX_ID_LENGTH: usize = 64;

// Digits and lowercase letters minus the visually confusable
// 0, 1, 6, 8, i, l, o, u and v.
const ID_ALPHABET: &[u8] = b"234579abcdefghjkmnpqrstwxyz";

const GENERATED_ID_LENGTH: usize = 5;

/// A validated note identifier: 1 to 64 characters of `[a-zA-Z0-9_-]`.
///
/// Handlers parse the raw path segment into a `NoteId` before anything else
/// touches it; the rest of the code never sees an unvalidated identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteId(String);

#[derive(Debug, thiserror::Error)]
#[error("note id must be 1-64 characters of [a-zA-Z0-9_-]")]
pub struct InvalidNoteId;

impl NoteId {
    pub fn parse(raw: &str) -> Result<Self, InvalidNoteId> {
        if raw.is_empty() || raw.len() > MAX_ID_LENGTH {
            return Err(InvalidNoteId);
        }

        if !raw
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-')
        {
            return Err(InvalidNoteId);
        }

        Ok(Self(raw.to_string()))
    }

    /// Generates a short identifier for a freshly assigned note URL.
    /// Collisions with existing notes are possible and accepted.
    pub fn random() -> Self {
        let mut rng = rng();

        let id = (0..GENERATED_ID_LENGTH)
            .map(|_| ID_ALPHABET[rng.random_range(0..ID_ALPHABET.len())] as char)
            .collect();

        Self(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_alphanumerics_underscore_and_hyphen() {
        let longest = "a".repeat(64);
        for raw in ["a", "my-note", "my_note", "ABC123", longest.as_str()] {
            let id = NoteId::parse(raw).expect("id should be accepted");
            assert_eq!(id.as_str(), raw);
        }
    }

    #[test]
    fn rejects_spaces() {
        assert!(NoteId::parse("abc def").is_err());
    }

    #[test]
    fn rejects_empty_and_overlong() {
        assert!(NoteId::parse("").is_err());
        assert!(NoteId::parse(&"a".repeat(65)).is_err());
    }

    #[test]
    fn rejects_path_and_unicode_characters() {
        assert!(NoteId::parse("a/b").is_err());
        assert!(NoteId::parse("favicon.ico").is_err());
        assert!(NoteId::parse("ноут").is_err());
    }

    #[test]
    fn random_ids_are_five_characters_from_the_safe_alphabet() {
        for _ in 0..100 {
            let id = NoteId::random();
            assert_eq!(id.as_str().len(), 5);
            assert!(
                id.as_str().bytes().all(|b| ID_ALPHABET.contains(&b)),
                "unexpected character in {}",
                id
            );
        }
    }

    #[test]
    fn random_ids_pass_validation() {
        let id = NoteId::random();
        assert!(NoteId::parse(id.as_str()).is_ok());
    }
}
