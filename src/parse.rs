use std::fmt;

use crate::tables::PITCH_CLASS;

/// One validated "note name + chord type" token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChordToken {
    pub note: String,
    pub chord: u8,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    InvalidNote(String),
    InvalidChordIndex(u32),
    EmptySequence,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::InvalidNote(name) => write!(f, "invalid note name: {}", name),
            ParseError::InvalidChordIndex(value) => {
                write!(f, "chord index must be between 1 and 8, got: {}", value)
            }
            ParseError::EmptySequence => write!(f, "empty chord sequence"),
        }
    }
}

impl std::error::Error for ParseError {}

/// Parses one token. Characters accumulate into the note name until the
/// first digit, which names the chord index; with no digit the index
/// defaults to 1. Only a single digit is ever consumed, so multi-digit
/// indices are not representable (the domain only needs 1-8).
pub fn parse_token(token: &str) -> Result<ChordToken, ParseError> {
    let mut note = String::new();
    let mut chord: u32 = 1;

    for c in token.chars() {
        if let Some(digit) = c.to_digit(10) {
            chord = digit;
            break;
        }
        note.push(c);
    }

    if !PITCH_CLASS.contains_key(note.as_str()) {
        return Err(ParseError::InvalidNote(note));
    }
    if !(1..=8).contains(&chord) {
        return Err(ParseError::InvalidChordIndex(chord));
    }

    Ok(ChordToken {
        note,
        chord: chord as u8,
    })
}

/// Splits the input on whitespace and parses every token. Validation is
/// all-or-nothing: the first bad token fails the whole request and no
/// prefix is synthesized.
pub fn parse_sequence(input: &str) -> Result<Vec<ChordToken>, ParseError> {
    let tokens: Vec<ChordToken> = input
        .split_whitespace()
        .map(parse_token)
        .collect::<Result<_, _>>()?;

    if tokens.is_empty() {
        return Err(ParseError::EmptySequence);
    }
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(note: &str, chord: u8) -> ChordToken {
        ChordToken {
            note: note.to_string(),
            chord,
        }
    }

    #[test]
    fn test_plain_note_defaults_to_chord_one() {
        assert_eq!(parse_token("A"), Ok(token("A", 1)));
        assert_eq!(parse_token("Gb"), Ok(token("Gb", 1)));
    }

    #[test]
    fn test_note_with_chord_digit() {
        assert_eq!(parse_token("C#2"), Ok(token("C#", 2)));
        assert_eq!(parse_token("Ab8"), Ok(token("Ab", 8)));
    }

    #[test]
    fn test_only_first_digit_is_consumed() {
        // "12" is not a representable chord index; the 2 is ignored.
        assert_eq!(parse_token("A12"), Ok(token("A", 1)));
    }

    #[test]
    fn test_invalid_note() {
        assert_eq!(parse_token("H1"), Err(ParseError::InvalidNote("H".to_string())));
        assert_eq!(parse_token("B#"), Err(ParseError::InvalidNote("B#".to_string())));
        assert_eq!(parse_token(""), Err(ParseError::InvalidNote("".to_string())));
    }

    #[test]
    fn test_invalid_chord_index() {
        assert_eq!(parse_token("C9"), Err(ParseError::InvalidChordIndex(9)));
        assert_eq!(parse_token("C0"), Err(ParseError::InvalidChordIndex(0)));
    }

    #[test]
    fn test_note_is_validated_before_chord_index() {
        assert_eq!(parse_token("H9"), Err(ParseError::InvalidNote("H".to_string())));
    }

    #[test]
    fn test_sequence_is_all_or_nothing() {
        let parsed = parse_sequence("A1 D2 E1 A1").unwrap();
        assert_eq!(parsed.len(), 4);
        assert_eq!(parsed[1], token("D", 2));

        assert_eq!(
            parse_sequence("A1 H2 E1"),
            Err(ParseError::InvalidNote("H".to_string()))
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(parse_sequence(""), Err(ParseError::EmptySequence));
        assert_eq!(parse_sequence("   \t  "), Err(ParseError::EmptySequence));
    }
}
