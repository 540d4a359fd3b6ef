use crate::ratio::Ratio;
use crate::tables::{STEP_RULES_HIGH, STEP_RULES_LOW};

/// Base table selection: both chords in 1-4 read the low table, anything
/// touching 5-8 reads the high table. A diff with no entry (only 0 in
/// practice, same pitch class) resolves to unison.
fn base_ratio(prev_chord: u8, curr_chord: u8, diff: i32) -> Ratio {
    let rules = if prev_chord <= 4 && curr_chord <= 4 {
        &STEP_RULES_LOW
    } else {
        &STEP_RULES_HIGH
    };
    rules.get(&diff).copied().unwrap_or(Ratio::unison())
}

/// Resolves the exact multiplier taking the previous fundamental to the
/// next one. Pure: no state, no side effects.
///
/// Within chords 1-4, a transition that crosses parity (one odd chord,
/// one even) is a chromatic inflection and substitutes its own ratio for
/// the semitone diffs and their eleventh-diff wraps. Same-parity steps
/// and everything involving chords 5-8 take the base table unchanged.
pub fn resolve(prev_chord: u8, curr_chord: u8, diff: i32) -> Ratio {
    if prev_chord <= 4 && curr_chord <= 4 {
        let odd_to_even = prev_chord % 2 == 1 && curr_chord % 2 == 0;
        let even_to_odd = prev_chord % 2 == 0 && curr_chord % 2 == 1;

        if odd_to_even {
            match diff {
                -1 => return Ratio::new(25, 24), // chromatic semitone up
                11 => return Ratio::new(25, 48),
                _ => {}
            }
        }
        if even_to_odd {
            match diff {
                1 => return Ratio::new(24, 25), // chromatic semitone down
                -11 => return Ratio::new(48, 25),
                _ => {}
            }
        }
    }
    base_ratio(prev_chord, curr_chord, diff)
}
