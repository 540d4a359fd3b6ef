/// Static lookup tables for the progression engine: pitch names, base
/// fundamentals, chord spectra, and the just-intonation step rules.
/// All of them are built once and never mutated.
use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::ratio::Ratio;

/// Fundamental handed to the first chord when its name has no tuning
/// entry. Later chords never consult the tuning table at all.
pub const DEFAULT_FREQUENCY: f64 = 440.0;

/// Pitch name to pitch class index, octave-free. Enharmonic spellings
/// share an index. Cb and E# deliberately land on the neighboring
/// letter's class rather than a strict 12-tone layout.
pub static PITCH_CLASS: Lazy<HashMap<&'static str, i32>> = Lazy::new(|| {
    HashMap::from([
        ("A", 0),
        ("A#", 1),
        ("Bb", 1),
        ("B", 2),
        ("Cb", 2),
        ("C", 3),
        ("C#", 4),
        ("Db", 4),
        ("D", 5),
        ("D#", 6),
        ("Eb", 6),
        ("E", 7),
        ("Fb", 7),
        ("E#", 8),
        ("F", 8),
        ("F#", 9),
        ("Gb", 9),
        ("G", 10),
        ("G#", 11),
        ("Ab", 11),
    ])
});

/// Reference fundamental for the first chord of a sequence, in the low
/// octave (A2 through Ab3). B# carries a frequency but no pitch class,
/// so it can never be parsed; the entry is kept to match the tuning
/// table this engine was built against.
pub static BASE_FREQUENCY: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    HashMap::from([
        ("A", 55.0000),
        ("A#", 58.2705),
        ("Bb", 58.2705),
        ("B", 61.7354),
        ("Cb", 61.7354),
        ("B#", 65.4064),
        ("C", 65.4064),
        ("C#", 69.2957),
        ("Db", 69.2957),
        ("D", 73.4162),
        ("D#", 77.7818),
        ("Eb", 77.7818),
        ("E", 82.4069),
        ("Fb", 82.4069),
        ("E#", 87.3071),
        ("F", 87.3071),
        ("F#", 92.4986),
        ("Gb", 92.4986),
        ("G", 97.9989),
        ("G#", 103.8262),
        ("Ab", 103.8262),
    ])
});

/// Curated harmonic-partial sets, one per chord index 1-8. The first
/// entry is the reference divisor; every other entry is a harmonic
/// number relative to it. These are hand-picked spectra, not plain
/// overtone series.
pub static CHORD_STRUCTURE: Lazy<HashMap<u8, Vec<i32>>> = Lazy::new(|| {
    HashMap::from([
        (1, vec![4, 6, 8, 10, 12, 15, 16, 18, 20, 24, 30, 36, 45]),
        (2, vec![10, 15, 20, 24, 30, 36, 40, 48, 60, 72, 90, 135]),
        (3, vec![8, 16, 20, 25, 30, 32, 40, 45, 50, 60, 75, 90]),
        (4, vec![10, 15, 20, 24, 30, 40, 45, 48, 60, 75, 90, 135]),
        (5, vec![4, 6, 8, 12, 14, 16, 18, 21, 24, 27, 28, 32, 38, 42, 54]),
        (6, vec![4, 6, 8, 12, 14, 16, 17, 21, 24, 28, 32, 34, 42, 51]),
        (7, vec![2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 14, 16, 18, 22, 27]),
        (8, vec![2, 4, 5, 7, 8, 10, 11, 13, 14, 17, 19, 20, 28]),
    ])
});

static UNISON: [i32; 1] = [1];

/// Harmonic structure for a chord index, falling back to a bare unison.
/// Index validation upstream makes the fallback unreachable in practice.
pub fn structure_or_unison(chord: u8) -> &'static [i32] {
    match CHORD_STRUCTURE.get(&chord) {
        Some(partials) => partials.as_slice(),
        None => &UNISON,
    }
}

/// Step rules for transitions where both chords are in 1-4. Keys are
/// pitch class diffs (previous minus current); diff 0 has no entry and
/// resolves to unison.
pub static STEP_RULES_LOW: Lazy<HashMap<i32, Ratio>> = Lazy::new(|| {
    HashMap::from([
        (-1, Ratio::new(16, 15)),
        (-2, Ratio::new(9, 8)),
        (-3, Ratio::new(6, 5)),
        (-4, Ratio::new(5, 4)),
        (-5, Ratio::new(4, 3)),
        (-6, Ratio::new(45, 32)),
        (-7, Ratio::new(3, 2)),
        (-8, Ratio::new(8, 5)),
        (-9, Ratio::new(5, 3)),
        (-10, Ratio::new(9, 5)),
        (-11, Ratio::new(48, 25)),
        (1, Ratio::new(24, 25)),
        (2, Ratio::new(8, 9)),
        (3, Ratio::new(5, 6)),
        (4, Ratio::new(4, 5)),
        (5, Ratio::new(3, 4)),
        (6, Ratio::new(32, 45)),
        (7, Ratio::new(2, 3)),
        (8, Ratio::new(5, 8)),
        (9, Ratio::new(3, 5)),
        (10, Ratio::new(5, 9)),
        (11, Ratio::new(8, 15)),
    ])
});

/// Step rules for transitions touching chords 5-8. Structurally parallel
/// to STEP_RULES_LOW but tuned against the wider spectra of those chords.
pub static STEP_RULES_HIGH: Lazy<HashMap<i32, Ratio>> = Lazy::new(|| {
    HashMap::from([
        (-1, Ratio::new(16, 15)),
        (-2, Ratio::new(8, 7)),
        (-3, Ratio::new(32, 27)),
        (-4, Ratio::new(16, 13)),
        (-5, Ratio::new(4, 3)),
        (-6, Ratio::new(16, 11)),
        (-7, Ratio::new(32, 21)),
        (-8, Ratio::new(8, 5)),
        (-9, Ratio::new(32, 19)),
        (-10, Ratio::new(16, 9)),
        (-11, Ratio::new(32, 17)),
        (1, Ratio::new(16, 17)),
        (2, Ratio::new(8, 9)),
        (3, Ratio::new(16, 19)),
        (4, Ratio::new(4, 5)),
        (5, Ratio::new(16, 21)),
        (6, Ratio::new(8, 11)),
        (7, Ratio::new(2, 3)),
        (8, Ratio::new(8, 13)),
        (9, Ratio::new(16, 27)),
        (10, Ratio::new(4, 7)),
        (11, Ratio::new(8, 15)),
    ])
});
