use crate::synth::{pi2, FULL_SCALE};

/// One synthesis request: everything the generator needs for a single
/// chord block. Derived by the assembler, consumed here.
#[derive(Debug, Clone, PartialEq)]
pub struct ChordEvent {
    pub fundamental: f64,
    pub structure: &'static [i32],
    pub duration: f64,
}

/// Renders one chord block by additive sine synthesis.
///
/// Each partial k sounds at fundamental * (structure[k] / structure[0]).
/// The sum is divided by the partial count (arithmetic mean, not RMS), so
/// constructively aligned partials can still clip; that is an accepted
/// characteristic of these spectra. Conversion to i16 truncates toward
/// zero. No envelope or fade is applied at block boundaries.
pub fn synthesize(event: &ChordEvent, sample_rate: usize) -> Vec<i16> {
    let num_samples = (event.duration * sample_rate as f64) as usize;
    let divisor = event.structure[0] as f64;
    let count = event.structure.len() as f64;
    let mut block: Vec<i16> = Vec::with_capacity(num_samples);

    for i in 0..num_samples {
        let t = i as f64 / sample_rate as f64;
        let mut sample = 0f64;

        for &harmonic in event.structure {
            let freq = event.fundamental * (harmonic as f64 / divisor);
            sample += (pi2 * freq * t).sin();
        }

        sample /= count;
        block.push((sample * FULL_SCALE) as i16);
    }

    block
}
