use std::sync::atomic::{AtomicBool, Ordering};

use crate::chord::{self, ChordEvent};
use crate::parse::ChordToken;
use crate::step;
use crate::synth::PcmBuffer;
use crate::synth_config::RenderConfig;
use crate::tables::{structure_or_unison, BASE_FREQUENCY, DEFAULT_FREQUENCY, PITCH_CLASS};

/// Outcome of an assembly run. Cancellation is a normal early return,
/// not an error: the buffer holds every block finished before the flag
/// was observed.
#[derive(Debug, Clone, PartialEq)]
pub enum Rendered {
    Complete(PcmBuffer),
    Cancelled(PcmBuffer),
}

impl Rendered {
    pub fn samples(&self) -> &[i16] {
        match self {
            Rendered::Complete(buffer) => buffer,
            Rendered::Cancelled(buffer) => buffer,
        }
    }

    pub fn into_samples(self) -> PcmBuffer {
        match self {
            Rendered::Complete(buffer) => buffer,
            Rendered::Cancelled(buffer) => buffer,
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, Rendered::Complete(_))
    }
}

struct StepState {
    fundamental: f64,
    pitch_index: i32,
    chord: u8,
}

/// Lazy walk over the token list producing one ChordEvent per token.
///
/// The first event takes its fundamental from the tuning table (440.0
/// when absent); every later event multiplies the running fundamental by
/// the exact step ratio for (previous chord, current chord, pitch class
/// diff). Strictly sequential and non-restartable: each fundamental
/// depends on the one before it.
pub struct ChordEvents<'a> {
    tokens: std::slice::Iter<'a, ChordToken>,
    duration: f64,
    state: Option<StepState>,
}

impl<'a> Iterator for ChordEvents<'a> {
    type Item = ChordEvent;

    fn next(&mut self) -> Option<ChordEvent> {
        let token = self.tokens.next()?;
        let pitch_index = PITCH_CLASS.get(token.note.as_str()).copied().unwrap_or(0);

        let fundamental = match &self.state {
            None => BASE_FREQUENCY
                .get(token.note.as_str())
                .copied()
                .unwrap_or(DEFAULT_FREQUENCY),
            Some(prev) => {
                let diff = prev.pitch_index - pitch_index;
                let ratio = step::resolve(prev.chord, token.chord, diff);
                prev.fundamental * ratio.to_f64()
            }
        };

        self.state = Some(StepState {
            fundamental,
            pitch_index,
            chord: token.chord,
        });

        Some(ChordEvent {
            fundamental,
            structure: structure_or_unison(token.chord),
            duration: self.duration,
        })
    }
}

pub fn events<'a>(tokens: &'a [ChordToken], duration: f64) -> ChordEvents<'a> {
    ChordEvents {
        tokens: tokens.iter(),
        duration,
        state: None,
    }
}

/// Synthesizes the whole progression into one mono PCM buffer, block by
/// block in input order.
///
/// The cancel flag is observed once per chord boundary, so cancellation
/// latency is bounded by one chord's synthesis time. On cancellation the
/// partial buffer is returned as is; the caller decides whether to keep
/// or discard it.
pub fn assemble(tokens: &[ChordToken], config: &RenderConfig, cancel: &AtomicBool) -> Rendered {
    let mut buffer: PcmBuffer = Vec::new();

    for event in events(tokens, config.beat_duration()) {
        if cancel.load(Ordering::Relaxed) {
            return Rendered::Cancelled(buffer);
        }
        buffer.extend_from_slice(&chord::synthesize(&event, config.sample_rate));
    }

    Rendered::Complete(buffer)
}
