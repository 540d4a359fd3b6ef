use std::fs;

use serde::{Deserialize, Serialize};

/// A renderable score: the chord sequence text plus an optional tempo.
#[derive(Debug, Serialize, Deserialize)]
pub struct Score {
    pub sequence: String,
    #[serde(default = "default_bpm")]
    pub bpm: f64,
}

fn default_bpm() -> f64 {
    60.0
}

impl Score {
    pub fn from_sequence(sequence: &str) -> Score {
        Score {
            sequence: sequence.to_string(),
            bpm: default_bpm(),
        }
    }

    /// One chord lasts 60/bpm seconds, so the tempo must be a positive
    /// finite number; anything else would hand the synthesizer an
    /// infinite or empty duration.
    pub fn validate(self) -> Result<Score, String> {
        if !self.bpm.is_finite() || self.bpm <= 0.0 {
            return Err(format!("bpm must be positive and finite, got: {}", self.bpm));
        }
        Ok(self)
    }
}

pub fn load_score_from_file(path: &str) -> Result<Score, String> {
    let raw = fs::read_to_string(path).map_err(|e| format!("could not read {}: {}", path, e))?;
    let score: Score =
        serde_json::from_str(&raw).map_err(|e| format!("could not parse {}: {}", path, e))?;
    score.validate()
}
