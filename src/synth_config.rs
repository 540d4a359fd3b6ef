use crate::synth::SR;

#[derive(Debug, Clone, Copy)]
pub struct RenderConfig {
    pub sample_rate: usize,
    pub bpm: f64,
}

impl RenderConfig {
    pub fn new(sample_rate: usize, bpm: f64) -> RenderConfig {
        RenderConfig {
            sample_rate,
            bpm,
        }
    }

    /// Seconds of audio for one chord at the configured tempo.
    pub fn beat_duration(&self) -> f64 {
        60.0 / self.bpm
    }
}

impl Default for RenderConfig {
    fn default() -> RenderConfig {
        RenderConfig::new(SR, 60.0)
    }
}
