const TEST_AUDIO_DIR: &str = "test-render";

use justsynth::synth_config::RenderConfig;

pub fn test_audio_name(config: &RenderConfig, label: &str) -> String {
    let name: String = format!("{}_sample-rate_{}_channels_{}", label, config.sample_rate, 1);
    format!("{}/{}.wav", TEST_AUDIO_DIR, name)
}

// Engine defaults: 44100 Hz, 60 bpm, one second per chord.
pub fn test_config() -> RenderConfig {
    RenderConfig::default()
}
