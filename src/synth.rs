/// This module provides the settings for the application's synthesis engine.
/// It includes the fixed playback format (mono, 16 bit signed PCM at 44100 Hz)
/// and convenient aliases for standard constants at f64 precision.
///
/// The audio-output collaborator reads these parameters; the engine itself
/// only fills buffers.

pub const pi2: f64 = std::f64::consts::PI * 2f64;

pub const SR: usize = 44100;

pub const CHANNELS: u16 = 1;
pub const BIT_DEPTH: u16 = 16;

/// Maximum representable magnitude of a 16 bit signed sample.
pub const FULL_SCALE: f64 = i16::MAX as f64;

/// Finished signal: 16 bit signed samples at SR, mono.
pub type PcmBuffer = Vec<i16>;
