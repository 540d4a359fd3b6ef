mod common;

use std::sync::atomic::AtomicBool;

use justsynth::parse::{parse_sequence, ParseError};
use justsynth::render;
use justsynth::sequence::{assemble, events};
use justsynth::synth_config::RenderConfig;
use justsynth::tables::CHORD_STRUCTURE;
use justsynth::worker;

#[test]
fn test_render_small_progression() {
    let config = common::test_config();
    let tokens = parse_sequence("A1 D2 E1 A1").unwrap();
    let cancel = AtomicBool::new(false);

    let rendered = assemble(&tokens, &config, &cancel);
    assert!(rendered.is_complete());
    assert_eq!(rendered.samples().len(), 4 * config.sample_rate);

    let label = "progression-test";
    let filename = common::test_audio_name(&config, label);
    render::write_pcm(config.sample_rate, rendered.samples(), &filename).unwrap();
    println!("Completed writing test waveform {}", filename);
}

#[test]
fn test_lone_a_chord_event() {
    let tokens = parse_sequence("A1").unwrap();
    let event = events(&tokens, 1.0).next().unwrap();
    assert_eq!(event.fundamental, 55.0);
    assert_eq!(
        event.structure,
        [4, 6, 8, 10, 12, 15, 16, 18, 20, 24, 30, 36, 45]
    );
    assert_eq!(event.structure, CHORD_STRUCTURE[&1].as_slice());
}

#[test]
fn test_just_intonation_trajectory() {
    // A walk that returns to its opening pitch class lands on an exact
    // rational multiple of the opening fundamental, a comma below it.
    let tokens = parse_sequence("A1 D1 B1 A1").unwrap();
    let freqs: Vec<f64> = events(&tokens, 1.0).map(|e| e.fundamental).collect();

    // A->D: diff -5 is 4/3. D->B: diff 3 is 5/6. B->A: diff 2 is 8/9.
    // The product is 80/81: the syntonic comma, not a closed loop.
    let expected = 55.0 * (4.0 / 3.0) * (5.0 / 6.0) * (8.0 / 9.0);
    assert!((freqs[3] - expected).abs() < 1e-9);
    assert!((freqs[3] - 55.0).abs() > 0.5, "trajectory should drift, not close");
}

#[test]
fn test_invalid_input_aborts_whole_request() {
    assert_eq!(
        parse_sequence("A1 D2 H1 E1"),
        Err(ParseError::InvalidNote("H".to_string()))
    );
    assert_eq!(parse_sequence("A1 C9"), Err(ParseError::InvalidChordIndex(9)));
    assert_eq!(parse_sequence(" "), Err(ParseError::EmptySequence));
}

#[test]
fn test_worker_roundtrip() {
    let tokens = parse_sequence("C1 C#2 C1").unwrap();
    let config = RenderConfig::new(44100, 240.0);
    let rendered = worker::spawn(tokens, config).join();
    assert!(rendered.is_complete());
    assert_eq!(rendered.samples().len(), 3 * 11025);
}
