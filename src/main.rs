use std::env;
use std::process;

use justsynth::parse;
use justsynth::render;
use justsynth::score::{self, Score};
use justsynth::sequence::Rendered;
use justsynth::synth::SR;
use justsynth::synth_config::RenderConfig;
use justsynth::worker;

fn main() {
    let args: Vec<String> = env::args().collect();

    let (score, out_path) = match args.as_slice() {
        [_, flag, score_path, out] if flag == "--score" => {
            match score::load_score_from_file(score_path) {
                Ok(score) => (score, out.clone()),
                Err(msg) => {
                    eprintln!("Failed to open score: {}", msg);
                    process::exit(1);
                }
            }
        }
        [_, sequence, out] => (Score::from_sequence(sequence), out.clone()),
        _ => {
            eprintln!(r#"Usage: justsynth "A1 D2 E1 A1" "/abs/to/audio.wav""#);
            eprintln!(r#"       justsynth --score "/abs/to/score.json" "/abs/to/audio.wav""#);
            process::exit(1);
        }
    };

    render_score(&score, &out_path);
}

fn render_score(score: &Score, out_path: &str) {
    let tokens = match parse::parse_sequence(&score.sequence) {
        Ok(tokens) => tokens,
        Err(err) => {
            eprintln!("Error: {}", err);
            process::exit(1);
        }
    };

    let config = RenderConfig::new(SR, score.bpm);
    let job = worker::spawn(tokens, config);

    match job.join() {
        Rendered::Complete(samples) => match render::write_pcm(config.sample_rate, &samples, out_path) {
            Ok(()) => println!("{}", out_path),
            Err(err) => {
                eprintln!("Problem while writing {}: {}", out_path, err);
                process::exit(1);
            }
        },
        Rendered::Cancelled(_) => {
            eprintln!("Render cancelled before completion");
            process::exit(1);
        }
    }
}
