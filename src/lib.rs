#![allow(dead_code)]
#![allow(unused_variables)]
#![allow(non_upper_case_globals)]
pub mod chord;
pub mod parse;
pub mod ratio;
pub mod render;
pub mod score;
pub mod sequence;
pub mod step;
pub mod synth;
pub mod synth_config;
pub mod tables;
pub mod worker;
