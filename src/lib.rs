pub mod config;
pub mod synth;
