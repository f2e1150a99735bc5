//! Benchmarks for individual module routines.

mod delay;
mod distortion;
mod envelope;
mod filter;
mod oscillator;

pub use delay::bench_delay;
pub use distortion::bench_distortion;
pub use envelope::bench_envelope;
pub use filter::bench_filter;
pub use oscillator::bench_oscillator;
