//! Scenario benchmarks.
//!
//! Whole patches evaluated through `Kernel::evaluate`, including dispatch
//! and channel-state reads.

mod voices;

pub use voices::bench_voices;
