//! modsynth - plays a hard-wired patch through the kernel
//!
//! Run with: cargo run --release

mod app;
mod patch;
mod sequencer;

use app::App;
use modsynth::module::ModuleKind;
use strum::IntoEnumIterator;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    simple_logger::init_with_level(log::Level::Info)?;

    for kind in ModuleKind::iter() {
        let descriptor = kind.descriptor();
        log::info!(
            "{:>2} {:<8} {} inputs, modulator {:?}",
            kind.index(),
            descriptor.name,
            descriptor.input_count(),
            descriptor.modulator
        );
    }

    App::new().bpm(110.0).repeats(4).run()
}
