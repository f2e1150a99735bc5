use crate::{
    config::KernelConfig,
    dsp::{
        delay::DelayLine,
        envelope::Adsr,
        filter::{LadderFilter, SlewLimiter, StateVariableFilter},
        oscillator::{Lfo, Vco},
        sample_hold::SampleHold,
        supersaw::Supersaw,
    },
    engine::allocator::BufferAllocator,
};

use super::ModuleKind;

/// Persistent state of one module instance, one variant per kind.
///
/// Stateless kinds carry unit variants so that the kind can always be
/// recovered from the state alone. The delay variant owns its ring buffer.
#[derive(Debug, Clone, PartialEq)]
pub enum ModuleState {
    Keyboard,
    Envelope(Adsr),
    Vco(Vco),
    Lfo(Lfo),
    Knob,
    AmpMod,
    Mixer,
    Vcf(StateVariableFilter),
    Lpf(LadderFilter),
    Delay(DelayLine),
    Scale,
    Resample(SampleHold),
    Supersaw(Supersaw),
    Distortion,
    Accent,
    Output,
    Bitcrusher,
    Slew(SlewLimiter),
    ModulatorTap,
}

impl ModuleState {
    /// Zeroed state for `kind`. Only the delay touches the allocator; if it
    /// refuses, the delay is created unallocated and passes audio through.
    pub fn new(
        kind: ModuleKind,
        config: &KernelConfig,
        allocator: &mut dyn BufferAllocator,
    ) -> Self {
        match kind {
            ModuleKind::Keyboard => Self::Keyboard,
            ModuleKind::Envelope => Self::Envelope(Adsr::new()),
            ModuleKind::Vco => Self::Vco(Vco::new()),
            ModuleKind::Lfo => Self::Lfo(Lfo::new()),
            ModuleKind::Knob => Self::Knob,
            ModuleKind::AmpMod => Self::AmpMod,
            ModuleKind::Mixer => Self::Mixer,
            ModuleKind::Vcf => Self::Vcf(StateVariableFilter::new()),
            ModuleKind::Lpf => Self::Lpf(LadderFilter::new()),
            ModuleKind::Delay => Self::Delay(Self::delay_line(config, allocator)),
            ModuleKind::Scale => Self::Scale,
            ModuleKind::Resample => Self::Resample(SampleHold::new()),
            ModuleKind::Supersaw => Self::Supersaw(Supersaw::new()),
            ModuleKind::Distortion => Self::Distortion,
            ModuleKind::Accent => Self::Accent,
            ModuleKind::Output => Self::Output,
            ModuleKind::Bitcrusher => Self::Bitcrusher,
            ModuleKind::Slew => Self::Slew(SlewLimiter::new()),
            ModuleKind::ModulatorTap => Self::ModulatorTap,
        }
    }

    fn delay_line(config: &KernelConfig, allocator: &mut dyn BufferAllocator) -> DelayLine {
        let samples = config.max_delay_samples();
        match allocator.allocate(samples) {
            Some(buffer) => {
                log::debug!("allocated delay buffer of {} samples", buffer.len());
                DelayLine::new(buffer, config.default_delay_samples())
            }
            None => {
                log::warn!("delay buffer of {samples} samples refused, delay passes through");
                DelayLine::unallocated()
            }
        }
    }

    pub fn kind(&self) -> ModuleKind {
        match self {
            Self::Keyboard => ModuleKind::Keyboard,
            Self::Envelope(_) => ModuleKind::Envelope,
            Self::Vco(_) => ModuleKind::Vco,
            Self::Lfo(_) => ModuleKind::Lfo,
            Self::Knob => ModuleKind::Knob,
            Self::AmpMod => ModuleKind::AmpMod,
            Self::Mixer => ModuleKind::Mixer,
            Self::Vcf(_) => ModuleKind::Vcf,
            Self::Lpf(_) => ModuleKind::Lpf,
            Self::Delay(_) => ModuleKind::Delay,
            Self::Scale => ModuleKind::Scale,
            Self::Resample(_) => ModuleKind::Resample,
            Self::Supersaw(_) => ModuleKind::Supersaw,
            Self::Distortion => ModuleKind::Distortion,
            Self::Accent => ModuleKind::Accent,
            Self::Output => ModuleKind::Output,
            Self::Bitcrusher => ModuleKind::Bitcrusher,
            Self::Slew(_) => ModuleKind::Slew,
            Self::ModulatorTap => ModuleKind::ModulatorTap,
        }
    }
}

/// A module in a patch: its modulator parameter and private state.
#[derive(Debug, Clone, PartialEq)]
pub struct ModuleInstance {
    modulator: f32,
    pub(crate) state: ModuleState,
}

impl ModuleInstance {
    pub fn new(modulator: f32, state: ModuleState) -> Self {
        Self { modulator, state }
    }

    pub fn kind(&self) -> ModuleKind {
        self.state.kind()
    }

    pub fn modulator(&self) -> f32 {
        self.modulator
    }

    /// Editors change the modulator while the patch plays.
    pub fn set_modulator(&mut self, modulator: f32) {
        self.modulator = modulator;
    }

    pub fn state(&self) -> &ModuleState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut ModuleState {
        &mut self.state
    }
}
