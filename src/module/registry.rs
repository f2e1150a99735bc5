//! Static per-kind metadata consumed by patch editors.
//!
//! Nothing in here is read by the evaluation math. The tables are indexed by
//! `ModuleKind as usize`, and the test module checks that the order matches.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use strum::VariantNames;

use super::{scale::ScaleKind, ModuleKind};
use crate::dsp::{
    delay::DelayMode,
    filter::{FilterMode, SlewMode},
    oscillator::{LfoWaveform, VcoWaveform},
};

/// What the modulator parameter of a kind means.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModulatorKind {
    /// The kind has no modulator.
    None,
    /// Free float value (level, velocity, pitch).
    Float,
    VcoWaveform,
    LfoWaveform,
    FilterMode,
    DelayMode,
    SlewMode,
    /// Sequencer channel index.
    Channel,
}

impl ModulatorKind {
    /// Named options for enumerable modulators, empty otherwise.
    pub fn options(self) -> &'static [&'static str] {
        match self {
            Self::VcoWaveform => VcoWaveform::VARIANTS,
            Self::LfoWaveform => LfoWaveform::VARIANTS,
            Self::FilterMode => FilterMode::VARIANTS,
            Self::DelayMode => DelayMode::VARIANTS,
            Self::SlewMode => SlewMode::VARIANTS,
            Self::None | Self::Float | Self::Channel => &[],
        }
    }

    pub fn is_enumerable(self) -> bool {
        !self.options().is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputDescriptor {
    pub label: &'static str,
    pub scale: ScaleKind,
}

const fn input(label: &'static str, scale: ScaleKind) -> InputDescriptor {
    InputDescriptor { label, scale }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModuleDescriptor {
    pub kind: ModuleKind,
    pub name: &'static str,
    pub description: &'static str,
    pub inputs: &'static [InputDescriptor],
    pub output_scale: ScaleKind,
    pub modulator_name: &'static str,
    pub modulator: ModulatorKind,
    /// Persistent state size in 32-bit words, excluding any ring buffer.
    pub state_words: usize,
    /// Whether instances own a delay ring buffer.
    pub ring_buffer: bool,
}

impl ModuleDescriptor {
    pub fn input_count(&self) -> usize {
        self.inputs.len()
    }

    pub fn input_label(&self, index: usize) -> &'static str {
        self.inputs.get(index).map_or("", |i| i.label)
    }

    pub fn input_scale(&self, index: usize) -> ScaleKind {
        self.inputs.get(index).map_or(ScaleKind::Raw, |i| i.scale)
    }

    pub fn modulator_options(&self) -> &'static [&'static str] {
        self.modulator.options()
    }
}

use ScaleKind::{Audio, Duration, FrequencyHz, Percentage, Ramp, Raw};

pub(super) static DESCRIPTORS: [ModuleDescriptor; 19] = [
    ModuleDescriptor {
        kind: ModuleKind::Keyboard,
        name: "KBD CV",
        description: "Keyboard control voltage (CV) from the sequencer for setting the VCO \
                      frequency. The voltage\nis 1 unit/hz, so an A-3 generates a voltage \
                      of 440.",
        inputs: &[],
        output_scale: FrequencyHz,
        modulator_name: "pitch",
        modulator: ModulatorKind::Float,
        state_words: 0,
        ring_buffer: false,
    },
    ModuleDescriptor {
        kind: ModuleKind::Envelope,
        name: "ENV",
        description: "ADSR envelope generator with linear attack and decay/release \
                      ramps.\nSustain level sets the amplification, A/D/R ramps are set as \
                      a duration",
        inputs: &[
            input("A", Ramp),
            input("d", Ramp),
            input("s", Percentage),
            input("r", Ramp),
        ],
        output_scale: Percentage,
        modulator_name: "",
        modulator: ModulatorKind::None,
        state_words: 3,
        ring_buffer: false,
    },
    ModuleDescriptor {
        kind: ModuleKind::Vco,
        name: "VCO",
        description: "Voltage controlled oscillator (VCO). Outputs the chosen waveform at \
                      a\nfrequency set by the control voltage. Includes a noise \
                      generator\nand -1 octave pulse suboscillator with levels\nselectable \
                      using control inputs.",
        inputs: &[
            input("frq", FrequencyHz),
            input("pwm", Percentage),
            input("sub", Percentage),
            input("nse", Percentage),
        ],
        output_scale: Audio,
        modulator_name: "waveform",
        modulator: ModulatorKind::VcoWaveform,
        state_words: 2,
        ring_buffer: false,
    },
    ModuleDescriptor {
        kind: ModuleKind::Lfo,
        name: "LFO",
        description: "The low frequency oscillator (LFO) can be used to, for example, \
                      make\nlong filter- and pulse width sweeps, vibrato or other \
                      effects\nlike chorus and flanging.",
        inputs: &[input("frq", FrequencyHz), input("AmpL", Raw), input("bias", Raw)],
        output_scale: Percentage,
        modulator_name: "waveform",
        modulator: ModulatorKind::LfoWaveform,
        state_words: 1,
        ring_buffer: false,
    },
    ModuleDescriptor {
        kind: ModuleKind::Knob,
        name: "Knob",
        description: "Knobs output a control voltage which can be used to control \
                      the\nother modules. There is no forced voltage range but 0 to 1 is \
                      normally used.",
        inputs: &[],
        output_scale: Raw,
        modulator_name: "mod",
        modulator: ModulatorKind::Float,
        state_words: 0,
        ring_buffer: false,
    },
    ModuleDescriptor {
        kind: ModuleKind::AmpMod,
        name: "Amp mod",
        description: "Amplitude modulation amplifies or attenuates the input \
                      signal\naccording to the control voltage. Since this is done by \
                      multiplying,\nit also works as a ring modulator.",
        inputs: &[input("in", Raw), input("Amp", Raw)],
        output_scale: Raw,
        modulator_name: "",
        modulator: ModulatorKind::None,
        state_words: 0,
        ring_buffer: false,
    },
    ModuleDescriptor {
        kind: ModuleKind::Mixer,
        name: "mixer",
        description: "Mixes up to four signals together by adding. Works also an \
                      an\namplifier or a frequency multiplier by connecting the same signal \
                      to\nmultiple inputs",
        inputs: &[
            input("in1", Raw),
            input("in2", Raw),
            input("in3", Raw),
            input("in4", Raw),
        ],
        output_scale: Raw,
        modulator_name: "",
        modulator: ModulatorKind::None,
        state_words: 0,
        ring_buffer: false,
    },
    ModuleDescriptor {
        kind: ModuleKind::Vcf,
        name: "VCF",
        description: "State-variable voltage controlled filter (VCF). Resonant low-,\nband- \
                      and highpass filter with 12db/oct attenuation.",
        inputs: &[input("in", Raw), input("fc", FrequencyHz), input("rEs", Percentage)],
        output_scale: Audio,
        modulator_name: "mode",
        modulator: ModulatorKind::FilterMode,
        state_words: 3,
        ring_buffer: false,
    },
    ModuleDescriptor {
        kind: ModuleKind::Lpf,
        name: "LPF",
        description: "Voltage controlled 24db/oct 4-pole resonant lowpass filter \
                      (LPF).\nSelf-oscillates when resonance is set to 100%.",
        inputs: &[input("in", Raw), input("fc", FrequencyHz), input("rEs", Percentage)],
        output_scale: Audio,
        modulator_name: "",
        modulator: ModulatorKind::None,
        state_words: 16,
        ring_buffer: false,
    },
    ModuleDescriptor {
        kind: ModuleKind::Delay,
        name: "Delay",
        description: "Delay module which can operate either as a comb filter or an\nallpass \
                      filter. Has control inputs for gain/feedback, loop length and\ndelay \
                      time. When feedback is not connected or zero, it functions\nas a \
                      normal one-tap variable delay. The loop length is 3 seconds when\nno \
                      control input is provided.",
        inputs: &[
            input("in", Raw),
            input("timE", Duration),
            input("loop", Duration),
            input("fb", Percentage),
        ],
        output_scale: Audio,
        modulator_name: "mode",
        modulator: ModulatorKind::DelayMode,
        state_words: 3,
        ring_buffer: true,
    },
    ModuleDescriptor {
        kind: ModuleKind::Scale,
        name: "Scale",
        description: "Scaler knobs can be used attenuate or amplify an incoming signal\nby \
                      multiplying it with the modulator value.",
        inputs: &[input("in", Raw)],
        output_scale: Raw,
        modulator_name: "LeveL",
        modulator: ModulatorKind::Float,
        state_words: 0,
        ring_buffer: false,
    },
    ModuleDescriptor {
        kind: ModuleKind::Resample,
        name: "resample",
        description: "Sample-and-hold resamples the signal down by sampling it at \
                      given\nintervals and outputting the sampled value until a new one \
                      is\nread. The sample rate input is a frequency in hz",
        inputs: &[input("in", Raw), input("rate", FrequencyHz)],
        output_scale: Audio,
        modulator_name: "",
        modulator: ModulatorKind::None,
        state_words: 2,
        ring_buffer: false,
    },
    ModuleDescriptor {
        kind: ModuleKind::Supersaw,
        name: "Suprsaw",
        description: "Seven-oscillator supersaw generator with detune and mix \
                      controls.\nEmulates closely the output of a Roland JP8000/JP8080 \
                      supersaw.",
        inputs: &[
            input("frq", FrequencyHz),
            input("dtune", Percentage),
            input("mix", Percentage),
        ],
        output_scale: Audio,
        modulator_name: "input",
        modulator: ModulatorKind::None,
        state_words: 11,
        ring_buffer: false,
    },
    ModuleDescriptor {
        kind: ModuleKind::Distortion,
        name: "Distort",
        description: "Amplifies and distorts the input signal by a variable amount",
        inputs: &[input("in", Raw), input("dist", Percentage)],
        output_scale: Audio,
        modulator_name: "",
        modulator: ModulatorKind::None,
        state_words: 0,
        ring_buffer: false,
    },
    ModuleDescriptor {
        kind: ModuleKind::Accent,
        name: "Accent",
        description: "The accent modules outputs the user-specified voltage when a \
                      sequencer note\nbeing played has the accent mark. It can be used to \
                      change the volume, resonance or any other feature of the note.",
        inputs: &[],
        output_scale: Percentage,
        modulator_name: "velocity",
        modulator: ModulatorKind::Float,
        state_words: 0,
        ring_buffer: false,
    },
    ModuleDescriptor {
        kind: ModuleKind::Output,
        name: "Output",
        description: "Outputs the signal to the master mixer at the selected output level",
        inputs: &[input("in", Raw)],
        output_scale: Raw,
        modulator_name: "level",
        modulator: ModulatorKind::Float,
        state_words: 0,
        ring_buffer: false,
    },
    ModuleDescriptor {
        kind: ModuleKind::Bitcrusher,
        name: "Bitcrush",
        description: "Bitcrusher restricts the sample resolution by a variable amount",
        inputs: &[input("in", Raw), input("dep", Percentage)],
        output_scale: Raw,
        modulator_name: "",
        modulator: ModulatorKind::None,
        state_words: 0,
        ring_buffer: false,
    },
    ModuleDescriptor {
        kind: ModuleKind::Slew,
        name: "Slew",
        description: "Slew limiter is a specialized low-pass filter typically used \
                      for\nglide/portamento",
        inputs: &[input("in", Raw), input("amt", Percentage)],
        output_scale: Raw,
        modulator_name: "lin/log",
        modulator: ModulatorKind::SlewMode,
        state_words: 2,
        ring_buffer: false,
    },
    ModuleDescriptor {
        kind: ModuleKind::ModulatorTap,
        name: "Mod CV",
        description: "Modulator control voltage (CV) allows you to tap KBD CV from\nother \
                      channels to use for modulation",
        inputs: &[],
        output_scale: FrequencyHz,
        modulator_name: "channel",
        modulator: ModulatorKind::Channel,
        state_words: 0,
        ring_buffer: false,
    },
];
