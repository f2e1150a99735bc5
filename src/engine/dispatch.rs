//! Kind to routine mapping.
//!
//! One exhaustive `match` over [`ModuleState`]: adding a kind without a
//! routine fails to compile.

use crate::{
    channel::{ChannelState, RestartFlags},
    dsp::{
        amplify, cv,
        delay::{DelayInputs, DelayMode},
        distortion,
        envelope::AdsrInputs,
        filter::{FilterMode, SlewMode},
        mix,
        noise::NoiseGenerator,
        oscillator::{LfoWaveform, VcoInputs, VcoWaveform},
        supersaw::SupersawTables,
    },
    module::ModuleState,
    Inputs,
};

/// Everything a tick may read besides the instance itself.
pub struct TickContext<'a> {
    pub channel: usize,
    pub channels: &'a ChannelState,
    pub noise: &'a mut NoiseGenerator,
    pub supersaw: &'a SupersawTables,
    pub sample_rate: f32,
}

impl TickContext<'_> {
    #[inline]
    fn restart(&self, flag: RestartFlags) -> bool {
        self.channels.restart(self.channel).contains(flag)
    }
}

/// Evaluates one module for one tick and returns its output sample.
///
/// Panics if `ctx.channel` is outside the channel state.
#[inline]
pub fn evaluate(
    ctx: &mut TickContext<'_>,
    inputs: &Inputs,
    modulator: f32,
    state: &mut ModuleState,
) -> f32 {
    let [in0, in1, in2, in3] = *inputs;

    match state {
        ModuleState::Keyboard => cv::keyboard(ctx.channels, ctx.channel, ctx.sample_rate),
        ModuleState::Envelope(env) => {
            if ctx.restart(RestartFlags::ENV) {
                env.restart();
            }
            let gate = ctx.channels.gate(ctx.channel);
            env.next_sample(
                gate,
                AdsrInputs {
                    attack: in0,
                    decay: in1,
                    sustain: in2,
                    release: in3,
                },
            )
        }
        ModuleState::Vco(vco) => {
            if ctx.restart(RestartFlags::VCO) {
                vco.restart();
            }
            vco.next_sample(
                VcoInputs {
                    frequency: in0,
                    pulse_width: in1,
                    sub_level: in2,
                    noise_level: in3,
                },
                VcoWaveform::from_modulator(modulator),
                ctx.noise,
            )
        }
        ModuleState::Lfo(lfo) => {
            if ctx.restart(RestartFlags::LFO) {
                lfo.restart();
            }
            lfo.next_sample(in0, in1, in2, LfoWaveform::from_modulator(modulator))
        }
        ModuleState::Knob => cv::knob(modulator),
        ModuleState::AmpMod => amplify::amp_mod(in0, in1),
        ModuleState::Mixer => mix::mix4(inputs),
        ModuleState::Vcf(filter) => {
            filter.next_sample(in0, in1, in2, FilterMode::from_modulator(modulator))
        }
        ModuleState::Lpf(filter) => filter.next_sample(in0, in1, in2),
        ModuleState::Delay(line) => line.next_sample(
            in0,
            DelayInputs {
                time: in1,
                loop_length: in2,
                feedback: in3,
            },
            DelayMode::from_modulator(modulator),
        ),
        ModuleState::Scale => amplify::scale(in0, modulator),
        ModuleState::Resample(sh) => sh.next_sample(in0, in1),
        ModuleState::Supersaw(saw) => saw.next_sample(ctx.supersaw, in0, in1, in2),
        ModuleState::Distortion => distortion::distort(in0, in1),
        ModuleState::Accent => cv::accent(ctx.channels, ctx.channel, modulator),
        ModuleState::Output => amplify::output(in0, modulator),
        ModuleState::Bitcrusher => distortion::bitcrush(in0, in1),
        ModuleState::Slew(slew) => {
            slew.next_sample(in0, in1, SlewMode::from_modulator(modulator))
        }
        ModuleState::ModulatorTap => {
            cv::modulator_tap(ctx.channels, ctx.channel, modulator, ctx.sample_rate)
        }
    }
}
