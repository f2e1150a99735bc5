//! App - audio device setup and the render callback

use color_eyre::eyre::{eyre, Result as EyreResult, WrapErr};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use rtrb::RingBuffer;
use std::time::Duration;

use super::{
    patch::Patch,
    sequencer::{Sequencer, QUEUE_SIZE},
};

use modsynth::{ChannelCommand, Kernel, KernelConfig, MAX_BLOCK_SIZE};

/// Channel the demo patch listens on
const VOICE_CHANNEL: usize = 0;

pub struct App {
    bpm: f64,
    repeats: usize,
}

impl App {
    pub fn new() -> Self {
        Self {
            bpm: 110.0,
            repeats: 4,
        }
    }

    pub fn bpm(mut self, bpm: f64) -> Self {
        self.bpm = bpm;
        self
    }

    pub fn repeats(mut self, repeats: usize) -> Self {
        self.repeats = repeats;
        self
    }

    pub fn run(self) -> EyreResult<()> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or_else(|| eyre!("no default output device available"))?;
        let config = device
            .default_output_config()
            .wrap_err("failed to fetch default output config")?;

        let sample_rate = config.sample_rate().0 as f32;
        let out_channels = config.channels() as usize;

        let mut kernel = Kernel::new(KernelConfig::default().sample_rate(sample_rate))
            .wrap_err("failed to create synthesis kernel")?;
        let mut patch = Patch::subtractive_voice(&kernel, VOICE_CHANNEL);
        log::info!(
            "Patch ready: {} modules, {} Hz, {} output channels",
            patch.len(),
            sample_rate,
            out_channels
        );

        let (tx, mut rx) = RingBuffer::<ChannelCommand>::new(QUEUE_SIZE);
        let mut block = vec![0.0f32; MAX_BLOCK_SIZE];

        let stream = device.build_output_stream(
            &config.into(),
            move |data: &mut [f32], _| {
                let total_frames = data.len() / out_channels;
                let mut frames_written = 0;

                while frames_written < total_frames {
                    let frames = (total_frames - frames_written).min(MAX_BLOCK_SIZE);

                    // channel state only changes between blocks
                    kernel.drain_commands(&mut rx);

                    for (i, sample) in block[..frames].iter_mut().enumerate() {
                        *sample = patch.tick(&mut kernel);
                        if i == 0 {
                            kernel.channels_mut().clear_restarts();
                        }
                    }

                    let out_off = frames_written * out_channels;
                    for (i, &s) in block[..frames].iter().enumerate() {
                        let frame = out_off + i * out_channels;
                        data[frame..frame + out_channels].fill(s);
                    }

                    frames_written += frames;
                }
            },
            |err| log::error!("Audio stream error: {err}"),
            None,
        )?;

        stream.play()?;

        let sequencer = Sequencer::new(tx, VOICE_CHANNEL, self.bpm);
        let handle = sequencer.spawn(self.repeats);
        handle
            .join()
            .map_err(|_| eyre!("sequencer thread panicked"))?;

        // let the delay tail ring out
        std::thread::sleep(Duration::from_secs(2));
        log::info!("Done");
        Ok(())
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
