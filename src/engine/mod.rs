pub mod allocator;
pub mod dispatch;

use self::{
    allocator::{BufferAllocator, HeapAllocator},
    dispatch::TickContext,
};
use crate::{
    channel::{ChannelState, CommandReceiver},
    config::KernelConfig,
    dsp::{NoiseGenerator, SupersawTables},
    error::KernelError,
    module::{ModuleInstance, ModuleKind, ModuleState},
    Inputs,
};

/// One synthesis session: channel state, noise source and shared tables.
///
/// The graph evaluator owns the module instances and calls [`Kernel::evaluate`]
/// for each of them once per tick, in patch order.
#[derive(Debug)]
pub struct Kernel {
    config: KernelConfig,
    channels: ChannelState,
    noise: NoiseGenerator,
    supersaw: &'static SupersawTables,
}

impl Kernel {
    pub fn new(config: KernelConfig) -> Result<Self, KernelError> {
        config.validate()?;

        let kernel = Self {
            config,
            channels: ChannelState::new(config.channel_count),
            noise: NoiseGenerator::new(),
            supersaw: SupersawTables::shared(),
        };
        log::info!(
            "Kernel ready: {} Hz, {} channels",
            config.sample_rate,
            config.channel_count
        );
        Ok(kernel)
    }

    pub fn config(&self) -> &KernelConfig {
        &self.config
    }

    pub fn channels(&self) -> &ChannelState {
        &self.channels
    }

    /// Sequencer side. Write only between blocks.
    pub fn channels_mut(&mut self) -> &mut ChannelState {
        &mut self.channels
    }

    pub fn noise(&self) -> &NoiseGenerator {
        &self.noise
    }

    /// Applies queued sequencer commands to the channel state.
    pub fn drain_commands<R: CommandReceiver + ?Sized>(&mut self, rx: &mut R) -> usize {
        self.channels.drain(rx)
    }

    pub fn create_instance(&self, kind: ModuleKind, modulator: f32) -> ModuleInstance {
        self.create_instance_with(kind, modulator, &mut HeapAllocator)
    }

    pub fn create_instance_with(
        &self,
        kind: ModuleKind,
        modulator: f32,
        allocator: &mut dyn BufferAllocator,
    ) -> ModuleInstance {
        log::debug!("Creating {kind} instance (modulator {modulator})");
        ModuleInstance::new(modulator, ModuleState::new(kind, &self.config, allocator))
    }

    /// Runs `instance` for one tick on `channel` and returns its output.
    ///
    /// Unused inputs must be 0. Panics if `channel` is not below the
    /// configured channel count.
    #[inline]
    pub fn evaluate(
        &mut self,
        channel: usize,
        inputs: &Inputs,
        instance: &mut ModuleInstance,
    ) -> f32 {
        debug_assert!(
            channel < self.channels.len(),
            "channel {channel} out of range ({} channels)",
            self.channels.len()
        );
        let mut ctx = TickContext {
            channel,
            channels: &self.channels,
            noise: &mut self.noise,
            supersaw: self.supersaw,
            sample_rate: self.config.sample_rate,
        };
        dispatch::evaluate(&mut ctx, inputs, instance.modulator(), &mut instance.state)
    }
}
