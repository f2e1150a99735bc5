pub mod channel; // Sequencer-written per-channel state
pub mod config;
pub mod dsp;
pub mod engine; // Kernel session and dispatch
pub mod error;
pub mod module; // Catalogue, metadata and instance state

pub use channel::{ChannelCommand, ChannelState, CommandReceiver, RestartFlags};
pub use config::KernelConfig;
pub use engine::{
    allocator::{BudgetAllocator, BufferAllocator, HeapAllocator},
    Kernel,
};
pub use error::KernelError;
pub use module::{ModuleInstance, ModuleKind, ModuleState};

/// Input vector of one evaluation. Unused inputs are 0.
pub type Inputs = [f32; module::MAX_INPUTS];

pub const MAX_BLOCK_SIZE: usize = 2048;
