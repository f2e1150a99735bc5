//! Per-channel values written by the sequencer and read by module routines.

use std::collections::VecDeque;

#[cfg(feature = "rtrb")]
use rtrb::Consumer;

use crate::error::KernelError;

/// Restart requests for one channel. Each bit resets a different family of
/// module state on the next evaluated tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RestartFlags(u8);

impl RestartFlags {
    pub const NONE: Self = Self(0);
    /// Hard sync of VCO phase accumulators.
    pub const VCO: Self = Self(1 << 0);
    pub const LFO: Self = Self(1 << 1);
    /// Envelope level and gate history.
    pub const ENV: Self = Self(1 << 2);
    pub const ALL: Self = Self(Self::VCO.0 | Self::LFO.0 | Self::ENV.0);

    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & Self::ALL.0)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0 && other.0 != 0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl std::ops::BitOr for RestartFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl std::ops::BitOrAssign for RestartFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

/// Updates sent from the sequencer to the audio side, applied between blocks.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ChannelCommand {
    NoteOn {
        channel: usize,
        pitch: f32,
        accent: bool,
        restart: RestartFlags,
    },
    NoteOff { channel: usize },
    SetPitch { channel: usize, pitch: f32 },
    Restart { channel: usize, flags: RestartFlags },
    ClearRestart { channel: usize },
}

impl ChannelCommand {
    pub fn channel(&self) -> usize {
        match *self {
            Self::NoteOn { channel, .. }
            | Self::NoteOff { channel }
            | Self::SetPitch { channel, .. }
            | Self::Restart { channel, .. }
            | Self::ClearRestart { channel } => channel,
        }
    }
}

pub trait CommandReceiver {
    fn pop(&mut self) -> Option<ChannelCommand>;
}

/// Non-realtime queue, for tests and hosts that build channel state offline.
impl CommandReceiver for VecDeque<ChannelCommand> {
    fn pop(&mut self) -> Option<ChannelCommand> {
        self.pop_front()
    }
}

#[cfg(feature = "rtrb")]
impl CommandReceiver for Consumer<ChannelCommand> {
    fn pop(&mut self) -> Option<ChannelCommand> {
        Consumer::pop(self).ok()
    }
}

/// Channel-indexed pitch (Hz), accent, gate and restart state.
#[derive(Debug, Clone)]
pub struct ChannelState {
    pitch: Vec<f32>,
    accent: Vec<bool>,
    gate: Vec<bool>,
    restart: Vec<RestartFlags>,
}

impl ChannelState {
    pub fn new(channel_count: usize) -> Self {
        Self {
            pitch: vec![0.0; channel_count],
            accent: vec![false; channel_count],
            gate: vec![false; channel_count],
            restart: vec![RestartFlags::NONE; channel_count],
        }
    }

    pub fn len(&self) -> usize {
        self.pitch.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pitch.is_empty()
    }

    #[inline]
    pub fn pitch(&self, channel: usize) -> f32 {
        self.pitch[channel]
    }

    #[inline]
    pub fn accent(&self, channel: usize) -> bool {
        self.accent[channel]
    }

    #[inline]
    pub fn gate(&self, channel: usize) -> bool {
        self.gate[channel]
    }

    #[inline]
    pub fn restart(&self, channel: usize) -> RestartFlags {
        self.restart[channel]
    }

    pub fn set_pitch(&mut self, channel: usize, pitch: f32) {
        self.pitch[channel] = pitch;
    }

    pub fn set_accent(&mut self, channel: usize, accent: bool) {
        self.accent[channel] = accent;
    }

    pub fn set_gate(&mut self, channel: usize, gate: bool) {
        self.gate[channel] = gate;
    }

    pub fn request_restart(&mut self, channel: usize, flags: RestartFlags) {
        self.restart[channel] |= flags;
    }

    pub fn clear_restart(&mut self, channel: usize) {
        self.restart[channel] = RestartFlags::NONE;
    }

    /// Clears every pending restart request. Hosts call this after the first
    /// tick following a note-on so that only one tick observes the reset.
    pub fn clear_restarts(&mut self) {
        self.restart.fill(RestartFlags::NONE);
    }

    pub fn apply(&mut self, command: ChannelCommand) -> Result<(), KernelError> {
        let channel = command.channel();
        if channel >= self.len() {
            return Err(KernelError::ChannelOutOfRange {
                channel,
                count: self.len(),
            });
        }

        match command {
            ChannelCommand::NoteOn {
                pitch,
                accent,
                restart,
                ..
            } => {
                self.pitch[channel] = pitch;
                self.accent[channel] = accent;
                self.gate[channel] = true;
                self.restart[channel] |= restart;
            }
            ChannelCommand::NoteOff { .. } => {
                self.gate[channel] = false;
            }
            ChannelCommand::SetPitch { pitch, .. } => {
                self.pitch[channel] = pitch;
            }
            ChannelCommand::Restart { flags, .. } => {
                self.restart[channel] |= flags;
            }
            ChannelCommand::ClearRestart { .. } => {
                self.restart[channel] = RestartFlags::NONE;
            }
        }
        Ok(())
    }

    /// Applies every queued command. Returns how many were applied.
    pub fn drain<R: CommandReceiver + ?Sized>(&mut self, rx: &mut R) -> usize {
        let mut applied = 0;
        while let Some(command) = rx.pop() {
            match self.apply(command) {
                Ok(()) => applied += 1,
                Err(err) => log::warn!("Dropping channel command {command:?}: {err}"),
            }
        }
        applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    #[test]
    fn test_restart_flags_contains() {
        let flags = RestartFlags::VCO | RestartFlags::ENV;
        assert!(flags.contains(RestartFlags::VCO));
        assert!(flags.contains(RestartFlags::ENV));
        assert!(!flags.contains(RestartFlags::LFO));
        assert!(!flags.contains(RestartFlags::NONE));
        assert_eq!(RestartFlags::from_bits(0xff), RestartFlags::ALL);
    }

    #[test]
    fn test_note_on_and_off() {
        let mut channels = ChannelState::new(2);
        channels
            .apply(ChannelCommand::NoteOn {
                channel: 1,
                pitch: 440.0,
                accent: true,
                restart: RestartFlags::ALL,
            })
            .unwrap();

        assert_eq!(channels.pitch(1), 440.0);
        assert!(channels.gate(1));
        assert!(channels.accent(1));
        assert_eq!(channels.restart(1), RestartFlags::ALL);
        assert!(!channels.gate(0));

        channels.apply(ChannelCommand::NoteOff { channel: 1 }).unwrap();
        assert!(!channels.gate(1));
        assert_eq!(channels.pitch(1), 440.0, "note off keeps the pitch");
    }

    #[test]
    fn test_out_of_range_command_is_rejected() {
        let mut channels = ChannelState::new(2);
        let result = channels.apply(ChannelCommand::NoteOff { channel: 2 });
        assert_eq!(
            result,
            Err(KernelError::ChannelOutOfRange {
                channel: 2,
                count: 2
            })
        );
    }

    #[test]
    fn test_drain_skips_bad_commands() {
        let mut channels = ChannelState::new(1);
        let mut queue: VecDeque<ChannelCommand> = VecDeque::new();
        queue.push_back(ChannelCommand::SetPitch {
            channel: 0,
            pitch: 110.0,
        });
        queue.push_back(ChannelCommand::SetPitch {
            channel: 7,
            pitch: 220.0,
        });
        queue.push_back(ChannelCommand::Restart {
            channel: 0,
            flags: RestartFlags::LFO,
        });

        assert_eq!(channels.drain(&mut queue), 2);
        assert_eq!(channels.pitch(0), 110.0);
        assert!(channels.restart(0).contains(RestartFlags::LFO));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_clear_restarts() {
        let mut channels = ChannelState::new(3);
        channels.request_restart(0, RestartFlags::VCO);
        channels.request_restart(2, RestartFlags::ENV);
        channels.clear_restarts();
        assert!((0..3).all(|ch| channels.restart(ch).is_empty()));
    }

    #[cfg(feature = "rtrb")]
    #[test]
    fn test_rtrb_consumer_feeds_channels() {
        let (mut tx, mut rx) = rtrb::RingBuffer::<ChannelCommand>::new(8);
        tx.push(ChannelCommand::NoteOn {
            channel: 0,
            pitch: 55.0,
            accent: false,
            restart: RestartFlags::NONE,
        })
        .unwrap();

        let mut channels = ChannelState::new(1);
        assert_eq!(channels.drain(&mut rx), 1);
        assert!(channels.gate(0));
    }
}
