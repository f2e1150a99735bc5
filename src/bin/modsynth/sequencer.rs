//! Sequencer - plays a fixed phrase into the channel command queue
//!
//! Runs on its own thread and only ever talks to the audio side through
//! the ring buffer, the way a real sequencer would.

use std::{thread, time::Duration};

use modsynth::{ChannelCommand, RestartFlags};
use rtrb::Producer;

/// Command queue capacity; the sequencer never has more than a few in flight
pub const QUEUE_SIZE: usize = 64;

/// (MIDI note, accent) pairs; `None` is a rest
const PHRASE: [Option<(u8, bool)>; 8] = [
    Some((45, true)),
    Some((48, false)),
    Some((52, false)),
    None,
    Some((57, true)),
    Some((55, false)),
    Some((52, false)),
    Some((48, false)),
];

fn midi_to_hz(note: u8) -> f32 {
    440.0 * 2f32.powf((note as f32 - 69.0) / 12.0)
}

pub struct Sequencer {
    tx: Producer<ChannelCommand>,
    channel: usize,
    step: Duration,
    gate: Duration,
}

impl Sequencer {
    pub fn new(tx: Producer<ChannelCommand>, channel: usize, bpm: f64) -> Self {
        // sixteenth notes, gate open for half a step
        let step = Duration::from_secs_f64(60.0 / bpm / 4.0);
        Self {
            tx,
            channel,
            step,
            gate: step / 2,
        }
    }

    /// Plays the phrase `repeats` times, blocking the calling thread
    pub fn play(mut self, repeats: usize) {
        for _ in 0..repeats {
            for step in PHRASE {
                match step {
                    Some((note, accent)) => {
                        self.send(ChannelCommand::NoteOn {
                            channel: self.channel,
                            pitch: midi_to_hz(note),
                            accent,
                            restart: RestartFlags::ENV,
                        });
                        thread::sleep(self.gate);
                        self.send(ChannelCommand::NoteOff {
                            channel: self.channel,
                        });
                        thread::sleep(self.step - self.gate);
                    }
                    None => thread::sleep(self.step),
                }
            }
        }
    }

    fn send(&mut self, command: ChannelCommand) {
        if self.tx.push(command).is_err() {
            log::warn!("Command queue full, dropped {command:?}");
        }
    }

    pub fn spawn(self, repeats: usize) -> thread::JoinHandle<()> {
        thread::spawn(move || self.play(repeats))
    }
}
