#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How an editor should interpret and display a value on an input or output.
///
/// The kernel never converts between scales; knob values arrive already
/// converted. Editors use these to pick a display unit and a value mapping.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, strum::EnumIter, strum::EnumCount,
)]
pub enum ScaleKind {
    #[default]
    Raw,
    FrequencyHz,
    FrequencyFromTempo,
    Duration,
    DurationFromTempo,
    Ramp,
    MidiNote,
    Semitones,
    Percentage,
    /// Audio-rate signal. Only used for module outputs.
    Audio,
}

impl ScaleKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::Raw => "Raw float",
            Self::FrequencyHz => "Frequency (Hz)",
            Self::FrequencyFromTempo => "Freq from tempo",
            Self::Duration => "Duration (sec)",
            Self::DurationFromTempo => "Duration from tempo",
            Self::Ramp => "Ramp (sec)",
            Self::MidiNote => "mIDI Note",
            Self::Semitones => "Semitones interval",
            Self::Percentage => "Percentage",
            Self::Audio => "Audio signal",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            Self::Raw | Self::MidiNote | Self::Audio => "",
            Self::FrequencyHz => "Hz",
            Self::FrequencyFromTempo => "x tempo (Hz)",
            Self::Duration | Self::Ramp => "sec",
            Self::DurationFromTempo => "x tempo (sec)",
            Self::Semitones => "semitones",
            Self::Percentage => "%",
        }
    }

    /// Whether a knob can be set to this scale.
    pub fn is_knob_scale(self) -> bool {
        !matches!(self, Self::Audio)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::{EnumCount, IntoEnumIterator};

    #[test]
    fn test_names_are_unique() {
        let mut names: Vec<&str> = ScaleKind::iter().map(ScaleKind::name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), ScaleKind::COUNT);
    }

    #[test]
    fn test_knob_scales() {
        assert_eq!(ScaleKind::iter().filter(|s| s.is_knob_scale()).count(), 9);
        assert_eq!(ScaleKind::Percentage.unit(), "%");
        assert_eq!(ScaleKind::FrequencyHz.unit(), "Hz");
    }

    #[test]
    fn test_knob_scale_names() {
        let names: Vec<&str> = ScaleKind::iter()
            .filter(|s| s.is_knob_scale())
            .map(ScaleKind::name)
            .collect();
        assert_eq!(
            names,
            vec![
                "Raw float",
                "Frequency (Hz)",
                "Freq from tempo",
                "Duration (sec)",
                "Duration from tempo",
                "Ramp (sec)",
                "mIDI Note",
                "Semitones interval",
                "Percentage",
            ]
        );
    }
}
