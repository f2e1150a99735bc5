//! The closed module catalogue: kinds, per-kind metadata and instance state.

pub mod registry;
pub mod scale;
pub mod state;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub use registry::{InputDescriptor, ModuleDescriptor, ModulatorKind};
pub use scale::ScaleKind;
pub use state::{ModuleInstance, ModuleState};

/// Every module evaluates from at most this many inputs.
pub const MAX_INPUTS: usize = 4;

/// The fixed catalogue. Declaration order is the catalogue index.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumIter,
    strum::EnumCount,
    strum::FromRepr,
)]
#[repr(u8)]
pub enum ModuleKind {
    Keyboard,
    Envelope,
    Vco,
    Lfo,
    Knob,
    AmpMod,
    Mixer,
    Vcf,
    Lpf,
    Delay,
    Scale,
    Resample,
    Supersaw,
    Distortion,
    Accent,
    Output,
    Bitcrusher,
    Slew,
    ModulatorTap,
}

impl ModuleKind {
    /// Catalogue index to kind; `None` past the end of the catalogue.
    pub fn from_index(index: usize) -> Option<Self> {
        u8::try_from(index).ok().and_then(Self::from_repr)
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn descriptor(self) -> &'static ModuleDescriptor {
        &registry::DESCRIPTORS[self.index()]
    }

    pub fn name(self) -> &'static str {
        self.descriptor().name
    }

    pub fn input_count(self) -> usize {
        self.descriptor().input_count()
    }

    /// Whether evaluation reads the shared channel state.
    pub fn reads_channel(self) -> bool {
        matches!(
            self,
            Self::Keyboard
                | Self::Envelope
                | Self::Vco
                | Self::Lfo
                | Self::Accent
                | Self::ModulatorTap
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::{EnumCount, IntoEnumIterator};

    #[test]
    fn test_catalogue_has_nineteen_kinds() {
        assert_eq!(ModuleKind::COUNT, 19);
        assert_eq!(ModuleKind::iter().count(), 19);
    }

    #[test]
    fn test_from_index_round_trips() {
        for (index, kind) in ModuleKind::iter().enumerate() {
            assert_eq!(ModuleKind::from_index(index), Some(kind));
            assert_eq!(kind.index(), index);
        }
    }

    #[test]
    fn test_from_index_rejects_unknown() {
        assert_eq!(ModuleKind::from_index(19), None);
        assert_eq!(ModuleKind::from_index(usize::MAX), None);
    }

    #[test]
    fn test_known_indices() {
        assert_eq!(ModuleKind::from_index(2), Some(ModuleKind::Vco));
        assert_eq!(ModuleKind::from_index(9), Some(ModuleKind::Delay));
        assert_eq!(ModuleKind::from_index(18), Some(ModuleKind::ModulatorTap));
        assert_eq!(ModuleKind::Supersaw.name(), "Suprsaw");
    }
}
