use std::fmt;

use serde::{Deserialize, Serialize};

/// Free-zone locations a business can operate from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BusinessLocation {
    DragonMartOne,
    DragonMartTwo,
    DragonMartSix,
    PalmJumeirah,
    JumeirahVillageCircle,
    JumeirahVillageTriangle,
}

impl BusinessLocation {
    pub fn all() -> &'static [BusinessLocation] {
        &[
            Self::DragonMartOne,
            Self::DragonMartTwo,
            Self::DragonMartSix,
            Self::PalmJumeirah,
            Self::JumeirahVillageCircle,
            Self::JumeirahVillageTriangle,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::DragonMartOne => "Dragon Mart One",
            Self::DragonMartTwo => "Dragon Mart Two",
            Self::DragonMartSix => "Dragon Mart Six",
            Self::PalmJumeirah => "Palm Jumeirah",
            Self::JumeirahVillageCircle => "Jumeirah Village Circle",
            Self::JumeirahVillageTriangle => "Jumeirah Village Triangle",
        }
    }

    /// Matches a display label case-insensitively.
    pub fn parse(s: &str) -> Option<Self> {
        let wanted = s.trim();
        Self::all()
            .iter()
            .copied()
            .find(|location| location.label().eq_ignore_ascii_case(wanted))
    }
}

impl fmt::Display for BusinessLocation {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_matches_labels_case_insensitively() {
        assert_eq!(
            BusinessLocation::parse("palm jumeirah"),
            Some(BusinessLocation::PalmJumeirah)
        );
        assert_eq!(BusinessLocation::parse("Mars Colony"), None);
    }

    #[test]
    fn every_location_round_trips_through_its_label() {
        for location in BusinessLocation::all() {
            assert_eq!(BusinessLocation::parse(location.label()), Some(*location));
        }
    }
}
