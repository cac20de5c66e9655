use std::fmt;

use serde::{Deserialize, Serialize};

/// Which release of the legacy game wrote a save. Later releases are
/// supersets, so the variants are ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FormatVersion {
    /// The original release.
    Classic,
    /// First expansion.
    AddedAttractions,
    /// Second expansion.
    LoopyLandscapes,
}

/// Whether a file holds a game in progress or an unplayed scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FileKind {
    SavedGame,
    Scenario,
}

impl FormatVersion {
    /// Decodes the header version word. The magnitude picks the release and
    /// the sign the file kind: positive for saved games.
    pub fn detect(raw: i32) -> Option<(FormatVersion, FileKind)> {
        let kind = if raw > 0 {
            FileKind::SavedGame
        } else {
            FileKind::Scenario
        };
        let version = match raw.unsigned_abs() {
            108_000..=109_999 => FormatVersion::Classic,
            110_000..=119_999 => FormatVersion::AddedAttractions,
            120_000..=129_999 => FormatVersion::LoopyLandscapes,
            _ => return None,
        };
        Some((version, kind))
    }

    /// A header word that [`FormatVersion::detect`] maps back to this version
    /// as a saved game.
    pub fn raw(self) -> i32 {
        match self {
            FormatVersion::Classic => 108_001,
            FormatVersion::AddedAttractions => 110_001,
            FormatVersion::LoopyLandscapes => 120_001,
        }
    }

    // -- Capabilities --

    /// Rides carry a chosen music style and a music on/off flag.
    pub fn has_music_settings(self) -> bool {
        self >= FormatVersion::AddedAttractions
    }

    /// Rides carry four track colour schemes instead of one.
    pub fn has_multiple_track_colours(self) -> bool {
        self >= FormatVersion::AddedAttractions
    }

    pub fn has_entrance_styles(self) -> bool {
        self >= FormatVersion::AddedAttractions
    }

    /// Before this, the merry-go-round was always yellow and red.
    pub fn has_custom_merry_go_round_colours(self) -> bool {
        self >= FormatVersion::LoopyLandscapes
    }

    pub fn balloons_always_blue(self) -> bool {
        self == FormatVersion::Classic
    }

    /// Research items live in a second, longer list.
    pub fn has_separate_research_list(self) -> bool {
        self == FormatVersion::LoopyLandscapes
    }
}

impl fmt::Display for FormatVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FormatVersion::Classic => "classic",
            FormatVersion::AddedAttractions => "added attractions",
            FormatVersion::LoopyLandscapes => "loopy landscapes",
        };
        f.write_str(name)
    }
}
