use chrono::{DateTime, Local};

/// Every palette carries exactly this many colors.
pub const PALETTE_SIZE: usize = 4;

/// How many past palettes the session keeps around.
pub const HISTORY_CAP: usize = 5;

/// An ordered run of hex colors derived from one mood.
pub type Palette = [String; PALETTE_SIZE];

///A single committed generation, kept newest-first in the session history
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct HistoryEntry {
    pub mood: String,
    pub colors: Palette,
    pub created_at: DateTime<Local>,
}
