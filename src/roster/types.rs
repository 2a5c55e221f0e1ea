use serde::{Serialize, Serializer};
use std::fmt;

use super::member_id::MemberId;

/// A participant's rating as read from the sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rating {
    Rated(u32),
    /// No rating yet; `assumed` is the roster minimum once resolved
    Novice { assumed: Option<u32> },
}

impl Rating {
    pub fn numeric(&self) -> Option<u32> {
        match self {
            Rating::Rated(value) => Some(*value),
            Rating::Novice { assumed } => *assumed,
        }
    }

    pub fn is_novice(&self) -> bool {
        matches!(self, Rating::Novice { .. })
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rating::Rated(value) => write!(f, "{}", value),
            Rating::Novice { assumed: Some(value) } => write!(f, "{}({})", NOVICE_LABEL, value),
            Rating::Novice { assumed: None } => write!(f, "{}", NOVICE_LABEL),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterEntry {
    pub seq: usize,
    pub member_id: MemberId,
    pub name: String,
    #[serde(serialize_with = "serialize_rating")]
    pub rating: Rating,
}

fn serialize_rating<S: Serializer>(rating: &Rating, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(rating)
}

pub const NOVICE_LABEL: &str = "novice";

/// Ordered participants from one paste
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Roster {
    entries: Vec<RosterEntry>,
}

impl Roster {
    pub fn new(entries: Vec<RosterEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[RosterEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: MemberId) -> Option<&RosterEntry> {
        self.entries.iter().find(|e| e.member_id == id)
    }

    pub fn contains(&self, id: MemberId) -> bool {
        self.get(id).is_some()
    }

    pub fn member_ids(&self) -> Vec<MemberId> {
        self.entries.iter().map(|e| e.member_id).collect()
    }

    pub fn min_rating(&self) -> Option<u32> {
        self.entries
            .iter()
            .filter_map(|e| match e.rating {
                Rating::Rated(value) => Some(value),
                Rating::Novice { .. } => None,
            })
            .min()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RosterEntry> {
        self.entries.iter()
    }

    /// Novices take the lowest numeric rating in the roster, if there is one.
    pub(crate) fn resolve_novices(&mut self) {
        let floor = self.min_rating();
        for entry in self.entries.iter_mut().filter(|e| e.rating.is_novice()) {
            entry.rating = Rating::Novice { assumed: floor };
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "memberId", rename_all = "camelCase")]
pub enum SkipReason {
    /// Stray line outside a record
    NotAnId,
    /// A digit run that is not a valid member id
    InvalidId,
    DuplicateId(MemberId),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::NotAnId => write!(f, "not a member id"),
            SkipReason::InvalidId => write!(f, "invalid member id"),
            SkipReason::DuplicateId(id) => write!(f, "duplicate member id {}", id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkippedLine {
    /// Index into the filtered line list
    pub line: usize,
    pub text: String,
    pub reason: SkipReason,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseReport {
    pub entries: Roster,
    pub skipped: Vec<SkippedLine>,
}

impl ParseReport {
    pub fn into_roster(self) -> Roster {
        self.entries
    }
}
