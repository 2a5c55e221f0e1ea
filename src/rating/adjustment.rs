use log::debug;
use serde::{Serialize, Serializer};
use std::collections::HashMap;

use super::points::lookup_points;
use crate::errors::AdjustmentError;
use crate::roster::{MemberId, Roster, RosterEntry};

/// Caller-owned win/loss flags keyed by (reference, member).
///
/// `true` means the reference won. A pair without a flag counts as a win,
/// so picking a new reference starts from defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OutcomeFlags {
    flags: HashMap<(MemberId, MemberId), bool>,
}

impl OutcomeFlags {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, reference: MemberId, member: MemberId, won: bool) {
        self.flags.insert((reference, member), won);
    }

    pub fn get(&self, reference: MemberId, member: MemberId) -> bool {
        self.flags.get(&(reference, member)).copied().unwrap_or(true)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Loss,
    NotApplicable,
}

impl Outcome {
    fn from_flag(won: bool) -> Self {
        if won { Outcome::Win } else { Outcome::Loss }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Win => "win",
            Outcome::Loss => "loss",
            Outcome::NotApplicable => "—",
        }
    }
}

impl Serialize for Outcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdjustmentRow {
    pub member_id: MemberId,
    pub name: String,
    pub rating: String,
    /// Reference rating minus this row's rating
    pub difference: Option<i64>,
    pub outcome: Outcome,
    pub change: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdjustmentSummary {
    pub reference: MemberId,
    pub reference_rating: u32,
    pub rows: Vec<AdjustmentRow>,
    pub total: i32,
    pub projected_rating: i64,
}

/// Point changes for the reference member against everyone else in the roster.
pub fn compute_adjustments(
    roster: &Roster,
    reference: MemberId,
    flags: &OutcomeFlags,
) -> Result<AdjustmentSummary, AdjustmentError> {
    let reference_entry = roster
        .get(reference)
        .ok_or(AdjustmentError::UnknownReference(reference))?;
    let reference_rating = reference_entry
        .rating
        .numeric()
        .ok_or(AdjustmentError::UnratedReference(reference))?;

    let rows: Vec<AdjustmentRow> = roster
        .iter()
        .map(|entry| build_row(entry, reference, reference_rating, flags))
        .collect();

    let total = sum_changes(&rows, reference);
    debug!("Reference {} total adjustment {}", reference, total);

    Ok(AdjustmentSummary {
        reference,
        reference_rating,
        rows,
        total,
        projected_rating: i64::from(reference_rating) + i64::from(total),
    })
}

fn build_row(
    entry: &RosterEntry,
    reference: MemberId,
    reference_rating: u32,
    flags: &OutcomeFlags,
) -> AdjustmentRow {
    let mut row = AdjustmentRow {
        member_id: entry.member_id,
        name: entry.name.clone(),
        rating: entry.rating.to_string(),
        difference: None,
        outcome: Outcome::NotApplicable,
        change: 0,
    };

    if entry.member_id == reference {
        row.difference = Some(0);
        return row;
    }

    // Unresolved novices stay out of numeric computations
    let Some(rating) = entry.rating.numeric() else {
        return row;
    };

    let won = flags.get(reference, entry.member_id);
    row.difference = Some(i64::from(reference_rating) - i64::from(rating));
    row.outcome = Outcome::from_flag(won);
    row.change = point_change(reference_rating, rating, won);
    row
}

/// Signed points for the reference after one game against `opponent_rating`.
pub fn point_change(reference_rating: u32, opponent_rating: u32, won: bool) -> i32 {
    let award = lookup_points(reference_rating.abs_diff(opponent_rating));
    let (high, low) = (award.high as i32, award.low as i32);
    let favorite = reference_rating >= opponent_rating;

    match (favorite, won) {
        (true, true) => high,
        (true, false) => -low,
        (false, true) => low,
        (false, false) => -high,
    }
}

fn sum_changes(rows: &[AdjustmentRow], reference: MemberId) -> i32 {
    rows.iter()
        .filter(|row| row.member_id != reference && row.outcome != Outcome::NotApplicable)
        .map(|row| row.change)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::Rating;

    fn entry(seq: usize, id: u32, name: &str, rating: Rating) -> RosterEntry {
        RosterEntry {
            seq,
            member_id: MemberId::new(id),
            name: name.to_string(),
            rating,
        }
    }

    fn sato_ito() -> Roster {
        Roster::new(vec![
            entry(1, 1802222, "Sato", Rating::Rated(1500)),
            entry(2, 1900131, "Ito", Rating::Rated(1400)),
        ])
    }

    #[test]
    fn test_equal_ratings_win() {
        let roster = Roster::new(vec![
            entry(1, 1802222, "A", Rating::Rated(1000)),
            entry(2, 1900131, "B", Rating::Rated(1000)),
        ]);

        let summary =
            compute_adjustments(&roster, MemberId::new(1802222), &OutcomeFlags::new()).unwrap();

        assert_eq!(summary.rows[1].change, 8);
        assert_eq!(summary.total, 8);
    }

    #[test]
    fn test_favorite_win_end_to_end() {
        let summary =
            compute_adjustments(&sato_ito(), MemberId::new(1802222), &OutcomeFlags::new()).unwrap();

        let ito = &summary.rows[1];
        assert_eq!(ito.difference, Some(100));
        assert_eq!(ito.outcome, Outcome::Win);
        assert_eq!(ito.change, 4);
        assert_eq!(summary.total, 4);
        assert_eq!(summary.projected_rating, 1504);

        let sato = &summary.rows[0];
        assert_eq!(sato.outcome, Outcome::NotApplicable);
        assert_eq!(sato.outcome.label(), "—");
        assert_eq!(sato.change, 0);
    }

    #[test]
    fn test_favorite_loss_and_underdog_outcomes() {
        assert_eq!(point_change(1500, 1400, false), -20);
        assert_eq!(point_change(1400, 1500, true), 20);
        assert_eq!(point_change(1400, 1500, false), -4);
    }

    #[test]
    fn test_flags_are_scoped_to_reference() {
        let roster = sato_ito();
        let sato = MemberId::new(1802222);
        let ito = MemberId::new(1900131);
        let mut flags = OutcomeFlags::new();
        flags.set(sato, ito, false);

        let as_sato = compute_adjustments(&roster, sato, &flags).unwrap();
        assert_eq!(as_sato.total, -20);

        // Ito as reference ignores the (Sato, Ito) flag
        let as_ito = compute_adjustments(&roster, ito, &flags).unwrap();
        assert_eq!(as_ito.rows[0].outcome, Outcome::Win);
        assert_eq!(as_ito.rows[0].difference, Some(-100));
        assert_eq!(as_ito.total, 20);
        assert_eq!(as_ito.projected_rating, 1420);
    }

    #[test]
    fn test_unknown_reference_fails() {
        let err = compute_adjustments(&sato_ito(), MemberId::new(1234567), &OutcomeFlags::new())
            .unwrap_err();

        assert_eq!(err, AdjustmentError::UnknownReference(MemberId::new(1234567)));
    }

    #[test]
    fn test_unrated_rows_are_excluded() {
        let roster = Roster::new(vec![
            entry(1, 1802222, "Sato", Rating::Novice { assumed: None }),
            entry(2, 1900131, "Ito", Rating::Novice { assumed: None }),
        ]);

        let err = compute_adjustments(&roster, MemberId::new(1802222), &OutcomeFlags::new())
            .unwrap_err();
        assert_eq!(err, AdjustmentError::UnratedReference(MemberId::new(1802222)));

        let mixed = Roster::new(vec![
            entry(1, 1802222, "Sato", Rating::Rated(1500)),
            entry(2, 1900131, "Ito", Rating::Novice { assumed: None }),
        ]);
        let summary =
            compute_adjustments(&mixed, MemberId::new(1802222), &OutcomeFlags::new()).unwrap();
        assert_eq!(summary.rows[1].difference, None);
        assert_eq!(summary.total, 0);
    }

    #[test]
    fn test_recomputation_is_idempotent() {
        let roster = sato_ito();
        let flags = OutcomeFlags::new();
        let first = compute_adjustments(&roster, MemberId::new(1802222), &flags).unwrap();
        let second = compute_adjustments(&roster, MemberId::new(1802222), &flags).unwrap();

        assert_eq!(first, second);
    }
}
