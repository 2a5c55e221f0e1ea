use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use super::records::{RatingHistory, RatingRecord};
use crate::roster::MemberId;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YearAverage {
    pub year: i32,
    /// Mean of the raw ratings, truncated; 0 when the member has no record that year
    pub average: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YearlyAverageRow {
    pub member_id: MemberId,
    pub years: Vec<YearAverage>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingPoint {
    pub date: NaiveDate,
    pub rating: u32,
}

impl From<&RatingRecord> for RatingPoint {
    fn from(record: &RatingRecord) -> Self {
        Self {
            date: record.date,
            rating: record.rating,
        }
    }
}

/// Largest move between two consecutive records
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Swing {
    pub from: RatingPoint,
    pub to: RatingPoint,
    pub change: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SwingSummary {
    pub member_id: MemberId,
    pub records: usize,
    pub min: RatingPoint,
    pub max: RatingPoint,
    pub biggest_swing: Option<Swing>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberSeries {
    pub member_id: MemberId,
    pub label: String,
    pub points: Vec<RatingPoint>,
}

impl RatingHistory {
    pub fn yearly_averages(
        &self,
        members: &[MemberId],
        from_year: i32,
        to_year: i32,
    ) -> Vec<YearlyAverageRow> {
        members
            .iter()
            .map(|&member_id| YearlyAverageRow {
                member_id,
                years: (from_year..=to_year)
                    .map(|year| YearAverage {
                        year,
                        average: year_average(self.for_member(member_id), year),
                    })
                    .collect(),
            })
            .collect()
    }

    pub fn swing_summary(&self, member_id: MemberId) -> Option<SwingSummary> {
        let records = self.for_member(member_id);
        let min = records.iter().min_by_key(|r| r.rating)?;
        let max = records.iter().max_by_key(|r| r.rating)?;

        Some(SwingSummary {
            member_id,
            records: records.len(),
            min: min.into(),
            max: max.into(),
            biggest_swing: biggest_swing(records),
        })
    }

    /// Chart series, one per member, labelled from `legend`.
    pub fn series(&self, legend: &[(MemberId, String)]) -> Vec<MemberSeries> {
        legend
            .iter()
            .map(|(member_id, label)| MemberSeries {
                member_id: *member_id,
                label: label.clone(),
                points: self.for_member(*member_id).iter().map(RatingPoint::from).collect(),
            })
            .collect()
    }
}

fn year_average(records: &[RatingRecord], year: i32) -> u32 {
    let (sum, count) = records
        .iter()
        .filter(|r| r.date.year() == year)
        .fold((0.0, 0u32), |(sum, count), r| (sum + r.raw_rating, count + 1));

    if count == 0 {
        0
    } else {
        (sum / f64::from(count)).trunc().max(0.0) as u32
    }
}

fn biggest_swing(records: &[RatingRecord]) -> Option<Swing> {
    records
        .windows(2)
        .map(|pair| Swing {
            from: (&pair[0]).into(),
            to: (&pair[1]).into(),
            change: i64::from(pair[1].rating) - i64::from(pair[0].rating),
        })
        .fold(None, |best: Option<Swing>, swing| match best {
            Some(b) if b.change.abs() >= swing.change.abs() => Some(b),
            _ => Some(swing),
        })
}
