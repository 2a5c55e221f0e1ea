use anyhow::{Context, Result};
use chrono::NaiveDate;
use log::info;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::errors::{parse_context, read_context};
use crate::roster::MemberId;

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%Y.%m.%d"];

/// One row of the rating-history CSV
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingRecord {
    pub member_id: MemberId,
    pub date: NaiveDate,
    pub location: String,
    /// Rounded for display and swings
    pub rating: u32,
    /// As exported; yearly averages use this
    #[serde(skip)]
    pub raw_rating: f64,
}

// Column names as exported by the association; English aliases for hand-made files
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(rename = "会員番号", alias = "member_id")]
    member_id: u32,
    #[serde(rename = "日付", alias = "date")]
    date: String,
    #[serde(rename = "場所", alias = "location")]
    location: String,
    #[serde(rename = "レイティング", alias = "rating")]
    rating: f64,
}

impl RawRecord {
    fn into_record(self) -> Result<RatingRecord> {
        Ok(RatingRecord {
            member_id: MemberId::new(self.member_id),
            date: parse_date(&self.date)?,
            location: self.location.trim().to_string(),
            rating: self.rating.round().max(0.0) as u32,
            raw_rating: self.rating,
        })
    }
}

pub fn parse_date(raw: &str) -> Result<NaiveDate> {
    let raw = raw.trim();
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(raw, format).ok())
        .with_context(|| format!("Unrecognized date: {}", raw))
}

/// All rating records, sorted by member then date
#[derive(Debug, Clone, Default)]
pub struct RatingHistory {
    records: Vec<RatingRecord>,
}

impl RatingHistory {
    pub fn new(mut records: Vec<RatingRecord>) -> Self {
        records.sort_by_key(|r| (r.member_id, r.date));
        Self { records }
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
        let mut records = Vec::new();

        for (index, row) in csv_reader.deserialize::<RawRecord>().enumerate() {
            let line = index + 2;
            let raw = row.with_context(|| format!("{} (row {})", parse_context("rating CSV"), line))?;
            let record = raw
                .into_record()
                .with_context(|| format!("{} (row {})", parse_context("rating record"), line))?;
            records.push(record);
        }

        Ok(Self::new(records))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[RatingRecord] {
        &self.records
    }

    /// A member's records in date order
    pub fn for_member(&self, id: MemberId) -> &[RatingRecord] {
        let start = self.records.partition_point(|r| r.member_id < id);
        let end = self.records.partition_point(|r| r.member_id <= id);
        &self.records[start..end]
    }

    pub fn contains(&self, id: MemberId) -> bool {
        !self.for_member(id).is_empty()
    }
}

/// Load the rating-history CSV from disk.
pub fn load_records(path: &Path) -> Result<RatingHistory> {
    let file = File::open(path).with_context(|| read_context(path))?;
    let history = RatingHistory::from_reader(file).with_context(|| read_context(path))?;
    info!("Loaded {} rating records from {}", history.len(), path.display());
    Ok(history)
}
