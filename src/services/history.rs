use log::{info, warn};
use serde::Serialize;

use crate::config::settings::HistorySettings;
use crate::history::{MemberSeries, RatingHistory, RatingRecord, SwingSummary, YearlyAverageRow};
use crate::roster::MemberId;

/// Everything the dashboard shows for a set of members
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryReport {
    pub legend: Vec<(MemberId, String)>,
    pub series: Vec<MemberSeries>,
    pub yearly: Vec<YearlyAverageRow>,
    pub swings: Vec<SwingSummary>,
    /// Detail table for the first member
    pub detail: Vec<RatingRecord>,
}

pub struct HistoryService<'a> {
    history: &'a RatingHistory,
    settings: &'a HistorySettings,
}

impl<'a> HistoryService<'a> {
    pub fn new(history: &'a RatingHistory, settings: &'a HistorySettings) -> Self {
        Self { history, settings }
    }

    pub fn report(
        &self,
        legend: Vec<(MemberId, String)>,
        from_year: Option<i32>,
        to_year: Option<i32>,
    ) -> HistoryReport {
        let (from, to) = self.year_range(from_year, to_year);
        let members: Vec<MemberId> = legend.iter().map(|(id, _)| *id).collect();
        self.warn_missing(&members);

        info!("Building history report for {} members, {}-{}", members.len(), from, to);

        HistoryReport {
            series: self.history.series(&legend),
            yearly: self.history.yearly_averages(&members, from, to),
            swings: members
                .iter()
                .filter_map(|&id| self.history.swing_summary(id))
                .collect(),
            detail: members
                .first()
                .map(|&id| self.history.for_member(id).to_vec())
                .unwrap_or_default(),
            legend,
        }
    }

    pub fn default_members(&self) -> Vec<MemberId> {
        self.settings
            .default_members
            .iter()
            .copied()
            .map(MemberId::new)
            .collect()
    }

    fn year_range(&self, from_year: Option<i32>, to_year: Option<i32>) -> (i32, i32) {
        let from = from_year.unwrap_or(self.settings.from_year);
        let to = to_year.unwrap_or(self.settings.to_year);
        if from <= to { (from, to) } else { (to, from) }
    }

    fn warn_missing(&self, members: &[MemberId]) {
        for id in members.iter().filter(|&&id| !self.history.contains(id)) {
            warn!("No rating records for member {}", id);
        }
    }
}
