use anyhow::Result;
use log::info;

use crate::config::settings::ParserSettings;
use crate::errors::AdjustmentError;
use crate::rating::{compute_adjustments, AdjustmentSummary, OutcomeFlags};
use crate::roster::{
    extract_names_fallback, legend_names, parse_roster, parse_roster_report, MemberId,
    NameDictionary, NameExtractor, ParseReport,
};

/// Everything a caller can do with one paste of roster text
pub struct RosterService {
    settings: ParserSettings,
    extractor: NameExtractor,
}

impl RosterService {
    pub fn new(settings: ParserSettings) -> Result<Self> {
        let extractor = NameExtractor::new()?.with_lookahead(settings.name_lookahead);
        Ok(Self { settings, extractor })
    }

    pub fn parse(&self, text: &str) -> ParseReport {
        parse_roster_report(text, &self.settings)
    }

    pub fn names(&self, text: &str) -> NameDictionary {
        self.extractor.extract(text)
    }

    /// Adjustments for `reference`; `outcomes` are (member, reference won) pairs.
    pub fn adjust(
        &self,
        text: &str,
        reference: MemberId,
        outcomes: &[(MemberId, bool)],
    ) -> Result<AdjustmentSummary, AdjustmentError> {
        let roster = parse_roster(text, &self.settings);
        let flags = build_flags(reference, outcomes);
        compute_adjustments(&roster, reference, &flags)
    }

    /// Member ids from the roster, or from the fallback name scan when the
    /// structured parse finds nothing.
    pub fn members(&self, text: &str) -> Vec<MemberId> {
        let roster = parse_roster(text, &self.settings);
        if !roster.is_empty() {
            return roster.member_ids();
        }

        let names = extract_names_fallback(text, &roster, &self.extractor);
        info!("Roster empty, using {} ids from fallback name scan", names.len());
        names.keys().copied().collect()
    }

    /// Legend labels for chart series over `ids`.
    pub fn legend(&self, text: &str, ids: &[MemberId]) -> Vec<(MemberId, String)> {
        let roster = parse_roster(text, &self.settings);
        let names = extract_names_fallback(text, &roster, &self.extractor);
        legend_names(ids, &roster, &names)
    }
}

fn build_flags(reference: MemberId, outcomes: &[(MemberId, bool)]) -> OutcomeFlags {
    let mut flags = OutcomeFlags::new();
    for &(member, won) in outcomes {
        flags.set(reference, member, won);
    }
    flags
}
