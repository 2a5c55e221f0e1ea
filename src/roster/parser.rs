use log::{debug, info};
use std::collections::HashSet;

use super::member_id::{is_digit_run, normalize, MemberId};
use super::text::roster_lines;
use super::types::{ParseReport, Rating, Roster, RosterEntry, SkipReason, SkippedLine};
use crate::config::settings::ParserSettings;

const MIN_ID_DIGITS: usize = 6;
const RECORD_SPAN: usize = 3;

/// Parse pasted results-sheet text into a roster.
pub fn parse_roster(text: &str, settings: &ParserSettings) -> Roster {
    parse_roster_report(text, settings).into_roster()
}

/// Parse pasted text, keeping a record of every skipped line.
///
/// Records are `id / name / rating` line triples. Anything that does not
/// start a triple is skipped one line at a time, so OCR junk never aborts
/// the parse. Never fails; empty input gives an empty roster.
pub fn parse_roster_report(text: &str, settings: &ParserSettings) -> ParseReport {
    let lines = roster_lines(text, settings);
    let mut scanner = RosterScanner::new(&lines, settings);
    scanner.scan();

    let (entries, skipped) = scanner.finish();
    let mut roster = Roster::new(entries);
    roster.resolve_novices();

    info!(
        "Parsed roster: {} entries, {} skipped lines",
        roster.len(),
        skipped.len()
    );

    ParseReport {
        entries: roster,
        skipped,
    }
}

struct RosterScanner<'a> {
    lines: &'a [String],
    settings: &'a ParserSettings,
    cursor: usize,
    seen: HashSet<MemberId>,
    entries: Vec<RosterEntry>,
    skipped: Vec<SkippedLine>,
}

impl<'a> RosterScanner<'a> {
    fn new(lines: &'a [String], settings: &'a ParserSettings) -> Self {
        Self {
            lines,
            settings,
            cursor: 0,
            seen: HashSet::new(),
            entries: Vec::new(),
            skipped: Vec::new(),
        }
    }

    fn scan(&mut self) {
        while self.cursor < self.lines.len() {
            if starts_record(&self.lines[self.cursor]) {
                self.take_record();
                self.cursor += RECORD_SPAN;
            } else {
                self.skip(self.cursor, SkipReason::NotAnId);
                self.cursor += 1;
            }
        }
    }

    fn take_record(&mut self) {
        let id_line = self.cursor;

        let Some(member_id) = normalize(&self.lines[id_line]) else {
            self.skip(id_line, SkipReason::InvalidId);
            return;
        };

        if !self.seen.insert(member_id) {
            self.skip(id_line, SkipReason::DuplicateId(member_id));
            return;
        }

        let name = self.name_at(id_line + 1);
        let rating = self.rating_at(id_line + 2);

        self.entries.push(RosterEntry {
            seq: self.entries.len() + 1,
            member_id,
            name,
            rating,
        });
    }

    fn name_at(&self, index: usize) -> String {
        self.lines
            .get(index)
            .cloned()
            .unwrap_or_else(|| self.settings.unknown_name.to_string())
    }

    fn rating_at(&self, index: usize) -> Rating {
        self.lines
            .get(index)
            .map(|line| parse_rating(line, self.settings))
            .unwrap_or(Rating::Rated(0))
    }

    fn skip(&mut self, line: usize, reason: SkipReason) {
        debug!("Skipping line {} ({}): {:?}", line, reason, self.lines[line]);
        self.skipped.push(SkippedLine {
            line,
            text: self.lines[line].clone(),
            reason,
        });
    }

    fn finish(self) -> (Vec<RosterEntry>, Vec<SkippedLine>) {
        (self.entries, self.skipped)
    }
}

fn starts_record(line: &str) -> bool {
    line.len() >= MIN_ID_DIGITS && is_digit_run(line)
}

fn parse_rating(line: &str, settings: &ParserSettings) -> Rating {
    if is_digit_run(line) {
        return Rating::Rated(line.parse().unwrap_or(0));
    }

    if settings.is_novice_token(line) {
        return Rating::Novice { assumed: None };
    }

    Rating::Rated(0)
}
