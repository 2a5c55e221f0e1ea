use anyhow::{Context, Result};
use log::{debug, info};
use regex::Regex;
use std::collections::BTreeMap;

use super::member_id::{is_digit_run, normalize, MemberId};
use super::text::content_lines;
use super::types::Roster;

pub type NameDictionary = BTreeMap<MemberId, String>;

const DEFAULT_LOOKAHEAD: usize = 3;

/// Loose `<number> <name>` scanner, the fallback when the structured
/// roster parse comes back empty. Best effort: line order decides which
/// name lands on which id.
pub struct NameExtractor {
    inline_regex: Regex,
    digits_regex: Regex,
    lookahead: usize,
}

impl NameExtractor {
    pub fn new() -> Result<Self> {
        Ok(Self {
            inline_regex: Self::compile_inline_regex()?,
            digits_regex: Self::compile_digits_regex()?,
            lookahead: DEFAULT_LOOKAHEAD,
        })
    }

    pub fn with_lookahead(mut self, lookahead: usize) -> Self {
        self.lookahead = lookahead;
        self
    }

    pub fn extract(&self, text: &str) -> NameDictionary {
        let lines = content_lines(text);
        let mut names = NameDictionary::new();

        for (index, line) in lines.iter().enumerate() {
            if let Some((id, name)) = self.inline_pair(line) {
                names.insert(id, name);
                continue;
            }

            for id in self.ids_on_line(line) {
                if let Some(name) = self.name_after(&lines, index) {
                    names.insert(id, name.to_string());
                }
            }
        }

        info!("Extracted {} names from free text", names.len());
        names
    }

    // --- Construction Helpers ---

    fn compile_inline_regex() -> Result<Regex> {
        Regex::new(r"([0-9]+)\s*([^0-9]+)").context("Failed to compile inline name regex")
    }

    fn compile_digits_regex() -> Result<Regex> {
        Regex::new(r"[0-9]+").context("Failed to compile digit run regex")
    }

    // --- Line Matching ---

    fn inline_pair(&self, line: &str) -> Option<(MemberId, String)> {
        self.inline_regex.captures_iter(line).find_map(|caps| {
            let id = normalize(caps.get(1)?.as_str())?;
            let name = caps.get(2)?.as_str().trim();
            (!name.is_empty()).then(|| (id, name.to_string()))
        })
    }

    fn ids_on_line<'a>(&'a self, line: &'a str) -> impl Iterator<Item = MemberId> + 'a {
        self.digits_regex
            .find_iter(line)
            .filter_map(|m| normalize(m.as_str()))
    }

    fn name_after<'a>(&self, lines: &'a [String], index: usize) -> Option<&'a str> {
        let name = lines
            .iter()
            .skip(index + 1)
            .take(self.lookahead)
            .find(|line| !is_digit_run(line))
            .map(String::as_str);

        if name.is_none() {
            debug!("No name within {} lines after line {}", self.lookahead, index);
        }
        name
    }
}

/// Names from the fallback extractor, only when the structured parse found nothing.
pub fn extract_names_fallback(
    text: &str,
    roster: &Roster,
    extractor: &NameExtractor,
) -> NameDictionary {
    if !roster.is_empty() || text.trim().is_empty() {
        return NameDictionary::new();
    }
    extractor.extract(text)
}

/// Chart legend labels: roster name, then fallback name, then the bare id.
pub fn legend_names(
    ids: &[MemberId],
    roster: &Roster,
    names: &NameDictionary,
) -> Vec<(MemberId, String)> {
    ids.iter()
        .map(|&id| (id, legend_name(id, roster, names)))
        .collect()
}

fn legend_name(id: MemberId, roster: &Roster, names: &NameDictionary) -> String {
    roster
        .get(id)
        .map(|entry| entry.name.clone())
        .or_else(|| names.get(&id).cloned())
        .unwrap_or_else(|| id.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::types::{Rating, RosterEntry};

    fn extractor() -> NameExtractor {
        NameExtractor::new().unwrap()
    }

    #[test]
    fn test_inline_number_then_name() {
        let names = extractor().extract("1802222 佐藤\n1900131伊藤 1400\n");

        assert_eq!(names.get(&MemberId::new(1802222)).map(String::as_str), Some("佐藤"));
        assert_eq!(names.get(&MemberId::new(1900131)).map(String::as_str), Some("伊藤"));
    }

    #[test]
    fn test_inline_skips_leading_rank_number() {
        let names = extractor().extract("1 1802222 Sato");

        assert_eq!(names.len(), 1);
        assert_eq!(names.get(&MemberId::new(1802222)).map(String::as_str), Some("Sato"));
    }

    #[test]
    fn test_number_line_then_name_line() {
        let names = extractor().extract("1802222\n1500\nSato\n");

        assert_eq!(names.get(&MemberId::new(1802222)).map(String::as_str), Some("Sato"));
    }

    #[test]
    fn test_every_id_on_a_line_gets_the_lookahead_name() {
        let names = extractor().extract("1802222 812345 1900131\nSato\n");

        assert_eq!(names.len(), 2);
        assert_eq!(names.get(&MemberId::new(1802222)).map(String::as_str), Some("Sato"));
        assert_eq!(names.get(&MemberId::new(1900131)).map(String::as_str), Some("Sato"));
    }

    #[test]
    fn test_lookahead_is_bounded() {
        let names = extractor().extract("1802222\n1\n2\n3\nSato");

        assert!(names.is_empty());
    }

    #[test]
    fn test_later_match_overwrites() {
        let names = extractor().extract("1802222 Sato\n1802222 Satou");

        assert_eq!(names.get(&MemberId::new(1802222)).map(String::as_str), Some("Satou"));
    }

    #[test]
    fn test_fallback_only_when_roster_empty() {
        let text = "1802222 Sato";
        let ex = extractor();

        let empty = Roster::default();
        assert_eq!(extract_names_fallback(text, &empty, &ex).len(), 1);

        let roster = Roster::new(vec![RosterEntry {
            seq: 1,
            member_id: MemberId::new(1900131),
            name: "Ito".to_string(),
            rating: Rating::Rated(1400),
        }]);
        assert!(extract_names_fallback(text, &roster, &ex).is_empty());
        assert!(extract_names_fallback("  ", &empty, &ex).is_empty());
    }

    #[test]
    fn test_legend_prefers_roster_then_dictionary() {
        let roster = Roster::new(vec![RosterEntry {
            seq: 1,
            member_id: MemberId::new(1900131),
            name: "Ito".to_string(),
            rating: Rating::Rated(1400),
        }]);
        let mut names = NameDictionary::new();
        names.insert(MemberId::new(1900131), "Itou".to_string());
        names.insert(MemberId::new(1802222), "Sato".to_string());

        let ids = [MemberId::new(1900131), MemberId::new(1802222), MemberId::new(1800280)];
        let legend = legend_names(&ids, &roster, &names);

        assert_eq!(legend[0].1, "Ito");
        assert_eq!(legend[1].1, "Sato");
        assert_eq!(legend[2].1, "1800280");
    }
}
