pub mod member_id;
pub mod names;
pub mod parser;
pub mod text;
pub mod types;

pub use member_id::{normalize, MemberId};
pub use names::{extract_names_fallback, legend_names, NameDictionary, NameExtractor};
pub use parser::{parse_roster, parse_roster_report};
pub use types::{ParseReport, Rating, Roster, RosterEntry, SkipReason, SkippedLine};
