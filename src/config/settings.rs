use std::path::PathBuf;

/// Lowest member id accepted by history filters
pub const MEMBER_ID_MIN: u32 = 90_000;
/// Highest member id accepted by history filters
pub const MEMBER_ID_MAX: u32 = 2_500_000;

pub fn is_member_id_in_range(id: u32) -> bool {
    (MEMBER_ID_MIN..=MEMBER_ID_MAX).contains(&id)
}

#[derive(Debug, Clone)]
pub struct ParserSettings {
    /// Placeholder name when a record has no name line
    pub unknown_name: &'static str,
    /// Tokens in the rating slot meaning "no rating yet"
    pub novice_tokens: Vec<&'static str>,
    /// Column headers and other lines dropped before scanning
    pub noise_tokens: Vec<&'static str>,
    /// Suffixes marking block/court labels ("Aブロック", "1コート")
    pub label_suffixes: Vec<&'static str>,
    /// How many lines the name extractor looks ahead for a name
    pub name_lookahead: usize,
}

impl Default for ParserSettings {
    fn default() -> Self {
        Self {
            unknown_name: "不明",
            novice_tokens: vec!["初", "初参加", "新規", "novice"],
            noise_tokens: vec![
                "会員番号",
                "氏名",
                "名前",
                "R",
                "レイティング",
                "レート",
                "No",
                "No.",
                "順位",
            ],
            label_suffixes: vec!["ブロック", "コート", "組"],
            name_lookahead: 3,
        }
    }
}

impl ParserSettings {
    pub fn is_novice_token(&self, token: &str) -> bool {
        self.novice_tokens
            .iter()
            .any(|t| t.eq_ignore_ascii_case(token))
    }
}

#[derive(Debug, Clone)]
pub struct HistorySettings {
    pub csv_path: PathBuf,
    pub from_year: i32,
    pub to_year: i32,
    pub default_members: Vec<u32>,
}

impl Default for HistorySettings {
    fn default() -> Self {
        Self {
            csv_path: PathBuf::from("rating_data_all.csv"),
            from_year: 2018,
            to_year: 2022,
            default_members: vec![1800280, 1900131],
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub parser: ParserSettings,
    pub history: HistorySettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            parser: ParserSettings::default(),
            history: HistorySettings::default(),
        }
    }
}
