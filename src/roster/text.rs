use crate::config::settings::ParserSettings;

const FULLWIDTH_START: char = '\u{FF01}';
const FULLWIDTH_END: char = '\u{FF5E}';
const FULLWIDTH_OFFSET: u32 = 0xFEE0;
const IDEOGRAPHIC_SPACE: char = '\u{3000}';

/// Fold full-width ASCII to ASCII and drop bidi/invisible marks.
pub fn clean_text(text: &str) -> String {
    text.chars()
        .filter(|&c| !is_invisible_mark(c))
        .map(fold_width)
        .collect()
}

fn fold_width(c: char) -> char {
    match c {
        IDEOGRAPHIC_SPACE => ' ',
        FULLWIDTH_START..=FULLWIDTH_END => {
            char::from_u32(c as u32 - FULLWIDTH_OFFSET).unwrap_or(c)
        }
        _ => c,
    }
}

fn is_invisible_mark(c: char) -> bool {
    matches!(
        c,
        '\u{200B}'..='\u{200F}'
            | '\u{202A}'..='\u{202E}'
            | '\u{2066}'..='\u{2069}'
            | '\u{061C}'
            | '\u{FEFF}'
    )
}

/// Cleaned, trimmed, non-blank lines.
pub fn content_lines(text: &str) -> Vec<String> {
    clean_text(text)
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Content lines minus header and block/court label noise.
pub fn roster_lines(text: &str, settings: &ParserSettings) -> Vec<String> {
    content_lines(text)
        .into_iter()
        .filter(|line| !is_noise_line(line, settings))
        .collect()
}

pub fn is_noise_line(line: &str, settings: &ParserSettings) -> bool {
    settings.noise_tokens.iter().any(|t| *t == line) || is_label_line(line, settings)
}

// Short prefix + suffix only, so names that happen to end in a suffix survive
fn is_label_line(line: &str, settings: &ParserSettings) -> bool {
    settings.label_suffixes.iter().any(|suffix| {
        line.strip_suffix(suffix)
            .map(str::trim)
            .is_some_and(|prefix| !prefix.is_empty() && is_label_prefix(prefix))
    })
}

fn is_label_prefix(prefix: &str) -> bool {
    prefix.chars().count() <= 3 && prefix.chars().all(|c| c.is_ascii_alphanumeric())
}
