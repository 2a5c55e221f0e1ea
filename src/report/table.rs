use colored::Colorize;
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Gain,
    Loss,
}

impl Tone {
    pub fn of(value: i64) -> Self {
        match value {
            v if v > 0 => Tone::Gain,
            v if v < 0 => Tone::Loss,
            _ => Tone::Plain,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Cell {
    text: String,
    tone: Tone,
}

impl Cell {
    pub fn toned(text: impl Into<String>, tone: Tone) -> Self {
        Self { text: text.into(), tone }
    }

    fn width(&self) -> usize {
        self.text.width()
    }

    fn render(&self, width: usize) -> String {
        let padded = pad(&self.text, width);
        match self.tone {
            Tone::Plain => padded,
            Tone::Gain => padded.green().to_string(),
            Tone::Loss => padded.red().to_string(),
        }
    }
}

impl From<String> for Cell {
    fn from(text: String) -> Self {
        Self::toned(text, Tone::Plain)
    }
}

impl From<&str> for Cell {
    fn from(text: &str) -> Self {
        Self::toned(text, Tone::Plain)
    }
}

/// Left-aligned text table with a bold header row
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push(&mut self, row: Vec<Cell>) {
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let widths = self.column_widths();
        let mut out = String::new();

        let header: Vec<String> = self
            .headers
            .iter()
            .zip(&widths)
            .map(|(h, &w)| pad(h, w))
            .collect();
        out.push_str(&header.join("  ").trim_end().bold().to_string());
        out.push('\n');

        for row in &self.rows {
            let line: Vec<String> = row
                .iter()
                .zip(&widths)
                .map(|(cell, &w)| cell.render(w))
                .collect();
            out.push_str(line.join("  ").trim_end());
            out.push('\n');
        }

        out
    }

    fn column_widths(&self) -> Vec<usize> {
        self.headers
            .iter()
            .enumerate()
            .map(|(i, h)| {
                self.rows
                    .iter()
                    .filter_map(|row| row.get(i))
                    .map(Cell::width)
                    .chain(std::iter::once(h.width()))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }
}

// Pads to terminal columns; wide CJK glyphs count as two
fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(fill))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_columns_are_aligned() {
        colored::control::set_override(false);
        let mut table = Table::new(["id", "name"]);
        table.push(vec!["1802222".into(), "Sato".into()]);
        table.push(vec!["1".into(), "Ito".into()]);

        let rendered = table.render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "id       name");
        assert_eq!(lines[1], "1802222  Sato");
        assert_eq!(lines[2], "1        Ito");
    }

    #[test]
    fn test_wide_characters_keep_columns_aligned() {
        colored::control::set_override(false);
        let mut table = Table::new(["会員番号", "氏名"]);
        table.push(vec!["1802222".into(), "佐藤".into()]);

        let rendered = table.render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "会員番号  氏名");
        assert_eq!(lines[1], "1802222   佐藤");

        let name_column = |line: &str| line[..line.rfind(' ').unwrap() + 1].width();
        assert_eq!(name_column(lines[0]), name_column(lines[1]));
    }

    #[test]
    fn test_tone_of_sign() {
        assert_eq!(Tone::of(4), Tone::Gain);
        assert_eq!(Tone::of(-20), Tone::Loss);
        assert_eq!(Tone::of(0), Tone::Plain);
    }
}
