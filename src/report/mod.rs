mod table;

pub use table::{Cell, Table, Tone};

use crate::history::{RatingRecord, SwingSummary, YearlyAverageRow};
use crate::rating::AdjustmentSummary;
use crate::roster::{MemberId, NameDictionary, Roster, SkippedLine};

pub fn render_roster(roster: &Roster) -> String {
    let mut table = Table::new(["No", "会員番号", "氏名", "R"]);
    for entry in roster.iter() {
        table.push(vec![
            entry.seq.to_string().into(),
            entry.member_id.to_string().into(),
            entry.name.as_str().into(),
            entry.rating.to_string().into(),
        ]);
    }
    table.render()
}

pub fn render_skipped(skipped: &[SkippedLine]) -> String {
    let mut table = Table::new(["line", "text", "reason"]);
    for line in skipped {
        table.push(vec![
            line.line.to_string().into(),
            line.text.as_str().into(),
            line.reason.to_string().into(),
        ]);
    }
    table.render()
}

pub fn render_names(names: &NameDictionary) -> String {
    let mut table = Table::new(["会員番号", "氏名"]);
    for (id, name) in names {
        table.push(vec![id.to_string().into(), name.as_str().into()]);
    }
    table.render()
}

pub fn render_adjustments(summary: &AdjustmentSummary) -> String {
    let mut table = Table::new(["会員番号", "氏名", "R", "差", "勝敗", "増減"]);
    for row in &summary.rows {
        let difference = row.difference.map(|d| d.to_string()).unwrap_or_default();
        table.push(vec![
            row.member_id.to_string().into(),
            row.name.as_str().into(),
            row.rating.as_str().into(),
            difference.into(),
            row.outcome.label().into(),
            Cell::toned(signed(i64::from(row.change)), Tone::of(i64::from(row.change))),
        ]);
    }

    let mut out = table.render();
    out.push_str(&format!(
        "\nReference {}: {} → {} ({})\n",
        summary.reference,
        summary.reference_rating,
        summary.projected_rating,
        signed(i64::from(summary.total)),
    ));
    out
}

pub fn render_yearly(rows: &[YearlyAverageRow], legend: &[(MemberId, String)]) -> String {
    let years: Vec<String> = rows
        .first()
        .map(|row| row.years.iter().map(|y| y.year.to_string()).collect())
        .unwrap_or_default();

    let mut table = Table::new(
        ["会員番号".to_string(), "氏名".to_string()]
            .into_iter()
            .chain(years),
    );
    for row in rows {
        let mut cells: Vec<Cell> = vec![
            row.member_id.to_string().into(),
            legend_label(row.member_id, legend).into(),
        ];
        cells.extend(row.years.iter().map(|y| Cell::from(y.average.to_string())));
        table.push(cells);
    }
    table.render()
}

pub fn render_swings(summaries: &[SwingSummary], legend: &[(MemberId, String)]) -> String {
    let mut table = Table::new(["会員番号", "氏名", "件数", "最低", "最高", "最大変動"]);
    for summary in summaries {
        let swing = summary
            .biggest_swing
            .map(|s| Cell::toned(format!("{} ({})", signed(s.change), s.to.date), Tone::of(s.change)))
            .unwrap_or_else(|| Cell::from("-"));
        table.push(vec![
            summary.member_id.to_string().into(),
            legend_label(summary.member_id, legend).into(),
            summary.records.to_string().into(),
            format!("{} ({})", summary.min.rating, summary.min.date).into(),
            format!("{} ({})", summary.max.rating, summary.max.date).into(),
            swing,
        ]);
    }
    table.render()
}

pub fn render_member_detail(records: &[RatingRecord]) -> String {
    let mut table = Table::new(["場所", "日付", "レイティング"]);
    for record in records {
        table.push(vec![
            record.location.as_str().into(),
            record.date.to_string().into(),
            record.rating.to_string().into(),
        ]);
    }
    table.render()
}

fn legend_label(id: MemberId, legend: &[(MemberId, String)]) -> String {
    legend
        .iter()
        .find(|(member, _)| *member == id)
        .map(|(_, label)| label.clone())
        .unwrap_or_else(|| id.to_string())
}

fn signed(value: i64) -> String {
    format!("{:+}", value)
}
