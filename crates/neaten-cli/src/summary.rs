//! Tables printed after a run.

use std::collections::BTreeMap;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use neaten_ingest::SplitSummary;

/// Diagnostics per rule code, most frequent first, with a total row.
pub fn rule_table(counts: &BTreeMap<&'static str, usize>, sentences: usize) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Rule"), header_cell("Diagnostics")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);

    let mut ordered: Vec<(&str, usize)> = counts.iter().map(|(code, n)| (*code, *n)).collect();
    // Stable: equal counts stay alphabetical.
    ordered.sort_by(|a, b| b.1.cmp(&a.1));
    for (code, count) in &ordered {
        table.add_row(vec![Cell::new(code), count_cell(*count, Color::Yellow)]);
    }
    let total: usize = ordered.iter().map(|(_, count)| count).sum();
    table.add_row(vec![
        Cell::new(format!("TOTAL ({sentences} sentences)"))
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        count_cell(total, Color::Yellow).add_attribute(Attribute::Bold),
    ]);
    table
}

/// Split files written by `build`.
pub fn split_table(summaries: &[SplitSummary]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Split"),
        header_cell("Documents"),
        header_cell("File"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for summary in summaries {
        table.add_row(vec![
            Cell::new(summary.split)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(summary.documents),
            Cell::new(summary.path.display()),
        ]);
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        Cell::new(count).fg(Color::DarkGrey)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_table_orders_by_count() {
        let counts = BTreeMap::from([("amod-head", 1), ("passive-voice", 3), ("agent-by", 1)]);
        let mut table = rule_table(&counts, 7);
        table.force_no_tty();
        let rendered = table.to_string();
        let passive = rendered.find("passive-voice").unwrap();
        let agent = rendered.find("agent-by").unwrap();
        let amod = rendered.find("amod-head").unwrap();
        assert!(passive < agent && agent < amod);
        assert!(rendered.contains("TOTAL (7 sentences)"));
        assert!(rendered.contains('5'));
    }
}
