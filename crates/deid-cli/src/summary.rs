use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use deid_model::{IngestionReport, RecordKind};

pub fn print_summary(report: &IngestionReport) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Kind"),
        header_cell("Created"),
        header_cell("Existing"),
        header_cell("Skipped"),
    ]);
    apply_table_style(&mut table);
    for index in 1..=3 {
        align_column(&mut table, index, CellAlignment::Right);
    }

    let mut total_created = 0usize;
    let mut total_existing = 0usize;
    let mut total_skipped = 0usize;
    for kind in RecordKind::INGESTION_ORDER {
        if !report.kinds_with_input.contains(&kind) {
            continue;
        }
        let counts = report.counts_for(kind);
        total_created += counts.created;
        total_existing += counts.existing;
        total_skipped += counts.skipped;
        table.add_row(vec![
            Cell::new(kind.as_str())
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            count_cell(counts.created, Color::Green),
            dim_cell(counts.existing),
            count_cell(counts.skipped, Color::Red),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(total_created).add_attribute(Attribute::Bold),
        Cell::new(total_existing).add_attribute(Attribute::Bold),
        count_cell(total_skipped, Color::Red).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");

    if total_skipped > 0 {
        eprintln!("{total_skipped} records were skipped; see the log for details.");
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
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

fn count_cell(value: usize, color: Color) -> Cell {
    if value > 0 {
        Cell::new(value).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(value)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
