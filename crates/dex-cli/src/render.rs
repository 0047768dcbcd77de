//! Terminal rendering for command outcomes.

use anyhow::Result;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use serde::Serialize;

use dex_model::{
    EvolutionNode, EvolutionSplit, HABITATS, REGIONS, RecordDetail, RecordSummary, StatName,
    TYPES,
};

use crate::cli::OutputFormatArg;
use crate::report::{ListReport, ShowReport};

pub fn print_list(report: &ListReport, format: OutputFormatArg) -> Result<()> {
    match format {
        OutputFormatArg::Json => print_json(report),
        OutputFormatArg::Table => {
            if report.records.is_empty() {
                println!("No matches.");
            } else {
                println!("{}", list_table(&report.records));
            }
            println!("{}", list_footer(report));
            Ok(())
        }
    }
}

pub fn print_show(report: &ShowReport, format: OutputFormatArg) -> Result<()> {
    match format {
        OutputFormatArg::Json => print_json(report),
        OutputFormatArg::Table => {
            println!("{}", detail_heading(&report.detail));
            println!("{}", detail_table(&report.detail));
            println!("{}", stats_table(&report.detail));
            println!("Evolution: {}", lineage_line(&report.lineage, &report.detail.name));
            if !report.lineage.is_empty() {
                println!("{}", lineage_table(&report.lineage, &report.detail));
            }
            println!(
                "{}",
                neighbours_line(report.previous.as_ref(), report.next.as_ref())
            );
            Ok(())
        }
    }
}

pub fn print_regions() {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Key"), header_cell("Region"), header_cell("Ids")]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for region in REGIONS {
        table.add_row(vec![
            Cell::new(region.key),
            Cell::new(region.name),
            Cell::new(format!("{}-{}", region.min_id, region.max_id)),
        ]);
    }
    println!("{table}");
}

pub fn print_keys(label: &str, keys: &[&str]) {
    let mut table = Table::new();
    table.set_header(vec![header_cell(label)]);
    apply_table_style(&mut table);
    for key in keys {
        table.add_row(vec![Cell::new(key)]);
    }
    println!("{table}");
}

pub fn print_types() {
    print_keys("Type", TYPES);
}

pub fn print_habitats() {
    print_keys("Habitat", HABITATS);
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Table of one page of records.
pub fn list_table(records: &[RecordSummary]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("#"), header_cell("Name")]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for record in records {
        table.add_row(vec![
            dim_cell(format!("#{:03}", record.id)),
            Cell::new(&record.name),
        ]);
    }
    table
}

/// Match count and paging hint shown below a listing.
pub fn list_footer(report: &ListReport) -> String {
    let noun = if report.filter.is_filtering() {
        "matches"
    } else {
        "records"
    };
    let mut footer = format!(
        "Showing {} of {} {noun}",
        report.records.len(),
        report.match_count
    );
    if report.has_more {
        footer.push_str(" (more available: raise --pages)");
    }
    footer
}

pub fn detail_heading(detail: &RecordDetail) -> String {
    format!("#{:03} {}", detail.id, detail.name)
}

/// Types, measurements, abilities and image of a record.
pub fn detail_table(detail: &RecordDetail) -> Table {
    let mut table = Table::new();
    apply_table_style(&mut table);
    let rows = [
        ("Types", detail.types.join(", ")),
        ("Height", format!("{} m", detail.height_display())),
        ("Weight", format!("{} kg", detail.weight_display())),
        ("Abilities", detail.abilities.join(", ")),
        ("Image", detail.sprites.display_url().to_string()),
    ];
    for (label, value) in rows {
        table.add_row(vec![header_cell(label), Cell::new(value)]);
    }
    table
}

/// The six base stats, zero when the service omitted one.
pub fn stats_table(detail: &RecordDetail) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Stat"), header_cell("Base")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for stat in StatName::ALL {
        table.add_row(vec![Cell::new(stat.label()), Cell::new(detail.stat(stat))]);
    }
    table
}

/// Ancestors, the record itself in brackets, then descendants.
pub fn lineage_line(lineage: &EvolutionSplit, current: &str) -> String {
    if lineage.is_empty() {
        return format!("[{current}] (no evolutions)");
    }
    let names = |nodes: &[EvolutionNode]| {
        nodes
            .iter()
            .map(|node| node.name.clone())
            .collect::<Vec<_>>()
    };
    let mut parts = names(&lineage.ancestors);
    parts.push(format!("[{current}]"));
    parts.extend(names(&lineage.descendants));
    parts.join(" -> ")
}

/// Every stage of the lineage with its sprite, the record itself included.
pub fn lineage_table(lineage: &EvolutionSplit, detail: &RecordDetail) -> Table {
    let current = EvolutionNode {
        name: detail.name.clone(),
        id: detail.id,
    };
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Stage"),
        header_cell("#"),
        header_cell("Name"),
        header_cell("Sprite"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    let stages = lineage
        .ancestors
        .iter()
        .map(|node| ("ancestor", node))
        .chain(std::iter::once(("current", &current)))
        .chain(lineage.descendants.iter().map(|node| ("descendant", node)));
    for (stage, node) in stages {
        table.add_row(vec![
            dim_cell(stage),
            Cell::new(format!("#{:03}", node.id)),
            Cell::new(&node.name),
            Cell::new(node.sprite_url()),
        ]);
    }
    table
}

pub fn neighbours_line(previous: Option<&RecordSummary>, next: Option<&RecordSummary>) -> String {
    let describe = |record: Option<&RecordSummary>| match record {
        Some(record) => format!("#{:03} {}", record.id, record.name),
        None => "-".to_string(),
    };
    format!("Previous: {} | Next: {}", describe(previous), describe(next))
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
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

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
