use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use lovebrain_core::dimension::{Dimension, ScoreVector};
use lovebrain_core::protocol::{RankResult, RankSource};

fn new_table(header: Vec<Cell>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    let columns = header.len();
    table.set_header(header);
    for i in 1..columns {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
    table
}

fn percentile_color(p: u8) -> Color {
    match p {
        0..=33 => Color::Green,
        34..=66 => Color::Yellow,
        _ => Color::Red,
    }
}

pub fn print_rank_report(scores: &ScoreVector, result: &RankResult) {
    let mut table = new_table(vec![
        Cell::new("Dimension").add_attribute(Attribute::Bold),
        Cell::new("Score"),
        Cell::new("Percentile").fg(Color::Cyan),
    ]);

    for (dimension, percentile) in result.rankings.iter() {
        table.add_row(vec![
            Cell::new(dimension.title()).add_attribute(Attribute::Bold),
            Cell::new(format!("{:.1}", scores.get(dimension))),
            Cell::new(format!("{}", percentile)).fg(percentile_color(percentile)),
        ]);
    }

    println!("{table}");
    match result.source {
        RankSource::Database => println!("Source: reference population"),
        RankSource::Mock => println!("Source: estimate (no population available)"),
    }
}

pub fn print_population_summary(records: &[ScoreVector]) {
    if records.is_empty() {
        println!("Population is empty.");
        return;
    }

    let mut table = new_table(vec![
        Cell::new("Dimension").add_attribute(Attribute::Bold),
        Cell::new("Min"),
        Cell::new("Mean").fg(Color::Cyan),
        Cell::new("Max"),
    ]);

    for dimension in Dimension::ALL {
        let values = records.iter().map(|r| r.get(dimension));
        let min = values.clone().fold(f64::INFINITY, f64::min);
        let max = values.clone().fold(f64::NEG_INFINITY, f64::max);
        let mean = values.sum::<f64>() / records.len() as f64;

        table.add_row(vec![
            Cell::new(dimension.title()).add_attribute(Attribute::Bold),
            Cell::new(format!("{:.0}", min)),
            Cell::new(format!("{:.2}", mean)).fg(Color::Cyan),
            Cell::new(format!("{:.0}", max)),
        ]);
    }

    println!("\n📊 Population: {} records", records.len());
    println!("{table}");
}
