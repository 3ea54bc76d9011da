use crate::dimension::{Dimension, ScoreVector};
use crate::error::{LbResult, LoveBrainError};
use std::path::Path;
use std::str::FromStr;
use strum::IntoEnumIterator;
use tracing::{debug, info};

/// Reads a population CSV whose header names the five dimensions (any order).
///
/// Rows with a missing or non-finite value are skipped.
pub fn load_population_csv<P: AsRef<Path>>(path: P) -> LbResult<Vec<ScoreVector>> {
    let path = path.as_ref();
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)?;

    let headers = rdr.headers()?.clone();
    let mut columns = [usize::MAX; Dimension::COUNT];
    for (idx, name) in headers.iter().enumerate() {
        if let Ok(dimension) = Dimension::from_str(name) {
            columns[dimension.index()] = idx;
        }
    }
    if let Some(missing) = Dimension::iter().find(|d| columns[d.index()] == usize::MAX) {
        return Err(LoveBrainError::Config(format!(
            "Population file {:?} has no '{}' column",
            path, missing
        )));
    }

    let mut records = Vec::new();
    let mut skipped = 0usize;

    for (line, row) in rdr.records().enumerate() {
        let row = row?;
        let mut values = [0.0f64; Dimension::COUNT];
        let mut ok = true;
        for dimension in Dimension::iter() {
            match row
                .get(columns[dimension.index()])
                .and_then(|s| s.parse::<f64>().ok())
            {
                Some(v) if v.is_finite() => values[dimension.index()] = v,
                _ => {
                    ok = false;
                    break;
                }
            }
        }
        if ok {
            records.push(ScoreVector::from_fn(|d| values[d.index()]));
        } else {
            debug!("Skipping malformed population row {}", line + 2);
            skipped += 1;
        }
    }

    info!(
        "Loaded {} population records from {:?} ({} skipped)",
        records.len(),
        path,
        skipped
    );
    Ok(records)
}

/// Writes records in canonical column order.
pub fn write_population_csv<P: AsRef<Path>>(path: P, records: &[ScoreVector]) -> LbResult<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    if records.is_empty() {
        wtr.write_record(Dimension::iter().map(Dimension::as_str))?;
    }
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}
