//! Transform raw history records into chart-ready series and rows.
//!
//! Pure and deterministic: the same input list always yields the same
//! series descriptors and the same date-sorted rows.

use crate::models::{ChartRow, ChartSeries, HistoryRecord, PartIdent};
use std::collections::BTreeMap;

/// Cyclic display palette, indexed by record position. The exact values
/// carry no meaning beyond being visually distinct.
pub const COLOR_WHEEL: [&str; 13] = [
    "#228be6", // blue
    "#be4bdb", // grape
    "#fd7e14", // orange
    "#82c91e", // lime
    "#40c057", // green
    "#15aabf", // cyan
    "#fab005", // yellow
    "#7950f2", // violet
    "#fa5252", // red
    "#12b886", // teal
    "#e64980", // pink
    "#868e96", // gray
    "#4c6ef5", // indigo
];

/// Build one series descriptor per record plus one row per distinct date.
///
/// Series keys are `id_<pk>`, falling back to the positional index
/// (`id_<i>`) when the record carries no part identity; the fallback is
/// stable within a single response only. Rows cover the union of all
/// dates seen across the records, ascending by ISO string comparison
/// (chronological for `YYYY-MM-DD`).
///
/// Zero-quantity policy: a quantity cell is written only when the value
/// is strictly positive, but the date row itself is always created, so a
/// date whose entries are all zero still appears as an empty row and
/// keeps its slot on the chart axis.
pub fn build(records: &[HistoryRecord]) -> (Vec<ChartSeries>, Vec<ChartRow>) {
    let mut series = Vec::with_capacity(records.len());
    let mut by_date: BTreeMap<String, BTreeMap<String, f64>> = BTreeMap::new();

    for (index, record) in records.iter().enumerate() {
        let key = series_key(record.part.as_ref(), index);

        series.push(ChartSeries {
            name: key.clone(),
            label: record
                .part
                .as_ref()
                .map(PartIdent::label)
                .unwrap_or_else(|| key.clone()),
            color: COLOR_WHEEL[index % COLOR_WHEEL.len()],
        });

        for entry in &record.history {
            let row = by_date.entry(entry.date.clone()).or_default();
            if entry.quantity > 0.0 {
                row.insert(key.clone(), entry.quantity);
            }
        }
    }

    let rows = by_date
        .into_iter()
        .map(|(date, quantities)| ChartRow { date, quantities })
        .collect();

    (series, rows)
}

fn series_key(part: Option<&PartIdent>, index: usize) -> String {
    match part.and_then(PartIdent::pk) {
        Some(pk) => format!("id_{pk}"),
        None => format!("id_{index}"),
    }
}
