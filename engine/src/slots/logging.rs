//! Display-log helpers for spin results.
//!
//! Results carry JSON-shaped log strings for the presentation layer; these
//! helpers build them without intermediate allocations beyond the buffer.

use std::fmt::Write;

use super::matcher::RunCell;

/// Cells as `"column:row"` pairs, comma separated.
pub fn format_cell_list(cells: &[RunCell]) -> String {
    let mut out = String::with_capacity(cells.len().saturating_mul(4));
    for (idx, cell) in cells.iter().enumerate() {
        if idx > 0 {
            out.push(',');
        }
        let _ = write!(out, "{}:{}", cell.column, cell.row);
    }
    out
}

/// Log entry for one winning payline.
pub fn win_entry(
    payline: usize,
    symbol: u8,
    length: usize,
    multiplier_bps: u64,
    payout: u64,
) -> String {
    format!(
        r#"{{"line":{},"symbol":{},"length":{},"multiplier":{},"payout":{}}}"#,
        payline, symbol, length, multiplier_bps, payout
    )
}

/// Log entry for the scatter scan.
pub fn scatter_entry(count: usize, triggered: bool, cells: &[RunCell]) -> String {
    format!(
        r#"{{"scatters":{},"triggered":{},"cells":"{}"}}"#,
        count,
        triggered,
        format_cell_list(cells)
    )
}
