//! Plain-text table rendering for terminal output

use async_trait::async_trait;
use std::io::Write;

use super::ReportSink;
use crate::error::SinkError;
use crate::models::EmployeeReportRow;

/// Render rows as a left-aligned text table with a header and rule
pub fn render_table(rows: &[EmployeeReportRow]) -> String {
    let body: Vec<[String; 12]> = rows
        .iter()
        .map(|row| {
            let mut cells = row.cells();
            // Screen output rounds revenue to cents
            cells[3] = format!("{:.2}", row.revenue);
            cells
        })
        .collect();

    let mut widths = EmployeeReportRow::HEADERS.map(str::len);
    for cells in &body {
        for (width, cell) in widths.iter_mut().zip(cells) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_line(&mut out, &EmployeeReportRow::HEADERS.map(String::from), &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&rule.join("  "));
    out.push('\n');
    for cells in &body {
        push_line(&mut out, cells, &widths);
    }
    out
}

fn push_line(out: &mut String, cells: &[String; 12], widths: &[usize; 12]) {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect();
    out.push_str(padded.join("  ").trim_end());
    out.push('\n');
}

/// Prints the rendered table to standard output
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

#[async_trait]
impl ReportSink for StdoutSink {
    async fn write(&self, rows: &[EmployeeReportRow]) -> Result<(), SinkError> {
        let rendered = render_table(rows);
        let mut stdout = std::io::stdout().lock();
        stdout
            .write_all(rendered.as_bytes())
            .and_then(|_| stdout.flush())
            .map_err(|source| SinkError::Io {
                path: self.describe(),
                source,
            })
    }

    fn describe(&self) -> String {
        "stdout".to_string()
    }
}
