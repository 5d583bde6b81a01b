//! Terminal grid renderer: aligned columns, bold header, record count.

use colored::Colorize;

use crate::models::CredentialRecord;
use crate::output::RecordRenderer;

const HEADERS: [&str; 5] = ["ID", "EMAIL", "USERNAME", "DOMAIN", "PASSWORD"];

/// Fixed mask shown in place of passwords unless revealing is enabled.
const PASSWORD_MASK: &str = "********";

/// Terminal grid renderer.
pub struct TableRenderer {
    reveal_passwords: bool,
}

impl TableRenderer {
    pub fn new(reveal_passwords: bool) -> Self {
        Self { reveal_passwords }
    }

    fn cells(&self, record: &CredentialRecord) -> [String; 5] {
        let password = if self.reveal_passwords {
            record.password.clone()
        } else {
            PASSWORD_MASK.to_string()
        };
        [
            record.id.clone(),
            record.email.clone(),
            record.username.clone(),
            record.domain.clone(),
            password,
        ]
    }
}

impl RecordRenderer for TableRenderer {
    fn render(&self, records: &[CredentialRecord]) -> String {
        if records.is_empty() {
            return format!("{}\n", "  (no records)".dimmed());
        }

        let rows: Vec<[String; 5]> = records.iter().map(|r| self.cells(r)).collect();

        // Column widths from headers and cell contents.
        let mut widths = HEADERS.map(str::len);
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row.iter()) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let mut output = String::new();

        let header = HEADERS
            .iter()
            .zip(widths.iter())
            .map(|(h, &width)| format!("{h:<width$}"))
            .collect::<Vec<_>>()
            .join("  ");
        output.push_str(&format!("  {}\n", header.bold()));

        for row in &rows {
            let line = row
                .iter()
                .zip(widths.iter())
                .map(|(cell, &width)| format!("{cell:<width$}"))
                .collect::<Vec<_>>()
                .join("  ");
            output.push_str(&format!("  {line}\n"));
        }

        let count = records.len();
        let noun = if count == 1 { "record" } else { "records" };
        output.push_str(&format!("\n  {}\n", format!("{count} {noun}").dimmed()));

        output
    }
}
