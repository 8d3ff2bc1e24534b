//! Report rendering service
//!
//! Drains a [`Leaderboard`] into placed rows and renders them either as a
//! right-justified, pipe-delimited console table or as JSON.

use std::io::Write;

use serde::Serialize;

use crate::config::OutputFormat;
use crate::constants::{CELL_SEPARATOR, RULE_CHAR, RULE_SEPARATOR};
use crate::error::{AppError, AppResult};
use crate::models::{Leaderboard, RankedRow};

#[derive(Serialize)]
struct JsonReport<'a> {
    results: &'a [RankedRow],
    total: usize,
}

/// Report service for printing race results
pub struct ReportService;

impl ReportService {
    /// Render rows as a text table
    ///
    /// Every column is as wide as its widest cell (header included) and each
    /// cell is right-justified. The separator line is only drawn when there is
    /// at least one data row.
    pub fn render_table(headers: &[&str], rows: &[RankedRow]) -> String {
        let table: Vec<Vec<String>> = std::iter::once(headers.iter().map(|h| h.to_string()).collect())
            .chain(rows.iter().map(|row| row.cells().to_vec()))
            .collect();

        let widths: Vec<usize> = (0..headers.len())
            .map(|col| {
                table
                    .iter()
                    .map(|row| row.get(col).map_or(0, |cell| cell.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let rule = widths
            .iter()
            .map(|&width| RULE_CHAR.to_string().repeat(width))
            .collect::<Vec<_>>()
            .join(RULE_SEPARATOR);

        let mut out = String::new();
        for (i, row) in table.iter().enumerate() {
            if i == 1 {
                out.push_str(&rule);
                out.push('\n');
            }

            let line = row
                .iter()
                .zip(&widths)
                .map(|(cell, &width)| format!("{cell:>width$}"))
                .collect::<Vec<_>>()
                .join(CELL_SEPARATOR);
            out.push_str(&line);
            out.push('\n');
        }
        out
    }

    /// Render rows as pretty-printed JSON
    pub fn render_json(rows: &[RankedRow]) -> AppResult<String> {
        let report = JsonReport {
            results: rows,
            total: rows.len(),
        };
        to_pretty_json(&report)
    }

    /// Drain the leaderboard and write the report in the requested format
    pub fn write_report<W: Write>(
        out: &mut W,
        format: OutputFormat,
        headers: &[&str],
        leaderboard: Leaderboard,
    ) -> AppResult<()> {
        if leaderboard.is_empty() {
            tracing::warn!("No completed start/finish pairs, the report has no rows");
        }
        let rows = leaderboard.into_ranked_rows();
        tracing::info!(rows = rows.len(), ?format, "Rendering report");

        match format {
            OutputFormat::Table => {
                writeln!(out)?;
                writeln!(out)?;
                out.write_all(Self::render_table(headers, &rows).as_bytes())?;
            }
            OutputFormat::Json => {
                writeln!(out, "{}", Self::render_json(&rows)?)?;
            }
        }
        out.flush()?;
        Ok(())
    }
}

// Report types always serialize; a failure is an internal error
fn to_pretty_json<T: Serialize>(value: &T) -> AppResult<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to serialize report: {e}")))
}

#[cfg(test)]
mod tests {
    use chrono::TimeDelta;

    use super::*;
    use crate::constants::headers;
    use crate::models::{Participant, ResultRun};

    fn row(place: usize, bib: &str, first: &str, last: &str, secs: i64) -> RankedRow {
        RankedRow::new(
            place,
            ResultRun {
                elapsed: TimeDelta::seconds(secs),
                bib: bib.to_string(),
                participant: Participant::new(first, last),
            },
        )
    }

    #[test]
    fn test_render_table_layout() {
        let rows = [row(1, "002", "Ana", "Lee", 90), row(2, "17", "Bartholomew", "O", 4000)];
        let rendered = ReportService::render_table(&headers::EN, &rows);

        let expected = "\
Place | Bib Number |  First Name | Last Name |   Result
------+------------+-------------+-----------+---------
    1 |        002 |         Ana |       Lee | 00:01:30
    2 |         17 | Bartholomew |         O | 01:06:40
";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_render_table_header_only() {
        let rendered = ReportService::render_table(&["A", "B"], &[]);
        assert_eq!(rendered, "A | B\n");
    }

    #[test]
    fn test_render_table_counts_characters_not_bytes() {
        let rows = [row(1, "1", "Ян", "Ли", 5)];
        let rendered = ReportService::render_table(&headers::RU, &rows);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], "Занятое место | Нагрудный номер | Имя | Фамилия | Результат");
        assert_eq!(lines[2], "            1 |               1 |  Ян |      Ли |  00:00:05");
        assert!(lines.iter().all(|l| l.chars().count() == lines[0].chars().count()));
    }

    #[test]
    fn test_render_json() {
        let rows = [row(1, "002", "Ana", "Lee", 90)];
        let json: serde_json::Value =
            serde_json::from_str(&ReportService::render_json(&rows).unwrap()).unwrap();

        assert_eq!(json["total"], 1);
        assert_eq!(json["results"][0]["bib"], "002");
        assert_eq!(json["results"][0]["first_name"], "Ana");
        assert_eq!(json["results"][0]["elapsed"], "00:01:30");
    }

    #[test]
    fn test_write_report_table() {
        let mut board = Leaderboard::new();
        board.push(ResultRun {
            elapsed: TimeDelta::seconds(90),
            bib: "002".to_string(),
            participant: Participant::new("Ana", "Lee"),
        });

        let mut out = Vec::new();
        ReportService::write_report(&mut out, OutputFormat::Table, &headers::EN, board).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("\n\nPlace"));
        assert_eq!(text.lines().count(), 5);
        assert!(text.ends_with("    1 |        002 |        Ana |       Lee | 00:01:30\n"));
    }

    #[test]
    fn test_serialization_failure_is_internal() {
        let unserializable = std::collections::HashMap::from([((1, 2), 3)]);
        let err = to_pretty_json(&unserializable).unwrap_err();

        assert!(matches!(err, AppError::Internal(_)));
        assert_eq!(err.exit_code(), 1);
        assert!(err.to_string().contains("Failed to serialize report"));
    }

    #[test]
    fn test_write_report_json_empty() {
        let mut out = Vec::new();
        ReportService::write_report(&mut out, OutputFormat::Json, &headers::EN, Leaderboard::new())
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(json["total"], 0);
        assert_eq!(json["results"].as_array().unwrap().len(), 0);
    }
}
