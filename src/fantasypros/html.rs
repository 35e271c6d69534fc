//! HTML table extraction.

use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

use super::table::ProjectionTable;
use crate::{FflError, Result};

static TABLE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("table").expect("valid selector"));
static ROW: LazyLock<Selector> = LazyLock::new(|| Selector::parse("tr").expect("valid selector"));
static GROUPED_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?\d{1,3}(,\d{3})+(\.\d+)?$").expect("valid regex"));

/// Collapse whitespace runs to a single space and trim.
pub fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Drop thousands separators from a numeric cell (`"1,245.0"` → `"1245.0"`).
/// Anything else is returned unchanged.
pub fn strip_thousands(cell: String) -> String {
    if GROUPED_NUMBER.is_match(&cell) {
        cell.replace(',', "")
    } else {
        cell
    }
}

/// Pick the page's data table: the one with the most rows plus text.
pub fn read_table_from_html(html: &str) -> Result<ProjectionTable> {
    let document = Html::parse_document(html);

    let mut biggest: Option<(usize, ElementRef)> = None;
    for table in document.select(&TABLE) {
        let score = table_score(&table);
        if biggest.as_ref().map_or(true, |(best, _)| score > *best) {
            biggest = Some((score, table));
        }
    }

    let (_, table) = biggest.ok_or(FflError::NoTable)?;
    let parsed = parse_table(table);
    if parsed.width() == 0 {
        return Err(FflError::NoTable);
    }
    Ok(parsed)
}

fn table_score(table: &ElementRef) -> usize {
    let rows = table.select(&ROW).count();
    let text_len: usize = table.text().map(|t| t.chars().count()).sum();
    rows + text_len
}

struct RawRow {
    cells: Vec<String>,
    is_header: bool,
}

fn parse_table(table: ElementRef) -> ProjectionTable {
    let mut raw_rows = Vec::new();
    for row in table.select(&ROW) {
        let in_thead = row
            .ancestors()
            .filter_map(ElementRef::wrap)
            .take_while(|el| el.id() != table.id())
            .any(|el| el.value().name() == "thead");

        let mut cells = Vec::new();
        let mut all_th = true;
        for cell in row.children().filter_map(ElementRef::wrap) {
            let name = cell.value().name();
            if name != "td" && name != "th" {
                continue;
            }
            all_th &= name == "th";
            let span = cell
                .value()
                .attr("colspan")
                .and_then(|v| v.trim().parse::<usize>().ok())
                .unwrap_or(1)
                .max(1);
            let text = collapse_whitespace(&cell.text().collect::<String>());
            cells.extend(std::iter::repeat(text).take(span));
        }

        if cells.is_empty() {
            continue;
        }
        raw_rows.push(RawRow {
            cells,
            is_header: in_thead || all_th,
        });
    }

    // Header rows are the leading run of thead / all-<th> rows.
    let header_count = raw_rows.iter().take_while(|r| r.is_header).count();
    let (header_rows, body_rows) = if header_count == 0 {
        raw_rows.split_at(raw_rows.len().min(1))
    } else {
        raw_rows.split_at(header_count)
    };

    let headers = flatten_headers(header_rows.iter().map(|r| r.cells.as_slice()));
    let rows = body_rows
        .iter()
        .map(|r| r.cells.iter().cloned().map(strip_thousands).collect())
        .collect();
    ProjectionTable::new(headers, rows)
}

/// Join stacked header rows column by column (`PASSING` over `YDS` becomes
/// `PASSING YDS`). Empty labels are skipped.
pub fn flatten_headers<'a>(rows: impl Iterator<Item = &'a [String]>) -> Vec<String> {
    let rows: Vec<&[String]> = rows.collect();
    let width = rows.iter().map(|r| r.len()).max().unwrap_or(0);

    (0..width)
        .map(|col| {
            let mut parts: Vec<&str> = Vec::new();
            for row in &rows {
                if let Some(label) = row.get(col).map(|l| l.trim()) {
                    if !label.is_empty() && parts.last() != Some(&label) {
                        parts.push(label);
                    }
                }
            }
            if parts.is_empty() {
                format!("Unnamed: {}", col)
            } else {
                parts.join(" ")
            }
        })
        .collect()
}
