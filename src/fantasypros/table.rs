//! In-memory projection table: a header row plus string cells.
//!
//! The same shape is produced by the HTML scraper and read back from the
//! per-position CSV files, so both the projections writer and the headshot
//! matcher work on it.

use crate::Result;
use std::{fs, io, path::Path};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectionTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl ProjectionTable {
    /// Build a table, padding short rows (and the header) so every row has
    /// the same width.
    pub fn new(mut headers: Vec<String>, mut rows: Vec<Vec<String>>) -> Self {
        let width = rows
            .iter()
            .map(Vec::len)
            .chain(std::iter::once(headers.len()))
            .max()
            .unwrap_or(0);

        while headers.len() < width {
            headers.push(format!("Unnamed: {}", headers.len()));
        }
        for row in &mut rows {
            row.resize(width, String::new());
        }

        Self { headers, rows }
    }

    pub fn width(&self) -> usize {
        self.headers.len()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Cell by row and column name.
    pub fn cell(&self, row: usize, column: &str) -> Option<&str> {
        let idx = self.column_index(column)?;
        self.rows.get(row)?.get(idx).map(String::as_str)
    }

    /// Rename the first column called `from`. Returns whether a rename happened.
    pub fn rename_column(&mut self, from: &str, to: &str) -> bool {
        match self.column_index(from) {
            Some(idx) => {
                self.headers[idx] = to.to_string();
                true
            }
            None => false,
        }
    }

    /// Replace the values of `name`, or append it as a new last column.
    pub fn set_column(&mut self, name: &str, values: Vec<String>) {
        let idx = match self.column_index(name) {
            Some(idx) => idx,
            None => {
                self.headers.push(name.to_string());
                for row in &mut self.rows {
                    row.push(String::new());
                }
                self.headers.len() - 1
            }
        };
        for (row, value) in self.rows.iter_mut().zip(values) {
            row[idx] = value;
        }
    }

    /// Insert a column holding the same value in every row.
    pub fn insert_constant_column(&mut self, index: usize, name: &str, value: &str) {
        let index = index.min(self.headers.len());
        self.headers.insert(index, name.to_string());
        for row in &mut self.rows {
            row.insert(index, value.to_string());
        }
    }

    /// Drop rows where every cell is blank.
    pub fn drop_empty_rows(&mut self) {
        self.rows
            .retain(|row| row.iter().any(|cell| !cell.trim().is_empty()));
    }

    /// Keep only the first `n` rows.
    pub fn truncate(&mut self, n: usize) {
        self.rows.truncate(n);
    }

    pub fn write_csv<W: io::Write>(&self, writer: W) -> Result<()> {
        let mut wtr = csv::Writer::from_writer(writer);
        wtr.write_record(&self.headers)?;
        for row in &self.rows {
            wtr.write_record(row)?;
        }
        wtr.flush()?;
        Ok(())
    }

    pub fn write_csv_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        self.write_csv(fs::File::create(path)?)
    }

    pub fn from_csv_reader<R: io::Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
        let headers = rdr.headers()?.iter().map(str::to_string).collect();
        let mut rows = Vec::new();
        for record in rdr.records() {
            rows.push(record?.iter().map(str::to_string).collect());
        }
        Ok(Self::new(headers, rows))
    }

    pub fn read_csv_file(path: &Path) -> Result<Self> {
        Self::from_csv_reader(fs::File::open(path)?)
    }
}
