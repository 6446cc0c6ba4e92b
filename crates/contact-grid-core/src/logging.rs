//! Logging and debugging facilities for Contact Grid.
//!
//! This module provides:
//! - Target names for filtering `tracing` output by subsystem
//! - [`GridDebug`], a plain-text renderer for table contents
//!
//! # Tracing Integration
//!
//! Contact Grid uses the `tracing` crate for instrumentation. To see logs,
//! install a subscriber in your application:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("contact_grid=debug")
//!     .init();
//! ```

use std::fmt::Write as FmtWrite;

use crate::value::CellValue;

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Signal/slot system target.
    pub const SIGNAL: &str = "contact_grid_core::signal";
    /// Table model target.
    pub const MODEL: &str = "contact_grid::model";
    /// Contact records and editor target.
    pub const CONTACTS: &str = "contact_grid::contacts";
}

/// Style options for grid visualization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GridStyle {
    /// ASCII characters for borders.
    Ascii,
    /// Unicode box-drawing characters.
    #[default]
    Unicode,
}

impl GridStyle {
    fn vertical(self) -> char {
        match self {
            GridStyle::Ascii => '|',
            GridStyle::Unicode => '│',
        }
    }

    fn horizontal(self) -> char {
        match self {
            GridStyle::Ascii => '-',
            GridStyle::Unicode => '─',
        }
    }

    fn cross(self) -> char {
        match self {
            GridStyle::Ascii => '+',
            GridStyle::Unicode => '┼',
        }
    }
}

/// Debug utility that renders a header row and cell rows as text.
///
/// # Example
///
/// ```
/// use contact_grid_core::logging::{GridDebug, GridStyle};
/// use contact_grid_core::CellValue;
///
/// let text = GridDebug::new(GridStyle::Ascii).format(
///     &["type", "address"],
///     &[vec![CellValue::from("Home"), CellValue::from("123 St")]],
/// );
/// assert_eq!(
///     text,
///     "# | type | address\n--+------+--------\n0 | Home | 123 St\n"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct GridDebug {
    style: GridStyle,
    max_rows: Option<usize>,
}

impl GridDebug {
    /// Create a renderer with the given style.
    pub fn new(style: GridStyle) -> Self {
        Self {
            style,
            max_rows: None,
        }
    }

    /// Limit the number of rendered rows; the rest is summarized.
    pub fn with_max_rows(mut self, max_rows: usize) -> Self {
        self.max_rows = Some(max_rows);
        self
    }

    /// Render `headers` and `rows` into a string.
    ///
    /// Every line starts with the row index. Cells beyond the header width
    /// are ignored; missing cells render empty.
    pub fn format<H: AsRef<str>>(&self, headers: &[H], rows: &[Vec<CellValue>]) -> String {
        let shown = self.max_rows.map_or(rows.len(), |max| max.min(rows.len()));
        let cells: Vec<Vec<String>> = rows[..shown]
            .iter()
            .map(|row| {
                (0..headers.len())
                    .map(|column| {
                        row.get(column)
                            .map(CellValue::to_display_string)
                            .unwrap_or_default()
                    })
                    .collect()
            })
            .collect();

        let index_width = shown.saturating_sub(1).to_string().len().max(1);
        let widths: Vec<usize> = headers
            .iter()
            .enumerate()
            .map(|(column, header)| {
                cells
                    .iter()
                    .map(|row| row[column].chars().count())
                    .chain(std::iter::once(header.as_ref().chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let bar = self.style.vertical();
        let mut output = String::new();

        let header_cells: Vec<String> = headers.iter().map(|h| h.as_ref().to_string()).collect();
        self.write_line(&mut output, "#", index_width, &header_cells, &widths, bar);

        let mut rule = self.style.horizontal().to_string().repeat(index_width + 1);
        for width in &widths {
            rule.push(self.style.cross());
            rule.push_str(&self.style.horizontal().to_string().repeat(width + 2));
        }
        if !widths.is_empty() {
            // data lines drop the trailing pad after the last column
            rule.pop();
        }
        output.push_str(&rule);
        output.push('\n');

        for (index, row) in cells.iter().enumerate() {
            self.write_line(&mut output, &index.to_string(), index_width, row, &widths, bar);
        }

        if shown < rows.len() {
            let _ = writeln!(output, "... {} more row(s)", rows.len() - shown);
        }
        output
    }

    fn write_line(
        &self,
        output: &mut String,
        index: &str,
        index_width: usize,
        cells: &[String],
        widths: &[usize],
        bar: char,
    ) {
        let mut line = format!("{index:<index_width$} ");
        for (cell, width) in cells.iter().zip(widths) {
            let _ = write!(line, "{bar} {cell:<width$} ");
        }
        let _ = writeln!(output, "{}", line.trim_end());
    }
}
