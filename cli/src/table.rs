// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, fmt};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

pub trait TableColumn<T> {
    /// Header shown above the column.
    fn name(&self) -> Cow<'_, str>;

    /// Key of the column in JSON output.
    fn key(&self) -> &'static str;

    fn format<'a>(&self, data: &'a T) -> Cow<'a, str>;

    /// Value of the column in JSON output, the formatted text unless overridden.
    fn json(&self, data: &T) -> serde_json::Value {
        self.format(data).into_owned().into()
    }

    fn padding_direction(&self) -> PaddingDirection {
        PaddingDirection::Left
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddingDirection {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableStyle {
    /// Aligned columns separated by spaces, with a bold header.
    Basic,
    /// A JSON array with one object per row.
    Json,
}

pub struct Table<'a, T, C: TableColumn<T>> {
    style: TableStyle,
    columns: &'a [C],
    data: &'a [T],
}

impl<'a, T, C: TableColumn<T>> Table<'a, T, C> {
    pub fn new(style: TableStyle, columns: &'a [C], data: &'a [T]) -> Self {
        Self {
            style,
            columns,
            data,
        }
    }

    fn cells(&self) -> Vec<Vec<Cow<'a, str>>> {
        self.data
            .iter()
            .map(|row| self.columns.iter().map(|col| col.format(row)).collect())
            .collect()
    }

    fn fmt_basic(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const SEPARATOR: &str = "  ";

        let headers: Vec<Cow<'_, str>> = self.columns.iter().map(|c| c.name()).collect();
        let rows = self.cells();

        let mut widths: Vec<usize> = headers.iter().map(|h| h.width()).collect();
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.width());
            }
        }

        let last = self.columns.len().saturating_sub(1);
        let pad = |i: usize, col: &C, cell: &str| -> String {
            let width = widths.get(i).copied().unwrap_or(0);
            let fill = " ".repeat(width.saturating_sub(cell.width()));
            match col.padding_direction() {
                PaddingDirection::Right => format!("{fill}{cell}"),
                PaddingDirection::Left if i == last => cell.to_string(),
                PaddingDirection::Left => format!("{cell}{fill}"),
            }
        };

        let header: Vec<String> = self
            .columns
            .iter()
            .zip(&headers)
            .enumerate()
            .map(|(i, (col, h))| pad(i, col, h))
            .collect();
        writeln!(f, "{}", header.join(SEPARATOR).bold())?;

        for row in &rows {
            let line: Vec<String> = self
                .columns
                .iter()
                .zip(row)
                .enumerate()
                .map(|(i, (col, cell))| pad(i, col, cell))
                .collect();
            writeln!(f, "{}", line.join(SEPARATOR))?;
        }
        Ok(())
    }

    fn fmt_json(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows: Vec<serde_json::Value> = self
            .data
            .iter()
            .map(|row| {
                let object = self
                    .columns
                    .iter()
                    .map(|col| (col.key().to_string(), col.json(row)))
                    .collect::<serde_json::Map<_, _>>();
                serde_json::Value::Object(object)
            })
            .collect();

        let text = serde_json::to_string_pretty(&rows).map_err(|_| fmt::Error)?;
        write!(f, "{text}")
    }
}

impl<T, C: TableColumn<T>> fmt::Display for Table<'_, T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.style {
            TableStyle::Basic => self.fmt_basic(f),
            TableStyle::Json => self.fmt_json(f),
        }
    }
}
