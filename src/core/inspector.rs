//! Read-only diagnostics: shape, column types, nulls, uniqueness, duplicates

use crate::core::cleaner::duplicate_flags;
use crate::types::Table;
use serde::Serialize;
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnProfile {
    pub name: String,
    /// `empty`, `mixed`, or the single cell type the column holds
    pub kind: String,
    pub nulls: usize,
    /// Distinct non-absent values
    pub unique: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DataProfile {
    pub rows: usize,
    pub columns: usize,
    pub column_profiles: Vec<ColumnProfile>,
    pub duplicate_rows: usize,
}

impl DataProfile {
    pub fn from_table(table: &Table) -> Self {
        let column_profiles = table
            .headers
            .iter()
            .enumerate()
            .map(|(col, name)| {
                let mut kinds: Vec<&'static str> = Vec::new();
                let mut distinct = HashSet::new();
                let mut nulls = 0;
                for cell in table.column(col) {
                    if cell.is_empty() {
                        nulls += 1;
                        continue;
                    }
                    if !kinds.contains(&cell.kind()) {
                        kinds.push(cell.kind());
                    }
                    distinct.insert(cell);
                }
                let kind = match kinds.as_slice() {
                    [] => "empty",
                    [single] => *single,
                    _ => "mixed",
                };
                ColumnProfile {
                    name: name.clone(),
                    kind: kind.to_string(),
                    nulls,
                    unique: distinct.len(),
                }
            })
            .collect();

        Self {
            rows: table.row_count(),
            columns: table.column_count(),
            column_profiles,
            duplicate_rows: duplicate_flags(&table.rows).iter().filter(|&&d| d).count(),
        }
    }

    pub fn total_nulls(&self) -> usize {
        self.column_profiles.iter().map(|c| c.nulls).sum()
    }

    pub fn column(&self, name: &str) -> Option<&ColumnProfile> {
        self.column_profiles.iter().find(|c| c.name == name)
    }
}
