use indexmap::IndexMap;
use tracing::debug;

use crate::core::coerce_f64;
use crate::error::{StoryError, StoryResult};

/// Minimal delimited-text table: comma separated, first row is the
/// header, no quoting. Column order follows the header.
#[derive(Debug, Clone, PartialEq)]
pub struct DataTable {
    name: String,
    columns: IndexMap<String, usize>,
    rows: Vec<Vec<String>>,
}

impl DataTable {
    pub fn from_delimited(name: impl Into<String>, text: &str) -> StoryResult<Self> {
        let name = name.into();
        let mut lines = text.lines().map(|line| line.trim_end_matches('\r'));

        let header = lines
            .by_ref()
            .find(|line| !line.trim().is_empty())
            .ok_or_else(|| {
                StoryError::InvalidData(format!("table `{name}` has no header row"))
            })?;

        let mut columns = IndexMap::new();
        for (index, raw) in header.split(',').enumerate() {
            let column = raw.trim().to_owned();
            if column.is_empty() {
                return Err(StoryError::InvalidData(format!(
                    "table `{name}` has an unnamed column at position {index}"
                )));
            }
            if columns.insert(column.clone(), index).is_some() {
                return Err(StoryError::InvalidData(format!(
                    "table `{name}` has duplicate column `{column}`"
                )));
            }
        }

        let mut rows = Vec::new();
        for line in lines {
            if line.trim().is_empty() {
                continue;
            }
            let fields: Vec<String> = line.split(',').map(|field| field.trim().to_owned()).collect();
            if fields.len() != columns.len() {
                return Err(StoryError::InvalidData(format!(
                    "table `{name}` row {} has {} fields, expected {}",
                    rows.len() + 1,
                    fields.len(),
                    columns.len()
                )));
            }
            rows.push(fields);
        }

        if rows.is_empty() {
            return Err(StoryError::InvalidData(format!(
                "table `{name}` has a header but no data rows"
            )));
        }

        debug!(
            table = name.as_str(),
            columns = columns.len(),
            rows = rows.len(),
            "table loaded"
        );
        Ok(Self {
            name,
            columns,
            rows,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[must_use]
    pub fn has_column(&self, column: &str) -> bool {
        self.columns.contains_key(column)
    }

    pub fn headers(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    fn column_index(&self, column: &str) -> StoryResult<usize> {
        self.columns
            .get(column)
            .copied()
            .ok_or_else(|| StoryError::MissingColumn {
                table: self.name.clone(),
                column: column.to_owned(),
            })
    }

    /// Raw cell text.
    pub fn text(&self, row: usize, column: &str) -> StoryResult<&str> {
        let index = self.column_index(column)?;
        let fields = self.rows.get(row).ok_or_else(|| {
            StoryError::InvalidData(format!(
                "table `{}` row {row} out of range ({} rows)",
                self.name,
                self.rows.len()
            ))
        })?;
        Ok(&fields[index])
    }

    /// Cell as a number; malformed text coerces to NaN.
    pub fn number(&self, row: usize, column: &str) -> StoryResult<f64> {
        Ok(coerce_f64(self.text(row, column)?))
    }

    /// Whole column as numbers, NaN where malformed.
    pub fn numbers(&self, column: &str) -> StoryResult<Vec<f64>> {
        let index = self.column_index(column)?;
        Ok(self
            .rows
            .iter()
            .map(|fields| coerce_f64(&fields[index]))
            .collect())
    }

    /// Whole column as raw text.
    pub fn texts(&self, column: &str) -> StoryResult<Vec<&str>> {
        let index = self.column_index(column)?;
        Ok(self.rows.iter().map(|fields| fields[index].as_str()).collect())
    }
}
