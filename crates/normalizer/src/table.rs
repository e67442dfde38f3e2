//! Tabular Input (rows × named columns)

use crate::error::NormalizeError;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

/// A named column of samples
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    /// Variable name
    pub name: String,
    /// One sample per row
    pub values: Vec<f64>,
}

/// Rows × named columns, every column the same length
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Column>", into = "Vec<Column>")]
pub struct Table {
    columns: Vec<Column>,
}

impl Table {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`push_column`](Self::push_column)
    pub fn with_column(
        mut self,
        name: impl Into<String>,
        values: Vec<f64>,
    ) -> Result<Self, NormalizeError> {
        self.push_column(name, values)?;
        Ok(self)
    }

    /// Append a column; its length must match the existing rows
    pub fn push_column(
        &mut self,
        name: impl Into<String>,
        values: Vec<f64>,
    ) -> Result<(), NormalizeError> {
        let name = name.into();

        if self.columns.iter().any(|c| c.name == name) {
            return Err(NormalizeError::DuplicateColumn(name));
        }

        if let Some(first) = self.columns.first() {
            if first.values.len() != values.len() {
                return Err(NormalizeError::ColumnLength {
                    column: name,
                    expected: first.values.len(),
                    actual: values.len(),
                });
            }
        }

        self.columns.push(Column { name, values });
        Ok(())
    }

    /// Number of rows
    pub fn nrows(&self) -> usize {
        self.columns.first().map_or(0, |c| c.values.len())
    }

    /// Number of columns
    pub fn ncols(&self) -> usize {
        self.columns.len()
    }

    /// Column names in insertion order
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    /// Samples of the named column
    pub fn column(&self, name: &str) -> Option<&[f64]> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.values.as_slice())
    }

    /// Plain rows × columns array; labels are dropped
    pub fn to_array(&self) -> Array2<f64> {
        Array2::from_shape_fn((self.nrows(), self.ncols()), |(row, col)| {
            self.columns[col].values[row]
        })
    }
}

impl TryFrom<Vec<Column>> for Table {
    type Error = NormalizeError;

    fn try_from(columns: Vec<Column>) -> Result<Self, Self::Error> {
        columns
            .into_iter()
            .try_fold(Table::new(), |table, c| table.with_column(c.name, c.values))
    }
}

impl From<Table> for Vec<Column> {
    fn from(table: Table) -> Self {
        table.columns
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_to_array_layout() {
        let table = Table::new()
            .with_column("a", vec![1.0, 3.0, 5.0])
            .unwrap()
            .with_column("b", vec![2.0, 4.0, 6.0])
            .unwrap();

        assert_eq!(table.nrows(), 3);
        assert_eq!(table.ncols(), 2);
        assert_eq!(table.to_array(), array![[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]]);
    }

    #[test]
    fn test_column_lookup() {
        let table = Table::new().with_column("coolant", vec![90.0, 91.0]).unwrap();
        assert_eq!(table.column("coolant"), Some(&[90.0, 91.0][..]));
        assert_eq!(table.column("missing"), None);
        assert_eq!(table.column_names().collect::<Vec<_>>(), vec!["coolant"]);
    }

    #[test]
    fn test_ragged_column_rejected() {
        let err = Table::new()
            .with_column("a", vec![1.0, 2.0])
            .unwrap()
            .with_column("b", vec![1.0])
            .unwrap_err();

        assert_eq!(
            err,
            NormalizeError::ColumnLength {
                column: "b".to_string(),
                expected: 2,
                actual: 1,
            }
        );
    }

    #[test]
    fn test_duplicate_column_rejected() {
        let mut table = Table::new();
        table.push_column("a", vec![1.0]).unwrap();
        assert_eq!(
            table.push_column("a", vec![2.0]),
            Err(NormalizeError::DuplicateColumn("a".to_string()))
        );
    }

    #[test]
    fn test_empty_table() {
        let table = Table::new();
        assert_eq!(table.to_array().shape(), &[0, 0]);
    }

    #[test]
    fn test_deserialize_validates() {
        let json = r#"[{"name":"a","values":[1.0,2.0]},{"name":"b","values":[3.0,4.0]}]"#;
        let table: Table = serde_json::from_str(json).unwrap();
        assert_eq!(table.to_array(), array![[1.0, 3.0], [2.0, 4.0]]);

        let ragged = r#"[{"name":"a","values":[1.0,2.0]},{"name":"b","values":[3.0]}]"#;
        assert!(serde_json::from_str::<Table>(ragged).is_err());

        let back: Table = serde_json::from_str(&serde_json::to_string(&table).unwrap()).unwrap();
        assert_eq!(back, table);
    }
}
