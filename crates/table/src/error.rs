use {
    def::{DataType, TableId},
    snafu::prelude::*,
};

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("table {} does not exist and no columns were given", id))]
    MissingSchema { id: TableId },

    #[snafu(display("cannot {} temporary table {}", action, id))]
    Temporary { id: TableId, action: &'static str },

    #[snafu(display("cannot drop table {}: its {} does not exist", id, target))]
    DropMissing { id: TableId, target: &'static str },

    #[snafu(display("column {:?} not found", column))]
    ColumnNotFound { column: String },

    #[snafu(display("a data type is required to {} column {:?}", op, column))]
    MissingType { op: &'static str, column: String },

    #[snafu(display("unknown alteration {:?}", name))]
    UnknownAlteration { name: String },

    #[snafu(display("cannot change column {:?} to {}: {}", column, data_type, source))]
    ModifyColumn {
        column: String,
        data_type: DataType,
        source: def::Error,
    },

    #[snafu(display("invalid columns: {}", source))]
    Columns { source: def::Error },

    #[snafu(display("invalid row for table {}: {}", id, source))]
    InvalidRow { id: TableId, source: def::Error },

    #[snafu(display("row {} out of range, table has {} rows", index, len))]
    RowIndex { index: usize, len: usize },

    #[snafu(display("cannot evaluate {}: {}", expression, source))]
    Evaluate {
        expression: String,
        source: expr::Error,
    },

    #[snafu(display("{} yields a {} value, which no column can hold", expression, type_name))]
    UnsupportedResult {
        expression: String,
        type_name: &'static str,
    },

    #[snafu(display("{} yields {} after {} values", expression, found, expected))]
    ResultType {
        expression: String,
        expected: DataType,
        found: DataType,
    },

    #[snafu(display("{}", source))]
    Storage { source: storage::Error },
}

pub type Result<T> = std::result::Result<T, Error>;

/// The family an error belongs to, so callers can react without matching
/// every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Missing table, missing schema or an operation a temporary table
    /// cannot perform.
    Table,
    /// Unknown, duplicated or unconvertible columns.
    Column,
    /// Rows that don't fit the schema and failed evaluations.
    Data,
    /// Filesystem and catalog failures.
    Storage,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::MissingSchema { .. }
            | Error::Temporary { .. }
            | Error::DropMissing { .. } => ErrorKind::Table,
            Error::ColumnNotFound { .. }
            | Error::MissingType { .. }
            | Error::UnknownAlteration { .. }
            | Error::ModifyColumn { .. }
            | Error::Columns { .. } => ErrorKind::Column,
            Error::InvalidRow { .. }
            | Error::RowIndex { .. }
            | Error::Evaluate { .. }
            | Error::UnsupportedResult { .. }
            | Error::ResultType { .. } => ErrorKind::Data,
            Error::Storage { source } => match source {
                storage::Error::TableNotFound { .. } => ErrorKind::Table,
                storage::Error::FieldCount { .. } | storage::Error::Field { .. } => {
                    ErrorKind::Data
                }
                _ => ErrorKind::Storage,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds() {
        let id = TableId::new("pytest", "t");

        assert_eq!(MissingSchemaSnafu { id }.build().kind(), ErrorKind::Table);
        assert_eq!(ColumnNotFoundSnafu { column: "x" }.build().kind(), ErrorKind::Column);
        assert_eq!(RowIndexSnafu { index: 3_usize, len: 1_usize }.build().kind(), ErrorKind::Data);

        let missing = Error::Storage {
            source: storage::Error::FieldCount {
                path: "t.csv".into(),
                line: 1,
                expected: 3,
                found: 2,
            },
        };
        assert_eq!(missing.kind(), ErrorKind::Data);
    }
}
