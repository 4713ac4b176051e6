use {
    crate::{
        error::{ColumnsSnafu, Result},
        table::Table,
    },
    common::log::LogError,
    snafu::prelude::*,
};

impl Table {
    /// Cartesian product. Columns are qualified with their table's name, so
    /// a table can't be multiplied by another of the same name.
    pub fn product(&self, other: &Table) -> Result<Table> {
        let schema = self
            .schema
            .qualified(self.name())
            .and_then(|lhs| lhs.concat(&other.schema.qualified(other.name())?))
            .context(ColumnsSnafu)
            .log_error()?;

        let rows = self
            .rows
            .iter()
            .flat_map(|lhs| other.rows.iter().map(move |rhs| [&lhs[..], &rhs[..]].concat()))
            .collect();

        Ok(self.derive(
            format!("({}×{})", self.name(), other.name()),
            schema,
            rows,
        ))
    }
}
