use {
    crate::{
        error::{ColumnsSnafu, Result},
        table::Table,
    },
    common::log::LogError,
    def::TableId,
    snafu::prelude::*,
};

impl Table {
    /// The same rows under `alias`, with column qualifiers stripped. An
    /// alias without a database stays in this table's database.
    pub fn rename(&self, alias: &str) -> Result<Table> {
        let schema = self.schema.unqualified().context(ColumnsSnafu).log_error()?;

        Ok(Table {
            id: TableId::parse(alias, &self.id.database),
            schema,
            rows: self.rows.clone(),
            store: self.store.clone(),
        })
    }
}
