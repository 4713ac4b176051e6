mod error;

pub use error::{Error, Result};

use {
    common::log::LogError,
    error::{DataTypeSnafu, RenderSnafu, StorageSnafu, TableSnafu},
    snafu::prelude::*,
    storage::{Config, Store},
    table::{AlterOp, DataType, Table},
    tracing::info,
};

/// Creates the data directory, the catalog and the default database.
pub fn init(config: &Config) -> Result<Store> {
    let store = Store::open(config.clone()).context(StorageSnafu)?;
    let database = store
        .database(&config.default_database)
        .context(StorageSnafu)?;

    info!(
        "initialized {} with database {}",
        config.data_dir.display(),
        database.name()
    );
    Ok(store)
}

/// The catalog entry of a saved table, as pretty JSON.
pub fn describe(store: &Store, id: &str) -> Result<String> {
    let table = Table::open(store, id).context(TableSnafu)?;

    serde_json::to_string_pretty(&table.definition())
        .context(RenderSnafu {
            id: table.full_name(),
        })
        .log_error()
}

pub fn clean(store: &Store, id: &str) -> Result<()> {
    Table::open(store, id)
        .and_then(|mut table| table.clean())
        .context(TableSnafu)
}

pub fn drop(store: &Store, id: &str) -> Result<()> {
    Table::open(store, id)
        .and_then(Table::drop)
        .context(TableSnafu)
}

/// Applies one alteration and saves the table.
pub fn alter(
    store: &Store,
    id: &str,
    op: &str,
    column: &str,
    data_type: Option<&str>,
) -> Result<()> {
    let op = op.parse::<AlterOp>().context(TableSnafu)?;
    let data_type = data_type
        .map(str::parse::<DataType>)
        .transpose()
        .context(DataTypeSnafu)
        .log_error()?;

    let mut table = Table::open(store, id).context(TableSnafu)?;
    table.alter(op, column, data_type).context(TableSnafu)?;
    table.save().context(TableSnafu)
}
