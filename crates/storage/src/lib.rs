mod catalog;
mod config;
mod database;
mod error;
pub mod file;
mod store;

pub use {
    catalog::{Catalog, TableDefinition},
    config::Config,
    database::{Database, SharedCatalog},
    error::{Error, Result},
    store::Store,
};
