mod error;
mod id;
mod schema;
mod types;
mod value;

pub use {
    error::{Error, Result},
    id::TableId,
    schema::{qualify, Column, Schema},
    types::DataType,
    value::{Row, Value},
};
