mod algebra;
mod alter;
mod error;
mod record;
mod table;

pub use {
    alter::AlterOp,
    def::{row, Column, DataType, Row, Schema, TableId, Value},
    error::{Error, ErrorKind, Result},
    expr::Expression,
    record::Record,
    table::{Table, TEMPORARY_DATABASE},
};
