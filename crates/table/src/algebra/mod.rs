//! Relational operators. Each one leaves its operands untouched and returns
//! a new table in the receiver's database, named after the operation.

mod join;
mod product;
mod projection;
mod rename;
mod selection;
mod set;

use {
    crate::table::Table,
    def::{Row, Schema, TableId},
};

impl Table {
    /// A result table that shares this table's store, so it can be saved
    /// later. Rows are taken as already typed.
    pub(crate) fn derive(&self, name: String, schema: Schema, rows: Vec<Row>) -> Table {
        Table {
            id: TableId::new(self.id.database.as_str(), name),
            schema,
            rows,
            store: self.store.clone(),
        }
    }

    pub(crate) fn rename_to(mut self, name: String) -> Table {
        self.id.name = name;
        self
    }
}
