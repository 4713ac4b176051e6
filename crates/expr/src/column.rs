use {
    super::{Datum, Evaluate, Result},
    def::{Schema, Value},
};

/// The row an expression is evaluated against: values looked up by column
/// name through the row's schema.
pub struct Bindings<'a> {
    schema: &'a Schema,
    values: &'a [Value],
}

impl<'a> Bindings<'a> {
    pub fn new(schema: &'a Schema, values: &'a [Value]) -> Self {
        Self { schema, values }
    }

    pub fn get(&self, name: &str) -> Option<&'a Value> {
        self.schema
            .index_of(name)
            .and_then(|idx| self.values.get(idx))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnRef {
    pub name: String,
}

impl ColumnRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Evaluate for ColumnRef {
    /// A name that is not a column of the row is read as a text literal.
    fn evaluate(&self, row: &Bindings) -> Result<Datum> {
        Ok(match row.get(&self.name) {
            Some(value) => value.into(),
            None => Datum::Text(self.name.clone()),
        })
    }
}
