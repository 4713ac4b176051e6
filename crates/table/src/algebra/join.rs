use {
    crate::{error::Result, table::Table},
    def::{qualify, Schema},
    expr::Expression,
};

impl Table {
    /// Rows of the product that satisfy `condition`.
    pub fn join(&self, other: &Table, condition: &Expression) -> Result<Table> {
        let joined = self.product(other)?.select(condition)?;

        Ok(joined.rename_to(format!("({}⋈{})", self.name(), other.name())))
    }

    /// The join, plus every row of this table that matched nothing, padded
    /// with nulls on the right.
    pub fn left_join(&self, other: &Table, condition: &Expression) -> Result<Table> {
        let joined = self.product(other)?.select(condition)?;

        let matched = joined.project(&qualified_names(self))?;
        let padding = self.padding("⟕", &other.schema);
        let unmatched = self.difference(&matched).product(&padding)?;

        Ok(joined
            .union(&unmatched)
            .rename_to(format!("({}⟕{})", self.name(), other.name())))
    }

    /// The join, plus every row of `other` that matched nothing, padded with
    /// nulls on the left.
    pub fn right_join(&self, other: &Table, condition: &Expression) -> Result<Table> {
        let joined = self.product(other)?.select(condition)?;

        let matched = joined.project(&qualified_names(other))?;
        let padding = self.padding("⟖", &self.schema);
        let unmatched = padding.product(&other.difference(&matched))?;

        Ok(joined
            .union(&unmatched)
            .rename_to(format!("({}⟖{})", self.name(), other.name())))
    }

    /// A single all-null row shaped like `schema`.
    fn padding(&self, name: &str, schema: &Schema) -> Table {
        self.derive(name.to_string(), schema.clone(), vec![schema.empty_row()])
    }
}

/// Names the columns of `table` carry inside a product.
fn qualified_names(table: &Table) -> Vec<String> {
    table
        .schema
        .names()
        .map(|col| qualify(table.name(), col))
        .collect()
}
