use {
    crate::table::Table,
    def::Row,
    std::collections::HashSet,
};

impl Table {
    /// Rows of either table, first occurrence kept.
    ///
    /// The schema of `other` is not checked. Its rows are taken as they are,
    /// so both tables must have the same column count and types in the same
    /// order, or later row access on the result will go out of bounds.
    pub fn union(&self, other: &Table) -> Table {
        let mut seen = HashSet::new();
        let rows = self
            .rows
            .iter()
            .chain(&other.rows)
            .filter(|row| seen.insert(*row))
            .cloned()
            .collect();

        self.derive(
            format!("({}∪{})", self.name(), other.name()),
            self.schema.clone(),
            rows,
        )
    }

    /// Rows of this table that also appear in `other`. Rows are compared
    /// positionally.
    pub fn intersect(&self, other: &Table) -> Table {
        let rows = self.matching(other, true);

        self.derive(
            format!("({}∩{})", self.name(), other.name()),
            self.schema.clone(),
            rows,
        )
    }

    /// Rows of this table that appear nowhere in `other`.
    pub fn difference(&self, other: &Table) -> Table {
        let rows = self.matching(other, false);

        self.derive(
            format!("({}−{})", self.name(), other.name()),
            self.schema.clone(),
            rows,
        )
    }

    fn matching(&self, other: &Table, present: bool) -> Vec<Row> {
        let lookup = other.rows.iter().collect::<HashSet<_>>();

        self.rows
            .iter()
            .filter(|row| lookup.contains(row) == present)
            .cloned()
            .collect()
    }
}
