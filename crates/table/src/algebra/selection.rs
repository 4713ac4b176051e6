use {
    crate::{
        error::{EvaluateSnafu, Result},
        table::Table,
    },
    common::log::LogError,
    expr::{Bindings, Evaluate, Expression},
    snafu::prelude::*,
};

impl Table {
    /// Keeps the rows for which `condition` is truthy. A null operand of a
    /// comparison reads as `false`, which orders like zero.
    pub fn select(&self, condition: &Expression) -> Result<Table> {
        let mut rows = vec![];
        for row in &self.rows {
            let keep = condition
                .evaluate(&Bindings::new(&self.schema, row))
                .with_context(|_| EvaluateSnafu {
                    expression: condition.to_string(),
                })
                .log_error()?;

            if keep.is_truthy() {
                rows.push(row.clone());
            }
        }

        Ok(self.derive(format!("({}σ)", self.name()), self.schema.clone(), rows))
    }
}

#[cfg(test)]
mod tests {
    use {
        crate::{Error, Table},
        def::{row, DataType, Schema},
        expr::{ComparisonOp, Expression},
        serde_json::json,
    };

    fn table() -> Table {
        let schema = Schema::from_pairs(&[
            ("chave", DataType::Integer),
            ("desc", DataType::Text),
            ("valor", DataType::Float),
        ])
        .unwrap();
        Table::temporary(
            "pytest.A",
            schema,
            vec![row![1, "a", 0.55], row![3, "c", None::<f64>]],
        )
        .unwrap()
    }

    #[test]
    fn select() {
        let a = table();

        let cond = Expression::compare(
            ComparisonOp::Equal,
            Expression::column("chave"),
            Expression::literal(1),
        );
        let selected = a.select(&cond).unwrap();
        assert_eq!(selected.name(), "(Aσ)");
        assert_eq!(selected.rows(), [row![1, "a", 0.55]]);

        let cond = Expression::from_json(&json!({"missing": "valor"})).unwrap();
        assert_eq!(a.select(&cond).unwrap().rows(), [row![3, "c", None::<f64>]]);

        // null reads as false
        let cond = Expression::from_json(&json!({"lt": ["valor", 1]})).unwrap();
        assert_eq!(a.select(&cond).unwrap().len(), 2);

        let cond = Expression::from_json(&json!({"gte": ["valor", 1]})).unwrap();
        assert!(a.select(&cond).unwrap().is_empty());
    }

    #[test]
    fn evaluation_errors() {
        let cond = Expression::from_json(&json!({"gt": [{"div": ["chave", 0]}, 1]})).unwrap();
        assert!(matches!(table().select(&cond), Err(Error::Evaluate { .. })));
    }
}
