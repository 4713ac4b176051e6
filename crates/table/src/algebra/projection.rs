use {
    crate::{
        error::{
            ColumnNotFoundSnafu, ColumnsSnafu, EvaluateSnafu, Result, ResultTypeSnafu,
            UnsupportedResultSnafu,
        },
        table::Table,
    },
    common::log::LogError,
    def::{Column, DataType, Schema},
    expr::{Bindings, Evaluate, Expression},
    snafu::prelude::*,
};

impl Table {
    /// Keeps the named columns, in schema order.
    pub fn project<S: AsRef<str>>(&self, columns: &[S]) -> Result<Table> {
        let columns = columns.iter().map(AsRef::as_ref).collect::<Vec<_>>();
        if let Some(unknown) = columns.iter().find(|name| self.schema.index_of(name).is_none()) {
            return ColumnNotFoundSnafu { column: *unknown }.fail().log_error();
        }

        let kept = self
            .schema
            .columns()
            .iter()
            .enumerate()
            .filter(|(_, col)| columns.contains(&col.name.as_str()))
            .map(|(idx, _)| idx)
            .collect::<Vec<_>>();

        let schema = Schema::new(
            kept.iter()
                .map(|&idx| self.schema.columns()[idx].clone())
                .collect(),
        )
        .context(ColumnsSnafu)
        .log_error()?;
        let rows = self
            .rows
            .iter()
            .map(|row| kept.iter().map(|&idx| row[idx].clone()).collect())
            .collect();

        Ok(self.derive(format!("({}π)", self.name()), schema, rows))
    }

    /// Appends a column computed by `expression`, named `alias` or, without
    /// one, after the expression itself.
    ///
    /// The column takes the type of the first non-null result and every
    /// other result must match it. When all results are null the column is
    /// text.
    pub fn extend(&self, expression: &Expression, alias: Option<&str>) -> Result<Table> {
        let mut data_type: Option<DataType> = None;
        let mut rows = Vec::with_capacity(self.rows.len());

        for row in &self.rows {
            let datum = expression
                .evaluate(&Bindings::new(&self.schema, row))
                .with_context(|_| EvaluateSnafu {
                    expression: expression.to_string(),
                })
                .log_error()?;

            let type_name = datum.type_name();
            let value = datum
                .into_value()
                .with_context(|| UnsupportedResultSnafu {
                    expression: expression.to_string(),
                    type_name,
                })
                .log_error()?;

            if let Some(found) = value.data_type() {
                match data_type {
                    None => data_type = Some(found),
                    Some(expected) if expected != found => {
                        return ResultTypeSnafu {
                            expression: expression.to_string(),
                            expected,
                            found,
                        }
                        .fail()
                        .log_error();
                    }
                    Some(_) => {}
                }
            }

            let mut row = row.clone();
            row.push(value);
            rows.push(row);
        }

        let name = alias.map_or_else(|| expression.to_string(), str::to_string);
        let mut schema = self.schema.clone();
        schema
            .push(Column::new(name, data_type.unwrap_or(DataType::Text)))
            .context(ColumnsSnafu)
            .log_error()?;

        Ok(self.derive(format!("({}Π)", self.name()), schema, rows))
    }
}

#[cfg(test)]
mod tests {
    use {
        crate::{Error, ErrorKind, Table},
        def::{row, DataType, Schema, Value},
        expr::Expression,
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
    fn project() {
        let a = table();

        let projected = a.project(&["valor", "chave"]).unwrap();
        assert_eq!(projected.name(), "(Aπ)");
        assert_eq!(projected.schema().names().collect::<Vec<_>>(), ["chave", "valor"]);
        assert_eq!(projected.rows(), [row![1, 0.55], row![3, None::<f64>]]);

        let err = a.project(&["chave", "nope"]).unwrap_err();
        assert!(matches!(err, Error::ColumnNotFound { column } if column == "nope"));
        assert_eq!(a.project::<&str>(&[]).unwrap().schema().len(), 0);
    }

    #[test]
    fn extend() {
        let a = table();

        let expr = Expression::from_json(&json!({"add": ["valor", 2]})).unwrap();
        let extended = a.extend(&expr, None).unwrap();
        assert_eq!(extended.name(), "(AΠ)");
        assert_eq!(extended.schema().columns()[3].name, "add(valor,2)");
        assert_eq!(extended.schema().columns()[3].data_type, DataType::Float);
        assert!(matches!(extended.rows()[0][3], Value::Float(v) if (v - 2.55).abs() < 1e-9));
        assert_eq!(extended.rows()[1][3], Value::Null);

        let expr = Expression::from_json(&json!({"mul": ["chave", 10]})).unwrap();
        let extended = a.extend(&expr, Some("dez")).unwrap();
        assert_eq!(extended.read(1).get("dez"), Some(&Value::Integer(30)));
        assert_eq!(extended.schema().columns()[3].data_type, DataType::Integer);

        let expr = Expression::from_json(&json!({"add": ["valor", null]})).unwrap();
        let extended = a.extend(&expr, Some("nada")).unwrap();
        assert_eq!(extended.schema().columns()[3].data_type, DataType::Text);
    }

    #[test]
    fn extend_errors() {
        let a = table();

        let expr = Expression::from_json(&json!({"eq": ["chave", 1]})).unwrap();
        let err = a.extend(&expr, Some("flag")).unwrap_err();
        assert!(matches!(err, Error::UnsupportedResult { type_name: "boolean", .. }));
        assert_eq!(err.kind(), ErrorKind::Data);

        let expr = Expression::from_json(&json!({"add": ["desc", "chave"]})).unwrap();
        assert!(matches!(a.extend(&expr, None), Err(Error::Evaluate { .. })));

        let expr = Expression::from_json(&json!({"literal": 1})).unwrap();
        let err = a.extend(&expr, Some("chave")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Column);
    }
}
