use {
    crate::{
        error::{
            ColumnNotFoundSnafu, ColumnsSnafu, Error, MissingTypeSnafu, ModifyColumnSnafu, Result,
            UnknownAlterationSnafu,
        },
        table::Table,
    },
    common::log::LogError,
    def::{Column, DataType},
    snafu::prelude::*,
    std::{fmt::Display, str::FromStr},
    tracing::info,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlterOp {
    Add,
    Drop,
    Modify,
}

impl AlterOp {
    pub fn name(self) -> &'static str {
        match self {
            AlterOp::Add => "ADD",
            AlterOp::Drop => "DROP",
            AlterOp::Modify => "MODIFY",
        }
    }
}

impl FromStr for AlterOp {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_uppercase().as_str() {
            "ADD" => Ok(AlterOp::Add),
            "DROP" => Ok(AlterOp::Drop),
            "MODIFY" => Ok(AlterOp::Modify),
            _ => UnknownAlterationSnafu { name: s }.fail().log_error(),
        }
    }
}

impl Display for AlterOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl Table {
    /// Changes the schema in memory. [`Table::save`] persists it.
    pub fn alter(&mut self, op: AlterOp, column: &str, data_type: Option<DataType>) -> Result<()> {
        if op == AlterOp::Drop {
            return self.drop_column(column);
        }

        let data_type = data_type
            .context(MissingTypeSnafu {
                op: op.name(),
                column,
            })
            .log_error()?;

        match op {
            AlterOp::Add => self.add_column(column, data_type),
            _ => self.modify_column(column, data_type),
        }
    }

    /// Appends a column holding the type's default value in every row.
    pub fn add_column(&mut self, name: &str, data_type: DataType) -> Result<()> {
        self.schema
            .push(Column::new(name, data_type))
            .context(ColumnsSnafu)
            .log_error()?;
        for row in &mut self.rows {
            row.push(data_type.default_value());
        }

        info!("added column {} {} to {}", name, data_type, self.id);
        Ok(())
    }

    pub fn drop_column(&mut self, name: &str) -> Result<()> {
        let (idx, _) = self
            .schema
            .remove(name)
            .context(ColumnNotFoundSnafu { column: name })
            .log_error()?;
        for row in &mut self.rows {
            row.remove(idx);
        }

        info!("dropped column {} from {}", name, self.id);
        Ok(())
    }

    /// Converts every value of the column. Either all rows convert or the
    /// table is left as it was.
    pub fn modify_column(&mut self, name: &str, data_type: DataType) -> Result<()> {
        let idx = self
            .schema
            .index_of(name)
            .context(ColumnNotFoundSnafu { column: name })
            .log_error()?;

        let converted = self
            .rows
            .iter()
            .map(|row| data_type.coerce(row[idx].clone()))
            .collect::<def::Result<Vec<_>>>()
            .context(ModifyColumnSnafu {
                column: name,
                data_type,
            })
            .log_error()?;

        for (row, value) in self.rows.iter_mut().zip(converted) {
            row[idx] = value;
        }
        self.schema.set_type(idx, data_type);

        info!("changed column {} of {} to {}", name, self.id, data_type);
        Ok(())
    }
}
