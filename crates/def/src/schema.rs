use {
    crate::{
        error::{AritySnafu, ColumnValueSnafu, DuplicateColumnSnafu, Result},
        DataType, Row, Value,
    },
    common::pub_fields_struct,
    serde::{
        de::{MapAccess, Visitor},
        ser::SerializeMap,
        Deserialize, Deserializer, Serialize, Serializer,
    },
    snafu::prelude::*,
    std::{collections::HashSet, fmt},
};

pub_fields_struct! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    struct Column {
        name: String,
        data_type: DataType,
    }
}

impl Column {
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
        }
    }
}

/// Ordered, name-unique list of columns. The order defines the positional
/// layout of rows and of data files.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Schema {
    columns: Vec<Column>,
}

impl Schema {
    pub fn new(columns: Vec<Column>) -> Result<Self> {
        let mut names = HashSet::new();
        for column in &columns {
            ensure!(
                names.insert(column.name.as_str()),
                DuplicateColumnSnafu { name: &column.name }
            );
        }

        Ok(Self { columns })
    }

    pub fn from_pairs(pairs: &[(&str, DataType)]) -> Result<Self> {
        Self::new(
            pairs
                .iter()
                .map(|(name, data_type)| Column::new(*name, *data_type))
                .collect(),
        )
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|col| col.name.as_str())
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|col| col.name == name)
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|col| col.name == name)
    }

    pub fn push(&mut self, column: Column) -> Result<()> {
        ensure!(
            self.index_of(&column.name).is_none(),
            DuplicateColumnSnafu { name: column.name }
        );
        self.columns.push(column);

        Ok(())
    }

    pub fn remove(&mut self, name: &str) -> Option<(usize, Column)> {
        let idx = self.index_of(name)?;
        Some((idx, self.columns.remove(idx)))
    }

    /// Replaces the type of the column at `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is out of bounds.
    pub fn set_type(&mut self, idx: usize, data_type: DataType) {
        self.columns[idx].data_type = data_type;
    }

    pub fn empty_row(&self) -> Row {
        vec![Value::Null; self.columns.len()]
    }

    /// Checks the arity of `values` and coerces each non-null value into its
    /// column's type.
    pub fn coerce(&self, values: Row) -> Result<Row> {
        ensure!(
            values.len() == self.columns.len(),
            AritySnafu {
                expected: self.columns.len(),
                found: values.len(),
            }
        );

        values
            .into_iter()
            .zip(&self.columns)
            .map(|(value, col)| {
                col.data_type
                    .coerce(value)
                    .context(ColumnValueSnafu { column: &col.name })
            })
            .collect()
    }

    /// Prefixes every column with `table.` unless it is already qualified.
    pub fn qualified(&self, table: &str) -> Result<Self> {
        Self::new(
            self.columns
                .iter()
                .map(|col| Column::new(qualify(table, &col.name), col.data_type))
                .collect(),
        )
    }

    /// Strips the table qualifier from every column.
    pub fn unqualified(&self) -> Result<Self> {
        Self::new(
            self.columns
                .iter()
                .map(|col| Column::new(unqualify(&col.name), col.data_type))
                .collect(),
        )
    }

    pub fn concat(&self, other: &Self) -> Result<Self> {
        Self::new([&self.columns[..], &other.columns[..]].concat())
    }
}

pub fn qualify(table: &str, column: &str) -> String {
    if column.contains('.') {
        column.to_string()
    } else {
        format!("{}.{}", table, column)
    }
}

fn unqualify(column: &str) -> &str {
    column.rsplit('.').next().unwrap_or(column)
}

impl Serialize for Schema {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for col in &self.columns {
            map.serialize_entry(&col.name, &col.data_type)?;
        }
        map.end()
    }
}

struct SchemaVisitor;

impl<'de> Visitor<'de> for SchemaVisitor {
    type Value = Schema;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an object mapping column names to types")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> std::result::Result<Schema, A::Error> {
        let mut columns = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((name, data_type)) = access.next_entry::<String, DataType>()? {
            columns.push(Column::new(name, data_type));
        }

        Schema::new(columns).map_err(serde::de::Error::custom)
    }
}

impl<'de> Deserialize<'de> for Schema {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_map(SchemaVisitor)
    }
}
