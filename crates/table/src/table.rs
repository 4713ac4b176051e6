use {
    crate::{
        error::{
            DropMissingSnafu, InvalidRowSnafu, MissingSchemaSnafu, Result, RowIndexSnafu,
            StorageSnafu, TemporarySnafu,
        },
        record::Record,
    },
    common::log::LogError,
    def::{Row, Schema, TableId},
    snafu::prelude::*,
    std::{path::PathBuf, slice},
    storage::{file, Store, TableDefinition},
    tracing::{debug, info},
};

/// Database that temporary tables report when their identifier names none.
pub const TEMPORARY_DATABASE: &str = "temp";

/// An ordered list of typed rows under a schema.
///
/// Tables created through a [`Store`] can be saved, cleaned and dropped.
/// Temporary tables live in memory only, and so do the tables produced by
/// the relational operators until they are saved.
#[derive(Debug, Clone)]
pub struct Table {
    pub(crate) id: TableId,
    pub(crate) schema: Schema,
    pub(crate) rows: Vec<Row>,
    pub(crate) store: Option<Store>,
}

impl Table {
    /// Builds an in-memory table. Every row is coerced into `schema`.
    pub fn temporary(id: &str, schema: Schema, rows: Vec<Row>) -> Result<Self> {
        let id = TableId::parse(id, TEMPORARY_DATABASE);
        let rows = coerce_rows(&id, &schema, rows).log_error()?;

        Ok(Self {
            id,
            schema,
            rows,
            store: None,
        })
    }

    /// Binds `id` to `store`, creating its database directory if needed.
    ///
    /// An existing data file is loaded with the schema registered in the
    /// catalog, and `schema` is ignored. Otherwise `schema` is required.
    /// `rows`, when given, replace whatever the file holds.
    pub fn new(
        store: &Store,
        id: &str,
        schema: Option<Schema>,
        rows: Option<Vec<Row>>,
    ) -> Result<Self> {
        let id = store.resolve(id);
        let database = store
            .database(&id.database)
            .context(StorageSnafu)
            .log_error()?;
        let path = database.table_path(&id.name);

        let (schema, rows) = if path.exists() {
            let schema = database.catalog().get(&id).context(StorageSnafu)?;
            let rows = match rows {
                Some(rows) => rows,
                None => file::read_rows(&path, &schema)
                    .context(StorageSnafu)
                    .log_error()?,
            };
            (schema, rows)
        } else {
            let schema = schema
                .context(MissingSchemaSnafu { id: id.clone() })
                .log_error()?;
            (schema, rows.unwrap_or_default())
        };

        let rows = coerce_rows(&id, &schema, rows).log_error()?;
        debug!("create:table:{} ({} rows)", id, rows.len());

        Ok(Self {
            id,
            schema,
            rows,
            store: Some(store.clone()),
        })
    }

    /// Loads a saved table.
    pub fn open(store: &Store, id: &str) -> Result<Self> {
        Self::new(store, id, None, None)
    }

    pub fn id(&self) -> &TableId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.id.name
    }

    pub fn database(&self) -> &str {
        &self.id.database
    }

    pub fn full_name(&self) -> String {
        self.id.to_string()
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn iter(&self) -> slice::Iter<'_, Row> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn is_temporary(&self) -> bool {
        self.store.is_none()
    }

    /// Path of the data file, `None` for temporary tables.
    pub fn location(&self) -> Option<PathBuf> {
        self.store.as_ref().map(|store| store.table_path(&self.id))
    }

    /// The catalog entry this table saves.
    pub fn definition(&self) -> TableDefinition {
        TableDefinition {
            name: self.full_name(),
            columns: self.schema.clone(),
        }
    }

    /// A row of nulls shaped like the schema.
    pub fn empty_row(&self) -> Row {
        self.schema.empty_row()
    }

    pub fn append(&mut self, values: Row) -> Result<()> {
        let row = self.coerce(values).log_error()?;
        self.rows.push(row);
        debug!("Row inserted");

        Ok(())
    }

    pub fn update(&mut self, index: usize, values: Row) -> Result<()> {
        self.check_index(index).log_error()?;
        let row = self.coerce(values).log_error()?;
        self.rows[index] = row;
        debug!("Row updated");

        Ok(())
    }

    pub fn delete(&mut self, index: usize) -> Result<Row> {
        self.check_index(index).log_error()?;
        let row = self.rows.remove(index);
        debug!("Row deleted");

        Ok(row)
    }

    /// Returns row `index` keyed by column name. Past the last row every
    /// field is null.
    pub fn read(&self, index: usize) -> Record {
        let row = self.rows.get(index).cloned().unwrap_or_else(|| self.empty_row());

        Record::new(self.schema.names().map(str::to_string).zip(row).collect())
    }

    /// Writes the data file, then registers the schema in the catalog.
    ///
    /// Null and empty text are both written as an empty field, so empty text
    /// reads back as null.
    pub fn save(&self) -> Result<()> {
        let store = self.store_for("save").log_error()?;
        let database = store
            .database(&self.id.database)
            .context(StorageSnafu)
            .log_error()?;

        file::write_rows(&database.table_path(&self.id.name), &self.rows)
            .context(StorageSnafu)
            .log_error()?;
        database
            .catalog_mut()
            .set(&self.id, self.schema.clone())
            .context(StorageSnafu)
            .log_error()?;

        info!("saved table {} ({} rows)", self.id, self.rows.len());
        Ok(())
    }

    /// Removes the data file and the catalog entry. Nothing is removed
    /// unless both exist.
    pub fn drop(self) -> Result<()> {
        let store = self.store_for("drop").log_error()?;
        let path = store.table_path(&self.id);

        let target = if !path.exists() {
            Some("data file")
        } else if !store.catalog().contains(&self.id) {
            Some("catalog entry")
        } else {
            None
        };
        if let Some(target) = target {
            return DropMissingSnafu {
                id: self.id.clone(),
                target,
            }
            .fail()
            .log_error();
        }

        file::remove(&path).context(StorageSnafu).log_error()?;
        store
            .catalog_mut()
            .delete(&self.id)
            .context(StorageSnafu)
            .log_error()?;

        info!("dropped table {}", self.id);
        Ok(())
    }

    /// Removes every row and, unless the table is temporary, leaves an
    /// empty data file behind.
    pub fn clean(&mut self) -> Result<()> {
        self.rows.clear();

        if let Some(store) = &self.store {
            store
                .database(&self.id.database)
                .and_then(|database| file::truncate(&database.table_path(&self.id.name)))
                .context(StorageSnafu)
                .log_error()?;
        }

        info!("cleaned table {}", self.id);
        Ok(())
    }

    fn store_for(&self, action: &'static str) -> Result<&Store> {
        self.store.as_ref().context(TemporarySnafu {
            id: self.id.clone(),
            action,
        })
    }

    fn coerce(&self, values: Row) -> Result<Row> {
        self.schema
            .coerce(values)
            .context(InvalidRowSnafu { id: self.id.clone() })
    }

    fn check_index(&self, index: usize) -> Result<()> {
        ensure!(
            index < self.rows.len(),
            RowIndexSnafu {
                index,
                len: self.rows.len(),
            }
        );

        Ok(())
    }
}

fn coerce_rows(id: &TableId, schema: &Schema, rows: Vec<Row>) -> Result<Vec<Row>> {
    rows.into_iter()
        .map(|row| schema.coerce(row).context(InvalidRowSnafu { id: id.clone() }))
        .collect()
}

impl<'a> IntoIterator for &'a Table {
    type Item = &'a Row;
    type IntoIter = slice::Iter<'a, Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::{Error, ErrorKind},
        def::{row, DataType, Value},
        std::fs,
        storage::Config,
        tempfile::tempdir,
    };

    fn schema() -> Schema {
        Schema::from_pairs(&[
            ("chave", DataType::Integer),
            ("desc", DataType::Text),
            ("valor", DataType::Float),
        ])
        .unwrap()
    }

    #[test]
    fn crud() {
        let mut table = Table::temporary("pytest.test", schema(), vec![]).unwrap();
        assert!(table.is_temporary());
        assert_eq!(table.full_name(), "pytest.test");

        table.append(row![1, "a", 0.55]).unwrap();
        table.append(row!["2", "b", 1]).unwrap();
        assert_eq!(table.rows()[1], row![2, "b", 1.0]);

        table.update(0, row![3, "c", None::<f64>]).unwrap();
        assert_eq!(table.read(0).get("chave"), Some(&Value::Integer(3)));
        assert_eq!(table.read(0).get("valor"), Some(&Value::Null));

        assert_eq!(table.delete(1).unwrap(), row![2, "b", 1.0]);
        assert_eq!(table.len(), 1);

        let ghost = table.read(5);
        assert!(ghost.is_empty());
        assert_eq!(ghost.fields().len(), 3);
    }

    #[test]
    fn reject_bad_rows() {
        let mut table = Table::temporary("test", schema(), vec![]).unwrap();
        assert_eq!(table.database(), TEMPORARY_DATABASE);

        let err = table.append(row![1, "a"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Data);
        let err = table.append(row!["x", "a", 0.1]).unwrap_err();
        assert!(matches!(err, Error::InvalidRow { .. }));
        assert!(table.is_empty());

        assert!(matches!(
            table.update(0, row![1, "a", 0.1]),
            Err(Error::RowIndex { index: 0, len: 0 })
        ));
        assert!(matches!(table.delete(0), Err(Error::RowIndex { .. })));

        assert!(Table::temporary("test", schema(), vec![row![1]]).is_err());
    }

    #[test]
    fn temporary_tables_stay_in_memory() {
        let mut table = Table::temporary("test", schema(), vec![row![1, "a", 0.5]]).unwrap();

        assert!(matches!(
            table.save(),
            Err(Error::Temporary { action: "save", .. })
        ));
        table.clean().unwrap();
        assert!(table.is_empty());
        assert_eq!(table.location(), None);
        assert!(matches!(table.drop(), Err(Error::Temporary { .. })));
    }

    #[test]
    fn save_and_reload() {
        let temp_dir = tempdir().unwrap();
        let store = Store::open(Config::with_data_dir(temp_dir.path())).unwrap();

        let table = Table::new(
            &store,
            "pytest.test",
            Some(schema()),
            Some(vec![row![1, "a", 0.55], row![3, "c", None::<f64>]]),
        )
        .unwrap();
        table.save().unwrap();

        let path = table.location().unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "1;a;0.55\n3;c;\n");
        assert_eq!(store.catalog().get(table.id()).unwrap(), schema());

        let loaded = Table::open(&store, "pytest.test").unwrap();
        assert_eq!(loaded.rows(), table.rows());
        assert_eq!(loaded.definition(), table.definition());

        // the catalog schema wins over the one given
        let other = Schema::from_pairs(&[("x", DataType::Text)]).unwrap();
        let reloaded = Table::new(&store, "pytest.test", Some(other), None).unwrap();
        assert_eq!(reloaded.schema(), &schema());

        let replaced = Table::new(&store, "pytest.test", None, Some(vec![])).unwrap();
        assert!(replaced.is_empty());

        temp_dir.close().unwrap();
    }

    #[test]
    fn failed_write_leaves_catalog_alone() {
        let temp_dir = tempdir().unwrap();
        let store = Store::open(Config::with_data_dir(temp_dir.path())).unwrap();

        let table = Table::new(
            &store,
            "pytest.test",
            Some(schema()),
            Some(vec![row![1, "a", 0.5]]),
        )
        .unwrap();
        fs::create_dir_all(table.location().unwrap()).unwrap();

        let err = table.save().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Storage);
        assert!(!store.catalog().contains(table.id()));

        temp_dir.close().unwrap();
    }

    #[test]
    fn empty_text_reads_back_as_null() {
        let temp_dir = tempdir().unwrap();
        let store = Store::open(Config::with_data_dir(temp_dir.path())).unwrap();

        let table = Table::new(
            &store,
            "pytest.test",
            Some(schema()),
            Some(vec![row![1, "", 0.5]]),
        )
        .unwrap();
        table.save().unwrap();

        let loaded = Table::open(&store, "pytest.test").unwrap();
        assert_eq!(loaded.rows(), [row![1, None::<String>, 0.5]]);

        temp_dir.close().unwrap();
    }

    #[test]
    fn missing_tables() {
        let temp_dir = tempdir().unwrap();
        let store = Store::open(Config::with_data_dir(temp_dir.path())).unwrap();

        let err = Table::open(&store, "pytest.nope").unwrap_err();
        assert!(matches!(err, Error::MissingSchema { .. }));
        assert_eq!(err.kind(), ErrorKind::Table);

        // a data file nobody registered
        fs::create_dir_all(temp_dir.path().join("pytest")).unwrap();
        fs::write(temp_dir.path().join("pytest").join("orphan.csv"), "").unwrap();
        let err = Table::open(&store, "pytest.orphan").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Table);

        temp_dir.close().unwrap();
    }

    #[test]
    fn clean_and_drop() {
        let temp_dir = tempdir().unwrap();
        let store = Store::open(Config::with_data_dir(temp_dir.path())).unwrap();

        let mut table =
            Table::new(&store, "pytest.test", Some(schema()), Some(vec![row![1, "a", 0.5]]))
                .unwrap();
        table.save().unwrap();
        let path = table.location().unwrap();

        table.clean().unwrap();
        assert!(table.is_empty());
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
        assert!(store.catalog().contains(table.id()));

        let id = table.id().clone();
        table.drop().unwrap();
        assert!(!path.exists());
        assert!(!store.catalog().contains(&id));

        let never_saved = Table::new(&store, "pytest.unsaved", Some(schema()), None).unwrap();
        assert!(matches!(
            never_saved.drop(),
            Err(Error::DropMissing {
                target: "data file",
                ..
            })
        ));

        temp_dir.close().unwrap();
    }
}
