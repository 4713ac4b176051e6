use {
    crate::error::{
        CatalogFormatSnafu, CreateDirectorySnafu, ReadFileSnafu, Result, TableNotFoundSnafu,
        WriteFileSnafu,
    },
    common::{log::LogError, pub_fields_struct},
    def::{Schema, TableId},
    serde::{Deserialize, Serialize},
    snafu::prelude::*,
    std::{
        collections::BTreeMap,
        fs, io,
        path::{Path, PathBuf},
    },
    tracing::{debug, info},
};

pub_fields_struct! {
    /// One catalog entry, as stored on disk.
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct TableDefinition {
        name: String,
        columns: Schema,
    }
}

/// Registry of table schemas keyed by full table identifier, backed by a
/// single JSON document that is rewritten on every change.
#[derive(Debug)]
pub struct Catalog {
    path: PathBuf,
    entries: BTreeMap<String, TableDefinition>,
}

impl Catalog {
    /// Loads the catalog at `path`, creating its directory and an empty
    /// document when the file does not exist yet.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        let entries = match fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content)
                .context(CatalogFormatSnafu { path: &path })
                .log_error()?,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                info!("creating new catalog in {}", path.display());
                if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
                    fs::create_dir_all(dir)
                        .context(CreateDirectorySnafu { path: dir })
                        .log_error()?;
                }

                let catalog = Self {
                    path,
                    entries: BTreeMap::new(),
                };
                catalog.save()?;
                return Ok(catalog);
            }
            Err(err) => return Err(err).context(ReadFileSnafu { path }).log_error(),
        };

        debug!("loaded catalog {}", path.display());
        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn contains(&self, id: &TableId) -> bool {
        self.entries.contains_key(&id.to_string())
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn definition(&self, id: &TableId) -> Result<&TableDefinition> {
        self.entries
            .get(&id.to_string())
            .context(TableNotFoundSnafu { id: id.to_string() })
            .log_error()
    }

    pub fn get(&self, id: &TableId) -> Result<Schema> {
        self.definition(id).map(|def| def.columns.clone())
    }

    /// Registers or replaces the schema of `id` and rewrites the document.
    /// The in-memory entry is restored if the rewrite fails.
    pub fn set(&mut self, id: &TableId, schema: Schema) -> Result<()> {
        let key = id.to_string();
        let previous = self.entries.insert(
            key.clone(),
            TableDefinition {
                name: key.clone(),
                columns: schema,
            },
        );

        self.save().map_err(|err| {
            match previous {
                Some(def) => self.entries.insert(key, def),
                None => self.entries.remove(&key),
            };
            err
        })
    }

    pub fn delete(&mut self, id: &TableId) -> Result<TableDefinition> {
        let key = id.to_string();
        let removed = self
            .entries
            .remove(&key)
            .context(TableNotFoundSnafu { id: &key })
            .log_error()?;

        self.save().map_err(|err| {
            self.entries.insert(key, removed.clone());
            err
        })?;

        Ok(removed)
    }

    fn save(&self) -> Result<()> {
        // serializing string keys and schemas cannot fail
        let content = serde_json::to_string_pretty(&self.entries)
            .context(CatalogFormatSnafu { path: &self.path })
            .log_error()?;

        fs::write(&self.path, content)
            .context(WriteFileSnafu { path: &self.path })
            .log_error()
    }
}
