use {
    crate::{
        catalog::Catalog,
        config::Config,
        database::{Database, SharedCatalog},
        error::Result,
        file,
    },
    def::TableId,
    std::{
        cell::{Ref, RefCell, RefMut},
        path::PathBuf,
        rc::Rc,
    },
};

/// Handle to one storage root. Clones share the same catalog, which is read
/// from disk once, when the store is opened.
#[derive(Debug, Clone)]
pub struct Store {
    inner: Rc<Inner>,
}

#[derive(Debug)]
struct Inner {
    config: Config,
    catalog: SharedCatalog,
}

impl Store {
    pub fn open(config: Config) -> Result<Self> {
        let catalog = Catalog::open(config.catalog_path())?;

        Ok(Self {
            inner: Rc::new(Inner {
                config,
                catalog: Rc::new(RefCell::new(catalog)),
            }),
        })
    }

    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    pub fn catalog(&self) -> Ref<'_, Catalog> {
        self.inner.catalog.borrow()
    }

    pub fn catalog_mut(&self) -> RefMut<'_, Catalog> {
        self.inner.catalog.borrow_mut()
    }

    /// Splits a table identifier, falling back to the default database.
    pub fn resolve(&self, id: &str) -> TableId {
        TableId::parse(id, &self.inner.config.default_database)
    }

    /// Opens the database called `name`, creating its directory if needed.
    pub fn database(&self, name: &str) -> Result<Database> {
        Database::new(name, &self.inner.config.data_dir, self.inner.catalog.clone())
    }

    /// Location of the data file of `id`, whether or not it exists.
    pub fn table_path(&self, id: &TableId) -> PathBuf {
        self.inner
            .config
            .data_dir
            .join(&id.database)
            .join(format!("{}.{}", id.name, file::EXTENSION))
    }
}
