use {
    crate::{
        catalog::Catalog,
        error::{CreateDirectorySnafu, Result},
        file,
    },
    common::log::LogError,
    snafu::prelude::*,
    std::{
        cell::{Ref, RefCell, RefMut},
        fs,
        path::{Path, PathBuf},
        rc::Rc,
    },
    tracing::debug,
};

pub type SharedCatalog = Rc<RefCell<Catalog>>;

/// A namespace of tables: one directory under the data root.
#[derive(Debug, Clone)]
pub struct Database {
    name: String,
    location: PathBuf,
    catalog: SharedCatalog,
}

impl Database {
    pub(crate) fn new(name: &str, root: &Path, catalog: SharedCatalog) -> Result<Self> {
        Ok(Self {
            name: name.to_string(),
            location: Self::create_location(root, name)?,
            catalog,
        })
    }

    /// Creates `root/name` unless it already exists.
    pub fn create_location(root: &Path, name: &str) -> Result<PathBuf> {
        let path = root.join(name);
        if !path.is_dir() {
            fs::create_dir_all(&path)
                .context(CreateDirectorySnafu { path: &path })
                .log_error()?;
            debug!("create:path:{}", path.display());
        }

        Ok(path)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location(&self) -> &Path {
        &self.location
    }

    pub fn table_path(&self, table: &str) -> PathBuf {
        self.location.join(format!("{}.{}", table, file::EXTENSION))
    }

    pub fn catalog(&self) -> Ref<'_, Catalog> {
        self.catalog.borrow()
    }

    pub fn catalog_mut(&self) -> RefMut<'_, Catalog> {
        self.catalog.borrow_mut()
    }
}
