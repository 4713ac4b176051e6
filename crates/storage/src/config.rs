use {
    common::pub_fields_struct,
    std::{env, path::PathBuf},
};

pub_fields_struct! {
    /// Where tables and the catalog live, and which database a bare table
    /// name belongs to.
    #[derive(Debug, Clone, PartialEq)]
    struct Config {
        /// Root of all database directories.
        data_dir: PathBuf,
        default_database: String,
        /// Catalog file name, relative to `data_dir`.
        catalog_file: String,
    }
}

impl Config {
    pub const DATA_DIR_ENV: &'static str = "RELCSV_DATA_DIR";
    pub const DEFAULT_DATABASE_ENV: &'static str = "RELCSV_DEFAULT_DB";
    pub const CATALOG_FILE_ENV: &'static str = "RELCSV_CATALOG";

    /// Defaults, overridden by whichever environment variables are set.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            data_dir: env::var_os(Self::DATA_DIR_ENV)
                .map(PathBuf::from)
                .unwrap_or(defaults.data_dir),
            default_database: env::var(Self::DEFAULT_DATABASE_ENV)
                .unwrap_or(defaults.default_database),
            catalog_file: env::var(Self::CATALOG_FILE_ENV).unwrap_or(defaults.catalog_file),
        }
    }

    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Self::default()
        }
    }

    pub fn catalog_path(&self) -> PathBuf {
        self.data_dir.join(&self.catalog_file)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            default_database: "default".to_string(),
            catalog_file: "catalog.json".to_string(),
        }
    }
}
