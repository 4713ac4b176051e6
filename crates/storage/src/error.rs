use {
    snafu::{prelude::*, Backtrace},
    std::{io, path::PathBuf},
};

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("failed to create directory {}: {}", path.display(), source))]
    CreateDirectory { path: PathBuf, source: io::Error },

    #[snafu(display("failed to read {}: {}", path.display(), source))]
    ReadFile { path: PathBuf, source: io::Error },

    #[snafu(display("failed to write {}: {}", path.display(), source))]
    WriteFile { path: PathBuf, source: io::Error },

    #[snafu(display("failed to remove {}: {}", path.display(), source))]
    RemoveFile { path: PathBuf, source: io::Error },

    #[snafu(display("malformed catalog {}: {}", path.display(), source))]
    CatalogFormat {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[snafu(display("table {} is not registered in the catalog", id))]
    TableNotFound { id: String, backtrace: Backtrace },

    #[snafu(display("malformed data file {}: {}", path.display(), source))]
    Csv { path: PathBuf, source: csv::Error },

    #[snafu(display("{}:{}: expected {} fields, found {}", path.display(), line, expected, found))]
    FieldCount {
        path: PathBuf,
        line: u64,
        expected: usize,
        found: usize,
    },

    #[snafu(display("{}:{}: {}", path.display(), line, source))]
    Field {
        path: PathBuf,
        line: u64,
        #[snafu(backtrace)]
        source: def::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
