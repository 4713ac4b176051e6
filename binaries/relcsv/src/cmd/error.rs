use snafu::prelude::*;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(super)))]
pub enum Error {
    #[snafu(display("Failed to open the data directory, source: {}", source))]
    Storage { source: storage::Error },

    #[snafu(display("{}", source))]
    Table { source: table::Error },

    #[snafu(display("Invalid column type, source: {}", source))]
    DataType { source: def::Error },

    #[snafu(display("Failed to render the definition of {}, source: {}", id, source))]
    Render {
        id: String,
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
