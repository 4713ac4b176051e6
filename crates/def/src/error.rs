use {
    crate::DataType,
    snafu::{prelude::*, Backtrace},
};

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("cannot convert {:?} to {}", value, data_type))]
    Convert {
        value: String,
        data_type: DataType,
        backtrace: Backtrace,
    },

    #[snafu(display("unknown data type {:?}", name))]
    UnknownType { name: String },

    #[snafu(display("got {} values for a row of {} columns", found, expected))]
    Arity {
        expected: usize,
        found: usize,
        backtrace: Backtrace,
    },

    #[snafu(display("invalid value for column {:?}: {}", column, source))]
    ColumnValue {
        column: String,
        #[snafu(source(from(Error, Box::new)))]
        source: Box<Error>,
    },

    #[snafu(display("column {:?} is defined more than once", name))]
    DuplicateColumn { name: String },
}

pub type Result<T> = std::result::Result<T, Error>;
