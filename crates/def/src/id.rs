use std::fmt::Display;

/// Full table identifier, `database.name`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TableId {
    pub database: String,
    pub name: String,
}

impl TableId {
    pub const SEPARATOR: char = '.';

    pub fn new(database: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            database: database.into(),
            name: name.into(),
        }
    }

    /// Splits `id` on the separator when it occurs exactly once; otherwise the
    /// whole string names a table in `default_database`.
    pub fn parse(id: &str, default_database: &str) -> Self {
        match id.split_once(Self::SEPARATOR) {
            Some((database, name)) if !name.contains(Self::SEPARATOR) => {
                Self::new(database, name)
            }
            _ => Self::new(default_database, id),
        }
    }
}

impl Display for TableId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}{}", self.database, Self::SEPARATOR, self.name)
    }
}
