use {
    super::{Bindings, Datum, Evaluate, Result},
    std::fmt,
};

impl Evaluate for Datum {
    fn evaluate(&self, _: &Bindings) -> Result<Datum> {
        Ok(self.clone())
    }
}

/// Texts are quoted so that they cannot be mistaken for column names.
pub(crate) fn fmt_literal(datum: &Datum, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match datum {
        Datum::Text(v) => write!(f, "'{}'", v),
        Datum::List(items) => {
            f.write_str("[")?;
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    f.write_str(",")?;
                }
                fmt_literal(item, f)?;
            }
            f.write_str("]")
        }
        v => write!(f, "{}", v),
    }
}
