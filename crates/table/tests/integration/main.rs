mod joins;
mod operations;
mod persistence;

use table::{row, DataType, Row, Schema, Table};

pub fn schema() -> Schema {
    Schema::from_pairs(&[
        ("chave", DataType::Integer),
        ("desc", DataType::Text),
        ("valor", DataType::Float),
    ])
    .unwrap()
}

pub fn a() -> Table {
    Table::temporary(
        "pytest.A",
        schema(),
        vec![row![1, "a", 0.55], row![3, "c", None::<f64>]],
    )
    .unwrap()
}

pub fn b() -> Table {
    Table::temporary(
        "pytest.B",
        schema(),
        vec![row![1, "a", 0.55], row![2, "b", 1.05]],
    )
    .unwrap()
}

pub fn names(table: &Table) -> Vec<&str> {
    table.schema().names().collect()
}

pub fn rows(table: &Table) -> Vec<Row> {
    table.rows().to_vec()
}
