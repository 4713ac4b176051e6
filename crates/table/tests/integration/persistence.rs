use {
    crate::schema,
    std::fs,
    storage::{Config, Store},
    table::{row, AlterOp, DataType, ErrorKind, Table, Value},
    tempfile::tempdir,
};

fn store(path: &std::path::Path) -> Store {
    Store::open(Config::with_data_dir(path)).unwrap()
}

#[test]
fn table_data() {
    let temp_dir = tempdir().unwrap();
    let store = store(temp_dir.path());

    let table = Table::new(
        &store,
        "pytest.test",
        Some(schema()),
        Some(vec![row![1, "a", 0.55], row![2, "b", 1.05], row![3, "c", 9.99]]),
    )
    .unwrap();

    assert_eq!(table.database(), "pytest");
    assert!(table.location().unwrap().starts_with(temp_dir.path()));
    assert_eq!(table.len(), 3);
    assert_eq!(table.read(1).get("desc"), Some(&Value::from("b")));
    assert!(table.read(3).is_empty());

    temp_dir.close().unwrap();
}

#[test]
fn save_load_drop() {
    let temp_dir = tempdir().unwrap();
    let store = store(temp_dir.path());

    let table = Table::new(
        &store,
        "pytest.test",
        Some(schema()),
        Some(vec![row![1, "a", 0.55], row![2, "b", None::<f64>]]),
    )
    .unwrap();
    let location = table.location().unwrap();
    assert_eq!(location, temp_dir.path().join("pytest").join("test.csv"));

    table.save().unwrap();

    // a fresh store reads the catalog from disk again
    let loaded = Table::open(&self::store(temp_dir.path()), "pytest.test").unwrap();
    assert_eq!(loaded.schema(), table.schema());
    assert_eq!(loaded.rows(), table.rows());

    let catalog = fs::read_to_string(temp_dir.path().join("catalog.json")).unwrap();
    let catalog: serde_json::Value = serde_json::from_str(&catalog).unwrap();
    assert_eq!(
        catalog["pytest.test"],
        serde_json::json!({
            "name": "pytest.test",
            "columns": {"chave": "integer", "desc": "text", "valor": "float"}
        })
    );

    table.drop().unwrap();
    assert!(!location.exists());
    assert_eq!(
        Table::open(&store, "pytest.test").unwrap_err().kind(),
        ErrorKind::Table
    );

    temp_dir.close().unwrap();
}

#[test]
fn default_database() {
    let temp_dir = tempdir().unwrap();
    let store = store(temp_dir.path());

    let table = Table::new(&store, "bare", Some(schema()), None).unwrap();
    assert_eq!(table.full_name(), "default.bare");
    table.save().unwrap();

    assert!(temp_dir.path().join("default").join("bare.csv").exists());

    temp_dir.close().unwrap();
}

#[test]
fn derived_tables_can_be_saved() {
    let temp_dir = tempdir().unwrap();
    let store = store(temp_dir.path());

    let table = Table::new(
        &store,
        "pytest.A",
        Some(schema()),
        Some(vec![row![1, "a", 0.55], row![3, "c", None::<f64>]]),
    )
    .unwrap();

    let renamed = table.project(&["chave", "valor"]).unwrap().rename("small").unwrap();
    assert!(!renamed.is_temporary());
    renamed.save().unwrap();

    let loaded = Table::open(&store, "pytest.small").unwrap();
    assert_eq!(loaded.rows(), [row![1, 0.55], row![3, None::<f64>]]);

    temp_dir.close().unwrap();
}

#[test]
fn alter_and_save() {
    let temp_dir = tempdir().unwrap();
    let store = store(temp_dir.path());

    let mut table = Table::new(
        &store,
        "pytest.test",
        Some(schema()),
        Some(vec![row![1, "10", 0.55]]),
    )
    .unwrap();

    table.alter(AlterOp::Modify, "desc", Some(DataType::Integer)).unwrap();
    table.alter(AlterOp::Add, "extra", Some(DataType::Float)).unwrap();
    table.save().unwrap();

    let loaded = Table::open(&store, "pytest.test").unwrap();
    assert_eq!(loaded.schema().columns()[1].data_type, DataType::Integer);
    assert_eq!(loaded.rows(), [row![1, 10, 0.55, 0.0]]);

    let err = table.append(row![1, "x", 0.1, "y"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Data);
    assert_eq!(table.len(), 1);

    temp_dir.close().unwrap();
}
