use {
    crate::{a, b, names, rows},
    serde_json::json,
    std::collections::HashSet,
    table::{row, Expression, Value},
};

#[test]
fn set_operations() {
    let (a, b) = (a(), b());

    assert_eq!(rows(&a.difference(&b)), [row![3, "c", None::<f64>]]);
    assert_eq!(rows(&a.intersect(&b)), [row![1, "a", 0.55]]);

    let union = a.union(&b);
    assert!(union.len() <= a.len() + b.len());
    assert_eq!(union.len(), 3);
    assert_eq!(union.iter().collect::<HashSet<_>>().len(), union.len());

    // A − (A ∩ B) == A − B
    assert_eq!(rows(&a.difference(&a.intersect(&b))), rows(&a.difference(&b)));
    // (A ∪ B) − B == A − B
    assert_eq!(rows(&union.difference(&b)), rows(&a.difference(&b)));
}

#[test]
fn product() {
    let (a, b) = (a(), b());
    let product = a.product(&b).unwrap();

    assert_eq!(product.len(), a.len() * b.len());
    assert_eq!(
        names(&product),
        ["A.chave", "A.desc", "A.valor", "B.chave", "B.desc", "B.valor"]
    );
    for row in &product {
        assert!(a.rows().contains(&row[..3].to_vec()));
        assert!(b.rows().contains(&row[3..].to_vec()));
    }
}

#[test]
fn selection_and_projection() {
    let a = a();

    let missing = Expression::from_json(&json!({"missing": "valor"})).unwrap();
    assert_eq!(rows(&a.select(&missing).unwrap()), [row![3, "c", None::<f64>]]);

    let projected = a.project(&["chave", "desc"]).unwrap();
    assert_eq!(rows(&projected), [row![1, "a"], row![3, "c"]]);

    let add = Expression::from_json(&json!({"add": ["valor", 2]})).unwrap();
    let extended = a.extend(&add, None).unwrap();
    assert_eq!(names(&extended), ["chave", "desc", "valor", "add(valor,2)"]);
    assert!(matches!(extended.rows()[0][3], Value::Float(v) if (v - 2.55).abs() < 1e-9));
    assert_eq!(extended.rows()[1][3], Value::Null);
}

#[test]
fn composed() {
    let (a, b) = (a(), b());

    let cond = Expression::from_json(&json!({"and": [
        {"eq": ["A.chave", "B.chave"]},
        {"exists": "A.valor"},
        {"lt": ["A.valor", 1]},
    ]}))
    .unwrap();

    let result = a
        .product(&b)
        .unwrap()
        .select(&cond)
        .unwrap()
        .project(&["A.chave", "B.desc"])
        .unwrap()
        .rename("R")
        .unwrap();

    assert_eq!(result.full_name(), "pytest.R");
    assert_eq!(names(&result), ["chave", "desc"]);
    assert_eq!(rows(&result), [row![1, "a"]]);

    // operands are untouched
    assert_eq!(a.len(), 2);
    assert_eq!(b.len(), 2);
}
