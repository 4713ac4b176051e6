use {
    crate::{a, b, names, rows},
    serde_json::json,
    table::{row, Expression},
};

fn on(lhs: &str, rhs: &str) -> Expression {
    Expression::from_json(&json!({ "eq": [lhs, rhs] })).unwrap()
}

#[test]
fn inner_join() {
    let (a, b) = (a(), b());

    let joined = a.join(&b, &on("A.chave", "B.chave")).unwrap();
    assert_eq!(joined.full_name(), "pytest.(A⋈B)");
    assert_eq!(
        names(&joined),
        ["A.chave", "A.desc", "A.valor", "B.chave", "B.desc", "B.valor"]
    );
    assert_eq!(rows(&joined), [row![1, "a", 0.55, 1, "a", 0.55]]);

    let joined = b.join(&a, &on("B.chave", "A.chave")).unwrap();
    assert_eq!(joined.full_name(), "pytest.(B⋈A)");
    assert_eq!(
        names(&joined),
        ["B.chave", "B.desc", "B.valor", "A.chave", "A.desc", "A.valor"]
    );
    assert_eq!(rows(&joined), [row![1, "a", 0.55, 1, "a", 0.55]]);
}

#[test]
fn cross_join() {
    let (a, b) = (a(), b());
    let cond = on("A.chave", "B.chave");

    let selected = a.product(&b).unwrap().select(&cond).unwrap();
    let joined = a.join(&b, &cond).unwrap();

    assert_eq!(selected.schema(), joined.schema());
    assert_eq!(rows(&selected), rows(&joined));
}

#[test]
fn outer_joins() {
    let (a, b) = (a(), b());

    let left = a.left_join(&b, &on("A.chave", "B.chave")).unwrap();
    assert_eq!(left.full_name(), "pytest.(A⟕B)");
    assert_eq!(
        rows(&left),
        [
            row![1, "a", 0.55, 1, "a", 0.55],
            row![3, "c", None::<f64>, None::<i64>, None::<String>, None::<f64>],
        ]
    );
    for row in a.rows() {
        assert_eq!(left.iter().filter(|r| r[..3] == row[..]).count(), 1);
    }

    let right = a.right_join(&b, &on("A.chave", "B.chave")).unwrap();
    assert_eq!(right.full_name(), "pytest.(A⟖B)");
    assert_eq!(
        rows(&right),
        [
            row![1, "a", 0.55, 1, "a", 0.55],
            row![None::<i64>, None::<String>, None::<f64>, 2, "b", 1.05],
        ]
    );
}
