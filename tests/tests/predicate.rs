use jackknife::{Bean, QueryBuilder, Where, WhereBuilder};
use pretty_assertions::assert_eq;
use tests::{beans, setup};

#[derive(Debug, Default, Clone, PartialEq, Bean)]
struct Unit {
    #[key]
    #[auto]
    id: i64,

    name: String,
    age: i32,
    title: Option<String>,
}

fn unit(name: &str, age: i32, title: Option<&str>) -> Unit {
    Unit {
        id: 0,
        name: name.to_string(),
        age,
        title: title.map(str::to_string),
    }
}

fn names(db: &jackknife::Db, filter: WhereBuilder) -> Vec<String> {
    db.dao::<Unit>()
        .select(
            &QueryBuilder::new()
                .where_builder(filter)
                .order_by("id")
                .build(),
        )
        .unwrap()
        .into_iter()
        .map(|unit| unit.name)
        .collect()
}

fn seeded() -> jackknife::Db {
    let db = setup(beans!(Unit));
    let units = db.dao::<Unit>();

    let rows = [
        unit("Celica", 18, Some("Priestess")),
        unit("Celine", 16, None),
        unit("Alm", 17, Some("Villager")),
        unit("Celica", 15, None),
        unit("Mae", 17, None),
    ];
    assert!(units.insert_all(&rows).unwrap());

    db
}

#[test]
fn conditions_render_in_order() {
    let filter = WhereBuilder::new()
        .add_where_equal_to("name", "Celica")
        .add_where_contains("name", "Cel")
        .add_where_greater_than("age", 17);

    assert_eq!(
        filter.build(),
        Where {
            clause: "name = ? AND name LIKE '%' || ? || '%' AND age > ?".to_string(),
            args: vec!["Celica".to_string(), "Cel".to_string(), "17".to_string()],
        }
    );
}

#[test]
fn conditions_combine_with_and() {
    let db = seeded();

    let filter = WhereBuilder::new()
        .add_where_equal_to("name", "Celica")
        .add_where_contains("name", "Cel")
        .add_where_greater_than("age", 17);

    assert_eq!(names(&db, filter), ["Celica"]);
}

#[test]
fn text_matching() {
    let db = seeded();

    assert_eq!(
        names(&db, WhereBuilder::new().add_where_contains("name", "eli")),
        ["Celica", "Celine", "Celica"]
    );
    assert_eq!(
        names(&db, WhereBuilder::new().add_where_starts_with("name", "Ma")),
        ["Mae"]
    );
    assert_eq!(
        names(&db, WhereBuilder::new().add_where_ends_with("name", "ine")),
        ["Celine"]
    );
    assert_eq!(
        names(&db, WhereBuilder::new().add_where_not_equal_to("name", "Celica")),
        ["Celine", "Alm", "Mae"]
    );
}

#[test]
fn numeric_comparisons() {
    let db = seeded();

    assert_eq!(
        names(&db, WhereBuilder::new().add_where_less_than("age", 17)),
        ["Celine", "Celica"]
    );
    assert_eq!(
        names(&db, WhereBuilder::new().add_where_greater_or_equal("age", 17)),
        ["Celica", "Alm", "Mae"]
    );
    assert_eq!(
        names(&db, WhereBuilder::new().add_where_less_or_equal("age", 16)),
        ["Celine", "Celica"]
    );
    assert_eq!(
        names(&db, WhereBuilder::new().add_where_between("age", 16, 17)),
        ["Celine", "Alm", "Mae"]
    );
}

#[test]
fn membership() {
    let db = seeded();

    assert_eq!(
        names(&db, WhereBuilder::new().add_where_in("name", ["Alm", "Mae"])),
        ["Alm", "Mae"]
    );
    assert_eq!(
        names(&db, WhereBuilder::new().add_where_not_in("age", [15, 16, 17])),
        ["Celica"]
    );
    assert!(names(&db, WhereBuilder::new().add_where_in("age", Vec::<i32>::new())).is_empty());
    assert_eq!(
        names(&db, WhereBuilder::new().add_where_not_in("age", Vec::<i32>::new())).len(),
        5
    );
}

#[test]
fn null_checks() {
    let db = seeded();

    assert_eq!(
        names(&db, WhereBuilder::new().add_where_is_not_null("title")),
        ["Celica", "Alm"]
    );
    assert_eq!(
        names(&db, WhereBuilder::new().add_where_is_null("title")),
        ["Celine", "Celica", "Mae"]
    );
}

#[test]
fn wildcards_in_operands_are_not_escaped() {
    let db = seeded();

    // The operand is bound as-is, so `%` keeps its LIKE meaning.
    assert_eq!(
        names(&db, WhereBuilder::new().add_where_starts_with("name", "%a")),
        ["Celica", "Alm", "Celica", "Mae"]
    );
}
