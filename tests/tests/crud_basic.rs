use jackknife::{Bean, QueryBuilder, WhereBuilder};
use pretty_assertions::assert_eq;
use tests::{beans, setup};

#[derive(Debug, Default, Clone, PartialEq, Bean)]
struct User {
    #[key]
    #[auto]
    id: i64,

    name: String,
    age: i32,
}

fn user(name: &str, age: i32) -> User {
    User {
        id: 0,
        name: name.to_string(),
        age,
    }
}

fn by_name(name: &str) -> WhereBuilder {
    WhereBuilder::new().add_where_equal_to("name", name)
}

#[test]
fn insert_assigns_keys_in_order() {
    let db = setup(beans!(User));
    let users = db.dao::<User>();

    assert!(users.insert(&user("Alm", 17)).unwrap());
    assert!(users.insert(&user("Celica", 18)).unwrap());

    let all = users
        .select(&QueryBuilder::new().order_by("id").build())
        .unwrap();

    assert_eq!(
        all,
        [
            User {
                id: 1,
                name: "Alm".to_string(),
                age: 17,
            },
            User {
                id: 2,
                name: "Celica".to_string(),
                age: 18,
            },
        ]
    );
}

#[test]
fn update_writes_matching_rows_only() {
    let db = setup(beans!(User));
    let users = db.dao::<User>();

    users.insert(&user("Alm", 17)).unwrap();
    users.insert(&user("Gray", 19)).unwrap();

    assert!(users.update(&by_name("Alm"), &user("Alm", 20)).unwrap());

    let alm = users
        .select_one_by(&QueryBuilder::new().where_builder(by_name("Alm")).build())
        .unwrap()
        .unwrap();
    assert_eq!(alm.age, 20);
    assert_eq!(alm.id, 1);

    let gray = users
        .select_one_by(&QueryBuilder::new().where_builder(by_name("Gray")).build())
        .unwrap()
        .unwrap();
    assert_eq!(gray.age, 19);
}

#[test]
fn update_matching_nothing_reports_false() {
    let db = setup(beans!(User));
    let users = db.dao::<User>();

    users.insert(&user("Alm", 17)).unwrap();

    assert!(!users.update(&by_name("Nobody"), &user("Nobody", 1)).unwrap());
    assert_eq!(users.select_all().unwrap()[0].name, "Alm");
}

#[test]
fn update_all_rewrites_every_row() {
    let db = setup(beans!(User));
    let users = db.dao::<User>();

    users.insert(&user("Alm", 17)).unwrap();
    users.insert(&user("Gray", 19)).unwrap();

    assert!(users.update_all(&user("Same", 30)).unwrap());

    let all = users.select_all().unwrap();
    assert_eq!(all.len(), 2);
    assert!(all.iter().all(|u| u.name == "Same" && u.age == 30));
    assert_eq!(
        all.iter().map(|u| u.id).collect::<Vec<_>>(),
        [1, 2],
        "keys are never rewritten"
    );
}

#[test]
fn delete_and_delete_all() {
    let db = setup(beans!(User));
    let users = db.dao::<User>();

    for (name, age) in [("Alm", 17), ("Gray", 19), ("Tobin", 18)] {
        users.insert(&user(name, age)).unwrap();
    }

    assert!(users.delete(&by_name("Gray")).unwrap());
    assert!(!users.delete(&by_name("Gray")).unwrap());
    assert_eq!(users.count().unwrap(), 2);

    assert!(users.delete_all().unwrap());
    assert!(!users.delete_all().unwrap());
    assert_eq!(users.count().unwrap(), 0);
}

#[test]
fn select_one_on_empty_table() {
    let db = setup(beans!(User));
    let users = db.dao::<User>();

    assert_eq!(users.select_one().unwrap(), None);
    assert!(users.select_all().unwrap().is_empty());
    assert_eq!(users.count().unwrap(), 0);
}

#[test]
fn select_one_is_first_in_order() {
    let db = setup(beans!(User));
    let users = db.dao::<User>();

    for (name, age) in [("Alm", 17), ("Gray", 19), ("Tobin", 18)] {
        users.insert(&user(name, age)).unwrap();
    }

    let oldest = users
        .select_one_by(&QueryBuilder::new().order_by("age DESC").build())
        .unwrap();
    assert_eq!(oldest.map(|u| u.name), Some("Gray".to_string()));
}

#[test]
fn projection_fills_selected_fields() {
    let db = setup(beans!(User));
    let users = db.dao::<User>();

    users.insert(&user("Alm", 17)).unwrap();

    let partial = users
        .select(&QueryBuilder::new().columns(["name"]).build())
        .unwrap();

    assert_eq!(partial, [user("Alm", 0)]);
}
