use jackknife::{stmt::TypeHandle, Bean};
use jackknife_core::stmt::{Insert, Row, SqlValue};
use pretty_assertions::assert_eq;
use tests::{beans, setup};

struct Marker;
struct Unregistered;

#[derive(Debug, Default, Clone, PartialEq, Bean)]
struct Everything {
    #[key]
    #[auto]
    id: i64,

    flag: bool,
    tiny: i8,
    small: i16,
    medium: i32,
    large: i64,
    byte: u8,
    word: u16,
    dword: u32,
    ratio: f32,
    precise: f64,
    text: String,
    letter: char,
    blob: Vec<u8>,
    kind: TypeHandle,
    maybe: Option<i32>,
    maybe_text: Option<String>,

    #[skip]
    cache: Vec<String>,
}

fn everything() -> Everything {
    Everything {
        id: 0,
        flag: true,
        tiny: i8::MIN,
        small: -300,
        medium: 70_000,
        large: i64::MAX,
        byte: u8::MAX,
        word: 60_000,
        dword: u32::MAX,
        ratio: 0.5,
        precise: -1234.5678,
        text: "héllo".to_string(),
        letter: 'ß',
        blob: vec![0, 159, 146, 150],
        kind: TypeHandle::of::<Marker>(),
        maybe: Some(-1),
        maybe_text: None,
        cache: vec!["not persisted".to_string()],
    }
}

fn raw_insert(db: &jackknife::Db, values: Row) {
    db.transaction(|tx| {
        tx.exec(Insert {
            table: "everything".to_string(),
            values,
        })
    })
    .unwrap();
}

#[test]
fn every_type_round_trips() {
    let mut builder = beans!(Everything);
    builder.register_type::<Marker>();
    let db = setup(builder);

    let stored = everything();
    db.dao::<Everything>().insert(&stored).unwrap();

    let loaded = db.dao::<Everything>().select_one().unwrap().unwrap();
    assert_eq!(
        loaded,
        Everything {
            id: 1,
            cache: vec![],
            ..stored
        }
    );
}

#[test]
fn bean_types_resolve_without_registration() {
    let db = setup(beans!(Everything));

    let stored = Everything {
        kind: TypeHandle::of::<Everything>(),
        ..Everything::default()
    };
    db.dao::<Everything>().insert(&stored).unwrap();

    let loaded = db.dao::<Everything>().select_one().unwrap().unwrap();
    assert!(loaded.kind.is::<Everything>());
}

#[test]
fn unresolvable_type_keeps_default() {
    let db = setup(beans!(Everything));

    let stored = Everything {
        kind: TypeHandle::of::<Unregistered>(),
        text: "still read".to_string(),
        ..Everything::default()
    };
    db.dao::<Everything>().insert(&stored).unwrap();

    let loaded = db.dao::<Everything>().select_one().unwrap().unwrap();
    assert_eq!(loaded.kind, TypeHandle::default());
    assert_eq!(loaded.text, "still read");
}

#[test]
fn stored_boolean_two_leaves_field_unset() {
    let db = setup(beans!(Everything));

    raw_insert(&db, Row::new().with("flag", 2_i64).with("text", "two"));
    raw_insert(&db, Row::new().with("flag", 1_i64).with("text", "one"));

    let loaded = db.dao::<Everything>().select_all().unwrap();
    assert_eq!(
        loaded
            .iter()
            .map(|e| (e.text.as_str(), e.flag))
            .collect::<Vec<_>>(),
        [("two", false), ("one", true)]
    );
}

#[test]
fn unreadable_values_leave_defaults() {
    let db = setup(beans!(Everything));

    raw_insert(
        &db,
        Row::new()
            .with("byte", 999_i64)
            .with("letter", "too long")
            .with("medium", "not a number")
            .with("text", SqlValue::Null)
            .with("large", 5_i64),
    );

    let loaded = db.dao::<Everything>().select_one().unwrap().unwrap();
    assert_eq!(loaded.byte, 0);
    assert_eq!(loaded.letter, char::default());
    assert_eq!(loaded.medium, 0);
    assert_eq!(loaded.text, "");
    assert_eq!(loaded.large, 5);
}

#[test]
fn nulls_in_optional_fields() {
    let db = setup(beans!(Everything));

    let stored = Everything {
        maybe: None,
        maybe_text: Some("present".to_string()),
        ..Everything::default()
    };
    db.dao::<Everything>().insert(&stored).unwrap();

    let loaded = db.dao::<Everything>().select_one().unwrap().unwrap();
    assert_eq!(loaded.maybe, None);
    assert_eq!(loaded.maybe_text.as_deref(), Some("present"));
}
