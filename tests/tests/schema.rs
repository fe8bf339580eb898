use jackknife::{
    schema::{AssignType, Field, FieldType, Model},
    stmt::Value,
    Bean, Error, Result, WhereBuilder,
};
use pretty_assertions::assert_eq;
use std::sync::Arc;
use tests::{beans, setup};

#[allow(non_snake_case)]
#[derive(Debug, Default, Bean)]
struct OrderLine {
    #[key]
    #[auto]
    id: i64,

    productName: String,
    unitCount: u32,

    #[skip]
    dirty: bool,
}

#[derive(Debug, Default, Bean)]
#[table = "people"]
struct Person {
    #[key]
    #[column("person_id")]
    id: String,

    #[column("display")]
    name: String,
}

#[derive(Debug, Default, Bean)]
struct Clash {
    name: String,

    #[column("name")]
    alias: String,
}

#[derive(Debug, Default, Bean)]
struct TextCounter {
    #[key]
    #[auto]
    id: String,
}

#[derive(Debug, Default, Bean)]
struct Keyless {
    note: String,
}

#[test]
fn derived_table_and_column_names() {
    let db = setup(beans!(OrderLine));
    let table = db.table_descriptor::<OrderLine>().unwrap();

    assert_eq!(table.name, "order_line");
    assert_eq!(
        table.columns.iter().map(|c| &c.name[..]).collect::<Vec<_>>(),
        ["id", "product_name", "unit_count", "dirty"]
    );
    assert_eq!(table.primary_key_names(), ["id"]);
    assert!(!table.column("unit_count").unwrap().is_auto_increment());
    assert!(table.column("dirty").is_none());
}

#[test]
fn persistable_columns_lists_field_names() {
    let db = setup(beans!(OrderLine, Person));

    let lines = db.table_descriptor::<OrderLine>().unwrap();
    assert_eq!(lines.persistable_columns(), "productName,unitCount");

    let people = db.table_descriptor::<Person>().unwrap();
    assert_eq!(people.persistable_columns(), "id,name");
}

#[test]
fn explicit_names_override_derived_ones() {
    let db = setup(beans!(Person));
    let table = db.table_descriptor::<Person>().unwrap();

    assert_eq!(table.name, "people");
    assert_eq!(table.primary_key_names(), ["person_id"]);
    assert_eq!(table.primary_key.as_ref().unwrap().assign, AssignType::ByMyself);

    let people = db.dao::<Person>();
    people
        .insert(&Person {
            id: "p1".to_string(),
            name: "Celica".to_string(),
        })
        .unwrap();

    let found = people
        .select_one_by(
            &jackknife::QueryBuilder::new()
                .where_builder(WhereBuilder::new().add_where_equal_to("display", "Celica"))
                .build(),
        )
        .unwrap()
        .unwrap();
    assert_eq!(found.id, "p1");
}

#[test]
fn prefix_applies_to_every_table() {
    let mut builder = beans!(OrderLine, Person);
    builder.table_name_prefix("app_");
    let db = setup(builder);

    assert_eq!(db.table_descriptor::<OrderLine>().unwrap().name, "app_order_line");
    assert_eq!(db.table_descriptor::<Person>().unwrap().name, "app_people");

    db.dao::<OrderLine>().insert(&OrderLine::default()).unwrap();
    assert_eq!(db.dao::<OrderLine>().count().unwrap(), 1);
}

#[test]
fn descriptors_are_resolved_once() {
    let db = setup(beans!(OrderLine));

    let first = db.table_descriptor::<OrderLine>().unwrap();
    let second = db.table_descriptor::<OrderLine>().unwrap();
    assert!(Arc::ptr_eq(&first, &second));
}

#[test]
fn unregistered_beans_resolve_on_first_use() {
    let db = setup(beans!());

    let table = db.table_descriptor::<Keyless>().unwrap();
    assert!(table.primary_key.is_none());

    db.create_table::<Keyless>().unwrap();
    db.dao::<Keyless>()
        .insert(&Keyless {
            note: "hello".to_string(),
        })
        .unwrap();
    assert_eq!(db.dao::<Keyless>().select_all().unwrap()[0].note, "hello");
}

#[test]
fn clashing_columns_fail_registration() {
    let mut builder = beans!(Clash);
    let err = builder.connect("sqlite::memory:").unwrap_err();

    assert!(err.is_invalid_schema());
    assert!(err.to_string().contains("`name`"), "{err}");
}

#[test]
fn auto_key_must_be_an_integer() {
    let mut builder = beans!(TextCounter);
    let err = builder.connect("sqlite::memory:").unwrap_err();

    assert!(err.is_invalid_schema());
}

/// Temperature kept in Celsius, persisted as a plain float.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
struct Celsius(f64);

#[derive(Debug, Default, PartialEq)]
struct Reading {
    station: String,
    hour: i64,
    temperature: Celsius,
    scratch: Vec<u8>,
}

impl Bean for Reading {
    fn schema() -> Model {
        Model::new::<Reading>()
            .table("readings")
            .field(Field::new("station", FieldType::Text).primary_key(AssignType::ByMyself))
            .field(Field::new("hour", FieldType::Integer).primary_key(AssignType::ByMyself))
            .field(Field::new("temperature", FieldType::Float).column("celsius"))
            .field(Field::excluded("scratch"))
    }

    fn get(&self, field: &str) -> Result<Value> {
        match field {
            "station" => Ok(Value::String(self.station.clone())),
            "hour" => Ok(Value::I64(self.hour)),
            "temperature" => Ok(Value::F64(self.temperature.0)),
            _ => Err(Error::field_access(field, "not persisted")),
        }
    }

    fn set(&mut self, field: &str, value: Value) -> Result<()> {
        match (field, value) {
            ("station", Value::String(v)) => self.station = v,
            ("hour", Value::I64(v)) => self.hour = v,
            ("temperature", Value::F64(v)) => self.temperature = Celsius(v),
            (field, value) => {
                return Err(Error::field_access(
                    field,
                    format!("unexpected {}", value.kind()),
                ))
            }
        }
        Ok(())
    }
}

fn reading(station: &str, hour: i64, celsius: f64) -> Reading {
    Reading {
        station: station.to_string(),
        hour,
        temperature: Celsius(celsius),
        scratch: vec![],
    }
}

#[test]
fn hand_written_bean() {
    let db = setup(beans!(Reading));
    let table = db.table_descriptor::<Reading>().unwrap();
    assert_eq!(table.primary_key_names(), ["station", "hour"]);

    let readings = db.dao::<Reading>();
    assert!(readings
        .insert_all(&[
            reading("north", 1, 3.5),
            reading("north", 2, 4.0),
            reading("south", 1, 11.25),
        ])
        .unwrap());

    // Composite key: the same station and hour cannot be stored twice.
    assert!(!readings.insert_all(&[reading("north", 1, 0.0)]).unwrap());

    let warm = WhereBuilder::new().add_where_greater_than("celsius", 4);
    assert_eq!(
        readings
            .select(&jackknife::QueryBuilder::new().where_builder(warm.clone()).build())
            .unwrap(),
        [reading("south", 1, 11.25)]
    );

    assert!(readings.update(&warm, &reading("south", 1, -2.0)).unwrap());
    assert!(readings
        .delete(&WhereBuilder::new().add_where_equal_to("station", "north"))
        .unwrap());
    assert_eq!(readings.select_all().unwrap(), [reading("south", 1, -2.0)]);
}
