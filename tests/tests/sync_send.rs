use jackknife::{Bean, Db};
use pretty_assertions::assert_eq;
use tests::{beans, setup};

#[derive(Debug, Default, Clone, PartialEq, Bean)]
struct Event {
    #[key]
    #[auto]
    id: i64,

    worker: u32,
    seq: u32,
}

fn assert_sync_send<T: Send + Sync>() {}

#[test]
fn db_is_shareable() {
    assert_sync_send::<Db>();
}

#[test]
fn concurrent_inserts_are_serialized() {
    let db = setup(beans!(Event));

    std::thread::scope(|s| {
        for worker in 0..4 {
            let db = &db;
            s.spawn(move || {
                let events = db.dao::<Event>();
                for seq in 0..25 {
                    assert!(events.insert(&Event { id: 0, worker, seq }).unwrap());
                }
            });
        }
    });

    let events = db.dao::<Event>().select_all().unwrap();
    assert_eq!(events.len(), 100);

    let mut ids: Vec<_> = events.iter().map(|e| e.id).collect();
    ids.sort();
    assert_eq!(ids, (1..=100).collect::<Vec<i64>>());

    for worker in 0..4 {
        let seqs: Vec<_> = events
            .iter()
            .filter(|e| e.worker == worker)
            .map(|e| e.seq)
            .collect();
        assert_eq!(seqs, (0..25).collect::<Vec<u32>>());
    }
}
