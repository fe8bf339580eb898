mod logging_driver;
pub use logging_driver::{DriverOp, LoggingDriver, OpsLog};

use jackknife::{db::Builder, Db};

use std::path::PathBuf;
use tempfile::TempDir;

/// A builder with the given beans registered and table creation enabled.
#[macro_export]
macro_rules! beans {
    (
        $( $bean:ident ),*
    ) => {{
        let mut builder = jackknife::Db::builder();
        $( builder.register::<$bean>(); )*
        builder.create_tables(true);
        builder
    }};
}

/// Connects `builder` to a fresh in-memory database.
pub fn setup(mut builder: Builder) -> Db {
    builder.connect("sqlite::memory:").unwrap()
}

/// Like [`setup`], recording every operation sent to the connection.
pub fn setup_logged(mut builder: Builder) -> (Db, OpsLog) {
    let inner = jackknife::db::Connect::new("sqlite::memory:").unwrap();
    let driver = LoggingDriver::new(Box::new(inner));
    let log = driver.ops_log_handle();
    let db = builder.build(driver).unwrap();
    log.clear();
    (db, log)
}

/// A database file inside a temporary directory.
///
/// The directory, and the database with it, is removed on drop.
pub struct TempDb {
    dir: TempDir,
}

impl TempDb {
    pub fn new() -> TempDb {
        TempDb {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn path(&self) -> PathBuf {
        self.dir.path().join("jackknife.db")
    }

    pub fn url(&self) -> String {
        format!("sqlite:{}", self.path().display())
    }

    pub fn connect(&self, mut builder: Builder) -> Db {
        builder.connect(&self.url()).unwrap()
    }
}

impl Default for TempDb {
    fn default() -> TempDb {
        TempDb::new()
    }
}
