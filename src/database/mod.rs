pub mod models;
pub mod repositories;

use std::path::{Path, PathBuf};

use rusqlite::{Connection, OpenFlags};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("could not open tree database at {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    #[error("query failed: {0}")]
    Query(#[from] rusqlite::Error),

    #[error("could not resolve a database location: {0}")]
    Location(String),
}

/// Handle on the pre-seeded tree disease database.
///
/// Opened read-only once at startup and borrowed by every query stage; the
/// dataset ships with the application and is never written to.
#[derive(Debug)]
pub struct Database {
    conn: Connection,
}

impl Database {
    pub fn open(path: &Path) -> Result<Self, DatabaseError> {
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(|source| DatabaseError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self { conn })
    }

    pub(crate) fn connection(&self) -> &Connection {
        &self.conn
    }
}

/// Default location of the bundled database copy: `<data dir>/treedex/tree.db`.
pub fn default_database_path() -> Result<PathBuf, DatabaseError> {
    let data_dir = dirs::data_dir()
        .ok_or_else(|| DatabaseError::Location("no user data directory on this platform".into()))?;

    Ok(data_dir.join("treedex").join("tree.db"))
}
