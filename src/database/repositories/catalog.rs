use rusqlite::params;

use crate::database::models::{Species, TreeType};
use crate::database::{Database, DatabaseError};

/// All tree types, in storage order.
pub fn list_tree_types(db: &Database) -> Result<Vec<TreeType>, DatabaseError> {
    let mut stmt = db.connection().prepare("SELECT TypeID, Type FROM Types")?;

    let rows = stmt.query_map([], |row| {
        Ok(TreeType {
            id: row.get(0)?,
            label: row.get(1)?,
        })
    })?;

    Ok(rows.collect::<Result<Vec<_>, _>>()?)
}

/// Species belonging to one tree type. An id with no matches yields an empty
/// list, not an error.
pub fn list_species(db: &Database, type_id: i64) -> Result<Vec<Species>, DatabaseError> {
    let mut stmt = db
        .connection()
        .prepare("SELECT TreesID, Tree FROM Trees WHERE Type = ?1")?;

    let rows = stmt.query_map(params![type_id], |row| {
        Ok(Species {
            id: row.get(0)?,
            label: row.get(1)?,
        })
    })?;

    Ok(rows.collect::<Result<Vec<_>, _>>()?)
}
