use rusqlite::params;

use crate::database::models::SymptomRow;
use crate::database::{Database, DatabaseError};

/// Ordered by (location, damage) so the renderer can emit location section
/// headers in a single linear pass over the rows.
const SYMPTOM_QUERY: &str = "
    SELECT DISTINCT TreesID, LocationsID, DamagesID, Location, Damage
    FROM DiseaseLink
    JOIN Locations USING (LocationsID)
    JOIN Damages USING (DamagesID)
    WHERE TreesID = ?1
    ORDER BY Location, Damage
";

/// Every distinct (location, damage) combination recorded for a species.
pub fn list_symptoms(db: &Database, tree_id: i64) -> Result<Vec<SymptomRow>, DatabaseError> {
    let mut stmt = db.connection().prepare(SYMPTOM_QUERY)?;

    let rows = stmt.query_map(params![tree_id], |row| {
        Ok(SymptomRow {
            tree_id: row.get(0)?,
            location_id: row.get(1)?,
            damage_id: row.get(2)?,
            location: row.get(3)?,
            damage: row.get(4)?,
        })
    })?;

    Ok(rows.collect::<Result<Vec<_>, _>>()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::test_support::seeded;

    #[test]
    fn sorted_by_location_then_damage() {
        let db = seeded();

        let rows = list_symptoms(&db, 10).unwrap();
        let keys: Vec<(&str, &str)> = rows
            .iter()
            .map(|r| (r.location.as_str(), r.damage.as_str()))
            .collect();

        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);
        assert_eq!(
            keys,
            [
                ("Bark", "Cankers"),
                ("Needles", "Brown spots"),
                ("Roots", "Decay"),
            ]
        );
    }

    #[test]
    fn no_duplicate_location_damage_pairs() {
        let db = seeded();

        // Diseases 100 and 101 share the (needles, brown spots) link; DISTINCT
        // must collapse them into one row.
        let rows = list_symptoms(&db, 10).unwrap();
        let mut pairs: Vec<(i64, i64)> = rows.iter().map(|r| (r.location_id, r.damage_id)).collect();
        let before = pairs.len();
        pairs.dedup();
        assert_eq!(pairs.len(), before);
        assert_eq!(pairs.iter().filter(|p| **p == (2, 5)).count(), 1);
    }

    #[test]
    fn unknown_species_yields_empty() {
        let db = seeded();

        assert!(list_symptoms(&db, 999).unwrap().is_empty());
    }
}
