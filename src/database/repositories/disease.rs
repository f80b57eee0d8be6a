use rusqlite::params;

use crate::database::models::DiseaseCard;
use crate::database::{Database, DatabaseError};

/// Child rows come back ungrouped, one per (disease, picture, element)
/// combination, and are folded into cards in process. Rowid ordering keeps
/// pictures and elements in storage order within a disease.
const DISEASE_QUERY: &str = "
    SELECT DiseaseTitles.DiseaseID, DiseaseTitle, DiseaseSubtitle, PicturesID, DiseaseElement
    FROM DiseaseLink
    JOIN DiseaseTitles ON DiseaseLink.DiseasesID = DiseaseTitles.DiseaseID
    JOIN Pictures USING (DiseasesID)
    JOIN DiseaseLiElements USING (DiseaseID)
    WHERE TreesID = ?1 AND LocationsID = ?2 AND DamagesID = ?3
    ORDER BY DiseaseTitles.DiseaseID, Pictures.rowid, DiseaseLiElements.rowid
";

/// Candidate diseases for a (species, location, damage) selection, each with
/// its picture ids and characteristic texts grouped into lists.
pub fn list_diseases(
    db: &Database,
    tree_id: i64,
    location_id: i64,
    damage_id: i64,
) -> Result<Vec<DiseaseCard>, DatabaseError> {
    let mut stmt = db.connection().prepare(DISEASE_QUERY)?;

    let rows = stmt.query_map(params![tree_id, location_id, damage_id], |row| {
        Ok((
            row.get::<_, i64>(0)?,
            row.get::<_, String>(1)?,
            row.get::<_, Option<String>>(2)?,
            row.get::<_, i64>(3)?,
            row.get::<_, String>(4)?,
        ))
    })?;

    let mut cards: Vec<DiseaseCard> = Vec::new();
    for row in rows {
        let (id, title, subtitle, picture, element) = row?;
        match cards.last_mut() {
            // Rows for one disease are adjacent thanks to the ORDER BY.
            Some(card) if card.id == id => absorb(card, picture, element),
            _ => {
                let mut card = DiseaseCard {
                    id,
                    title,
                    subtitle,
                    pictures: Vec::new(),
                    characteristics: Vec::new(),
                };
                absorb(&mut card, picture, element);
                cards.push(card);
            }
        }
    }

    Ok(cards)
}

/// The pictures × elements cross product repeats both sides; keep each value
/// once, in first-seen order. The lists are small enough for a linear scan.
fn absorb(card: &mut DiseaseCard, picture: i64, element: String) {
    if !card.pictures.contains(&picture) {
        card.pictures.push(picture);
    }
    if !card.characteristics.contains(&element) {
        card.characteristics.push(element);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::test_support::seeded;

    #[test]
    fn groups_rows_into_one_card_per_disease() {
        let db = seeded();

        let cards = list_diseases(&db, 10, 2, 5).unwrap();
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].title, "Needle Cast");
        assert_eq!(cards[0].subtitle.as_deref(), Some("Lophodermium piceae"));
        assert_eq!(cards[1].title, "Needle Rust");
        assert_eq!(cards[1].subtitle, None);
    }

    #[test]
    fn pictures_keep_storage_order() {
        let db = seeded();

        let cards = list_diseases(&db, 10, 2, 5).unwrap();
        assert_eq!(cards[0].pictures, [12, 45, 7]);
        assert_eq!(cards[1].pictures, [13]);
    }

    #[test]
    fn literal_comma_in_element_stays_one_entry() {
        let db = seeded();

        let cards = list_diseases(&db, 10, 2, 5).unwrap();
        assert_eq!(
            cards[0].characteristics,
            [
                "needles turn brown",
                "spots, yellow at first",
                "black fruiting bodies in spring",
            ]
        );
    }

    #[test]
    fn unmatched_selection_yields_empty() {
        let db = seeded();

        // Valid species, but a (location, damage) pair it was never linked to.
        assert!(list_diseases(&db, 10, 1, 6).unwrap().is_empty());
        assert!(list_diseases(&db, 999, 2, 5).unwrap().is_empty());
    }
}
