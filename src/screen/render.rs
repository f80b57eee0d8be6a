use crate::assets::ImageResolver;
use crate::database::models::{DiseaseCard, SymptomRow};

/// A rendered line of a list screen. `Entry.index` points back into the row
/// set the list was built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListItem {
    Header(String),
    Entry { label: String, index: usize },
}

/// Builds the symptom list in a single linear pass: a location header is
/// emitted whenever a row's location differs from the previous row's. The
/// rows arrive ordered by (location, damage), which is what makes adjacency
/// equal grouping here.
pub fn symptom_list(rows: &[SymptomRow]) -> Vec<ListItem> {
    let mut items = Vec::with_capacity(rows.len());
    let mut last_location: Option<&str> = None;

    for (index, row) in rows.iter().enumerate() {
        if last_location != Some(row.location.as_str()) {
            items.push(ListItem::Header(row.location.clone()));
            last_location = Some(row.location.as_str());
        }
        items.push(ListItem::Entry {
            label: row.damage.clone(),
            index,
        });
    }

    items
}

/// Formats one disease card: title, optional subtitle, one line per picture
/// (in query order) and one bullet per characteristic.
pub fn disease_card_lines(card: &DiseaseCard, resolver: &ImageResolver) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push(card.title.clone());
    if let Some(subtitle) = &card.subtitle {
        lines.push(format!("({subtitle})"));
    }
    for picture_id in &card.pictures {
        let path = resolver.path_for(*picture_id);
        if resolver.exists(*picture_id) {
            lines.push(format!("[image] {}", path.display()));
        } else {
            lines.push(format!("[image] {} (missing)", path.display()));
        }
    }
    for characteristic in &card.characteristics {
        lines.push(format!("\u{2022} {characteristic}"));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn row(location: &str, damage: &str) -> SymptomRow {
        SymptomRow {
            tree_id: 10,
            location_id: 0,
            damage_id: 0,
            location: location.to_string(),
            damage: damage.to_string(),
        }
    }

    #[test]
    fn header_flags_follow_location_changes() {
        let rows = vec![
            row("A", "one"),
            row("A", "two"),
            row("B", "three"),
            row("B", "four"),
            row("B", "five"),
            row("C", "six"),
        ];

        let flags: Vec<bool> = symptom_list(&rows)
            .windows(2)
            .filter_map(|pair| match pair {
                [ListItem::Header(_), ListItem::Entry { .. }] => Some(true),
                [ListItem::Entry { .. }, ListItem::Entry { .. }] => Some(false),
                _ => None,
            })
            .collect();

        assert_eq!(flags, [true, false, true, false, false, true]);
    }

    #[test]
    fn every_row_stays_tappable_regardless_of_headers() {
        let rows = vec![row("A", "one"), row("A", "two"), row("B", "three")];

        let items = symptom_list(&rows);
        let entries: Vec<usize> = items
            .iter()
            .filter_map(|item| match item {
                ListItem::Entry { index, .. } => Some(*index),
                ListItem::Header(_) => None,
            })
            .collect();

        assert_eq!(entries, [0, 1, 2]);
    }

    #[test]
    fn empty_rows_render_nothing() {
        assert!(symptom_list(&[]).is_empty());
    }

    #[test]
    fn card_lines_keep_picture_order_and_bullets() {
        let card = DiseaseCard {
            id: 100,
            title: "Needle Cast".to_string(),
            subtitle: Some("Lophodermium piceae".to_string()),
            pictures: vec![12, 45, 7],
            characteristics: vec![
                "needles turn brown".to_string(),
                "spots, yellow at first".to_string(),
            ],
        };
        let resolver = ImageResolver::new(Path::new("/data/tree.db"));

        let lines = disease_card_lines(&card, &resolver);
        assert_eq!(lines[0], "Needle Cast");
        assert_eq!(lines[1], "(Lophodermium piceae)");

        let images: Vec<&String> = lines.iter().filter(|l| l.starts_with("[image]")).collect();
        assert_eq!(images.len(), 3);
        assert!(images[0].contains("12.jpg"));
        assert!(images[1].contains("45.jpg"));
        assert!(images[2].contains("7.jpg"));

        // The comma inside one characteristic must not split the bullet.
        let bullets: Vec<&String> = lines.iter().filter(|l| l.starts_with('\u{2022}')).collect();
        assert_eq!(bullets.len(), 2);
        assert_eq!(bullets[1], "\u{2022} spots, yellow at first");
    }
}
