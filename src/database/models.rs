use serde::Serialize;

/// Top level of the drill-down: coniferous, broadleaf, ...
#[derive(Debug, Clone, Serialize)]
pub struct TreeType {
    pub id: i64,
    pub label: String,
}

/// A species within a tree type.
#[derive(Debug, Clone, Serialize)]
pub struct Species {
    pub id: i64,
    pub label: String,
}

/// One (location, damage) combination recorded for a species. The ids carry
/// forward into the disease screen; the labels are what the user sees.
#[derive(Debug, Clone, Serialize)]
pub struct SymptomRow {
    pub tree_id: i64,
    pub location_id: i64,
    pub damage_id: i64,
    pub location: String,
    pub damage: String,
}

/// A candidate disease with its pictures and characteristic bullet points,
/// already grouped per disease by the repository.
#[derive(Debug, Clone, Serialize)]
pub struct DiseaseCard {
    pub id: i64,
    pub title: String,
    pub subtitle: Option<String>,
    pub pictures: Vec<i64>,
    pub characteristics: Vec<String>,
}
