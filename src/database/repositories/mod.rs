mod catalog;
mod disease;
mod symptom;

pub use catalog::{list_species, list_tree_types};
pub use disease::list_diseases;
pub use symptom::list_symptoms;
