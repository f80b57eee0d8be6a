use std::path::{Path, PathBuf};

/// Maps picture identifiers from the database to image files shipped in a
/// `pictures` directory next to the database file. The resolver only derives
/// paths; whether a file is actually present is reported, not required.
pub struct ImageResolver {
    pictures_dir: PathBuf,
}

impl ImageResolver {
    pub fn new(database_path: &Path) -> Self {
        let pictures_dir = database_path
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join("pictures");

        Self { pictures_dir }
    }

    pub fn path_for(&self, picture_id: i64) -> PathBuf {
        self.pictures_dir.join(format!("{picture_id}.jpg"))
    }

    pub fn exists(&self, picture_id: i64) -> bool {
        self.path_for(picture_id).is_file()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_next_to_the_database() {
        let resolver = ImageResolver::new(Path::new("/data/treedex/tree.db"));
        assert_eq!(
            resolver.path_for(12),
            Path::new("/data/treedex/pictures/12.jpg")
        );
    }

    #[test]
    fn missing_picture_is_reported_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let resolver = ImageResolver::new(&dir.path().join("tree.db"));
        assert!(!resolver.exists(7));

        std::fs::create_dir_all(dir.path().join("pictures")).unwrap();
        std::fs::write(dir.path().join("pictures/7.jpg"), b"jpeg").unwrap();
        assert!(resolver.exists(7));
    }
}
