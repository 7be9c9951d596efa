use std::{fs, io::Result, path::Path};

/// File system operations the catalog needs beyond reading and writing
/// individual files.
pub trait Directory {
    /// Names of the direct subdirectories of `path`.
    fn list_subdirectories(&self, path: &Path) -> Result<Vec<String>>;

    /// Stems of the files in `path` carrying the extension `ext`.
    fn list_files(&self, path: &Path, ext: &str) -> Result<Vec<String>>;

    fn directory_exists(&self, path: &Path) -> bool;

    fn file_exists(&self, path: &Path) -> bool;

    fn create_directory(&self, path: &Path) -> Result<()>;

    fn remove_directory_recursive(&self, path: &Path) -> Result<()>;

    fn delete_file(&self, path: &Path) -> Result<()>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct LocalDirectory;

impl Directory for LocalDirectory {
    fn list_subdirectories(&self, path: &Path) -> Result<Vec<String>> {
        let mut names = vec![];

        for entry in fs::read_dir(path)? {
            let entry = entry?;
            if entry.file_type()?.is_dir() {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }

        Ok(names)
    }

    fn list_files(&self, path: &Path, ext: &str) -> Result<Vec<String>> {
        let mut names = vec![];

        for entry in fs::read_dir(path)? {
            let path = entry?.path();
            if !path.is_file() || path.extension().map_or(true, |e| e != ext) {
                continue;
            }

            if let Some(stem) = path.file_stem() {
                names.push(stem.to_string_lossy().into_owned());
            }
        }

        Ok(names)
    }

    fn directory_exists(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn file_exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn create_directory(&self, path: &Path) -> Result<()> {
        fs::create_dir(path)
    }

    fn remove_directory_recursive(&self, path: &Path) -> Result<()> {
        fs::remove_dir_all(path)
    }

    fn delete_file(&self, path: &Path) -> Result<()> {
        fs::remove_file(path)
    }
}

#[cfg(test)]
mod tests {
    use {super::*, std::fs::File, tempfile::tempdir};

    #[test]
    fn listing() -> Result<()> {
        let temp_dir = tempdir()?;
        let path = temp_dir.path();

        fs::create_dir(path.join("shop"))?;
        fs::create_dir(path.join("hr"))?;
        File::create(path.join("items.schema"))?;
        File::create(path.join("items.table"))?;
        File::create(path.join("notes.schema.bak"))?;

        let mut dirs = LocalDirectory.list_subdirectories(path)?;
        dirs.sort();
        assert_eq!(dirs, ["hr", "shop"]);

        assert_eq!(LocalDirectory.list_files(path, "schema")?, ["items"]);
        assert!(LocalDirectory.list_files(path, "idx")?.is_empty());

        temp_dir.close()
    }

    #[test]
    fn create_and_remove() -> Result<()> {
        let temp_dir = tempdir()?;
        let db = temp_dir.path().join("db");

        assert!(!LocalDirectory.directory_exists(&db));
        LocalDirectory.create_directory(&db)?;
        assert!(LocalDirectory.directory_exists(&db));

        File::create(db.join("t.table"))?;
        assert!(LocalDirectory.file_exists(&db.join("t.table")));
        assert!(!LocalDirectory.file_exists(&db));
        LocalDirectory.delete_file(&db.join("t.table"))?;
        assert!(!LocalDirectory.file_exists(&db.join("t.table")));
        assert!(LocalDirectory.delete_file(&db.join("t.table")).is_err());

        File::create(db.join("u.table"))?;
        LocalDirectory.remove_directory_recursive(&db)?;
        assert!(!LocalDirectory.directory_exists(&db));

        temp_dir.close()
    }
}
