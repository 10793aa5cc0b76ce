use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

#[derive(Debug)]
pub struct TempFileManager {
    dir: TempDir,
}

impl TempFileManager {
    pub fn new() -> std::io::Result<Self> {
        Ok(Self {
            dir: tempfile::Builder::new().prefix("lumo-test-").tempdir()?,
        })
    }

    pub fn create_file(&self, name: &str, contents: &str) -> std::io::Result<PathBuf> {
        let path = self.dir.path().join(name);
        fs::write(&path, contents)?;
        Ok(path)
    }
}
