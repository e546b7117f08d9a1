use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Throwaway scoop root with a `buckets` directory.
pub struct BucketFixture {
    pub temp_dir: TempDir,
    pub root: PathBuf,
}

impl Default for BucketFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl BucketFixture {
    #[must_use]
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let root = temp_dir.path().to_path_buf();
        std::fs::create_dir_all(root.join("buckets")).expect("Failed to create buckets dir");

        println!("[FIXTURE] Created scoop root: {root:?}");

        Self { temp_dir, root }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn buckets_dir(&self) -> PathBuf {
        self.root.join("buckets")
    }

    /// Create a file relative to the buckets directory.
    pub fn add_file(&self, relative_path: &str, content: &str) -> PathBuf {
        write_file(&self.buckets_dir().join(relative_path), content)
    }

    /// Create `<bucket>/bucket/<name>.json`.
    pub fn add_manifest(&self, bucket: &str, name: &str, content: &str) -> PathBuf {
        self.add_file(&format!("{bucket}/bucket/{name}.json"), content)
    }

    /// Create an empty bucket directory.
    pub fn add_bucket(&self, bucket: &str) -> PathBuf {
        let path = self.buckets_dir().join(bucket);
        std::fs::create_dir_all(&path).expect("Failed to create bucket dir");
        path
    }

    /// Write the known-bucket catalog scoop installs with itself.
    pub fn add_catalog(&self, content: &str) -> PathBuf {
        write_file(&self.root.join("apps/scoop/current/buckets.json"), content)
    }
}

fn write_file(full_path: &Path, content: &str) -> PathBuf {
    if let Some(parent) = full_path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create parent dirs");
    }
    std::fs::write(full_path, content).expect("Failed to write file");
    println!(
        "[FIXTURE] Created file: {:?} ({} bytes)",
        full_path,
        content.len()
    );
    full_path.to_path_buf()
}

impl Drop for BucketFixture {
    fn drop(&mut self) {
        println!("[FIXTURE] Cleaning up scoop root: {:?}", self.root);
    }
}
