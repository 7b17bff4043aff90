/// Represents a file or directory entry staged in memory before writing to disk.
#[derive(Debug, Clone, PartialEq)]
pub struct VirtualEntry {
    /// Path relative to the destination root.
    pub path: std::path::PathBuf,
    /// Contents to be written if the entry represents a file.
    pub content: Option<String>,
    /// Indicates whether this entry is a file (`true`) or a directory (`false`).
    pub is_file: bool,
}
/// Represents a virtual file system composed of multiple [`VirtualEntry`] values.
///
/// This structure queues up a collection of file and directory creations before
/// committing them to disk. Entries keep insertion order, so a directory staged
/// before its children is also created before them.
#[derive(Debug, Clone, PartialEq)]
pub struct VirtualFS {
    pub entries: Vec<VirtualEntry>,
}
impl VirtualFS {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Stages a directory.
    pub fn dir(&mut self, path: impl Into<std::path::PathBuf>) {
        self.entries.push(VirtualEntry {
            path: path.into(),
            content: None,
            is_file: false,
        });
    }

    /// Stages a file with the given contents.
    pub fn file(&mut self, path: impl Into<std::path::PathBuf>, content: impl Into<String>) {
        self.entries.push(VirtualEntry {
            path: path.into(),
            content: Some(content.into()),
            is_file: true,
        });
    }

    pub fn directories(&self) -> impl Iterator<Item = &VirtualEntry> {
        self.entries.iter().filter(|entry| !entry.is_file)
    }

    pub fn files(&self) -> impl Iterator<Item = &VirtualEntry> {
        self.entries.iter().filter(|entry| entry.is_file)
    }
}
impl Default for VirtualFS {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_are_partitioned_by_kind() {
        let mut vfs = VirtualFS::new();
        vfs.dir("src");
        vfs.file("src/control.ts", "// stub");
        vfs.file("readme.md", "# hello");

        assert_eq!(vfs.directories().count(), 1);
        assert_eq!(vfs.files().count(), 2);
    }
}
