/// Mock Filesystem
/// Static, read-only directory listings keyed by path

use crate::models::FileEntry;
use std::collections::HashMap;

/// Home directory of the mock user
pub const HOME_PATH: &str = "/C/Users/Paul";

/// Read-only path -> listing map
pub struct MockFs {
    listings: HashMap<String, Vec<FileEntry>>,
}

impl MockFs {
    /// Filesystem with the default fixture tree
    pub fn new() -> Self {
        let listings = [
            ("/", vec![FileEntry::folder("C", "/C")]),
            (
                "/C",
                vec![
                    FileEntry::folder("Users", "/C/Users"),
                    FileEntry::folder("Windows", "/C/Windows"),
                ],
            ),
            ("/C/Users", vec![FileEntry::folder("Paul", HOME_PATH)]),
            ("/C/Windows", vec![]),
            (
                HOME_PATH,
                vec![
                    FileEntry::folder("Documents", "/C/Users/Paul/Documents"),
                    FileEntry::folder("Music", "/C/Users/Paul/Music"),
                    FileEntry::file(
                        "video.mp4",
                        "/C/Users/Paul/video.mp4",
                        Some("/files/video.mp4"),
                        Some("Media Player"),
                    ),
                ],
            ),
            (
                "/C/Users/Paul/Documents",
                vec![
                    FileEntry::file(
                        "notes.txt",
                        "/C/Users/Paul/Documents/notes.txt",
                        Some("/files/notes.txt"),
                        Some("Notepad"),
                    ),
                    FileEntry::file(
                        "resume.docx",
                        "/C/Users/Paul/Documents/resume.docx",
                        None,
                        Some("Word"),
                    ),
                    FileEntry::file(
                        "budget.xlsx",
                        "/C/Users/Paul/Documents/budget.xlsx",
                        None,
                        Some("Excel"),
                    ),
                ],
            ),
            (
                "/C/Users/Paul/Music",
                vec![FileEntry::file(
                    "track01.mp3",
                    "/C/Users/Paul/Music/track01.mp3",
                    Some("/files/track01.mp3"),
                    Some("Media Player"),
                )],
            ),
        ];

        Self::from_listings(
            listings
                .into_iter()
                .map(|(path, entries)| (path.to_string(), entries)),
        )
    }

    pub fn from_listings(listings: impl IntoIterator<Item = (String, Vec<FileEntry>)>) -> Self {
        MockFs {
            listings: listings.into_iter().collect(),
        }
    }

    /// Listing for `path`. Unknown paths give an empty listing, never an error.
    pub fn fetch_files(&self, path: &str) -> Vec<FileEntry> {
        self.listings.get(path).cloned().unwrap_or_default()
    }

    /// Find an entry by its full path
    pub fn entry(&self, path: &str) -> Option<FileEntry> {
        self.listings
            .values()
            .flatten()
            .find(|entry| entry.path == path)
            .cloned()
    }
}

impl Default for MockFs {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::models::FileKind;

    fn names(entries: &[FileEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn documents_listing() {
        let fs = MockFs::new();
        let docs = fs.fetch_files("/C/Users/Paul/Documents");
        assert_eq!(names(&docs), vec!["notes.txt", "resume.docx", "budget.xlsx"]);
        assert!(docs.iter().all(|e| e.kind == FileKind::File));
    }

    #[test]
    fn unknown_path_is_empty() {
        let fs = MockFs::new();
        assert!(fs.fetch_files("/nonexistent").is_empty());
        assert!(fs.fetch_files("/C/Windows").is_empty());
    }

    #[test]
    fn every_folder_has_a_listing() {
        let fs = MockFs::new();
        for entries in fs.listings.values() {
            for folder in entries.iter().filter(|e| e.is_folder()) {
                assert!(fs.listings.contains_key(&folder.path), "{}", folder.path);
            }
        }
    }

    #[test]
    fn entry_by_path() {
        let fs = MockFs::new();
        let notes = fs.entry("/C/Users/Paul/Documents/notes.txt").unwrap();
        assert_eq!(notes.url.as_deref(), Some("/files/notes.txt"));
        assert!(fs.entry("/C/Users/Paul/missing.txt").is_none());
    }

    #[test]
    fn entries_serialize_with_type_tag() {
        let json = serde_json::to_value(FileEntry::folder("Music", "/Music")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "name": "Music", "type": "folder", "path": "/Music" })
        );
    }
}
