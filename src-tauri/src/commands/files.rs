/// File Commands
/// Directory listings from the mock filesystem

use super::SharedShell;
use crate::models::FileEntry;
use tauri::State;

/// List a mock directory. Unknown paths give an empty list.
#[tauri::command]
pub async fn fetch_files(
    shell: State<'_, SharedShell>,
    path: String,
) -> Result<Vec<FileEntry>, String> {
    let fs = shell.lock().fs();
    Ok(fs.fetch_files(&path))
}
