/// Models module
/// Shared data types between the shell backend and the frontend
/// All types here are serializable for IPC

use serde::{Deserialize, Serialize};

/// Identifier of an open window
pub type WindowId = u64;

/// Kind of a mock filesystem entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    File,
    Folder,
}

/// One entry of a mock directory listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: FileKind,
    pub path: String,
    /// Where the content can be retrieved from, only for readable files
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Viewer or editor the file conceptually opens with
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app: Option<String>,
}

impl FileEntry {
    pub fn folder(name: &str, path: &str) -> Self {
        Self {
            name: name.to_string(),
            kind: FileKind::Folder,
            path: path.to_string(),
            url: None,
            app: None,
        }
    }

    pub fn file(name: &str, path: &str, url: Option<&str>, app: Option<&str>) -> Self {
        Self {
            name: name.to_string(),
            kind: FileKind::File,
            path: path.to_string(),
            url: url.map(str::to_string),
            app: app.map(str::to_string),
        }
    }

    pub fn is_folder(&self) -> bool {
        self.kind == FileKind::Folder
    }
}

/// An open window as tracked by the registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowRecord {
    pub id: WindowId,
    pub title: String,
    /// `false` while minimized
    pub visible: bool,
    pub z_index: u64,
    /// File the window was opened for, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<FileEntry>,
}

/// How a scrollback line should be styled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    Prompt,
    Output,
    Error,
}

/// One rendered terminal line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrollbackLine {
    pub kind: LineKind,
    pub text: String,
}

impl ScrollbackLine {
    pub fn prompt(text: impl Into<String>) -> Self {
        Self { kind: LineKind::Prompt, text: text.into() }
    }

    pub fn output(text: impl Into<String>) -> Self {
        Self { kind: LineKind::Output, text: text.into() }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { kind: LineKind::Error, text: text.into() }
    }
}

/// What the terminal view needs to render
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TerminalSnapshot {
    pub window_id: WindowId,
    pub current_path: String,
    pub input: String,
    pub lines: Vec<ScrollbackLine>,
}

/// Shortcut shown on the desktop
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DesktopIcon {
    pub id: &'static str,
    pub label: &'static str,
    /// Title of the window the icon opens
    pub app: &'static str,
}

/// One taskbar button
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskbarItem {
    pub id: WindowId,
    pub title: String,
    pub visible: bool,
    /// Topmost visible window
    pub active: bool,
}

/// Desktop right-click menu state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum ContextMenu {
    #[default]
    Closed,
    Open { x: i32, y: i32 },
}

/// Entries of the desktop context menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContextAction {
    Refresh,
    OpenTerminal,
}

/// Everything the shell surface renders
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DesktopSnapshot {
    pub icons: Vec<DesktopIcon>,
    /// Open windows, lowest `z_index` first
    pub windows: Vec<WindowRecord>,
    pub taskbar: Vec<TaskbarItem>,
    pub context_menu: ContextMenu,
}
