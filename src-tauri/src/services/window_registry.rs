/// Window Registry
/// Tracks open windows, their visibility and stacking order

use crate::models::{FileEntry, WindowId, WindowRecord};

/// Registry of open windows
///
/// Ids and stacking values come from two separate monotonic counters, so two
/// windows opened back to back never collide on either.
pub struct WindowRegistry {
    windows: Vec<WindowRecord>,
    next_id: WindowId,
    next_z: u64,
}

impl WindowRegistry {
    pub fn new() -> Self {
        WindowRegistry {
            windows: Vec::new(),
            next_id: 1,
            next_z: 1,
        }
    }

    /// Open a new window with the given title
    pub fn open_app(&mut self, title: &str) -> WindowRecord {
        self.insert(title, None)
    }

    /// Open a new window for a file; the viewer gets the entry directly
    pub fn open_file(&mut self, title: &str, file: FileEntry) -> WindowRecord {
        self.insert(title, Some(file))
    }

    fn insert(&mut self, title: &str, file: Option<FileEntry>) -> WindowRecord {
        let id = self.next_id;
        self.next_id += 1;
        let z_index = self.next_z;
        self.next_z += 1;

        let record = WindowRecord {
            id,
            title: title.to_string(),
            visible: true,
            z_index,
            file,
        };
        log::debug!("window {} opened: {:?} (z {})", id, record.title, z_index);
        self.windows.push(record.clone());
        record
    }

    /// Close a window. Unknown ids are ignored.
    pub fn close_app(&mut self, id: WindowId) {
        let before = self.windows.len();
        self.windows.retain(|w| w.id != id);
        if self.windows.len() != before {
            log::debug!("window {} closed", id);
        }
    }

    pub fn minimize_app(&mut self, id: WindowId) {
        if let Some(window) = self.get_mut(id) {
            window.visible = false;
        }
    }

    pub fn restore_app(&mut self, id: WindowId) {
        if let Some(window) = self.get_mut(id) {
            window.visible = true;
        }
    }

    /// Raise a window above every other one
    pub fn bring_to_front(&mut self, id: WindowId) {
        let top = self.windows.iter().map(|w| w.z_index).max().unwrap_or(0);
        let z_index = top + 1;
        if let Some(window) = self.get_mut(id) {
            window.z_index = z_index;
            self.next_z = self.next_z.max(z_index + 1);
        }
    }

    pub fn get(&self, id: WindowId) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| w.id == id)
    }

    fn get_mut(&mut self, id: WindowId) -> Option<&mut WindowRecord> {
        self.windows.iter_mut().find(|w| w.id == id)
    }

    /// Windows in the order they were opened
    pub fn windows(&self) -> &[WindowRecord] {
        &self.windows
    }

    /// Windows sorted for painting, lowest first
    pub fn stacked(&self) -> Vec<WindowRecord> {
        let mut windows = self.windows.clone();
        windows.sort_by_key(|w| w.z_index);
        windows
    }

    /// The visible window painted on top, if any
    pub fn topmost_visible(&self) -> Option<&WindowRecord> {
        self.windows
            .iter()
            .filter(|w| w.visible)
            .max_by_key(|w| w.z_index)
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }
}

impl Default for WindowRegistry {
    fn default() -> Self {
        Self::new()
    }
}
