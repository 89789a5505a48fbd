/// Shell Service
/// The desktop context object: window registry, terminal sessions,
/// desktop icons, context menu and taskbar. One instance lives from
/// shell mount to unmount and is handed to every IPC command.

use std::collections::HashMap;
use std::sync::Arc;

use crate::config::ShellConfig;
use crate::models::{
    ContextAction, ContextMenu, DesktopIcon, DesktopSnapshot, FileEntry, TaskbarItem, WindowId,
    WindowRecord,
};
use crate::services::interpreter::{Completion, Effect, TerminalSession};
use crate::services::mock_fs::MockFs;
use crate::services::window_registry::WindowRegistry;

pub const TERMINAL: &str = "Terminal";
pub const FILE_EXPLORER: &str = "File Explorer";

const DESKTOP_ICONS: &[DesktopIcon] = &[
    DesktopIcon { id: "explorer", label: "My Computer", app: FILE_EXPLORER },
    DesktopIcon { id: "terminal", label: "Terminal", app: TERMINAL },
    DesktopIcon { id: "notepad", label: "Notepad", app: "Notepad" },
    DesktopIcon { id: "paint", label: "Paint", app: "Paint" },
    DesktopIcon { id: "code", label: "Code Editor", app: "Code Editor" },
    DesktopIcon { id: "images", label: "Image Viewer", app: "Image Viewer" },
    DesktopIcon { id: "media", label: "Media Player", app: "Media Player" },
];

/// Result of opening a window
#[derive(Debug)]
pub struct Launched {
    pub window: WindowRecord,
    /// Initial listing fetch when the window is a terminal
    pub effect: Option<Effect>,
}

pub struct Shell {
    config: ShellConfig,
    fs: Arc<MockFs>,
    registry: WindowRegistry,
    terminals: HashMap<WindowId, TerminalSession>,
    context_menu: ContextMenu,
}

impl Shell {
    pub fn new(config: ShellConfig, fs: MockFs) -> Self {
        log::info!("shell mounted (home {})", config.home_path);
        Shell {
            config,
            fs: Arc::new(fs),
            registry: WindowRegistry::new(),
            terminals: HashMap::new(),
            context_menu: ContextMenu::Closed,
        }
    }

    /// Open a window for `app`. Terminals also get a session.
    pub fn launch(&mut self, app: &str) -> Launched {
        let window = self.registry.open_app(app);
        let effect = if app == TERMINAL {
            let (session, effect) = TerminalSession::new(&self.config);
            self.terminals.insert(window.id, session);
            Some(effect)
        } else {
            None
        };
        Launched { window, effect }
    }

    /// Open the entry at a mock path, passing it to the window explicitly
    pub fn open_path(&mut self, path: &str) -> Option<WindowRecord> {
        let entry = self.fs.entry(path)?;
        let title = viewer_title(&entry);
        Some(self.registry.open_file(&title, entry))
    }

    pub fn close_app(&mut self, id: WindowId) {
        self.registry.close_app(id);
        if self.terminals.remove(&id).is_some() {
            log::debug!("terminal session {} dropped", id);
        }
    }

    /// Close every window; used when the shell unmounts
    pub fn close_all(&mut self) {
        let ids: Vec<WindowId> = self.registry.windows().iter().map(|w| w.id).collect();
        for id in ids {
            self.close_app(id);
        }
        self.close_context_menu();
        log::info!("shell unmounted");
    }

    pub fn minimize_app(&mut self, id: WindowId) {
        self.registry.minimize_app(id);
    }

    pub fn restore_app(&mut self, id: WindowId) {
        self.registry.restore_app(id);
    }

    pub fn bring_to_front(&mut self, id: WindowId) {
        self.registry.bring_to_front(id);
    }

    /// Taskbar click: restore a minimized window, minimize the active one,
    /// otherwise raise it
    pub fn toggle_taskbar(&mut self, id: WindowId) {
        let Some(window) = self.registry.get(id) else {
            return;
        };
        if !window.visible {
            self.registry.restore_app(id);
            self.registry.bring_to_front(id);
        } else if self.active_window() == Some(id) {
            self.registry.minimize_app(id);
        } else {
            self.registry.bring_to_front(id);
        }
    }

    fn active_window(&self) -> Option<WindowId> {
        self.registry.topmost_visible().map(|w| w.id)
    }

    pub fn taskbar(&self) -> Vec<TaskbarItem> {
        let active = self.active_window();
        self.registry
            .windows()
            .iter()
            .map(|w| TaskbarItem {
                id: w.id,
                title: w.title.clone(),
                visible: w.visible,
                active: active == Some(w.id),
            })
            .collect()
    }

    pub fn open_context_menu(&mut self, x: i32, y: i32) {
        self.context_menu = ContextMenu::Open { x, y };
    }

    pub fn close_context_menu(&mut self) {
        self.context_menu = ContextMenu::Closed;
    }

    /// Run a context menu entry; the menu closes either way
    pub fn context_action(&mut self, action: ContextAction) -> Option<Launched> {
        self.close_context_menu();
        match action {
            ContextAction::Refresh => None,
            ContextAction::OpenTerminal => Some(self.launch(TERMINAL)),
        }
    }

    pub fn icons(&self) -> &'static [DesktopIcon] {
        DESKTOP_ICONS
    }

    pub fn snapshot(&self) -> DesktopSnapshot {
        DesktopSnapshot {
            icons: DESKTOP_ICONS.to_vec(),
            windows: self.registry.stacked(),
            taskbar: self.taskbar(),
            context_menu: self.context_menu,
        }
    }

    pub fn registry(&self) -> &WindowRegistry {
        &self.registry
    }

    /// Shared handle, so listings can be fetched without holding the shell lock
    pub fn fs(&self) -> Arc<MockFs> {
        Arc::clone(&self.fs)
    }

    /// Feed a finished effect back into the terminal bound to `id`.
    /// Returns `false` if the window is gone or the result was superseded.
    pub fn apply(&mut self, id: WindowId, completion: Completion) -> bool {
        match self.terminals.get_mut(&id) {
            Some(session) => session.apply(completion),
            None => false,
        }
    }

    pub fn terminal(&self, id: WindowId) -> Option<&TerminalSession> {
        self.terminals.get(&id)
    }

    pub fn terminal_mut(&mut self, id: WindowId) -> Option<&mut TerminalSession> {
        self.terminals.get_mut(&id)
    }
}

/// Title for a window opened on a file
fn viewer_title(entry: &FileEntry) -> String {
    if entry.is_folder() {
        return FILE_EXPLORER.to_string();
    }
    match &entry.app {
        Some(app) => format!("{} - {}", entry.name, app),
        None => entry.name.clone(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::services::content::{ContentSource, FetchError};

    struct NoContent;

    impl ContentSource for NoContent {
        fn fetch(&self, url: &str) -> Result<String, FetchError> {
            Err(FetchError::NotFound(url.to_string()))
        }
    }

    fn shell() -> Shell {
        Shell::new(ShellConfig::default(), MockFs::new())
    }

    #[test]
    fn launching_terminal_creates_session() {
        let mut shell = shell();
        let launched = shell.launch(TERMINAL);
        assert!(matches!(launched.effect, Some(Effect::LoadListing { .. })));
        assert!(shell.terminal(launched.window.id).is_some());

        let paint = shell.launch("Paint");
        assert!(paint.effect.is_none());
        assert!(shell.terminal(paint.window.id).is_none());
    }

    #[test]
    fn closing_terminal_drops_session() {
        let mut shell = shell();
        let id = shell.launch(TERMINAL).window.id;
        shell.close_app(id);
        assert!(shell.terminal(id).is_none());
        assert!(shell.registry().is_empty());
    }

    #[test]
    fn completions_for_closed_windows_are_dropped() {
        let mut shell = shell();
        let launched = shell.launch(TERMINAL);
        let id = launched.window.id;
        let fs = shell.fs();
        let completion = launched.effect.unwrap().execute(&fs, &NoContent);

        shell.close_app(id);
        assert!(!shell.apply(id, completion));
    }

    #[test]
    fn close_all_empties_shell() {
        let mut shell = shell();
        let term = shell.launch(TERMINAL).window.id;
        shell.launch("Paint");
        shell.open_context_menu(1, 1);

        shell.close_all();
        assert!(shell.registry().is_empty());
        assert!(shell.terminal(term).is_none());
        assert_eq!(shell.snapshot().context_menu, ContextMenu::Closed);
    }

    #[test]
    fn taskbar_toggle_cycles() {
        let mut shell = shell();
        let a = shell.launch("Notepad").window.id;
        let b = shell.launch("Paint").window.id;

        // a is behind b, so the first click raises it
        shell.toggle_taskbar(a);
        assert_eq!(shell.registry().topmost_visible().unwrap().id, a);

        shell.toggle_taskbar(a);
        assert!(!shell.registry().get(a).unwrap().visible);
        let taskbar = shell.taskbar();
        assert_eq!(taskbar.iter().find(|t| t.active).unwrap().id, b);

        shell.toggle_taskbar(a);
        assert!(shell.registry().get(a).unwrap().visible);
        assert_eq!(shell.registry().topmost_visible().unwrap().id, a);
    }

    #[test]
    fn open_path_passes_entry_to_window() {
        let mut shell = shell();
        let window = shell.open_path("/C/Users/Paul/Documents/notes.txt").unwrap();
        assert_eq!(window.title, "notes.txt - Notepad");
        assert_eq!(window.file.unwrap().url.as_deref(), Some("/files/notes.txt"));

        let folder = shell.open_path("/C/Users/Paul/Music").unwrap();
        assert_eq!(folder.title, FILE_EXPLORER);

        assert!(shell.open_path("/nowhere").is_none());
        assert_eq!(shell.registry().len(), 2);
    }

    #[test]
    fn context_menu_actions_close_menu() {
        let mut shell = shell();
        shell.open_context_menu(10, 20);
        assert_eq!(shell.snapshot().context_menu, ContextMenu::Open { x: 10, y: 20 });

        assert!(shell.context_action(ContextAction::Refresh).is_none());
        assert_eq!(shell.snapshot().context_menu, ContextMenu::Closed);

        shell.open_context_menu(0, 0);
        let launched = shell.context_action(ContextAction::OpenTerminal).unwrap();
        assert_eq!(launched.window.title, TERMINAL);
        assert_eq!(shell.snapshot().context_menu, ContextMenu::Closed);
    }

    #[test]
    fn snapshot_orders_windows_by_stacking() {
        let mut shell = shell();
        let a = shell.launch("Notepad").window.id;
        let b = shell.launch("Paint").window.id;
        shell.bring_to_front(a);

        let snapshot = shell.snapshot();
        let order: Vec<_> = snapshot.windows.iter().map(|w| w.id).collect();
        assert_eq!(order, vec![b, a]);
        assert_eq!(snapshot.icons.len(), shell.icons().len());
        let taskbar: Vec<_> = snapshot.taskbar.iter().map(|t| t.id).collect();
        assert_eq!(taskbar, vec![a, b]);
    }
}
