/// Commands module
/// All Tauri commands (IPC handlers) are defined here
/// Commands act as the boundary between the frontend and the shell services

pub mod desktop;
pub mod files;
pub mod terminal;
pub mod windows;

use crate::models::WindowId;
use crate::services::{ContentSource, Effect, MockFs, Shell};
use parking_lot::Mutex;
use std::sync::Arc;
use tauri::{AppHandle, Emitter};

/// Shell state shared by every command
pub type SharedShell = Arc<Mutex<Shell>>;

/// Content source shared by every command
pub type SharedContent = Arc<dyn ContentSource>;

/// Push the current desktop snapshot to the frontend
pub(crate) fn emit_desktop(app: &AppHandle, shell: &Shell) {
    let _ = app.emit("desktop-changed", shell.snapshot());
}

/// Run a terminal effect off the IPC thread and emit the terminal's new state
/// once it has been applied. Must be called without holding the shell lock.
pub(crate) fn spawn_effect(
    app: AppHandle,
    shell: SharedShell,
    fs: Arc<MockFs>,
    content: SharedContent,
    window_id: WindowId,
    effect: Effect,
) {
    tauri::async_runtime::spawn_blocking(move || {
        let completion = effect.execute(&fs, content.as_ref());
        let snapshot = {
            let mut shell = shell.lock();
            if !shell.apply(window_id, completion) {
                return;
            }
            shell.terminal(window_id).map(|t| t.snapshot(window_id))
        };
        if let Some(snapshot) = snapshot {
            let _ = app.emit(&format!("terminal-output-{}", window_id), snapshot);
        }
    });
}
