/// Window Commands
/// Tauri commands for the window registry

use super::{emit_desktop, spawn_effect, SharedContent, SharedShell};
use crate::models::{WindowId, WindowRecord};
use tauri::{AppHandle, State};

/// Open a window; terminals start loading their first listing right away
#[tauri::command]
pub fn open_app(
    app: AppHandle,
    shell: State<'_, SharedShell>,
    content: State<'_, SharedContent>,
    title: String,
) -> WindowRecord {
    let (launched, fs) = {
        let mut guard = shell.lock();
        let launched = guard.launch(&title);
        emit_desktop(&app, &guard);
        (launched, guard.fs())
    };

    if let Some(effect) = launched.effect {
        spawn_effect(
            app,
            shell.inner().clone(),
            fs,
            content.inner().clone(),
            launched.window.id,
            effect,
        );
    }
    launched.window
}

/// Open the mock entry at `path` in a viewer window
#[tauri::command]
pub fn open_path(
    app: AppHandle,
    shell: State<'_, SharedShell>,
    path: String,
) -> Option<WindowRecord> {
    let mut shell = shell.lock();
    let window = shell.open_path(&path);
    if window.is_some() {
        emit_desktop(&app, &shell);
    }
    window
}

#[tauri::command]
pub fn close_app(app: AppHandle, shell: State<'_, SharedShell>, id: WindowId) {
    let mut shell = shell.lock();
    shell.close_app(id);
    emit_desktop(&app, &shell);
}

#[tauri::command]
pub fn minimize_app(app: AppHandle, shell: State<'_, SharedShell>, id: WindowId) {
    let mut shell = shell.lock();
    shell.minimize_app(id);
    emit_desktop(&app, &shell);
}

#[tauri::command]
pub fn restore_app(app: AppHandle, shell: State<'_, SharedShell>, id: WindowId) {
    let mut shell = shell.lock();
    shell.restore_app(id);
    emit_desktop(&app, &shell);
}

#[tauri::command]
pub fn bring_to_front(app: AppHandle, shell: State<'_, SharedShell>, id: WindowId) {
    let mut shell = shell.lock();
    shell.bring_to_front(id);
    emit_desktop(&app, &shell);
}
