/// Desktop Commands
/// Snapshot, taskbar and context menu

use super::{emit_desktop, spawn_effect, SharedContent, SharedShell};
use crate::models::{ContextAction, DesktopSnapshot, WindowId};
use tauri::{AppHandle, State};

#[tauri::command]
pub fn desktop_snapshot(shell: State<'_, SharedShell>) -> DesktopSnapshot {
    shell.lock().snapshot()
}

#[tauri::command]
pub fn toggle_taskbar(app: AppHandle, shell: State<'_, SharedShell>, id: WindowId) {
    let mut shell = shell.lock();
    shell.toggle_taskbar(id);
    emit_desktop(&app, &shell);
}

#[tauri::command]
pub fn open_context_menu(app: AppHandle, shell: State<'_, SharedShell>, x: i32, y: i32) {
    let mut shell = shell.lock();
    shell.open_context_menu(x, y);
    emit_desktop(&app, &shell);
}

#[tauri::command]
pub fn close_context_menu(app: AppHandle, shell: State<'_, SharedShell>) {
    let mut shell = shell.lock();
    shell.close_context_menu();
    emit_desktop(&app, &shell);
}

#[tauri::command]
pub fn context_action(
    app: AppHandle,
    shell: State<'_, SharedShell>,
    content: State<'_, SharedContent>,
    action: ContextAction,
) {
    let (launched, fs) = {
        let mut guard = shell.lock();
        let launched = guard.context_action(action);
        emit_desktop(&app, &guard);
        (launched, guard.fs())
    };

    if let Some(launched) = launched {
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
    }
}
