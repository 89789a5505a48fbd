/// Terminal Commands
/// Tauri commands driving the per-window terminal sessions

use super::{spawn_effect, SharedContent, SharedShell};
use crate::models::{TerminalSnapshot, WindowId};
use tauri::{AppHandle, State};

const NOT_FOUND: &str = "Terminal not found";

#[tauri::command]
pub fn terminal_snapshot(
    shell: State<'_, SharedShell>,
    window_id: WindowId,
) -> Result<TerminalSnapshot, String> {
    let shell = shell.lock();
    let session = shell.terminal(window_id).ok_or(NOT_FOUND)?;
    Ok(session.snapshot(window_id))
}

/// Run one input line. Async results arrive later as `terminal-output-{id}`.
#[tauri::command]
pub fn terminal_submit(
    app: AppHandle,
    shell: State<'_, SharedShell>,
    content: State<'_, SharedContent>,
    window_id: WindowId,
    line: String,
) -> Result<TerminalSnapshot, String> {
    let (snapshot, effect, fs) = {
        let mut guard = shell.lock();
        let fs = guard.fs();
        let session = guard.terminal_mut(window_id).ok_or(NOT_FOUND)?;
        let effect = session.submit(&line);
        (session.snapshot(window_id), effect, fs)
    };

    if let Some(effect) = effect {
        spawn_effect(
            app,
            shell.inner().clone(),
            fs,
            content.inner().clone(),
            window_id,
            effect,
        );
    }
    Ok(snapshot)
}

#[tauri::command]
pub fn terminal_history_up(
    shell: State<'_, SharedShell>,
    window_id: WindowId,
) -> Result<String, String> {
    let mut shell = shell.lock();
    let session = shell.terminal_mut(window_id).ok_or(NOT_FOUND)?;
    Ok(session.history_up().to_string())
}

#[tauri::command]
pub fn terminal_history_down(
    shell: State<'_, SharedShell>,
    window_id: WindowId,
) -> Result<String, String> {
    let mut shell = shell.lock();
    let session = shell.terminal_mut(window_id).ok_or(NOT_FOUND)?;
    Ok(session.history_down().to_string())
}

#[tauri::command]
pub fn terminal_set_input(
    shell: State<'_, SharedShell>,
    window_id: WindowId,
    input: String,
) -> Result<(), String> {
    let mut shell = shell.lock();
    let session = shell.terminal_mut(window_id).ok_or(NOT_FOUND)?;
    session.set_input(&input);
    Ok(())
}
