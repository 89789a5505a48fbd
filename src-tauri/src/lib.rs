/// deskshell
/// A simulated desktop shell: Tauri backend + web frontend
///
/// Module structure:
/// - commands: Tauri IPC handlers (frontend → backend), `desktop` feature only
/// - services: window registry, mock filesystem, terminal sessions
/// - models: Shared data types
/// - config: optional `shell.json` settings

pub mod config;
pub mod models;
pub mod services;

#[cfg(feature = "desktop")]
mod commands;

#[cfg(feature = "desktop")]
#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    use commands::{SharedContent, SharedShell};
    use config::ShellConfig;
    use parking_lot::Mutex;
    use services::{DirContentSource, MockFs, Shell};
    use std::sync::Arc;
    use tauri::{Manager, RunEvent};

    tauri::Builder::default()
        .setup(|app| {
            if cfg!(debug_assertions) {
                app.handle().plugin(
                    tauri_plugin_log::Builder::default()
                        .level(log::LevelFilter::Info)
                        .build(),
                )?;
            }

            let config_path = app.path().app_config_dir()?.join("shell.json");
            let config = ShellConfig::load_or_default(&config_path);
            let shell: SharedShell = Arc::new(Mutex::new(Shell::new(config, MockFs::new())));
            let content: SharedContent =
                Arc::new(DirContentSource::new(app.path().resource_dir()?));

            app.manage(shell);
            app.manage(content);
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::desktop::desktop_snapshot,
            commands::desktop::toggle_taskbar,
            commands::desktop::open_context_menu,
            commands::desktop::close_context_menu,
            commands::desktop::context_action,
            commands::windows::open_app,
            commands::windows::open_path,
            commands::windows::close_app,
            commands::windows::minimize_app,
            commands::windows::restore_app,
            commands::windows::bring_to_front,
            commands::files::fetch_files,
            commands::terminal::terminal_snapshot,
            commands::terminal::terminal_submit,
            commands::terminal::terminal_history_up,
            commands::terminal::terminal_history_down,
            commands::terminal::terminal_set_input,
        ])
        .build(tauri::generate_context!())
        .expect("error while building tauri application")
        .run(|app_handle, event| {
            if let RunEvent::Exit = event {
                if let Some(shell) = app_handle.try_state::<SharedShell>() {
                    shell.lock().close_all();
                }
            }
        });
}
