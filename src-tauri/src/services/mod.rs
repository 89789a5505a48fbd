/// Services module
/// Shell state and business logic: windows, mock filesystem, terminal sessions
/// Kept free of Tauri types so everything here runs headless

pub mod content;
pub mod interpreter;
pub mod mock_fs;
pub mod shell;
pub mod window_registry;

pub use content::{ContentSource, DirContentSource, FetchError};
pub use interpreter::{Completion, Effect, TerminalSession};
pub use mock_fs::MockFs;
pub use shell::Shell;
pub use window_registry::WindowRegistry;
