/// Command Interpreter
/// One terminal session: parses input lines, runs the built-in commands
/// against the mock filesystem and keeps scrollback and history.
///
/// Anything asynchronous (directory listings, file reads) is handed back to
/// the caller as an [`Effect`]. The caller runs it and feeds the result in
/// through [`TerminalSession::apply_listing`] or [`TerminalSession::apply_read`].

use std::collections::HashMap;

use crate::config::{ParentResolution, ShellConfig};
use crate::models::{FileEntry, FileKind, ScrollbackLine, TerminalSnapshot, WindowId};
use crate::services::content::{ContentSource, FetchError};
use crate::services::mock_fs::MockFs;

/// Work the session needs done outside the lock
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Fetch the listing of `path`; only the latest generation is applied
    LoadListing { generation: u64, path: String },
    /// Fetch the content behind `url` for a pending `cat`
    ReadFile { ticket: u64, url: String },
}

/// Outcome of an executed [`Effect`]
#[derive(Debug)]
pub enum Completion {
    Listing { generation: u64, entries: Vec<FileEntry> },
    Read { ticket: u64, result: Result<String, FetchError> },
}

impl Effect {
    /// Run the effect. Blocking for file reads, so call it off the UI thread.
    pub fn execute(self, fs: &MockFs, content: &dyn ContentSource) -> Completion {
        match self {
            Effect::LoadListing { generation, path } => Completion::Listing {
                generation,
                entries: fs.fetch_files(&path),
            },
            Effect::ReadFile { ticket, url } => Completion::Read {
                ticket,
                result: content.fetch(&url),
            },
        }
    }
}

struct PendingRead {
    prompt: String,
    name: String,
}

pub struct TerminalSession {
    current_path: String,
    listing: Vec<FileEntry>,
    generation: u64,
    lines: Vec<ScrollbackLine>,
    history: Vec<String>,
    cursor: Option<usize>,
    input: String,
    pending_reads: HashMap<u64, PendingRead>,
    next_ticket: u64,
    home_path: String,
    parent_resolution: ParentResolution,
    history_limit: usize,
}

impl TerminalSession {
    /// New session in the configured home directory, plus the fetch of its listing
    pub fn new(config: &ShellConfig) -> (Self, Effect) {
        let mut session = TerminalSession {
            current_path: config.home_path.clone(),
            listing: Vec::new(),
            generation: 0,
            lines: Vec::new(),
            history: Vec::new(),
            cursor: None,
            input: String::new(),
            pending_reads: HashMap::new(),
            next_ticket: 1,
            home_path: config.home_path.clone(),
            parent_resolution: config.parent_resolution,
            history_limit: config.history_limit.max(1),
        };
        let effect = session.reload_listing();
        (session, effect)
    }

    /// Run one line of input
    pub fn submit(&mut self, raw: &str) -> Option<Effect> {
        self.cursor = None;
        self.input.clear();

        let line = raw.trim();
        if line.is_empty() {
            return None;
        }
        self.push_history(line);

        let mut tokens = line.split_whitespace();
        let command = tokens.next().unwrap_or_default();
        let args: Vec<&str> = tokens.collect();
        let prompt = format!("{}> {}", self.current_path, line);
        log::debug!("terminal command {:?} args {:?}", command, args);

        let (result, effect) = match command {
            "clear" => {
                self.lines.clear();
                return None;
            }
            "ls" => (ScrollbackLine::output(self.ls()), None),
            "pwd" => (ScrollbackLine::output(self.current_path.clone()), None),
            "echo" => (ScrollbackLine::output(args.join(" ")), None),
            "cd" => self.cd(args.first().copied()),
            "cat" => match self.cat(args.first().copied(), &prompt) {
                Ok(effect) => return Some(effect),
                Err(line) => (line, None),
            },
            _ => (
                ScrollbackLine::error(format!("Command not found: {}", line)),
                None,
            ),
        };

        self.lines.push(ScrollbackLine::prompt(prompt));
        self.lines.push(result);
        effect
    }

    fn ls(&self) -> String {
        if self.listing.is_empty() {
            return "(empty)".to_string();
        }
        self.listing
            .iter()
            .map(|e| e.name.as_str())
            .collect::<Vec<_>>()
            .join("  ")
    }

    fn cd(&mut self, target: Option<&str>) -> (ScrollbackLine, Option<Effect>) {
        let Some(name) = target else {
            return (ScrollbackLine::error("Usage: cd <directory>"), None);
        };

        let next = if name == ".." {
            match self.parent_resolution {
                ParentResolution::Root => self.home_path.clone(),
                ParentResolution::Strip => parent_path(&self.current_path),
            }
        } else if self
            .listing
            .iter()
            .any(|e| e.kind == FileKind::Folder && e.name == name)
        {
            join_path(&self.current_path, name)
        } else {
            return (
                ScrollbackLine::error(format!("No such directory: {}", name)),
                None,
            );
        };

        self.current_path = next;
        (ScrollbackLine::output(""), Some(self.reload_listing()))
    }

    fn cat(&mut self, target: Option<&str>, prompt: &str) -> Result<Effect, ScrollbackLine> {
        let Some(name) = target else {
            return Err(ScrollbackLine::error("Usage: cat <file>"));
        };
        let entry = self
            .listing
            .iter()
            .find(|e| e.kind == FileKind::File && e.name == name)
            .ok_or_else(|| ScrollbackLine::error(format!("No such file: {}", name)))?;
        let url = entry
            .url
            .clone()
            .ok_or_else(|| ScrollbackLine::error(format!("Cannot display {}", name)))?;

        let ticket = self.next_ticket;
        self.next_ticket += 1;
        self.pending_reads.insert(
            ticket,
            PendingRead {
                prompt: prompt.to_string(),
                name: name.to_string(),
            },
        );
        Ok(Effect::ReadFile { ticket, url })
    }

    fn reload_listing(&mut self) -> Effect {
        self.generation += 1;
        self.listing.clear();
        Effect::LoadListing {
            generation: self.generation,
            path: self.current_path.clone(),
        }
    }

    pub fn apply(&mut self, completion: Completion) -> bool {
        match completion {
            Completion::Listing { generation, entries } => self.apply_listing(generation, entries),
            Completion::Read { ticket, result } => self.apply_read(ticket, result),
        }
    }

    /// Apply a finished listing fetch. Returns `false` if it was superseded.
    pub fn apply_listing(&mut self, generation: u64, entries: Vec<FileEntry>) -> bool {
        if generation != self.generation {
            log::debug!(
                "dropping stale listing (generation {}, current {})",
                generation,
                self.generation
            );
            return false;
        }
        self.listing = entries;
        true
    }

    /// Apply a finished `cat` read. Unknown tickets are ignored.
    pub fn apply_read(&mut self, ticket: u64, result: Result<String, FetchError>) -> bool {
        let Some(pending) = self.pending_reads.remove(&ticket) else {
            return false;
        };
        let line = match result {
            Ok(text) => ScrollbackLine::output(text),
            Err(e) => {
                log::warn!("cat {} failed: {}", pending.name, e);
                ScrollbackLine::error(format!("Error reading {}: {}", pending.name, e))
            }
        };
        self.lines.push(ScrollbackLine::prompt(pending.prompt));
        self.lines.push(line);
        true
    }

    fn push_history(&mut self, line: &str) {
        self.history.push(line.to_string());
        if self.history.len() > self.history_limit {
            let excess = self.history.len() - self.history_limit;
            self.history.drain(..excess);
        }
    }

    /// Arrow-up: recall the previous command
    pub fn history_up(&mut self) -> &str {
        if self.history.is_empty() {
            return &self.input;
        }
        let index = match self.cursor {
            None => self.history.len() - 1,
            Some(i) => i.saturating_sub(1),
        };
        self.cursor = Some(index);
        self.input = self.history[index].clone();
        &self.input
    }

    /// Arrow-down: walk forward, clearing the input past the newest entry
    pub fn history_down(&mut self) -> &str {
        match self.cursor {
            Some(i) if i + 1 < self.history.len() => {
                self.cursor = Some(i + 1);
                self.input = self.history[i + 1].clone();
            }
            Some(_) => {
                self.cursor = None;
                self.input.clear();
            }
            None => {}
        }
        &self.input
    }

    pub fn set_input(&mut self, input: &str) {
        self.input = input.to_string();
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    pub fn lines(&self) -> &[ScrollbackLine] {
        &self.lines
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn listing(&self) -> &[FileEntry] {
        &self.listing
    }

    pub fn snapshot(&self, window_id: WindowId) -> TerminalSnapshot {
        TerminalSnapshot {
            window_id,
            current_path: self.current_path.clone(),
            input: self.input.clone(),
            lines: self.lines.clone(),
        }
    }
}

fn join_path(base: &str, name: &str) -> String {
    if base.ends_with('/') {
        format!("{}{}", base, name)
    } else {
        format!("{}/{}", base, name)
    }
}

fn parent_path(path: &str) -> String {
    let trimmed = path.trim_end_matches('/');
    match trimmed.rfind('/') {
        Some(0) | None => "/".to_string(),
        Some(i) => trimmed[..i].to_string(),
    }
}
