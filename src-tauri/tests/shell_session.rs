use deskshell_lib::config::ShellConfig;
use deskshell_lib::models::{LineKind, WindowId};
use deskshell_lib::services::shell::TERMINAL;
use deskshell_lib::services::{DirContentSource, Effect, MockFs, Shell};
use pretty_assertions::assert_eq;
use std::fs;

/// Execute an effect immediately and feed it back, like the IPC layer does
fn settle(shell: &mut Shell, content: &DirContentSource, id: WindowId, effect: Option<Effect>) {
    if let Some(effect) = effect {
        let fs = shell.fs();
        let completion = effect.execute(&fs, content);
        assert!(shell.apply(id, completion));
    }
}

fn submit(shell: &mut Shell, content: &DirContentSource, id: WindowId, line: &str) {
    let effect = shell.terminal_mut(id).unwrap().submit(line);
    settle(shell, content, id, effect);
}

fn last_line(shell: &Shell, id: WindowId) -> String {
    shell.terminal(id).unwrap().lines().last().unwrap().text.clone()
}

#[test]
fn terminal_walks_the_mock_tree_and_reads_files() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("files")).unwrap();
    fs::write(dir.path().join("files/notes.txt"), "water the plants").unwrap();
    let content = DirContentSource::new(dir.path());

    let mut shell = Shell::new(ShellConfig::default(), MockFs::new());
    let launched = shell.launch(TERMINAL);
    let id = launched.window.id;
    settle(&mut shell, &content, id, launched.effect);

    submit(&mut shell, &content, id, "ls");
    assert_eq!(last_line(&shell, id), "Documents  Music  video.mp4");

    submit(&mut shell, &content, id, "cd Documents");
    submit(&mut shell, &content, id, "pwd");
    assert_eq!(last_line(&shell, id), "/C/Users/Paul/Documents");

    submit(&mut shell, &content, id, "cat notes.txt");
    assert_eq!(last_line(&shell, id), "water the plants");

    submit(&mut shell, &content, id, "cd ..");
    submit(&mut shell, &content, id, "cat video.mp4");
    let session = shell.terminal(id).unwrap();
    let last = session.lines().last().unwrap();
    assert_eq!(last.kind, LineKind::Error);
    assert_eq!(last.text, "Error reading video.mp4: /files/video.mp4 not found");
}

#[test]
fn windows_and_terminals_share_one_lifecycle() {
    let mut shell = Shell::new(ShellConfig::default(), MockFs::new());
    let term = shell.launch(TERMINAL).window.id;
    let paint = shell.launch("Paint").window.id;
    let notes = shell
        .open_path("/C/Users/Paul/Documents/notes.txt")
        .unwrap()
        .id;

    shell.bring_to_front(term);
    shell.minimize_app(notes);
    let snapshot = shell.snapshot();
    let order: Vec<_> = snapshot.windows.iter().map(|w| w.id).collect();
    assert_eq!(order, vec![paint, notes, term]);
    assert_eq!(
        snapshot.taskbar.iter().filter(|t| t.active).map(|t| t.id).collect::<Vec<_>>(),
        vec![term]
    );

    shell.close_app(term);
    shell.close_app(term);
    assert!(shell.terminal(term).is_none());
    assert_eq!(shell.registry().len(), 2);
}
