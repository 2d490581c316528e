use assert_cmd::Command;

fn bookshelf(dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("bookshelf").unwrap();
    cmd.arg("local").arg("--dir").arg(dir);
    cmd
}

fn stdout(cmd: &mut Command) -> String {
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "{output:?}");
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn local_shelf_persists_between_runs() {
    let dir = tempfile::tempdir().unwrap();

    let id = stdout(bookshelf(dir.path()).args(["add", "-t", "Dune", "-a", "Herbert", "-y", "1965"]));
    let id = id.trim().to_string();
    assert!(id.parse::<i64>().is_ok());
    stdout(bookshelf(dir.path()).args(["add", "-t", "Emma", "-a", "Austen", "-y", "1815", "--complete"]));

    let listed = stdout(bookshelf(dir.path()).arg("list"));
    let lines: Vec<&str> = listed.lines().collect();
    assert_eq!(lines[0], "Belum selesai dibaca");
    assert_eq!(lines[1], format!("  {id}\tDune\tPenulis: Herbert\tTahun: 1965"));
    assert_eq!(lines[2], "Selesai dibaca");
    assert!(lines[3].ends_with("\tEmma\tPenulis: Austen\tTahun: 1815"));

    let moved = stdout(bookshelf(dir.path()).args(["move", &id]));
    assert_eq!(moved.lines().nth(1), Some("Selesai dibaca"));

    assert!(dir.path().join("completeBookshelf.json").exists());
    assert!(dir.path().join("incompleteBookshelf.json").exists());
}

#[test]
fn search_hides_rows_and_html_marks_them() {
    let dir = tempfile::tempdir().unwrap();
    stdout(bookshelf(dir.path()).args(["add", "-t", "Dune"]));
    stdout(bookshelf(dir.path()).args(["add", "-t", "Emma"]));

    let found = stdout(bookshelf(dir.path()).args(["search", "dun"]));
    assert!(found.contains("\tDune\t"));
    assert!(!found.contains("\tEmma\t"));

    let html = stdout(bookshelf(dir.path()).args(["list", "--html"]));
    assert_eq!(html.matches("<article class=\"book_item red\"").count(), 2);
    assert!(!html.contains("display: none"));
}

#[test]
fn unknown_id_fails() {
    let dir = tempfile::tempdir().unwrap();
    bookshelf(dir.path())
        .args(["delete", "42"])
        .assert()
        .failure();
}
