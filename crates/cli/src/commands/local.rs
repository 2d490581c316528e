use std::path::Path;

use anyhow::Context;
use bookshelf_client::{view::BookElement, FileStorage, LocalShelf};

use crate::LocalCommand;

pub fn run(dir: &Path, command: LocalCommand) -> anyhow::Result<()> {
    let storage = FileStorage::open(dir)
        .with_context(|| format!("failed to open storage directory {}", dir.display()))?;
    tracing::debug!(dir = %storage.dir().display(), "opening local bookshelf");
    let mut shelf = LocalShelf::load(storage).with_context(|| "failed to load bookshelf")?;

    match command {
        LocalCommand::List { html } => print_shelf(&shelf, html),
        LocalCommand::Add { book, complete } => {
            let id = shelf.add(book.title, book.author, book.year, complete)?;
            println!("{id}");
        }
        LocalCommand::Move { id } => {
            shelf.move_book(id)?;
            print_shelf(&shelf, false);
        }
        LocalCommand::Delete { id } => {
            shelf.delete(id)?;
            print_shelf(&shelf, false);
        }
        LocalCommand::Search { query } => {
            shelf.search(&query);
            print_shelf(&shelf, false);
        }
    }

    Ok(())
}

fn print_shelf(shelf: &LocalShelf<FileStorage>, html: bool) {
    let view = shelf.render();
    print_section("Belum selesai dibaca", &view.incomplete, html);
    print_section("Selesai dibaca", &view.complete, html);
}

fn print_section(heading: &str, elements: &[BookElement], html: bool) {
    println!("{heading}");
    for element in elements {
        if html {
            println!("{}", element.to_html());
        } else if !element.hidden {
            println!(
                "  {}\t{}\t{}\t{}",
                element.data_id, element.title, element.author_line, element.year_line
            );
        }
    }
}
