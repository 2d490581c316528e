use anyhow::anyhow;
use bookshelf_client::{view::ShelfRow, BooksClient, NewBook, ReqwestClient, ServerShelf};
use bookshelf_store::BookId;

use crate::{BookArgs, RemoteCommand};

pub async fn run(base_url: &str, command: RemoteCommand) -> anyhow::Result<()> {
    let api = BooksClient::new(base_url, ReqwestClient::new())?;
    tracing::debug!(base_url = %api.base_url(), "using bookshelf server");
    let mut shelf = ServerShelf::new(api);

    match command {
        RemoteCommand::List => shelf.load().await,
        RemoteCommand::Add { book, read } => shelf.add(new_book(book, read)).await,
        RemoteCommand::Read { id } => {
            // The update is built from the fetched record
            shelf.load().await;
            shelf.mark_as_read(&BookId::from(id)).await;
        }
        RemoteCommand::Delete { id } => shelf.delete(&BookId::from(id)).await,
        RemoteCommand::Search { query } => shelf.search(&query).await,
    }

    if let Some(err) = shelf.last_error() {
        return Err(anyhow!("{err}"));
    }

    let view = shelf.view();
    print_section("Belum selesai dibaca", &view.unfinished);
    print_section("Selesai dibaca", &view.finished);
    Ok(())
}

fn new_book(book: BookArgs, is_read: bool) -> NewBook {
    NewBook {
        title: book.title,
        author: book.author,
        year: book.year,
        is_read,
    }
}

fn print_section(heading: &str, rows: &[ShelfRow]) {
    println!("{heading}");
    for row in rows {
        let actions: Vec<&str> = row.actions.iter().map(|action| action.label()).collect();
        println!("  {}\t{}\t[{}]", row.id, row.label, actions.join(", "));
    }
}
