//! Render models produced by the two sync strategies.

use bookshelf_app::modules::shelf::models::ShelfBook;
use bookshelf_store::BookId;

use crate::local_sync::StoredBook;

/// Button offered next to a server-backed row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    MarkAsRead,
    Delete,
}

impl RowAction {
    pub fn label(self) -> &'static str {
        match self {
            RowAction::MarkAsRead => "Tandai Selesai",
            RowAction::Delete => "Hapus",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShelfRow {
    pub id: BookId,
    pub label: String,
    pub actions: Vec<RowAction>,
}

/// Server-backed view: the fetched list partitioned on the read flag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShelfView {
    pub unfinished: Vec<ShelfRow>,
    pub finished: Vec<ShelfRow>,
}

impl ShelfView {
    pub fn render(books: &[ShelfBook]) -> Self {
        let mut view = Self::default();
        for book in books {
            let label = format!("{} oleh {} ({})", book.title, book.author, book.year);
            if book.is_read {
                view.finished.push(ShelfRow {
                    id: book.id.clone(),
                    label,
                    actions: vec![RowAction::Delete],
                });
            } else {
                view.unfinished.push(ShelfRow {
                    id: book.id.clone(),
                    label,
                    actions: vec![RowAction::MarkAsRead, RowAction::Delete],
                });
            }
        }
        view
    }

    pub fn len(&self) -> usize {
        self.unfinished.len() + self.finished.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub label: &'static str,
    pub class: &'static str,
}

/// One `article.book_item` element of the local bookshelf page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookElement {
    pub data_id: i64,
    pub class_list: [&'static str; 2],
    pub title: String,
    pub author_line: String,
    pub year_line: String,
    pub move_button: Button,
    pub delete_button: Button,
    pub hidden: bool,
}

fn completion_class(is_complete: bool) -> &'static str {
    if is_complete {
        "green"
    } else {
        "red"
    }
}

impl BookElement {
    pub fn render(book: &StoredBook, visible: bool) -> Self {
        let class = completion_class(book.is_complete);
        Self {
            data_id: book.id,
            class_list: ["book_item", class],
            title: book.title.clone(),
            author_line: format!("Penulis: {}", book.author),
            year_line: format!("Tahun: {}", book.year),
            move_button: Button {
                label: if book.is_complete {
                    "Belum selesai dibaca"
                } else {
                    "Selesai dibaca"
                },
                class,
            },
            delete_button: Button {
                label: "Hapus buku",
                class: "red",
            },
            hidden: !visible,
        }
    }

    /// Markup for the element, with text content escaped.
    pub fn to_html(&self) -> String {
        let style = if self.hidden {
            " style=\"display: none\""
        } else {
            ""
        };
        format!(
            "<article class=\"{classes}\" data-id=\"{id}\"{style}>\
             <h3>{title}</h3><p>{author}</p><p>{year}</p>\
             <div class=\"action\">\
             <button class=\"{move_class}\">{move_label}</button>\
             <button class=\"{delete_class}\">{delete_label}</button>\
             </div></article>",
            classes = self.class_list.join(" "),
            id = self.data_id,
            title = escape(&self.title),
            author = escape(&self.author_line),
            year = escape(&self.year_line),
            move_class = self.move_button.class,
            move_label = self.move_button.label,
            delete_class = self.delete_button.class,
            delete_label = self.delete_button.label,
        )
    }
}

/// Local view: the two lists in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookshelfView {
    pub incomplete: Vec<BookElement>,
    pub complete: Vec<BookElement>,
}

impl BookshelfView {
    /// Titles of the elements currently shown, incomplete list first.
    pub fn visible_titles(&self) -> Vec<&str> {
        self.incomplete
            .iter()
            .chain(&self.complete)
            .filter(|element| !element.hidden)
            .map(|element| element.title.as_str())
            .collect()
    }
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}
