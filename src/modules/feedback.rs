//! User-facing failure messages shared by the book modules.

use bookshelf_http::error::AppError;
use bookshelf_store::{StoreError, ValidationError};

/// Which operation failed; selects the message wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Add,
    Update,
    Delete,
    Get,
}

impl Action {
    fn failure_prefix(self) -> &'static str {
        match self {
            Action::Add => "Gagal menambahkan buku.",
            Action::Update => "Gagal memperbarui buku.",
            Action::Delete => "Buku gagal dihapus.",
            Action::Get => "Buku gagal ditampilkan.",
        }
    }
}

/// Map a store failure to the envelope the client sees. `title_field` names
/// the title attribute in the variant's vocabulary ("nama", "judul").
pub fn reject(action: Action, err: StoreError, title_field: &str) -> AppError {
    let prefix = action.failure_prefix();

    match err {
        StoreError::Validation(ValidationError::MissingTitle) => {
            AppError::validation(format!("{prefix} Mohon isi {title_field} buku"))
        }
        StoreError::Validation(ValidationError::ReadPageExceedsPageCount { .. }) => {
            AppError::validation(format!(
                "{prefix} readPage tidak boleh lebih besar dari pageCount"
            ))
        }
        StoreError::NotFound(_) if action == Action::Get => {
            AppError::not_found("Buku tidak ditemukan")
        }
        StoreError::NotFound(_) => AppError::not_found(format!("{prefix} Id tidak ditemukan")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookshelf_store::BookId;

    fn message(err: AppError) -> String {
        match err {
            AppError::Validation { message } | AppError::NotFound { message } => message,
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn validation_messages_carry_action_prefix() {
        let err = StoreError::Validation(ValidationError::MissingTitle);
        assert_eq!(
            message(reject(Action::Add, err.clone(), "nama")),
            "Gagal menambahkan buku. Mohon isi nama buku"
        );
        assert_eq!(
            message(reject(Action::Update, err, "judul")),
            "Gagal memperbarui buku. Mohon isi judul buku"
        );
    }

    #[test]
    fn read_page_message() {
        let err = StoreError::Validation(ValidationError::ReadPageExceedsPageCount {
            read_page: 500,
            page_count: 412,
        });
        assert_eq!(
            message(reject(Action::Add, err, "nama")),
            "Gagal menambahkan buku. readPage tidak boleh lebih besar dari pageCount"
        );
    }

    #[test]
    fn not_found_messages_per_action() {
        let err = || StoreError::NotFound(BookId::from("x"));
        assert_eq!(message(reject(Action::Get, err(), "nama")), "Buku tidak ditemukan");
        assert_eq!(
            message(reject(Action::Update, err(), "nama")),
            "Gagal memperbarui buku. Id tidak ditemukan"
        );
        assert_eq!(
            message(reject(Action::Delete, err(), "nama")),
            "Buku gagal dihapus. Id tidak ditemukan"
        );
    }
}
