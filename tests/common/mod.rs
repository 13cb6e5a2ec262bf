//! Shared test harness for integration tests.

#![allow(dead_code)]

use std::cell::RefCell;

use shelfkeeper::domain::model::book::Book;
use shelfkeeper::domain::model::catalog::Catalog;
use shelfkeeper::domain::repository::CatalogRepository;

// =============================================================================
// InMemoryRepo — テスト用リポジトリ
// =============================================================================

#[derive(Debug, thiserror::Error)]
#[error("in-memory store error")]
pub struct InMemoryError;

/// ファイルI/O不要のインメモリリポジトリ。Noneは未保存状態。
pub struct InMemoryRepo {
    store: RefCell<Option<Vec<Book>>>,
}

impl InMemoryRepo {
    pub fn new() -> Self {
        Self {
            store: RefCell::new(None),
        }
    }

    pub fn with_books(books: Vec<Book>) -> Self {
        Self {
            store: RefCell::new(Some(books)),
        }
    }
}

impl CatalogRepository for InMemoryRepo {
    type LoadError = InMemoryError;
    type SaveError = InMemoryError;

    fn load(&self) -> Result<Option<Vec<Book>>, InMemoryError> {
        Ok(self.store.borrow().clone())
    }

    fn save(&self, books: &[Book]) -> Result<(), InMemoryError> {
        *self.store.borrow_mut() = Some(books.to_vec());
        Ok(())
    }
}

/// save が常に失敗するリポジトリ。
#[derive(Debug, thiserror::Error)]
#[error("write refused")]
pub struct WriteRefused;

pub struct ReadOnlyRepo;

impl CatalogRepository for ReadOnlyRepo {
    type LoadError = WriteRefused;
    type SaveError = WriteRefused;

    fn load(&self) -> Result<Option<Vec<Book>>, WriteRefused> {
        Ok(None)
    }

    fn save(&self, _books: &[Book]) -> Result<(), WriteRefused> {
        Err(WriteRefused)
    }
}

// =============================================================================
// Fixtures
// =============================================================================

/// 標準フィクスチャ:
/// ```text
/// Dune            | Frank Herbert  | 111 | not issued
/// 1984            | George Orwell  | 222 | not issued
/// Brave New World | Aldous Huxley  | 333 | issued
/// ```
pub fn standard_books() -> Vec<Book> {
    vec![
        Book::new("Dune", "Frank Herbert", "111"),
        Book::new("1984", "George Orwell", "222"),
        Book::new("Brave New World", "Aldous Huxley", "333").with_issued(true),
    ]
}

pub fn standard_catalog() -> Catalog {
    Catalog::from_books(standard_books())
}

// =============================================================================
// Assertion helpers
// =============================================================================

/// 結果がErrで、メッセージに指定文字列を含むことをassert。
pub fn assert_error_contains<T: std::fmt::Debug>(
    result: Result<T, impl std::fmt::Display>,
    expected: &str,
) {
    match result {
        Err(e) => {
            let msg = e.to_string();
            assert!(
                msg.contains(expected),
                "Expected error containing '{expected}', got: '{msg}'"
            );
        }
        Ok(v) => panic!("Expected error containing '{expected}', got Ok({v:?})"),
    }
}
