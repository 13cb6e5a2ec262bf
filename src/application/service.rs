use crate::domain::model::book::Book;
use crate::domain::model::catalog::{BookUpdate, Catalog};
use crate::domain::repository::CatalogRepository;

use super::error::AppError;

/// カタログに対するユースケース。
/// openで一度だけload、以降はメモリ上で編集し、saveで明示的に永続化する。
pub struct CatalogService<R: CatalogRepository> {
    repo: R,
    catalog: Catalog,
}

impl<R: CatalogRepository> CatalogService<R> {
    /// カタログを開く。ファイル未作成なら空のカタログで始まり、
    /// 壊れたファイルは起動時エラーとして呼び出し元へ返す。
    pub fn open(repo: R) -> Result<Self, AppError> {
        let books = repo.load().map_err(|e| AppError::Load(Box::new(e)))?;
        let catalog = match books {
            Some(books) => Catalog::from_books(books),
            None => Catalog::new(),
        };
        Ok(Self { repo, catalog })
    }

    pub fn add_book(&mut self, book: Book) {
        self.catalog.create(book);
    }

    pub fn list_books(&self) -> Vec<Book> {
        self.catalog.read_all()
    }

    pub fn find_book(&self, isbn: &str) -> Option<&Book> {
        self.catalog.read_one(isbn)
    }

    pub fn update_book(&mut self, isbn: &str, update: BookUpdate) -> bool {
        self.catalog.update(isbn, update)
    }

    pub fn remove_book(&mut self, isbn: &str) -> bool {
        self.catalog.remove(isbn)
    }

    pub fn book_count(&self) -> usize {
        self.catalog.len()
    }

    /// カタログ全体を保存する。失敗してもメモリ上の状態は変わらないため、
    /// 呼び出し元は再試行できる。
    pub fn save(&self) -> Result<(), AppError> {
        self.repo
            .save(self.catalog.books())
            .map_err(|e| AppError::Save(Box::new(e)))
    }
}
