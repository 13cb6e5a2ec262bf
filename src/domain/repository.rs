use super::model::book::Book;

/// 永続化の抽象。Infra層が実装する。
/// まだ何も保存されていない初回起動時、loadはNoneを返す。
/// load失敗は起動時致命、save失敗は再試行可能としてApplication層が扱う。
pub trait CatalogRepository {
    type LoadError: std::error::Error + Send + Sync + 'static;
    type SaveError: std::error::Error + Send + Sync + 'static;

    fn load(&self) -> Result<Option<Vec<Book>>, Self::LoadError>;
    fn save(&self, books: &[Book]) -> Result<(), Self::SaveError>;
}
