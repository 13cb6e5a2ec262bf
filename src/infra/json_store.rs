use std::path::PathBuf;

use serde_json::Value;

use crate::domain::error::DecodeError;
use crate::domain::model::book::Book;
use crate::domain::repository::CatalogRepository;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("expected a top-level JSON array")]
    NotAnArray,
    #[error("record {index}: {source}")]
    Record { index: usize, source: DecodeError },
}

#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// 保存テキストを生成する。カタログ全体をpretty-printedなJSON配列にする。
pub fn encode_books(books: &[Book]) -> Result<String, SaveError> {
    Ok(serde_json::to_string_pretty(books)?)
}

/// 保存テキストをパースする。トップレベルは配列のみ受け付け、
/// 要素のデコード失敗はインデックス付きで報告する。
pub fn decode_books(content: &str) -> Result<Vec<Book>, LoadError> {
    let value: Value = serde_json::from_str(content)?;
    let items = value.as_array().ok_or(LoadError::NotAnArray)?;
    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            Book::from_value(item).map_err(|source| LoadError::Record { index, source })
        })
        .collect()
}

/// JSONファイルによるCatalogRepository実装。
/// 1カタログ = 1ファイル（トップレベル配列）。
pub struct JsonCatalogRepository {
    path: PathBuf,
}

impl JsonCatalogRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CatalogRepository for JsonCatalogRepository {
    type LoadError = LoadError;
    type SaveError = SaveError;

    fn load(&self) -> Result<Option<Vec<Book>>, LoadError> {
        // ファイルが無い・開けない場合は初回起動状態であってエラーではない。
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(_) => return Ok(None),
        };
        decode_books(&content).map(Some)
    }

    // 上書き保存。テンポラリファイル経由のスワップは行わない。
    fn save(&self, books: &[Book]) -> Result<(), SaveError> {
        let content = encode_books(books)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}
