use serde::Serialize;
use serde_json::{Map, Value};

use crate::domain::error::DecodeError;

/// 蔵書1冊分のレコード。Catalogが所有し、Catalogを通じて編集する。
/// 永続化境界でのキー名は `isIssued`（`issued`ではない）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Book {
    title: String,
    author: String,
    isbn: String,
    #[serde(rename = "isIssued")]
    issued: bool,
}

impl Book {
    /// 新規登録時は未貸出で作られる。
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        isbn: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            isbn: isbn.into(),
            issued: false,
        }
    }

    pub fn with_issued(mut self, issued: bool) -> Self {
        self.issued = issued;
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn isbn(&self) -> &str {
        &self.isbn
    }

    pub fn is_issued(&self) -> bool {
        self.issued
    }

    /// 構造化形式（JSONオブジェクト）から復元する。
    /// キー欠落と型不一致を区別する。失敗時は部分構築しない。
    pub fn from_value(value: &Value) -> Result<Self, DecodeError> {
        let obj = value.as_object().ok_or(DecodeError::NotAnObject)?;
        Ok(Self {
            title: require_str(obj, "title")?,
            author: require_str(obj, "author")?,
            isbn: require_str(obj, "isbn")?,
            issued: require_bool(obj, "isIssued")?,
        })
    }

    // --- 内部操作（Catalog経由でのみ呼ばれる） ---

    pub(crate) fn set_title(&mut self, title: String) {
        self.title = title;
    }

    pub(crate) fn set_author(&mut self, author: String) {
        self.author = author;
    }

    pub(crate) fn set_issued(&mut self, issued: bool) {
        self.issued = issued;
    }
}

fn require_str(obj: &Map<String, Value>, field: &'static str) -> Result<String, DecodeError> {
    match obj.get(field) {
        None => Err(DecodeError::MissingField(field)),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(DecodeError::WrongType {
            field,
            expected: "string",
        }),
    }
}

fn require_bool(obj: &Map<String, Value>, field: &'static str) -> Result<bool, DecodeError> {
    match obj.get(field) {
        None => Err(DecodeError::MissingField(field)),
        Some(Value::Bool(b)) => Ok(*b),
        Some(_) => Err(DecodeError::WrongType {
            field,
            expected: "boolean",
        }),
    }
}
