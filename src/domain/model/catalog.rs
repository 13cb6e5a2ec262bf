use super::book::Book;

/// 更新リクエスト。一致したレコードのisbnは変更されない
/// （フィールド自体を持たないため型レベルで保証される）。
#[derive(Debug, Clone)]
pub struct BookUpdate {
    pub title: String,
    pub author: String,
    pub issued: bool,
}

/// メモリ上の蔵書コレクション — 挿入順のみを保持する。
/// ISBN重複は挿入時に検証しない。検索・更新は先頭一致、削除は全一致。
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    books: Vec<Book>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_books(books: Vec<Book>) -> Self {
        Self { books }
    }

    /// 末尾に追加する。常に成功し、重複チェックは行わない。
    pub fn create(&mut self, book: Book) {
        self.books.push(book);
    }

    /// 挿入順のコピーを返す。
    pub fn read_all(&self) -> Vec<Book> {
        self.books.clone()
    }

    /// 先頭から線形走査し、最初にisbnが一致したレコードを返す。
    pub fn read_one(&self, isbn: &str) -> Option<&Book> {
        self.books.iter().find(|b| b.isbn() == isbn)
    }

    /// 最初に一致したレコードのtitle/author/issuedを上書きする。
    /// 一致がなければ何も変えずfalseを返す。
    pub fn update(&mut self, isbn: &str, new_data: BookUpdate) -> bool {
        match self.books.iter_mut().find(|b| b.isbn() == isbn) {
            Some(book) => {
                book.set_title(new_data.title);
                book.set_author(new_data.author);
                book.set_issued(new_data.issued);
                true
            }
            None => false,
        }
    }

    /// isbnが一致するレコードを全て取り除く。残りの相対順は保たれる。
    /// 1件以上取り除いたときtrue。
    pub fn remove(&mut self, isbn: &str) -> bool {
        let before = self.books.len();
        self.books.retain(|b| b.isbn() != isbn);
        self.books.len() < before
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}
