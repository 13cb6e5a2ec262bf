//! Text menu for shelfkeeper
//!
//! stdin/stdout menu loop <-> application::CatalogService
//!
//! 6 actions: add, view all, view one, update, delete, save & exit

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use crate::application::service::CatalogService;
use crate::domain::model::book::Book;
use crate::domain::model::catalog::BookUpdate;
use crate::domain::repository::CatalogRepository;
use crate::infra::json_store::JsonCatalogRepository;

// =============================================================================
// Public entry point
// =============================================================================

/// メニューを起動する。catalog_pathは蔵書JSONファイル。
pub fn run(catalog_path: PathBuf) -> anyhow::Result<()> {
    let repo = JsonCatalogRepository::new(&catalog_path);
    let mut service = CatalogService::open(repo)?;

    let label = catalog_path.display().to_string();
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_loop(&mut service, stdin.lock(), stdout.lock(), &label)
}

// =============================================================================
// Menu loop
// =============================================================================

const MENU: &str = "\n1.Add 2.View all 3.View one 4.Update 5.Delete 6.Save & Exit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Choice {
    Add,
    ViewAll,
    ViewOne,
    Update,
    Delete,
    SaveAndExit,
}

fn parse_choice(line: &str) -> Option<Choice> {
    match line.trim() {
        "1" => Some(Choice::Add),
        "2" => Some(Choice::ViewAll),
        "3" => Some(Choice::ViewOne),
        "4" => Some(Choice::Update),
        "5" => Some(Choice::Delete),
        "6" => Some(Choice::SaveAndExit),
        _ => None,
    }
}

/// 貸出フラグの入力。"1"のみ貸出中とみなす。
fn parse_issued(line: &str) -> bool {
    line.trim() == "1"
}

fn format_book(book: &Book) -> String {
    format!(
        "{} | {} | {} | Issued:{}",
        book.title(),
        book.author(),
        book.isbn(),
        u8::from(book.is_issued())
    )
}

/// メニューループ本体。入出力を差し替えられるようBufRead/Writeで受ける。
/// 入力が尽きたら（EOF）保存せずに抜ける。
fn run_loop<Repo, In, Out>(
    service: &mut CatalogService<Repo>,
    mut input: In,
    mut output: Out,
    path_label: &str,
) -> anyhow::Result<()>
where
    Repo: CatalogRepository,
    In: BufRead,
    Out: Write,
{
    loop {
        writeln!(output, "{MENU}")?;
        let Some(line) = read_line(&mut input)? else {
            break;
        };

        match parse_choice(&line) {
            Some(Choice::Add) => {
                let Some(title) = prompt(&mut input, &mut output, "Title: ")? else {
                    break;
                };
                let Some(author) = prompt(&mut input, &mut output, "Author: ")? else {
                    break;
                };
                let Some(isbn) = prompt(&mut input, &mut output, "ISBN: ")? else {
                    break;
                };
                service.add_book(Book::new(title, author, isbn));
                writeln!(output, "Book added.")?;
            }
            Some(Choice::ViewAll) => {
                for book in service.list_books() {
                    writeln!(output, "{}", format_book(&book))?;
                }
            }
            Some(Choice::ViewOne) => {
                let Some(isbn) = prompt(&mut input, &mut output, "ISBN to view: ")? else {
                    break;
                };
                match service.find_book(&isbn) {
                    Some(book) => writeln!(output, "{}", format_book(book))?,
                    None => writeln!(output, "Not found")?,
                }
            }
            Some(Choice::Update) => {
                let Some(isbn) = prompt(&mut input, &mut output, "ISBN to update: ")? else {
                    break;
                };
                if service.find_book(&isbn).is_none() {
                    writeln!(output, "Not found")?;
                    continue;
                }
                let Some(title) = prompt(&mut input, &mut output, "New title: ")? else {
                    break;
                };
                let Some(author) = prompt(&mut input, &mut output, "New author: ")? else {
                    break;
                };
                let Some(flag) = prompt(&mut input, &mut output, "Is issued? 1/0: ")? else {
                    break;
                };
                let updated = service.update_book(
                    &isbn,
                    BookUpdate {
                        title,
                        author,
                        issued: parse_issued(&flag),
                    },
                );
                if updated {
                    writeln!(output, "Updated")?;
                } else {
                    writeln!(output, "Not found")?;
                }
            }
            Some(Choice::Delete) => {
                let Some(isbn) = prompt(&mut input, &mut output, "ISBN to delete: ")? else {
                    break;
                };
                if service.remove_book(&isbn) {
                    writeln!(output, "Deleted")?;
                } else {
                    writeln!(output, "Not found")?;
                }
            }
            Some(Choice::SaveAndExit) => match service.save() {
                Ok(()) => {
                    writeln!(output, "Saved to {path_label}. Exiting.")?;
                    return Ok(());
                }
                // メモリ上のカタログは無傷なので、ループを続けて再試行させる。
                Err(e) => writeln!(output, "Save failed: {e}")?,
            },
            None => writeln!(output, "Invalid")?,
        }
    }

    Ok(())
}

// =============================================================================
// Input helpers
// =============================================================================

/// 1行読む。改行は取り除く。EOFならNone。
fn read_line(input: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    while buf.ends_with('\n') || buf.ends_with('\r') {
        buf.pop();
    }
    Ok(Some(buf))
}

fn prompt(
    input: &mut impl BufRead,
    output: &mut impl Write,
    label: &str,
) -> io::Result<Option<String>> {
    write!(output, "{label}")?;
    output.flush()?;
    read_line(input)
}

// =============================================================================
// Tests
// =============================================================================
