use std::path::PathBuf;

use csv::Reader;
use serde::Deserialize;

use crate::domain::{ContactBook, Editor};
use crate::errors::AppError;

const IMPORT_PATH: &str = "./import_export/contacts.csv";

// Rows may come from an export (with an id column) or be hand-written
// without one; either way imported contacts get fresh ids.
#[derive(Debug, Deserialize)]
struct CsvRow {
    name: String,
    #[serde(rename = "phoneNumber")]
    phone: String,
}

/// Append the rows of a `.csv` file to the book. Every row passes
/// through the same editor gate as an interactively typed contact; rows
/// that fail it (duplicate name or number, bad phone, short name) are
/// skipped rather than aborting the import. Returns (imported, skipped).
pub fn import_contacts_from_csv(
    book: &mut ContactBook,
    src: Option<&str>,
) -> Result<(u64, u64), AppError> {
    let mut file_path: PathBuf = PathBuf::from(IMPORT_PATH);

    if let Some(path) = src {
        file_path = PathBuf::from(path);
    }

    if !file_path.exists() {
        return Err(AppError::NotFound("CSV file".to_string()));
    }

    if file_path.extension().is_some_and(|ext| ext != "csv") {
        return Err(AppError::Validation("File not .csv".to_string()));
    }

    let mut reader = Reader::from_path(&file_path)?;

    let mut imported: u64 = 0;
    let mut skipped: u64 = 0;
    let mut editor = Editor::default();

    for result in reader.deserialize() {
        let row: CsvRow = result?;

        editor.open_create();
        editor.input_name(&row.name, &book.names());
        editor.input_phone(&row.phone, &book.phones());

        if editor.save(book)? {
            imported += 1;
        } else {
            editor.close();
            skipped += 1;
        }
    }

    Ok((imported, skipped))
}
