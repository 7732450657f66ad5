use clap::Parser;
use dotenv::dotenv;

use crate::cli::{
    self,
    command::{Cli, Commands, SearchField, SortKey},
    shell,
};
use crate::domain::{Contact, ContactBook, Editor, SearchBar};
use crate::errors::AppError;
use crate::store::FileStore;
use crate::store::storage_port::{export_contacts_to_csv, import_contacts_from_csv};

pub fn run_app() -> Result<(), AppError> {
    dotenv().ok();

    let cli = Cli::parse();

    let mut book = ContactBook::new(Box::new(FileStore::new(&cli.storage_path)));

    let Some(command) = cli.command else {
        // No subcommand opens the interactive phonebook
        return shell::run_shell(&mut book);
    };

    match command {
        Commands::Add { name, phone } => {
            let mut editor = Editor::default();
            editor.open_create();
            editor.input_name(&name, &book.names());
            editor.input_phone(&phone, &book.phones());

            if !editor.save(&mut book)? {
                return Err(blocked_save_error(&editor));
            }

            println!("Contact added successfully");
            Ok(())
        }

        // Listing contacts
        Commands::List { sort, reverse } => {
            if book.contacts().is_empty() {
                println!("No contact yet");
                return Ok(());
            }

            // Sorting and reversing are display-time only; the stored
            // order never changes.
            let mut rows: Vec<&Contact> = book.contacts().iter().collect();
            if let Some(key) = sort {
                match key {
                    SortKey::Name => {
                        rows.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
                    }
                    SortKey::Phone => rows.sort_by(|a, b| a.phone.cmp(&b.phone)),
                }
            }

            if reverse {
                rows.reverse();
            }

            cli::render_rows(&rows);
            Ok(())
        }

        Commands::View { id } => {
            let contact = resolve_contact(&book, &id)?;
            println!("{}", cli::display_contact(contact));
            Ok(())
        }

        // Edit Contact
        Commands::Edit {
            id,
            new_name,
            new_phone,
        } => {
            let contact = resolve_contact(&book, &id)?.clone();

            let mut editor = Editor::default();
            editor.open_edit(&contact);

            if let Some(name) = new_name {
                editor.input_name(&name, &book.names());
            }
            if let Some(phone) = new_phone {
                editor.input_phone(&phone, &book.phones());
            }

            if !editor.save(&mut book)? {
                return Err(blocked_save_error(&editor));
            }

            println!("Contact updated successfully");
            Ok(())
        }

        // Delete Contact
        Commands::Delete { id } => {
            let target = resolve_contact(&book, &id)?.id;
            book.delete(&target)?;
            println!("Contact deleted successfully");
            Ok(())
        }

        // Search for a contact
        Commands::Search { term, by } => {
            let mut search = SearchBar::new();
            if matches!(by, SearchField::Phone) {
                search.toggle_mode();
            }
            search.set_term(&term);

            let found = search.filter(book.contacts());

            if found.is_empty() {
                println!("No contact matches \"{}\"", term);
                return Ok(());
            }

            cli::render_rows(&found);
            Ok(())
        }

        Commands::Import { src } => {
            let (imported, skipped) = import_contacts_from_csv(&mut book, src.as_deref())?;
            println!("Imported {imported} contacts ({skipped} skipped)");
            Ok(())
        }

        Commands::Export { des } => {
            let (path, count) = export_contacts_to_csv(book.contacts(), des.as_deref())?;
            println!("Exported {count} contacts to {}", path.display());
            Ok(())
        }
    }
}

fn resolve_contact<'a>(book: &'a ContactBook, token: &str) -> Result<&'a Contact, AppError> {
    book.find_by_prefix(token)
        .ok_or(AppError::NotFound("Contact".to_string()))
}

/// Turn the editor's blocked save into the error the process reports.
fn blocked_save_error(editor: &Editor) -> AppError {
    let Some(draft) = editor.draft() else {
        return AppError::Validation("No changes to save".to_string());
    };

    let mut reasons: Vec<&str> = Vec::new();
    if !draft.name_error.is_empty() {
        reasons.push(&draft.name_error);
    }
    if !draft.phone_error.is_empty() {
        reasons.push(&draft.phone_error);
    }

    if reasons.is_empty() {
        AppError::Validation("No changes to save".to_string())
    } else {
        AppError::Validation(reasons.join("; "))
    }
}
