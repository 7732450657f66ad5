//! The interactive phonebook: a rendered contact list with a search
//! box on top and editor sessions for add/view/edit, mirroring a
//! one-screen contact app in the terminal.

use std::io::{self, Write};

use crate::cli;
use crate::domain::{Contact, ContactBook, Editor, EditorMode, SearchBar, SearchMode};
use crate::errors::AppError;

enum ShellAction {
    Add,
    View,
    Edit,
    Delete,
    Search,
    ToggleMode,
    Exit,
}

pub fn run_shell(book: &mut ContactBook) -> Result<(), AppError> {
    let mut search = SearchBar::new();

    println!("\n\n--- PHONEBOOK ---");

    'outerloop: loop {
        println!();
        render_list(book, &search);

        let action = match parse_action_from_menu(&search) {
            Ok(action) => action,
            Err(message) => {
                // User entered an invalid menu option
                eprintln!("{}", message);
                continue 'outerloop;
            }
        };

        match action {
            ShellAction::Add => {
                let mut editor = Editor::default();
                editor.open_create();

                if editor_session(book, &mut editor)? {
                    println!("Contact added successfully!");
                }
            }

            ShellAction::View => {
                let Some(contact) = pick_contact(book, &search)? else {
                    continue 'outerloop;
                };

                let mut editor = Editor::default();
                editor.open_view(&contact);
                render_form(&editor);

                println!("\nPress enter to close");
                print!("> ");
                io::stdout().flush()?;
                let _ = cli::get_input()?;

                editor.close();
            }

            ShellAction::Edit => {
                let Some(contact) = pick_contact(book, &search)? else {
                    continue 'outerloop;
                };

                let mut editor = Editor::default();
                editor.open_edit(&contact);

                if editor_session(book, &mut editor)? {
                    println!("Contact updated successfully!");
                }
            }

            ShellAction::Delete => {
                let Some(contact) = pick_contact(book, &search)? else {
                    continue 'outerloop;
                };

                // Confirm action
                let message = format!(
                    "delete this contact from your contact list \n{}\n",
                    cli::display_contact(&contact)
                );
                cli::confirm_action(&message)?;

                let consent = cli::get_input_to_lower()?;
                if consent != "y" {
                    continue 'outerloop;
                }

                book.delete(&contact.id)?;
                println!("Contact deleted successfully!");
            }

            ShellAction::Search => {
                println!("\nSearch term (enter to clear): ");
                print!("> ");
                io::stdout().flush()?;

                let term = cli::get_input()?;
                search.set_term(&term);
            }

            ShellAction::ToggleMode => {
                search.toggle_mode();
                println!("Now searching by {}", search.mode.label());
            }

            ShellAction::Exit => {
                println!("\nBye!");
                return Ok(());
            }
        }
    }
}

fn render_list(book: &ContactBook, search: &SearchBar) {
    let rows = search.filter(book.contacts());

    if rows.is_empty() {
        if search.term().is_empty() {
            println!("No contact in contact list!");
        } else {
            println!("No contact matches \"{}\"", search.term());
        }
    } else {
        cli::render_rows(&rows);
    }

    if !search.term().is_empty() {
        println!(
            "\nShowing matches for \"{}\" (by {})",
            search.term(),
            search.mode.label()
        );
    }
}

fn parse_action_from_menu(search: &SearchBar) -> Result<ShellAction, AppError> {
    let other_mode = match search.mode {
        SearchMode::Name => SearchMode::Phone,
        SearchMode::Phone => SearchMode::Name,
    };

    println!("\n");
    println!("1. Add Contact");
    println!("2. View Contact");
    println!("3. Edit Contact");
    println!("4. Delete Contact");
    println!("5. Search");
    println!("6. Switch to search by {}", other_mode.label());
    println!("7. Exit");
    print!("> ");
    io::stdout().flush()?;

    let action = cli::get_input()?;

    match action.as_str() {
        "1" => Ok(ShellAction::Add),
        "2" => Ok(ShellAction::View),
        "3" => Ok(ShellAction::Edit),
        "4" => Ok(ShellAction::Delete),
        "5" => Ok(ShellAction::Search),
        "6" => Ok(ShellAction::ToggleMode),
        "7" => Ok(ShellAction::Exit),
        _ => Err(AppError::ParseCommand(action)),
    }
}

/// Let the user pick a contact from the currently shown (filtered)
/// list by its row number. `*` backs out.
fn pick_contact(book: &ContactBook, search: &SearchBar) -> Result<Option<Contact>, AppError> {
    'pick: loop {
        let rows = search.filter(book.contacts());

        if rows.is_empty() {
            println!("No contact to pick from");
            return Ok(None);
        }

        println!("\nEnter a contact number \n* to go back: ");
        print!("> ");
        io::stdout().flush()?;

        let input = cli::get_input()?;

        if input == "*" {
            return Ok(None);
        }

        let index = match input.parse::<usize>() {
            Ok(n) => n,
            Err(e) => {
                eprintln!("{}", AppError::from(e));
                continue 'pick;
            }
        };

        // Rows are numbered from 1
        match index.checked_sub(1).and_then(|i| rows.get(i)) {
            Some(contact) => return Ok(Some((*contact).clone())),
            None => {
                eprintln!("{}", AppError::NotFound("Contact".to_string()));
                continue 'pick;
            }
        }
    }
}

/// Walk one editor session field by field. Every entered value is an
/// input event that re-runs the checks; in edit mode a bare enter
/// leaves the field untouched, like an untouched form field. Returns
/// whether a save happened.
fn editor_session(book: &mut ContactBook, editor: &mut Editor) -> Result<bool, AppError> {
    let is_new = editor.mode() == Some(EditorMode::Create);

    'session: loop {
        // Name field
        if is_new {
            println!("\nEnter contact name \n* to go back: ");
        } else {
            let current = editor.draft().map(|d| d.name.clone()).unwrap_or_default();
            println!("\nEnter contact name (enter keeps \"{current}\") \n* to go back: ");
        }
        print!("> ");
        io::stdout().flush()?;

        let input = cli::get_input()?;

        if input == "*" {
            editor.close();
            return Ok(false);
        }

        if is_new || !input.is_empty() {
            editor.input_name(&input, &book.names());
        }

        if let Some(draft) = editor.draft()
            && !draft.name_error.is_empty()
        {
            eprintln!("{}", draft.name_error);
            continue 'session;
        }

        // Phone field
        if is_new {
            println!("\nEnter contact number \n* to go back: ");
        } else {
            let current = editor.draft().map(|d| d.phone.clone()).unwrap_or_default();
            println!("\nEnter contact number (enter keeps \"{current}\") \n* to go back: ");
        }
        print!("> ");
        io::stdout().flush()?;

        let input = cli::get_input()?;

        if input == "*" {
            editor.close();
            return Ok(false);
        }

        if is_new || !input.is_empty() {
            editor.input_phone(&input, &book.phones());
        }

        if let Some(draft) = editor.draft()
            && !draft.phone_error.is_empty()
        {
            eprintln!("{}", draft.phone_error);
            continue 'session;
        }

        if editor.save(book)? {
            return Ok(true);
        }

        // Clean draft but nothing changed; keep the session open
        eprintln!("No changes to save");
    }
}

fn render_form(editor: &Editor) {
    let Some(draft) = editor.draft() else {
        return;
    };

    let title = match editor.mode() {
        Some(EditorMode::Create) => "New Contact",
        Some(EditorMode::Edit) => "Edit Contact",
        _ => "Contact Details",
    };

    println!("\n--- {title} ---");
    println!("Name: {}", draft.name);
    println!("Phone Number: {}", draft.phone);
}
