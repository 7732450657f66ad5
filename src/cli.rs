pub mod command;
pub mod run;
pub mod shell;

pub use run::run_app;

use crate::domain::Contact;
use crate::errors::AppError;
use std::io::{self, Write};

// OUTPUT FUNCTIONS
pub fn display_contact(contact: &Contact) -> String {
    let output = format!(
        "Name: {}\n\
        Phone Number: {}",
        contact.name, contact.phone
    );
    output
}

pub fn render_rows(contacts: &[&Contact]) {
    for (mut i, c) in contacts.iter().enumerate() {
        i += 1;
        println!("{i:>3}. {:<10} {:<20} {:15}", c.short_id(), c.name, c.phone);
    }
}

pub fn confirm_action(action: &str) -> Result<(), AppError> {
    println!("\nAre you sure you want to {}\n? (y/n)", action);
    print!("> ");
    io::stdout().flush()?;
    Ok(())
}

// INPUT FUNCTIONS
pub fn get_input() -> Result<String, AppError> {
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

pub fn get_input_to_lower() -> Result<String, AppError> {
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string().to_lowercase())
}
