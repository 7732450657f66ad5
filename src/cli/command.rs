use clap::{Parser, Subcommand, ValueEnum};

use crate::store::DEFAULT_STORAGE_ROOT;

#[derive(Parser, Debug)]
#[command(name = "phonebook", version, about = "Local phonebook with a searchable contact list")]
pub struct Cli {
    /// Directory where contact data is stored
    #[arg(long, env = "STORAGE_PATH", default_value_t = String::from(DEFAULT_STORAGE_ROOT))]
    pub storage_path: String,

    /// With no subcommand the interactive phonebook opens
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommand and their flags
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new contact
    Add {
        /// Contact name
        #[arg(long)]
        name: String,

        /// Contact phone number
        #[arg(long)]
        phone: String,
    },
    /// List contacts
    List {
        /// Sort ordering (default is stored order)
        #[arg(long)]
        sort: Option<SortKey>,

        /// Reverse order
        #[arg(short, long)]
        reverse: bool,
    },
    /// Show the details of one contact
    View {
        /// Contact id, or a unique prefix of it
        #[arg(long)]
        id: String,
    },
    /// Edit the data of an existing contact
    /// Provide the contact id followed by the fields to change
    Edit {
        /// Contact id, or a unique prefix of it
        #[arg(long)]
        id: String,

        /// Update name
        #[arg(long)]
        new_name: Option<String>,

        /// Update phone number
        #[arg(long)]
        new_phone: Option<String>,
    },
    /// Delete a contact by id
    Delete {
        /// Contact id, or a unique prefix of it
        #[arg(long)]
        id: String,
    },
    /// Search contacts by name or phone number
    Search {
        /// Search term
        term: String,

        /// Field to match the term against
        #[arg(long, value_enum, default_value_t = SearchField::Name)]
        by: SearchField,
    },
    /// Import contacts from .csv file
    Import {
        /// File path to the source .csv file
        #[arg(short, long)]
        src: Option<String>,
    },
    /// Export contacts to a .csv file
    Export {
        /// File path to the destination location for export file
        #[arg(short, long)]
        des: Option<String>,
    },
}

/// Supported sort keys
#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum SortKey {
    Name,
    Phone,
}

/// Searchable fields
#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum SearchField {
    Name,
    Phone,
}
