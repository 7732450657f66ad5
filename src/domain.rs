pub mod book;
pub mod contact;
pub mod editor;
pub mod search;
pub mod validation;

pub use book::{CONTACTS_KEY, ContactBook};
pub use contact::Contact;
pub use editor::{Draft, Editor, EditorMode};
pub use search::{SearchBar, SearchMode};
