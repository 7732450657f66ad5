pub use crate::cli::{command, run_app};
pub use crate::domain::{
    book::{CONTACTS_KEY, ContactBook},
    contact::Contact,
    editor::{Draft, Editor, EditorMode},
    search::{SearchBar, SearchMode},
    validation::{check_name, check_phone, is_valid_phone},
};
pub use crate::errors::AppError;
pub use crate::store::{self, FileStore, MemStore, SlotStore};
pub use uuid::Uuid;
