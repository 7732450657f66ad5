use uuid::Uuid;

use crate::errors::AppError;

use super::book::ContactBook;
use super::contact::Contact;
use super::validation::{check_name, check_phone};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorMode {
    Create,
    Edit,
    View,
}

/// The transient, unsaved copy of a contact being created or edited.
/// Lives only while an editor session is open.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub id: Option<Uuid>,
    pub name: String,
    pub phone: String,
    pub is_dirty: bool,
    pub name_error: String,
    pub phone_error: String,
    original_name: String,
    original_phone: String,
}

impl Draft {
    fn from_contact(contact: &Contact) -> Self {
        Draft {
            id: Some(contact.id),
            name: contact.name.clone(),
            phone: contact.phone.clone(),
            original_name: contact.name.clone(),
            original_phone: contact.phone.clone(),
            ..Draft::default()
        }
    }
}

/// One tagged value for the whole editor: either no session, or an open
/// session in a definite mode carrying its draft. There is no reachable
/// combination like "view form that can save".
#[derive(Debug, Clone, Default)]
pub enum Editor {
    #[default]
    Closed,
    Open {
        mode: EditorMode,
        draft: Draft,
    },
}

impl Editor {
    pub fn open_create(&mut self) {
        *self = Editor::Open {
            mode: EditorMode::Create,
            draft: Draft::default(),
        };
    }

    pub fn open_edit(&mut self, contact: &Contact) {
        *self = Editor::Open {
            mode: EditorMode::Edit,
            draft: Draft::from_contact(contact),
        };
    }

    pub fn open_view(&mut self, contact: &Contact) {
        *self = Editor::Open {
            mode: EditorMode::View,
            draft: Draft::from_contact(contact),
        };
    }

    /// Cancel or explicit close. The draft is discarded either way.
    pub fn close(&mut self) {
        *self = Editor::Closed;
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Editor::Open { .. })
    }

    pub fn mode(&self) -> Option<EditorMode> {
        match self {
            Editor::Open { mode, .. } => Some(*mode),
            Editor::Closed => None,
        }
    }

    pub fn draft(&self) -> Option<&Draft> {
        match self {
            Editor::Open { draft, .. } => Some(draft),
            Editor::Closed => None,
        }
    }

    /// Name keystroke. Ignored when closed or in the read-only view form.
    pub fn input_name(&mut self, value: &str, existing_names: &[String]) {
        let Editor::Open { mode, draft } = self else {
            return;
        };
        if *mode == EditorMode::View {
            return;
        }

        draft.name = value.to_string();

        let check = check_name(
            value,
            &draft.original_name,
            *mode == EditorMode::Create,
            existing_names,
        );
        draft.name_error = check.error;
        draft.is_dirty = check.dirty;
    }

    /// Phone keystroke. Ignored when closed or in the read-only view form.
    pub fn input_phone(&mut self, value: &str, existing_phones: &[String]) {
        let Editor::Open { mode, draft } = self else {
            return;
        };
        if *mode == EditorMode::View {
            return;
        }

        draft.phone = value.to_string();

        let check = check_phone(value, &draft.original_phone, existing_phones);
        draft.phone_error = check.error;
        draft.is_dirty = check.dirty;
    }

    /// Save is available only for a dirty, error-free draft outside the
    /// view form.
    pub fn can_save(&self) -> bool {
        match self {
            Editor::Open { mode, draft } if *mode != EditorMode::View => {
                draft.is_dirty && draft.name_error.is_empty() && draft.phone_error.is_empty()
            }
            _ => false,
        }
    }

    /// Commit the draft through the repository and close the session.
    /// Returns false (and stays open) when the save gate is shut.
    pub fn save(&mut self, book: &mut ContactBook) -> Result<bool, AppError> {
        if !self.can_save() {
            return Ok(false);
        }

        let Editor::Open { mode, draft } = std::mem::take(self) else {
            return Ok(false);
        };

        match mode {
            EditorMode::Create => {
                book.add(draft.name, draft.phone)?;
            }
            EditorMode::Edit => {
                if let Some(id) = draft.id {
                    book.edit(&id, draft.name, draft.phone)?;
                }
            }
            // can_save never lets a view form through
            EditorMode::View => {}
        }

        Ok(true)
    }
}

// TEST
#[cfg(test)]
mod tests {

    use super::*;
    use crate::store::memory::MemStore;

    fn empty_book() -> ContactBook {
        ContactBook::new(Box::new(MemStore::new()))
    }

    fn book_with(entries: &[(&str, &str)]) -> ContactBook {
        let mut book = empty_book();
        for (name, phone) in entries {
            book.add(name.to_string(), phone.to_string())
                .expect("seed contact");
        }
        book
    }

    #[test]
    fn create_session_starts_clean() {
        let mut editor = Editor::default();
        editor.open_create();

        let draft = editor.draft().unwrap();
        assert_eq!(draft.name, "");
        assert_eq!(draft.phone, "");
        assert!(!draft.is_dirty);
        assert!(!editor.can_save());
    }

    #[test]
    fn create_then_save_adds_a_contact() -> Result<(), AppError> {
        let mut book = book_with(&[("Alice", "0803123456")]);
        let mut editor = Editor::default();

        editor.open_create();
        editor.input_name("Bob", &book.names());
        editor.input_phone("0812345678", &book.phones());

        assert!(editor.can_save());
        assert!(editor.save(&mut book)?);
        assert!(!editor.is_open());

        assert_eq!(book.contacts().len(), 2);
        assert_eq!(book.contacts()[1].name, "Bob");
        assert_eq!(book.contacts()[1].phone, "0812345678");
        Ok(())
    }

    #[test]
    fn duplicate_name_blocks_the_save() -> Result<(), AppError> {
        let mut book = book_with(&[("Alice", "0803123456")]);
        let mut editor = Editor::default();

        editor.open_create();
        editor.input_name("Alice", &book.names());
        editor.input_phone("0812345678", &book.phones());

        let draft = editor.draft().unwrap();
        assert_eq!(draft.name_error, "Name already exists in agenda");
        assert!(!editor.can_save());
        assert!(!editor.save(&mut book)?);
        assert!(editor.is_open());
        assert_eq!(book.contacts().len(), 1);
        Ok(())
    }

    #[test]
    fn edit_session_commits_in_place() -> Result<(), AppError> {
        let mut book = book_with(&[("Alice", "0803123456"), ("Bob", "0812345678")]);
        let id = book.contacts()[0].id;
        let mut editor = Editor::default();

        editor.open_edit(&book.contacts()[0].clone());
        editor.input_phone("0899999999", &book.phones());

        assert!(editor.can_save());
        assert!(editor.save(&mut book)?);

        assert_eq!(book.contacts()[0].id, id);
        assert_eq!(book.contacts()[0].phone, "0899999999");
        assert_eq!(book.contacts()[1].name, "Bob");
        Ok(())
    }

    #[test]
    fn retyping_the_original_phone_blocks_save_as_duplicate() {
        let book = book_with(&[("Alice", "0803123456")]);
        let mut editor = Editor::default();

        editor.open_edit(&book.contacts()[0].clone());
        editor.input_phone("0803123456", &book.phones());

        let draft = editor.draft().unwrap();
        assert_eq!(draft.phone_error, "Phone number already exists");
        assert!(!draft.is_dirty);
        assert!(!editor.can_save());
    }

    #[test]
    fn dirty_follows_the_last_edited_field() {
        let book = book_with(&[("Alice", "0803123456")]);
        let mut editor = Editor::default();

        editor.open_edit(&book.contacts()[0].clone());

        editor.input_phone("0899999999", &book.phones());
        assert!(editor.draft().unwrap().is_dirty);

        // Typing the name back to its original flips dirty off even
        // though the phone still differs.
        editor.input_name("Alice", &book.names());
        assert!(!editor.draft().unwrap().is_dirty);
        assert!(!editor.can_save());
    }

    #[test]
    fn view_form_is_read_only() {
        let book = book_with(&[("Alice", "0803123456")]);
        let mut editor = Editor::default();

        editor.open_view(&book.contacts()[0].clone());
        editor.input_name("Mallory", &book.names());
        editor.input_phone("0000000000", &book.phones());

        let draft = editor.draft().unwrap();
        assert_eq!(draft.name, "Alice");
        assert_eq!(draft.phone, "0803123456");
        assert!(!editor.can_save());
    }

    #[test]
    fn close_discards_the_draft() {
        let book = book_with(&[("Alice", "0803123456")]);
        let mut editor = Editor::default();

        editor.open_create();
        editor.input_name("Bob", &book.names());
        editor.close();

        assert!(!editor.is_open());
        assert!(editor.draft().is_none());

        // Reopening starts from scratch
        editor.open_create();
        assert_eq!(editor.draft().unwrap().name, "");
    }
}
