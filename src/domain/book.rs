use uuid::Uuid;

use crate::errors::AppError;
use crate::store::{self, SlotStore};

use super::contact::Contact;

/// Slot name the contact list lives under.
pub const CONTACTS_KEY: &str = "contacts";

/// The in-memory contact list, loaded from a store slot at construction
/// and written back after every mutation. Order is insertion order;
/// deletions remove in place.
pub struct ContactBook {
    contacts: Vec<Contact>,
    store: Box<dyn SlotStore>,
}

impl ContactBook {
    pub fn new(store: Box<dyn SlotStore>) -> Self {
        let contacts = store::load_or(store.as_ref(), CONTACTS_KEY, Vec::new());
        Self { contacts, store }
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn get(&self, id: &Uuid) -> Option<&Contact> {
        self.contacts.iter().find(|c| &c.id == id)
    }

    /// Resolve a full id or a unique prefix of one.
    /// Ambiguous prefixes resolve to nothing.
    pub fn find_by_prefix(&self, token: &str) -> Option<&Contact> {
        if token.is_empty() {
            return None;
        }

        let mut matches = self
            .contacts
            .iter()
            .filter(|c| c.id.to_string().starts_with(token));

        match (matches.next(), matches.next()) {
            (Some(contact), None) => Some(contact),
            _ => None,
        }
    }

    pub fn add(&mut self, name: String, phone: String) -> Result<Uuid, AppError> {
        let contact = Contact::new(name, phone);
        let id = contact.id;

        self.contacts.push(contact);
        self.persist()?;
        Ok(id)
    }

    /// Replace the record matching `id` in place. An unknown id leaves
    /// the list unchanged; the caller is not told either way.
    pub fn edit(&mut self, id: &Uuid, name: String, phone: String) -> Result<(), AppError> {
        if let Some(contact) = self.contacts.iter_mut().find(|c| &c.id == id) {
            contact.name = name;
            contact.phone = phone;
        }

        self.persist()
    }

    /// Remove the record matching `id`. Unknown ids are a silent no-op.
    pub fn delete(&mut self, id: &Uuid) -> Result<(), AppError> {
        self.contacts.retain(|c| &c.id != id);
        self.persist()
    }

    /// Every stored name, fed to the editor's uniqueness checks.
    pub fn names(&self) -> Vec<String> {
        self.contacts.iter().map(|c| c.name.clone()).collect()
    }

    /// Every stored phone number.
    pub fn phones(&self) -> Vec<String> {
        self.contacts.iter().map(|c| c.phone.clone()).collect()
    }

    pub fn store(&self) -> &dyn SlotStore {
        self.store.as_ref()
    }

    fn persist(&mut self) -> Result<(), AppError> {
        store::save(self.store.as_mut(), CONTACTS_KEY, &self.contacts)
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

    #[test]
    fn add_appends_and_persists() -> Result<(), AppError> {
        let mut book = empty_book();

        book.add("Uche".to_string(), "0812345678".to_string())?;
        book.add("Alex".to_string(), "0898765432".to_string())?;

        assert_eq!(book.contacts().len(), 2);
        assert_eq!(book.contacts()[0].name, "Uche");
        assert_eq!(book.contacts()[1].name, "Alex");

        // The slot now holds the same list the book does
        let raw = book.store().read(CONTACTS_KEY)?.unwrap();
        let stored: Vec<Contact> = serde_json::from_str(&raw)?;
        assert_eq!(stored, book.contacts());
        Ok(())
    }

    #[test]
    fn book_reloads_from_a_seeded_slot() -> Result<(), AppError> {
        let mut store = MemStore::new();
        let contacts = vec![
            Contact::new("Uche".to_string(), "0812345678".to_string()),
            Contact::new("Mom".to_string(), "9876543210".to_string()),
        ];
        store::save(&mut store, CONTACTS_KEY, &contacts)?;

        let book = ContactBook::new(Box::new(store));

        assert_eq!(book.contacts(), &contacts[..]);
        Ok(())
    }

    #[test]
    fn garbage_slot_falls_back_to_empty() {
        let mut store = MemStore::new();
        store
            .write(CONTACTS_KEY, "not json at all {{{")
            .expect("mem write");

        let book = ContactBook::new(Box::new(store));

        assert!(book.contacts().is_empty());
    }

    #[test]
    fn edit_changes_only_the_matching_record() -> Result<(), AppError> {
        let mut book = empty_book();

        let first = book.add("Uche".to_string(), "0812345678".to_string())?;
        let second = book.add("Alex".to_string(), "0898765432".to_string())?;

        book.edit(&first, "Uche Johnson".to_string(), "0812345678".to_string())?;

        assert_eq!(book.contacts()[0].name, "Uche Johnson");
        assert_eq!(book.contacts()[0].id, first);
        assert_eq!(book.contacts()[1].name, "Alex");
        assert_eq!(book.contacts()[1].id, second);
        Ok(())
    }

    #[test]
    fn edit_with_unknown_id_is_a_silent_noop() -> Result<(), AppError> {
        let mut book = empty_book();

        book.add("Uche".to_string(), "0812345678".to_string())?;
        let before = book.contacts().to_vec();

        book.edit(&Uuid::new_v4(), "Ghost".to_string(), "0000000000".to_string())?;

        assert_eq!(book.contacts(), &before[..]);
        Ok(())
    }

    #[test]
    fn delete_removes_exactly_one_and_keeps_order() -> Result<(), AppError> {
        let mut book = empty_book();

        let a = book.add("Ada".to_string(), "0000000001".to_string())?;
        let b = book.add("Bola".to_string(), "0000000002".to_string())?;
        let c = book.add("Chidi".to_string(), "0000000003".to_string())?;

        book.delete(&b)?;

        let ids: Vec<Uuid> = book.contacts().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![a, c]);

        // Deleting again changes nothing
        book.delete(&b)?;
        assert_eq!(book.contacts().len(), 2);
        Ok(())
    }

    #[test]
    fn prefix_resolution_requires_a_unique_match() -> Result<(), AppError> {
        let mut book = empty_book();

        let id = book.add("Uche".to_string(), "0812345678".to_string())?;
        let full = id.to_string();

        assert_eq!(book.find_by_prefix(&full).map(|c| c.id), Some(id));
        assert_eq!(book.find_by_prefix(&full[..8]).map(|c| c.id), Some(id));
        assert!(book.find_by_prefix("").is_none());
        assert!(book.find_by_prefix("zzzz").is_none());
        Ok(())
    }
}
