use super::contact::Contact;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMode {
    #[default]
    Name,
    Phone,
}

impl SearchMode {
    pub fn label(&self) -> &'static str {
        match self {
            SearchMode::Name => "name",
            SearchMode::Phone => "phone number",
        }
    }
}

/// Search box state. Filtering is a display-time projection over the
/// repository; nothing here mutates the contact list.
#[derive(Debug, Clone, Default)]
pub struct SearchBar {
    pub mode: SearchMode,
    term: String,
}

impl SearchBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn set_term(&mut self, term: &str) {
        self.term = term.to_string();
    }

    /// Switching search mode resets the term.
    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            SearchMode::Name => SearchMode::Phone,
            SearchMode::Phone => SearchMode::Name,
        };
        self.term.clear();
    }

    pub fn matches(&self, contact: &Contact) -> bool {
        match self.mode {
            // Phone numbers are digit strings, matched as-is
            SearchMode::Phone => contact.phone.contains(&self.term),
            SearchMode::Name => contact
                .name
                .to_lowercase()
                .contains(&self.term.to_lowercase()),
        }
    }

    pub fn filter<'a>(&self, contacts: &'a [Contact]) -> Vec<&'a Contact> {
        contacts.iter().filter(|c| self.matches(c)).collect()
    }
}
