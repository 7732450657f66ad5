//! Field checks for the contact editor.
//!
//! Each check runs on every field input and yields the active error
//! message (empty string when the field is fine) plus whether the field
//! currently differs from the value the editor opened with. The rule
//! order is part of the observed behavior and must not be shuffled:
//! for the phone number the later rules overwrite the "same as before"
//! message, for the name they only apply to brand new contacts.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldCheck {
    /// Active error message. Empty means the field is acceptable.
    pub error: String,
    /// True when the value differs from the one the editor opened with.
    pub dirty: bool,
}

impl FieldCheck {
    pub fn is_ok(&self) -> bool {
        self.error.is_empty()
    }
}

pub fn check_name(value: &str, original: &str, is_new: bool, existing_names: &[String]) -> FieldCheck {
    // Allow save only if an actual change was made to the name
    let (mut error, dirty) = if value != original {
        (String::new(), true)
    } else {
        ("Name is the same as before".to_string(), false)
    };

    // New contact name validations. Editing an existing contact only
    // runs the changed-from-original check above.
    if is_new {
        let name_already_exist = existing_names.iter().any(|n| n == value);

        if value.is_empty() {
            error = "Name is required".to_string();
        } else if !name_already_exist {
            error = if value.chars().count() >= 2 {
                String::new()
            } else {
                "Name must be at least 2 characters".to_string()
            };
        } else {
            error = "Name already exists in agenda".to_string();
        }
    }

    FieldCheck { error, dirty }
}

pub fn check_phone(value: &str, original: &str, existing_phones: &[String]) -> FieldCheck {
    // Allow save only if an actual change was made to the phone number
    let (mut error, dirty) = if value != original {
        (String::new(), true)
    } else {
        ("Phone number is the same as before".to_string(), false)
    };

    // These run for new and existing contacts alike, and whichever rule
    // fires last owns the error slot.
    let phone_already_exists = existing_phones.iter().any(|p| p == value);

    if value.is_empty() {
        error = "Phone number is required".to_string();
    } else if phone_already_exists {
        error = "Phone number already exists".to_string();
    } else {
        error = if is_valid_phone(value) {
            String::new()
        } else {
            "Phone number must contain exactly 10 digits".to_string()
        };
    }

    FieldCheck { error, dirty }
}

pub fn is_valid_phone(value: &str) -> bool {
    // Exactly 10 digits and nothing else
    value.chars().count() == 10 && value.chars().all(|c| c.is_ascii_digit())
}
