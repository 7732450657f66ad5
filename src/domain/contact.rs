use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Contact {
    #[serde(default = "Uuid::new_v4")] // For hand-edited data saved without an id.
    pub id: Uuid,

    pub name: String,

    // Stored as "phoneNumber" so old contact slots keep loading.
    #[serde(rename = "phoneNumber")]
    pub phone: String,
}

impl Contact {
    pub fn new(name: String, phone: String) -> Self {
        Contact {
            id: Uuid::new_v4(),
            name,
            phone,
        }
    }

    /// Short form of the id, enough to address a contact from the CLI.
    pub fn short_id(&self) -> String {
        self.id.to_string().chars().take(8).collect()
    }
}
