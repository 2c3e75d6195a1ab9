use serde::{Deserialize, Serialize};

/// Roster entry. Identity key is `nis` (the unique student number):
/// re-importing a student with an existing nis replaces name and class.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Student {
    pub name: String,
    pub nis: String, // ⇔ students.nis (unique student identifier)
    #[serde(rename = "class")]
    pub class_name: String, // ⇔ students.class
}

impl Student {
    pub fn new(name: &str, nis: &str, class_name: &str) -> Self {
        Self {
            name: name.to_string(),
            nis: nis.to_string(),
            class_name: class_name.to_string(),
        }
    }
}

/// Optional cloud backend credentials. Presence toggles remote mirroring.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CloudConfig {
    pub url: String,
    pub key: String,
}
