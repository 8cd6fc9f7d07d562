/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the REST layer and the UI layer. Field names follow the wire
/// format of the `/student` resource exactly.

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// A single roster record as the server stores it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    /// Server-assigned identifier; 0 means not yet persisted
    pub id: i64,
    /// Display name (labelled "Name" in the UI)
    pub student_name: String,
    pub email: String,
    pub address: String,
    pub phone: String,
    /// Active flag
    pub status: bool,
    /// ISO-8601 creation timestamp; the server's copy is authoritative
    pub created_at: String,
}

impl Student {
    /// Create an empty draft for the add flow.
    ///
    /// The draft carries id 0 and a provisional timestamp; both are
    /// replaced by the server's values when the record is created.
    pub fn draft() -> Self {
        Self {
            id: 0,
            student_name: String::new(),
            email: String::new(),
            address: String::new(),
            phone: String::new(),
            status: true,
            created_at: Utc::now().to_rfc3339(),
        }
    }

    /// Whether the record has been assigned a real identifier by the server
    pub fn is_persisted(&self) -> bool {
        self.id != 0
    }

    /// Required-field check mirroring the form's `required` inputs
    pub fn has_required_fields(&self) -> bool {
        !self.student_name.trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.address.trim().is_empty()
            && !self.phone.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_is_unsaved() {
        let draft = Student::draft();
        assert!(!draft.is_persisted());
        assert!(draft.status);
        assert!(!draft.has_required_fields());
    }

    #[test]
    fn test_required_fields() {
        let mut student = Student::draft();
        student.student_name = "Ada".into();
        student.email = "ada@example.com".into();
        student.address = "12 Analytical Row".into();
        assert!(!student.has_required_fields());

        student.phone = "555-0100".into();
        assert!(student.has_required_fields());
    }

    #[test]
    fn test_wire_field_names() {
        let json = r#"{
            "id": 7,
            "student_name": "Ada",
            "email": "ada@example.com",
            "address": "12 Analytical Row",
            "phone": "555-0100",
            "status": true,
            "created_at": "2024-05-01T10:00:00Z"
        }"#;

        let student: Student = serde_json::from_str(json).unwrap();
        assert_eq!(student.id, 7);
        assert_eq!(student.student_name, "Ada");
        assert!(student.is_persisted());

        // Serialization must keep the exact wire names
        let value = serde_json::to_value(&student).unwrap();
        assert!(value.get("student_name").is_some());
        assert!(value.get("created_at").is_some());
        assert!(value.get("name").is_none());
    }
}
