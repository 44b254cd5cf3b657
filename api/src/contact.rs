use std::fmt;

use serde::{Deserialize, Serialize};

// structs and types

pub const CONTACT_ENDPOINT: &str = "contact";

pub const INSERT_SUCCESS: &str = "Data inserted successfully!";

// the two fields of the contact form
//
// a submission that is missing either field is treated as if the field were
// present but empty, so that the insert still runs
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

// result of a single form insert
//
// the three failure variants line up with the three points at which the insert
// can stop: opening the connection, preparing the statement, and executing it.
// only the last one still closes the statement and connection before reporting
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum InsertOutcome {
    Inserted,
    ConnectionFailed(String),
    PrepareFailed(String),
    ExecutionFailed(String),
}

impl InsertOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, InsertOutcome::Inserted)
    }

    // connection and prepare failures end the procedure on the spot
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            InsertOutcome::ConnectionFailed(_) | InsertOutcome::PrepareFailed(_)
        )
    }
}

impl fmt::Display for InsertOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InsertOutcome::Inserted => write!(f, "{INSERT_SUCCESS}"),
            InsertOutcome::ConnectionFailed(err) => write!(f, "Connection failed: {err}"),
            InsertOutcome::PrepareFailed(err) => write!(f, "Prepare failed: {err}"),
            InsertOutcome::ExecutionFailed(err) => write!(f, "Execution failed: {err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_default_to_empty() {
        let form: ContactForm = serde_json::from_str(r#"{"name": "Alice"}"#).unwrap();

        assert_eq!(form.name, "Alice");
        assert_eq!(form.email, "");

        let form: ContactForm = serde_json::from_str("{}").unwrap();
        assert_eq!(form, ContactForm::default());
    }

    #[test]
    fn outcome_text() {
        assert_eq!(InsertOutcome::Inserted.to_string(), "Data inserted successfully!");
        assert_eq!(
            InsertOutcome::ConnectionFailed("Access denied".into()).to_string(),
            "Connection failed: Access denied"
        );
        assert_eq!(
            InsertOutcome::PrepareFailed("no such table".into()).to_string(),
            "Prepare failed: no such table"
        );
        assert_eq!(
            InsertOutcome::ExecutionFailed("Duplicate entry".into()).to_string(),
            "Execution failed: Duplicate entry"
        );
    }

    #[test]
    fn only_connect_and_prepare_are_fatal() {
        assert!(InsertOutcome::ConnectionFailed(String::new()).is_fatal());
        assert!(InsertOutcome::PrepareFailed(String::new()).is_fatal());
        assert!(!InsertOutcome::ExecutionFailed(String::new()).is_fatal());
        assert!(!InsertOutcome::Inserted.is_fatal());
        assert!(InsertOutcome::Inserted.is_success());
    }
}
