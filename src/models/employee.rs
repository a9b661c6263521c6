//! Employee model.
//!
//! This module defines the Employee struct used to identify who an
//! attendance mark belongs to. Employee records are owned by the
//! surrounding application and are read-only to the engine.

use serde::{Deserialize, Serialize};

/// Represents an employee subject to attendance marking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Stable unique business code for the employee (e.g., a staff number).
    pub id: String,
    /// The employee's display name.
    pub name: String,
}

impl Employee {
    /// Creates a new employee record.
    ///
    /// # Examples
    ///
    /// ```
    /// use attendance_engine::models::Employee;
    ///
    /// let employee = Employee::new("19841201", "Siti Rahma");
    /// assert_eq!(employee.id, "19841201");
    /// assert_eq!(employee.name, "Siti Rahma");
    /// ```
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_employee() {
        let json = r#"{"id": "19841201", "name": "Siti Rahma"}"#;
        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.id, "19841201");
        assert_eq!(employee.name, "Siti Rahma");
    }

    #[test]
    fn test_serialize_round_trip() {
        let employee = Employee::new("19841201", "Siti Rahma");
        let json = serde_json::to_string(&employee).unwrap();
        let deserialized: Employee = serde_json::from_str(&json).unwrap();
        assert_eq!(employee, deserialized);
    }
}
