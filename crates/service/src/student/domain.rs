use serde::{Deserialize, Serialize};

use models::student as entity;

/// A stored student record, keyed by `roll_no`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub roll_no: String,
    pub name: String,
    pub department: String,
    pub semester: i32,
    pub age: i32,
}

/// Fields to overwrite on an existing record; `None` leaves the stored value.
/// `roll_no` is not part of it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentChanges {
    pub name: Option<String>,
    pub department: Option<String>,
    pub semester: Option<i32>,
    pub age: Option<i32>,
}

impl Student {
    /// Apply changes while keeping the key.
    pub fn with_changes(&self, changes: &StudentChanges) -> Student {
        Student {
            roll_no: self.roll_no.clone(),
            name: changes.name.clone().unwrap_or_else(|| self.name.clone()),
            department: changes.department.clone().unwrap_or_else(|| self.department.clone()),
            semester: changes.semester.unwrap_or(self.semester),
            age: changes.age.unwrap_or(self.age),
        }
    }
}

impl From<entity::Model> for Student {
    fn from(m: entity::Model) -> Self {
        Student { roll_no: m.roll_no, name: m.name, department: m.department, semester: m.semester, age: m.age }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn asha() -> Student {
        Student { roll_no: "R1".into(), name: "Asha".into(), department: "CS".into(), semester: 3, age: 20 }
    }

    #[test]
    fn wire_shape_is_camel_case() {
        let v = serde_json::to_value(asha()).unwrap();
        assert_eq!(
            v,
            serde_json::json!({"rollNo": "R1", "name": "Asha", "department": "CS", "semester": 3, "age": 20})
        );
    }

    #[test]
    fn with_changes_keeps_roll_no() {
        let changes = StudentChanges {
            name: Some("Asha K.".into()),
            department: Some("CS".into()),
            semester: Some(4),
            age: Some(20),
        };
        let updated = asha().with_changes(&changes);
        assert_eq!(updated.roll_no, "R1");
        assert_eq!(updated.name, "Asha K.");
        assert_eq!(updated.semester, 4);
    }

    #[test]
    fn absent_changes_keep_stored_values() {
        let updated = asha().with_changes(&StudentChanges { semester: Some(5), ..Default::default() });
        assert_eq!(updated, Student { semester: 5, ..asha() });
        assert_eq!(asha().with_changes(&StudentChanges::default()), asha());
    }
}
