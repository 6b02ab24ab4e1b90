use serde::{Deserialize, Serialize};

/// A single student as stored in the `students` table.
///
/// Records are create-only: once accepted by the intake workflow a record
/// is never updated or deleted by this system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub name: String,
    pub reg_number: String,
    pub math_marks: i32,
    pub java_marks: i32,
    pub php_marks: i32,
}

impl StudentRecord {
    /// Lowest mark a subject accepts.
    pub const MIN_MARK: i32 = 0;
    /// Highest mark a subject accepts.
    pub const MAX_MARK: i32 = 100;

    /// The derived average of the three subject marks.
    ///
    /// Always recomputed from the stored marks; the average is never
    /// persisted as authoritative data.
    pub fn average_marks(&self) -> f64 {
        (self.math_marks + self.java_marks + self.php_marks) as f64 / 3.0
    }
}

/// The display row shown for each student: name, registration number and
/// the derived average.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub name: String,
    pub reg_number: String,
    pub average_marks: f64,
}

impl From<&StudentRecord> for RosterEntry {
    fn from(record: &StudentRecord) -> Self {
        Self {
            name: record.name.clone(),
            reg_number: record.reg_number.clone(),
            average_marks: record.average_marks(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(math: i32, java: i32, php: i32) -> StudentRecord {
        StudentRecord {
            name: "Alice".to_string(),
            reg_number: "R001".to_string(),
            math_marks: math,
            java_marks: java,
            php_marks: php,
        }
    }

    #[test]
    fn average_uses_floating_point_division() {
        assert_eq!(record(80, 90, 70).average_marks(), 80.0);
        assert_eq!(record(0, 0, 1).average_marks(), 1.0 / 3.0);
        assert_eq!(record(100, 100, 100).average_marks(), 100.0);
    }

    #[test]
    fn roster_entry_carries_the_derived_average() {
        let entry = RosterEntry::from(&record(50, 60, 70));
        assert_eq!(entry.name, "Alice");
        assert_eq!(entry.reg_number, "R001");
        assert_eq!(entry.average_marks, 60.0);
    }
}
