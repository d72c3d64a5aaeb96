//! Student fields gathered during registration.

use serde::{Deserialize, Serialize};

use crate::validation::is_valid_name;

/// Fields filled in positionally from the accepted registration answers.
///
/// Answer 0 is the name, then class/section, admission number, roll number and
/// reason. A re-asked question shifts every later field, so a record reported
/// by the verification model is preferred whenever one is available.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedFields {
    pub name: Option<String>,
    pub class_section: Option<String>,
    pub admission_no: Option<String>,
    pub roll_no: Option<String>,
    pub reason: Option<String>,
}

impl ExtractedFields {
    /// Stores the answer at position `index` of the registration sub-dialogue.
    /// Positions past the fifth answer are ignored.
    pub fn record_answer(&mut self, index: usize, answer: &str) {
        let value = Some(answer.trim().to_string());
        match index {
            0 => self.name = value,
            1 => self.class_section = value,
            2 => self.admission_no = value,
            3 => self.roll_no = value,
            4 => self.reason = value,
            _ => {}
        }
    }

    /// Builds a record, using empty strings for fields never answered.
    pub fn to_record(&self) -> StudentRecord {
        StudentRecord {
            name: self.name.clone().unwrap_or_default(),
            class_section: self.class_section.clone().unwrap_or_default(),
            admission_no: self.admission_no.clone().unwrap_or_default(),
            roll_no: self.roll_no.clone().unwrap_or_default(),
            reason: self.reason.clone().unwrap_or_default(),
        }
    }
}

/// A complete set of student details.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentRecord {
    pub name: String,
    pub class_section: String,
    pub admission_no: String,
    pub roll_no: String,
    pub reason: String,
}

impl StudentRecord {
    /// Every field present and the name shaped like a name.
    pub fn is_valid(&self) -> bool {
        is_valid_name(&self.name)
            && [&self.class_section, &self.admission_no, &self.roll_no, &self.reason]
                .iter()
                .all(|field| !field.trim().is_empty())
    }
}
