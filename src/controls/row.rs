// src/controls/row.rs

use csv::StringRecord;

use crate::error::{Error, Result};

/// Column order of the ITSG-33 control sheet.
pub const COLUMNS: [&str; 18] = [
    "Family",
    "Control ID",
    "Enhancement",
    "Control Name",
    "Class",
    "Control Definition",
    "Supplemental Guidance",
    "References",
    "IT Security Function",
    "IT Operation Group",
    "IT Projects",
    "Physical Security Group",
    "Personnel Security Group",
    "Learning Center",
    "General Guide",
    "Suggested Priority",
    "Suggested Placeholder Values",
    "Profile Specific Notes",
];

pub const COLUMN_COUNT: usize = COLUMNS.len();

/// Organisational groups that own a RACI column, in sheet order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Group {
    ItSecurityFunction,
    ItOperationGroup,
    ItProjects,
    PhysicalSecurityGroup,
    PersonnelSecurityGroup,
    LearningCenter,
}

impl Group {
    pub const ALL: [Group; 6] = [
        Group::ItSecurityFunction,
        Group::ItOperationGroup,
        Group::ItProjects,
        Group::PhysicalSecurityGroup,
        Group::PersonnelSecurityGroup,
        Group::LearningCenter,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Group::ItSecurityFunction => "IT Security Function",
            Group::ItOperationGroup => "IT Operation Group",
            Group::ItProjects => "IT Projects",
            Group::PhysicalSecurityGroup => "Physical Security Group",
            Group::PersonnelSecurityGroup => "Personnel Security Group",
            Group::LearningCenter => "Learning Center",
        }
    }
}

/// One control from the sheet, fields addressed by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ControlRow {
    pub family: String,
    pub control_id: String,
    pub enhancement: String,
    pub control_name: String,
    pub control_class: String,
    pub control_definition: String,
    pub supplemental_guidance: String,
    pub references: String,
    /// RACI letter per group, indexed like [`Group::ALL`].
    pub responsibilities: [String; 6],
    pub general_guide: String,
    pub suggested_priority: String,
    pub suggested_placeholder_values: String,
    pub profile_specific_notes: String,
}

impl ControlRow {
    /// Map a CSV record onto the fixed schema. Fewer than 18 fields is an error;
    /// anything past the 18th is ignored.
    pub fn from_record(record: &StringRecord) -> Result<Self> {
        let line = record.position().map(|p| p.line());
        Self::from_fields(record.iter(), line)
    }

    pub fn from_fields<I, S>(fields: I, line: Option<u64>) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let cells: Vec<String> = fields
            .into_iter()
            .map(|s| s.as_ref().to_string())
            .collect();
        if cells.len() < COLUMN_COUNT {
            return Err(Error::MalformedRow {
                line,
                found: cells.len(),
            });
        }

        let mut it = cells.into_iter();
        let mut next = || it.next().unwrap_or_default();

        Ok(Self {
            family: next(),
            control_id: next(),
            enhancement: next(),
            control_name: next(),
            control_class: next(),
            control_definition: next(),
            supplemental_guidance: next(),
            references: next(),
            responsibilities: std::array::from_fn(|_| next()),
            general_guide: next(),
            suggested_priority: next(),
            suggested_placeholder_values: next(),
            profile_specific_notes: next(),
        })
    }

    /// `(group, letter)` for each RACI column in sheet order.
    pub fn raci(&self) -> impl Iterator<Item = (Group, &str)> + '_ {
        Group::ALL
            .into_iter()
            .zip(self.responsibilities.iter().map(String::as_str))
    }

    /// `AC-2` or `AC-2(1)`.
    pub fn control_ref(&self) -> String {
        if self.enhancement.is_empty() {
            format!("{}-{}", self.family, self.control_id)
        } else {
            format!("{}-{}({})", self.family, self.control_id, self.enhancement)
        }
    }
}
