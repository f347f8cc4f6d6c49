// src/issue/derive.rs
//
// Pure functions turning a control row into the pieces of an issue.

use crate::controls::{ControlRow, Group};

const RESPONSIBLE: &str = "R";
const SUPPORT: &str = "S";

/// Every group marked "R", in sheet order.
pub fn responsible_groups(row: &ControlRow) -> Vec<Group> {
    groups_marked(row, RESPONSIBLE).collect()
}

/// Group marked "R" first in sheet order, if any. Later "R" marks are dropped.
pub fn suggested_assignment(row: &ControlRow) -> Option<Group> {
    groups_marked(row, RESPONSIBLE).next()
}

/// Every group marked "S", joined with ", ". Empty when there are none.
pub fn support_teams(row: &ControlRow) -> String {
    groups_marked(row, SUPPORT)
        .map(Group::label)
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn title(row: &ControlRow) -> String {
    format!("{}: {}", row.control_ref(), capitalize_words(&row.control_name))
}

/// Markdown body. Control Definition is always present; every other section
/// appears only when it has content.
pub fn body(row: &ControlRow) -> String {
    let assignment = suggested_assignment(row).map(Group::label).unwrap_or("");
    let support = support_teams(row);

    let sections: [(&str, &str); 9] = [
        ("Control Definition", row.control_definition.as_str()),
        ("Class", row.control_class.as_str()),
        ("Supplemental Guidance", row.supplemental_guidance.as_str()),
        ("References", row.references.as_str()),
        ("General Guide", row.general_guide.as_str()),
        ("Suggested Placeholder Values", row.suggested_placeholder_values.as_str()),
        ("Profile Specific Notes", row.profile_specific_notes.as_str()),
        ("Suggested Assignment", assignment),
        ("Support Teams", support.as_str()),
    ];

    let mut body = String::new();
    for (i, (heading, content)) in sections.iter().enumerate() {
        if i > 0 && content.is_empty() {
            continue;
        }
        body.push_str(&format!("# {heading}\n{content}\n\n"));
    }
    body
}

pub fn labels(row: &ControlRow) -> Vec<String> {
    let mut labels = Vec::with_capacity(4);
    if !row.suggested_priority.is_empty() {
        labels.push(format!("Priority: {}", row.suggested_priority));
    }
    if !row.control_class.is_empty() {
        labels.push(format!("Class: {}", row.control_class));
    }
    labels.push(format!("Control: {}", row.control_ref()));
    if let Some(group) = suggested_assignment(row) {
        labels.push(format!("Suggested Assignment: {}", group.label()));
    }
    labels
}

fn groups_marked<'a>(row: &'a ControlRow, letter: &'a str) -> impl Iterator<Item = Group> + 'a {
    row.raci()
        .filter(move |(_, value)| *value == letter)
        .map(|(group, _)| group)
}

/// Split on whitespace, uppercase the first character of each word and
/// lowercase the rest, rejoin with single spaces.
pub fn capitalize_words(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
