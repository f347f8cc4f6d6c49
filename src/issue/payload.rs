// src/issue/payload.rs

use serde::Serialize;
use tracing::warn;

use super::derive;
use crate::controls::ControlRow;

/// JSON body of a create-issue request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssuePayload {
    pub title: String,
    pub body: String,
    pub labels: Vec<String>,
}

impl IssuePayload {
    pub fn from_row(row: &ControlRow) -> Self {
        let responsible = derive::responsible_groups(row);
        if responsible.len() > 1 {
            let groups: Vec<&str> = responsible.iter().map(|g| g.label()).collect();
            warn!(
                control = %row.control_ref(),
                groups = %groups.join(", "),
                "more than one responsible group; suggesting the first"
            );
        }

        Self {
            title: derive::title(row),
            body: derive::body(row),
            labels: derive::labels(row),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::capture_logs;
    use serde_json::json;

    fn access_control(raci: [&str; 6]) -> ControlRow {
        let mut fields = vec!["AC", "1", "", "access control policy", "", "Def", "", ""];
        fields.extend(raci);
        fields.extend(["", "", "", ""]);
        ControlRow::from_fields(fields, None).unwrap()
    }

    #[test]
    fn test_warns_on_more_than_one_responsible_group() {
        let row = access_control(["R", "R", "", "", "", ""]);
        let (payload, logs) = capture_logs(|| IssuePayload::from_row(&row));

        let warning = logs
            .lines()
            .find(|l| l.contains("more than one responsible group"))
            .expect("warning line");
        assert!(warning.contains("WARN"));
        assert!(warning.contains("control=AC-1"));
        assert!(warning.contains("IT Security Function, IT Operation Group"));
        assert!(payload
            .labels
            .contains(&"Suggested Assignment: IT Security Function".to_string()));
    }

    #[test]
    fn test_single_responsible_group_is_quiet() {
        let row = access_control(["", "R", "S", "", "", ""]);
        let (_, logs) = capture_logs(|| IssuePayload::from_row(&row));
        assert!(!logs.contains("more than one responsible group"));
    }

    #[test]
    fn test_payload_serializes_to_api_shape() -> anyhow::Result<()> {
        let row = ControlRow::from_fields(
            [
                "AC", "2", "", "Account Management", "Technical", "Definition text", "", "", "R",
                "", "", "", "", "", "", "High", "", "",
            ],
            None,
        )?;
        let payload = IssuePayload::from_row(&row);
        let value = serde_json::to_value(&payload)?;
        assert_eq!(
            value,
            json!({
                "title": "AC-2: Account Management",
                "body": "# Control Definition\nDefinition text\n\n\
                         # Class\nTechnical\n\n\
                         # Suggested Assignment\nIT Security Function\n\n",
                "labels": [
                    "Priority: High",
                    "Class: Technical",
                    "Control: AC-2",
                    "Suggested Assignment: IT Security Function"
                ]
            })
        );
        Ok(())
    }
}
