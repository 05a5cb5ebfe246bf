//! Compact `assignee-count` text encoding stored in the backend's `assign_to` field.
//!
//! Example: `jane@co.com-4,raj@co.com-2`. The format has no escaping, so ids
//! containing either separator cannot be carried.

use super::allocation::Assignment;
use std::collections::HashSet;
use tracing::debug;

pub const TOKEN_SEPARATOR: char = ',';
pub const COUNT_SEPARATOR: char = '-';

/// Whether an assignee id survives an encode/decode cycle unchanged.
pub fn is_wire_safe(assignee_id: &str) -> bool {
    !assignee_id.is_empty()
        && assignee_id.trim() == assignee_id
        && !assignee_id.contains([TOKEN_SEPARATOR, COUNT_SEPARATOR])
}

/// Decodes a serialized allocation. Tokens without a usable id or a positive
/// count are dropped, as are repeated ids after their first occurrence.
pub fn decode_assignments(serialized: &str) -> Vec<Assignment> {
    let mut seen = HashSet::new();
    let mut assignments = Vec::new();

    for token in serialized.split(TOKEN_SEPARATOR) {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }

        let Some((assignee_id, raw_count)) = token.split_once(COUNT_SEPARATOR) else {
            debug!(token, "dropping allocation token without a count");
            continue;
        };

        let assignee_id = assignee_id.trim();
        let allocation = parse_count(raw_count);
        if assignee_id.is_empty() || allocation == 0 {
            debug!(token, "dropping empty allocation token");
            continue;
        }

        if !seen.insert(assignee_id.to_string()) {
            debug!(assignee_id, "dropping repeated assignee in allocation");
            continue;
        }

        assignments.push(Assignment {
            assignee_id: assignee_id.to_string(),
            allocation,
        });
    }

    assignments
}

pub fn encode_assignments(assignments: &[Assignment]) -> String {
    assignments
        .iter()
        .map(|assignment| {
            format!(
                "{}{COUNT_SEPARATOR}{}",
                assignment.assignee_id, assignment.allocation
            )
        })
        .collect::<Vec<_>>()
        .join(&TOKEN_SEPARATOR.to_string())
}

/// Non-numeric counts read as zero; negatives clamp to zero.
fn parse_count(raw: &str) -> u32 {
    match raw.trim().parse::<i64>() {
        Ok(count) => count.clamp(0, i64::from(u32::MAX)) as u32,
        Err(_) => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assignment(id: &str, allocation: u32) -> Assignment {
        Assignment {
            assignee_id: id.to_string(),
            allocation,
        }
    }

    #[test]
    fn decodes_comma_separated_tokens_in_order() {
        assert_eq!(
            decode_assignments("a@x.com-3,b@x.com-2"),
            vec![assignment("a@x.com", 3), assignment("b@x.com", 2)]
        );
    }

    #[test]
    fn empty_input_decodes_to_nothing() {
        assert!(decode_assignments("").is_empty());
        assert!(decode_assignments(" , ").is_empty());
    }

    #[test]
    fn malformed_tokens_are_dropped() {
        assert_eq!(
            decode_assignments("a@x.com-3,garbage,b@x.com-2"),
            vec![assignment("a@x.com", 3), assignment("b@x.com", 2)]
        );
        assert_eq!(
            decode_assignments("a@x.com-many,-4,c@x.com-,d@x.com--2"),
            Vec::new()
        );
    }

    #[test]
    fn splits_on_first_hyphen_only() {
        // "jean" keeps the id, "luc@x.com-3" is not a number.
        assert!(decode_assignments("jean-luc@x.com-3").is_empty());
    }

    #[test]
    fn repeated_assignees_keep_the_first_entry() {
        assert_eq!(
            decode_assignments("a@x.com-3,a@x.com-5"),
            vec![assignment("a@x.com", 3)]
        );
    }

    #[test]
    fn encodes_without_padding() {
        let encoded =
            encode_assignments(&[assignment("jane@co.com", 4), assignment("raj@co.com", 2)]);
        assert_eq!(encoded, "jane@co.com-4,raj@co.com-2");
        assert_eq!(encode_assignments(&[]), "");
    }

    #[test]
    fn wire_safety_rejects_separators() {
        assert!(is_wire_safe("raj@co.com"));
        assert!(!is_wire_safe("first-last@co.com"));
        assert!(!is_wire_safe("a,b@co.com"));
        assert!(!is_wire_safe(""));
        assert!(!is_wire_safe(" padded@co.com"));
    }
}
