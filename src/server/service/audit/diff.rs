//! Field-level comparison of two snapshots.

use std::collections::HashMap;
use uuid::Uuid;

use crate::{
    model::audit::{AuditOperation, FieldChange},
    server::model::audit::{Auditable, Diff},
};

/// Compares the scalar fields of two snapshots of the same entity.
///
/// A field is reported when both values are present and differ. Fields that are
/// null on either side are skipped, so `null -> value` and `value -> null`
/// transitions never appear in a diff. Keys are lowercased field names.
///
/// # Arguments
/// - `before` - Snapshot taken before the update
/// - `after` - Snapshot returned by the update
///
/// # Returns
/// Map of changed fields, empty when nothing changed
pub fn compute_diff<T: Auditable>(before: &T, after: &T) -> Diff {
    let previous: HashMap<&'static str, Option<String>> =
        before.audit_fields().into_iter().collect();

    after
        .audit_fields()
        .into_iter()
        .filter_map(|(name, to)| {
            let from = previous.get(name)?.as_ref()?;
            let to = to?;

            (*from != to).then(|| {
                (
                    name.to_lowercase(),
                    FieldChange {
                        from: from.clone(),
                        to,
                    },
                )
            })
        })
        .collect()
}

/// Builds the human readable description of an audit record.
///
/// e.g. `Update Vacation with uuid 67394e83-0e86-4f11-8c3c-2a7e5c1f4d10.`
pub fn describe(operation: AuditOperation, type_name: &str, id: Uuid) -> String {
    format!("{} {} with uuid {}.", operation.verb(), type_name, id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::model::vacation::Vacation;
    use test_utils::fixture;

    fn vacation(entity: entity::vacation::Model) -> Vacation {
        Vacation::from_entity(entity).unwrap()
    }

    #[test]
    fn reports_changed_name() {
        let before = vacation(fixture::vacation::entity());
        let after = vacation(fixture::vacation::entity_builder().name("Ski Trip 2").build());

        let diff = compute_diff(&before, &after);

        assert_eq!(diff.len(), 1);
        assert_eq!(
            diff.get("name"),
            Some(&FieldChange {
                from: "Ski Trip".to_string(),
                to: "Ski Trip 2".to_string(),
            })
        );
    }

    #[test]
    fn identical_snapshots_have_no_diff() {
        let snapshot = vacation(fixture::vacation::entity());

        assert!(compute_diff(&snapshot, &snapshot.clone()).is_empty());
    }

    #[test]
    fn skips_null_transitions() {
        let before = vacation(fixture::vacation::entity_builder().description(None).build());
        let after = vacation(
            fixture::vacation::entity_builder()
                .description(Some("Alps".to_string()))
                .build(),
        );

        assert!(compute_diff(&before, &after).is_empty());
        assert!(compute_diff(&after, &before).is_empty());
    }

    #[test]
    fn keys_are_lowercase_field_names() {
        let before = vacation(fixture::vacation::entity());
        let after = vacation(
            fixture::vacation::entity_builder()
                .status("ACCEPTED")
                .dates(
                    chrono::NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
                    chrono::NaiveDate::from_ymd_opt(2025, 1, 9).unwrap(),
                )
                .build(),
        );

        let diff = compute_diff(&before, &after);

        assert!(diff.contains_key("status"));
        assert!(diff.contains_key("from_date"));
        assert!(diff.contains_key("to_date"));
        assert!(diff.keys().all(|key| *key == key.to_lowercase()));
        assert_eq!(diff["status"].to, "ACCEPTED");
    }

    #[test]
    fn describes_operation() {
        let id = Uuid::parse_str(fixture::vacation::DEFAULT_ID).unwrap();

        assert_eq!(
            describe(AuditOperation::Update, "Vacation", id),
            format!("Update Vacation with uuid {}.", fixture::vacation::DEFAULT_ID)
        );
    }
}
