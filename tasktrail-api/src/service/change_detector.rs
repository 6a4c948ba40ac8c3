use crate::domain::activity::{ActivityPayload, FieldChange};
use crate::domain::todo::Todo;

/// Classify the transition between two states of the same todo.
///
/// A pure completion toggle — `is_complete` differs while title and
/// description are both unchanged — becomes `Completed`/`Uncompleted`
/// with no field-change list. This check takes priority over the
/// generic path. Everything else becomes `Updated` with one
/// `FieldChange` per differing field, in fixed order: title,
/// description, isComplete. A call with no differences yields
/// `Updated` with an empty list; suppressing that entry is the
/// caller's decision, not a failure here.
pub fn classify(before: &Todo, after: &Todo) -> ActivityPayload {
    if before.is_complete != after.is_complete
        && before.title == after.title
        && before.description == after.description
    {
        return if after.is_complete {
            ActivityPayload::Completed
        } else {
            ActivityPayload::Uncompleted
        };
    }

    let mut changes = Vec::new();
    if before.title != after.title {
        changes.push(FieldChange {
            field: "title".to_string(),
            from: Some(before.title.clone()),
            to: Some(after.title.clone()),
        });
    }
    if before.description != after.description {
        changes.push(FieldChange {
            field: "description".to_string(),
            from: before.description.clone(),
            to: after.description.clone(),
        });
    }
    if before.is_complete != after.is_complete {
        changes.push(FieldChange {
            field: "isComplete".to_string(),
            from: Some(before.is_complete.to_string()),
            to: Some(after.is_complete.to_string()),
        });
    }

    ActivityPayload::Updated { changes }
}
