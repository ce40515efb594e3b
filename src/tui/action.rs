use crate::model::parse_smart_input;
use crate::store::{StoreError, TaskStore};

#[derive(Debug)]
pub enum Action {
    /// Create a new task, or update the remembered one when `editing` is set.
    Submit {
        editing: Option<String>,
        input: String,
    },
    Complete(String),
    Delete(String),
    Export,
    Quit,
}

#[derive(Debug, PartialEq)]
pub enum SubmitOutcome {
    Created,
    Updated,
}

/// One submit path for both form flavours: the `editing` slot decides whether
/// the parsed input lands on an existing task or becomes a new one.
pub fn handle_submit(
    store: &mut TaskStore,
    editing: Option<&str>,
    input: &str,
) -> Result<SubmitOutcome, StoreError> {
    let parsed = parse_smart_input(input);
    match editing {
        Some(id) => {
            store.edit(id, &parsed.name, &parsed.deadline)?;
            Ok(SubmitOutcome::Updated)
        }
        None => {
            store.add(&parsed.name, &parsed.deadline)?;
            Ok(SubmitOutcome::Created)
        }
    }
}
