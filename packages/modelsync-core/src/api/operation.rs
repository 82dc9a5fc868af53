//! Facade operation names and their payload requirements

use std::fmt;
use std::str::FromStr;

use crate::domain::models::ModelPayload;
use crate::errors::{ModelError, Result};
use crate::features::model_query::EntryContainer;

/// Payload fields an operation can require
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadField {
    Namespace,
    NewNamespace,
    Name,
    Source,
    SourcePath,
    FilePath,
}

impl PayloadField {
    /// Name as it appears in the JSON payload
    pub fn name(&self) -> &'static str {
        match self {
            PayloadField::Namespace => "namespace",
            PayloadField::NewNamespace => "newNamespace",
            PayloadField::Name => "name",
            PayloadField::Source => "source",
            PayloadField::SourcePath => "sourcePath",
            PayloadField::FilePath => "filePath",
        }
    }

    fn value<'p>(&self, payload: &'p ModelPayload) -> Option<&'p str> {
        let value = match self {
            PayloadField::Namespace => &payload.namespace,
            PayloadField::NewNamespace => &payload.new_namespace,
            PayloadField::Name => &payload.name,
            PayloadField::Source => &payload.source,
            PayloadField::SourcePath => &payload.source_path,
            PayloadField::FilePath => &payload.file_path,
        };
        value.as_deref().filter(|v| !v.is_empty())
    }
}

/// One facade operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelOperation {
    Create,
    Remove,
    UpdateNamespace,
    UpdateState,
    AddEntry(EntryContainer),
    UpdateEntry(EntryContainer),
    RemoveEntry(EntryContainer),
    Info,
}

const CONTAINERS: [(EntryContainer, &str); 3] = [
    (EntryContainer::Reducers, "Reducer"),
    (EntryContainer::Effects, "Effect"),
    (EntryContainer::Subscriptions, "Subscription"),
];

impl ModelOperation {
    /// Every operation, in surface order
    pub fn all() -> Vec<ModelOperation> {
        let mut ops = vec![
            ModelOperation::Create,
            ModelOperation::Remove,
            ModelOperation::UpdateNamespace,
            ModelOperation::UpdateState,
        ];
        for (container, _) in CONTAINERS {
            ops.push(ModelOperation::AddEntry(container));
            ops.push(ModelOperation::UpdateEntry(container));
            ops.push(ModelOperation::RemoveEntry(container));
        }
        ops.push(ModelOperation::Info);
        ops
    }

    pub fn name(&self) -> String {
        let suffix = |container: &EntryContainer| {
            CONTAINERS
                .iter()
                .find(|(c, _)| c == container)
                .map(|(_, s)| *s)
                .unwrap_or_default()
        };
        match self {
            ModelOperation::Create => "create".to_string(),
            ModelOperation::Remove => "remove".to_string(),
            ModelOperation::UpdateNamespace => "updateNamespace".to_string(),
            ModelOperation::UpdateState => "updateState".to_string(),
            ModelOperation::AddEntry(c) => format!("add{}", suffix(c)),
            ModelOperation::UpdateEntry(c) => format!("update{}", suffix(c)),
            ModelOperation::RemoveEntry(c) => format!("remove{}", suffix(c)),
            ModelOperation::Info => "info".to_string(),
        }
    }

    pub fn required_fields(&self) -> &'static [PayloadField] {
        use PayloadField::*;
        match self {
            ModelOperation::Create => &[Namespace, SourcePath, FilePath],
            ModelOperation::Remove | ModelOperation::Info => &[SourcePath, FilePath],
            ModelOperation::UpdateNamespace => &[Namespace, NewNamespace, SourcePath, FilePath],
            ModelOperation::UpdateState => &[Namespace, Source, SourcePath, FilePath],
            ModelOperation::AddEntry(_) | ModelOperation::UpdateEntry(_) => {
                &[Namespace, Name, Source, SourcePath, FilePath]
            }
            ModelOperation::RemoveEntry(_) => &[Namespace, Name, SourcePath, FilePath],
        }
    }

    /// Fail when a required field is missing or empty
    pub fn validate(&self, payload: &ModelPayload) -> Result<()> {
        let missing: Vec<&str> = self
            .required_fields()
            .iter()
            .filter(|f| f.value(payload).is_none())
            .map(|f| f.name())
            .collect();
        if missing.is_empty() {
            return Ok(());
        }
        Err(ModelError::validation(
            format!("api/models/{}", self.name()),
            format!("payload should have {}", join_names(&missing)),
        ))
    }
}

impl fmt::Display for ModelOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "models.{}", self.name())
    }
}

impl FromStr for ModelOperation {
    type Err = ModelError;

    /// Accepts `addReducer` as well as `models.addReducer`
    fn from_str(s: &str) -> Result<Self> {
        let name = s.strip_prefix("models.").unwrap_or(s);
        Self::all()
            .into_iter()
            .find(|op| op.name() == name)
            .ok_or_else(|| ModelError::validation(s, "unknown model operation"))
    }
}

/// `a`, `a and b`, `a, b and c`
fn join_names(names: &[&str]) -> String {
    match names {
        [] => String::new(),
        [only] => only.to_string(),
        [init @ .., last] => format!("{} and {}", init.join(", "), last),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_roundtrip() {
        for op in ModelOperation::all() {
            assert_eq!(op.name().parse::<ModelOperation>().unwrap(), op);
            assert_eq!(op.to_string().parse::<ModelOperation>().unwrap(), op);
        }
        assert_eq!(ModelOperation::all().len(), 14);
        assert_eq!(
            "models.removeSubscription".parse::<ModelOperation>().unwrap(),
            ModelOperation::RemoveEntry(EntryContainer::Subscriptions)
        );
        assert!("models.rename".parse::<ModelOperation>().is_err());
    }

    #[test]
    fn test_validation_message() {
        let op = ModelOperation::AddEntry(EntryContainer::Reducers);
        let payload = ModelPayload::new("/p", "a.js").with_name("");
        let err = op.validate(&payload).unwrap_err();
        assert_eq!(
            err.to_string(),
            "api/models/addReducer: payload should have namespace, name and source"
        );
        assert!(err.is_validation());

        let payload = payload.with_namespace("n").with_name("add").with_source("1");
        assert!(op.validate(&payload).is_ok());
    }

    #[test]
    fn test_info_needs_only_paths() {
        assert!(ModelOperation::Info
            .validate(&ModelPayload::new("/p", "a.js"))
            .is_ok());
        assert!(ModelOperation::Remove.validate(&ModelPayload::default()).is_err());
    }
}
