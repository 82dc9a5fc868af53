//! Facade operations over in-memory and real file systems

mod common;

use common::*;
use modelsync_core::api;
use modelsync_core::config::ModelSyncConfig;
use modelsync_core::{BuiltinTemplates, ModelError, ModelPayload, ModelService, Outcome};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

const ROOT: &str = "/app";
const FILE: &str = "src/models/count.js";
const TARGET: &str = "/app/src/models/count.js";

fn service(fs: MemoryFs) -> ModelService<MemoryFs, BuiltinTemplates> {
    ModelService::with_adapters(fs, BuiltinTemplates::new(), ModelSyncConfig::default())
}

fn payload() -> ModelPayload {
    ModelPayload::new(ROOT, FILE).with_namespace("count")
}

#[test]
fn test_validation_happens_before_io() {
    let service = service(MemoryFs::new().with_file(TARGET, fixture_count_model()));

    let err = service
        .add_reducer(&payload().with_name("add"))
        .unwrap_err();
    match err {
        ModelError::Validation { operation, message } => {
            assert_eq!(operation, "api/models/addReducer");
            assert_eq!(message, "payload should have source");
        }
        other => panic!("unexpected error: {other}"),
    }

    let err = service
        .update_namespace(&ModelPayload::default())
        .unwrap_err();
    assert!(err.is_validation());
    assert_eq!(service.file_system().calls(), 0);
}

#[test]
fn test_create_refuses_to_overwrite() {
    let service = service(MemoryFs::new());
    let outcome = service.create(&payload()).unwrap();
    assert_eq!(outcome, Outcome::Created(TARGET.into()));
    assert!(service
        .file_system()
        .contents(TARGET)
        .unwrap()
        .contains("namespace: 'count',"));

    let err = service.create(&payload()).unwrap_err();
    assert!(matches!(err, ModelError::FileExists(_)));
    assert_eq!(service.file_system().writes(), 1);
}

#[test]
fn test_create_overwrites_when_allowed() {
    let mut config = ModelSyncConfig::default();
    config.facade.allow_overwrite = true;
    let service = ModelService::with_adapters(
        MemoryFs::new().with_file(TARGET, "old"),
        BuiltinTemplates::new(),
        config,
    );
    service.create(&payload()).unwrap();
    assert_ne!(service.file_system().contents(TARGET).as_deref(), Some("old"));
}

#[test]
fn test_failed_mutation_leaves_file_untouched() {
    let service = service(MemoryFs::new().with_file(TARGET, fixture_count_model()));
    let err = service
        .update_reducer(&payload().with_name("missing").with_source("1"))
        .unwrap_err();
    assert!(matches!(err, ModelError::EntryNotFound { .. }));
    assert_eq!(service.file_system().writes(), 0);
    assert_eq!(
        service.file_system().contents(TARGET).as_deref(),
        Some(fixture_count_model())
    );
}

#[test]
fn test_comma_sequence_source_never_reaches_disk() {
    let service = service(MemoryFs::new().with_file(TARGET, fixture_count_model()));
    let err = service
        .update_state(&payload().with_source("1, 2"))
        .unwrap_err();
    assert!(matches!(err, ModelError::StructuralMismatch(_)));
    let err = service
        .add_reducer(&payload().with_name("a").with_source("1, 2"))
        .unwrap_err();
    assert!(matches!(err, ModelError::StructuralMismatch(_)));

    assert_eq!(service.file_system().writes(), 0);
    assert_eq!(
        service.file_system().contents(TARGET).as_deref(),
        Some(fixture_count_model())
    );
}

#[test]
fn test_unmatched_namespace_is_a_no_op() {
    let service = service(MemoryFs::new().with_file(TARGET, fixture_count_model()));
    let outcome = service
        .add_reducer(&payload().with_namespace("other").with_name("add").with_source("1"))
        .unwrap();
    assert_eq!(
        outcome,
        Outcome::Updated {
            path: TARGET.into(),
            changed: false
        }
    );
    assert_eq!(service.file_system().writes(), 0);
}

#[test]
fn test_run_resolves_operation_names() {
    let service = service(MemoryFs::new().with_file(TARGET, fixture_count_model()));

    let output = api::run(
        &service,
        "models.addReducer",
        &payload().with_name("add").with_source("1"),
    )
    .unwrap();
    assert!(output.ok);
    assert!(output.models.is_none());

    let output = api::run(&service, "info", &ModelPayload::new(ROOT, FILE)).unwrap();
    let models = output.models.unwrap();
    assert_eq!(models.len(), 1);
    assert_eq!(models[0].reducers[0].name, "add");

    assert!(api::run(&service, "models.unknown", &payload()).is_err());
}

#[test]
fn test_remove_deletes_file() {
    let service = service(MemoryFs::new().with_file(TARGET, fixture_count_model()));
    let outcome = service.remove(&ModelPayload::new(ROOT, FILE)).unwrap();
    assert_eq!(outcome, Outcome::Removed(TARGET.into()));
    assert!(service.file_system().contents(TARGET).is_none());
}

#[test]
fn test_local_file_system_round_trip() {
    let dir = TempDir::new().unwrap();
    let root = dir.path().to_string_lossy().to_string();
    let service = ModelService::new(ModelSyncConfig::default());
    let base = ModelPayload::new(root, "models/users.js").with_namespace("users");

    service.create(&base).unwrap();
    service
        .add_reducer(&base.clone().with_name("save").with_source("(state, { payload }) => payload"))
        .unwrap();
    service
        .add_effect(
            &base
                .clone()
                .with_name("fetch")
                .with_source("function* (_, { call }) { dispatch({ type: 'users/save' }); }"),
        )
        .unwrap();
    service
        .update_state(&base.clone().with_source("{ list: [] }"))
        .unwrap();
    service
        .update_namespace(&base.clone().with_new_namespace("members"))
        .unwrap();

    let infos = service
        .info(&base.clone().with_namespace("members"))
        .unwrap();
    assert_eq!(infos.len(), 1);
    let info = &infos[0];
    assert_eq!(info.namespace, "members");
    assert_eq!(info.state, Some(serde_json::json!({ "list": [] })));
    assert_eq!(info.reducers[0].source, "(state, { payload }) => payload");
    assert_eq!(info.effects[0].dispatches, vec!["users/save".to_string()]);

    let text = std::fs::read_to_string(dir.path().join("models/users.js")).unwrap();
    assert!(text.starts_with("export default {\n  namespace: 'members',\n"));

    service.remove(&base).unwrap();
    assert!(!dir.path().join("models/users.js").exists());
}
