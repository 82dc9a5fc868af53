//! Extraction of model records

mod common;

use common::*;
use modelsync_core::config::AnalysisConfig;
use modelsync_core::{ModelError, ModelInfoExtractor};
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn test_extract_full_model() {
    let doc = parse(&fixture_full_model("users"));
    let infos = ModelInfoExtractor::default().extract(&doc, None).unwrap();
    assert_eq!(infos.len(), 1);
    let info = &infos[0];

    assert_eq!(info.namespace, "users");
    assert_eq!(
        info.state,
        Some(json!({ "list": [], "total": 0, "filter": { "page": 1, "size": -20 } }))
    );

    let reducers: Vec<&str> = info.reducers.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(reducers, vec!["save", "reset"]);
    assert!(info.reducers[0].source.starts_with("save(state, { payload }) {"));
    assert_eq!(info.reducers[1].source, "() => ({ list: [], total: 0 })");

    assert_eq!(info.effects.len(), 1);
    assert_eq!(info.effects[0].name, "fetch");
    assert_eq!(info.effects[0].dispatches, vec!["users/save".to_string()]);

    assert_eq!(info.subscriptions.len(), 1);
    assert_eq!(info.subscriptions[0].name, "setup");
    assert_eq!(
        info.subscriptions[0].dispatches,
        vec!["users/fetch".to_string(), "users/reset".to_string()]
    );
}

#[test]
fn test_extract_filters_by_namespace() {
    let source = format!("{}\n{}", fixture_count_model(), "export const other = { namespace: 'other', state: null };\n");
    let doc = parse(&source);

    let all = ModelInfoExtractor::default().extract(&doc, None).unwrap();
    let names: Vec<&str> = all.iter().map(|i| i.namespace.as_str()).collect();
    assert_eq!(names, vec!["count", "other"]);

    let other = ModelInfoExtractor::default().extract(&doc, Some("other")).unwrap();
    assert_eq!(other.len(), 1);
    assert_eq!(other[0].state, Some(serde_json::Value::Null));
}

#[test]
fn test_unrecognized_property_is_rejected() {
    let doc = parse("export default { namespace: 'count', state: 0, computed: {} };");
    let err = ModelInfoExtractor::default().extract(&doc, None).unwrap_err();
    match err {
        ModelError::UnrecognizedProperty { namespace, name } => {
            assert_eq!(namespace, "count");
            assert_eq!(name, "computed");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_configured_dispatch_callees() {
    let source = "export default {\n  namespace: 'jobs',\n  effects: {\n    *run(_, { put }) {\n      yield put({ type: 'jobs/done' });\n      dispatch('jobs/log');\n    },\n  },\n};\n";
    let doc = parse(source);

    let default = ModelInfoExtractor::default().extract(&doc, None).unwrap();
    assert_eq!(default[0].effects[0].dispatches, vec!["jobs/log".to_string()]);

    let config = AnalysisConfig {
        dispatch_callees: vec!["put".to_string()],
    };
    let configured = ModelInfoExtractor::new(&config).extract(&doc, None).unwrap();
    assert_eq!(configured[0].effects[0].dispatches, vec!["jobs/done".to_string()]);
}

#[test]
fn test_serialized_record_shape() {
    let doc = parse(fixture_count_model());
    let infos = ModelInfoExtractor::default().extract(&doc, None).unwrap();
    assert_eq!(
        serde_json::to_value(&infos).unwrap(),
        json!([{
            "namespace": "count",
            "state": 0,
            "reducers": [],
            "effects": [],
            "subscriptions": []
        }])
    );

    let doc = parse("export default { namespace: 'bare', reducers: {} };");
    let infos = ModelInfoExtractor::default().extract(&doc, None).unwrap();
    assert_eq!(
        serde_json::to_value(&infos[0]).unwrap(),
        json!({ "namespace": "bare", "reducers": [], "effects": [], "subscriptions": [] })
    );
}

#[test]
fn test_non_object_container_is_structural_mismatch() {
    let doc = parse("export default { namespace: 'x', reducers: createReducers() };");
    let err = ModelInfoExtractor::default().extract(&doc, None).unwrap_err();
    assert!(matches!(err, ModelError::StructuralMismatch(_)));
}
