//! Property tests for printing and renaming generated models

mod common;

use common::parse;
use modelsync_core::features::model_query::match_models;
use proptest::prelude::*;

fn model_source(namespace: &str, state: i64, reducers: &[String], multiline: bool) -> String {
    let entries: Vec<String> = reducers
        .iter()
        .map(|name| format!("{name}(state) {{ return state; }}"))
        .collect();
    if multiline {
        let body: String = entries.iter().map(|e| format!("    {e},\n")).collect();
        format!(
            "export default {{\n  namespace: '{namespace}',\n  state: {state},\n  reducers: {{\n{body}  }},\n}};\n"
        )
    } else {
        format!(
            "export default {{ namespace: \"{namespace}\", state: {state}, reducers: {{ {} }} }};",
            entries.join(", ")
        )
    }
}

fn reducer_names() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::btree_set("r[a-z]{0,6}", 0..5).prop_map(|set| set.into_iter().collect())
}

fn commented_source(reducers: &[(String, bool)]) -> String {
    let body: String = reducers
        .iter()
        .map(|(name, commented)| {
            let comment = if *commented { format!(" // about {name}.") } else { String::new() };
            format!("    {name}: (state) => state,{comment}\n")
        })
        .collect();
    format!("export default {{\n  namespace: 'c',\n  reducers: {{\n{body}  }},\n}};\n")
}

fn commented_reducers() -> impl Strategy<Value = Vec<(String, bool)>> {
    proptest::collection::btree_map("r[a-z]{0,6}", any::<bool>(), 1..6)
        .prop_map(|map| map.into_iter().collect())
}

proptest! {
    #[test]
    fn prop_untouched_document_prints_verbatim(
        namespace in "[a-z][a-z0-9/]{0,10}",
        state in -1000i64..1000,
        reducers in reducer_names(),
        multiline in any::<bool>(),
    ) {
        let source = model_source(&namespace, state, &reducers, multiline);
        let doc = parse(&source);
        prop_assert_eq!(doc.print(), source);
    }

    #[test]
    fn prop_rename_is_found_under_new_name(
        namespace in "[a-z]{1,8}",
        renamed in "[A-Z]{1,8}",
        reducers in reducer_names(),
        multiline in any::<bool>(),
    ) {
        let source = model_source(&namespace, 0, &reducers, multiline);
        let mut doc = parse(&source);
        doc.find_models(Some(namespace.as_str()))
            .unwrap()
            .update_namespace(&renamed)
            .unwrap();

        let reparsed = parse(&doc.print());
        let models = match_models(&reparsed, Some(renamed.as_str())).unwrap();
        prop_assert_eq!(models.len(), 1);
        prop_assert!(match_models(&reparsed, Some(namespace.as_str())).unwrap().is_empty());
    }

    #[test]
    fn prop_added_reducer_is_extracted_last(
        reducers in reducer_names(),
        multiline in any::<bool>(),
    ) {
        let source = model_source("count", 1, &reducers, multiline);
        let mut doc = parse(&source);
        doc.find_models(None)
            .unwrap()
            .add_reducer("zzAdded", Some("(s) => s"))
            .unwrap();

        let reparsed = parse(&doc.print());
        let infos = modelsync_core::ModelInfoExtractor::default()
            .extract(&reparsed, None)
            .unwrap();
        let names: Vec<&str> = infos[0].reducers.iter().map(|r| r.name.as_str()).collect();
        prop_assert_eq!(names.len(), reducers.len() + 1);
        prop_assert_eq!(names.last().copied(), Some("zzAdded"));
    }

    #[test]
    fn prop_removal_drops_only_its_own_comment(
        reducers in commented_reducers(),
        pick in any::<proptest::sample::Index>(),
    ) {
        let removed = pick.get(&reducers).0.clone();
        let mut doc = parse(&commented_source(&reducers));
        doc.find_models(None).unwrap().remove_reducer(&removed).unwrap();
        let text = doc.print();

        let reparsed = parse(&text);
        let infos = modelsync_core::ModelInfoExtractor::default()
            .extract(&reparsed, None)
            .unwrap();
        let names: Vec<String> = infos[0].reducers.iter().map(|r| r.name.clone()).collect();
        let expected: Vec<String> = reducers
            .iter()
            .map(|(name, _)| name.clone())
            .filter(|name| *name != removed)
            .collect();
        prop_assert_eq!(names, expected);

        for (name, commented) in &reducers {
            let comment = format!("// about {name}.");
            let kept = *commented && *name != removed;
            prop_assert_eq!(text.contains(&comment), kept, "{}", text);
        }
    }
}
