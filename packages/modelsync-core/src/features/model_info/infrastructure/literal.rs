//! Literal evaluator
//!
//! Turns a restricted expression subtree into a JSON value. Supported kinds
//! are enumerated explicitly; everything else is an error, never a
//! placeholder.

use serde_json::{Map, Number, Value};

use crate::errors::{ModelError, Result};
use crate::features::parsing::domain::{NodeId, SourceDocument, SyntaxKind};
use crate::features::parsing::infrastructure::tree_sitter::languages::javascript::fields;
use crate::shared::utils::js_literal::{negate_number, parse_number, unquote_string};

/// Evaluate a literal expression
pub fn evaluate(doc: &SourceDocument, id: NodeId) -> Result<Value> {
    match doc.kind(id) {
        SyntaxKind::Object => {
            let mut map = Map::new();
            for entry in doc.named_children(id) {
                if doc.kind(entry) != SyntaxKind::Pair {
                    return Err(unsupported(doc, entry));
                }
                let (Some(key), Some(value)) = (
                    doc.child_by_field(entry, fields::KEY),
                    doc.child_by_field(entry, fields::VALUE),
                ) else {
                    return Err(unsupported(doc, entry));
                };
                map.insert(object_key(doc, key)?, evaluate(doc, value)?);
            }
            Ok(Value::Object(map))
        }
        SyntaxKind::Array => doc
            .named_children(id)
            .map(|item| evaluate(doc, item))
            .collect::<Result<Vec<_>>>()
            .map(Value::Array),
        SyntaxKind::StringLiteral => Ok(Value::String(unquote_string(&doc.text(id)))),
        SyntaxKind::NumberLiteral => number(doc, id).map(Value::Number),
        SyntaxKind::TrueLiteral => Ok(Value::Bool(true)),
        SyntaxKind::FalseLiteral => Ok(Value::Bool(false)),
        SyntaxKind::NullLiteral => Ok(Value::Null),
        SyntaxKind::UnaryExpr => {
            let operator = doc.child_by_field(id, fields::OPERATOR).map(|op| doc.text(op));
            let argument = doc.child_by_field(id, fields::ARGUMENT);
            match (operator.as_deref(), argument) {
                (Some("-"), Some(arg)) if doc.kind(arg) == SyntaxKind::NumberLiteral => {
                    let n = number(doc, arg)?;
                    negate_number(&n)
                        .map(Value::Number)
                        .ok_or_else(|| unsupported(doc, id))
                }
                _ => Err(unsupported(doc, id)),
            }
        }
        _ => Err(unsupported(doc, id)),
    }
}

fn object_key(doc: &SourceDocument, key: NodeId) -> Result<String> {
    match doc.kind(key) {
        SyntaxKind::PropertyIdentifier => Ok(doc.text(key).into_owned()),
        SyntaxKind::StringLiteral => Ok(unquote_string(&doc.text(key))),
        SyntaxKind::NumberLiteral => number(doc, key).map(|n| number_key(&n)),
        _ => Err(unsupported(doc, key)),
    }
}

fn number(doc: &SourceDocument, id: NodeId) -> Result<Number> {
    let raw = doc.text(id);
    parse_number(&raw).ok_or_else(|| {
        ModelError::structural(format!("unsupported state expression: number {raw}"))
    })
}

/// Property name a numeric key stands for (`1.0` and `0x1` are both "1")
fn number_key(n: &Number) -> String {
    match (n.as_i64(), n.as_u64(), n.as_f64()) {
        (Some(i), _, _) => i.to_string(),
        (_, Some(u), _) => u.to_string(),
        (_, _, Some(f)) if f.fract() == 0.0 && f.abs() < 9_007_199_254_740_992.0 => {
            (f as i64).to_string()
        }
        _ => n.to_string(),
    }
}

fn unsupported(doc: &SourceDocument, id: NodeId) -> ModelError {
    ModelError::structural(format!(
        "unsupported state expression: {}",
        doc.node(id).raw_kind
    ))
}
