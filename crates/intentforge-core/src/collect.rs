//! Param-field collection and key validation.

use crate::{AnnotatedDeclaration, DiagnosticSink, Member};

/// A validated (key, member) pair, 1:1 with a param field whose key passed
/// validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyElementPair {
    pub key: String,
    pub member: Member,
}

/// Collect the declaration's param-marked fields in declaration order.
///
/// Order is significant: it determines the generated parameter order. A
/// member with the marker but an empty key is skipped with one warning
/// naming the field and its enclosing declaration; generation continues.
pub fn collect_param_fields(
    declaration: &AnnotatedDeclaration,
    sink: &dyn DiagnosticSink,
) -> Vec<KeyElementPair> {
    let mut pairs = Vec::new();

    for member in &declaration.members {
        let Some(key) = member.param_key.as_deref() else {
            continue;
        };

        if key.is_empty() {
            sink.warn(&format!(
                "param marker without a key on field {} in {}; field ignored",
                member.name, declaration.simple_name
            ));
            continue;
        }

        pairs.push(KeyElementPair {
            key: key.to_string(),
            member: member.clone(),
        });
    }

    pairs
}
