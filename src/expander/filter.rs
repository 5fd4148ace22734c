//! Final pass over the assembled fragments: bare invocations of known
//! generated classes become constructor calls, plus two fixed idiom
//! rewrites.

use std::collections::BTreeSet;

use crate::model::Session;

pub fn apply(session: &Session) -> String {
    session
        .out
        .iter()
        .map(|fragment| refine(fragment, &session.classes))
        .collect()
}

fn refine(fragment: &str, classes: &BTreeSet<String>) -> String {
    let mut line = fragment.to_string();

    for class in classes {
        // a call with no construction keyword, outside type declarations
        // (generated blocks carry braces and are left alone)
        if line.contains(&format!("{class}(")) && !line.contains("new") && !line.contains('{') {
            line = line.replace(class.as_str(), &format!("new {class}"));

            // assignment whose right-hand side already starts the
            // statement: the keyword was duplicated, drop it
            if line.contains('=') && line.replace("static", "").trim().starts_with("new") {
                line = line.replacen("new ", "", 1);
            }
            // member access off another expression never constructs
            if line.contains(".new") {
                line = line.replacen("new ", "", 1);
            }
        }
    }

    if line.contains("return parse_error") {
        line = line.replace("return", "return new");
    }
    if line.contains("== Expr.") {
        line = line.replace("==", "instanceof");
    }
    line
}
