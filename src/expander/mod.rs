//! The functional core: one pass over the shorthand lines, then one
//! post-pass over the assembled fragments.

pub mod directives;
pub mod filter;
pub mod reader;
pub mod symbols;
pub mod tokens;
pub mod transform;

use crate::error::ExpandError;
use crate::model::Session;
use self::reader::Reader;

/// Expands the whole shorthand source into Java text.
///
/// State is freshly instantiated here; concurrent runs never share a
/// `Session`.
pub fn run(source: &str) -> Result<String, ExpandError> {
    let mut reader = Reader::new(source);
    let mut session = Session::new();

    while !reader.is_end() {
        transform::transform_line(&mut reader, &mut session)?;
    }
    tracing::debug!(
        "expanded into {} fragments, {} known classes",
        session.out.len(),
        session.classes.len()
    );

    Ok(filter::apply(&session))
}
