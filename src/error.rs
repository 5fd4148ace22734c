//! Fatal authoring mistakes. None of these are recoverable: a run either
//! fully succeeds or aborts without writing the output file.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExpandError {
    #[error("directive invocation never reached `);` before end of input")]
    UnterminatedDirective,

    #[error("no Visitor return type recorded for `{0}` — missing `implements {0}.Visitor<..>`?")]
    UnknownVisitorBinding(String),

    #[error("field spec `{0}` must be exactly `type name`")]
    MalformedFieldSpec(String),

    #[error("`@impl` method `{0}` must be visit<Subclass><Base>")]
    MalformedInvocationHeader(String),
}
