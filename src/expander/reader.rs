//! Forward-only cursor over the input line sequence.
//!
//! `current()` hands lines out with the one-for-one spelling substitutions
//! already applied, so every later stage sees Java spellings. Structural
//! directives may span lines; `collect_invocation` reassembles them.

use crate::error::ExpandError;

use super::tokens;

/// Ordered substitution table. Order matters: the `is X` forms must run
/// before the bare ` is `, `is @Bool` before `@Bool`, `eprintln!` before
/// `println!`.
const SUBSTITUTIONS: &[(&str, &str)] = &[
    ("@main", "public static void main"),
    ("@sv", "static void"),
    ("is Double", "instanceof Double"),
    ("is @Bool", "instanceof Boolean"),
    ("is @str", "instanceof @str"),
    ("@str", "String"),
    ("@bool", "boolean"),
    ("@Bool", "Boolean"),
    ("eprintln!", "System.err.println"),
    ("println!", "System.out.println"),
    ("eprint!", "System.err.print"),
    ("print!", "System.out.print"),
    (" and ", " && "),
    (" or ", " || "),
    (" is ", " == "),
    ("to_double", "Double.parseDouble"),
];

pub fn substitute(line: &str) -> String {
    let mut line = line.to_string();
    for (from, to) in SUBSTITUTIONS {
        line = line.replace(from, to);
    }
    line
}

pub struct Reader {
    lines: Vec<String>,
    index: usize,
}

impl Reader {
    pub fn new(source: &str) -> Self {
        Self {
            lines: source.split_inclusive('\n').map(str::to_string).collect(),
            index: 0,
        }
    }

    /// Current line, trailing newline kept, substitutions applied.
    pub fn current(&self) -> String {
        substitute(&self.lines[self.index])
    }

    pub fn advance(&mut self) {
        self.index += 1;
    }

    pub fn is_end(&self) -> bool {
        self.index >= self.lines.len()
    }

    /// Concatenates lines until the accumulated statement contains the
    /// `);` terminator, then splits the text between the outer parentheses
    /// into (first argument, remaining arguments).
    ///
    /// On return the cursor sits on the terminator's line; the transformer
    /// performs the final advance.
    pub fn collect_invocation(&mut self) -> Result<(String, Vec<String>), ExpandError> {
        let mut statement = String::new();
        let mut line = self.current();
        while !line.contains(");") {
            statement.push_str(&line);
            self.advance();
            if self.is_end() {
                return Err(ExpandError::UnterminatedDirective);
            }
            line = self.current();
        }
        statement.push_str(&line);

        let open = statement.find('(').ok_or(ExpandError::UnterminatedDirective)?;
        let close = statement.find(");").ok_or(ExpandError::UnterminatedDirective)?;
        let mut args = tokens::split_arguments(&statement[open + 1..close]);

        let first = if args.is_empty() { String::new() } else { args.remove(0) };
        Ok((first, args))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substitutions() {
        let test_cases = vec![
            ("  @sv run(@str source) {", "  static void run(String source) {"),
            ("println!(value);", "System.out.println(value);"),
            ("eprintln!(value);", "System.err.println(value);"),
            ("if(val is null) continue;", "if(val == null) continue;"),
            ("if(obj is @Bool) return (@bool)obj;", "if(obj instanceof Boolean) return (boolean)obj;"),
            ("x is @str", "x instanceof String"),
            ("a and b or c", "a && b || c"),
            ("n := to_double(s);", "n := Double.parseDouble(s);"),
        ];

        for (input, expected) in test_cases {
            assert_eq!(substitute(input), expected);
        }
    }

    #[test]
    fn test_collect_invocation_single_line() {
        let mut reader = Reader::new("@case(add_token, \"(){}\");\nnext line\n");
        let (first, rest) = reader.collect_invocation().unwrap();
        assert_eq!(first, "add_token");
        assert_eq!(rest, vec!["(){}".to_string()]);
        // cursor still on the terminator's line
        assert_eq!(reader.current(), "@case(add_token, \"(){}\");\n");
    }

    #[test]
    fn test_collect_invocation_multi_line() {
        let src = "@gen_ast(Expr,\n\"Binary : Expr left, Expr right\",\n\"Literal : Object value\");\n";
        let mut reader = Reader::new(src);
        let (first, rest) = reader.collect_invocation().unwrap();
        assert_eq!(first, "Expr");
        assert_eq!(
            rest,
            vec![
                "Binary : Expr left, Expr right".to_string(),
                "Literal : Object value".to_string(),
            ]
        );
    }

    #[test]
    fn test_unterminated_invocation() {
        let mut reader = Reader::new("@gen_ast(Expr,\n\"Binary : Expr left\"\n");
        assert_eq!(
            reader.collect_invocation(),
            Err(ExpandError::UnterminatedDirective)
        );
    }
}
