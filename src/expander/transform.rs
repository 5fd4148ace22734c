//! Per-line transformation with a fixed precedence: comments, header
//! directives, shorthand declarations, marker directives, structural
//! directives, visitor bookkeeping, dispatch-method expansion, and finally
//! the pending-return brace tracker.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::ExpandError;
use crate::model::Session;

use super::directives;
use super::reader::Reader;

/// The structural directives, looked up by prefix. `InsertTrPacked` must
/// be probed before `InsertTr`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Directive {
    InsertCapval,
    GenAst,
    GenClassMember,
    InsertTrPacked,
    InsertTr,
    Case,
}

impl Directive {
    fn lookup(line: &str) -> Option<Directive> {
        let table: &[(&str, Directive)] = &[
            ("@insert_capval", Directive::InsertCapval),
            ("@gen_ast", Directive::GenAst),
            ("@gen_class_member", Directive::GenClassMember),
            ("@INSERT_TR_1", Directive::InsertTrPacked),
            ("@INSERT_TR", Directive::InsertTr),
            ("@case", Directive::Case),
        ];
        let line = line.trim_start();
        table
            .iter()
            .find(|(prefix, _)| line.starts_with(prefix))
            .map(|(_, d)| *d)
    }
}

/// `visit<Subclass><Base>` decomposes into exactly two capitalized runs.
static CAMEL_PARTS: LazyLock<Regex> = LazyLock::new(|| Regex::new("[A-Z][a-z]+").unwrap());

/// Prefixes `output` with `origin`'s leading spaces.
fn with_indent_of(origin: &str, output: &str) -> String {
    let indent: String = origin.chars().take_while(|&c| c == ' ').collect();
    format!("{indent}{output}")
}

/// Transforms the line under the cursor, appends the result to the
/// session, and advances past everything consumed.
pub fn transform_line(reader: &mut Reader, session: &mut Session) -> Result<(), ExpandError> {
    let current = reader.current();

    // 1. comments pass through verbatim
    if current.trim_start().starts_with("//") {
        session.out.push(current);
        reader.advance();
        return Ok(());
    }

    // 2. header-only directives replace the line wholesale
    let trimmed = current.trim_start();
    if trimmed.starts_with("@namespace") {
        session.out.push(directives::namespace(&current));
        reader.advance();
        return Ok(());
    }
    if trimmed.starts_with("@import") {
        session.out.push(directives::imports(&current));
        reader.advance();
        return Ok(());
    }

    let mut line = current;

    // class declarations feed the post-pass registry
    if line.trim_start().starts_with("class ") {
        if let Some(name) = line.split_whitespace().nth(1) {
            session.classes.insert(name.trim_end_matches('{').to_string());
        }
    }

    // 3. `name := expr` becomes an inferred-type declaration
    if let Some((head, rest)) = line.split_once(":=") {
        let name = head.trim();
        let expr = rest.trim();
        line = with_indent_of(head, &format!("var {name} = {expr}\n"));
    }

    // 4. `@static` marks a declaration whose members are statically
    // imported from the enclosing namespace; the import itself lands
    // right behind the package/import header.
    if line.trim_start().starts_with("@static") {
        let words: Vec<&str> = line.split_whitespace().collect();
        if words.len() >= 2 {
            let name = words[words.len() - 2];
            if let Some(first) = session.out.first() {
                let package = first
                    .split_whitespace()
                    .last()
                    .unwrap_or_default()
                    .trim_end_matches(';');
                let at = 2.min(session.out.len());
                session
                    .out
                    .insert(at, format!("import static {package}.{name}.*;\n"));
            }
        }
        session.out.push(line.replacen("@static ", "", 1));
        reader.advance();
        return Ok(());
    }

    // 5. `@io_throw` relocates the checked-exception clause before `{`
    if line.trim_start().starts_with("@io_throw") {
        if let Some((decl, _)) = line.rsplit_once('{') {
            let func_decl = decl.replacen("@io_throw", "", 1);
            let func_decl = func_decl.trim();
            line = with_indent_of(&line, &format!("{func_decl} throws IOException {{\n"));
        }
    }

    // 6. structural directives route through the reader to their handler
    if let Some(directive) = Directive::lookup(&line) {
        let (first, rest) = reader.collect_invocation()?;
        line = match directive {
            Directive::InsertCapval => directives::map_inserts(&first, &rest),
            Directive::GenAst => directives::gen_ast(&first, &rest, &mut session.classes)?,
            Directive::GenClassMember => directives::gen_class_member(&first, &rest)?,
            Directive::InsertTrPacked => directives::translation_line_packed(&first),
            Directive::InsertTr => directives::translation_line(&first, &rest),
            Directive::Case => directives::case_arms(&first, &rest),
        };
    }

    // 7. `implements X.Visitor<T>` records the dispatch return type; the
    // clause may continue over several lines up to the opening brace
    if line.contains("implements") {
        while !line.contains('{') {
            reader.advance();
            if reader.is_end() {
                break;
            }
            line.push_str(&reader.current());
        }
        let clause = line
            .split("implements")
            .nth(1)
            .unwrap_or_default()
            .replace('{', "");
        for part in clause.split(',') {
            if let Some((class, rest)) = part.trim().split_once(".Visitor<") {
                let return_type = rest.trim().strip_suffix('>').unwrap_or(rest).trim();
                session
                    .visitor_returns
                    .insert(class.to_string(), return_type.to_string());
            }
        }
    }

    // 8. `@impl visit<Sub><Base>` expands to the overridden signature
    if line.trim_start().starts_with("@impl") {
        let method = line.replacen("@impl", "", 1).replace('{', "");
        let method = method.trim().to_string();

        let parts: Vec<&str> = CAMEL_PARTS
            .find_iter(&method)
            .map(|m| m.as_str())
            .collect();
        if !method.starts_with("visit") || parts.len() != 2 {
            return Err(ExpandError::MalformedInvocationHeader(method.clone()));
        }
        let (sub, base) = (parts[0], parts[1]);

        let return_type = session
            .visitor_returns
            .get(base)
            .ok_or_else(|| ExpandError::UnknownVisitorBinding(base.to_string()))?
            .clone();
        line = with_indent_of(
            &line,
            &format!(
                "@Override public {return_type} {method}({base}.{sub} {}) {{\n",
                base.to_lowercase()
            ),
        );
        if return_type == "Void" {
            session.pending_return.arm();
        }
    }

    // 9. while armed, track braces; the zero-crossing injects the
    // terminal return just before the closing line
    if session.pending_return.armed {
        for ch in line.chars() {
            if session.pending_return.observe(ch) {
                let injected = format!("  {}", with_indent_of(&line, "return null;\n"));
                session.out.push(injected);
                break;
            }
        }
    }

    // 10. emit and move on
    session.out.push(line);
    reader.advance();
    Ok(())
}
