//! One generator per directive. Each consumes the already-tokenized
//! arguments and returns the replacement Java text.

use std::collections::BTreeSet;

use crate::error::ExpandError;

use super::symbols;

/// `@namespace lox` → `package lox;`
pub fn namespace(line: &str) -> String {
    let name = line.split_whitespace().nth(1).unwrap_or_default();
    format!("package {name};\n")
}

/// `@import io,nio.file,util` → one `import java.<x>.*;` per name.
pub fn imports(line: &str) -> String {
    let mut out = String::new();
    if let Some(list) = line.split_whitespace().nth(1) {
        for pkg in list.split(',') {
            out.push_str(&format!("import java.{pkg}.*;\n"));
        }
    }
    out
}

/// `@INSERT_TR(!, !=, "and")` → `BANG, BANG_EQUAL, AND, ` — one enum-style
/// line, every token mapped through the symbol table or uppercased.
pub fn translation_line(first: &str, rest: &[String]) -> String {
    let mut out = String::new();
    for token in std::iter::once(first).chain(rest.iter().map(String::as_str)) {
        out.push_str(&symbols::translate_or_upper(token));
        out.push_str(", ");
    }
    out.push('\n');
    out
}

/// `@INSERT_TR_1("(){}")` — the packed-string form: the same rule applied
/// to each character of the single argument.
pub fn translation_line_packed(packed: &str) -> String {
    let mut chars = packed.chars();
    let Some(first) = chars.next() else {
        return "\n".to_string();
    };
    let rest: Vec<String> = chars.map(|c| c.to_string()).collect();
    translation_line(&first.to_string(), &rest)
}

/// `@case(add_token, "+-")` → one unconditionally-breaking `case` arm per
/// character, invoking the handler with the translated symbol.
pub fn case_arms(handler: &str, rest: &[String]) -> String {
    let mut out = String::new();
    let Some(chars) = rest.first() else {
        return out;
    };
    for c in chars.chars() {
        let symbol = symbols::translate_or_upper(&c.to_string());
        out.push_str(&format!("      case '{c}': {handler}({symbol}); break;\n"));
    }
    out
}

/// `@insert_capval(keywords, "and", "class")` → one
/// `keywords.put("and", AND);` statement per keyword, in order.
pub fn map_inserts(map_name: &str, keywords: &[String]) -> String {
    let mut lines = Vec::new();
    for kw in keywords {
        lines.push(format!("    {map_name}.put(\"{kw}\", {});", kw.to_uppercase()));
    }
    lines.join("\n") + "\n"
}

/// Splits `"T1 f1, T2 f2"` into ordered (type, name) pairs. A Vec, never a
/// map: two same-typed fields must keep their declaration order.
///
/// Commas inside a single field's type (nested generics) would split
/// wrongly here; the dialect never writes them.
fn parse_fields(field_list: &str) -> Result<Vec<(String, String)>, ExpandError> {
    let mut fields = Vec::new();
    for entry in field_list.split(',') {
        let mut words = entry.split_whitespace();
        match (words.next(), words.next(), words.next()) {
            (Some(ty), Some(name), None) => fields.push((ty.to_string(), name.to_string())),
            _ => return Err(ExpandError::MalformedFieldSpec(entry.trim().to_string())),
        }
    }
    Ok(fields)
}

fn parameter_list(fields: &[(String, String)]) -> String {
    fields
        .iter()
        .map(|(ty, name)| format!("{ty} {name}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// `@gen_class_member(token, "token_type type, String lexeme")` → field
/// declarations plus a constructor assigning every field in input order.
pub fn gen_class_member(class_name: &str, rest: &[String]) -> Result<String, ExpandError> {
    let field_list = rest.first().map(String::as_str).unwrap_or_default();
    let fields = parse_fields(field_list)?;

    let mut out = String::new();
    for (ty, name) in &fields {
        out.push_str(&format!("  {ty} {name};\n"));
    }
    out.push_str(&format!("  {class_name}({}) {{\n", parameter_list(&fields)));
    for (_, name) in &fields {
        out.push_str(&format!("    this.{name} = {name};\n"));
    }
    out.push_str("  }\n");
    Ok(out)
}

/// `@gen_ast(Expr, "Binary : Expr left, Expr right", ...)` → the abstract
/// base, a `Visitor<R>` interface with one dispatch method per subclass,
/// one nested class per `Sub : fields` entry, and the abstract `accept`.
///
/// Every generated `Base.Sub` name lands in `classes` for the post-pass.
pub fn gen_ast(
    base: &str,
    specs: &[String],
    classes: &mut BTreeSet<String>,
) -> Result<String, ExpandError> {
    let mut out = format!("abstract class {base} {{\n");
    out.push_str(&define_visitor(base, specs));

    for spec in specs {
        let (sub, field_list) = spec
            .split_once(':')
            .ok_or_else(|| ExpandError::MalformedFieldSpec(spec.clone()))?;
        let sub = sub.trim();
        out.push_str(&define_type(base, sub, field_list.trim())?);
        classes.insert(format!("{base}.{sub}"));
    }

    out.push('\n');
    out.push_str("  abstract <R> R accept(Visitor<R> visitor);\n");
    out.push_str("}\n");
    Ok(out)
}

fn define_visitor(base: &str, specs: &[String]) -> String {
    let mut out = String::from("  interface Visitor<R> {\n");
    for spec in specs {
        let sub = spec.split(':').next().unwrap_or_default().trim();
        out.push_str(&format!(
            "    R visit{sub}{base}({sub} {});\n",
            base.to_lowercase()
        ));
    }
    out.push_str("  }\n\n");
    out
}

fn define_type(base: &str, sub: &str, field_list: &str) -> Result<String, ExpandError> {
    let fields = parse_fields(field_list)?;

    let mut out = format!("  static class {sub} extends {base} {{\n");
    for (ty, name) in &fields {
        out.push_str(&format!("    {ty} {name};\n"));
    }
    out.push_str(&format!("    {sub}({}) {{\n", parameter_list(&fields)));
    for (_, name) in &fields {
        out.push_str(&format!("      this.{name} = {name};\n"));
    }
    out.push_str("    }\n");

    out.push('\n');
    out.push_str("    @Override\n");
    out.push_str("    <R> R accept(Visitor<R> visitor) {\n");
    out.push_str(&format!("      return visitor.visit{sub}{base}(this);\n"));
    out.push_str("    }\n");

    out.push_str("  }\n");
    Ok(out)
}
