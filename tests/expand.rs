use std::fs;

use syntaxgen_rust::expander;

fn expand_fixture() -> String {
    let source = fs::read_to_string("tests/interp_shorthand.java").unwrap();
    expander::run(&source).expect("fixture expands")
}

#[test]
fn header_block_comes_out_in_order() {
    let out = expand_fixture();
    assert!(out.starts_with(concat!(
        "package lox;\n",
        "import java.io.*;\n",
        "import java.util.*;\n",
        "import static lox.token_type.*;\n",
    )));
}

#[test]
fn spellings_and_shorthand_declarations_expand() {
    let out = expand_fixture();
    assert!(out.contains("public static void main(String[] args) throws IOException {"));
    assert!(out.contains("    var s = new scanner(\"1+2\");\n"));
    assert!(out.contains("    System.out.println(s);\n"));
}

#[test]
fn translation_tables_expand() {
    let out = expand_fixture();
    assert!(out.contains("LEFT_PAREN, RIGHT_PAREN, LEFT_BRACE, RIGHT_BRACE, \n"));
    assert!(out.contains("BANG, BANG_EQUAL, AND, \n"));
}

#[test]
fn case_arms_and_map_inserts_expand() {
    let out = expand_fixture();
    assert!(out.contains("      case '+': advance(PLUS); break;\n"));
    assert!(out.contains("      case '-': advance(MINUS); break;\n"));

    let and = out.find("    keywords.put(\"and\", AND);").unwrap();
    let class = out.find("    keywords.put(\"class\", CLASS);").unwrap();
    assert!(and < class);
}

#[test]
fn class_members_and_ast_hierarchy_expand() {
    let out = expand_fixture();
    assert!(out.contains("  token(token_type type, String lexeme) {\n"));

    assert!(out.contains("abstract class Expr {\n"));
    assert!(out.contains("    R visitBinaryExpr(Binary expr);\n"));
    assert!(out.contains("    R visitLiteralExpr(Literal expr);\n"));
    assert!(out.contains("  static class Binary extends Expr {\n"));
    assert!(out.contains("      return visitor.visitBinaryExpr(this);\n"));
    assert!(out.contains("  abstract <R> R accept(Visitor<R> visitor);\n"));
}

#[test]
fn registered_classes_become_constructor_calls() {
    let out = expand_fixture();
    assert!(out.contains("    var e = new Expr.Binary(a, op, b);\n"));
}

#[test]
fn visitor_methods_expand_with_bound_return_types() {
    let out = expand_fixture();
    assert!(out.contains("  @Override public Object visitLiteralExpr(Expr.Literal expr) {\n"));
    assert!(out.contains("  @Override public Void visitPrintStmt(Stmt.Print stmt) {\n"));

    // the Void method gains exactly one terminal return, after the
    // nested block closes
    assert_eq!(out.matches("return null;").count(), 1);
    assert!(out.contains("      eval(stmt.expr);\n    }\n    return null;\n  }\n"));
}

#[test]
fn expansion_is_idempotent() {
    let expanded = expand_fixture();
    let again = expander::run(&expanded).expect("expanded source re-expands");
    assert_eq!(again, expanded);
}

#[test]
fn unterminated_directive_aborts_without_output() {
    let source = "@namespace lox\n@gen_ast(Expr,\n\"Binary : Expr left\"\n";
    assert_eq!(
        expander::run(source),
        Err(syntaxgen_rust::error::ExpandError::UnterminatedDirective)
    );
}
