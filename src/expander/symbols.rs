//! Fixed punctuation → token-name table, shared by the translation-table
//! and case-arm generators.

pub fn translate(symbol: &str) -> Option<&'static str> {
    Some(match symbol {
        "(" => "LEFT_PAREN",
        ")" => "RIGHT_PAREN",
        "{" => "LEFT_BRACE",
        "}" => "RIGHT_BRACE",
        "," => "COMMA",
        "." => "DOT",
        "-" => "MINUS",
        "+" => "PLUS",
        ";" => "SEMICOLON",
        "/" => "SLASH",
        "*" => "STAR",
        "!" => "BANG",
        "!=" => "BANG_EQUAL",
        "=" => "EQUAL",
        "==" => "EQUAL_EQUAL",
        ">" => "GREATER",
        ">=" => "GREATER_EQUAL",
        "<" => "LESS",
        "<=" => "LESS_EQUAL",
        _ => return None,
    })
}

/// Table name, or the uppercased raw spelling for anything unmapped
/// (keywords like `and` become `AND`).
pub fn translate_or_upper(symbol: &str) -> String {
    match translate(symbol) {
        Some(name) => name.to_string(),
        None => symbol.to_uppercase(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate() {
        let test_cases = vec![
            ("(", Some("LEFT_PAREN")),
            ("}", Some("RIGHT_BRACE")),
            ("!=", Some("BANG_EQUAL")),
            ("<=", Some("LESS_EQUAL")),
            ("and", None),
            ("", None),
        ];

        for (symbol, expected) in test_cases {
            assert_eq!(translate(symbol), expected);
        }
    }

    #[test]
    fn test_fallback_uppercases() {
        assert_eq!(translate_or_upper("=="), "EQUAL_EQUAL");
        assert_eq!(translate_or_upper("while"), "WHILE");
    }
}
