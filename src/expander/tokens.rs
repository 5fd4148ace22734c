//! Splits the text between an invocation's outer parentheses into argument
//! tokens: comma-separated bare words, or double-quoted literals whose
//! embedded commas must survive. No escape handling.

pub fn split_arguments(statement: &str) -> Vec<String> {
    let chars: Vec<char> = statement.chars().collect();
    let mut args = Vec::new();
    let mut index = 0;

    while index < chars.len() {
        match chars[index] {
            ' ' | '\n' | '\r' | '\t' => index += 1,
            '"' => {
                index += 1;
                let start = index;
                while index < chars.len() && chars[index] != '"' {
                    index += 1;
                }
                args.push(chars[start..index].iter().collect());
                index += 1; // closing quote

                // eat the separating comma, if any
                while index < chars.len() && chars[index].is_whitespace() {
                    index += 1;
                }
                if index < chars.len() && chars[index] == ',' {
                    index += 1;
                }
            }
            _ => {
                let start = index;
                while index < chars.len() && chars[index] != ',' {
                    index += 1;
                }
                let word: String = chars[start..index].iter().collect();
                index += 1; // comma (or one past the end)
                let word = word.trim();
                if !word.is_empty() {
                    args.push(word.to_string());
                }
            }
        }
    }
    args
}
