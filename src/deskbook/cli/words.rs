//! Splits a session line into words.
//!
//! Whitespace separates words. Single or double quotes group text, including
//! whitespace, into one word; quotes may appear mid-word (`--title="a b"`).
//! `""` yields an empty word, which lets a user pass an empty field value.

use deskbook::error::{DeskbookError, Result};

pub fn split_words(line: &str) -> Result<Vec<String>> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;

    for c in line.chars() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => current.push(c),
            None if c == '"' || c == '\'' => {
                quote = Some(c);
                in_word = true;
            }
            None if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            None => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if let Some(q) = quote {
        return Err(DeskbookError::Api(format!("Unterminated quote: {}", q)));
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_whitespace() {
        assert_eq!(
            split_words("  contacts   find Bob ").unwrap(),
            vec!["contacts", "find", "Bob"]
        );
    }

    #[test]
    fn quotes_group_words() {
        assert_eq!(
            split_words(r#"notes add --title "Shopping list" --category 'home stuff'"#).unwrap(),
            vec!["notes", "add", "--title", "Shopping list", "--category", "home stuff"]
        );
    }

    #[test]
    fn quotes_inside_a_word() {
        assert_eq!(
            split_words(r#"--title="a b""#).unwrap(),
            vec!["--title=a b"]
        );
    }

    #[test]
    fn empty_quotes_make_an_empty_word() {
        assert_eq!(
            split_words(r#"--content """#).unwrap(),
            vec!["--content", ""]
        );
    }

    #[test]
    fn other_quote_kind_is_literal() {
        assert_eq!(split_words(r#""it's""#).unwrap(), vec!["it's"]);
    }

    #[test]
    fn blank_line_has_no_words() {
        assert!(split_words("   ").unwrap().is_empty());
    }

    #[test]
    fn unterminated_quote_is_an_error() {
        assert!(matches!(
            split_words(r#"notes add --title "oops"#),
            Err(DeskbookError::Api(_))
        ));
    }
}
