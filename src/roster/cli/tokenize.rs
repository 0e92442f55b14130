//! Splits one line of session input into arguments.
//!
//! Whitespace separates arguments. Single quotes take everything literally,
//! double quotes allow `\"` and `\\`, and outside quotes a backslash escapes
//! the next character.

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TokenizeError {
    #[error("unterminated {0} quote")]
    UnterminatedQuote(char),

    #[error("line ends with a backslash")]
    TrailingBackslash,
}

pub fn split_line(line: &str) -> Result<Vec<String>, TokenizeError> {
    let mut args = Vec::new();
    let mut current = String::new();
    // Distinguishes `""` (an empty argument) from no argument at all.
    let mut in_arg = false;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match c {
            c if c.is_whitespace() => {
                if in_arg {
                    args.push(std::mem::take(&mut current));
                    in_arg = false;
                }
            }
            '\'' => {
                in_arg = true;
                loop {
                    match chars.next() {
                        Some('\'') => break,
                        Some(c) => current.push(c),
                        None => return Err(TokenizeError::UnterminatedQuote('\'')),
                    }
                }
            }
            '"' => {
                in_arg = true;
                loop {
                    match chars.next() {
                        Some('"') => break,
                        Some('\\') => match chars.next() {
                            Some(c @ ('"' | '\\')) => current.push(c),
                            Some(c) => {
                                current.push('\\');
                                current.push(c);
                            }
                            None => return Err(TokenizeError::UnterminatedQuote('"')),
                        },
                        Some(c) => current.push(c),
                        None => return Err(TokenizeError::UnterminatedQuote('"')),
                    }
                }
            }
            '\\' => {
                in_arg = true;
                match chars.next() {
                    Some(c) => current.push(c),
                    None => return Err(TokenizeError::TrailingBackslash),
                }
            }
            c => {
                in_arg = true;
                current.push(c);
            }
        }
    }

    if in_arg {
        args.push(current);
    }
    Ok(args)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_whitespace() {
        assert_eq!(split_line("  list   --course x ").unwrap(), vec!["list", "--course", "x"]);
        assert!(split_line("   ").unwrap().is_empty());
    }

    #[test]
    fn keeps_quoted_spaces() {
        assert_eq!(
            split_line(r#"add --name "John Doe" --course 'React In Depth'"#).unwrap(),
            vec!["add", "--name", "John Doe", "--course", "React In Depth"]
        );
    }

    #[test]
    fn handles_escapes_and_empty_args() {
        assert_eq!(split_line(r#"a\ b "say \"hi\"" ''"#).unwrap(), vec!["a b", "say \"hi\"", ""]);
    }

    #[test]
    fn reports_unterminated_quotes() {
        assert_eq!(split_line("edit 1 --name \"Jo"), Err(TokenizeError::UnterminatedQuote('"')));
        assert_eq!(split_line("x\\"), Err(TokenizeError::TrailingBackslash));
    }
}
