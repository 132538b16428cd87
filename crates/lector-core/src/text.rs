use crate::model::Token;

/// Join tokens into copyable text.
///
/// Tokens must already be in document order. A newline goes between two
/// tokens whose `line` numbers differ and a single space otherwise; only the
/// `line` number is compared, so a block or page change that reuses the same
/// line number does not break the line. The result is trimmed once at the end.
pub fn plain_text<'a, I>(tokens: I) -> String
where
    I: IntoIterator<Item = &'a Token>,
{
    let mut out = String::new();
    let mut previous_line: Option<i64> = None;

    for token in tokens {
        match previous_line {
            None => {}
            Some(line) if line != token.line() => out.push('\n'),
            Some(_) => out.push(' '),
        }
        out.push_str(token.text());
        previous_line = Some(token.line());
    }

    out.trim().to_string()
}
