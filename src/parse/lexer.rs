//! Splits one input line into fields.
//!
//! Quoting and escaping are resolved here, so everything downstream works on
//! plain strings. Each field remembers whether any part of it was quoted or
//! escaped; the tokenizer refuses to read operators out of such fields, so a
//! `>` inside quotes is an ordinary character.

/// One field of the input line, after escape and quote processing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub text: String,
    /// Any part of the field came from a quoted region or an escape.
    pub quoted: bool,
}

/// Split a trimmed input line into fields.
///
/// Single quotes preserve every enclosed character except the closing `'`.
/// Double quotes preserve everything except `"`, with `\\` and `\"`
/// collapsing to `\` and `"`. Outside quotes a backslash escapes the next
/// character to its literal value. An unterminated quote is tolerated; the
/// accumulated content becomes the last field.
pub fn split_fields(line: &str) -> Vec<Field> {
    let mut fields = Vec::new();
    let mut buf = String::new();
    let mut buf_quoted = false;
    let mut quote: Option<char> = None;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(&next) = chars.peek() {
                match quote {
                    None => {
                        buf.push(next);
                        buf_quoted = true;
                        chars.next();
                    }
                    Some('"') if next == '\\' || next == '"' => {
                        buf.push(next);
                        chars.next();
                    }
                    // Inside quotes the backslash itself is kept and the next
                    // character is re-scanned under the normal rules.
                    Some(_) => buf.push('\\'),
                }
                continue;
            }
            // Trailing backslash at end of input.
            buf.push('\\');
            continue;
        }

        match c {
            '\'' | '"' => match quote {
                None => {
                    quote = Some(c);
                    buf_quoted = true;
                }
                Some(q) if q == c => quote = None,
                Some(_) => buf.push(c),
            },
            c if c.is_whitespace() => {
                if quote.is_some() {
                    buf.push(c);
                } else if !buf.is_empty() {
                    fields.push(Field {
                        text: std::mem::take(&mut buf),
                        quoted: std::mem::take(&mut buf_quoted),
                    });
                } else {
                    buf_quoted = false;
                }
            }
            c => buf.push(c),
        }
    }

    if !buf.is_empty() {
        fields.push(Field {
            text: buf,
            quoted: buf_quoted,
        });
    }

    fields
}
