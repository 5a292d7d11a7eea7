//! Character-level scanning for the restricted Turtle subset.
//!
//! The converter never builds a grammar tree; everything downstream works
//! on statements and clauses cut out here. The scanner tracks just enough
//! context to decide whether a `.`, `;` or `#` is structurally significant:
//! whether the cursor sits inside a quoted string, a bracketed IRI, or a
//! comment.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Default,
    InString,
    InAngleBracket,
    InComment,
}

/// Collapses the input to a single line with clauses pre-separated.
///
/// Comments (an unquoted, un-bracketed `#` to end of line) are deleted,
/// line breaks and tabs are removed, runs of spaces outside strings
/// collapse to one, and every structural `;` is padded with single spaces
/// so it can never fuse with a neighboring token. Quoted string content
/// passes through unchanged.
pub(crate) fn normalize(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut state = State::Default;
    let mut escaped = false;

    for ch in input.chars() {
        match state {
            State::InString => {
                match ch {
                    '\n' | '\r' => {} // line breaks never survive normalization
                    '"' if !escaped => {
                        state = State::Default;
                        out.push(ch);
                    }
                    _ => out.push(ch),
                }
                escaped = ch == '\\' && !escaped;
            }
            State::InComment => {
                if ch == '\n' {
                    state = State::Default;
                }
            }
            State::Default | State::InAngleBracket => match ch {
                '"' if state == State::Default => {
                    state = State::InString;
                    escaped = false;
                    out.push(ch);
                }
                '<' if state == State::Default => {
                    state = State::InAngleBracket;
                    out.push(ch);
                }
                '>' => {
                    state = State::Default;
                    out.push(ch);
                }
                '#' if state == State::Default => state = State::InComment,
                ';' if state == State::Default => {
                    if !out.ends_with(' ') {
                        out.push(' ');
                    }
                    out.push_str("; ");
                }
                '\n' | '\r' | '\t' => {}
                ' ' if out.ends_with(' ') => {}
                _ => out.push(ch),
            },
        }
    }

    out.trim().to_owned()
}

/// Splits normalized text into top-level statements.
///
/// A `.` terminates a statement only outside strings and bracketed IRIs,
/// and only when the following character is not a digit (so the fractional
/// separator of `5.3` is left alone). Text after the final `.` is not a
/// statement and is discarded.
pub(crate) fn split_statements(text: &str) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut statements = Vec::new();
    let mut current = String::new();
    let mut state = State::Default;
    let mut escaped = false;

    for (i, &ch) in chars.iter().enumerate() {
        match state {
            State::InString => {
                if ch == '"' && !escaped {
                    state = State::Default;
                }
                escaped = ch == '\\' && !escaped;
                current.push(ch);
            }
            _ => match ch {
                '"' => {
                    state = State::InString;
                    escaped = false;
                    current.push(ch);
                }
                '<' => {
                    state = State::InAngleBracket;
                    current.push(ch);
                }
                '>' => {
                    state = State::Default;
                    current.push(ch);
                }
                '.' if state == State::Default
                    && !chars.get(i + 1).is_some_and(|next| next.is_ascii_digit()) =>
                {
                    statements.push(std::mem::take(&mut current));
                }
                _ => current.push(ch),
            },
        }
    }

    statements
}

/// Splits a statement or property block on structural `;` into trimmed,
/// non-empty clauses.
pub(crate) fn split_clauses(text: &str) -> Vec<String> {
    let mut clauses = Vec::new();
    let mut current = String::new();
    let mut state = State::Default;
    let mut escaped = false;

    let flush = |current: &mut String, clauses: &mut Vec<String>| {
        let clause = current.trim();
        if !clause.is_empty() {
            clauses.push(clause.to_owned());
        }
        current.clear();
    };

    for ch in text.chars() {
        match state {
            State::InString => {
                if ch == '"' && !escaped {
                    state = State::Default;
                }
                escaped = ch == '\\' && !escaped;
                current.push(ch);
            }
            _ => match ch {
                '"' => {
                    state = State::InString;
                    escaped = false;
                    current.push(ch);
                }
                '<' => {
                    state = State::InAngleBracket;
                    current.push(ch);
                }
                '>' => {
                    state = State::Default;
                    current.push(ch);
                }
                ';' if state == State::Default => flush(&mut current, &mut clauses),
                _ => current.push(ch),
            },
        }
    }
    flush(&mut current, &mut clauses);

    clauses
}

/// Collects the content of every quoted string in the input, in order.
/// Used for `sh:in` value lists, where quoted items may sit back to back.
pub(crate) fn quoted_strings(text: &str) -> Vec<String> {
    let mut items = Vec::new();
    let mut current = String::new();
    let mut in_string = false;

    for ch in text.chars() {
        if ch == '"' {
            if in_string {
                items.push(std::mem::take(&mut current));
            }
            in_string = !in_string;
        } else if in_string {
            current.push(ch);
        }
    }

    items
}
