//! Tokenizer for Go interface method declarations.
//!
//! Method sets in generated `client.go` files are parsed structurally:
//! comments are removed, declarations are split at top-level line breaks,
//! and parameter and result lists are split at top-level commas. This
//! accepts any formatting `gofmt` can produce, including declarations that
//! wrap across lines and grouped parameter names (`a, b int`).
//!
//! # Examples
//!
//! ```
//! use genclient_codegen::signature::parse_method;
//!
//! let method = parse_method(
//!     "GetObject(ctx context.Context, req *storage.GetObjectRequest, opts ...Option) (r *storage.GetObjectResponse, err error)",
//! ).unwrap();
//!
//! assert_eq!(method.name, "GetObject");
//! assert_eq!(method.params.len(), 3);
//! assert_eq!(method.results[0].ty, "*storage.GetObjectResponse");
//! ```

use std::str::CharIndices;
use thiserror::Error;

/// Go keywords that can start a type and must not be read as a parameter name.
const TYPE_KEYWORDS: &[&str] = &["chan", "func", "interface", "map", "struct"];

/// Errors produced while parsing a single method declaration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignatureError {
    /// Declaration does not start with an identifier.
    #[error("missing method name")]
    MissingName,

    /// Identifier is not followed by a parameter list.
    ///
    /// Embedded interfaces (`io.Closer`) end up here.
    #[error("'{0}' is not a method declaration")]
    NotAMethod(String),

    /// Parentheses do not balance.
    #[error("unbalanced parentheses")]
    Unbalanced,

    /// Text follows the result list.
    #[error("unexpected text after results: '{0}'")]
    TrailingText(String),

    /// Grouped parameter names were never given a type.
    #[error("parameter names without a type: {0}")]
    MissingType(String),

    /// A list mixes named and unnamed entries.
    #[error("mixed named and unnamed parameters: '{0}'")]
    MixedNaming(String),
}

/// One parameter or result of a method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Declared name, absent for unnamed parameters
    pub name: Option<String>,
    /// Type as written, with whitespace runs collapsed
    pub ty: String,
}

impl Field {
    /// Returns `true` for a variadic parameter (`opts ...Option`).
    #[must_use]
    pub fn is_variadic(&self) -> bool {
        self.ty.starts_with("...")
    }

    /// Returns `true` if the type is `context.Context`.
    #[must_use]
    pub fn is_context(&self) -> bool {
        self.ty == "context.Context"
    }
}

/// A parsed method declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodSignature {
    /// Method name
    pub name: String,
    /// Parameters in declaration order
    pub params: Vec<Field>,
    /// Results in declaration order
    pub results: Vec<Field>,
}

/// Removes `//` and `/* */` comments, leaving string literals untouched.
///
/// Line comments keep their terminating newline; block comments become a
/// newline if they spanned lines and a space otherwise, so declaration
/// boundaries survive.
///
/// # Examples
///
/// ```
/// use genclient_codegen::signature::strip_comments;
///
/// let src = "Get(x int) error // fetches\n\"http://host\"";
/// assert_eq!(strip_comments(src), "Get(x int) error \n\"http://host\"");
/// ```
#[must_use]
pub fn strip_comments(src: &str) -> String {
    let mut out = String::with_capacity(src.len());
    let mut chars = src.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '/' if chars.peek() == Some(&'/') => {
                for c in chars.by_ref() {
                    if c == '\n' {
                        out.push('\n');
                        break;
                    }
                }
            }
            '/' if chars.peek() == Some(&'*') => {
                chars.next();
                let mut prev = '\0';
                let mut spans_lines = false;
                for c in chars.by_ref() {
                    if prev == '*' && c == '/' {
                        break;
                    }
                    spans_lines |= c == '\n';
                    prev = c;
                }
                out.push(if spans_lines { '\n' } else { ' ' });
            }
            '"' | '`' | '\'' => {
                out.push(ch);
                let raw = ch == '`';
                let mut escaped = false;
                for c in chars.by_ref() {
                    out.push(c);
                    if escaped {
                        escaped = false;
                    } else if c == '\\' && !raw {
                        escaped = true;
                    } else if c == ch {
                        break;
                    }
                }
            }
            _ => out.push(ch),
        }
    }

    out
}

/// Finds the delimiter closing an already-opened `open`.
///
/// `src` starts just after the opening delimiter. Returns the byte offset
/// of the matching `close`, or `None` if the input ends first. String and
/// rune literals are skipped.
///
/// # Examples
///
/// ```
/// use genclient_codegen::signature::find_matching;
///
/// assert_eq!(find_matching("a (b) c) d", '(', ')'), Some(7));
/// assert_eq!(find_matching("a (b c", '(', ')'), None);
/// ```
#[must_use]
pub fn find_matching(src: &str, open: char, close: char) -> Option<usize> {
    let mut depth = 1usize;
    let mut chars = src.char_indices();

    while let Some((idx, ch)) = chars.next() {
        match ch {
            '"' | '`' | '\'' => skip_literal(&mut chars, ch)?,
            c if c == open => depth += 1,
            c if c == close => {
                depth -= 1;
                if depth == 0 {
                    return Some(idx);
                }
            }
            _ => {}
        }
    }

    None
}

fn skip_literal(chars: &mut CharIndices<'_>, quote: char) -> Option<()> {
    let raw = quote == '`';
    let mut escaped = false;
    for (_, c) in chars.by_ref() {
        if escaped {
            escaped = false;
        } else if c == '\\' && !raw {
            escaped = true;
        } else if c == quote {
            return Some(());
        }
    }
    None
}

/// Splits an interface body into declarations.
///
/// A declaration ends at a newline or `;` outside any bracket, so
/// declarations wrapped after `(` or `,` stay whole. Blank declarations are
/// dropped and inner whitespace runs collapse to one space.
///
/// # Examples
///
/// ```
/// use genclient_codegen::signature::split_declarations;
///
/// let body = "\n\tA(x int) error\n\n\tB(\n\t\ty int,\n\t) error\n";
/// assert_eq!(split_declarations(body), vec!["A(x int) error", "B( y int, ) error"]);
/// ```
#[must_use]
pub fn split_declarations(body: &str) -> Vec<String> {
    let mut declarations = Vec::new();
    let mut current = String::new();
    let mut depth = 0i32;

    for ch in body.chars() {
        match ch {
            '(' | '[' | '{' => depth += 1,
            ')' | ']' | '}' => depth -= 1,
            _ => {}
        }

        if (ch == '\n' || ch == ';') && depth <= 0 {
            push_declaration(&mut declarations, &current);
            current.clear();
        } else {
            current.push(ch);
        }
    }
    push_declaration(&mut declarations, &current);

    declarations
}

fn push_declaration(declarations: &mut Vec<String>, text: &str) {
    let normalized = collapse_whitespace(text);
    if !normalized.is_empty() {
        declarations.push(normalized);
    }
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Parses one method declaration: `Name(params) results`.
///
/// # Errors
///
/// Returns a [`SignatureError`] describing the first structural problem.
pub fn parse_method(declaration: &str) -> Result<MethodSignature, SignatureError> {
    let declaration = declaration.trim();
    let name_len = declaration
        .find(|c: char| !(c.is_alphanumeric() || c == '_'))
        .unwrap_or(declaration.len());
    let name = &declaration[..name_len];
    if !is_identifier(name) {
        return Err(SignatureError::MissingName);
    }

    let rest = declaration[name_len..].trim_start();
    let Some(after_open) = rest.strip_prefix('(') else {
        return Err(SignatureError::NotAMethod(declaration.to_string()));
    };

    let close = find_matching(after_open, '(', ')').ok_or(SignatureError::Unbalanced)?;
    let params = parse_fields(&after_open[..close])?;
    let results = parse_results(after_open[close + 1..].trim())?;

    Ok(MethodSignature {
        name: name.to_string(),
        params,
        results,
    })
}

fn parse_results(text: &str) -> Result<Vec<Field>, SignatureError> {
    if text.is_empty() {
        return Ok(Vec::new());
    }

    if let Some(inner) = text.strip_prefix('(') {
        let close = find_matching(inner, '(', ')').ok_or(SignatureError::Unbalanced)?;
        let trailing = inner[close + 1..].trim();
        if !trailing.is_empty() {
            return Err(SignatureError::TrailingText(trailing.to_string()));
        }
        return parse_fields(&inner[..close]);
    }

    if text.contains(')') && find_matching(text, '(', ')').is_some() {
        return Err(SignatureError::Unbalanced);
    }

    Ok(vec![Field {
        name: None,
        ty: collapse_whitespace(text),
    }])
}

/// Parses a parameter or result list (the text between the parentheses).
///
/// Follows Go's rule that a list is either fully named or fully unnamed;
/// in a named list, bare identifiers take the type of the next typed entry.
///
/// # Errors
///
/// Returns [`SignatureError::MissingType`] for trailing grouped names and
/// [`SignatureError::MixedNaming`] when an entry fits neither form.
///
/// # Examples
///
/// ```
/// use genclient_codegen::signature::parse_fields;
///
/// let fields = parse_fields("a, b int, opts ...Option").unwrap();
/// assert_eq!(fields.len(), 3);
/// assert_eq!(fields[0].ty, "int");
/// assert_eq!(fields[1].name.as_deref(), Some("b"));
/// assert!(fields[2].is_variadic());
/// ```
pub fn parse_fields(list: &str) -> Result<Vec<Field>, SignatureError> {
    let items: Vec<&str> = split_top_level(list)
        .into_iter()
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .collect();

    let split: Vec<(Option<&str>, &str)> = items.iter().copied().map(split_name).collect();

    if split.iter().all(|(name, _)| name.is_none()) {
        return Ok(items
            .iter()
            .map(|item| Field {
                name: None,
                ty: collapse_whitespace(item),
            })
            .collect());
    }

    let mut fields = Vec::with_capacity(items.len());
    let mut pending: Vec<&str> = Vec::new();

    for (item, (name, ty)) in items.iter().copied().zip(split) {
        if let Some(name) = name {
            let ty = collapse_whitespace(ty);
            for grouped in pending.drain(..) {
                fields.push(Field {
                    name: Some(grouped.to_string()),
                    ty: ty.clone(),
                });
            }
            fields.push(Field {
                name: Some(name.to_string()),
                ty,
            });
        } else if is_identifier(item) {
            pending.push(item);
        } else {
            return Err(SignatureError::MixedNaming(list.trim().to_string()));
        }
    }

    if !pending.is_empty() {
        return Err(SignatureError::MissingType(pending.join(", ")));
    }

    Ok(fields)
}

/// Splits `list` at commas that are not nested in brackets.
fn split_top_level(list: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0i32;
    let mut start = 0;

    for (idx, ch) in list.char_indices() {
        match ch {
            '(' | '[' | '{' => depth += 1,
            ')' | ']' | '}' => depth -= 1,
            ',' if depth == 0 => {
                parts.push(&list[start..idx]);
                start = idx + 1;
            }
            _ => {}
        }
    }
    parts.push(&list[start..]);

    parts
}

/// Splits `name Type` into its parts; returns `(None, item)` for a bare type.
fn split_name(item: &str) -> (Option<&str>, &str) {
    if let Some(pos) = item.find(char::is_whitespace) {
        let (head, tail) = item.split_at(pos);
        let tail = tail.trim_start();
        if is_identifier(head) && !tail.is_empty() {
            return (Some(head), tail);
        }
    }

    if let Some(pos) = item.find("...") {
        let head = item[..pos].trim_end();
        if is_identifier(head) {
            return (Some(head), &item[pos..]);
        }
    }

    (None, item)
}

fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_alphabetic() || first == '_')
        && chars.all(|c| c.is_alphanumeric() || c == '_')
        && !TYPE_KEYWORDS.contains(&text)
}
