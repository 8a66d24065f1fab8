//! Positional field extraction from a single record's text.
//!
//! Extraction is first-match, not a tree walk: the key's quoted form is
//! located anywhere in the span, then the value after the next `:` is sliced
//! out. A missing key or unlocatable value is `None` — callers substitute
//! their own defaults, nothing here is an error.
//!
//! Nested lookup is composition, not a primitive: to read `repo.name`, call
//! [`block`] for `repo` and then [`scalar`] for `name` on the result.

/// Extract the value of `key` as text: a quoted string (without its quotes,
/// no escape decoding) or a raw scalar token (number / boolean / null)
/// trimmed of whitespace.
///
/// Unquoted tokens run until the next `,`, `}`, or newline.
pub fn scalar<'a>(obj: &'a str, key: &str) -> Option<&'a str> {
    let at = value_start(obj, key)?;
    let rest = &obj[at..];

    if let Some(quoted) = rest.strip_prefix('"') {
        let end = quoted.find('"')?;
        Some(&quoted[..end])
    } else {
        let end = rest.find([',', '}', '\n']).unwrap_or(rest.len());
        Some(rest[..end].trim())
    }
}

/// Extract the raw text of the object or array value of `key`, delimiters
/// included.
///
/// The first non-whitespace character after the colon selects the delimiter
/// pair (`{`/`}` or `[`/`]`); the scan tracks the nesting depth of that pair
/// only. Returns `None` for a non-block value or an unbalanced span.
pub fn block<'a>(obj: &'a str, key: &str) -> Option<&'a str> {
    let at = value_start(obj, key)?;
    let rest = &obj[at..];

    let open = rest.chars().next()?;
    let close = match open {
        '{' => '}',
        '[' => ']',
        _ => return None,
    };

    let mut depth: i32 = 0;
    for (i, c) in rest.char_indices() {
        if c == open {
            depth += 1;
        } else if c == close {
            depth -= 1;
            if depth == 0 {
                return Some(&rest[..=i]);
            }
        }
    }

    None
}

/// Byte offset of the first non-whitespace character after `"key":`, or
/// `None` if the key or its colon cannot be located.
fn value_start(obj: &str, key: &str) -> Option<usize> {
    let needle = format!("\"{key}\"");
    let key_at = obj.find(&needle)?;
    let after_key = key_at + needle.len();
    let colon = after_key + obj[after_key..].find(':')?;

    let value = &obj[colon + 1..];
    let offset = value.len() - value.trim_start().len();
    let at = colon + 1 + offset;
    (at < obj.len()).then_some(at)
}
