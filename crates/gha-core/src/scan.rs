//! Depth-counting scanner over raw JSON text.
//!
//! The GitHub events response is an array of objects whose interesting fields
//! sit at known places, so the engine never builds a parse tree. Instead it
//! tracks brace depth while walking the text and slices out spans. The same
//! depth counter drives [`split_objects`] (one span per top-level object) and
//! [`count_objects`] (how many elements an array of objects holds).
//!
//! Known limitation: braces inside string literals (a commit message
//! containing `{`, say) are counted like structural braces and can mis-split
//! pathological input. The extractors downstream were built against this
//! behavior, so it is documented here rather than patched over.

/// Split the text of a JSON array into the spans of its top-level objects,
/// in source order.
///
/// The enclosing `[` / `]` are optional and stripped if present. Each
/// returned slice runs from a `{` at depth zero to the `}` that closes it,
/// inclusive, so nested objects (`payload`, `repo`, …) never terminate a
/// span early.
///
/// Unbalanced input yields a truncated or empty sequence, never an error: a
/// span whose closing brace is missing is simply not emitted.
pub fn split_objects(json: &str) -> Vec<&str> {
    let body = json.trim();
    let body = body.strip_prefix('[').unwrap_or(body);
    let body = body.strip_suffix(']').unwrap_or(body);

    let mut objects = Vec::new();
    let mut depth: i32 = 0;
    let mut start: Option<usize> = None;

    for (i, c) in body.char_indices() {
        if c == '{' {
            if depth == 0 {
                start = Some(i);
            }
            depth += 1;
        } else if c == '}' {
            depth -= 1;
            if depth == 0 {
                if let Some(s) = start.take() {
                    objects.push(&body[s..=i]);
                }
            }
        }
    }

    objects
}

/// Count the top-level objects inside an array span (brackets included or
/// not), without parsing the elements.
///
/// Only `{` occurrences at a depth 0→1 transition are counted; the `[` / `]`
/// of the array itself do not participate in the depth. Used to count
/// commits in a push payload.
pub fn count_objects(block: &str) -> usize {
    let mut depth: i32 = 0;
    let mut count = 0;

    for c in block.chars() {
        if c == '{' {
            if depth == 0 {
                count += 1;
            }
            depth += 1;
        } else if c == '}' {
            depth -= 1;
        }
    }

    count
}
