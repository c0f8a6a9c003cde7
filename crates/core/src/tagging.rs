//! Per-character tagging with the rotating `char-N` classes.

use unicode_general_category::{GeneralCategory, get_general_category};

/// The rotating classes applied to alphanumeric characters, in order.
pub const CHAR_CLASSES: [&str; 5] = ["char-1", "char-2", "char-3", "char-4", "char-5"];

/// Longest entity reference (including `&` and `;`) recognised by
/// [`tag_characters_with`].
const MAX_ENTITY_LEN: usize = 32;

/// Wraps every alphanumeric character of `text` in a `char-N` span.
///
/// The class index starts at zero on every call and only advances on
/// alphanumeric characters; everything else is copied through as-is.
///
/// # Examples
///
/// ```
/// use scrawl_core::tag_characters;
///
/// assert_eq!(
///     tag_characters("a b"),
///     "<span class=\"char-1\">a</span> <span class=\"char-2\">b</span>"
/// );
/// assert_eq!(tag_characters("?!"), "?!");
/// ```
pub fn tag_characters(text: &str) -> String {
    tag_characters_with(text, false)
}

/// Same as [`tag_characters`], optionally copying entity references such as
/// `&amp;` or `&#x27;` through whole and uncounted.
pub fn tag_characters_with(text: &str, keep_entities: bool) -> String {
    let mut out = String::with_capacity(text.len() * 8);
    let mut index = 0usize;
    let mut skip_until = 0usize;

    for (pos, ch) in text.char_indices() {
        if pos < skip_until {
            continue;
        }

        if keep_entities
            && ch == '&'
            && let Some(len) = entity_len(&text[pos..])
        {
            out.push_str(&text[pos..pos + len]);
            skip_until = pos + len;
            continue;
        }

        if is_tagged_char(ch) {
            push_tagged(&mut out, ch, index);
            index += 1;
        } else {
            out.push(ch);
        }
    }

    out
}

/// Number of alphanumeric characters `tag_characters` would wrap.
pub fn tagged_count(text: &str) -> usize {
    text.chars().filter(|&c| is_tagged_char(c)).count()
}

/// Letters (`L*`) and numbers (`N*`) only. Combining marks such as vowel
/// signs stay attached to the preceding letter and are never counted.
pub fn is_tagged_char(ch: char) -> bool {
    matches!(
        get_general_category(ch),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
            | GeneralCategory::DecimalNumber
            | GeneralCategory::LetterNumber
            | GeneralCategory::OtherNumber
    )
}

fn push_tagged(out: &mut String, ch: char, index: usize) {
    out.push_str("<span class=\"");
    out.push_str(CHAR_CLASSES[index % CHAR_CLASSES.len()]);
    out.push_str("\">");
    out.push(ch);
    out.push_str("</span>");
}

/// Byte length of the entity reference at the start of `s`, if any.
///
/// Accepts `&name;`, `&#123;` and `&#x1F;`.
fn entity_len(s: &str) -> Option<usize> {
    let bytes = s.as_bytes();
    if bytes.first() != Some(&b'&') {
        return None;
    }

    let body_start = match *bytes.get(1)? {
        b'#' => match *bytes.get(2)? {
            b'x' | b'X' => 3,
            _ => 2,
        },
        b if b.is_ascii_alphabetic() => 1,
        _ => return None,
    };
    let numeric = body_start > 1;
    let hex = body_start == 3;

    for (offset, &b) in bytes.iter().enumerate().skip(body_start) {
        if offset >= MAX_ENTITY_LEN {
            return None;
        }
        if b == b';' {
            return (offset > body_start).then_some(offset + 1);
        }
        let valid = if hex {
            b.is_ascii_hexdigit()
        } else if numeric {
            b.is_ascii_digit()
        } else {
            b.is_ascii_alphanumeric()
        };
        if !valid {
            return None;
        }
    }
    None
}
