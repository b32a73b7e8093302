// src/core/html.rs
//! Naive, case-insensitive HTML scanning. Enough for Last.fm tracklists:
//! no nesting awareness beyond "first matching close tag".

pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_ascii() { c.to_ascii_lowercase() } else { c })
        .collect()
}

/// HTML between the end of the first `open_pat` tag and the next `close_pat`.
pub fn slice_between_ci<'a>(s: &'a str, open_pat: &str, close_pat: &str) -> Option<&'a str> {
    let lc = to_lower(s);
    let open = to_lower(open_pat);
    let close = to_lower(close_pat);
    let o = lc.find(&open)?;
    let after = s[o..].find('>')? + o + 1;
    let cr = lc[after..].find(&close)?;
    Some(&s[after..after + cr])
}

/// Next `<tag …>…</tag>` block at or after `from`, as byte offsets.
/// The open pattern must be followed by whitespace or `>` so `<t` never
/// matches `<tbody>` when looking for `<td`.
pub fn next_tag_block_ci(s: &str, o: &str, c: &str, from: usize) -> Option<(usize, usize)> {
    let lc = to_lower(s);
    let ol = to_lower(o);
    let cl = to_lower(c);
    let start = find_tag_start(&lc, &ol, from)?;
    let open_end = s[start..].find('>')? + start + 1;
    let end_rel = lc[open_end..].find(&cl)?;
    let end = open_end + end_rel + c.len();
    Some((start, end))
}

fn find_tag_start(lc: &str, open_lc: &str, from: usize) -> Option<usize> {
    let mut pos = from;
    loop {
        let at = lc.get(pos..)?.find(open_lc)? + pos;
        let next = lc[at + open_lc.len()..].chars().next();
        match next {
            Some(ch) if ch.is_ascii_whitespace() || ch == '>' || ch == '/' => return Some(at),
            None => return None,
            _ => pos = at + open_lc.len(),
        }
    }
}

/// The opening tag (`<td class="x">`) of a block.
pub fn open_tag(block: &str) -> &str {
    match block.find('>') {
        Some(i) => &block[..=i],
        None => block,
    }
}

pub fn inner_after_open_tag(block: &str) -> String {
    if let Some(oe) = block.find('>') {
        if let Some(cs) = block.rfind('<') {
            if cs > oe {
                return block[oe + 1..cs].to_string();
            }
        }
    }
    s!()
}

/// Value of attribute `name` in an opening tag. Quoted or bare values.
pub fn attr_value(tag: &str, name: &str) -> Option<String> {
    let lc = to_lower(tag);
    let needle = join!(&to_lower(name), "=");
    let mut from = 0usize;

    let at = loop {
        let i = lc.get(from..)?.find(&needle)? + from;
        let boundary = lc[..i].chars().last().map(|c| c.is_ascii_whitespace()).unwrap_or(false);
        if boundary { break i + needle.len(); }
        from = i + needle.len();
    };

    let rest = &tag[at..];
    match rest.chars().next()? {
        q @ ('"' | '\'') => {
            let body = &rest[1..];
            let end = body.find(q)?;
            Some(body[..end].to_string())
        }
        _ => {
            let end = rest
                .find(|c: char| c.is_ascii_whitespace() || c == '>')
                .unwrap_or(rest.len());
            Some(rest[..end].trim_end_matches('/').to_string())
        }
    }
}

/// Whitespace-separated class list of an opening tag.
pub fn classes(tag: &str) -> Vec<String> {
    attr_value(tag, "class")
        .map(|v| v.split_whitespace().map(|c| s!(c)).collect())
        .unwrap_or_default()
}

pub fn has_class(tag: &str, class: &str) -> bool {
    classes(tag).iter().any(|c| c == class)
}

/// Byte offset of the first `<tag …>` at or after `from` whose opening tag
/// satisfies `pred`.
pub fn find_open_tag_ci<P>(s: &str, tag: &str, from: usize, pred: P) -> Option<usize>
where
    P: Fn(&str) -> bool,
{
    let lc = to_lower(s);
    let ol = join!("<", &to_lower(tag));
    let mut pos = from;
    while let Some(at) = find_tag_start(&lc, &ol, pos) {
        let end = s[at..].find('>').map(|e| at + e + 1)?;
        if pred(&s[at..end]) {
            return Some(at);
        }
        pos = end;
    }
    None
}

/// Byte offset of the first opening tag, of any name, whose `id` is `id`.
pub fn find_id(s: &str, id: &str) -> Option<usize> {
    let mut pos = 0usize;
    while let Some(rel) = s.get(pos..)?.find('<') {
        let at = pos + rel;
        let end = s[at..].find('>').map(|e| at + e + 1)?;
        let tag = &s[at..end];
        let named = tag[1..].chars().next().map(|c| c.is_ascii_alphabetic()).unwrap_or(false);
        if named && attr_value(tag, "id").as_deref() == Some(id) {
            return Some(at);
        }
        pos = at + 1;
    }
    None
}

/// Remove tags, decode the common entities and collapse whitespace.
pub fn text_of<S: AsRef<str>>(s: S) -> String {
    use super::sanitize::{normalize_entities, normalize_ws};
    normalize_ws(&normalize_entities(&strip_tags(s)))
}

pub fn strip_tags<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref();

    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;

    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    super::sanitize::normalize_ws(&out)
}
