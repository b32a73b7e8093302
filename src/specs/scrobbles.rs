// src/specs/scrobbles.rs
//! Total scrobble count from a track page: the `<b>` inside the element
//! classed `scrobbles`, e.g. `<li class="scrobbles"><b>1,234,567</b> plays</li>`.

use std::error::Error;

use crate::core::html::{find_open_tag_ci, has_class, inner_after_open_tag, next_tag_block_ci, text_of};
use crate::core::net;

/// Fetch `link` and read its scrobble count text.
pub fn fetch(link: &str) -> Result<String, Box<dyn Error>> {
    let path = net::request_path(link);
    let doc = net::http_get(&path)?;
    extract(&doc).ok_or_else(|| format!("no scrobble count on {}", path).into())
}

pub fn extract(doc: &str) -> Option<String> {
    let at = scrobbles_element(doc)?;
    let (s, e) = next_tag_block_ci(doc, "<b", "</b>", at)?;
    let text = text_of(inner_after_open_tag(&doc[s..e]));
    if text.is_empty() { None } else { Some(text) }
}

/// Offset of the first element of any common tag carrying class `scrobbles`.
fn scrobbles_element(doc: &str) -> Option<usize> {
    ["li", "div", "span", "p", "dd", "td"]
        .iter()
        .filter_map(|tag| find_open_tag_ci(doc, tag, 0, |t| has_class(t, "scrobbles")))
        .min()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_bold_count_inside_scrobbles() {
        let doc = r#"<ul><li class="listeners"><b>9,999</b></li>
                     <li class="scrobbles"><b>1,234,567</b> plays</li></ul>"#;
        assert_eq!(extract(doc).as_deref(), Some("1,234,567"));
    }

    #[test]
    fn ignores_bold_before_the_element() {
        let doc = r#"<b>nav</b><div class="stats scrobbles"><span>Scrobbles</span> <b> 42 </b></div>"#;
        assert_eq!(extract(doc).as_deref(), Some("42"));
    }

    #[test]
    fn missing_element_is_none() {
        assert_eq!(extract("<div class=\"listeners\"><b>5</b></div>"), None);
        assert_eq!(extract("<div class=\"scrobbles\"></div>"), None);
    }
}
