//! Literal escaping for HTML output

use super::config::EscapePolicy;

/// Where a literal lands in the output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscapeContext {
    Text,
    AttributeValue,
}

/// Append `text` to `out`, escaped for `context` under `policy`
pub fn push_escaped(out: &mut String, text: &str, policy: EscapePolicy, context: EscapeContext) {
    if policy == EscapePolicy::None {
        out.push_str(text);
        return;
    }

    for c in text.chars() {
        match (c, context) {
            ('&', _) => out.push_str("&amp;"),
            ('<', _) => out.push_str("&lt;"),
            ('>', _) => out.push_str("&gt;"),
            ('"', EscapeContext::AttributeValue) => out.push_str("&quot;"),
            ('\'', EscapeContext::AttributeValue) => out.push_str("&#39;"),
            (c, _) => out.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn escaped(text: &str, policy: EscapePolicy, context: EscapeContext) -> String {
        let mut out = String::new();
        push_escaped(&mut out, text, policy, context);
        out
    }

    #[test]
    fn test_text_keeps_quotes() {
        assert_eq!(
            escaped(r#"a < b & "c""#, EscapePolicy::Html, EscapeContext::Text),
            r#"a &lt; b &amp; "c""#
        );
    }

    #[test]
    fn test_attribute_escapes_quotes() {
        assert_eq!(
            escaped(r#"x" onclick='y'"#, EscapePolicy::Html, EscapeContext::AttributeValue),
            "x&quot; onclick=&#39;y&#39;"
        );
    }

    #[test]
    fn test_none_policy_is_verbatim() {
        assert_eq!(
            escaped("<b>", EscapePolicy::None, EscapeContext::Text),
            "<b>"
        );
    }
}
