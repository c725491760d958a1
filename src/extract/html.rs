//! Code block extraction from rendered HTML
//!
//! Walks the html5ever DOM in document order and collects the text of every
//! `<code>` element that sits somewhere inside a `<pre>`.

use super::CodeBlock;
use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData, RcDom};

/// Parse an HTML document and return its code blocks in document order.
///
/// Ordinals start at 1. A `<code>` nested in an already collected `<code>`
/// contributes to its parent's text and is not reported on its own.
pub fn code_blocks(html: &str) -> Vec<CodeBlock> {
    let dom = parse_document(RcDom::default(), Default::default()).one(html);

    let mut blocks = Vec::new();
    let mut stack: Vec<(Handle, bool)> = vec![(dom.document.clone(), false)];

    while let Some((node, in_pre)) = stack.pop() {
        let mut child_in_pre = in_pre;

        if let NodeData::Element { ref name, .. } = node.data {
            match &*name.local {
                "pre" => child_in_pre = true,
                "code" if in_pre => {
                    let mut text = String::new();
                    text_content(&node, &mut text);
                    blocks.push(CodeBlock {
                        ordinal: blocks.len() + 1,
                        text,
                    });
                    continue;
                }
                _ => {}
            }
        }

        // Reverse so the first child is popped first
        for child in node.children.borrow().iter().rev() {
            stack.push((child.clone(), child_in_pre));
        }
    }

    blocks
}

fn text_content(node: &Handle, out: &mut String) {
    match node.data {
        NodeData::Text { ref contents } => out.push_str(&contents.borrow()),
        _ => {
            for child in node.children.borrow().iter() {
                text_content(child, out);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(html: &str) -> Vec<String> {
        code_blocks(html).into_iter().map(|b| b.text).collect()
    }

    #[test]
    fn test_collects_pre_code_in_document_order() {
        let html = r#"<html><body>
<h1>Chapter</h1>
<pre><code>// first
var x = 1;
</code></pre>
<p>Some prose with <code>inline</code> code.</p>
<pre><code>// second
var y = 2;
</code></pre>
</body></html>"#;

        let blocks = code_blocks(html);
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].ordinal, 1);
        assert_eq!(blocks[0].text, "// first\nvar x = 1;\n");
        assert_eq!(blocks[1].ordinal, 2);
        assert_eq!(blocks[1].text, "// second\nvar y = 2;\n");
    }

    #[test]
    fn test_ignores_code_outside_pre_and_pre_without_code() {
        let html = "<p><code>// inline only</code></p><pre>// no code tag</pre>";
        assert!(code_blocks(html).is_empty());
    }

    #[test]
    fn test_decodes_entities_and_joins_highlight_spans() {
        let html = r#"<pre class="highlight"><code><span class="c">// cmp</span>
<span class="k">if</span> (a &lt; b &amp;&amp; c &gt; d) {}</code></pre>"#;

        assert_eq!(texts(html), vec!["// cmp\nif (a < b && c > d) {}"]);
    }

    #[test]
    fn test_code_deeper_inside_pre() {
        let html = "<div><pre><div class=\"wrap\"><code>// nested label</code></div></pre></div>";
        assert_eq!(texts(html), vec!["// nested label"]);
    }

    #[test]
    fn test_nested_code_is_counted_once() {
        let html = "<pre><code>// outer <code>inner</code> tail</code></pre>";
        assert_eq!(texts(html), vec!["// outer inner tail"]);
    }

    #[test]
    fn test_no_pre_tags() {
        assert!(code_blocks("<html><body><p>nothing here</p></body></html>").is_empty());
        assert!(code_blocks("").is_empty());
    }
}
