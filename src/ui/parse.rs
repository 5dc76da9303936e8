//! Reads HTML documents back into element trees.
//!
//! Covers the markup the renderer emits: doctype and comments (skipped),
//! void elements, quoted, unquoted and boolean attributes, raw text in
//! `script`/`style`, and character references. Close tags must match the
//! innermost open element; elements still open at the end are closed.
//!
//! Rendering and reading back yields the same tree as long as no element has
//! two adjacent text children: those serialize as one run of text and come
//! back as a single node.

use thiserror::Error;

use super::node::{is_raw_text, is_void, Element, Node};

/// HTML reading failures, with byte offsets into the input
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("unexpected end of input in markup starting at byte {0}")]
    UnexpectedEof(usize),

    #[error("unexpected closing tag </{tag}> at byte {offset}")]
    UnexpectedClose { tag: String, offset: usize },

    #[error("malformed tag at byte {0}")]
    MalformedTag(usize),
}

/// Parse an HTML document or fragment into its root nodes
pub fn parse(html: &str) -> Result<Vec<Node>, ParseError> {
    Parser {
        src: html,
        pos: 0,
        stack: Vec::new(),
        roots: Vec::new(),
    }
    .run()
}

struct Parser<'a> {
    src: &'a str,
    pos: usize,
    stack: Vec<Element>,
    roots: Vec<Node>,
}

impl<'a> Parser<'a> {
    fn run(mut self) -> Result<Vec<Node>, ParseError> {
        while self.pos < self.src.len() {
            let rest = self.rest();
            if rest.starts_with("<!--") {
                let end = rest.find("-->").ok_or(ParseError::UnexpectedEof(self.pos))?;
                self.pos += end + 3;
            } else if rest.starts_with("<!") || rest.starts_with("<?") {
                let end = rest.find('>').ok_or(ParseError::UnexpectedEof(self.pos))?;
                self.pos += end + 1;
            } else if rest.starts_with("</") {
                self.close_tag()?;
            } else if starts_tag(rest) {
                self.open_tag()?;
            } else {
                self.text();
            }
        }

        while let Some(element) = self.stack.pop() {
            self.append(Node::Element(element));
        }
        Ok(self.roots)
    }

    fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    fn append(&mut self, node: Node) {
        match self.stack.last_mut() {
            Some(parent) => parent.push_child(node),
            None => self.roots.push(node),
        }
    }

    fn text(&mut self) {
        let rest = self.rest();
        let end = rest
            .char_indices()
            .skip(1)
            .find(|&(_, c)| c == '<')
            .map_or(rest.len(), |(i, _)| i);
        self.pos += end;
        let text = &rest[..end];
        // whitespace between top-level nodes, such as after the doctype
        if self.stack.is_empty() && text.trim().is_empty() {
            return;
        }
        self.append(Node::Text(decode_entities(text)));
    }

    fn skip_whitespace(&mut self) {
        let rest = self.rest();
        self.pos += rest.len() - rest.trim_start().len();
    }

    /// Consume characters up to whitespace or any of `stops`
    fn take_until(&mut self, stops: &[char]) -> &'a str {
        let rest = self.rest();
        let end = rest
            .find(|c: char| c.is_whitespace() || stops.contains(&c))
            .unwrap_or(rest.len());
        self.pos += end;
        &rest[..end]
    }

    fn open_tag(&mut self) -> Result<(), ParseError> {
        let start = self.pos;
        self.pos += 1;
        let mut element = Element::new(self.take_until(&['/', '>']));
        let mut self_closing = false;

        loop {
            self.skip_whitespace();
            let rest = self.rest();
            if rest.is_empty() {
                return Err(ParseError::UnexpectedEof(start));
            }
            if rest.starts_with("/>") {
                self.pos += 2;
                self_closing = true;
                break;
            }
            if rest.starts_with('>') {
                self.pos += 1;
                break;
            }

            let name = self.take_until(&['=', '>', '/']);
            if name.is_empty() {
                if self.rest().starts_with('/') {
                    // stray slash inside the tag
                    self.pos += 1;
                    continue;
                }
                return Err(ParseError::MalformedTag(start));
            }
            self.skip_whitespace();
            let value = if self.rest().starts_with('=') {
                self.pos += 1;
                self.skip_whitespace();
                self.attr_value(start)?
            } else {
                String::new()
            };
            element.set_attr(name, value);
        }

        let tag = element.tag().to_string();
        if self_closing || is_void(&tag) {
            self.append(Node::Element(element));
            return Ok(());
        }

        if is_raw_text(&tag) {
            let rest = self.rest();
            let end = rest
                .find(&format!("</{tag}"))
                .ok_or(ParseError::UnexpectedEof(start))?;
            if end > 0 {
                element.push_child(Node::Text(rest[..end].to_string()));
            }
            self.pos += end;
        }

        self.stack.push(element);
        Ok(())
    }

    fn attr_value(&mut self, start: usize) -> Result<String, ParseError> {
        let rest = self.rest();
        match rest.chars().next() {
            Some(quote @ ('"' | '\'')) => {
                let end = rest[1..]
                    .find(quote)
                    .ok_or(ParseError::UnexpectedEof(start))?;
                self.pos += end + 2;
                Ok(decode_entities(&rest[1..end + 1]))
            }
            Some(_) => Ok(decode_entities(self.take_until(&['>']))),
            None => Err(ParseError::UnexpectedEof(start)),
        }
    }

    fn close_tag(&mut self) -> Result<(), ParseError> {
        let start = self.pos;
        self.pos += 2;
        let tag = self.take_until(&['>']).to_ascii_lowercase();
        let rest = self.rest();
        let end = rest.find('>').ok_or(ParseError::UnexpectedEof(start))?;
        self.pos += end + 1;

        match self.stack.pop() {
            Some(element) if element.tag() == tag => {
                self.append(Node::Element(element));
                Ok(())
            }
            _ => Err(ParseError::UnexpectedClose { tag, offset: start }),
        }
    }
}

fn starts_tag(rest: &str) -> bool {
    let mut chars = rest.chars();
    chars.next() == Some('<') && chars.next().is_some_and(|c| c.is_ascii_alphabetic())
}

/// Replace character references with the characters they stand for.
///
/// Unknown or unterminated references are kept as written.
pub fn decode_entities(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let tail = &rest[amp..];
        let decoded = tail
            .find(';')
            .filter(|&semi| semi <= 10)
            .and_then(|semi| decode_entity(&tail[1..semi]).map(|c| (c, semi)));
        match decoded {
            Some((c, semi)) => {
                out.push(c);
                rest = &tail[semi + 1..];
            }
            None => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

fn decode_entity(name: &str) -> Option<char> {
    match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some('\u{a0}'),
        _ => {
            let number = name.strip_prefix('#')?;
            let code = match number.strip_prefix(|c: char| c == 'x' || c == 'X') {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => number.parse().ok()?,
            };
            char::from_u32(code)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::node::render_document;

    #[test]
    fn test_parses_rendered_tree() {
        let root = Element::new("html").child(
            Element::new("body")
                .child(
                    Element::new("a")
                        .attr("href", "/login?next=a&b")
                        .attr("title", "\"quoted\"")
                        .text("Travel & Tour <3"),
                )
                .child(Element::new("input").attr("type", "email").flag("required"))
                .child(Element::new("p").text("after")),
        );
        let nodes = parse(&render_document(&root)).unwrap();
        assert_eq!(nodes, vec![Node::Element(root)]);
    }

    #[test]
    fn test_skips_comments_and_doctype() {
        let nodes = parse("<!DOCTYPE html><!-- note --><p>x</p>").unwrap();
        assert_eq!(nodes, vec![Node::Element(Element::new("p").text("x"))]);
    }

    #[test]
    fn test_unquoted_and_single_quoted_values() {
        let nodes = parse("<div data-a=one data-b='two words' hidden></div>").unwrap();
        let el = nodes[0].as_element().unwrap();
        assert_eq!(el.get_attr("data-a"), Some("one"));
        assert_eq!(el.get_attr("data-b"), Some("two words"));
        assert_eq!(el.get_attr("hidden"), Some(""));
    }

    #[test]
    fn test_raw_text_elements() {
        let nodes = parse("<style>a > b { color: red; }</style><br/>").unwrap();
        assert_eq!(nodes[0].text_content(), "a > b { color: red; }");
        assert_eq!(nodes[1].as_element().map(Element::tag), Some("br"));
    }

    #[test]
    fn test_mismatched_close_is_error() {
        let err = parse("<div><span></div>").unwrap_err();
        assert_eq!(
            err,
            ParseError::UnexpectedClose {
                tag: "div".to_string(),
                offset: 11
            }
        );
    }

    #[test]
    fn test_unterminated_tag_is_error() {
        assert_eq!(parse("<div class=\"x"), Err(ParseError::UnexpectedEof(0)));
    }

    #[test]
    fn test_decode_entities() {
        assert_eq!(decode_entities("a &amp; b &lt;c&gt; &#39;d&#x27;"), "a & b <c> 'd'");
        assert_eq!(decode_entities("AT&T &unknown; &"), "AT&T &unknown; &");
        assert_eq!(decode_entities("&quot;&nbsp;"), "\"\u{a0}");
    }
}
