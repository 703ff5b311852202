//! Structured decode into a tree of elements
//!
//! Same traversal and bounds checks as the renderer, but the result is data
//! instead of text. Group children hang off their group node, which makes
//! the tree directly serializable to JSON.

use pcf_types::{Element, Encoding, PcfHeader};
use serde::Serialize;

use crate::cursor::Cursor;
use crate::error::{DecodeError, DecodeResult};
use crate::parser::{parse_message_header, read_element};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    #[serde(flatten)]
    pub element: Element,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

impl Node {
    /// This node plus all descendants
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(Node::count).sum::<usize>()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageTree {
    pub header: PcfHeader,
    pub elements: Vec<Node>,
}

impl MessageTree {
    pub fn element_count(&self) -> usize {
        self.elements.iter().map(Node::count).sum()
    }
}

/// Decode `element_count` siblings and their subtrees
pub fn parse_tree(
    cursor: &mut Cursor<'_>,
    element_count: u32,
    max_depth: usize,
) -> DecodeResult<Vec<Node>> {
    parse_level(cursor, element_count, 0, max_depth)
}

fn parse_level(
    cursor: &mut Cursor<'_>,
    element_count: u32,
    depth: usize,
    max_depth: usize,
) -> DecodeResult<Vec<Node>> {
    // Counts are untrusted; grow as elements actually arrive
    let mut nodes = Vec::new();
    for _ in 0..element_count {
        let element = read_element(cursor)?;
        let children = match element.child_count() {
            0 => Vec::new(),
            count => {
                if depth >= max_depth {
                    return Err(DecodeError::nesting_too_deep(max_depth, element.offset));
                }
                parse_level(cursor, count, depth + 1, max_depth)?
            }
        };
        nodes.push(Node { element, children });
    }
    Ok(nodes)
}

/// Header plus element tree of a complete message
pub fn parse_message_tree(
    bytes: &[u8],
    encoding: Encoding,
    max_depth: usize,
) -> DecodeResult<MessageTree> {
    let mut cursor = Cursor::new(bytes, encoding);
    let header = parse_message_header(&mut cursor)?;
    let elements = parse_tree(&mut cursor, header.parameter_count, max_depth)?;
    Ok(MessageTree { header, elements })
}
