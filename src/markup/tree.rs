// Helpers over the html5ever rcdom tree.
//
// Nodes are rewritten while the normalizer walks them, so everything here works
// on single nodes and keeps parent links in sync by hand.

use std::{cell::RefCell, rc::Rc};

use html5ever::{
    ns, parse_document, serialize,
    serialize::{SerializeOpts, TraversalScope},
    tendril::{StrTendril, TendrilSink},
    Attribute, LocalName, QualName,
};
use markup5ever_rcdom::{Handle, Node, NodeData, RcDom, SerializableHandle};

pub fn parse_html(html: &str) -> RcDom {
    parse_document(RcDom::default(), Default::default()).one(html)
}

pub fn element_children(node: &Handle, name: &str) -> Vec<Handle> {
    node.children
        .borrow()
        .iter()
        .filter(|c| tag_name(c) == Some(name))
        .cloned()
        .collect()
}

pub fn body(dom: &RcDom) -> Option<Handle> {
    let html = element_children(&dom.document, "html").into_iter().next()?;
    element_children(&html, "body").into_iter().next()
}

/// `html/body/div/p`, in document order.
pub fn paragraphs(dom: &RcDom) -> Vec<Handle> {
    let Some(body) = body(dom) else {
        return Vec::new();
    };

    element_children(&body, "div")
        .iter()
        .flat_map(|div| element_children(div, "p"))
        .collect()
}

/// Element tag, or a pseudo name for the other node kinds.
pub fn node_name(node: &Handle) -> &str {
    match &node.data {
        NodeData::Element { name, .. } => &*name.local,
        NodeData::Text { .. } => "#text",
        NodeData::Comment { .. } => "#comment",
        NodeData::Document => "#document",
        NodeData::Doctype { .. } => "#doctype",
        NodeData::ProcessingInstruction { .. } => "#pi",
    }
}

pub fn tag_name(node: &Handle) -> Option<&str> {
    match &node.data {
        NodeData::Element { name, .. } => Some(&*name.local),
        _ => None,
    }
}

pub fn is_text(node: &Handle) -> bool {
    matches!(node.data, NodeData::Text { .. })
}

pub fn text(node: &Handle) -> Option<String> {
    match &node.data {
        NodeData::Text { contents } => Some(contents.borrow().to_string()),
        _ => None,
    }
}

pub fn set_text(node: &Handle, value: &str) {
    if let NodeData::Text { contents } = &node.data {
        *contents.borrow_mut() = StrTendril::from_slice(value);
    }
}

pub fn attribute(node: &Handle, name: &str) -> Option<String> {
    match &node.data {
        NodeData::Element { attrs, .. } => attrs
            .borrow()
            .iter()
            .find(|a| &*a.name.local == name)
            .map(|a| a.value.to_string()),
        _ => None,
    }
}

pub fn set_attribute(node: &Handle, name: &str, value: &str) {
    if let NodeData::Element { attrs, .. } = &node.data {
        let mut attrs = attrs.borrow_mut();
        match attrs.iter_mut().find(|a| &*a.name.local == name) {
            Some(attr) => attr.value = StrTendril::from_slice(value),
            None => attrs.push(Attribute {
                name: QualName::new(None, ns!(), LocalName::from(name)),
                value: StrTendril::from_slice(value),
            }),
        }
    }
}

pub fn remove_attribute(node: &Handle, name: &str) {
    if let NodeData::Element { attrs, .. } = &node.data {
        attrs.borrow_mut().retain(|a| &*a.name.local != name);
    }
}

pub fn attribute_names(node: &Handle) -> Vec<String> {
    match &node.data {
        NodeData::Element { attrs, .. } => {
            attrs.borrow().iter().map(|a| a.name.local.to_string()).collect()
        }
        _ => Vec::new(),
    }
}

pub fn has_attributes(node: &Handle) -> bool {
    match &node.data {
        NodeData::Element { attrs, .. } => !attrs.borrow().is_empty(),
        _ => false,
    }
}

pub fn create_element(tag: &str, attrs: Vec<Attribute>) -> Handle {
    Node::new(NodeData::Element {
        name: QualName::new(None, ns!(html), LocalName::from(tag)),
        attrs: RefCell::new(attrs),
        template_contents: Default::default(),
        mathml_annotation_xml_integration_point: false,
    })
}

pub fn create_text(value: &str) -> Handle {
    Node::new(NodeData::Text {
        contents: RefCell::new(StrTendril::from_slice(value)),
    })
}

pub fn parent(node: &Handle) -> Option<Handle> {
    let weak = node.parent.take()?;
    let parent = weak.upgrade();
    node.parent.set(Some(weak));
    parent
}

fn set_parent(node: &Handle, parent: &Handle) {
    node.parent.set(Some(Rc::downgrade(parent)));
}

pub fn first_child(node: &Handle) -> Option<Handle> {
    node.children.borrow().first().cloned()
}

fn index_in_parent(node: &Handle) -> Option<(Handle, usize)> {
    let parent = parent(node)?;
    let index = parent
        .children
        .borrow()
        .iter()
        .position(|c| Rc::ptr_eq(c, node))?;
    Some((parent, index))
}

pub fn next_sibling(node: &Handle) -> Option<Handle> {
    let (parent, index) = index_in_parent(node)?;
    let sibling = parent.children.borrow().get(index + 1).cloned();
    sibling
}

pub fn append_child(parent: &Handle, child: Handle) {
    set_parent(&child, parent);
    parent.children.borrow_mut().push(child);
}

/// Pre-order successor of `node` inside `root`: first child, else next
/// sibling, else the next sibling of the nearest ancestor that has one.
pub fn next_in_preorder(root: &Handle, node: &Handle) -> Option<Handle> {
    if let Some(child) = first_child(node) {
        return Some(child);
    }

    let mut node = node.clone();
    loop {
        if let Some(sibling) = next_sibling(&node) {
            return Some(sibling);
        }
        let parent = parent(&node)?;
        if Rc::ptr_eq(&parent, root) {
            return None;
        }
        node = parent;
    }
}

/// Removes `node` and moves its children into its place.
///
/// Returns the first moved child, which becomes the walk's cursor. A childless
/// node is replaced by an empty text node so the walk has somewhere to go.
pub fn promote_children(node: &Handle) -> Option<Handle> {
    if node.children.borrow().is_empty() {
        append_child(node, create_text(""));
    }

    let (parent, index) = index_in_parent(node)?;
    let children = node.children.take();
    node.parent.set(None);

    for child in &children {
        set_parent(child, &parent);
    }
    let first = children.first().cloned();

    let mut siblings = parent.children.borrow_mut();
    siblings.remove(index);
    for (offset, child) in children.into_iter().enumerate() {
        siblings.insert(index + offset, child);
    }

    first
}

/// Replaces element `node` with a `tag` element owning its attributes and
/// children.
pub fn retag(node: &Handle, tag: &str) -> Option<Handle> {
    let (parent, index) = index_in_parent(node)?;
    let attrs = match &node.data {
        NodeData::Element { attrs, .. } => attrs.take(),
        _ => return None,
    };

    let replacement = create_element(tag, attrs);
    for child in node.children.take() {
        append_child(&replacement, child);
    }

    node.parent.set(None);
    set_parent(&replacement, &parent);
    parent.children.borrow_mut()[index] = replacement.clone();

    Some(replacement)
}

pub fn inner_html(node: &Handle) -> std::io::Result<String> {
    let mut out = Vec::new();
    let opts = SerializeOpts {
        traversal_scope: TraversalScope::ChildrenOnly(None),
        ..Default::default()
    };
    serialize(&mut out, &SerializableHandle::from(node.clone()), opts)?;

    String::from_utf8(out).map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
}

/// Concatenated text content, for error messages.
pub fn text_content(node: &Handle) -> String {
    let mut out = String::new();
    let mut stack = vec![node.clone()];
    while let Some(node) = stack.pop() {
        if let NodeData::Text { contents } = &node.data {
            out.push_str(&contents.borrow());
        }
        stack.extend(node.children.borrow().iter().rev().cloned());
    }
    out
}
