//! Generic nested mapping for decoded vendor XML

/// One decoded XML element: attributes, text content, child elements.
///
/// Children keep document order and may repeat names (`row`, `FL`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlNode {
    pub attributes: Vec<(String, String)>,
    pub text: Option<String>,
    pub children: Vec<(String, XmlNode)>,
}

impl XmlNode {
    /// First child with the given element name.
    pub fn child(&self, name: &str) -> Option<&XmlNode> {
        self.children
            .iter()
            .find(|(child_name, _)| child_name == name)
            .map(|(_, node)| node)
    }

    /// All children with the given element name, in document order.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a XmlNode> {
        self.children
            .iter()
            .filter(move |(child_name, _)| child_name == name)
            .map(|(_, node)| node)
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(attr_name, _)| attr_name == name)
            .map(|(_, value)| value.as_str())
    }

    /// Text content of the first child with the given name.
    pub fn child_text(&self, name: &str) -> Option<&str> {
        self.child(name).and_then(|node| node.text.as_deref())
    }
}
