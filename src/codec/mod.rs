pub mod node;
pub mod xml;

pub use node::XmlNode;
pub use xml::{decode, encode};
