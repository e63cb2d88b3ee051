//! The data model for one discovered point of difference.
//!
//! A [`Comparison`] is built by the traversal engine each time it finds a
//! structural mismatch between the control and the test tree. It carries the
//! category of the mismatch ([`ComparisonType`]) and the control-side and
//! test-side [`Detail`]s. Evaluators read comparisons, never mutate them.

use std::fmt;
use std::str::FromStr;

/// Category of the property being compared.
///
/// The traversal engine may grow new categories over time, so this enum is
/// `#[non_exhaustive]`; evaluators must pass kinds they do not recognize
/// through unchanged rather than treating them as an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum ComparisonType {
    /// Declared document version (prolog).
    XmlVersion,
    /// Standalone flag in the prolog.
    XmlStandalone,
    /// Declared character encoding.
    XmlEncoding,
    /// One document has a doctype declaration, the other does not.
    HasDoctypeDeclaration,
    /// Name given in the doctype declaration.
    DoctypeName,
    /// Public identifier of the doctype.
    DoctypePublicId,
    /// System identifier of the doctype.
    DoctypeSystemId,
    /// `schemaLocation` attribute.
    SchemaLocation,
    /// `noNamespaceSchemaLocation` attribute.
    NoNamespaceSchemaLocation,
    /// Kind of the node itself (element vs. text vs. comment, ...).
    NodeType,
    /// Prefix bound to a namespace.
    NamespacePrefix,
    /// Namespace URI of a node.
    NamespaceUri,
    /// Character content of a text-like node.
    TextValue,
    /// Target of a processing instruction.
    ProcessingInstructionTarget,
    /// Data of a processing instruction.
    ProcessingInstructionData,
    /// Tag name of an element.
    ElementTagName,
    /// Number of attributes carried by an element.
    ElementNumAttributes,
    /// Value of an attribute.
    AttrValue,
    /// An attribute present on one side could not be found on the other.
    AttrNameLookup,
    /// Whether an attribute value was explicitly specified or defaulted.
    AttrValueExplicitlySpecified,
    /// Number of children in a child node list.
    ChildNodelistLength,
    /// Position of a child within its sibling list.
    ChildNodelistSequence,
    /// A child present on one side could not be found on the other.
    ChildLookup,
}

impl ComparisonType {
    fn name(self) -> &'static str {
        match self {
            ComparisonType::XmlVersion => "XML_VERSION",
            ComparisonType::XmlStandalone => "XML_STANDALONE",
            ComparisonType::XmlEncoding => "XML_ENCODING",
            ComparisonType::HasDoctypeDeclaration => "HAS_DOCTYPE_DECLARATION",
            ComparisonType::DoctypeName => "DOCTYPE_NAME",
            ComparisonType::DoctypePublicId => "DOCTYPE_PUBLIC_ID",
            ComparisonType::DoctypeSystemId => "DOCTYPE_SYSTEM_ID",
            ComparisonType::SchemaLocation => "SCHEMA_LOCATION",
            ComparisonType::NoNamespaceSchemaLocation => "NO_NAMESPACE_SCHEMA_LOCATION",
            ComparisonType::NodeType => "NODE_TYPE",
            ComparisonType::NamespacePrefix => "NAMESPACE_PREFIX",
            ComparisonType::NamespaceUri => "NAMESPACE_URI",
            ComparisonType::TextValue => "TEXT_VALUE",
            ComparisonType::ProcessingInstructionTarget => "PROCESSING_INSTRUCTION_TARGET",
            ComparisonType::ProcessingInstructionData => "PROCESSING_INSTRUCTION_DATA",
            ComparisonType::ElementTagName => "ELEMENT_TAG_NAME",
            ComparisonType::ElementNumAttributes => "ELEMENT_NUM_ATTRIBUTES",
            ComparisonType::AttrValue => "ATTR_VALUE",
            ComparisonType::AttrNameLookup => "ATTR_NAME_LOOKUP",
            ComparisonType::AttrValueExplicitlySpecified => "ATTR_VALUE_EXPLICITLY_SPECIFIED",
            ComparisonType::ChildNodelistLength => "CHILD_NODELIST_LENGTH",
            ComparisonType::ChildNodelistSequence => "CHILD_NODELIST_SEQUENCE",
            ComparisonType::ChildLookup => "CHILD_LOOKUP",
        }
    }
}

impl fmt::Display for ComparisonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned by [`ComparisonType::from_str`] for a name no known category uses.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown comparison type `{0}`")]
pub struct UnknownComparisonType(pub String);

impl FromStr for ComparisonType {
    type Err = UnknownComparisonType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "XML_VERSION" => ComparisonType::XmlVersion,
            "XML_STANDALONE" => ComparisonType::XmlStandalone,
            "XML_ENCODING" => ComparisonType::XmlEncoding,
            "HAS_DOCTYPE_DECLARATION" => ComparisonType::HasDoctypeDeclaration,
            "DOCTYPE_NAME" => ComparisonType::DoctypeName,
            "DOCTYPE_PUBLIC_ID" => ComparisonType::DoctypePublicId,
            "DOCTYPE_SYSTEM_ID" => ComparisonType::DoctypeSystemId,
            "SCHEMA_LOCATION" => ComparisonType::SchemaLocation,
            "NO_NAMESPACE_SCHEMA_LOCATION" => ComparisonType::NoNamespaceSchemaLocation,
            "NODE_TYPE" => ComparisonType::NodeType,
            "NAMESPACE_PREFIX" => ComparisonType::NamespacePrefix,
            "NAMESPACE_URI" => ComparisonType::NamespaceUri,
            "TEXT_VALUE" => ComparisonType::TextValue,
            "PROCESSING_INSTRUCTION_TARGET" => ComparisonType::ProcessingInstructionTarget,
            "PROCESSING_INSTRUCTION_DATA" => ComparisonType::ProcessingInstructionData,
            "ELEMENT_TAG_NAME" => ComparisonType::ElementTagName,
            "ELEMENT_NUM_ATTRIBUTES" => ComparisonType::ElementNumAttributes,
            "ATTR_VALUE" => ComparisonType::AttrValue,
            "ATTR_NAME_LOOKUP" => ComparisonType::AttrNameLookup,
            "ATTR_VALUE_EXPLICITLY_SPECIFIED" => ComparisonType::AttrValueExplicitlySpecified,
            "CHILD_NODELIST_LENGTH" => ComparisonType::ChildNodelistLength,
            "CHILD_NODELIST_SEQUENCE" => ComparisonType::ChildNodelistSequence,
            "CHILD_LOOKUP" => ComparisonType::ChildLookup,
            other => return Err(UnknownComparisonType(other.to_string())),
        })
    }
}

/// Kind of a tree node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeKind {
    Element,
    Attribute,
    Text,
    CdataSection,
    EntityReference,
    Entity,
    ProcessingInstruction,
    Comment,
    Document,
    DocumentType,
    DocumentFragment,
    Notation,
}

/// Payload of a [`Detail`].
///
/// The concrete shape depends on the [`ComparisonType`]: a [`NodeKind`] for
/// `NodeType`, a string for system identifiers, a count for list lengths, and
/// so on. Evaluators treat it as opaque unless their rule requires otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Value {
    /// The property is absent on this side.
    Absent,
    Bool(bool),
    Int(i64),
    Text(String),
    NodeKind(NodeKind),
}

impl Value {
    /// The payload as a node kind, if it is one.
    pub fn as_node_kind(&self) -> Option<NodeKind> {
        match self {
            Value::NodeKind(kind) => Some(*kind),
            _ => None,
        }
    }

    /// The payload as a string slice, if it is text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<NodeKind> for Value {
    fn from(value: NodeKind) -> Self {
        Value::NodeKind(value)
    }
}

/// One side of a comparison: where the compared node or attribute lives, and
/// what was found there.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Detail {
    /// Opaque locator of the compared node or attribute, typically an
    /// XPath-like path. `None` when the node has no counterpart location.
    pub locator: Option<String>,
    /// What was found at the locator.
    pub value: Value,
}

impl Detail {
    /// A detail with no locator.
    pub fn new(value: impl Into<Value>) -> Self {
        Detail {
            locator: None,
            value: value.into(),
        }
    }

    /// A detail anchored at a locator path.
    pub fn at(locator: impl Into<String>, value: impl Into<Value>) -> Self {
        Detail {
            locator: Some(locator.into()),
            value: value.into(),
        }
    }
}

/// One discovered point of difference between the control and the test tree.
///
/// Built once per mismatch by the traversal engine, consumed by exactly one
/// evaluator chain, then discarded. Identity is by value: two comparisons
/// with equal fields are interchangeable.
///
/// # Example
///
/// ```
/// use treecmp::{Comparison, ComparisonType, Detail};
///
/// let comparison = Comparison::new(
///     ComparisonType::AttrValue,
///     Detail::at("/order[1]/@status", "open"),
///     Detail::at("/order[1]/@status", "closed"),
/// );
/// assert_eq!(comparison.kind(), ComparisonType::AttrValue);
/// assert_eq!(comparison.control().value.as_text(), Some("open"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Comparison {
    kind: ComparisonType,
    control: Detail,
    test: Detail,
}

impl Comparison {
    /// Create a comparison of the given kind from its two sides.
    pub fn new(kind: ComparisonType, control: Detail, test: Detail) -> Self {
        Comparison {
            kind,
            control,
            test,
        }
    }

    /// Category of the compared property.
    pub fn kind(&self) -> ComparisonType {
        self.kind
    }

    /// The control-side detail.
    pub fn control(&self) -> &Detail {
        &self.control
    }

    /// The test-side detail.
    pub fn test(&self) -> &Detail {
        &self.test
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {{ control: {:?} at {}, test: {:?} at {} }}",
            self.kind,
            self.control.value,
            self.control.locator.as_deref().unwrap_or("<unattached>"),
            self.test.value,
            self.test.locator.as_deref().unwrap_or("<unattached>"),
        )
    }
}
