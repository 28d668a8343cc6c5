//! Software component descriptor (`*.scd.xml`).
//!
//! Only the parts needed for port introspection are modelled; everything
//! else in the document is skipped during deserialization.

use std::path::Path;

use serde::Deserialize;

use crate::core::errors::DescriptorError;

/// Parsed `<softwarecomponent>` document
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SoftwareComponent {
    #[serde(rename = "corbaversion", default)]
    pub corba_version: Option<String>,
    #[serde(rename = "componentrepid", default)]
    pub component_repid: Option<RepId>,
    #[serde(rename = "componenttype", default)]
    pub component_type: Option<String>,
    #[serde(rename = "componentfeatures", default)]
    pub features: ComponentFeatures,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RepId {
    #[serde(rename = "@repid")]
    pub repid: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ComponentFeatures {
    #[serde(rename = "supportsinterface", default)]
    pub supports_interfaces: Vec<SupportsInterface>,
    #[serde(default)]
    pub ports: Ports,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SupportsInterface {
    #[serde(rename = "@repid")]
    pub repid: String,
    #[serde(rename = "@supportsname")]
    pub name: String,
}

/// The `<ports>` element. Uses and provides entries may be interleaved in
/// any order, so they are kept in a single list in document order.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Ports {
    #[serde(rename = "$value", default)]
    entries: Vec<PortDeclaration>,
}

#[derive(Debug, Clone, Deserialize)]
pub enum PortDeclaration {
    #[serde(rename = "uses")]
    Uses(UsesPort),
    #[serde(rename = "provides")]
    Provides(ProvidesPort),
}

/// `<uses usesname=".." repid="..">`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UsesPort {
    #[serde(rename = "@usesname")]
    pub name: String,
    #[serde(rename = "@repid")]
    pub repid: String,
    /// Surrounding whitespace is trimmed by the XML reader
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "porttype", default)]
    pub port_types: Vec<PortTypeTag>,
}

/// `<provides providesname=".." repid="..">`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProvidesPort {
    #[serde(rename = "@providesname")]
    pub name: String,
    #[serde(rename = "@repid")]
    pub repid: String,
    /// Surrounding whitespace is trimmed by the XML reader
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "porttype", default)]
    pub port_types: Vec<PortTypeTag>,
}

/// `<porttype type="data"/>`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PortTypeTag {
    #[serde(rename = "@type")]
    pub kind: String,
}

impl SoftwareComponent {
    /// Parse an SCD document
    pub fn from_xml(xml: &str) -> Result<Self, quick_xml::DeError> {
        quick_xml::de::from_str(xml)
    }

    /// Read and parse an SCD file
    pub fn from_file(path: &Path) -> Result<Self, DescriptorError> {
        let xml = std::fs::read_to_string(path).map_err(|source| DescriptorError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_xml(&xml).map_err(|source| DescriptorError::Xml {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Build a descriptor directly from a port list
    pub fn with_ports(ports: Ports) -> Self {
        Self {
            features: ComponentFeatures {
                supports_interfaces: Vec::new(),
                ports,
            },
            ..Self::default()
        }
    }

    pub fn ports(&self) -> &Ports {
        &self.features.ports
    }

    /// Declared uses ports, in document order
    pub fn uses(&self) -> impl Iterator<Item = &UsesPort> {
        self.features.ports.uses()
    }

    /// Declared provides ports, in document order
    pub fn provides(&self) -> impl Iterator<Item = &ProvidesPort> {
        self.features.ports.provides()
    }
}

impl Ports {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a uses declaration
    pub fn with_uses(mut self, port: UsesPort) -> Self {
        self.entries.push(PortDeclaration::Uses(port));
        self
    }

    /// Append a provides declaration
    pub fn with_provides(mut self, port: ProvidesPort) -> Self {
        self.entries.push(PortDeclaration::Provides(port));
        self
    }

    /// All declarations in document order
    pub fn declarations(&self) -> &[PortDeclaration] {
        &self.entries
    }

    pub fn uses(&self) -> impl Iterator<Item = &UsesPort> {
        self.entries.iter().filter_map(|entry| match entry {
            PortDeclaration::Uses(port) => Some(port),
            PortDeclaration::Provides(_) => None,
        })
    }

    pub fn provides(&self) -> impl Iterator<Item = &ProvidesPort> {
        self.entries.iter().filter_map(|entry| match entry {
            PortDeclaration::Provides(port) => Some(port),
            PortDeclaration::Uses(_) => None,
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PortDeclaration {
    pub fn name(&self) -> &str {
        match self {
            PortDeclaration::Uses(port) => &port.name,
            PortDeclaration::Provides(port) => &port.name,
        }
    }
}

impl UsesPort {
    pub fn new(name: &str, repid: &str) -> Self {
        Self {
            name: name.to_string(),
            repid: repid.to_string(),
            description: None,
            port_types: Vec::new(),
        }
    }

    /// Add a description to this port
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }
}

impl ProvidesPort {
    pub fn new(name: &str, repid: &str) -> Self {
        Self {
            name: name.to_string(),
            repid: repid.to_string(),
            description: None,
            port_types: Vec::new(),
        }
    }

    /// Add a description to this port
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }
}
