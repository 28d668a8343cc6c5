//! Software package descriptor (`*.spd.xml`).

use std::path::Path;

use serde::Deserialize;

use crate::core::errors::DescriptorError;

/// Parsed `<softpkg>` document
#[derive(Debug, Clone, Deserialize)]
pub struct SoftPkg {
    #[serde(rename = "@id", default)]
    pub id: String,
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub descriptor: Option<DescriptorRef>,
    #[serde(rename = "implementation", default)]
    pub implementations: Vec<Implementation>,
}

/// `<descriptor><localfile name=".."/></descriptor>`
#[derive(Debug, Clone, Deserialize)]
pub struct DescriptorRef {
    pub localfile: LocalFile,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LocalFile {
    #[serde(rename = "@name")]
    pub name: String,
}

/// One build variant of the component
#[derive(Debug, Clone, Deserialize)]
pub struct Implementation {
    #[serde(rename = "@id")]
    pub id: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub code: Option<Code>,
    #[serde(rename = "programminglanguage", default)]
    pub programming_language: Option<NamedElement>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Code {
    #[serde(rename = "@type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub localfile: Option<LocalFile>,
    #[serde(default)]
    pub entrypoint: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NamedElement {
    #[serde(rename = "@name")]
    pub name: String,
}

impl SoftPkg {
    /// Parse an SPD document
    pub fn from_xml(xml: &str) -> Result<Self, quick_xml::DeError> {
        quick_xml::de::from_str(xml)
    }

    /// Read and parse an SPD file
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

    /// Relative path of the component descriptor, if declared
    pub fn scd_file(&self) -> Option<&str> {
        self.descriptor.as_ref().map(|d| d.localfile.name.as_str())
    }

    pub fn implementation(&self, id: &str) -> Option<&Implementation> {
        self.implementations.iter().find(|implementation| implementation.id == id)
    }

    /// Implementation ids in declaration order
    pub fn implementation_ids(&self) -> Vec<&str> {
        self.implementations.iter().map(|i| i.id.as_str()).collect()
    }
}

impl Implementation {
    pub fn language(&self) -> Option<&str> {
        self.programming_language.as_ref().map(|l| l.name.as_str())
    }

    pub fn entry_point(&self) -> Option<&str> {
        self.code.as_ref().and_then(|c| c.entrypoint.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPD: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE softpkg PUBLIC "-//JTRS//DTD SCA V2.2.2 SPD//EN" "softpkg.dtd">
<softpkg id="DCE:4a23ad60-0b25-4121-a630-68803a498f75" name="get_ports" type="sca_compliant">
  <title></title>
  <author>
    <name>null</name>
  </author>
  <propertyfile type="PRF">
    <localfile name="get_ports.prf.xml"/>
  </propertyfile>
  <descriptor>
    <localfile name="get_ports.scd.xml"/>
  </descriptor>
  <implementation id="cpp">
    <description>The implementation contains descriptive information about the template for a software component.</description>
    <code type="Executable">
      <localfile name="cpp"/>
      <entrypoint>cpp/get_ports</entrypoint>
    </code>
    <compiler name="/usr/bin/gcc" version="4.1.2"/>
    <programminglanguage name="C++"/>
    <humanlanguage name="EN"/>
    <os name="Linux"/>
  </implementation>
  <implementation id="python">
    <code type="Executable">
      <localfile name="python"/>
      <entrypoint>python/get_ports.py</entrypoint>
    </code>
    <programminglanguage name="Python"/>
  </implementation>
</softpkg>"#;

    #[test]
    fn test_parse_package() {
        let spd = SoftPkg::from_xml(SPD).unwrap();
        assert_eq!(spd.name, "get_ports");
        assert_eq!(spd.id, "DCE:4a23ad60-0b25-4121-a630-68803a498f75");
        assert_eq!(spd.scd_file(), Some("get_ports.scd.xml"));
        assert_eq!(spd.implementation_ids(), vec!["cpp", "python"]);
    }

    #[test]
    fn test_implementation_details() {
        let spd = SoftPkg::from_xml(SPD).unwrap();
        let cpp = spd.implementation("cpp").unwrap();
        assert_eq!(cpp.language(), Some("C++"));
        assert_eq!(cpp.entry_point(), Some("cpp/get_ports"));
        assert_eq!(cpp.code.as_ref().unwrap().kind.as_deref(), Some("Executable"));
        assert!(spd.implementation("java").is_none());
    }

    #[test]
    fn test_package_without_descriptor() {
        let spd = SoftPkg::from_xml(r#"<softpkg id="x" name="bare"/>"#).unwrap();
        assert_eq!(spd.scd_file(), None);
        assert!(spd.implementations.is_empty());
    }
}
