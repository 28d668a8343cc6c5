use std::path::{Path, PathBuf};

use log::debug;

use super::scd::SoftwareComponent;
use super::spd::{Implementation, SoftPkg};
use crate::core::errors::DescriptorError;

/// A software package together with the component descriptor it references
#[derive(Debug, Clone)]
pub struct ComponentPackage {
    spd_path: PathBuf,
    softpkg: SoftPkg,
    scd: SoftwareComponent,
}

impl ComponentPackage {
    /// Load an SPD file and the SCD it points at.
    ///
    /// The SCD path is resolved relative to the directory holding the SPD.
    pub fn load(spd_path: &Path) -> Result<Self, DescriptorError> {
        let softpkg = SoftPkg::from_file(spd_path)?;
        let scd_name = softpkg
            .scd_file()
            .ok_or_else(|| DescriptorError::MissingScdReference {
                package: softpkg.name.clone(),
            })?;

        let scd_path = spd_path
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join(scd_name);
        debug!("Loading component descriptor {}", scd_path.display());
        let scd = SoftwareComponent::from_file(&scd_path)?;

        Ok(Self {
            spd_path: spd_path.to_path_buf(),
            softpkg,
            scd,
        })
    }

    pub fn name(&self) -> &str {
        &self.softpkg.name
    }

    pub fn spd_path(&self) -> &Path {
        &self.spd_path
    }

    pub fn softpkg(&self) -> &SoftPkg {
        &self.softpkg
    }

    pub fn scd(&self) -> &SoftwareComponent {
        &self.scd
    }

    pub fn implementation(&self, id: &str) -> Option<&Implementation> {
        self.softpkg.implementation(id)
    }

    pub fn implementation_ids(&self) -> Vec<&str> {
        self.softpkg.implementation_ids()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_package(dir: &Path, scd_ref: Option<&str>) -> PathBuf {
        let descriptor = scd_ref
            .map(|name| format!("<descriptor><localfile name=\"{}\"/></descriptor>", name))
            .unwrap_or_default();
        let spd = format!(
            "<softpkg id=\"DCE:1\" name=\"demo\">{}<implementation id=\"cpp\"/></softpkg>",
            descriptor
        );
        let spd_path = dir.join("demo.spd.xml");
        fs::write(&spd_path, spd).unwrap();
        spd_path
    }

    #[test]
    fn test_load_resolves_scd_next_to_spd() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("demo.scd.xml"),
            r#"<softwarecomponent><componentfeatures><ports>
                 <uses usesname="out" repid="IDL:A/B:1.0"/>
               </ports></componentfeatures></softwarecomponent>"#,
        )
        .unwrap();
        let spd_path = write_package(dir.path(), Some("demo.scd.xml"));

        let package = ComponentPackage::load(&spd_path).unwrap();
        assert_eq!(package.name(), "demo");
        assert_eq!(package.implementation_ids(), vec!["cpp"]);
        assert_eq!(package.scd().uses().count(), 1);
    }

    #[test]
    fn test_missing_scd_reference() {
        let dir = tempfile::tempdir().unwrap();
        let spd_path = write_package(dir.path(), None);

        let err = ComponentPackage::load(&spd_path).unwrap_err();
        assert!(matches!(err, DescriptorError::MissingScdReference { ref package } if package == "demo"));
    }

    #[test]
    fn test_missing_scd_file() {
        let dir = tempfile::tempdir().unwrap();
        let spd_path = write_package(dir.path(), Some("absent.scd.xml"));

        let err = ComponentPackage::load(&spd_path).unwrap_err();
        assert!(matches!(err, DescriptorError::Io { .. }));
    }
}
