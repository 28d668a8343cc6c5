use crate::core::descriptor::SoftwareComponent;
use crate::core::types::PortDirection;

/// What the component descriptor declares about one port name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortDefinition {
    pub repid: String,
    /// Declared description, `None` when the XML omits it
    pub description: Option<String>,
    pub direction: PortDirection,
}

impl PortDefinition {
    /// Description as a running component reports it: absent becomes `""`
    pub fn expected_description(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }
}

fn is_blank(description: Option<&str>) -> bool {
    description.map_or(true, str::is_empty)
}

/// Look up the declared definition of `name`.
///
/// The first matching uses entry and the first matching provides entry are
/// considered. A name found in both lists is `Bidir`; its description comes
/// from the uses side unless that one is empty. Returns `None` when neither
/// list declares the name.
///
/// Descriptions are compared as parsed, which drops leading and trailing
/// whitespace from the XML text; a sandbox reporting the raw padded string
/// will not match.
pub fn find_port_definition(name: &str, scd: &SoftwareComponent) -> Option<PortDefinition> {
    let mut definition = scd.uses().find(|port| port.name == name).map(|port| PortDefinition {
        repid: port.repid.clone(),
        description: port.description.clone(),
        direction: PortDirection::Uses,
    });

    if let Some(port) = scd.provides().find(|port| port.name == name) {
        definition = Some(match definition.take() {
            Some(mut existing) => {
                existing.direction = PortDirection::Bidir;
                if is_blank(existing.description.as_deref()) {
                    existing.description = port.description.clone();
                }
                existing
            }
            None => PortDefinition {
                repid: port.repid.clone(),
                description: port.description.clone(),
                direction: PortDirection::Provides,
            },
        });
    }

    definition
}

/// Every declared port name reconciled, in first-declaration order
pub fn declared_port_definitions(scd: &SoftwareComponent) -> Vec<(String, PortDefinition)> {
    let mut seen: Vec<String> = Vec::new();
    for declaration in scd.ports().declarations() {
        if !seen.iter().any(|name| name == declaration.name()) {
            seen.push(declaration.name().to_string());
        }
    }

    seen.into_iter()
        .filter_map(|name| find_port_definition(&name, scd).map(|definition| (name, definition)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::descriptor::{Ports, ProvidesPort, UsesPort};

    fn scd(ports: Ports) -> SoftwareComponent {
        SoftwareComponent::with_ports(ports)
    }

    #[test]
    fn test_uses_and_provides_only() {
        let scd = scd(
            Ports::new()
                .with_uses(UsesPort::new("dataIn", "IDL:A/B:1.0").with_description("input"))
                .with_provides(ProvidesPort::new("dataOut", "IDL:C/D:1.0")),
        );

        let data_in = find_port_definition("dataIn", &scd).unwrap();
        assert_eq!(data_in.repid, "IDL:A/B:1.0");
        assert_eq!(data_in.expected_description(), "input");
        assert_eq!(data_in.direction, PortDirection::Uses);

        let data_out = find_port_definition("dataOut", &scd).unwrap();
        assert_eq!(data_out.repid, "IDL:C/D:1.0");
        assert_eq!(data_out.description, None);
        assert_eq!(data_out.expected_description(), "");
        assert_eq!(data_out.direction, PortDirection::Provides);
    }

    #[test]
    fn test_unknown_name_is_absent() {
        let scd = scd(Ports::new().with_uses(UsesPort::new("a", "IDL:A/B:1.0")));
        assert_eq!(find_port_definition("b", &scd), None);
    }

    #[test]
    fn test_bidir_keeps_uses_description() {
        let scd = scd(
            Ports::new()
                .with_uses(
                    UsesPort::new("msg", "IDL:ExtendedEvent/MessageEvent:1.0")
                        .with_description("uses side"),
                )
                .with_provides(
                    ProvidesPort::new("msg", "IDL:ExtendedEvent/MessageEvent:1.0")
                        .with_description("provides side"),
                ),
        );

        let def = find_port_definition("msg", &scd).unwrap();
        assert_eq!(def.direction, PortDirection::Bidir);
        assert_eq!(def.expected_description(), "uses side");
    }

    #[test]
    fn test_bidir_falls_back_to_provides_description() {
        let scd = scd(
            Ports::new()
                .with_provides(
                    ProvidesPort::new("msg", "IDL:P/Q:1.0").with_description("provides side"),
                )
                .with_uses(UsesPort::new("msg", "IDL:U/V:1.0").with_description("")),
        );

        let def = find_port_definition("msg", &scd).unwrap();
        assert_eq!(def.direction, PortDirection::Bidir);
        // repid always comes from the uses declaration
        assert_eq!(def.repid, "IDL:U/V:1.0");
        assert_eq!(def.expected_description(), "provides side");
    }

    #[test]
    fn test_bidir_with_no_descriptions() {
        let scd = scd(
            Ports::new()
                .with_uses(UsesPort::new("x", "IDL:A/B:1.0"))
                .with_provides(ProvidesPort::new("x", "IDL:A/B:1.0")),
        );

        let def = find_port_definition("x", &scd).unwrap();
        assert_eq!(def.direction, PortDirection::Bidir);
        assert_eq!(def.expected_description(), "");
    }

    #[test]
    fn test_first_match_wins_within_a_list() {
        let scd = scd(
            Ports::new()
                .with_uses(UsesPort::new("dup", "IDL:First/One:1.0"))
                .with_uses(UsesPort::new("dup", "IDL:Second/One:1.0"))
                .with_provides(
                    ProvidesPort::new("p", "IDL:First/Two:1.0").with_description("first"),
                )
                .with_provides(
                    ProvidesPort::new("p", "IDL:Second/Two:1.0").with_description("second"),
                ),
        );

        assert_eq!(find_port_definition("dup", &scd).unwrap().repid, "IDL:First/One:1.0");
        let p = find_port_definition("p", &scd).unwrap();
        assert_eq!(p.repid, "IDL:First/Two:1.0");
        assert_eq!(p.expected_description(), "first");
    }

    #[test]
    fn test_declared_definitions_merge_names() {
        let scd = scd(
            Ports::new()
                .with_uses(UsesPort::new("a", "IDL:A/A:1.0"))
                .with_provides(ProvidesPort::new("b", "IDL:B/B:1.0"))
                .with_provides(ProvidesPort::new("a", "IDL:A/A:1.0")),
        );

        let defs = declared_port_definitions(&scd);
        let summary: Vec<(&str, PortDirection)> =
            defs.iter().map(|(name, def)| (name.as_str(), def.direction)).collect();
        assert_eq!(summary, vec![("a", PortDirection::Bidir), ("b", PortDirection::Provides)]);
    }
}
