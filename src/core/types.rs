use uuid::Uuid;

/// Identifier of a launched component instance
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComponentId {
    pub(crate) instance: String,
    pub(crate) implementation: String,
}

impl ComponentId {
    /// Create a new component ID
    pub fn new(instance: String, implementation: String) -> Self {
        Self {
            instance,
            implementation,
        }
    }

    /// Get the instance name
    pub fn instance(&self) -> &str {
        &self.instance
    }

    /// Get the implementation the instance was launched with
    pub fn implementation(&self) -> &str {
        &self.implementation
    }
}

impl std::fmt::Display for ComponentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.instance, self.implementation)
    }
}

/// Direction of a component port
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PortDirection {
    /// Outbound interface consumed from a peer
    Uses,
    /// Inbound interface exposed to peers
    Provides,
    /// Declared as both uses and provides
    Bidir,
}

impl PortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            PortDirection::Uses => "Uses",
            PortDirection::Provides => "Provides",
            PortDirection::Bidir => "Bidir",
        }
    }
}

impl std::fmt::Display for PortDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Opaque reference to the live object backing a runtime port
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectRef(Uuid);

impl ObjectRef {
    /// Allocate a fresh reference
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ObjectRef {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ObjectRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "obj:{}", self.0)
    }
}
