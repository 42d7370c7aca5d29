//! Signatures of the types the language treats specially.

/// Registry configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WellKnown {
    /// Implicit superclass of classes without an explicit parent.
    pub root_object: String,
    /// Generic base class of enums. Takes one type argument.
    pub enum_base: String,
    /// Package whose types are visible without qualification.
    pub implicit_package: String,
}

impl Default for WellKnown {
    fn default() -> Self {
        Self {
            root_object: "java/lang/Object".to_owned(),
            enum_base: "java/lang/Enum".to_owned(),
            implicit_package: "java/lang".to_owned(),
        }
    }
}
