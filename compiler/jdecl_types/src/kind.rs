//! Declaration kinds.

use std::fmt;

/// The kind of a class-like declaration.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum DeclKind {
    #[default]
    Class,
    Interface,
    Enum,
    /// An annotation type (`@interface`).
    Annotation,
}

impl DeclKind {
    /// Map the keyword that introduces a declaration to its kind.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "class" => Some(Self::Class),
            "interface" => Some(Self::Interface),
            "enum" => Some(Self::Enum),
            "@interface" => Some(Self::Annotation),
            _ => None,
        }
    }

    pub fn keyword(self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Interface => "interface",
            Self::Enum => "enum",
            Self::Annotation => "@interface",
        }
    }

    #[inline]
    pub fn is_class(self) -> bool {
        matches!(self, Self::Class)
    }

    #[inline]
    pub fn is_enum(self) -> bool {
        matches!(self, Self::Enum)
    }
}

impl fmt::Display for DeclKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_map_to_kinds() {
        assert_eq!(DeclKind::from_keyword("class"), Some(DeclKind::Class));
        assert_eq!(DeclKind::from_keyword("interface"), Some(DeclKind::Interface));
        assert_eq!(DeclKind::from_keyword("enum"), Some(DeclKind::Enum));
        assert_eq!(DeclKind::from_keyword("@interface"), Some(DeclKind::Annotation));
        assert_eq!(DeclKind::from_keyword("record"), None);
    }

    #[test]
    fn display_uses_keyword() {
        assert_eq!(DeclKind::Annotation.to_string(), "@interface");
        assert!(DeclKind::Class.is_class());
        assert!(!DeclKind::Interface.is_class());
    }
}
