// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Nereid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::str::FromStr;

/// Diagram element type ids as sent by clients in create operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementType {
    Class,
    AbstractClass,
    Interface,
    Enum,
    DataType,
    Attribute,
    Operation,
    EnumLiteral,
    Reference,
    Composition,
    Inheritance,
}

impl ElementType {
    pub const ALL: [ElementType; 11] = [
        Self::Class,
        Self::AbstractClass,
        Self::Interface,
        Self::Enum,
        Self::DataType,
        Self::Attribute,
        Self::Operation,
        Self::EnumLiteral,
        Self::Reference,
        Self::Composition,
        Self::Inheritance,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Class => "node:class",
            Self::AbstractClass => "node:class:abstract",
            Self::Interface => "node:class:interface",
            Self::Enum => "node:enum",
            Self::DataType => "node:datatype",
            Self::Attribute => "node:attribute",
            Self::Operation => "node:operation",
            Self::EnumLiteral => "node:enumliteral",
            Self::Reference => "edge:reference",
            Self::Composition => "edge:composition",
            Self::Inheritance => "edge:inheritance",
        }
    }

    pub fn is_node(self) -> bool {
        self.as_str().starts_with("node:")
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown element type id '{0}'")]
pub struct UnknownElementType(pub String);

impl FromStr for ElementType {
    type Err = UnknownElementType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|element_type| element_type.as_str() == s)
            .ok_or_else(|| UnknownElementType(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::ElementType;

    #[test]
    fn parses_nested_class_type_ids() {
        let cases = [
            ("node:class:abstract", ElementType::AbstractClass),
            ("node:class:interface", ElementType::Interface),
            ("node:enumliteral", ElementType::EnumLiteral),
        ];
        for (id, expected) in cases {
            assert_eq!(id.parse(), Ok(expected));
        }
    }

    #[test]
    fn node_and_edge_ids_are_distinguished() {
        assert!(ElementType::EnumLiteral.is_node());
        assert!(!ElementType::Inheritance.is_node());
        assert!("node:unknown".parse::<ElementType>().is_err());
    }
}
