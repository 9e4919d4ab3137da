// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Nereid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Ecore semantic model: packages own classifiers, classifiers own their typed children.
//!
//! The tree owns every element. Lookup by id goes through
//! [`SemanticIndex`](super::index::SemanticIndex), which only stores ids and locations.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer};

use super::ids::ElementId;

/// Runtime kind of a semantic element, mirroring the Ecore metaclass names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Package,
    Class,
    Enum,
    DataType,
    Attribute,
    Reference,
    Operation,
    EnumLiteral,
}

impl ElementKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::Package => "EPackage",
            Self::Class => "EClass",
            Self::Enum => "EEnum",
            Self::DataType => "EDataType",
            Self::Attribute => "EAttribute",
            Self::Reference => "EReference",
            Self::Operation => "EOperation",
            Self::EnumLiteral => "EEnumLiteral",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Common surface of every element that carries an id and a name.
pub trait NamedElement {
    fn id(&self) -> &ElementId;
    fn name(&self) -> &str;
    fn set_name(&mut self, name: String);
    fn kind(&self) -> ElementKind;
}

/// Data types shipped with Ecore itself. They are not part of any user package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinType {
    EString,
    EInt,
    EBoolean,
    EDouble,
    EFloat,
    ELong,
    EChar,
    EDate,
}

impl BuiltinType {
    pub const ALL: [BuiltinType; 8] = [
        Self::EString,
        Self::EInt,
        Self::EBoolean,
        Self::EDouble,
        Self::EFloat,
        Self::ELong,
        Self::EChar,
        Self::EDate,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::EString => "EString",
            Self::EInt => "EInt",
            Self::EBoolean => "EBoolean",
            Self::EDouble => "EDouble",
            Self::EFloat => "EFloat",
            Self::ELong => "ELong",
            Self::EChar => "EChar",
            Self::EDate => "EDate",
        }
    }
}

impl fmt::Display for BuiltinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown built-in data type '{0}'")]
pub struct UnknownBuiltinType(pub String);

impl FromStr for BuiltinType {
    type Err = UnknownBuiltinType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|builtin| builtin.name() == s)
            .ok_or_else(|| UnknownBuiltinType(s.to_owned()))
    }
}

impl<'de> Deserialize<'de> for BuiltinType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

/// Declared type of a typed element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeRef {
    Builtin(BuiltinType),
    Classifier(ElementId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EAttribute {
    id: ElementId,
    name: String,
    e_type: TypeRef,
}

impl EAttribute {
    pub fn new(name: impl Into<String>, e_type: TypeRef) -> Self {
        Self::with_id(ElementId::generate(), name, e_type)
    }

    pub fn with_id(id: ElementId, name: impl Into<String>, e_type: TypeRef) -> Self {
        Self {
            id,
            name: name.into(),
            e_type,
        }
    }

    pub fn e_type(&self) -> &TypeRef {
        &self.e_type
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EReference {
    id: ElementId,
    name: String,
    target: ElementId,
}

impl EReference {
    pub fn with_id(id: ElementId, name: impl Into<String>, target: ElementId) -> Self {
        Self {
            id,
            name: name.into(),
            target,
        }
    }

    /// Id of the classifier this reference points at.
    pub fn target(&self) -> &ElementId {
        &self.target
    }
}

/// A structural feature owned by an [`EClass`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EStructuralFeature {
    Attribute(EAttribute),
    Reference(EReference),
}

impl EStructuralFeature {
    pub fn as_attribute(&self) -> Option<&EAttribute> {
        match self {
            Self::Attribute(attribute) => Some(attribute),
            Self::Reference(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EOperation {
    id: ElementId,
    name: String,
}

impl EOperation {
    pub fn with_id(id: ElementId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EEnumLiteral {
    id: ElementId,
    name: String,
    value: i32,
}

impl EEnumLiteral {
    pub fn new(name: impl Into<String>, value: i32) -> Self {
        Self::with_id(ElementId::generate(), name, value)
    }

    pub fn with_id(id: ElementId, name: impl Into<String>, value: i32) -> Self {
        Self {
            id,
            name: name.into(),
            value,
        }
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    pub fn set_value(&mut self, value: i32) {
        self.value = value;
    }
}

/// Class-like container: owns structural features and operations, both ordered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EClass {
    id: ElementId,
    name: String,
    is_abstract: bool,
    structural_features: Vec<EStructuralFeature>,
    operations: Vec<EOperation>,
}

impl EClass {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_id(ElementId::generate(), name)
    }

    pub fn with_id(id: ElementId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            is_abstract: false,
            structural_features: Vec::new(),
            operations: Vec::new(),
        }
    }

    pub fn is_abstract(&self) -> bool {
        self.is_abstract
    }

    pub fn set_abstract(&mut self, is_abstract: bool) {
        self.is_abstract = is_abstract;
    }

    pub fn structural_features(&self) -> &[EStructuralFeature] {
        &self.structural_features
    }

    pub fn structural_features_mut(&mut self) -> &mut Vec<EStructuralFeature> {
        &mut self.structural_features
    }

    pub fn operations(&self) -> &[EOperation] {
        &self.operations
    }

    pub fn operations_mut(&mut self) -> &mut Vec<EOperation> {
        &mut self.operations
    }
}

/// Enumeration-like container: owns an ordered list of literals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EEnum {
    id: ElementId,
    name: String,
    literals: Vec<EEnumLiteral>,
}

impl EEnum {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_id(ElementId::generate(), name)
    }

    pub fn with_id(id: ElementId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            literals: Vec::new(),
        }
    }

    pub fn literals(&self) -> &[EEnumLiteral] {
        &self.literals
    }

    pub fn literals_mut(&mut self) -> &mut Vec<EEnumLiteral> {
        &mut self.literals
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EDataType {
    id: ElementId,
    name: String,
}

impl EDataType {
    pub fn with_id(id: ElementId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EClassifier {
    Class(EClass),
    Enum(EEnum),
    DataType(EDataType),
}

impl EClassifier {
    fn as_named(&self) -> &dyn NamedElement {
        match self {
            Self::Class(class) => class,
            Self::Enum(eenum) => eenum,
            Self::DataType(data_type) => data_type,
        }
    }

    fn as_named_mut(&mut self) -> &mut dyn NamedElement {
        match self {
            Self::Class(class) => class,
            Self::Enum(eenum) => eenum,
            Self::DataType(data_type) => data_type,
        }
    }
}

impl NamedElement for EClassifier {
    fn id(&self) -> &ElementId {
        self.as_named().id()
    }

    fn name(&self) -> &str {
        self.as_named().name()
    }

    fn set_name(&mut self, name: String) {
        self.as_named_mut().set_name(name);
    }

    fn kind(&self) -> ElementKind {
        self.as_named().kind()
    }
}

/// Root of a semantic model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EPackage {
    id: ElementId,
    name: String,
    ns_uri: String,
    classifiers: Vec<EClassifier>,
}

impl EPackage {
    pub fn new(name: impl Into<String>, ns_uri: impl Into<String>) -> Self {
        Self::with_id(ElementId::generate(), name, ns_uri)
    }

    pub fn with_id(id: ElementId, name: impl Into<String>, ns_uri: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            ns_uri: ns_uri.into(),
            classifiers: Vec::new(),
        }
    }

    pub fn ns_uri(&self) -> &str {
        &self.ns_uri
    }

    pub fn classifiers(&self) -> &[EClassifier] {
        &self.classifiers
    }

    pub fn classifiers_mut(&mut self) -> &mut Vec<EClassifier> {
        &mut self.classifiers
    }

    pub fn classifier(&self, id: &ElementId) -> Option<&EClassifier> {
        self.classifiers.iter().find(|c| c.id() == id)
    }

    pub fn classifier_mut(&mut self, id: &ElementId) -> Option<&mut EClassifier> {
        self.classifiers.iter_mut().find(|c| c.id() == id)
    }
}

impl NamedElement for EPackage {
    fn id(&self) -> &ElementId {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }

    fn kind(&self) -> ElementKind {
        ElementKind::Package
    }
}

impl NamedElement for EClass {
    fn id(&self) -> &ElementId {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }

    fn kind(&self) -> ElementKind {
        ElementKind::Class
    }
}

impl NamedElement for EEnum {
    fn id(&self) -> &ElementId {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }

    fn kind(&self) -> ElementKind {
        ElementKind::Enum
    }
}

impl NamedElement for EDataType {
    fn id(&self) -> &ElementId {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }

    fn kind(&self) -> ElementKind {
        ElementKind::DataType
    }
}

impl NamedElement for EAttribute {
    fn id(&self) -> &ElementId {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }

    fn kind(&self) -> ElementKind {
        ElementKind::Attribute
    }
}

impl NamedElement for EReference {
    fn id(&self) -> &ElementId {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }

    fn kind(&self) -> ElementKind {
        ElementKind::Reference
    }
}

impl NamedElement for EStructuralFeature {
    fn id(&self) -> &ElementId {
        match self {
            Self::Attribute(attribute) => attribute.id(),
            Self::Reference(reference) => reference.id(),
        }
    }

    fn name(&self) -> &str {
        match self {
            Self::Attribute(attribute) => attribute.name(),
            Self::Reference(reference) => reference.name(),
        }
    }

    fn set_name(&mut self, name: String) {
        match self {
            Self::Attribute(attribute) => attribute.set_name(name),
            Self::Reference(reference) => reference.set_name(name),
        }
    }

    fn kind(&self) -> ElementKind {
        match self {
            Self::Attribute(_) => ElementKind::Attribute,
            Self::Reference(_) => ElementKind::Reference,
        }
    }
}

impl NamedElement for EOperation {
    fn id(&self) -> &ElementId {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }

    fn kind(&self) -> ElementKind {
        ElementKind::Operation
    }
}

impl NamedElement for EEnumLiteral {
    fn id(&self) -> &ElementId {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }

    fn kind(&self) -> ElementKind {
        ElementKind::EnumLiteral
    }
}

#[cfg(test)]
mod tests {
    use super::{BuiltinType, EClass, EClassifier, EPackage, ElementKind, NamedElement};
    use crate::model::ElementId;

    #[test]
    fn builtin_type_parses_by_ecore_name() {
        assert_eq!("EString".parse::<BuiltinType>(), Ok(BuiltinType::EString));
        assert_eq!("EDate".parse::<BuiltinType>(), Ok(BuiltinType::EDate));
        let err = "String".parse::<BuiltinType>().unwrap_err();
        assert_eq!(err.to_string(), "unknown built-in data type 'String'");
    }

    #[test]
    fn classifier_delegates_named_element_to_variant() {
        let id = ElementId::new("c:person").expect("id");
        let mut classifier = EClassifier::Class(EClass::with_id(id.clone(), "Person"));

        assert_eq!(classifier.id(), &id);
        assert_eq!(classifier.kind(), ElementKind::Class);
        assert_eq!(classifier.kind().name(), "EClass");

        classifier.set_name("Human".to_owned());
        assert_eq!(classifier.name(), "Human");
    }

    #[test]
    fn package_finds_classifier_by_id() {
        let mut package = EPackage::new("library", "http://example.org/library");
        let id = ElementId::new("c:book").expect("id");
        let book = EClass::with_id(id.clone(), "Book");
        package.classifiers_mut().push(EClassifier::Class(book));

        let missing = ElementId::new("c:missing").expect("id");
        assert_eq!(package.classifier(&id).map(|c| c.name()), Some("Book"));
        assert!(package.classifier(&missing).is_none());
    }
}
