// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Nereid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::ecore::{
    EClassifier, EEnumLiteral, EOperation, EPackage, EStructuralFeature, ElementKind, NamedElement,
};
use super::ids::ElementId;
use super::index::{walk, ElementLocation, IndexError, SemanticIndex};

/// Borrowed view of any element reachable through the index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SemanticRef<'a> {
    Package(&'a EPackage),
    Classifier(&'a EClassifier),
    Feature(&'a EStructuralFeature),
    Operation(&'a EOperation),
    Literal(&'a EEnumLiteral),
}

impl<'a> SemanticRef<'a> {
    pub fn as_named(self) -> &'a dyn NamedElement {
        match self {
            Self::Package(package) => package,
            Self::Classifier(classifier) => classifier,
            Self::Feature(feature) => feature,
            Self::Operation(operation) => operation,
            Self::Literal(literal) => literal,
        }
    }

    pub fn kind(self) -> ElementKind {
        self.as_named().kind()
    }
}

/// Semantic state of one open diagram: the package tree and the index over it.
///
/// Mutations take `&mut self`, so a state is only ever written by one operation at a time.
#[derive(Debug, Clone)]
pub struct EcoreModelState {
    package: EPackage,
    index: SemanticIndex,
}

impl EcoreModelState {
    /// Indexes every element already present in `package`.
    pub fn from_package(package: EPackage) -> Result<Self, IndexError> {
        let mut index = SemanticIndex::new();
        for (element, location) in walk(&package) {
            index.try_add(element, location)?;
        }
        Ok(Self { package, index })
    }

    pub fn empty(name: impl Into<String>, ns_uri: impl Into<String>) -> Self {
        let package = EPackage::new(name, ns_uri);
        let mut index = SemanticIndex::new();
        index.add(&package, ElementLocation::Package);
        Self { package, index }
    }

    pub fn package(&self) -> &EPackage {
        &self.package
    }

    pub fn index(&self) -> &SemanticIndex {
        &self.index
    }

    pub fn index_mut(&mut self) -> &mut SemanticIndex {
        &mut self.index
    }

    /// Split borrow used by operations that mutate the tree and the index together.
    pub fn parts_mut(&mut self) -> (&mut EPackage, &mut SemanticIndex) {
        (&mut self.package, &mut self.index)
    }

    /// Resolves `id` through the index against the tree.
    ///
    /// Returns `None` when the id is unindexed or its entry no longer matches the tree.
    pub fn semantic(&self, id: &ElementId) -> Option<SemanticRef<'_>> {
        let package = &self.package;
        let found = match self.index.location(id)? {
            ElementLocation::Package => SemanticRef::Package(package),
            ElementLocation::Classifier => SemanticRef::Classifier(package.classifier(id)?),
            ElementLocation::Feature { owner } => {
                let EClassifier::Class(class) = package.classifier(owner)? else {
                    return None;
                };
                let mut features = class.structural_features().iter();
                SemanticRef::Feature(features.find(|f| f.id() == id)?)
            }
            ElementLocation::Operation { owner } => {
                let EClassifier::Class(class) = package.classifier(owner)? else {
                    return None;
                };
                let mut operations = class.operations().iter();
                SemanticRef::Operation(operations.find(|o| o.id() == id)?)
            }
            ElementLocation::Literal { owner } => {
                let EClassifier::Enum(eenum) = package.classifier(owner)? else {
                    return None;
                };
                let mut literals = eenum.literals().iter();
                SemanticRef::Literal(literals.find(|l| l.id() == id)?)
            }
        };
        (found.as_named().id() == id).then_some(found)
    }

    pub fn verify_index(&self) -> Result<(), IndexError> {
        self.index.verify(&self.package)
    }
}
