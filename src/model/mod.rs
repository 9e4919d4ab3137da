// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Nereid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Semantic model of an Ecore class diagram and the index over it.
//!
//! The package tree owns every element; [`SemanticIndex`] maps ids to tree locations and hands out
//! default-name counters. [`EcoreModelState`] bundles both for one open diagram.

pub mod ecore;
pub(crate) mod fixtures;
pub mod ids;
pub mod index;
pub mod state;

pub use ecore::{
    BuiltinType, EAttribute, EClass, EClassifier, EDataType, EEnum, EEnumLiteral, EOperation,
    EPackage, EReference, EStructuralFeature, ElementKind, NamedElement, TypeRef,
    UnknownBuiltinType,
};
pub use fixtures::library_package;
pub use ids::{ElementId, Id, IdError};
pub use index::{ElementLocation, IndexError, LabelKind, SemanticIndex};
pub use state::{EcoreModelState, SemanticRef};
