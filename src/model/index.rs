// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Nereid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Semantic index: id → element location, plus default-name counters.
//!
//! The index never owns elements. It records where each registered id lives in the package tree
//! so lookups can be resolved against the tree, and it tracks registered names so the counter
//! store can step over names that are already in use.

use std::borrow::Cow;
use std::collections::{HashMap, HashSet};
use std::fmt;

use super::ecore::{EClassifier, EPackage, ElementKind, NamedElement};
use super::ids::ElementId;

/// Tag keying a counter in the index's counter store.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LabelKind(Cow<'static, str>);

impl LabelKind {
    /// Counter shared by every named element of a diagram.
    pub const LABEL: LabelKind = LabelKind(Cow::Borrowed("label"));

    pub fn new(tag: impl Into<String>) -> Self {
        Self(Cow::Owned(tag.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for LabelKind {
    fn default() -> Self {
        Self::LABEL
    }
}

impl fmt::Display for LabelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Where a registered element lives in the package tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementLocation {
    Package,
    Classifier,
    Feature { owner: ElementId },
    Operation { owner: ElementId },
    Literal { owner: ElementId },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IndexError {
    #[error("element id {id} is used more than once")]
    DuplicateId { id: ElementId },
    #[error("{kind} {id} is in the model but not in the index")]
    Unindexed { id: ElementId, kind: ElementKind },
    #[error("index entry {id} does not resolve to a model element")]
    Stale { id: ElementId },
    #[error("index entry {id} points to {indexed:?}, model has it at {actual:?}")]
    LocationMismatch {
        id: ElementId,
        indexed: ElementLocation,
        actual: ElementLocation,
    },
    #[error("counter '{label_kind}' has no free value left")]
    CounterExhausted { label_kind: LabelKind },
}

#[derive(Debug, Clone, Default)]
pub struct SemanticIndex {
    locations: HashMap<ElementId, ElementLocation>,
    names: HashSet<String>,
    // Next candidate per label kind. Wider than the i32 values handed out so that
    // `i32::MAX + 1` can mark a spent counter.
    counters: HashMap<LabelKind, i64>,
}

impl SemanticIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    pub fn location(&self, id: &ElementId) -> Option<&ElementLocation> {
        self.locations.get(id)
    }

    /// Registers `element` at `location` and returns its id.
    ///
    /// Element ids are minted fresh at construction, so a second registration of the same id is
    /// a caller bug. Loading paths that cannot rule this out go through [`Self::try_add`].
    pub fn add(&mut self, element: &dyn NamedElement, location: ElementLocation) -> ElementId {
        debug_assert!(
            !self.locations.contains_key(element.id()),
            "element {} registered twice",
            element.id()
        );
        self.record(element, location)
    }

    pub fn try_add(
        &mut self,
        element: &dyn NamedElement,
        location: ElementLocation,
    ) -> Result<ElementId, IndexError> {
        if self.locations.contains_key(element.id()) {
            let id = element.id().clone();
            return Err(IndexError::DuplicateId { id });
        }
        Ok(self.record(element, location))
    }

    fn record(&mut self, element: &dyn NamedElement, location: ElementLocation) -> ElementId {
        let id = element.id().clone();
        self.names.insert(element.name().to_owned());
        self.locations.insert(id.clone(), location);
        id
    }

    /// Returns the next counter value for `label_kind` and advances the counter past it.
    ///
    /// Values whose `name_template` output is already a registered name are skipped. The result
    /// is monotonic per label kind; uniqueness is best effort since renames are not tracked.
    /// Once every value up to `i32::MAX` is spent the counter fails and stays unchanged.
    pub fn counter(
        &mut self,
        label_kind: &LabelKind,
        name_template: impl Fn(i32) -> String,
    ) -> Result<i32, IndexError> {
        let next = self.counters.entry(label_kind.clone()).or_insert(0);
        let mut candidate = *next;
        loop {
            let Ok(value) = i32::try_from(candidate) else {
                let label_kind = label_kind.clone();
                return Err(IndexError::CounterExhausted { label_kind });
            };
            if !self.names.contains(&name_template(value)) {
                *next = candidate + 1;
                return Ok(value);
            }
            candidate += 1;
        }
    }

    #[cfg(test)]
    pub(crate) fn seed_counter(&mut self, label_kind: LabelKind, next: i64) {
        self.counters.insert(label_kind, next);
    }

    /// Checks that the index and `package` agree in both directions.
    pub fn verify(&self, package: &EPackage) -> Result<(), IndexError> {
        let mut seen: HashSet<&ElementId> = HashSet::new();
        for (element, actual) in walk(package) {
            let id = element.id();
            if !seen.insert(id) {
                return Err(IndexError::DuplicateId { id: id.clone() });
            }
            let Some(indexed) = self.locations.get(id) else {
                return Err(IndexError::Unindexed {
                    id: id.clone(),
                    kind: element.kind(),
                });
            };
            if *indexed != actual {
                return Err(IndexError::LocationMismatch {
                    id: id.clone(),
                    indexed: indexed.clone(),
                    actual,
                });
            }
        }

        if let Some(stale) = self.locations.keys().find(|id| !seen.contains(*id)) {
            return Err(IndexError::Stale { id: stale.clone() });
        }
        Ok(())
    }
}

/// Every element of the tree with the location it occupies, parents before children.
pub(crate) fn walk(package: &EPackage) -> Vec<(&dyn NamedElement, ElementLocation)> {
    let mut out: Vec<(&dyn NamedElement, ElementLocation)> = Vec::new();
    out.push((package, ElementLocation::Package));
    for classifier in package.classifiers() {
        out.push((classifier, ElementLocation::Classifier));
        let owner = classifier.id();
        match classifier {
            EClassifier::Class(class) => {
                for feature in class.structural_features() {
                    let owner = owner.clone();
                    out.push((feature, ElementLocation::Feature { owner }));
                }
                for operation in class.operations() {
                    let owner = owner.clone();
                    out.push((operation, ElementLocation::Operation { owner }));
                }
            }
            EClassifier::Enum(eenum) => {
                for literal in eenum.literals() {
                    let owner = owner.clone();
                    out.push((literal, ElementLocation::Literal { owner }));
                }
            }
            EClassifier::DataType(_) => {}
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{ElementLocation, IndexError, LabelKind, SemanticIndex};
    use crate::model::{
        BuiltinType, EAttribute, EClass, EClassifier, EPackage, ElementId, NamedElement, TypeRef,
    };

    fn attribute(name: &str) -> EAttribute {
        EAttribute::new(name, TypeRef::Builtin(BuiltinType::EString))
    }

    fn attribute_name(i: i32) -> String {
        format!("NewEAttribute{i}")
    }

    fn register_attribute(index: &mut SemanticIndex, name: &str) {
        let owner = ElementId::new("c:a").expect("id");
        index.add(&attribute(name), ElementLocation::Feature { owner });
    }

    #[test]
    fn counter_starts_at_zero_and_advances_per_request() {
        let mut index = SemanticIndex::new();
        assert!(index.is_empty());
        let label = LabelKind::LABEL;
        let edge = LabelKind::new("edge");

        assert_eq!(index.counter(&label, attribute_name), Ok(0));
        assert_eq!(index.counter(&label, attribute_name), Ok(1));
        assert_eq!(index.counter(&edge, attribute_name), Ok(0));
    }

    #[test]
    fn counter_is_shared_across_element_kinds() {
        let mut index = SemanticIndex::new();

        let first = index.counter(&LabelKind::LABEL, |i| format!("NewEAttribute{i}"));
        let second = index.counter(&LabelKind::LABEL, |i| format!("NewEEnumLiteral{i}"));

        assert_eq!((first, second), (Ok(0), Ok(1)));
    }

    #[test]
    fn counter_skips_names_already_registered() {
        let mut index = SemanticIndex::new();
        let label = LabelKind::LABEL;
        register_attribute(&mut index, "NewEAttribute0");
        register_attribute(&mut index, "NewEAttribute1");

        assert_eq!(index.counter(&label, attribute_name), Ok(2));
        assert_eq!(index.counter(&label, attribute_name), Ok(3));
    }

    #[test]
    fn counter_hands_out_the_last_value_then_fails() {
        let mut index = SemanticIndex::new();
        let label = LabelKind::LABEL;
        index.seed_counter(label.clone(), i64::from(i32::MAX));

        assert_eq!(index.counter(&label, attribute_name), Ok(i32::MAX));
        for _ in 0..2 {
            let err = index.counter(&label, attribute_name).unwrap_err();
            assert!(matches!(err, IndexError::CounterExhausted { .. }));
        }
    }

    #[test]
    fn counter_fails_when_the_last_free_name_is_taken() {
        let mut index = SemanticIndex::new();
        let label = LabelKind::LABEL;
        let last = i64::from(i32::MAX);
        register_attribute(&mut index, &attribute_name(i32::MAX));
        index.seed_counter(label.clone(), last);

        let err = index.counter(&label, attribute_name).unwrap_err();

        assert_eq!(err.to_string(), "counter 'label' has no free value left");
        assert_eq!(index.counters.get(&label), Some(&last));
    }

    #[test]
    fn try_add_rejects_duplicate_ids() {
        let mut index = SemanticIndex::new();
        let class = EClass::with_id(ElementId::new("c:a").expect("id"), "A");
        let location = ElementLocation::Classifier;

        index.try_add(&class, location.clone()).expect("first add");
        let err = index.try_add(&class, location).unwrap_err();

        let id = class.id().clone();
        assert_eq!(err, IndexError::DuplicateId { id });
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn verify_reports_unindexed_and_stale_entries() {
        let mut package = EPackage::new("p", "urn:p");
        let class = EClass::with_id(ElementId::new("c:a").expect("id"), "A");
        package.classifiers_mut().push(EClassifier::Class(class));

        let mut index = SemanticIndex::new();
        index.add(&package, ElementLocation::Package);
        assert!(matches!(
            index.verify(&package),
            Err(IndexError::Unindexed { .. })
        ));

        let ghost = EClass::with_id(ElementId::new("c:ghost").expect("id"), "Ghost");
        index.add(&package.classifiers()[0], ElementLocation::Classifier);
        index.add(&ghost, ElementLocation::Classifier);
        let id = ghost.id().clone();
        assert_eq!(index.verify(&package), Err(IndexError::Stale { id }));
    }
}
