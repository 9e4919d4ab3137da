// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Nereid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Creation of child nodes inside classifiers: attributes in classes, literals in enums.

use crate::config::ServerConfig;
use crate::model::{
    BuiltinType, EAttribute, EClassifier, EEnumLiteral, EPackage, EStructuralFeature,
    EcoreModelState, ElementId, ElementKind, ElementLocation, IndexError, LabelKind, NamedElement,
    SemanticIndex, TypeRef,
};

use super::{
    CreateNodeOperation, CreatedElement, ElementType, ExecuteOutcome, KindMismatch, Operation,
    OperationError, OperationHandler, UnsupportedChild,
};

const LABEL: &str = "Create EClassifier child node";
const HANDLER_NAME: &str = "CreateClassifierChildNodeHandler";

/// Child element types this handler claims.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildKind {
    Attribute,
    Operation,
    EnumLiteral,
}

impl ChildKind {
    pub fn from_element_type(element_type: ElementType) -> Option<Self> {
        match element_type {
            ElementType::Attribute => Some(Self::Attribute),
            ElementType::Operation => Some(Self::Operation),
            ElementType::EnumLiteral => Some(Self::EnumLiteral),
            _ => None,
        }
    }

    pub fn element_type(self) -> ElementType {
        match self {
            Self::Attribute => ElementType::Attribute,
            Self::Operation => ElementType::Operation,
            Self::EnumLiteral => ElementType::EnumLiteral,
        }
    }

    fn of(operation: &CreateNodeOperation) -> Option<Self> {
        let element_type = operation.element_type_id.parse().ok()?;
        Self::from_element_type(element_type)
    }
}

/// Looks up the classifier registered under `container_id`.
///
/// Fails with [`OperationError::MissingContainer`] when the id is absent, malformed, or names an
/// element that is not a classifier.
pub fn resolve_container<'a>(
    package: &'a mut EPackage,
    index: &SemanticIndex,
    container_id: Option<&str>,
) -> Result<&'a mut EClassifier, OperationError> {
    let missing = || OperationError::MissingContainer {
        container_id: container_id.unwrap_or_default().to_owned(),
    };
    let raw = container_id.ok_or_else(missing)?;
    let id = ElementId::new(raw).map_err(|_| missing())?;
    match index.location(&id) {
        Some(ElementLocation::Classifier) => package.classifier_mut(&id).ok_or_else(missing),
        _ => Err(missing()),
    }
}

/// Handles `createNode` requests for attributes, operations and enum literals.
///
/// Only (attribute, class) and (literal, enum) create anything. Operations in classes are claimed
/// but reported as [`ExecuteOutcome::Unsupported`]. Every other pairing is a containment mismatch,
/// reported as [`ExecuteOutcome::Skipped`] or as an error when strict containment is configured.
#[derive(Debug, Clone)]
pub struct CreateClassifierChildNodeHandler {
    name_prefix: String,
    label_kind: LabelKind,
    default_attribute_type: BuiltinType,
    strict_containment: bool,
}

impl Default for CreateClassifierChildNodeHandler {
    fn default() -> Self {
        Self::new(&ServerConfig::default())
    }
}

impl CreateClassifierChildNodeHandler {
    pub fn new(config: &ServerConfig) -> Self {
        Self {
            name_prefix: config.naming().prefix().to_owned(),
            label_kind: config.naming().label_kind(),
            default_attribute_type: config.attributes().default_type(),
            strict_containment: config.operations().strict_containment(),
        }
    }

    /// Names `element` `<prefix><kind><n>` and returns `n`.
    fn set_default_name(
        &self,
        element: &mut dyn NamedElement,
        index: &mut SemanticIndex,
    ) -> Result<i32, IndexError> {
        let prefix = self.name_prefix.as_str();
        let kind = element.kind().name();
        let name_for = |n: i32| format!("{prefix}{kind}{n}");
        let counter = index.counter(&self.label_kind, name_for)?;
        element.set_name(name_for(counter));
        Ok(counter)
    }

    pub fn create_attribute(&self, index: &mut SemanticIndex) -> Result<EAttribute, IndexError> {
        let e_type = TypeRef::Builtin(self.default_attribute_type);
        let mut attribute = EAttribute::new(String::new(), e_type);
        self.set_default_name(&mut attribute, index)?;
        Ok(attribute)
    }

    /// The literal's value is the counter that produced its name suffix.
    pub fn create_enum_literal(
        &self,
        index: &mut SemanticIndex,
    ) -> Result<EEnumLiteral, IndexError> {
        let mut literal = EEnumLiteral::new(String::new(), 0);
        let value = self.set_default_name(&mut literal, index)?;
        literal.set_value(value);
        Ok(literal)
    }

    fn mismatch(
        &self,
        requested: ChildKind,
        container: &EClassifier,
    ) -> Result<ExecuteOutcome, OperationError> {
        let mismatch = KindMismatch {
            requested: requested.element_type(),
            container_id: container.id().clone(),
            container_kind: container.kind(),
        };
        tracing::warn!(
            requested = %mismatch.requested,
            container_id = %mismatch.container_id,
            container_kind = %mismatch.container_kind,
            strict = self.strict_containment,
            "child kind not accepted by container"
        );
        if self.strict_containment {
            return Err(OperationError::KindMismatch(mismatch));
        }
        Ok(ExecuteOutcome::Skipped(mismatch))
    }
}

impl OperationHandler for CreateClassifierChildNodeHandler {
    fn handles(&self, operation: &Operation) -> bool {
        match operation {
            Operation::CreateNode(create) => ChildKind::of(create).is_some(),
            _ => false,
        }
    }

    fn execute(
        &self,
        operation: &Operation,
        state: &mut EcoreModelState,
    ) -> Result<ExecuteOutcome, OperationError> {
        let not_handled = OperationError::NotHandled {
            handler: HANDLER_NAME,
            operation: operation.kind_name(),
        };
        let Operation::CreateNode(create) = operation else {
            return Err(not_handled);
        };
        let Some(requested) = ChildKind::of(create) else {
            return Err(not_handled);
        };

        let (package, index) = state.parts_mut();
        let container = match resolve_container(package, index, create.container_id.as_deref()) {
            Ok(container) => container,
            Err(err) => {
                tracing::warn!(error = %err, "create child node rejected");
                return Err(err);
            }
        };
        let container_id = container.id().clone();

        let (element_id, kind, name) = match (requested, container) {
            (ChildKind::Attribute, EClassifier::Class(class)) => {
                let attribute = self.create_attribute(index)?;
                let owner = container_id.clone();
                let element_id = index.add(&attribute, ElementLocation::Feature { owner });
                let name = attribute.name().to_owned();
                let feature = EStructuralFeature::Attribute(attribute);
                class.structural_features_mut().push(feature);
                (element_id, ElementKind::Attribute, name)
            }
            (ChildKind::EnumLiteral, EClassifier::Enum(eenum)) => {
                let literal = self.create_enum_literal(index)?;
                let owner = container_id.clone();
                let element_id = index.add(&literal, ElementLocation::Literal { owner });
                let name = literal.name().to_owned();
                eenum.literals_mut().push(literal);
                (element_id, ElementKind::EnumLiteral, name)
            }
            (ChildKind::Operation, EClassifier::Class(_)) => {
                tracing::info!(container_id = %container_id, "operation creation not supported");
                return Ok(ExecuteOutcome::Unsupported(UnsupportedChild {
                    requested: requested.element_type(),
                    container_id,
                }));
            }
            (_, container) => return self.mismatch(requested, container),
        };

        tracing::debug!(
            element_id = %element_id,
            container_id = %container_id,
            kind = %kind,
            name = %name,
            "created classifier child"
        );
        Ok(ExecuteOutcome::Created(CreatedElement {
            element_id,
            container_id,
            kind,
            name,
        }))
    }

    fn label(&self, _operation: &Operation) -> &str {
        LABEL
    }
}
