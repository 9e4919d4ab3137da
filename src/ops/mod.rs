// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Nereid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Operations against a diagram's semantic model.
//!
//! An [`Operation`] arrives from a client, the [`OperationHandlerRegistry`] picks the first
//! [`OperationHandler`] that claims it, and the handler mutates the [`EcoreModelState`] in place.
//! Handlers validate everything before their first mutation, so a failed operation leaves the
//! state untouched.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::config::ServerConfig;
use crate::model::{EcoreModelState, ElementId, ElementKind, IndexError};

mod classifier_child;
mod element_type;

pub use classifier_child::{resolve_container, ChildKind, CreateClassifierChildNodeHandler};
pub use element_type::{ElementType, UnknownElementType};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateNodeOperation {
    pub element_type_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Point>,
}

impl CreateNodeOperation {
    pub fn new(element_type: ElementType, container_id: impl Into<String>) -> Self {
        Self {
            element_type_id: element_type.as_str().to_owned(),
            container_id: Some(container_id.into()),
            location: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateEdgeOperation {
    pub element_type_id: String,
    pub source_element_id: String,
    pub target_element_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteElementOperation {
    pub element_ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Operation {
    CreateNode(CreateNodeOperation),
    CreateEdge(CreateEdgeOperation),
    DeleteElement(DeleteElementOperation),
}

impl Operation {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::CreateNode(_) => "createNode",
            Self::CreateEdge(_) => "createEdge",
            Self::DeleteElement(_) => "deleteElement",
        }
    }
}

/// A child the container's variant cannot own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KindMismatch {
    pub requested: ElementType,
    pub container_id: ElementId,
    pub container_kind: ElementKind,
}

impl fmt::Display for KindMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} cannot be created in {} {}",
            self.requested, self.container_kind, self.container_id
        )
    }
}

/// A child the container could own but that has no creation rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsupportedChild {
    pub requested: ElementType,
    pub container_id: ElementId,
}

impl fmt::Display for UnsupportedChild {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "creating {} in {} is not supported",
            self.requested, self.container_id
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedElement {
    pub element_id: ElementId,
    pub container_id: ElementId,
    pub kind: ElementKind,
    pub name: String,
}

/// Result of an operation that did not fail.
///
/// `Skipped` and `Unsupported` leave the model untouched and are still a success for the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecuteOutcome {
    Created(CreatedElement),
    Skipped(KindMismatch),
    Unsupported(UnsupportedChild),
}

impl ExecuteOutcome {
    pub fn created(&self) -> Option<&CreatedElement> {
        match self {
            Self::Created(created) => Some(created),
            Self::Skipped(_) | Self::Unsupported(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OperationError {
    #[error("No valid container with id {container_id} found")]
    MissingContainer { container_id: String },
    #[error("{0}")]
    KindMismatch(KindMismatch),
    #[error("{handler} cannot execute {operation} operations of this element type")]
    NotHandled {
        handler: &'static str,
        operation: &'static str,
    },
    #[error("no handler registered for {operation} operation")]
    UnhandledOperation { operation: &'static str },
    #[error(transparent)]
    Index(#[from] IndexError),
}

pub trait OperationHandler {
    /// Whether this handler claims `operation`. Must be free of side effects.
    fn handles(&self, operation: &Operation) -> bool;

    fn execute(
        &self,
        operation: &Operation,
        state: &mut EcoreModelState,
    ) -> Result<ExecuteOutcome, OperationError>;

    /// Human-readable description for UI and audit layers.
    fn label(&self, operation: &Operation) -> &str;
}

#[derive(Default)]
pub struct OperationHandlerRegistry {
    handlers: Vec<Box<dyn OperationHandler>>,
}

impl OperationHandlerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_default_handlers(config: &ServerConfig) -> Self {
        let mut registry = Self::new();
        registry.register(CreateClassifierChildNodeHandler::new(config));
        registry
    }

    pub fn register(&mut self, handler: impl OperationHandler + 'static) {
        self.handlers.push(Box::new(handler));
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// First registered handler that claims `operation`.
    pub fn handler_for(&self, operation: &Operation) -> Option<&dyn OperationHandler> {
        for handler in &self.handlers {
            if handler.handles(operation) {
                return Some(handler.as_ref());
            }
        }
        None
    }

    pub fn execute(
        &self,
        operation: &Operation,
        state: &mut EcoreModelState,
    ) -> Result<ExecuteOutcome, OperationError> {
        let Some(handler) = self.handler_for(operation) else {
            let operation = operation.kind_name();
            tracing::warn!(operation, "no handler for operation");
            return Err(OperationError::UnhandledOperation { operation });
        };
        tracing::debug!(label = handler.label(operation), "executing operation");
        handler.execute(operation, state)
    }
}
