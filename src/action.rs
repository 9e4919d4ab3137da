// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Nereid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! JSON action surface: one operation in, one response out.
//!
//! Requests are [`Operation`]s tagged by `kind`. Responses are tagged by `status`.

use schemars::{JsonSchema, Schema};
use serde::{Deserialize, Serialize};

use crate::model::EcoreModelState;
use crate::ops::{ExecuteOutcome, Operation, OperationError, OperationHandlerRegistry};

#[derive(Debug, thiserror::Error)]
pub enum ActionError {
    #[error("malformed action: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Operation(#[from] OperationError),
}

impl ActionError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Parse(_) => ErrorCode::MalformedAction,
            Self::Operation(err) => match err {
                OperationError::MissingContainer { .. } => ErrorCode::MissingContainer,
                OperationError::KindMismatch(_) => ErrorCode::KindMismatch,
                OperationError::NotHandled { .. } | OperationError::UnhandledOperation { .. } => {
                    ErrorCode::Unhandled
                }
                OperationError::Index(_) => ErrorCode::Index,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    MalformedAction,
    MissingContainer,
    KindMismatch,
    Unhandled,
    Index,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum ActionResponse {
    #[serde(rename_all = "camelCase")]
    Created {
        label: String,
        element_id: String,
        container_id: String,
        kind: String,
        name: String,
    },
    #[serde(rename_all = "camelCase")]
    Skipped {
        label: String,
        requested: String,
        container_id: String,
        container_kind: String,
    },
    #[serde(rename_all = "camelCase")]
    Unsupported {
        label: String,
        requested: String,
        container_id: String,
    },
    Error {
        code: ErrorCode,
        message: String,
    },
}

impl ActionResponse {
    fn from_outcome(label: String, outcome: ExecuteOutcome) -> Self {
        match outcome {
            ExecuteOutcome::Created(created) => Self::Created {
                label,
                element_id: created.element_id.into_string(),
                container_id: created.container_id.into_string(),
                kind: created.kind.name().to_owned(),
                name: created.name,
            },
            ExecuteOutcome::Skipped(mismatch) => Self::Skipped {
                label,
                requested: mismatch.requested.as_str().to_owned(),
                container_id: mismatch.container_id.into_string(),
                container_kind: mismatch.container_kind.name().to_owned(),
            },
            ExecuteOutcome::Unsupported(unsupported) => Self::Unsupported {
                label,
                requested: unsupported.requested.as_str().to_owned(),
                container_id: unsupported.container_id.into_string(),
            },
        }
    }

    fn from_error(err: &ActionError) -> Self {
        Self::Error {
            code: err.code(),
            message: err.to_string(),
        }
    }
}

pub fn parse_operation(line: &str) -> Result<Operation, ActionError> {
    Ok(serde_json::from_str(line)?)
}

pub fn apply_operation(
    registry: &OperationHandlerRegistry,
    state: &mut EcoreModelState,
    operation: &Operation,
) -> Result<ActionResponse, ActionError> {
    let label = registry
        .handler_for(operation)
        .map(|handler| handler.label(operation).to_owned())
        .unwrap_or_default();
    let outcome = registry.execute(operation, state)?;
    Ok(ActionResponse::from_outcome(label, outcome))
}

/// Parses and applies one JSON action. Failures become [`ActionResponse::Error`].
pub fn handle_action(
    registry: &OperationHandlerRegistry,
    state: &mut EcoreModelState,
    line: &str,
) -> ActionResponse {
    match parse_and_apply(registry, state, line) {
        Ok(response) => response,
        Err(err) => ActionResponse::from_error(&err),
    }
}

fn parse_and_apply(
    registry: &OperationHandlerRegistry,
    state: &mut EcoreModelState,
    line: &str,
) -> Result<ActionResponse, ActionError> {
    let operation = parse_operation(line)?;
    apply_operation(registry, state, &operation)
}

pub fn operation_schema() -> Schema {
    schemars::schema_for!(Operation)
}

#[cfg(test)]
mod tests {
    use super::{handle_action, operation_schema, ActionError, ActionResponse, ErrorCode};
    use crate::config::ServerConfig;
    use crate::model::{library_package, EcoreModelState, IndexError, LabelKind};
    use crate::ops::{OperationError, OperationHandlerRegistry};

    fn setup() -> (OperationHandlerRegistry, EcoreModelState) {
        let registry = OperationHandlerRegistry::with_default_handlers(&ServerConfig::default());
        let state = EcoreModelState::from_package(library_package()).expect("state");
        (registry, state)
    }

    #[test]
    fn create_attribute_action_reports_created_element() {
        let (registry, mut state) = setup();

        let response = handle_action(
            &registry,
            &mut state,
            r#"{"kind":"createNode","elementTypeId":"node:attribute","containerId":"c:book"}"#,
        );

        let ActionResponse::Created {
            label,
            container_id,
            kind,
            name,
            ..
        } = response
        else {
            panic!("expected created response");
        };
        assert_eq!(label, "Create EClassifier child node");
        assert_eq!(container_id, "c:book");
        assert_eq!(kind, "EAttribute");
        assert_eq!(name, "NewEAttribute0");
    }

    #[test]
    fn skipped_action_is_not_an_error() {
        let (registry, mut state) = setup();

        let response = handle_action(
            &registry,
            &mut state,
            r#"{"kind":"createNode","elementTypeId":"node:attribute","containerId":"e:genre"}"#,
        );

        assert_eq!(
            response,
            ActionResponse::Skipped {
                label: "Create EClassifier child node".to_owned(),
                requested: "node:attribute".to_owned(),
                container_id: "e:genre".to_owned(),
                container_kind: "EEnum".to_owned(),
            }
        );
    }

    #[test]
    fn operation_in_class_is_reported_as_unsupported() {
        let (registry, mut state) = setup();

        let response = handle_action(
            &registry,
            &mut state,
            r#"{"kind":"createNode","elementTypeId":"node:operation","containerId":"c:book"}"#,
        );

        assert_eq!(
            response,
            ActionResponse::Unsupported {
                label: "Create EClassifier child node".to_owned(),
                requested: "node:operation".to_owned(),
                container_id: "c:book".to_owned(),
            }
        );
        let json = serde_json::to_value(&response).expect("serialize");
        assert_eq!(json["status"], "unsupported");
    }

    #[test]
    fn failures_carry_error_codes() {
        let (registry, mut state) = setup();

        let missing = handle_action(
            &registry,
            &mut state,
            r#"{"kind":"createNode","elementTypeId":"node:enumliteral","containerId":"e:nope"}"#,
        );
        assert_eq!(
            missing,
            ActionResponse::Error {
                code: ErrorCode::MissingContainer,
                message: "No valid container with id e:nope found".to_owned(),
            }
        );

        let malformed = handle_action(&registry, &mut state, "{not json");
        assert!(matches!(
            malformed,
            ActionResponse::Error {
                code: ErrorCode::MalformedAction,
                ..
            }
        ));

        let unclaimed = handle_action(
            &registry,
            &mut state,
            r#"{"kind":"deleteElement","elementIds":["c:book"]}"#,
        );
        assert!(matches!(
            unclaimed,
            ActionResponse::Error {
                code: ErrorCode::Unhandled,
                ..
            }
        ));
    }

    #[test]
    fn index_failures_have_their_own_code() {
        let exhausted = IndexError::CounterExhausted {
            label_kind: LabelKind::LABEL,
        };
        let err = ActionError::Operation(OperationError::Index(exhausted));

        assert_eq!(err.code(), ErrorCode::Index);
        assert_eq!(err.to_string(), "counter 'label' has no free value left");
    }

    #[test]
    fn response_uses_status_tag() {
        let response = ActionResponse::Error {
            code: ErrorCode::KindMismatch,
            message: "m".to_owned(),
        };
        let json = serde_json::to_value(&response).expect("serialize");
        assert_eq!(json["status"], "error");
        assert_eq!(json["code"], "kind_mismatch");
    }

    #[test]
    fn schema_lists_operation_kinds() {
        let schema = serde_json::to_string(&operation_schema()).expect("schema json");
        for kind in ["createNode", "createEdge", "deleteElement"] {
            assert!(schema.contains(kind), "schema should mention {kind}");
        }
    }
}
