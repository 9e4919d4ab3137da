// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Nereid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Ecore diagram server core: semantic model, semantic index and node-creation operations.
//!
//! A client sends an [`ops::Operation`]; the [`ops::OperationHandlerRegistry`] routes it to a
//! handler which mutates the [`model::EcoreModelState`] of the open diagram.

pub mod action;
pub mod config;
pub mod model;
pub mod ops;
