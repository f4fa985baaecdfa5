//! Domain DTOs for the todo API.
//!
//! # Design
//! `Todo` is both the stored record and the response body. `TodoPayload` is
//! the request body for create and update: every field is optional and
//! unknown fields are ignored, so a client that echoes back a full `Todo`
//! (including `id` and timestamps) is accepted and those fields are dropped.

use serde::{Deserialize, Serialize};

/// A single todo record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: String,
    pub name: String,
    pub description: String,
    pub created_at: String,
    pub updated_at: String,
    pub completed: bool,
}

/// Request body for creating or fully replacing a todo.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TodoPayload {
    pub name: String,
    pub description: String,
    pub completed: bool,
}

impl Todo {
    /// Builds a fresh record from a payload. `created_at` and `updated_at`
    /// both take `now`.
    pub fn from_payload(id: String, payload: TodoPayload, now: String) -> Self {
        Self {
            id,
            name: payload.name,
            description: payload.description,
            created_at: now.clone(),
            updated_at: now,
            completed: payload.completed,
        }
    }

    /// Returns the replacement for `self`: mutable fields come from the
    /// payload, `id` and `created_at` are carried over.
    pub fn replaced_by(&self, payload: TodoPayload, now: String) -> Self {
        Self {
            id: self.id.clone(),
            name: payload.name,
            description: payload.description,
            created_at: self.created_at.clone(),
            updated_at: now,
            completed: payload.completed,
        }
    }
}
