//! Example records loaded at startup.

use crate::types::TodoPayload;

/// Names of the records every fresh process starts with.
pub const SEED_NAMES: [&str; 5] = [
    "Learn Rust",
    "Build a web server",
    "Implement authentication",
    "Deploy to production",
    "Write documentation",
];

/// Payloads for the startup records, in display order.
pub fn default_payloads() -> Vec<TodoPayload> {
    SEED_NAMES
        .iter()
        .map(|name| TodoPayload {
            name: (*name).to_string(),
            description: "Description".to_string(),
            completed: false,
        })
        .collect()
}
