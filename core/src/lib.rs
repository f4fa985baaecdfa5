//! Domain core for the todo service.
//!
//! # Overview
//! Holds the `Todo` record, the in-memory `TodoStore`, and the `TodoService`
//! that performs list / get / create / update / delete against it. Nothing in
//! this crate knows about HTTP; the server crate maps results onto routes and
//! status codes.
//!
//! # Design
//! - The store is an ordered `Vec` behind a single async `RwLock`. Every
//!   service operation holds the lock for its full read-modify-write sequence.
//! - Identifier generation and the wall clock are traits (`IdGenerator`,
//!   `Clock`) so tests can inject deterministic implementations.
//! - Timestamps stay opaque strings on the wire.

pub mod clock;
pub mod error;
pub mod id;
pub mod seed;
pub mod service;
pub mod store;
pub mod types;

pub use clock::{Clock, SystemClock};
pub use error::TodoError;
pub use id::{IdGenerator, UuidGenerator};
pub use service::TodoService;
pub use store::{TodoStore, Todos};
pub use types::{Todo, TodoPayload};
