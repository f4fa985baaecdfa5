//! Todo operations over the shared store.
//!
//! # Design
//! `TodoService` bundles the store with an `IdGenerator` and a `Clock`. It is
//! cheap to clone; clones share the same store. Update and delete take the
//! write guard once, so the lookup and the mutation cannot interleave with
//! another writer.

use std::sync::Arc;

use crate::clock::{Clock, SystemClock};
use crate::error::TodoError;
use crate::id::{IdGenerator, UuidGenerator};
use crate::seed;
use crate::store::TodoStore;
use crate::types::{Todo, TodoPayload};

#[derive(Clone)]
pub struct TodoService {
    store: TodoStore,
    ids: Arc<dyn IdGenerator>,
    clock: Arc<dyn Clock>,
}

impl TodoService {
    pub fn new(store: TodoStore, ids: Arc<dyn IdGenerator>, clock: Arc<dyn Clock>) -> Self {
        Self { store, ids, clock }
    }

    /// Empty store, random UUIDs, system clock.
    pub fn empty() -> Self {
        Self::new(
            TodoStore::new(),
            Arc::new(UuidGenerator),
            Arc::new(SystemClock),
        )
    }

    /// Same as [`TodoService::empty`], preloaded with the example records.
    pub async fn seeded() -> Self {
        let service = Self::empty();
        service.seed(seed::default_payloads()).await;
        service
    }

    /// Appends one fresh record per payload.
    pub async fn seed(&self, payloads: Vec<TodoPayload>) {
        let mut todos = self.store.write().await;
        for payload in payloads {
            todos.append(Todo::from_payload(
                self.ids.generate(),
                payload,
                self.clock.now(),
            ));
        }
        tracing::debug!(count = todos.len(), "seeded todo store");
    }

    pub async fn list(&self) -> Vec<Todo> {
        self.store.snapshot().await
    }

    pub async fn get(&self, id: &str) -> Result<Todo, TodoError> {
        self.store
            .read()
            .await
            .find(id)
            .cloned()
            .ok_or_else(|| TodoError::not_found(id))
    }

    pub async fn create(&self, payload: TodoPayload) -> Todo {
        let todo = Todo::from_payload(self.ids.generate(), payload, self.clock.now());
        self.store.write().await.append(todo.clone());
        todo
    }

    /// Fully replaces the mutable fields of the record matching `id`.
    pub async fn update(&self, id: &str, payload: TodoPayload) -> Result<Todo, TodoError> {
        let mut todos = self.store.write().await;
        let updated = todos
            .find(id)
            .map(|existing| existing.replaced_by(payload, self.clock.now()))
            .ok_or_else(|| TodoError::not_found(id))?;
        todos.replace(id, updated.clone());
        Ok(updated)
    }

    pub async fn delete(&self, id: &str) -> Result<Todo, TodoError> {
        self.store
            .write()
            .await
            .remove(id)
            .ok_or_else(|| TodoError::not_found(id))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU64, Ordering};

    use super::*;

    /// Issues `id-0`, `id-1`, ...
    #[derive(Default)]
    struct SequentialIds(AtomicU64);

    impl IdGenerator for SequentialIds {
        fn generate(&self) -> String {
            format!("id-{}", self.0.fetch_add(1, Ordering::SeqCst))
        }
    }

    /// Advances one tick per reading.
    #[derive(Default)]
    struct TickClock(AtomicU64);

    impl Clock for TickClock {
        fn now(&self) -> String {
            format!("t{:04}", self.0.fetch_add(1, Ordering::SeqCst))
        }
    }

    fn service() -> TodoService {
        TodoService::new(
            TodoStore::new(),
            Arc::new(SequentialIds::default()),
            Arc::new(TickClock::default()),
        )
    }

    fn payload(name: &str) -> TodoPayload {
        TodoPayload {
            name: name.to_string(),
            description: format!("{name} description"),
            completed: false,
        }
    }

    #[tokio::test]
    async fn create_stamps_both_timestamps_from_one_reading() {
        let svc = service();
        let todo = svc.create(payload("X")).await;
        assert_eq!(todo.id, "id-0");
        assert_eq!(todo.created_at, "t0000");
        assert_eq!(todo.updated_at, todo.created_at);
        assert_eq!(svc.get("id-0").await.unwrap(), todo);
    }

    #[tokio::test]
    async fn update_keeps_id_and_created_at() {
        let svc = service();
        let created = svc.create(payload("before")).await;
        let updated = svc
            .update(
                &created.id,
                TodoPayload {
                    name: "after".to_string(),
                    description: String::new(),
                    completed: true,
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at > created.updated_at);
        assert_eq!(updated.name, "after");
        assert!(updated.completed);
        assert_eq!(svc.get(&created.id).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn update_keeps_position() {
        let svc = service();
        for name in ["a", "b", "c"] {
            svc.create(payload(name)).await;
        }
        svc.update("id-1", payload("B")).await.unwrap();
        let names: Vec<String> = svc.list().await.into_iter().map(|t| t.name).collect();
        assert_eq!(names, ["a", "B", "c"]);
    }

    #[tokio::test]
    async fn update_missing_is_not_found() {
        let svc = service();
        svc.create(payload("a")).await;
        let err = svc.update("nope", payload("b")).await.unwrap_err();
        assert_eq!(err, TodoError::not_found("nope"));
        assert_eq!(svc.list().await[0].name, "a");
    }

    #[tokio::test]
    async fn delete_removes_exactly_one() {
        let svc = service();
        for name in ["a", "b", "c"] {
            svc.create(payload(name)).await;
        }
        let removed = svc.delete("id-1").await.unwrap();
        assert_eq!(removed.name, "b");
        assert_eq!(svc.list().await.len(), 2);
        assert!(matches!(
            svc.get("id-1").await,
            Err(TodoError::NotFound { .. })
        ));
        assert!(svc.delete("id-1").await.is_err());
        assert_eq!(svc.list().await.len(), 2);
    }

    #[tokio::test]
    async fn seed_appends_in_order() {
        let svc = service();
        svc.seed(seed::default_payloads()).await;
        let todos = svc.list().await;
        assert_eq!(todos.len(), 5);
        assert_eq!(todos[0].name, seed::SEED_NAMES[0]);
        assert_eq!(todos[4].id, "id-4");
    }

    #[tokio::test]
    async fn concurrent_creates_are_all_kept() {
        let svc = TodoService::empty();
        let handles: Vec<_> = (0..50)
            .map(|i| {
                let svc = svc.clone();
                tokio::spawn(async move { svc.create(payload(&format!("todo {i}"))).await })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap();
        }
        assert_eq!(svc.list().await.len(), 50);
    }
}
