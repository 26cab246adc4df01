/// In-memory user registry
///
/// This module provides `UserStore`, the single root of all service state.
/// The store is constructed once at startup and injected into every handler
/// through the application state, so tests get isolation by building a fresh
/// instance each.
///
/// Users are held in a `Vec` behind an async `RwLock`; all lookups are linear
/// scans, which is fine at this scale. Nothing is persisted — state is
/// discarded on process exit.
///
/// # Example
///
/// ```
/// use taskcap_shared::models::user::CreateUser;
/// use taskcap_shared::store::UserStore;
///
/// # async fn example() -> Result<(), taskcap_shared::store::StoreError> {
/// let store = UserStore::new();
///
/// let user = store
///     .create_user(CreateUser {
///         name: "John Doe".to_string(),
///         username: "johndoe".to_string(),
///     })
///     .await?;
///
/// assert_eq!(store.user_by_id(user.id).await.unwrap().username, "johndoe");
/// # Ok(())
/// # }
/// ```

use crate::models::todo::{CreateTodo, Todo, UpdateTodo};
use crate::models::user::{CreateUser, User};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Store operation error
///
/// Display strings double as the wire error messages, so the variants carry
/// whatever the message interpolates.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// A user with the requested username already exists
    #[error("Username already exists")]
    UsernameTaken,

    /// No user matches the supplied username
    #[error("Username: '{0}' not found.")]
    UnknownUsername(String),

    /// No user matches the supplied ID
    #[error("User: '{0}' not found.")]
    UserNotFound(Uuid),

    /// No todo with the supplied ID in the owner's list
    #[error("Todo: '{0}' not found.")]
    TodoNotFound(Uuid),

    /// The user is already on the pro plan
    #[error("Pro plan is already activated.")]
    AlreadyPro,
}

/// In-memory user registry
///
/// Cheap to clone: clones share the same underlying state.
#[derive(Debug, Clone, Default)]
pub struct UserStore {
    users: Arc<RwLock<Vec<User>>>,
}

impl UserStore {
    /// Creates an empty store
    pub fn new() -> Self {
        UserStore::default()
    }

    /// Creates a new user
    ///
    /// # Errors
    ///
    /// Returns `StoreError::UsernameTaken` if the username is already
    /// registered; the registry is left unchanged in that case.
    pub async fn create_user(&self, data: CreateUser) -> Result<User, StoreError> {
        let mut users = self.users.write().await;

        if users.iter().any(|user| user.username == data.username) {
            return Err(StoreError::UsernameTaken);
        }

        let user = User::new(data);
        users.push(user.clone());

        tracing::debug!(user_id = %user.id, username = %user.username, "user stored");

        Ok(user)
    }

    /// Finds a user by ID
    ///
    /// Returns a snapshot clone of the record, or `None` if absent.
    pub async fn user_by_id(&self, id: Uuid) -> Option<User> {
        let users = self.users.read().await;
        users.iter().find(|user| user.id == id).cloned()
    }

    /// Finds a user by exact username match
    pub async fn user_by_username(&self, username: &str) -> Option<User> {
        let users = self.users.read().await;
        users.iter().find(|user| user.username == username).cloned()
    }

    /// Upgrades a user to the pro plan
    ///
    /// The transition is one-way: once pro, a user stays pro.
    ///
    /// # Errors
    ///
    /// - `StoreError::UserNotFound` if no user has this ID
    /// - `StoreError::AlreadyPro` if the user is already on the pro plan
    pub async fn upgrade_to_pro(&self, id: Uuid) -> Result<User, StoreError> {
        let mut users = self.users.write().await;

        let user = users
            .iter_mut()
            .find(|user| user.id == id)
            .ok_or(StoreError::UserNotFound(id))?;

        if user.pro {
            return Err(StoreError::AlreadyPro);
        }

        user.pro = true;

        Ok(user.clone())
    }

    /// Number of registered users
    pub async fn user_count(&self) -> usize {
        self.users.read().await.len()
    }

    /// Returns a user's todos in creation order
    ///
    /// # Errors
    ///
    /// Returns `StoreError::UserNotFound` if the owner is gone.
    pub async fn todos_for_user(&self, user_id: Uuid) -> Result<Vec<Todo>, StoreError> {
        let users = self.users.read().await;

        let user = users
            .iter()
            .find(|user| user.id == user_id)
            .ok_or(StoreError::UserNotFound(user_id))?;

        Ok(user.todos.clone())
    }

    /// Creates a new todo at the end of the user's list
    ///
    /// The plan-limit gate has already run by the time this is called; the
    /// store itself does not re-check the quota.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::UserNotFound` if the owner is gone.
    pub async fn create_todo(
        &self,
        user_id: Uuid,
        data: CreateTodo,
    ) -> Result<Todo, StoreError> {
        let mut users = self.users.write().await;

        let user = users
            .iter_mut()
            .find(|user| user.id == user_id)
            .ok_or(StoreError::UserNotFound(user_id))?;

        let todo = Todo::new(data);
        user.todos.push(todo.clone());

        Ok(todo)
    }

    /// Overwrites a todo's title and deadline in place
    ///
    /// `id`, `done` and `created_at` are untouched.
    ///
    /// # Errors
    ///
    /// - `StoreError::UserNotFound` if the owner is gone
    /// - `StoreError::TodoNotFound` if the todo is not in the owner's list
    pub async fn update_todo(
        &self,
        user_id: Uuid,
        todo_id: Uuid,
        data: UpdateTodo,
    ) -> Result<Todo, StoreError> {
        let mut users = self.users.write().await;

        let user = users
            .iter_mut()
            .find(|user| user.id == user_id)
            .ok_or(StoreError::UserNotFound(user_id))?;

        let todo = user
            .todos
            .iter_mut()
            .find(|todo| todo.id == todo_id)
            .ok_or(StoreError::TodoNotFound(todo_id))?;

        todo.title = data.title;
        todo.deadline = data.deadline;

        Ok(todo.clone())
    }

    /// Marks a todo as done
    ///
    /// Unconditional: marking an already-done todo is a no-op that still
    /// returns the record.
    ///
    /// # Errors
    ///
    /// - `StoreError::UserNotFound` if the owner is gone
    /// - `StoreError::TodoNotFound` if the todo is not in the owner's list
    pub async fn mark_done(&self, user_id: Uuid, todo_id: Uuid) -> Result<Todo, StoreError> {
        let mut users = self.users.write().await;

        let user = users
            .iter_mut()
            .find(|user| user.id == user_id)
            .ok_or(StoreError::UserNotFound(user_id))?;

        let todo = user
            .todos
            .iter_mut()
            .find(|todo| todo.id == todo_id)
            .ok_or(StoreError::TodoNotFound(todo_id))?;

        todo.done = true;

        Ok(todo.clone())
    }

    /// Removes a todo from its owner's list
    ///
    /// The gate resolved the todo earlier in the request, but the record is
    /// re-checked here and `TodoNotFound` is returned if it is already gone.
    ///
    /// # Errors
    ///
    /// - `StoreError::UserNotFound` if the owner is gone
    /// - `StoreError::TodoNotFound` if the todo is not in the owner's list
    pub async fn delete_todo(&self, user_id: Uuid, todo_id: Uuid) -> Result<(), StoreError> {
        let mut users = self.users.write().await;

        let user = users
            .iter_mut()
            .find(|user| user.id == user_id)
            .ok_or(StoreError::UserNotFound(user_id))?;

        let index = user
            .todos
            .iter()
            .position(|todo| todo.id == todo_id)
            .ok_or(StoreError::TodoNotFound(todo_id))?;

        user.todos.remove(index);

        tracing::debug!(user_id = %user_id, todo_id = %todo_id, "todo removed");

        Ok(())
    }
}
