/// User model
///
/// A user owns an ordered list of todos and carries the pro-plan flag that
/// exempts it from the free-tier todo cap. The `username` doubles as the
/// request identity token: clients send it in the `username` header and the
/// access gates resolve it against the store.
///
/// # Example
///
/// ```
/// use taskcap_shared::models::user::{CreateUser, User};
///
/// let user = User::new(CreateUser {
///     name: "John Doe".to_string(),
///     username: "johndoe".to_string(),
/// });
///
/// assert!(!user.pro);
/// assert!(user.todos.is_empty());
/// ```

use crate::models::todo::Todo;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User record
///
/// `username` is unique across all users, enforced by the store at creation
/// time. `pro` only ever transitions false → true.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique user ID (UUID v4), generated at creation
    pub id: Uuid,

    /// Display name
    pub name: String,

    /// Unique username, used as the de facto identity token
    pub username: String,

    /// Pro plan flag; pro users have no todo cap
    pub pro: bool,

    /// Owned todos, in creation order
    pub todos: Vec<Todo>,
}

/// Input for creating a new user
///
/// Both fields are required plain strings; the service applies no format
/// validation to either.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Display name
    pub name: String,

    /// Requested username (must not already be taken)
    pub username: String,
}

impl User {
    /// Creates a new user record with a fresh ID and defaults
    ///
    /// New users start on the free plan with an empty todo list. Uniqueness
    /// of the username is the store's responsibility, not this constructor's.
    pub fn new(data: CreateUser) -> Self {
        User {
            id: Uuid::new_v4(),
            name: data.name,
            username: data.username,
            pro: false,
            todos: Vec::new(),
        }
    }
}
