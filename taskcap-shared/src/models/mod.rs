/// Domain models for TaskCap
///
/// This module contains the two entity types the service manages and their
/// input structs.
///
/// # Models
///
/// - `user`: User accounts with their owned todo lists
/// - `todo`: Todo items, owned by exactly one user

pub mod todo;
pub mod user;
