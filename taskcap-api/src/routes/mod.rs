/// API route handlers
///
/// This module contains all route handlers organized by resource:
///
/// - `health`: Health check endpoint
/// - `users`: User registry endpoints (create, get, upgrade to pro)
/// - `todos`: Todo endpoints (list, create, update, mark done, delete)

pub mod health;
pub mod todos;
pub mod users;
