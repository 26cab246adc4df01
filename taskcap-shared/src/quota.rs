/// Quota enforcement for the free-plan todo cap
///
/// The free plan caps a user at 10 todos; the pro plan is unlimited. The cap
/// counts all of a user's todos, done or not, and is checked on creation
/// only; a list already at or over the cap is never truncated.
///
/// # Quota Limits by Plan
///
/// **Free Plan:**
/// - Todos: 10
///
/// **Pro Plan:**
/// - Todos: unlimited
///
/// # Example
///
/// ```
/// use taskcap_shared::models::user::{CreateUser, User};
/// use taskcap_shared::quota;
///
/// let user = User::new(CreateUser {
///     name: "John".to_string(),
///     username: "john".to_string(),
/// });
///
/// // Fresh free-plan user is well within quota
/// assert!(quota::enforce(&user).is_ok());
/// ```

use crate::models::user::User;
use thiserror::Error;

/// Todo cap for free-plan users
pub const FREE_PLAN_TODO_LIMIT: usize = 10;

/// Quota enforcement error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuotaError {
    /// The free-plan todo cap has been reached
    #[error("This user has exceeded the free plan limit.")]
    LimitExceeded {
        /// Todos the user currently holds
        current: usize,

        /// The cap that was hit
        limit: usize,
    },
}

/// Billing plan, derived from the user's pro flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Plan {
    /// Default plan, capped todos
    Free,

    /// Unlimited todos
    Pro,
}

impl Plan {
    /// Plan the user is on
    pub fn for_user(user: &User) -> Self {
        if user.pro {
            Plan::Pro
        } else {
            Plan::Free
        }
    }
}

/// Quota limits configuration
#[derive(Debug, Clone, Copy)]
pub struct QuotaLimits {
    /// Maximum todos, `None` meaning unlimited
    pub todos: Option<usize>,
}

impl QuotaLimits {
    /// Gets quota limits for a plan
    pub fn for_plan(plan: Plan) -> Self {
        match plan {
            Plan::Free => QuotaLimits {
                todos: Some(FREE_PLAN_TODO_LIMIT),
            },
            Plan::Pro => QuotaLimits { todos: None },
        }
    }
}

/// Result of a quota check
#[derive(Debug, Clone)]
pub struct QuotaCheckResult {
    /// Whether the user may create another todo
    pub allowed: bool,

    /// Current todo count
    pub current: usize,

    /// Applicable cap, `None` meaning unlimited
    pub limit: Option<usize>,

    /// Remaining headroom, `None` meaning unlimited
    pub remaining: Option<usize>,
}

/// Checks whether a user may create another todo
///
/// Pro users are always allowed, regardless of count.
pub fn check(user: &User) -> QuotaCheckResult {
    let current = user.todos.len();
    let limits = QuotaLimits::for_plan(Plan::for_user(user));

    match limits.todos {
        None => QuotaCheckResult {
            allowed: true,
            current,
            limit: None,
            remaining: None,
        },
        Some(limit) => QuotaCheckResult {
            allowed: current < limit,
            current,
            limit: Some(limit),
            remaining: Some(limit.saturating_sub(current)),
        },
    }
}

/// Enforces the quota, erroring when the cap is reached
///
/// # Errors
///
/// Returns `QuotaError::LimitExceeded` if the user is on the free plan and
/// already holds at least the cap.
pub fn enforce(user: &User) -> Result<(), QuotaError> {
    let result = check(user);

    if !result.allowed {
        return Err(QuotaError::LimitExceeded {
            current: result.current,
            // allowed is only false when a limit applies
            limit: result.limit.unwrap_or(FREE_PLAN_TODO_LIMIT),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::todo::{CreateTodo, Todo};
    use crate::models::user::CreateUser;
    use chrono::Utc;

    fn user_with_todos(pro: bool, count: usize) -> User {
        let mut user = User::new(CreateUser {
            name: "Test".to_string(),
            username: "test".to_string(),
        });
        user.pro = pro;
        for i in 0..count {
            user.todos.push(Todo::new(CreateTodo {
                title: format!("todo {}", i),
                deadline: Utc::now(),
            }));
        }
        user
    }

    #[test]
    fn test_limits_by_plan() {
        assert_eq!(
            QuotaLimits::for_plan(Plan::Free).todos,
            Some(FREE_PLAN_TODO_LIMIT)
        );
        assert_eq!(QuotaLimits::for_plan(Plan::Pro).todos, None);
    }

    #[test]
    fn test_plan_for_user() {
        assert_eq!(Plan::for_user(&user_with_todos(false, 0)), Plan::Free);
        assert_eq!(Plan::for_user(&user_with_todos(true, 0)), Plan::Pro);
    }

    #[test]
    fn test_free_user_below_cap_allowed() {
        let result = check(&user_with_todos(false, 9));
        assert!(result.allowed);
        assert_eq!(result.current, 9);
        assert_eq!(result.remaining, Some(1));
    }

    #[test]
    fn test_free_user_at_cap_blocked() {
        let result = check(&user_with_todos(false, 10));
        assert!(!result.allowed);
        assert_eq!(result.remaining, Some(0));

        let err = enforce(&user_with_todos(false, 10)).unwrap_err();
        assert_eq!(
            err,
            QuotaError::LimitExceeded {
                current: 10,
                limit: 10,
            }
        );
    }

    #[test]
    fn test_pro_user_unlimited() {
        // Pro users pass even well past the free cap
        let result = check(&user_with_todos(true, 25));
        assert!(result.allowed);
        assert_eq!(result.limit, None);

        assert!(enforce(&user_with_todos(true, 25)).is_ok());
    }

    #[test]
    fn test_quota_error_message() {
        let err = QuotaError::LimitExceeded {
            current: 10,
            limit: 10,
        };
        assert_eq!(
            err.to_string(),
            "This user has exceeded the free plan limit."
        );
    }
}
