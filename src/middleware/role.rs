//! Role-based authorization middleware.
//!
//! Routers attach one of the `require_*` functions with
//! `middleware::from_fn_with_state` as a `route_layer`. The gate extracts
//! and verifies the bearer token, checks the claimed role against the
//! allowed set, and only then forwards to the handler. It is stateless and
//! adds nothing to the request beyond what [`AuthUser`] re-derives.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::Response,
};

use crate::middleware::auth::AuthUser;
use crate::modules::users::model::UserRole;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Forwards the request when the claimed role is in `allowed_roles`.
///
/// An empty allowed set means "any authenticated user". A missing/invalid
/// token rejects with 401 before any role check; a role mismatch rejects
/// with 403. The handler never runs on either failure.
pub async fn require_roles(
    State(state): State<AppState>,
    req: Request,
    next: Next,
    allowed_roles: &[UserRole],
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let auth_user = AuthUser::from_request_parts(&mut parts, &state).await?;
    check_any_role(&auth_user, allowed_roles)?;

    let req = Request::from_parts(parts, body);
    Ok(next.run(req).await)
}

/// Admin-only routes (user management, messages, blogs, courses).
pub async fn require_admin(
    state: State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    require_roles(state, req, next, &[UserRole::Admin]).await
}

/// Staff routes: lesson management is open to admins and teachers, with
/// ownership checked separately in the lesson service.
pub async fn require_staff(
    state: State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    require_roles(state, req, next, &[UserRole::Admin, UserRole::Teacher]).await
}

/// Student-only routes (progress tracking).
pub async fn require_student(
    state: State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    require_roles(state, req, next, &[UserRole::Student]).await
}

/// Checks a verified claim against an allowed role set. Empty set forwards.
pub fn check_any_role(auth_user: &AuthUser, allowed_roles: &[UserRole]) -> Result<(), AppError> {
    if allowed_roles.is_empty() {
        return Ok(());
    }

    let user_role = UserRole::parse(auth_user.role())
        .ok_or_else(|| AppError::forbidden(anyhow::anyhow!("Unknown role in token")))?;

    if !allowed_roles.contains(&user_role) {
        return Err(AppError::forbidden(anyhow::anyhow!("Forbidden")));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::model::Claims;

    fn auth_user_with_role(role: &str) -> AuthUser {
        AuthUser(Claims {
            sub: uuid::Uuid::new_v4().to_string(),
            username: "test".to_string(),
            role: role.to_string(),
            exp: 9999999999,
            iat: 1234567890,
        })
    }

    #[test]
    fn test_role_in_allowed_set_forwards() {
        let user = auth_user_with_role("teacher");
        assert!(check_any_role(&user, &[UserRole::Admin, UserRole::Teacher]).is_ok());
    }

    #[test]
    fn test_role_outside_allowed_set_forbids() {
        let user = auth_user_with_role("student");
        assert!(check_any_role(&user, &[UserRole::Admin, UserRole::Teacher]).is_err());
    }

    #[test]
    fn test_empty_allowed_set_forwards_any_role() {
        for role in ["admin", "teacher", "student"] {
            let user = auth_user_with_role(role);
            assert!(check_any_role(&user, &[]).is_ok());
        }
    }

    #[test]
    fn test_unknown_role_string_forbids() {
        let user = auth_user_with_role("visitor");
        assert!(check_any_role(&user, &[UserRole::Student]).is_err());
    }
}
