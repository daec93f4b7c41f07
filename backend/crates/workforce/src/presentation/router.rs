//! Workforce Routers
//!
//! Every route declares the roles allowed to reach it. Authentication wraps
//! the whole router and runs before the role gate.

use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{MethodRouter, get, post, put},
};

use auth::application::access::RoleSet;
use auth::domain::repository::UserRepository;
use auth::middleware::{AuthMiddlewareState, require_auth, require_roles};

use crate::domain::repository::ProjectRepository;
use crate::presentation::handlers::{self, WorkforceAppState};

fn allow<S>(roles: RoleSet, route: MethodRouter<S>) -> MethodRouter<S>
where
    S: Clone + Send + Sync + 'static,
{
    route.route_layer(from_fn_with_state(roles, require_roles))
}

/// Project routes, mounted under `/api/project`
pub fn project_router<U, P>(state: WorkforceAppState<U, P>) -> Router
where
    U: UserRepository + Send + Sync + 'static,
    P: ProjectRepository + Send + Sync + 'static,
{
    let auth_state = AuthMiddlewareState::new(state.users.clone(), state.config.clone());

    Router::new()
        .route(
            "/all",
            allow(RoleSet::MEMBERS, get(handlers::list_projects::<U, P>)),
        )
        .route(
            "/",
            allow(RoleSet::MANAGER, post(handlers::create_project::<U, P>)),
        )
        .route(
            "/{id}",
            allow(RoleSet::MEMBERS, get(handlers::get_project::<U, P>)).merge(allow(
                RoleSet::MANAGER,
                put(handlers::update_project::<U, P>).delete(handlers::delete_project::<U, P>),
            )),
        )
        .route_layer(from_fn_with_state(auth_state, require_auth::<U>))
        .with_state(state)
}

/// User routes, mounted under `/api/user`
pub fn user_router<U, P>(state: WorkforceAppState<U, P>) -> Router
where
    U: UserRepository + Send + Sync + 'static,
    P: ProjectRepository + Send + Sync + 'static,
{
    let auth_state = AuthMiddlewareState::new(state.users.clone(), state.config.clone());

    Router::new()
        .route(
            "/all",
            allow(RoleSet::MEMBERS, get(handlers::list_employees::<U, P>)),
        )
        .route(
            "/manager",
            allow(RoleSet::MEMBERS, get(handlers::get_manager::<U, P>)),
        )
        .route(
            "/",
            allow(RoleSet::MANAGER, post(handlers::create_employee::<U, P>)),
        )
        .route(
            "/{id}",
            allow(RoleSet::MEMBERS, get(handlers::get_employee::<U, P>)).merge(allow(
                RoleSet::MANAGER,
                axum::routing::delete(handlers::delete_employee::<U, P>),
            )),
        )
        .route_layer(from_fn_with_state(auth_state, require_auth::<U>))
        .with_state(state)
}
