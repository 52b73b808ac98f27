use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::{
        auth::{AuthGuard, Permission},
        session::AuthSession,
    },
};
use entity::user::Role;
use test_utils::{builder::TestBuilder, factory};

mod require;
mod require_owner_or_admin;
