use crate::server::{
    data::user::UserRepository,
    model::user::{CreateUserParam, HalalPreferences, UpdateCustomerParam},
};
use chrono::{Duration, Utc};
use entity::user::Role;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod clear_expired_reset_tokens;
mod create;
mod delete_with_role;
mod find_by_reset_token;
mod find_unverified_by_contact;
mod get_by_role;
mod set_password;
mod update_customer;
