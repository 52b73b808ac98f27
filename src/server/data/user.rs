//! User data repository for database operations.
//!
//! Provides `UserRepository` for every account query: creation, lookups by email, reset token
//! or role, partial updates for each route group, activation toggles and deletion.

use chrono::{DateTime, Utc};
use entity::user::Role;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr,
    EntityTrait, IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::user::{
    CreateUserParam, UpdateAdminParam, UpdateCustomerParam, UpdateProfileParam,
    UpdateWorkerParam, User,
};

/// Repository providing database operations for user accounts.
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new account.
    ///
    /// # Arguments
    /// - `param` - Account fields with an already-hashed password
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error, including a unique violation on `email`
    pub async fn create(&self, param: CreateUserParam) -> Result<User, DbErr> {
        let now = Utc::now();

        let entity = entity::user::ActiveModel {
            first_name: ActiveValue::Set(param.first_name),
            last_name: ActiveValue::Set(param.last_name),
            email: ActiveValue::Set(param.email),
            phone: ActiveValue::Set(param.phone),
            carrier: ActiveValue::Set(param.carrier),
            password: ActiveValue::Set(param.password_hash),
            role: ActiveValue::Set(param.role),
            is_super_admin: ActiveValue::Set(param.is_super_admin),
            is_verified: ActiveValue::Set(param.is_verified),
            is_active: ActiveValue::Set(true),
            gender: ActiveValue::Set(param.gender),
            id_type: ActiveValue::Set(param.id_type),
            id_number: ActiveValue::Set(param.id_number),
            prayer_in_room: ActiveValue::Set(param.halal.prayer_in_room),
            no_alcohol: ActiveValue::Set(param.halal.no_alcohol),
            zabihah_only: ActiveValue::Set(param.halal.zabihah_only),
            special_requests: ActiveValue::Set(param.special_requests),
            position: ActiveValue::Set(param.position),
            department: ActiveValue::Set(param.department),
            invited_by_id: ActiveValue::Set(param.invited_by_id),
            reset_password_token: ActiveValue::Set(None),
            reset_password_expire: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Finds a user by primary key.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(id).one(self.db).await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user by normalized email.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user of the given role.
    ///
    /// Route groups use this so that, for example, the customer routes can never touch an
    /// admin row.
    pub async fn find_by_id_and_role(&self, id: i32, role: Role) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(id)
            .filter(entity::user::Column::Role.eq(role))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds an unverified account by email or phone.
    ///
    /// Used by the unauthenticated OTP request. Returns `None` when neither identifier is
    /// provided.
    pub async fn find_unverified_by_contact(
        &self,
        email: Option<&str>,
        phone: Option<&str>,
    ) -> Result<Option<User>, DbErr> {
        let mut contact = Condition::any();
        if let Some(email) = email {
            contact = contact.add(entity::user::Column::Email.eq(email));
        }
        if let Some(phone) = phone {
            contact = contact.add(entity::user::Column::Phone.eq(phone));
        }
        if contact.is_empty() {
            return Ok(None);
        }

        let entity = entity::prelude::User::find()
            .filter(contact)
            .filter(entity::user::Column::IsVerified.eq(false))
            .order_by_asc(entity::user::Column::Id)
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds the user holding an unexpired password reset token.
    ///
    /// # Arguments
    /// - `token_hash` - SHA-256 hex of the token from the reset link
    /// - `now` - Current time; tokens expiring at or before it are ignored
    pub async fn find_by_reset_token(
        &self,
        token_hash: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::ResetPasswordToken.eq(token_hash))
            .filter(entity::user::Column::ResetPasswordExpire.gt(now))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Gets every account ordered by ID.
    pub async fn get_all(&self) -> Result<Vec<User>, DbErr> {
        let entities = entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(User::from_entity).collect())
    }

    /// Gets every account of one role, newest first.
    pub async fn get_by_role(&self, role: Role) -> Result<Vec<User>, DbErr> {
        let entities = entity::prelude::User::find()
            .filter(entity::user::Column::Role.eq(role))
            .order_by_desc(entity::user::Column::CreatedAt)
            .order_by_desc(entity::user::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(User::from_entity).collect())
    }

    /// Checks whether any admin carries the super-admin flag.
    pub async fn super_admin_exists(&self) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Role.eq(Role::Admin))
            .filter(entity::user::Column::IsSuperAdmin.eq(true))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Applies a self-service profile update.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Updated user
    /// - `Ok(None)` - No user with that ID
    /// - `Err(DbErr)` - Database error
    pub async fn update_profile(
        &self,
        id: i32,
        param: UpdateProfileParam,
    ) -> Result<Option<User>, DbErr> {
        let Some(entity) = entity::prelude::User::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        if let Some(first_name) = param.first_name {
            active.first_name = ActiveValue::Set(first_name);
        }
        if let Some(last_name) = param.last_name {
            active.last_name = ActiveValue::Set(last_name);
        }
        if let Some(phone) = param.phone {
            active.phone = ActiveValue::Set(Some(phone));
        }
        if let Some(carrier) = param.carrier {
            active.carrier = ActiveValue::Set(Some(carrier));
        }
        if let Some(gender) = param.gender {
            active.gender = ActiveValue::Set(Some(gender));
        }
        if let Some(id_type) = param.id_type {
            active.id_type = ActiveValue::Set(Some(id_type));
        }
        if let Some(id_number) = param.id_number {
            active.id_number = ActiveValue::Set(Some(id_number));
        }
        if let Some(prayer_in_room) = param.prayer_in_room {
            active.prayer_in_room = ActiveValue::Set(prayer_in_room);
        }
        if let Some(no_alcohol) = param.no_alcohol {
            active.no_alcohol = ActiveValue::Set(no_alcohol);
        }
        if let Some(zabihah_only) = param.zabihah_only {
            active.zabihah_only = ActiveValue::Set(zabihah_only);
        }
        if let Some(special_requests) = param.special_requests {
            active.special_requests = ActiveValue::Set(Some(special_requests));
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;

        Ok(Some(User::from_entity(entity)))
    }

    /// Replaces a customer's editable columns. Non-customer rows are treated as missing.
    pub async fn update_customer(
        &self,
        id: i32,
        param: UpdateCustomerParam,
    ) -> Result<Option<User>, DbErr> {
        let Some(entity) = entity::prelude::User::find_by_id(id)
            .filter(entity::user::Column::Role.eq(Role::Customer))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        active.first_name = ActiveValue::Set(param.first_name);
        active.last_name = ActiveValue::Set(param.last_name);
        active.email = ActiveValue::Set(param.email);
        active.phone = ActiveValue::Set(Some(param.phone));
        active.gender = ActiveValue::Set(Some(param.gender));
        active.id_type = ActiveValue::Set(Some(param.id_type));
        active.id_number = ActiveValue::Set(Some(param.id_number));
        active.prayer_in_room = ActiveValue::Set(param.halal.prayer_in_room);
        active.no_alcohol = ActiveValue::Set(param.halal.no_alcohol);
        active.zabihah_only = ActiveValue::Set(param.halal.zabihah_only);
        active.special_requests = ActiveValue::Set(Some(param.special_requests));
        active.is_active = ActiveValue::Set(param.is_active);
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;

        Ok(Some(User::from_entity(entity)))
    }

    /// Updates an admin's names and super flag. Non-admin rows are treated as missing.
    pub async fn update_admin(
        &self,
        id: i32,
        param: UpdateAdminParam,
    ) -> Result<Option<User>, DbErr> {
        let Some(entity) = entity::prelude::User::find_by_id(id)
            .filter(entity::user::Column::Role.eq(Role::Admin))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        if let Some(first_name) = param.first_name {
            active.first_name = ActiveValue::Set(first_name);
        }
        if let Some(last_name) = param.last_name {
            active.last_name = ActiveValue::Set(last_name);
        }
        if let Some(is_super_admin) = param.is_super_admin {
            active.is_super_admin = ActiveValue::Set(is_super_admin);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;

        Ok(Some(User::from_entity(entity)))
    }

    /// Updates a worker's position and department. Non-worker rows are treated as missing.
    pub async fn update_worker(
        &self,
        id: i32,
        param: UpdateWorkerParam,
    ) -> Result<Option<User>, DbErr> {
        let Some(entity) = entity::prelude::User::find_by_id(id)
            .filter(entity::user::Column::Role.eq(Role::Worker))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        if let Some(position) = param.position {
            active.position = ActiveValue::Set(Some(position));
        }
        if let Some(department) = param.department {
            active.department = ActiveValue::Set(Some(department));
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;

        Ok(Some(User::from_entity(entity)))
    }

    /// Sets the active flag.
    ///
    /// # Returns
    /// - `Ok(true)` - Row updated
    /// - `Ok(false)` - No user with that ID
    pub async fn set_active(&self, id: i32, is_active: bool) -> Result<bool, DbErr> {
        let result = entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(id))
            .col_expr(entity::user::Column::IsActive, Expr::value(is_active))
            .col_expr(entity::user::Column::UpdatedAt, Expr::value(Utc::now()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Marks the account's email as verified.
    pub async fn set_verified(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(id))
            .col_expr(entity::user::Column::IsVerified, Expr::value(true))
            .col_expr(entity::user::Column::UpdatedAt, Expr::value(Utc::now()))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Stores a hashed password reset token with its expiry.
    pub async fn set_reset_token(
        &self,
        id: i32,
        token_hash: String,
        expires_at: DateTime<Utc>,
    ) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(id))
            .col_expr(
                entity::user::Column::ResetPasswordToken,
                Expr::value(Some(token_hash)),
            )
            .col_expr(
                entity::user::Column::ResetPasswordExpire,
                Expr::value(Some(expires_at)),
            )
            .col_expr(entity::user::Column::UpdatedAt, Expr::value(Utc::now()))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Replaces the password hash and clears any pending reset token.
    pub async fn set_password(&self, id: i32, password_hash: String) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(id))
            .col_expr(entity::user::Column::Password, Expr::value(password_hash))
            .col_expr(
                entity::user::Column::ResetPasswordToken,
                Expr::value(Option::<String>::None),
            )
            .col_expr(
                entity::user::Column::ResetPasswordExpire,
                Expr::value(Option::<DateTime<Utc>>::None),
            )
            .col_expr(entity::user::Column::UpdatedAt, Expr::value(Utc::now()))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Clears reset tokens that expired before `now`.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of accounts cleared
    pub async fn clear_expired_reset_tokens(&self, now: DateTime<Utc>) -> Result<u64, DbErr> {
        let result = entity::prelude::User::update_many()
            .filter(entity::user::Column::ResetPasswordToken.is_not_null())
            .filter(entity::user::Column::ResetPasswordExpire.lte(now))
            .col_expr(
                entity::user::Column::ResetPasswordToken,
                Expr::value(Option::<String>::None),
            )
            .col_expr(
                entity::user::Column::ResetPasswordExpire,
                Expr::value(Option::<DateTime<Utc>>::None),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes an account of any role.
    ///
    /// # Returns
    /// - `Ok(true)` - Account deleted
    /// - `Ok(false)` - No user with that ID
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::User::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    /// Deletes an account only if it holds `role`.
    pub async fn delete_with_role(&self, id: i32, role: Role) -> Result<bool, DbErr> {
        let result = entity::prelude::User::delete_many()
            .filter(entity::user::Column::Id.eq(id))
            .filter(entity::user::Column::Role.eq(role))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
