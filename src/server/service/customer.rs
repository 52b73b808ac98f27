//! Admin-side customer management.

use entity::user::Role;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::{CreateUserParam, NewCustomerParam, UpdateCustomerParam, User},
    util::{password::hash_password, validate::normalize_email},
};

pub struct CustomerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CustomerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists customers, newest first.
    pub async fn list(&self) -> Result<Vec<User>, AppError> {
        Ok(UserRepository::new(self.db).get_by_role(Role::Customer).await?)
    }

    /// Creates a customer on their behalf. Accounts created by staff start verified.
    ///
    /// # Returns
    /// - `Ok(User)` - The new customer
    /// - `Err(AppError::Validation)` - Malformed or duplicate email
    pub async fn create(&self, param: NewCustomerParam) -> Result<User, AppError> {
        let email = normalize_email(&param.email)?;

        let mut create = CreateUserParam::new(
            Role::Customer,
            param.first_name,
            param.last_name,
            email,
            hash_password(&param.password)?,
        );
        create.phone = Some(param.phone);
        create.gender = Some(param.gender);
        create.id_type = Some(param.id_type);
        create.id_number = Some(param.id_number);
        create.halal = param.halal;
        create.special_requests = Some(param.special_requests);
        create.is_verified = true;

        let customer = UserRepository::new(self.db)
            .create(create)
            .await
            .map_err(AppError::from_email_conflict)?;

        tracing::info!(customer_id = customer.id, "Customer created");

        Ok(customer)
    }

    /// Replaces a customer's editable fields.
    ///
    /// # Returns
    /// - `Ok(User)` - Updated customer
    /// - `Err(AppError::NotFound)` - No customer with that ID
    /// - `Err(AppError::Validation)` - Malformed or duplicate email
    pub async fn update(&self, id: i32, mut param: UpdateCustomerParam) -> Result<User, AppError> {
        param.email = normalize_email(&param.email)?;

        UserRepository::new(self.db)
            .update_customer(id, param)
            .await
            .map_err(AppError::from_email_conflict)?
            .ok_or_else(customer_not_found)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !UserRepository::new(self.db)
            .delete_with_role(id, Role::Customer)
            .await?
        {
            return Err(customer_not_found());
        }

        tracing::info!(customer_id = id, "Customer deleted");

        Ok(())
    }

    /// Flips the customer's active flag and returns the updated customer.
    pub async fn toggle_status(&self, id: i32) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(customer) = user_repo.find_by_id_and_role(id, Role::Customer).await? else {
            return Err(customer_not_found());
        };

        let is_active = !customer.is_active;
        user_repo.set_active(id, is_active).await?;

        tracing::info!(customer_id = id, is_active, "Customer status toggled");

        Ok(User {
            is_active,
            ..customer
        })
    }
}

fn customer_not_found() -> AppError {
    AppError::NotFound("Customer not found".to_string())
}
