//! Staff account management: admins and workers.
//!
//! Staff accounts are never self-registered. An admin invites them, which creates a verified
//! account with a random temporary password and mails that password to the invitee. Every
//! mutation made here is appended to the admin audit log inside the same transaction as the
//! change itself.

use entity::user::Role;
use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};
use serde_json::json;

use crate::server::{
    data::{audit_log::AuditLogRepository, user::UserRepository},
    error::{internal::InternalError, AppError},
    model::{
        audit::{AuditAction, CreateAuditLogParam},
        user::{CreateUserParam, InviteParam, UpdateAdminParam, UpdateWorkerParam, User},
    },
    service::mail::{templates, Mailer},
    util::{
        password::hash_password,
        token::{generate_temp_password, TEMP_PASSWORD_LENGTH},
        validate::normalize_email,
    },
};

pub struct AdminService<'a> {
    db: &'a DatabaseConnection,
    mailer: &'a dyn Mailer,
    frontend_url: &'a str,
}

impl<'a> AdminService<'a> {
    /// Creates a new AdminService instance.
    ///
    /// # Arguments
    /// - `db` - Database connection
    /// - `mailer` - Transport for invitation mail
    /// - `frontend_url` - Base URL used to build the login link in invitations
    pub fn new(db: &'a DatabaseConnection, mailer: &'a dyn Mailer, frontend_url: &'a str) -> Self {
        Self {
            db,
            mailer,
            frontend_url,
        }
    }

    /// Invites a new admin. Only super admins reach this through the router.
    ///
    /// # Returns
    /// - `Ok(User)` - The created admin
    /// - `Err(AppError::Validation)` - Malformed or duplicate email
    /// - `Err(AppError::MailErr)` - Invitation could not be delivered; nothing was stored
    pub async fn create_admin(&self, actor: &User, param: InviteParam) -> Result<User, AppError> {
        let metadata = json!({ "isSuperAdmin": param.is_super_admin });

        self.invite(actor, Role::Admin, param, AuditAction::CreateAdmin, metadata)
            .await
    }

    pub async fn list_admins(&self) -> Result<Vec<User>, AppError> {
        Ok(UserRepository::new(self.db).get_by_role(Role::Admin).await?)
    }

    pub async fn update_admin(
        &self,
        actor: &User,
        id: i32,
        param: UpdateAdminParam,
    ) -> Result<User, AppError> {
        let metadata = json!({
            "firstName": param.first_name,
            "lastName": param.last_name,
            "isSuperAdmin": param.is_super_admin,
        });

        let txn = self.db.begin().await?;

        let Some(admin) = UserRepository::new(&txn).update_admin(id, param).await? else {
            txn.rollback().await?;
            return Err(admin_not_found());
        };
        audit(&txn, actor, AuditAction::UpdateAdmin, id, Some(metadata)).await?;

        txn.commit().await?;

        Ok(admin)
    }

    /// Deletes an admin account.
    ///
    /// # Returns
    /// - `Ok(())` - Admin deleted
    /// - `Err(AppError::BadRequest)` - Actor targeted their own account
    /// - `Err(AppError::NotFound)` - No admin with that ID
    pub async fn delete_admin(&self, actor: &User, id: i32) -> Result<(), AppError> {
        if actor.id == id {
            return Err(AppError::BadRequest(
                "You cannot delete your own account".to_string(),
            ));
        }

        self.delete_staff(actor, id, Role::Admin, AuditAction::DeleteAdmin)
            .await
    }

    /// Flips an admin's active flag. Actors cannot deactivate themselves.
    pub async fn toggle_admin(&self, actor: &User, id: i32) -> Result<User, AppError> {
        if actor.id == id {
            return Err(AppError::BadRequest(
                "You cannot deactivate your own account".to_string(),
            ));
        }

        self.toggle_staff(actor, id, Role::Admin, AuditAction::ToggleAdminStatus)
            .await
    }

    /// Invites a new worker with the given position and department.
    pub async fn create_worker(&self, actor: &User, param: InviteParam) -> Result<User, AppError> {
        let metadata = json!({
            "position": param.position,
            "department": param.department,
        });

        self.invite(actor, Role::Worker, param, AuditAction::CreateWorker, metadata)
            .await
    }

    pub async fn list_workers(&self) -> Result<Vec<User>, AppError> {
        Ok(UserRepository::new(self.db).get_by_role(Role::Worker).await?)
    }

    pub async fn update_worker(
        &self,
        actor: &User,
        id: i32,
        param: UpdateWorkerParam,
    ) -> Result<User, AppError> {
        let metadata = json!({
            "position": param.position,
            "department": param.department,
        });

        let txn = self.db.begin().await?;

        let Some(worker) = UserRepository::new(&txn).update_worker(id, param).await? else {
            txn.rollback().await?;
            return Err(worker_not_found());
        };
        audit(&txn, actor, AuditAction::UpdateWorker, id, Some(metadata)).await?;

        txn.commit().await?;

        Ok(worker)
    }

    pub async fn delete_worker(&self, actor: &User, id: i32) -> Result<(), AppError> {
        self.delete_staff(actor, id, Role::Worker, AuditAction::DeleteWorker)
            .await
    }

    pub async fn toggle_worker(&self, actor: &User, id: i32) -> Result<User, AppError> {
        self.toggle_staff(actor, id, Role::Worker, AuditAction::ToggleWorkerStatus)
            .await
    }

    /// Creates a verified staff account with a temporary password, records the audit row and
    /// mails the invitation. A failed delivery rolls the account back.
    async fn invite(
        &self,
        actor: &User,
        role: Role,
        param: InviteParam,
        action: AuditAction,
        metadata: serde_json::Value,
    ) -> Result<User, AppError> {
        let email = normalize_email(&param.email)?;
        let temp_password = generate_temp_password(TEMP_PASSWORD_LENGTH);

        let mut create = CreateUserParam::new(
            role,
            param.first_name,
            param.last_name,
            email,
            hash_password(&temp_password)?,
        );
        create.is_verified = true;
        create.is_super_admin = role == Role::Admin && param.is_super_admin;
        create.position = param.position;
        create.department = param.department;
        create.invited_by_id = Some(actor.id);

        let txn = self.db.begin().await?;

        let user = match UserRepository::new(&txn).create(create).await {
            Ok(user) => user,
            Err(err) => {
                txn.rollback().await?;
                return Err(AppError::from_email_conflict(err));
            }
        };
        audit(&txn, actor, action, user.id, Some(metadata)).await?;

        let role_title = match role {
            Role::Admin => "Administrator",
            _ => "Staff Member",
        };
        let login_url = format!("{}/login", self.frontend_url.trim_end_matches('/'));
        let invitation = templates::invite_email(
            &user.email,
            role_title,
            &actor.full_name(),
            &temp_password,
            &login_url,
        );

        if let Err(err) = self.mailer.send(invitation).await {
            tracing::error!(email = %user.email, "Failed to deliver invitation: {err}");
            txn.rollback().await?;
            return Err(err.into());
        }

        txn.commit().await?;

        tracing::info!(
            actor_id = actor.id,
            user_id = user.id,
            role = role.as_str(),
            "Staff account invited"
        );

        Ok(user)
    }

    async fn delete_staff(
        &self,
        actor: &User,
        id: i32,
        role: Role,
        action: AuditAction,
    ) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        if !UserRepository::new(&txn).delete_with_role(id, role).await? {
            txn.rollback().await?;
            return Err(staff_not_found(role));
        }
        audit(&txn, actor, action, id, None).await?;

        txn.commit().await?;

        tracing::info!(actor_id = actor.id, user_id = id, "Staff account deleted");

        Ok(())
    }

    async fn toggle_staff(
        &self,
        actor: &User,
        id: i32,
        role: Role,
        action: AuditAction,
    ) -> Result<User, AppError> {
        let txn = self.db.begin().await?;
        let user_repo = UserRepository::new(&txn);

        let Some(user) = user_repo.find_by_id_and_role(id, role).await? else {
            txn.rollback().await?;
            return Err(staff_not_found(role));
        };

        let is_active = !user.is_active;
        if !user_repo.set_active(id, is_active).await? {
            txn.rollback().await?;
            return Err(InternalError::MissingAfterWrite(id).into());
        }
        audit(
            &txn,
            actor,
            action,
            id,
            Some(json!({ "isActive": is_active })),
        )
        .await?;

        txn.commit().await?;

        Ok(User { is_active, ..user })
    }
}

async fn audit(
    txn: &DatabaseTransaction,
    actor: &User,
    action: AuditAction,
    target_id: i32,
    metadata: Option<serde_json::Value>,
) -> Result<(), AppError> {
    AuditLogRepository::new(txn)
        .create(CreateAuditLogParam {
            action,
            admin_id: actor.id,
            target_id,
            metadata,
        })
        .await?;

    Ok(())
}

fn admin_not_found() -> AppError {
    AppError::NotFound("Admin not found".to_string())
}

fn worker_not_found() -> AppError {
    AppError::NotFound("Worker not found".to_string())
}

fn staff_not_found(role: Role) -> AppError {
    match role {
        Role::Admin => admin_not_found(),
        _ => worker_not_found(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::service::{auth::AuthService, mail::test::RecordingMailer};
    use sea_orm::EntityTrait;
    use test_utils::{builder::TestBuilder, factory};

    const FRONTEND: &str = "https://book.example.com";

    fn invite(email: &str) -> InviteParam {
        InviteParam {
            email: email.to_string(),
            first_name: "Layla".to_string(),
            last_name: "Staff".to_string(),
            is_super_admin: false,
            position: Some("Concierge".to_string()),
            department: Some("Front desk".to_string()),
        }
    }

    async fn audit_actions(db: &DatabaseConnection) -> Vec<String> {
        entity::prelude::AdminAuditLog::find()
            .all(db)
            .await
            .unwrap()
            .into_iter()
            .map(|row| row.action)
            .collect()
    }

    fn temp_password_from(text: &str) -> String {
        let start = text.find("Temporary password: ").unwrap() + "Temporary password: ".len();
        text[start..start + TEMP_PASSWORD_LENGTH].to_string()
    }

    mod invite {
        use super::*;

        /// Expected: verified admin, invite mailed, temporary password works, audit row written
        #[tokio::test]
        async fn creates_admin_with_working_temp_password() -> Result<(), AppError> {
            let test = TestBuilder::new().with_account_tables().build().await.unwrap();
            let db = test.db.as_ref().unwrap();
            let actor = User::from_entity(factory::create_super_admin(db).await?);
            let mailer = RecordingMailer::new();

            let admin = AdminService::new(db, &mailer, FRONTEND)
                .create_admin(&actor, invite("layla@example.com"))
                .await?;

            assert_eq!(admin.role, Role::Admin);
            assert!(admin.is_verified);
            assert!(!admin.is_super_admin);
            assert_eq!(admin.invited_by_id, Some(actor.id));
            assert_eq!(admin.position, Some("Concierge".to_string()));

            let sent = mailer.sent();
            assert_eq!(sent.len(), 1);
            assert_eq!(sent[0].to, "layla@example.com");
            assert!(sent[0].subject.contains("Administrator"));
            assert!(sent[0].text.contains("https://book.example.com/login"));

            let temp_password = temp_password_from(&sent[0].text);
            AuthService::new(db).login("layla@example.com", &temp_password).await?;

            assert_eq!(audit_actions(db).await, vec!["CREATE_ADMIN"]);

            Ok(())
        }

        /// Expected: worker invitation uses the staff title
        #[tokio::test]
        async fn creates_worker() -> Result<(), AppError> {
            let test = TestBuilder::new().with_account_tables().build().await.unwrap();
            let db = test.db.as_ref().unwrap();
            let actor = User::from_entity(factory::create_admin(db).await?);
            let mailer = RecordingMailer::new();

            let mut param = invite("worker@example.com");
            param.is_super_admin = true;
            let worker = AdminService::new(db, &mailer, FRONTEND)
                .create_worker(&actor, param)
                .await?;

            assert_eq!(worker.role, Role::Worker);
            assert!(!worker.is_super_admin);
            assert!(mailer.sent()[0].subject.contains("Staff Member"));
            assert_eq!(audit_actions(db).await, vec!["CREATE_WORKER"]);

            Ok(())
        }

        /// Expected: Err(MailErr) and neither the account nor the audit row remain
        #[tokio::test]
        async fn failed_delivery_rolls_back() -> Result<(), AppError> {
            let test = TestBuilder::new().with_account_tables().build().await.unwrap();
            let db = test.db.as_ref().unwrap();
            let actor = User::from_entity(factory::create_super_admin(db).await?);
            let mailer = RecordingMailer::failing();

            let result = AdminService::new(db, &mailer, FRONTEND)
                .create_admin(&actor, invite("layla@example.com"))
                .await;

            assert!(matches!(result, Err(AppError::MailErr(_))));
            assert!(UserRepository::new(db)
                .find_by_email("layla@example.com")
                .await?
                .is_none());
            assert!(audit_actions(db).await.is_empty());

            Ok(())
        }

        /// Expected: Err(Validation) "Email already in use" without mail
        #[tokio::test]
        async fn rejects_duplicate_email() -> Result<(), AppError> {
            let test = TestBuilder::new().with_account_tables().build().await.unwrap();
            let db = test.db.as_ref().unwrap();
            let actor = User::from_entity(factory::create_super_admin(db).await?);
            let mailer = RecordingMailer::new();

            let result = AdminService::new(db, &mailer, FRONTEND)
                .create_admin(&actor, invite(&actor.email))
                .await;

            assert!(matches!(
                result,
                Err(AppError::Validation { message, .. }) if message == "Email already in use"
            ));
            assert!(mailer.sent().is_empty());

            Ok(())
        }
    }

    mod manage {
        use super::*;

        /// Expected: Err(BadRequest) for both delete and deactivate of self
        #[tokio::test]
        async fn super_admin_cannot_remove_self() -> Result<(), AppError> {
            let test = TestBuilder::new().with_account_tables().build().await.unwrap();
            let db = test.db.as_ref().unwrap();
            let actor = User::from_entity(factory::create_super_admin(db).await?);
            let mailer = RecordingMailer::new();
            let service = AdminService::new(db, &mailer, FRONTEND);

            assert!(matches!(
                service.delete_admin(&actor, actor.id).await,
                Err(AppError::BadRequest(_))
            ));
            assert!(matches!(
                service.toggle_admin(&actor, actor.id).await,
                Err(AppError::BadRequest(_))
            ));
            assert!(audit_actions(db).await.is_empty());

            Ok(())
        }

        /// Expected: each mutation writes its own audit row
        #[tokio::test]
        async fn mutations_are_audited() -> Result<(), AppError> {
            let test = TestBuilder::new().with_account_tables().build().await.unwrap();
            let db = test.db.as_ref().unwrap();
            let actor = User::from_entity(factory::create_super_admin(db).await?);
            let admin = factory::create_admin(db).await?;
            let mailer = RecordingMailer::new();
            let service = AdminService::new(db, &mailer, FRONTEND);

            let updated = service
                .update_admin(
                    &actor,
                    admin.id,
                    UpdateAdminParam {
                        is_super_admin: Some(true),
                        ..Default::default()
                    },
                )
                .await?;
            assert!(updated.is_super_admin);

            let toggled = service.toggle_admin(&actor, admin.id).await?;
            assert!(!toggled.is_active);

            service.delete_admin(&actor, admin.id).await?;

            assert_eq!(
                audit_actions(db).await,
                vec!["UPDATE_ADMIN", "TOGGLE_ADMIN_STATUS", "DELETE_ADMIN"]
            );

            Ok(())
        }

        /// Expected: worker routes ignore admin rows and vice versa
        #[tokio::test]
        async fn role_mismatch_is_not_found() -> Result<(), AppError> {
            let test = TestBuilder::new().with_account_tables().build().await.unwrap();
            let db = test.db.as_ref().unwrap();
            let actor = User::from_entity(factory::create_super_admin(db).await?);
            let admin = factory::create_admin(db).await?;
            let worker = factory::create_worker(db).await?;
            let mailer = RecordingMailer::new();
            let service = AdminService::new(db, &mailer, FRONTEND);

            assert!(matches!(
                service.delete_worker(&actor, admin.id).await,
                Err(AppError::NotFound(msg)) if msg == "Worker not found"
            ));
            assert!(matches!(
                service.toggle_admin(&actor, worker.id).await,
                Err(AppError::NotFound(msg)) if msg == "Admin not found"
            ));
            assert!(matches!(
                service
                    .update_worker(&actor, admin.id, UpdateWorkerParam::default())
                    .await,
                Err(AppError::NotFound(_))
            ));
            assert!(audit_actions(db).await.is_empty());

            Ok(())
        }

        /// Expected: worker update changes position only, list is role filtered
        #[tokio::test]
        async fn updates_worker_position() -> Result<(), AppError> {
            let test = TestBuilder::new().with_account_tables().build().await.unwrap();
            let db = test.db.as_ref().unwrap();
            let actor = User::from_entity(factory::create_admin(db).await?);
            let worker = factory::create_worker(db).await?;
            let mailer = RecordingMailer::new();
            let service = AdminService::new(db, &mailer, FRONTEND);

            let updated = service
                .update_worker(
                    &actor,
                    worker.id,
                    UpdateWorkerParam {
                        position: Some("Chef".to_string()),
                        department: None,
                    },
                )
                .await?;

            assert_eq!(updated.position.as_deref(), Some("Chef"));
            assert_eq!(updated.department, worker.department);

            let workers = service.list_workers().await?;
            assert_eq!(workers.len(), 1);
            assert_eq!(service.list_admins().await?.len(), 1);

            Ok(())
        }
    }
}
