use sea_orm::{
    ActiveModelTrait,
    ActiveValue::{Set, Unchanged},
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, SqlErr,
};
use tracing::{error, warn};

use crate::{
    domain::{
        account::{entities::Account, ports::AccountRepository},
        common::entities::app_errors::CoreError,
    },
    entity::accounts::{ActiveModel, Column, Entity},
};

#[derive(Debug, Clone)]
pub struct SqliteAccountRepository {
    pub db: DatabaseConnection,
}

impl SqliteAccountRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn map_write_error(e: DbErr, action: &str) -> CoreError {
    if let Some(SqlErr::UniqueConstraintViolation(detail)) = e.sql_err() {
        warn!("Failed to {} account, unique constraint: {}", action, detail);
        return CoreError::DuplicateAccount;
    }

    if matches!(e, DbErr::RecordNotUpdated) {
        return CoreError::NotFound;
    }

    error!("Failed to {} account: {}", action, e);
    CoreError::InternalServerError
}

impl AccountRepository for SqliteAccountRepository {
    async fn create(&self, account: Account) -> Result<Account, CoreError> {
        let active_model = ActiveModel {
            id: Set(account.id),
            username: Set(account.username),
            email: Set(account.email),
            password_hash: Set(account.password_hash),
            member_since: Set(account.member_since),
            created_at: Set(account.created_at),
            updated_at: Set(account.updated_at),
        };

        let created = Entity::insert(active_model)
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| map_write_error(e, "create"))?;

        Ok(Account::from(created))
    }

    async fn get_by_email(&self, email: String) -> Result<Option<Account>, CoreError> {
        let account = Entity::find()
            .filter(Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get account by email: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(account.map(Account::from))
    }

    async fn update(&self, account: Account) -> Result<Account, CoreError> {
        let active_model = ActiveModel {
            id: Unchanged(account.id),
            username: Set(account.username),
            email: Unchanged(account.email),
            password_hash: Set(account.password_hash),
            member_since: Unchanged(account.member_since),
            created_at: Unchanged(account.created_at),
            updated_at: Set(account.updated_at),
        };

        let updated = active_model
            .update(&self.db)
            .await
            .map_err(|e| map_write_error(e, "update"))?;

        Ok(Account::from(updated))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::db::sqlite::{Sqlite, SqliteConfig};

    async fn repository() -> SqliteAccountRepository {
        let sqlite = Sqlite::new(SqliteConfig {
            database_url: "sqlite::memory:".to_string(),
        })
        .await
        .unwrap();

        SqliteAccountRepository::new(sqlite.get_db())
    }

    fn account(username: &str, email: &str) -> Account {
        Account::new(
            username.to_string(),
            email.to_string(),
            "$argon2id$stub".to_string(),
        )
    }

    #[tokio::test]
    async fn test_create_then_find_by_email() {
        let repository = repository().await;
        let created = repository
            .create(account("alice", "alice@example.com"))
            .await
            .unwrap();

        let found = repository
            .get_by_email("alice@example.com".to_string())
            .await
            .unwrap()
            .unwrap();

        assert_eq!(found.id, created.id);
        assert_eq!(found.username, "alice");
        assert_eq!(found.member_since, created.member_since);
    }

    #[tokio::test]
    async fn test_unknown_email_is_none() {
        let repository = repository().await;

        let found = repository
            .get_by_email("ghost@example.com".to_string())
            .await
            .unwrap();

        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_duplicate_email_and_username_are_rejected() {
        let repository = repository().await;
        repository
            .create(account("alice", "alice@example.com"))
            .await
            .unwrap();

        let same_email = repository
            .create(account("alice2", "alice@example.com"))
            .await;
        let same_username = repository
            .create(account("alice", "other@example.com"))
            .await;

        assert_eq!(same_email, Err(CoreError::DuplicateAccount));
        assert_eq!(same_username, Err(CoreError::DuplicateAccount));
    }

    #[tokio::test]
    async fn test_update_changes_username_and_hash() {
        let repository = repository().await;
        let mut stored = repository
            .create(account("alice", "alice@example.com"))
            .await
            .unwrap();

        stored.update("alice2".to_string(), Some("$argon2id$new".to_string()));
        let updated = repository.update(stored).await.unwrap();

        assert_eq!(updated.username, "alice2");
        assert_eq!(updated.password_hash, "$argon2id$new");
        assert_eq!(updated.email, "alice@example.com");
    }

    #[tokio::test]
    async fn test_update_into_taken_username_is_duplicate() {
        let repository = repository().await;
        repository
            .create(account("alice", "alice@example.com"))
            .await
            .unwrap();
        let mut bob = repository
            .create(account("bob", "bob@example.com"))
            .await
            .unwrap();

        bob.update("alice".to_string(), None);

        assert_eq!(
            repository.update(bob).await,
            Err(CoreError::DuplicateAccount)
        );
    }

    #[tokio::test]
    async fn test_update_missing_row_is_not_found() {
        let repository = repository().await;

        let result = repository.update(account("ghost", "ghost@example.com")).await;

        assert_eq!(result, Err(CoreError::NotFound));
    }
}
