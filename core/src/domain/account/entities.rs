use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_timestamp;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Account {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub member_since: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Account {
    pub fn new(username: String, email: String, password_hash: String) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            username,
            email,
            password_hash,
            member_since: now.date_naive(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn update(&mut self, username: String, password_hash: Option<String>) {
        self.username = username;
        if let Some(password_hash) = password_hash {
            self.password_hash = password_hash;
        }
        self.updated_at = Utc::now();
    }
}
