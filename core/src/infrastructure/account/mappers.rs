use crate::{domain::account::entities::Account, entity::accounts};

impl From<&accounts::Model> for Account {
    fn from(model: &accounts::Model) -> Self {
        Self {
            id: model.id,
            username: model.username.clone(),
            email: model.email.clone(),
            password_hash: model.password_hash.clone(),
            member_since: model.member_since,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<accounts::Model> for Account {
    fn from(model: accounts::Model) -> Self {
        Self::from(&model)
    }
}
