use crate::error::{LottoError, Result};
use crate::storage::IdSequence;
use crate::types::{Role, User};
use chrono::Utc;

#[derive(Debug, Default)]
pub struct UserStore {
    users: Vec<User>,
    ids: IdSequence,
}

impl UserStore {
    pub fn create_user(&mut self, username: &str, role: Role) -> Result<User> {
        let username = username.trim();
        if username.is_empty() {
            return Err(LottoError::InvalidUsername(
                "Username cannot be empty".to_string(),
            ));
        }

        if self.user_exists(username) {
            return Err(LottoError::UserExists {
                username: username.to_string(),
            });
        }

        let user = User {
            id: self.ids.next_id(),
            username: username.to_string(),
            role,
            created_at: Utc::now(),
        };
        self.users.push(user.clone());

        Ok(user)
    }

    pub fn get(&self, id: u64) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn find_by_username(&self, username: &str) -> Option<&User> {
        self.users.iter().find(|u| u.username == username)
    }

    pub fn user_exists(&self, username: &str) -> bool {
        self.find_by_username(username).is_some()
    }

    pub fn list_users(&self) -> Vec<User> {
        self.users.clone()
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
