use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::user::models::NewUser;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserPatch;
use crate::domain::user::ports::UserRepository;
use crate::user::errors::UserError;

/// Process-local user store.
///
/// Records keep insertion order. Ids come from a counter that only moves
/// forward, so a deleted id is never handed out again.
pub struct InMemoryUserRepository {
    state: RwLock<State>,
}

struct State {
    users: Vec<User>,
    next_id: u64,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(State {
                users: Vec::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: NewUser) -> Result<User, UserError> {
        let mut state = self.state.write().await;

        let user = user.with_id(UserId(state.next_id));
        state.next_id += 1;
        state.users.push(user.clone());

        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError> {
        let state = self.state.read().await;
        Ok(state.users.iter().find(|u| u.email == email).cloned())
    }

    async fn list_all(&self) -> Result<Vec<User>, UserError> {
        Ok(self.state.read().await.users.clone())
    }

    async fn update_with(&self, id: &UserId, patch: UserPatch) -> Result<User, UserError> {
        let mut state = self.state.write().await;

        let user = state
            .users
            .iter_mut()
            .find(|u| u.id == *id)
            .ok_or_else(|| UserError::NotFound(id.to_string()))?;
        patch(&mut *user);

        Ok(user.clone())
    }

    async fn delete(&self, id: &UserId) -> Result<(), UserError> {
        let mut state = self.state.write().await;

        let index = state
            .users
            .iter()
            .position(|u| u.id == *id)
            .ok_or_else(|| UserError::NotFound(id.to_string()))?;
        state.users.remove(index);

        Ok(())
    }
}
