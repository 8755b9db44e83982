use anyhow::Result;

use super::{KeyValueStore, TOKEN_KEY, USERNAME_KEY};
use crate::Session;

impl KeyValueStore {
    /// The stored session, if both token and username are present
    pub fn session(&self) -> Option<Session> {
        let session = Session::new(self.get(USERNAME_KEY)?, self.get(TOKEN_KEY)?);
        session.is_valid().then_some(session)
    }

    pub fn save_session(&mut self, session: &Session) -> Result<()> {
        self.set(TOKEN_KEY, session.token.clone())?;
        self.set(USERNAME_KEY, session.username.clone())
    }

    /// Forget the logged-in player. Other keys are kept.
    pub fn clear_session(&mut self) -> Result<()> {
        self.remove(TOKEN_KEY)?;
        self.remove(USERNAME_KEY)
    }
}
