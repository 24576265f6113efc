//! Stub authentication context. There is no real login.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    logged_in: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self { logged_in: true }
    }
}

impl Session {
    pub fn is_logged_in(&self) -> bool {
        self.logged_in
    }

    pub fn login(&mut self) {
        log::info!("Session logged in");
        self.logged_in = true;
    }

    pub fn logout(&mut self) {
        log::info!("Session logged out");
        self.logged_in = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logout_then_login() {
        let mut session = Session::default();
        assert!(session.is_logged_in());
        session.logout();
        assert!(!session.is_logged_in());
        session.login();
        assert!(session.is_logged_in());
    }
}
