//! Application context
//!
//! Explicit replacement for the ambient provider singletons of the
//! original UI: session, theme and the notification queue live on one
//! object that views receive by reference.

use serde::{Deserialize, Serialize};
use shared::models::{Role, User};

/// UI theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Severity of a toast notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Error,
    Info,
    Warning,
}

/// One queued toast
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: u64,
    pub level: NotificationLevel,
    pub message: String,
}

/// Authenticated session: the logged-in user plus their bearer token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub user: User,
    pub token: String,
}

/// Application-wide state passed to every view
#[derive(Debug, Default)]
pub struct AppContext {
    session: Option<Session>,
    theme: Theme,
    notifications: Vec<Notification>,
    next_notification_id: u64,
}

impl AppContext {
    pub fn new() -> Self {
        Self::default()
    }

    // ========== Session ==========

    /// Store the session returned by a successful login
    pub fn login(&mut self, user: User, token: impl Into<String>) {
        self.session = Some(Session {
            user,
            token: token.into(),
        });
    }

    /// Drop the session (also called when the backend answers 401)
    pub fn logout(&mut self) {
        self.session = None;
    }

    /// Replace the stored user after a profile update
    pub fn update_user(&mut self, user: User) {
        if let Some(session) = self.session.as_mut() {
            session.user = user;
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn current_user(&self) -> Option<&User> {
        self.session.as_ref().map(|s| &s.user)
    }

    /// Role of the current user; `None` when anonymous
    pub fn role(&self) -> Option<Role> {
        self.session.as_ref().map(|s| s.user.role)
    }

    pub fn token(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.token.as_str())
    }

    // ========== Theme ==========

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    // ========== Notifications ==========

    /// Queue a toast; returns its id for dismissal
    pub fn push_notification(
        &mut self,
        level: NotificationLevel,
        message: impl Into<String>,
    ) -> u64 {
        self.next_notification_id += 1;
        let id = self.next_notification_id;
        self.notifications.push(Notification {
            id,
            level,
            message: message.into(),
        });
        id
    }

    pub fn notify_success(&mut self, message: impl Into<String>) -> u64 {
        self.push_notification(NotificationLevel::Success, message)
    }

    pub fn notify_error(&mut self, message: impl Into<String>) -> u64 {
        self.push_notification(NotificationLevel::Error, message)
    }

    pub fn notify_info(&mut self, message: impl Into<String>) -> u64 {
        self.push_notification(NotificationLevel::Info, message)
    }

    pub fn notify_warning(&mut self, message: impl Into<String>) -> u64 {
        self.push_notification(NotificationLevel::Warning, message)
    }

    /// Remove a toast by id; returns whether it was present
    pub fn dismiss_notification(&mut self, id: u64) -> bool {
        let before = self.notifications.len();
        self.notifications.retain(|n| n.id != id);
        self.notifications.len() != before
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customer() -> User {
        User {
            id: 7,
            fullname: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            role: Role::Customer,
        }
    }

    #[test]
    fn login_logout_cycle() {
        let mut ctx = AppContext::new();
        assert!(!ctx.is_authenticated());
        assert_eq!(ctx.role(), None);

        ctx.login(customer(), "jwt-token");
        assert!(ctx.is_authenticated());
        assert_eq!(ctx.role(), Some(Role::Customer));
        assert_eq!(ctx.token(), Some("jwt-token"));

        ctx.logout();
        assert!(!ctx.is_authenticated());
        assert!(ctx.token().is_none());
    }

    #[test]
    fn update_user_keeps_token() {
        let mut ctx = AppContext::new();
        ctx.login(customer(), "jwt-token");

        let mut renamed = customer();
        renamed.fullname = "Jane Smith".to_string();
        ctx.update_user(renamed);

        assert_eq!(ctx.current_user().unwrap().fullname, "Jane Smith");
        assert_eq!(ctx.token(), Some("jwt-token"));
    }

    #[test]
    fn theme_toggles() {
        let mut ctx = AppContext::new();
        assert_eq!(ctx.theme(), Theme::Light);
        ctx.toggle_theme();
        assert_eq!(ctx.theme(), Theme::Dark);
        ctx.toggle_theme();
        assert_eq!(ctx.theme(), Theme::Light);
    }

    #[test]
    fn notifications_queue_and_dismiss() {
        let mut ctx = AppContext::new();
        let first = ctx.notify_success("saved");
        let second = ctx.notify_error("boom");
        assert_eq!(ctx.notifications().len(), 2);
        assert_ne!(first, second);

        assert!(ctx.dismiss_notification(first));
        assert!(!ctx.dismiss_notification(first));
        assert_eq!(ctx.notifications().len(), 1);
        assert_eq!(ctx.notifications()[0].message, "boom");
    }
}
