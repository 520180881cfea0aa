//! Session-based authentication.
//!
//! Session state is owned by `AuthService` and change notification goes
//! through explicit subscribe/unsubscribe registration, not shared
//! mutable globals. The active token lives in `sessoes` plus a pointer
//! file next to the database, so separate CLI invocations share the
//! signed-in session.

use crate::db::users;
use crate::errors::{AppError, AppResult};
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng};
use argon2::Argon2;
use rusqlite::Connection;
use std::fs;
use std::path::PathBuf;

pub fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|h| h.to_string())
        .map_err(|e| AppError::PasswordHash(e.to_string()))
}

pub fn verify_password(password: &str, hash: &str) -> AppResult<bool> {
    let parsed = PasswordHash::new(hash).map_err(|e| AppError::PasswordHash(e.to_string()))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

#[derive(Debug, Clone)]
pub enum AuthEvent {
    SignedIn { email: String },
    SignedOut,
}

#[derive(Debug, Clone)]
pub struct SessionState {
    pub token: String,
    pub email: String,
    pub name: String,
}

type Listener = Box<dyn Fn(&AuthEvent)>;

pub struct AuthService {
    session_file: PathBuf,
    listeners: Vec<(usize, Listener)>,
    next_listener_id: usize,
}

impl AuthService {
    /// The pointer file is keyed to the database path so different
    /// databases (e.g. test databases) have independent sessions.
    pub fn new(database: &str) -> Self {
        Self {
            session_file: PathBuf::from(format!("{database}.session")),
            listeners: Vec::new(),
            next_listener_id: 0,
        }
    }

    /// Register an auth-state listener; returns the id to unsubscribe.
    pub fn subscribe(&mut self, f: impl Fn(&AuthEvent) + 'static) -> usize {
        let id = self.next_listener_id;
        self.next_listener_id += 1;
        self.listeners.push((id, Box::new(f)));
        id
    }

    pub fn unsubscribe(&mut self, id: usize) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    fn emit(&self, event: &AuthEvent) {
        for (_, f) in &self.listeners {
            f(event);
        }
    }

    pub fn sign_in(
        &mut self,
        conn: &Connection,
        email: &str,
        password: &str,
    ) -> AppResult<SessionState> {
        let user = users::find_by_email(conn, email)?.ok_or(AppError::InvalidCredentials)?;

        if !verify_password(password, &user.password_hash)? {
            return Err(AppError::InvalidCredentials);
        }

        let token = SaltString::generate(&mut OsRng).as_str().to_string();
        users::create_session(conn, &token, user.id)?;
        fs::write(&self.session_file, &token)?;

        let state = SessionState {
            token,
            email: user.email.clone(),
            name: user.name,
        };

        self.emit(&AuthEvent::SignedIn { email: user.email });

        Ok(state)
    }

    pub fn sign_out(&mut self, conn: &Connection) -> AppResult<()> {
        let token = self.stored_token().ok_or(AppError::NoSession)?;

        users::delete_session(conn, &token)?;
        fs::remove_file(&self.session_file).ok();

        self.emit(&AuthEvent::SignedOut);
        Ok(())
    }

    /// Session retrieval: the current session, if any.
    pub fn session(&self, conn: &Connection) -> AppResult<Option<SessionState>> {
        let Some(token) = self.stored_token() else {
            return Ok(None);
        };

        match users::find_session(conn, &token)? {
            Some((session, user)) => Ok(Some(SessionState {
                token: session.token,
                email: user.email,
                name: user.name,
            })),
            // Stale pointer file (session row deleted elsewhere).
            None => {
                fs::remove_file(&self.session_file).ok();
                Ok(None)
            }
        }
    }

    fn stored_token(&self) -> Option<String> {
        fs::read_to_string(&self.session_file)
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    }
}
