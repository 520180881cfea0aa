use serde::Serialize;

/// An account allowed to sign in (`usuarios` collection).
/// `password_hash` is an argon2 PHC string and never leaves the db layer
/// except for verification.
#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub name: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: String, // ISO8601
}

/// An authenticated session (`sessoes` collection).
#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub token: String,
    pub user_id: i64,
    pub created_at: String, // ISO8601
}
