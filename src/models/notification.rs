use serde::Serialize;

/// A notification (`notificacoes` collection).
/// Doubles as the internal operation audit trail: every completed or
/// failed operation leaves one row here.
#[derive(Debug, Clone, Serialize)]
pub struct Notification {
    pub id: i64,
    pub date: String, // ISO8601
    pub operation: String,
    pub target: String,
    pub message: String,
    pub read: bool,
}
