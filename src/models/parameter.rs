use serde::Serialize;

/// A key/value application parameter (`parametros` collection).
#[derive(Debug, Clone, Serialize)]
pub struct Parameter {
    pub id: i64,
    pub key: String,
    pub value: String,
}

/// Display offset applied when rendering stored punch timestamps.
pub const PARAM_DISPLAY_OFFSET: &str = "punch.display_offset_hours";
