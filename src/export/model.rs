use serde::Serialize;

/// Flat punch row for export, with timestamps already rendered through
/// the display formatter.
#[derive(Serialize, Clone, Debug)]
pub struct PunchExport {
    pub id: i64,
    pub matricula: String,
    pub employee: String,
    pub cost_center: String,
    pub date: String,
    pub b1: Option<String>,
    pub b2: Option<String>,
    pub b3: Option<String>,
    pub b4: Option<String>,
    pub b5: Option<String>,
    pub b6: Option<String>,
    pub b7: Option<String>,
    pub b8: Option<String>,
    pub source: String,
}
