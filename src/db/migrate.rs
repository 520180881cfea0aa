use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `notificacoes` table exists.
/// It is created first because it also records applied migrations.
fn ensure_notifications_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS notificacoes (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL,
            read      INTEGER NOT NULL DEFAULT 0
        );
        "#,
    )?;
    Ok(())
}

/// Create the collection tables.
///
/// Ids are SQLite AUTOINCREMENT only: a primary-key collision means a
/// misconfigured schema and surfaces as an error, it is never retried
/// with probed ids.
fn create_collection_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS empresas (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            name       TEXT NOT NULL UNIQUE,
            cnpj       TEXT UNIQUE,
            created_at TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS centro_custos (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            company_id INTEGER NOT NULL REFERENCES empresas(id),
            name       TEXT NOT NULL,
            UNIQUE(company_id, name)
        );

        CREATE TABLE IF NOT EXISTS turnos (
            id             INTEGER PRIMARY KEY AUTOINCREMENT,
            company_id     INTEGER REFERENCES empresas(id),
            cost_center_id INTEGER REFERENCES centro_custos(id),
            name           TEXT NOT NULL,
            clock_in       TEXT,
            clock_out      TEXT
        );

        CREATE TABLE IF NOT EXISTS funcionarios (
            id             INTEGER PRIMARY KEY AUTOINCREMENT,
            company_id     INTEGER NOT NULL REFERENCES empresas(id),
            cost_center_id INTEGER NOT NULL REFERENCES centro_custos(id),
            shift_id       INTEGER REFERENCES turnos(id),
            matricula      TEXT NOT NULL UNIQUE,
            name           TEXT NOT NULL,
            created_at     TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS batidas_ponto (
            id             INTEGER PRIMARY KEY AUTOINCREMENT,
            employee_id    INTEGER NOT NULL REFERENCES funcionarios(id),
            cost_center_id INTEGER NOT NULL REFERENCES centro_custos(id),
            date           TEXT NOT NULL,
            b1 TEXT, b2 TEXT, b3 TEXT, b4 TEXT,
            b5 TEXT, b6 TEXT, b7 TEXT, b8 TEXT,
            source         TEXT NOT NULL DEFAULT 'import',
            created_at     TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_batidas_date ON batidas_ponto(date);
        CREATE INDEX IF NOT EXISTS idx_batidas_employee_date
            ON batidas_ponto(employee_id, date);

        CREATE TABLE IF NOT EXISTS parametros (
            id    INTEGER PRIMARY KEY AUTOINCREMENT,
            key   TEXT NOT NULL UNIQUE,
            value TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS usuarios (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            email         TEXT NOT NULL UNIQUE,
            name          TEXT NOT NULL,
            password_hash TEXT NOT NULL,
            created_at    TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS sessoes (
            token      TEXT PRIMARY KEY,
            user_id    INTEGER NOT NULL REFERENCES usuarios(id),
            created_at TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if `notificacoes` has a `read` column (added after the first
/// release; older databases lack it).
fn notifications_has_read_column(conn: &Connection) -> Result<bool> {
    let mut stmt = conn.prepare("PRAGMA table_info('notificacoes')")?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == "read" {
            return Ok(true);
        }
    }
    Ok(false)
}

fn migrate_add_read_to_notifications(conn: &Connection) -> Result<()> {
    let version = "20250601_0001_add_read_to_notificacoes";

    let mut chk = conn.prepare(
        "SELECT 1 FROM notificacoes
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    if chk.query_row([version], |_| Ok(())).optional()?.is_some() {
        return Ok(());
    }

    if !notifications_has_read_column(conn)? {
        conn.execute(
            "ALTER TABLE notificacoes ADD COLUMN read INTEGER NOT NULL DEFAULT 0;",
            [],
        )?;
    }

    conn.execute(
        "INSERT INTO notificacoes (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, 'Added read flag to notificacoes')",
        [version],
    )?;

    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    // 1) Ensure notification table (doubles as the migration audit trail)
    ensure_notifications_table(conn)?;

    // 2) Collection tables
    create_collection_tables(conn)?;

    // 3) Incremental migrations
    migrate_add_read_to_notifications(conn)?;

    Ok(())
}
