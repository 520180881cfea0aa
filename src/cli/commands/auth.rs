use crate::cli::parser::{AuthAction, Commands};
use crate::config::Config;
use crate::core::session::{AuthEvent, AuthService, hash_password};
use crate::db::pool::DbPool;
use crate::db::{notifications, users};
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Auth { action } = cmd {
        let pool = DbPool::new(&cfg.database)?;
        let mut auth = AuthService::new(&cfg.database);

        // Announce session-state changes as they happen.
        auth.subscribe(|event| match event {
            AuthEvent::SignedIn { email } => info(format!("Session opened for {email}")),
            AuthEvent::SignedOut => info("Session closed"),
        });

        match action {
            AuthAction::Login { email, password } => {
                let state = auth.sign_in(&pool.conn, email, password)?;
                notifications::notify(&pool.conn, "login", &state.email, "Signed in")?;
                success(format!("Signed in as {} ({})", state.name, state.email));
            }

            AuthAction::Logout => {
                auth.sign_out(&pool.conn)?;
                notifications::notify(&pool.conn, "logout", "", "Signed out")?;
                success("Signed out.");
            }

            AuthAction::Whoami => match auth.session(&pool.conn)? {
                Some(state) => println!("{} <{}>", state.name, state.email),
                None => println!("No active session."),
            },

            AuthAction::AddUser {
                email,
                password,
                name,
            } => {
                let hash = hash_password(password)?;
                users::insert_user(&pool.conn, email, name, &hash)?;
                notifications::notify(&pool.conn, "user_add", email, "Account created")?;
                success(format!("Account created for {email}"));
            }
        }
    }
    Ok(())
}
