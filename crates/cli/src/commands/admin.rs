//! Admin user management command.

use rand::distr::{Alphanumeric, SampleString};

use pagewright_core::{Email, UserRole};
use pagewright_server::db::users::UserRepository;
use pagewright_server::services::auth::hash_password;

use super::connect;

/// Length of generated admin passwords.
const GENERATED_PASSWORD_LENGTH: usize = 20;

/// Create an admin user.
///
/// When no password is given, a random one is generated and logged once.
///
/// # Errors
///
/// Returns an error if the email is invalid, the email is already
/// registered, or the database is unreachable.
pub async fn create_user(
    email: &str,
    name: &str,
    password: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let email = Email::parse(email)?;

    let (password, generated) = match password {
        Some(p) => (p.to_owned(), false),
        None => (
            Alphanumeric.sample_string(&mut rand::rng(), GENERATED_PASSWORD_LENGTH),
            true,
        ),
    };

    let password_hash = hash_password(&password)?;

    let pool = connect().await?;
    let user = UserRepository::new(&pool)
        .create(name, &email, &password_hash, UserRole::Admin)
        .await?;

    tracing::info!(user_id = %user.id, email = %user.email, "admin user created");
    if generated {
        tracing::info!("generated password: {password}");
    }

    Ok(())
}
