//! # Create User Utility
//!
//! Provisions a storefront account. The authentication service only reads users, so
//! accounts are created out of band with this tool.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --package create-user --bin create_user -- <email> <name> <password> [--admin]
//! ```
//!
//! A password that starts with `-` goes after a `--` separator:
//! `create_user a@x.com Alice -- --s3cret-pass`.
//!
//! The password is hashed with Argon2 before it is stored.

use clap::Parser;
use lib_auth::hash_password;
use lib_core::model::store::{run_migrations, UserForCreate, UserRepository};
use lib_core::create_pool;
use lib_utils::validate_not_empty;

/// Create a storefront user account
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Login email, unique per account
    email: String,

    /// Display name
    name: String,

    /// Plaintext password (at least 8 characters)
    password: String,

    /// Grant the admin flag carried in issued tokens
    #[arg(long)]
    admin: bool,

    /// SQLite database URL
    #[arg(long, env = "DATABASE_URL", default_value = "sqlite:data/storefront.db")]
    database_url: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let args = Args::parse();

    validate_not_empty(&args.email, "email").map_err(anyhow::Error::msg)?;
    validate_not_empty(&args.name, "name").map_err(anyhow::Error::msg)?;
    let password_hash = hash_password(&args.password)?;

    println!("Connecting to {}...", args.database_url);
    let pool = create_pool(&args.database_url).await?;
    run_migrations(&pool).await?;

    if UserRepository::find_by_email(&pool, &args.email).await?.is_some() {
        anyhow::bail!("A user with email {} already exists", args.email);
    }

    let user = UserRepository::create(
        &pool,
        UserForCreate::new(args.name, args.email, password_hash).admin(args.admin),
    )
    .await?;

    println!(
        "Created user {} ({}){}",
        user.id,
        user.email,
        if user.is_admin { " [admin]" } else { "" }
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_admin_flag_parsed() {
        let args = Args::try_parse_from(["create_user", "a@x.com", "Alice", "Password123", "--admin"])
            .expect("Valid arguments should parse");
        assert_eq!(args.email, "a@x.com");
        assert_eq!(args.name, "Alice");
        assert_eq!(args.password, "Password123");
        assert!(args.admin);
    }

    #[test]
    fn test_misspelled_flag_rejected() {
        let err = Args::try_parse_from(["create_user", "a@x.com", "Alice", "Password123", "--amdin"])
            .expect_err("Unknown flag should not be ignored");
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn test_dashed_password_after_separator() {
        let args = Args::try_parse_from(["create_user", "a@x.com", "Alice", "--", "--Password123"])
            .expect("Password after -- should parse");
        assert_eq!(args.password, "--Password123");
        assert!(!args.admin);
    }

    #[test]
    fn test_missing_password_rejected() {
        let err = Args::try_parse_from(["create_user", "a@x.com", "Alice"])
            .expect_err("Missing positional should fail");
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }
}
