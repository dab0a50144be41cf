//! User accounts and credential hashing.
//!
//! Passwords are stored as PBKDF2-HMAC-SHA256 digests (100,000 rounds,
//! 16-byte random salt), hex-encoded. The rest of the app only ever looks
//! at `username` and `role` of the authenticated user.

use pbkdf2::pbkdf2_hmac;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use sha2::Sha256;

use crate::i18n::Catalog;
use crate::storage::DataDir;
use crate::term;

const PBKDF2_ROUNDS: u32 = 100_000;
const SALT_LEN: usize = 16;
const DIGEST_LEN: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Visitor,
    Organizer,
}

impl Role {
    fn from_input(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "visitor" => Some(Self::Visitor),
            "organizer" => Some(Self::Organizer),
            _ => None,
        }
    }
}

/// Hex-encoded salt and digest, as persisted in `users.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordHash {
    pub salt: String,
    pub hash: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub password: PasswordHash,
    pub role: Role,
}

/// Derive a fresh salted hash for `password`.
pub fn hash_password(password: &str) -> PasswordHash {
    let mut salt = [0u8; SALT_LEN];
    rand::thread_rng().fill_bytes(&mut salt);
    derive(password, &salt)
}

/// Check `attempt` against a stored hash. A stored salt that is not valid
/// hex can never verify.
pub fn verify_password(stored: &PasswordHash, attempt: &str) -> bool {
    let Ok(salt) = hex::decode(&stored.salt) else {
        return false;
    };
    derive(attempt, &salt).hash == stored.hash.to_lowercase()
}

fn derive(password: &str, salt: &[u8]) -> PasswordHash {
    let mut digest = [0u8; DIGEST_LEN];
    pbkdf2_hmac::<Sha256>(password.as_bytes(), salt, PBKDF2_ROUNDS, &mut digest);
    PasswordHash {
        salt: hex::encode(salt),
        hash: hex::encode(digest),
    }
}

/// Interactive registration. Usernames are unique case-insensitively; the
/// password is typed twice; the role token must be `visitor` or
/// `organizer`. Any rejection aborts without touching the user file.
pub fn register_interactive(data: &DataDir, t: &Catalog) -> anyhow::Result<()> {
    let mut users = data.load_users();
    term::heading(t.msg("register_header"));

    let username = term::prompt(t.msg("prompt_username"));
    if username.is_empty() || username == "0" {
        return Ok(());
    }
    if users
        .iter()
        .any(|u| u.username.eq_ignore_ascii_case(&username))
    {
        term::error(t.msg("register_fail_exists"));
        return Ok(());
    }

    let password = term::prompt(t.msg("prompt_password"));
    let confirm = term::prompt(t.msg("prompt_password_confirm"));
    if password != confirm {
        term::error(t.msg("password_mismatch"));
        return Ok(());
    }

    let Some(role) = Role::from_input(&term::prompt(t.msg("prompt_role_register"))) else {
        term::error(t.msg("invalid_role"));
        return Ok(());
    };

    users.push(User {
        username,
        password: hash_password(&password),
        role,
    });
    data.save_users(&users)?;
    term::success(t.msg("register_success"));
    Ok(())
}

/// Interactive login. Returns the authenticated user, or `None` on cancel
/// or bad credentials (a message has already been shown).
pub fn login_interactive(data: &DataDir, t: &Catalog) -> Option<User> {
    let users = data.load_users();
    term::heading(t.msg("login_header"));

    let username = term::prompt(t.msg("prompt_username"));
    if username.is_empty() || username == "0" {
        return None;
    }
    let password = term::prompt(t.msg("prompt_password"));

    match users
        .iter()
        .find(|u| u.username.eq_ignore_ascii_case(&username))
    {
        Some(user) if verify_password(&user.password, &password) => {
            term::success(t.msg("login_success"));
            Some(user.clone())
        }
        _ => {
            term::error(t.msg("login_fail"));
            None
        }
    }
}
