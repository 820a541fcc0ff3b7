//! Registration, login and bearer-token issuance.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::SaltString;
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use chrono::{Duration, Utc};
use entity::user::UserRole;
use jsonwebtoken::{encode, EncodingKey, Header};
use sea_orm::DatabaseConnection;

use crate::{
    model::auth::{LoginDto, RegisterDto},
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, AppError},
        middleware::auth::Claims,
        model::user::CreateUserParams,
        state::AuthConfig,
        util::validate::is_valid_email,
    },
};

/// Issued tokens stay valid for a week.
const TOKEN_TTL_DAYS: i64 = 7;

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    auth: &'a AuthConfig,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, auth: &'a AuthConfig) -> Self {
        Self { db, auth }
    }

    /// Registers a new guest account and signs a token for it.
    ///
    /// # Returns
    /// - `Ok((user, token))` - The created account and its bearer token
    /// - `Err(AppError::BadRequest)` - Missing field, bad email, short password
    /// - `Err(AppError::Conflict)` - Username or email already registered
    pub async fn register(
        &self,
        dto: RegisterDto,
    ) -> Result<(entity::user::Model, String), AppError> {
        if dto.username.trim().is_empty() || dto.email.trim().is_empty() || dto.password.is_empty()
        {
            return Err(AppError::BadRequest(
                "Username, email and password are required".to_string(),
            ));
        }
        if !is_valid_email(&dto.email) {
            return Err(AppError::BadRequest("Invalid email format".to_string()));
        }
        if dto.password.len() < 6 {
            return Err(AppError::BadRequest(
                "Password must be at least 6 characters long".to_string(),
            ));
        }

        let user_repo = UserRepository::new(self.db);

        if user_repo.username_taken(&dto.username, None).await?
            || user_repo.email_taken(&dto.email, None).await?
        {
            return Err(AppError::Conflict("User already exists".to_string()));
        }

        let user = user_repo
            .create(CreateUserParams {
                username: dto.username,
                email: dto.email,
                password_hash: Self::hash_password(&dto.password)?,
                full_name: dto.full_name.unwrap_or_default(),
                phone: dto.phone,
                role: UserRole::Guest,
            })
            .await?;

        let token = self.issue_token(&user)?;

        Ok((user, token))
    }

    /// Verifies credentials and signs a token.
    ///
    /// # Returns
    /// - `Ok((user, token))` - The authenticated account and its bearer token
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - Unknown user, wrong
    ///   password, or deactivated account
    pub async fn login(&self, dto: LoginDto) -> Result<(entity::user::Model, String), AppError> {
        if dto.username.trim().is_empty() || dto.password.is_empty() {
            return Err(AppError::BadRequest(
                "Username and password are required".to_string(),
            ));
        }

        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_username(&dto.username).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !user.is_active || !Self::verify_password(&dto.password, &user.password_hash) {
            return Err(AuthError::InvalidCredentials.into());
        }

        let token = self.issue_token(&user)?;

        Ok((user, token))
    }

    /// Signs an HS256 bearer token for the given account.
    pub fn issue_token(&self, user: &entity::user::Model) -> Result<String, AppError> {
        let claims = Claims {
            sub: user.id,
            username: user.username.clone(),
            role: user.role,
            exp: (Utc::now() + Duration::days(TOKEN_TTL_DAYS)).timestamp(),
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.auth.jwt_secret.as_bytes()),
        )
        .map_err(|e| AppError::InternalError(format!("Failed to sign token: {}", e)))
    }

    /// Hashes a password with argon2 and a fresh random salt.
    pub fn hash_password(password: &str) -> Result<String, AppError> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::InternalError(format!("Failed to hash password: {}", e)))?;
        Ok(hash.to_string())
    }

    /// Verifies a password against a stored argon2 hash.
    pub fn verify_password(password: &str, hash: &str) -> bool {
        let Ok(parsed) = PasswordHash::new(hash) else {
            return false;
        };
        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok()
    }
}
