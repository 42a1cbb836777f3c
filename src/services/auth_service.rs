use argon2::{
    Argon2, PasswordHasher,
    password_hash::{PasswordHash, PasswordVerifier, SaltString},
};
use chrono::{Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use password_hash::rand_core::OsRng;
use sea_orm::ActiveValue::{NotSet, Set, Unchanged};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::{
    dto::auth::{AuthResponse, Claims, LoginRequest, SignupRequest},
    entity::{
        Users,
        users::{ActiveModel as UserActive, Column as UserCol, Model as UserModel},
    },
    error::{AppError, AppResult},
    ids::{new_id, now},
    models::User,
    services::pagination::{Page, PageWindow, list_page},
    state::AppState,
};

const ACCESS_TOKEN_HOURS: i64 = 24;
const REFRESH_TOKEN_HOURS: i64 = 168;

/// Register a user. Email and phone are checked with a count before the insert; two
/// concurrent signups with the same email can both pass the check.
pub async fn signup(state: &AppState, payload: SignupRequest) -> AppResult<AuthResponse> {
    state
        .bounded(async {
            let SignupRequest {
                first_name,
                last_name,
                email,
                phone,
                password,
            } = payload;

            for (field, value) in [
                ("first_name", &first_name),
                ("last_name", &last_name),
                ("email", &email),
                ("phone", &phone),
            ] {
                if value.trim().is_empty() {
                    return Err(AppError::BadRequest(format!("{field} is required")));
                }
            }
            if !email.contains('@') {
                return Err(AppError::BadRequest("email is invalid".into()));
            }
            if password.len() < 6 {
                return Err(AppError::BadRequest(
                    "password must be at least 6 characters".into(),
                ));
            }

            let taken = Users::find()
                .filter(
                    Condition::any()
                        .add(UserCol::Email.eq(email.as_str()))
                        .add(UserCol::Phone.eq(phone.as_str())),
                )
                .count(&state.orm)
                .await?;
            if taken > 0 {
                return Err(AppError::BadRequest(
                    "This email or phone already exists".to_string(),
                ));
            }

            let password_hash = hash_password(&password)?;
            let id = new_id();
            let (token, refresh_token) =
                issue_tokens(&state.jwt_secret, &email, &first_name, &last_name, &id)?;

            let stamped = now();
            let user = UserActive {
                id: Set(id),
                first_name: Set(first_name),
                last_name: Set(last_name),
                email: Set(email),
                phone: Set(phone),
                password_hash: Set(password_hash),
                token: Set(Some(token.clone())),
                refresh_token: Set(Some(refresh_token.clone())),
                created_at: Set(stamped),
                updated_at: Set(stamped),
            }
            .insert(&state.orm)
            .await?;

            tracing::info!(user_id = %user.id, "user registered");
            Ok(AuthResponse {
                user: User::from(user),
                token,
                refresh_token,
            })
        })
        .await
}

pub async fn login(state: &AppState, payload: LoginRequest) -> AppResult<AuthResponse> {
    state
        .bounded(async {
            let LoginRequest { email, password } = payload;
            let user = Users::find()
                .filter(UserCol::Email.eq(email.as_str()))
                .one(&state.orm)
                .await?
                .ok_or_else(|| AppError::BadRequest("Invalid email or password".into()))?;

            if !verify_password(&password, &user.password_hash)? {
                return Err(AppError::BadRequest("Invalid email or password".into()));
            }

            let (token, refresh_token) = issue_tokens(
                &state.jwt_secret,
                &user.email,
                &user.first_name,
                &user.last_name,
                &user.id,
            )?;
            let user = store_tokens(state, &user, &token, &refresh_token).await?;

            tracing::info!(user_id = %user.id, "user logged in");
            Ok(AuthResponse {
                user: User::from(user),
                token,
                refresh_token,
            })
        })
        .await
}

pub async fn list_users(state: &AppState, window: PageWindow) -> AppResult<Page<User>> {
    state
        .bounded(async {
            let finder = Users::find()
                .order_by_asc(UserCol::CreatedAt)
                .order_by_asc(UserCol::Id);
            let page = list_page(&state.orm, finder, window).await?;
            Ok(page.map(User::from))
        })
        .await
}

async fn store_tokens(
    state: &AppState,
    user: &UserModel,
    token: &str,
    refresh_token: &str,
) -> AppResult<UserModel> {
    let patch = UserActive {
        id: Unchanged(user.id.clone()),
        first_name: NotSet,
        last_name: NotSet,
        email: NotSet,
        phone: NotSet,
        password_hash: NotSet,
        token: Set(Some(token.to_string())),
        refresh_token: Set(Some(refresh_token.to_string())),
        created_at: NotSet,
        updated_at: Set(now()),
    };
    Ok(patch.update(&state.orm).await?)
}

pub fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let password_hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(anyhow::anyhow!(e.to_string())))?
        .to_string();
    Ok(password_hash)
}

pub fn verify_password(password: &str, password_hash: &str) -> AppResult<bool> {
    let parsed_hash = PasswordHash::new(password_hash)
        .map_err(|_| AppError::Internal(anyhow::anyhow!("Invalid password hash")))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

/// Signed access token (24h) and refresh token (168h) for the same identity.
pub fn issue_tokens(
    secret: &str,
    email: &str,
    first_name: &str,
    last_name: &str,
    uid: &str,
) -> AppResult<(String, String)> {
    let sign = |hours: i64| -> AppResult<String> {
        let expiration = Utc::now()
            .checked_add_signed(Duration::hours(hours))
            .ok_or_else(|| AppError::Internal(anyhow::anyhow!("Failed to set expiration")))?;
        let claims = Claims {
            email: email.to_string(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            uid: uid.to_string(),
            exp: expiration.timestamp() as usize,
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .map_err(|e| AppError::Internal(anyhow::anyhow!(e.to_string())))
    };

    Ok((sign(ACCESS_TOKEN_HOURS)?, sign(REFRESH_TOKEN_HOURS)?))
}
