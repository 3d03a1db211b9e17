//! Account operations over a [`UserStore`].
//!
//! Passwords are hashed here before any write, and access tokens are minted
//! through [`AuthService`].

use log::{debug, info, warn};
use mongodb::bson::oid::ObjectId;

use crate::config::DEFAULT_BCRYPT_COST;
use crate::errors::RepoError;
use crate::models::{
    normalize_email, AuthResponse, AuthenticateParams, CreateUserParams, Role, UpdateUserParams,
    User, UserResponse, UserSummary,
};
use crate::repositories::UserStore;
use crate::services::auth_service::{hash_password, verify_password, AuthService};
use crate::utils::log_sanitizer::mask_email;

pub struct UserRepository<S: UserStore> {
    store: S,
    auth: AuthService,
    hash_cost: u32,
}

impl<S: UserStore> UserRepository<S> {
    pub fn new(store: S, auth: AuthService) -> Self {
        Self {
            store,
            auth,
            hash_cost: DEFAULT_BCRYPT_COST,
        }
    }

    /// Override the bcrypt work factor used for new hashes.
    pub fn with_hash_cost(mut self, cost: u32) -> Self {
        self.hash_cost = cost;
        self
    }

    #[cfg(test)]
    fn store(&self) -> &S {
        &self.store
    }

    /// List every user, without password hashes.
    pub async fn get_all(&self) -> Result<Vec<UserResponse>, RepoError> {
        let users = self.store.find_all().await?;
        debug!("Fetched {} users", users.len());
        Ok(users)
    }

    /// Fetch one user.
    ///
    /// Malformed ids, missing users and store failures all surface as
    /// `NotFound`.
    pub async fn get_by_id(&self, id: &str) -> Result<UserResponse, RepoError> {
        debug!("Fetching user by ID: {}", id);
        let object_id = parse_id(id)?;

        match self.store.find_by_id(object_id).await {
            Ok(Some(user)) => Ok(user.into()),
            Ok(None) => Err(RepoError::not_found()),
            Err(err) => {
                warn!("Lookup of user {} failed: {}", id, err);
                Err(RepoError::not_found())
            }
        }
    }

    /// Register a new account and sign it in.
    pub async fn create(&self, params: CreateUserParams) -> Result<AuthResponse, RepoError> {
        let email = normalize_email(&params.email);
        info!("Creating user: {}", mask_email(&email));

        let password_hash = hash_password(&params.password, self.hash_cost)?;
        let mut user = User::new(params.name, email, password_hash);

        let id = self.store.insert(&user).await.inspect_err(|err| {
            warn!("Create failed for {}: {}", mask_email(&user.email), err);
        })?;
        user.id = Some(id);

        let token = self.auth.create_access_token(&id)?;
        info!("Created user {}", id);

        Ok(AuthResponse {
            user: UserSummary::from(&user),
            token,
        })
    }

    /// Merge the given fields onto an existing user.
    pub async fn update(
        &self,
        id: &str,
        params: UpdateUserParams,
    ) -> Result<UserResponse, RepoError> {
        info!("Updating user: {}", id);
        let object_id = parse_id(id)?;

        let mut user = self.store.find_by_id(object_id).await?.ok_or_else(|| {
            warn!("Update failed: User not found with id: {}", id);
            RepoError::not_found()
        })?;

        if params.is_empty() {
            debug!("No changes requested for user: {}", id);
            return Ok(user.into());
        }

        if let Some(name) = params.name {
            user.name = name;
        }
        if let Some(email) = params.email {
            user.email = normalize_email(&email);
        }
        if let Some(role) = params.role {
            user.role = role;
        }
        if let Some(root) = params.root {
            user.root = root;
        }
        user.updated_at = mongodb::bson::DateTime::now();

        if !self.store.save(&user).await? {
            warn!("Update failed: User {} disappeared before save", id);
            return Err(RepoError::not_found());
        }

        info!("Successfully updated user: {}", id);
        Ok(user.into())
    }

    /// Permanently remove a user.
    pub async fn delete(&self, id: &str) -> Result<(), RepoError> {
        info!("Deleting user with id: {}", id);
        let object_id = parse_id(id)?;

        if !self.store.delete(object_id).await? {
            warn!("Delete failed: User not found with id: {}", id);
            return Err(RepoError::not_found());
        }

        info!("Successfully deleted user: {}", id);
        Ok(())
    }

    /// Replace a user's password without checking the old one.
    pub async fn reset_password(&self, id: &str, password: &str) -> Result<(), RepoError> {
        info!("Resetting password for user: {}", id);
        let object_id = parse_id(id)?;
        let password_hash = hash_password(password, self.hash_cost)?;

        if !self
            .store
            .update_password(object_id, &password_hash)
            .await?
        {
            warn!("Password reset failed: User not found with id: {}", id);
            return Err(RepoError::not_found());
        }

        info!("Successfully reset password for user: {}", id);
        Ok(())
    }

    /// Check credentials and mint an access token.
    pub async fn authenticate(
        &self,
        params: AuthenticateParams,
    ) -> Result<AuthResponse, RepoError> {
        let email = normalize_email(&params.email);
        debug!("Authenticating {}", mask_email(&email));

        let user = self.store.find_by_email(&email).await?.ok_or_else(|| {
            warn!("Login failed: no user with email {}", mask_email(&email));
            RepoError::not_found()
        })?;

        if !verify_password(&params.password, &user.password)? {
            warn!("Login failed: wrong password for {}", mask_email(&email));
            return Err(RepoError::InvalidCredentials);
        }

        let id = user.id.ok_or_else(RepoError::not_found)?;
        let token = self.auth.create_access_token(&id)?;

        Ok(AuthResponse {
            user: UserSummary::from(&user),
            token,
        })
    }

    /// Create the root administrator when no root account exists yet.
    ///
    /// Returns whether a user was created.
    pub async fn ensure_root_user(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<bool, RepoError> {
        if self.store.find_root().await?.is_some() {
            info!("Root user already exists, skipping seed");
            return Ok(false);
        }

        let email = normalize_email(email);
        if self.store.find_by_email(&email).await?.is_some() {
            warn!(
                "User with email {} already exists but is not root",
                mask_email(&email)
            );
            return Ok(false);
        }

        let password_hash = hash_password(password, self.hash_cost)?;
        let mut root = User::new(name.to_string(), email, password_hash);
        root.role = Role::Admin;
        root.root = true;

        self.store.insert(&root).await?;
        info!("Root user created: {}", mask_email(&root.email));
        info!("Please change the default root password after first login!");
        Ok(true)
    }
}

/// Parse a hex id. An id that cannot name a document cannot be found.
fn parse_id(id: &str) -> Result<ObjectId, RepoError> {
    ObjectId::parse_str(id).map_err(|_| {
        debug!("Rejecting malformed user id: {}", id);
        RepoError::not_found()
    })
}
