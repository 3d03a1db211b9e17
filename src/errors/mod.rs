use std::fmt;

use crate::constants::{
    CODE_DATABASE_ERROR, CODE_EMAIL_EXISTS, CODE_HASHING_ERROR, CODE_INVALID_CREDENTIALS,
    CODE_INVALID_TOKEN, CODE_USER_NOT_FOUND, ERR_INVALID_CREDENTIALS, ERR_INVALID_TOKEN,
    ERR_USER_NOT_FOUND,
};

/// MongoDB server error code for a unique index violation.
const DUPLICATE_KEY_CODE: i32 = 11000;

/// Discriminator for [`RepoError`], stable across message changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    UserExists,
    InvalidCredentials,
    Database,
    Hashing,
    Token,
}

#[derive(Debug)]
pub enum RepoError {
    NotFound { message: String },
    UserExists { email: String },
    InvalidCredentials,
    Database { message: String },
    Hashing { message: String },
    Token { message: String },
}

impl RepoError {
    pub fn not_found() -> Self {
        RepoError::NotFound {
            message: ERR_USER_NOT_FOUND.to_string(),
        }
    }

    pub fn user_exists(email: &str) -> Self {
        RepoError::UserExists {
            email: email.to_string(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            RepoError::NotFound { .. } => ErrorKind::NotFound,
            RepoError::UserExists { .. } => ErrorKind::UserExists,
            RepoError::InvalidCredentials => ErrorKind::InvalidCredentials,
            RepoError::Database { .. } => ErrorKind::Database,
            RepoError::Hashing { .. } => ErrorKind::Hashing,
            RepoError::Token { .. } => ErrorKind::Token,
        }
    }

    /// Machine-readable code for this error.
    pub fn code(&self) -> &'static str {
        match self.kind() {
            ErrorKind::NotFound => CODE_USER_NOT_FOUND,
            ErrorKind::UserExists => CODE_EMAIL_EXISTS,
            ErrorKind::InvalidCredentials => CODE_INVALID_CREDENTIALS,
            ErrorKind::Database => CODE_DATABASE_ERROR,
            ErrorKind::Hashing => CODE_HASHING_ERROR,
            ErrorKind::Token => CODE_INVALID_TOKEN,
        }
    }

    pub fn message(&self) -> String {
        match self {
            RepoError::NotFound { message }
            | RepoError::Database { message }
            | RepoError::Hashing { message }
            | RepoError::Token { message } => message.clone(),
            RepoError::UserExists { email } => {
                format!("An account with email \"{}\" already exists", email)
            }
            RepoError::InvalidCredentials => ERR_INVALID_CREDENTIALS.to_string(),
        }
    }
}

impl fmt::Display for RepoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self.kind() {
            ErrorKind::NotFound => "Not Found",
            ErrorKind::UserExists => "User Exists",
            ErrorKind::InvalidCredentials => "Invalid Credentials",
            ErrorKind::Database => "Database Error",
            ErrorKind::Hashing => "Hashing Error",
            ErrorKind::Token => "Token Error",
        };
        write!(f, "{} [{}]: {}", label, self.code(), self.message())
    }
}

impl std::error::Error for RepoError {}

/// Whether `err` is a unique index violation reported by the server.
pub fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    use mongodb::error::{ErrorKind as MongoErrorKind, WriteFailure};

    match err.kind.as_ref() {
        MongoErrorKind::Write(WriteFailure::WriteError(write_error)) => {
            write_error.code == DUPLICATE_KEY_CODE
        }
        MongoErrorKind::Command(command_error) => command_error.code == DUPLICATE_KEY_CODE,
        _ => false,
    }
}

impl From<mongodb::error::Error> for RepoError {
    fn from(err: mongodb::error::Error) -> Self {
        RepoError::Database {
            message: err.to_string(),
        }
    }
}

impl From<bcrypt::BcryptError> for RepoError {
    fn from(err: bcrypt::BcryptError) -> Self {
        RepoError::Hashing {
            message: err.to_string(),
        }
    }
}

impl From<jsonwebtoken::errors::Error> for RepoError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        RepoError::Token {
            message: format!("{}: {}", ERR_INVALID_TOKEN, err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_exists_carries_email() {
        let err = RepoError::user_exists("a@x.com");
        assert_eq!(err.kind(), ErrorKind::UserExists);
        assert_eq!(err.code(), CODE_EMAIL_EXISTS);
        assert!(err.message().contains("a@x.com"));
    }

    #[test]
    fn test_display_includes_code() {
        let err = RepoError::not_found();
        assert_eq!(err.to_string(), "Not Found [USER_NOT_FOUND]: User not found");
    }

    #[test]
    fn test_invalid_credentials_code() {
        let err = RepoError::InvalidCredentials;
        assert_eq!(err.kind(), ErrorKind::InvalidCredentials);
        assert_eq!(err.code(), CODE_INVALID_CREDENTIALS);
    }

    #[test]
    fn test_bcrypt_error_maps_to_hashing() {
        let err: RepoError = bcrypt::verify("pw", "not-a-hash").unwrap_err().into();
        assert_eq!(err.kind(), ErrorKind::Hashing);
    }
}
