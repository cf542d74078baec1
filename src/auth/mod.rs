//
//  cloudfoundry-client
//  auth/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Authentication Module
//!
//! Credentials attached to every Cloud Controller request.
//!
//! Obtaining and refreshing tokens is the identity server's business; this
//! module only carries an already-issued credential and applies it to
//! outgoing requests.
//!
//! ## Example
//!
//! ```rust
//! use cloudfoundry_client::auth::AuthCredential;
//!
//! let credential = AuthCredential::bearer("bearer eyJhbGciOi...");
//! assert!(matches!(credential, AuthCredential::Bearer { .. }));
//! ```

use reqwest::RequestBuilder;

/// Authentication credentials supported by the client.
///
/// # Variants
///
/// - `Bearer`: An OAuth access token issued by the identity server (UAA).
/// - `Basic`: HTTP Basic authentication, used by some brokers and test setups.
#[derive(Clone)]
pub enum AuthCredential {
    /// OAuth 2.0 access token.
    Bearer {
        /// The raw access token, without the `bearer ` prefix.
        token: String,
    },
    /// Basic HTTP authentication with username and password.
    Basic {
        /// The username for authentication.
        username: String,
        /// The password for authentication.
        password: String,
    },
}

impl AuthCredential {
    /// Creates a bearer credential.
    ///
    /// The `cf oauth-token` command prints tokens as `bearer <token>`; the
    /// prefix is stripped (case-insensitively) so either form can be passed.
    ///
    /// # Example
    ///
    /// ```rust
    /// use cloudfoundry_client::auth::AuthCredential;
    ///
    /// let a = AuthCredential::bearer("bearer abc");
    /// let b = AuthCredential::bearer("abc");
    /// assert_eq!(a.token(), b.token());
    /// ```
    pub fn bearer(token: impl Into<String>) -> Self {
        let token = token.into();
        let trimmed = token.trim();
        let token = match trimmed.get(..7) {
            Some(prefix) if prefix.eq_ignore_ascii_case("bearer ") => trimmed[7..].trim(),
            _ => trimmed,
        };
        Self::Bearer {
            token: token.to_string(),
        }
    }

    /// Creates a basic-auth credential.
    pub fn basic(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self::Basic {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Returns the bearer token, if this is a bearer credential.
    pub fn token(&self) -> Option<&str> {
        match self {
            Self::Bearer { token } => Some(token),
            Self::Basic { .. } => None,
        }
    }

    /// Applies the authentication credential to an HTTP request.
    ///
    /// Bearer credentials set `Authorization: Bearer <token>`; basic
    /// credentials set `Authorization: Basic <base64>`.
    pub fn apply_to_request(&self, request: RequestBuilder) -> RequestBuilder {
        match self {
            Self::Bearer { token } => request.bearer_auth(token),
            Self::Basic { username, password } => request.basic_auth(username, Some(password)),
        }
    }
}

impl std::fmt::Debug for AuthCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bearer { .. } => f.debug_struct("Bearer").field("token", &"***").finish(),
            Self::Basic { username, .. } => f
                .debug_struct("Basic")
                .field("username", username)
                .field("password", &"***")
                .finish(),
        }
    }
}
