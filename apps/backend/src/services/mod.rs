//! Service layer: business logic between routes and repositories.

pub mod credentials;

pub use credentials::{verify_credentials, CredentialError, VerifiedIdentity};
