//! Service layer: credential hashing, the AI delegation gateway, and the
//! seasonal alert derivation.

pub mod alerts;
pub mod insight;
pub mod password;
