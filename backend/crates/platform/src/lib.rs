//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (HMAC-SHA256, URL-safe Base64, random bytes)
//! - Password hashing (Argon2id)
//! - Cookie and `Authorization` header handling

pub mod cookie;
pub mod crypto;
pub mod password;
