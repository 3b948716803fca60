//! Authentication building blocks (JWT tokens).

pub mod jwt;
