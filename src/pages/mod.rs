//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. `login` carries the authentication submission workflow;
//! the other pages are thin.

pub mod forgot_password;
pub mod home;
pub mod login;
pub mod signup;
