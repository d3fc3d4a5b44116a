pub mod auth;
pub mod common;
pub mod icon;
pub mod navbar;
pub mod pages;

pub use auth::{AuthContext, provide_auth_context, use_auth_context};
pub use icon::{Icon, icons};
pub use navbar::Navbar;
