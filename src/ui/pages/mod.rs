//! Application pages module
//!
//! - Home page with the backend greeting
//! - Login and signup pages
//! - Private page (guarded)
//! - 404 page

mod home;
mod login;
mod not_found;
mod private;
mod signup;

pub use home::HomePage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use private::PrivatePage;
pub use signup::SignupPage;
