pub mod dashboard;
pub mod login;
pub mod public;

pub use dashboard::*;
pub use login::LoginPage;
pub use public::*;
