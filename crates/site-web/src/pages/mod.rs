//! Page Components

mod contact;
mod home;
mod legal;

pub use contact::ContactPage;
pub use home::HomePage;
pub use legal::{PrivacyPage, TermsPage};
