pub mod candidate;
pub mod question;
pub mod session;
