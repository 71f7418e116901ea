pub mod home;
pub mod moderate;
