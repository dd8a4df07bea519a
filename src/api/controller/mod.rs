pub mod data;
pub mod home;
pub mod system;
