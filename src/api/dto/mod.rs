//! Response payloads, one module per controller

pub mod data_dto;
pub mod home_dto;
pub mod system_dto;
