pub mod alias;
pub mod review;
pub mod system_info;
