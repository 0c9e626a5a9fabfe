pub mod code;
pub mod page;
pub mod time;
pub mod validate;
