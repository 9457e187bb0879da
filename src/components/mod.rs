pub mod canvas;
pub mod contact;
pub mod effects;
pub mod layout;
pub mod solar_system;
