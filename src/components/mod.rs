//! UI components, one module per page concern.

pub mod binary_rain;
pub mod contact;
pub mod navbar;
pub mod neural_network;
pub mod notification;
pub mod projects;
pub mod resume;
pub mod typing;
