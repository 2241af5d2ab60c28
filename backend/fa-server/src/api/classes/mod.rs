pub mod class_dto;
pub mod class_request;
pub mod classes;
