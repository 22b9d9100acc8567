//! Domain logic

pub mod postman;
