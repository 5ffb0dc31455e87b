//! Wire types shared between the contract generation page and the backend API.

pub mod domain;
pub mod usecases;
