//! Main module for org library functionality

pub mod ast;
pub mod inline;
pub mod lexing;
pub mod loader;
pub mod parsing;
pub mod text;
pub mod token;
