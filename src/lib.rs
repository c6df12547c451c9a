// (C) Copyright 2019-2020 Hewlett Packard Enterprise Development LP

#![forbid(unsafe_code)]

//! # Rust summarizer for Dockerfile base images and users
//!
//! A pure Rust library that parses the `FROM`, `USER` and comment lines of a
//! Dockerfile and reports which images a build starts from, which users it
//! runs as, and what its comments say. Any other instruction is a syntax
//! error, reported with the line and column where parsing stopped.
//!
//! ## Quick start
//!
//! ```rust
//! use dockerfile_summary::Dockerfile;
//!
//! let dockerfile = Dockerfile::parse(r#"
//!   ## build stage
//!   FROM myregistry.io:5000/rust:1.75 AS builder
//!
//!   FROM alpine
//!   USER app:app
//! "#).unwrap();
//!
//! for from in &dockerfile.commands.from_commands {
//!   println!("{} from {} (tag {})", from.image, from.registry, from.tag);
//! }
//!
//! println!("{}", serde_json::to_string_pretty(&dockerfile).unwrap());
//! ```

#[macro_use] extern crate pest_derive;

mod error;
mod parser;
mod span;
mod util;
mod image;
mod instructions;
mod dockerfile;

pub use image::*;
pub use error::*;
pub use parser::*;
pub use instructions::*;
pub use span::*;
pub use crate::dockerfile::*;

#[cfg(test)] mod test_util;
