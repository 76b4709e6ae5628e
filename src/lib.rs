//! repo-create: create remote GitHub repositories by driving the gh CLI
//!
//! Layers, innermost first: `domain` (request, invocation), `application`
//! (repository service), `infrastructure` (process runner, wiring), `cli`.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
