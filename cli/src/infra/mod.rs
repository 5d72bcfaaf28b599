//! Infrastructure layer — concrete implementations of application port traits.
//!
//! This module contains all I/O-performing code: process execution, the
//! `git`, `rad`, and `ssh` adapters, and terminal confirmation.
//!
//! Imports from `crate::domain` and `crate::application::ports` are allowed.
//! Imports from `crate::commands` or `crate::output` are forbidden.

pub mod command_runner;
pub mod confirm;
pub mod git;
pub mod keys;
pub mod ssh;
