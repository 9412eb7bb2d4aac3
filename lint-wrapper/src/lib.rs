#![doc = include_str!("../README.md")]
pub mod cli;
pub mod logger;
pub mod run;
pub mod tool;
