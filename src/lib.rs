pub mod args;
pub mod config;
pub mod db;
pub mod evaluator;
pub mod logging;
pub mod notice;
pub mod session;
pub mod share;
pub mod stats;
pub mod ui;
pub mod word;
pub mod wordlist;
