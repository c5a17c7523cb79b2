//! Integration tests for directory fingerprinting

mod cli_routes;
mod test_utils;
mod unreadable_files;
