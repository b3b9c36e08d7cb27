//! Integration tests for castscribe

mod cli_test;
mod helpers;
mod transcript_test;
