//! Integration tests for the deskfs virtual file system

mod cli_contracts;
mod persistence;
mod properties;
mod vfs_operations;
