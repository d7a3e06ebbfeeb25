//! CLI command implementations.
//!
//! Available commands:
//! - **convert**: Convert a dataset into exercise directories
//! - **verify**: Check golden data against the current transforms
//! - **transform**: Transform a single file
//! - **init**: Initialize a new configuration file

pub mod convert;
pub mod init;
pub mod transform;
pub mod verify;

pub use convert::{handle_convert, ConvertConfig};
pub use init::init_config;
pub use transform::{handle_transform, transform_file};
pub use verify::handle_verify;
