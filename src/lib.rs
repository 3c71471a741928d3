//! jsondir: JSON Directories
//!
//! Load a directory of JSON fragments as a single document. Each file is
//! stored at the key path spelled by its location, `db/server/tls.json`
//! becoming `server.tls` when `db` is loaded, and the merged tree is read and
//! edited through key paths.
//!
//! ```no_run
//! use jsondir::tree::{get, set};
//!
//! let mut tree = jsondir::load("config/db")?;
//! let port: i64 = get(&tree, &["server", "port"])?;
//! set(&mut tree, &["server", "port"], port + 1)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cli;
pub mod codec;
pub mod config;
pub mod error;
pub mod ingest;
pub mod logging;
pub mod tree;

pub use codec::{read_value, write_value};
pub use error::{ApiError, LoadError, PathError};
pub use ingest::{load, EntryPoint, IngestConfig, Ingestor};
pub use tree::{get, get_ref, set, set_with_policy, KeyPath, MergePolicy, Tree};
