/// Configuration system
///
/// - `macros`: the `config_struct!` macro
/// - `schemas`: all configuration structures with their defaults
/// - `utils`: loading and global access helpers
pub mod macros;
pub mod schemas;
pub mod utils;

pub use schemas::*;
pub use utils::*;
