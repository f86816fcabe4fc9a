//! Configuration utility types.
//!
//! | Module   | Purpose                                      |
//! |----------|----------------------------------------------|
//! | `error`  | Error taxonomy and collected diagnostics     |
//! | `field`  | Field paths addressing diagnostics           |

mod error;
mod field;

pub use error::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, ErrorKind, ReferenceKind};
pub use field::FieldPath;
