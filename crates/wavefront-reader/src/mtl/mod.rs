//! MTL file format support
//!
//! A material library is a sequence of `newmtl <name>` blocks, each followed
//! by `<code> <value...>` property lines (`Kd 0.64 0.64 0.64`, `illum 2`).

mod parser;
mod types;

pub use parser::{read_mtlfile, Materials, MtlParser};
pub use types::{Material, MaterialValue};
