//! Shell-side pieces of the sbmd command.
//!
//! The conversion itself lives in `sbmd-babel`. This crate only moves text
//! in and out of it: the system clipboard, files and stdin/stdout, plus the
//! status lines printed around a conversion.

pub mod clipboard;
pub mod session;
pub mod status;
