//! Stylesheet text handling: rule extraction and copy/download CSS export.

pub mod export;
pub mod extract;
