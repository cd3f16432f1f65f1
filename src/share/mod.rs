//! Shareable preview links.

pub mod codec;
pub mod link;
