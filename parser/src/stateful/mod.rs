//! Stateful element-level decoding.

pub mod decode;
