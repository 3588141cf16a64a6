//! Wire contracts and pure report logic shared by the commission report client

pub mod domain;
pub mod shared;
