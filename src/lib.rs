//! Decoding of MetaWeblog, Blogger and WordPress XML-RPC calls into commands.
#[macro_use]
extern crate serde_derive;

pub use weblog_rpc_api as api;

pub mod config;
mod document;
pub mod fault;
mod medias;
pub mod methods;
mod pages;
mod posts;
mod request;
mod value;

pub use crate::config::{Config, CONFIG};
pub use crate::fault::{Fault, StructKind};
pub use crate::methods::{Dialect, Method, Slot};
pub use crate::request::{decode, decode_with, RpcCommand};
