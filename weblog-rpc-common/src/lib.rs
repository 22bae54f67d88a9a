extern crate base64;
extern crate chrono;

pub mod utils;
