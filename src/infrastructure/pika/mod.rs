pub mod client;

pub use client::{PikaClient, PikaError, PikaVideoRequest};
