pub mod pika;
pub mod redis;
pub mod store;
