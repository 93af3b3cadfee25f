//! Core traits defined in `parkhub-core` and implemented by other crates.

pub mod observer;

pub use observer::{LotObserver, NoopObserver};
