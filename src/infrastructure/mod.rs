//! Adapters for the domain ports: HTTP and in-memory order services, and
//! notifiers that write to the console or to the log.

pub mod http;
pub mod in_memory;
pub mod notifier;
