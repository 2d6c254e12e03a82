//! Background work that runs independently of request traffic.

pub mod scheduler;
pub mod sweep;

pub use scheduler::Scheduler;
