//! A pluggable outbound-message buffer for messaging clients.
//!
//! The capability callers hold is two operations: a non-suspending
//! [`enqueue`](QueueWriter::enqueue) that fails fast with
//! [`QueueError::Full`] when the buffer is at capacity, and a suspending
//! [`dequeue`](QueueReader::dequeue) that waits until the next element is
//! available. [`ChannelOutboundQueue`] is the in-memory implementation;
//! any other backend (e.g. a broker client) plugs in by implementing the
//! same traits.

mod element;
mod queue;

pub use self::{element::*, queue::*};
