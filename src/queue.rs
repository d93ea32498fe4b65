use std::cmp::Ordering;
use std::fmt::Debug;

use async_trait::async_trait;

use thiserror::Error;

mod channel_outbound_queue;

pub use self::channel_outbound_queue::*;

use crate::element::Element;

/// An error that occurs when a queue operation fails.
#[derive(Error, Debug, PartialEq)]
pub enum QueueError<E> {
  /// The queue is at capacity. The rejected element is handed back to the
  /// caller, which owns the reaction policy (drop, retry later, escalate).
  #[error("Failed to enqueue an element, the queue is full: {0:?}")]
  Full(E),
}

/// The size of the queue.
#[derive(Debug, Clone, PartialEq)]
pub enum QueueSize {
  /// The queue has no capacity limit.
  Limitless,
  /// The queue has a capacity limit.
  Limited(usize),
}

impl QueueSize {
  /// Returns whether the queue has no capacity limit.
  pub fn is_limitless(&self) -> bool {
    matches!(self, QueueSize::Limitless)
  }

  /// Converts to an option type: `None` when limitless, `Some(num)` otherwise.
  pub fn to_option(&self) -> Option<usize> {
    match self {
      QueueSize::Limitless => None,
      QueueSize::Limited(c) => Some(*c),
    }
  }

  /// Converts to a usize, mapping limitless to `usize::MAX`.
  pub fn to_usize(&self) -> usize {
    match self {
      QueueSize::Limitless => usize::MAX,
      QueueSize::Limited(c) => *c,
    }
  }
}

impl PartialOrd<Self> for QueueSize {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    match (self, other) {
      (QueueSize::Limitless, QueueSize::Limitless) => Some(Ordering::Equal),
      (QueueSize::Limitless, _) => Some(Ordering::Greater),
      (_, QueueSize::Limitless) => Some(Ordering::Less),
      (QueueSize::Limited(l), QueueSize::Limited(r)) => l.partial_cmp(r),
    }
  }
}

/// A trait that defines the common observable state of a queue.
#[async_trait]
pub trait QueueBase<E: Element>: Debug + Send + Sync {
  /// Returns whether this queue is empty.
  async fn is_empty(&self) -> bool {
    self.len().await == QueueSize::Limited(0)
  }

  /// Returns whether this queue is non-empty.
  async fn non_empty(&self) -> bool {
    !self.is_empty().await
  }

  /// Returns whether the queue size has reached its capacity.
  async fn is_full(&self) -> bool {
    self.capacity().await == self.len().await
  }

  /// Returns whether the queue size has not reached its capacity.
  async fn non_full(&self) -> bool {
    !self.is_full().await
  }

  /// Returns the number of elements currently held.
  async fn len(&self) -> QueueSize;

  /// Returns the capacity of this queue.
  ///
  /// # Return Value
  /// - `QueueSize::Limitless` - If the queue has no capacity limit.
  /// - `QueueSize::Limited(num)` - If the queue has a capacity limit.
  async fn capacity(&self) -> QueueSize;
}

/// The producer half of the outbound-queue capability.
#[async_trait]
pub trait QueueWriter<E: Element>: QueueBase<E> {
  /// The specified element will be inserted into this queue,
  /// if the insertion can be performed immediately without violating the
  /// capacity limit. Never waits for space to become available.
  ///
  /// # Return Value
  /// - `Ok(())` - If the element is inserted successfully.
  /// - `Err(QueueError::Full(element))` - If the queue is at capacity.
  async fn enqueue(&mut self, element: E) -> Result<(), QueueError<E>>;

  /// Inserts the specified elements one by one, stopping at the first
  /// element the queue has no room for.
  async fn enqueue_all(&mut self, elements: Vec<E>) -> Result<(), QueueError<E>> {
    for element in elements {
      self.enqueue(element).await?;
    }
    Ok(())
  }
}

/// The consumer half of the outbound-queue capability.
#[async_trait]
pub trait QueueReader<E: Element>: QueueBase<E> {
  /// Removes and returns the head of the queue, waiting until an element
  /// becomes available. Elements come out in the exact order they were
  /// inserted.
  ///
  /// Cancel-safe: a caller that abandons a pending `dequeue` leaves the
  /// queue state untouched.
  async fn dequeue(&mut self) -> E;
}

/// The full outbound-queue capability: a writer and a reader over the same
/// buffer. Callers are written against this trait so that backends
/// (in-memory, broker-backed) stay interchangeable.
pub trait OutboundQueue<E: Element>: QueueWriter<E> + QueueReader<E> {}

impl<E: Element, Q: QueueWriter<E> + QueueReader<E>> OutboundQueue<E> for Q {}
