use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::element::Element;
use crate::queue::{QueueBase, QueueError, QueueReader, QueueSize, QueueWriter};
use async_trait::async_trait;
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;
use tokio::sync::Mutex;
use tracing::debug;


#[derive(Debug)]
enum Sender<E> {
  Bounded(mpsc::Sender<E>),
  Limitless {
    sender: mpsc::UnboundedSender<E>,
    count: Arc<AtomicUsize>,
  },
}

#[derive(Debug)]
enum Receiver<E> {
  Bounded(mpsc::Receiver<E>),
  Limitless(mpsc::UnboundedReceiver<E>),
}

/// An in-memory outbound queue backed by a tokio mpsc channel.
///
/// Bounded when constructed with a non-zero capacity, limitless otherwise.
/// Handles are cheap to clone; all clones share the same buffer, so any
/// number of producer and consumer tasks may operate on the queue
/// concurrently.
#[derive(Debug)]
pub struct ChannelOutboundQueue<E> {
  sender: Sender<E>,
  receiver: Arc<Mutex<Receiver<E>>>,
}

impl<E> Clone for ChannelOutboundQueue<E> {
  fn clone(&self) -> Self {
    let sender = match &self.sender {
      Sender::Bounded(sender) => Sender::Bounded(sender.clone()),
      Sender::Limitless { sender, count } => Sender::Limitless {
        sender: sender.clone(),
        count: Arc::clone(count),
      },
    };
    Self {
      sender,
      receiver: Arc::clone(&self.receiver),
    }
  }
}

impl<E> ChannelOutboundQueue<E> {
  /// Creates a queue holding at most `capacity` elements.
  /// A capacity of `0` means no limit.
  pub fn new(capacity: usize) -> Self {
    match capacity {
      0 => Self::limitless(),
      n => Self::bounded(n),
    }
  }

  /// Creates a queue with a hard capacity limit.
  pub fn bounded(capacity: usize) -> Self {
    assert!(capacity > 0, "Capacity must be greater than zero");
    let (sender, receiver) = mpsc::channel(capacity);
    debug!(capacity, "created bounded outbound queue");
    Self::from_parts(Sender::Bounded(sender), Receiver::Bounded(receiver))
  }

  /// Creates a queue without a capacity limit.
  pub fn limitless() -> Self {
    let (sender, receiver) = mpsc::unbounded_channel();
    debug!("created limitless outbound queue");
    Self::from_parts(
      Sender::Limitless {
        sender,
        count: Arc::new(AtomicUsize::new(0)),
      },
      Receiver::Limitless(receiver),
    )
  }

  fn from_parts(sender: Sender<E>, receiver: Receiver<E>) -> Self {
    Self {
      sender,
      receiver: Arc::new(Mutex::new(receiver)),
    }
  }
}

#[async_trait]
impl<E: Element> QueueBase<E> for ChannelOutboundQueue<E> {
  async fn len(&self) -> QueueSize {
    match &self.sender {
      // the channel's own permit accounting tracks the buffered element count
      Sender::Bounded(sender) => QueueSize::Limited(sender.max_capacity() - sender.capacity()),
      Sender::Limitless { count, .. } => QueueSize::Limited(count.load(Ordering::Relaxed)),
    }
  }

  async fn capacity(&self) -> QueueSize {
    match &self.sender {
      Sender::Bounded(sender) => QueueSize::Limited(sender.max_capacity()),
      Sender::Limitless { .. } => QueueSize::Limitless,
    }
  }
}

#[async_trait]
impl<E: Element> QueueWriter<E> for ChannelOutboundQueue<E> {
  async fn enqueue(&mut self, element: E) -> Result<(), QueueError<E>> {
    match &self.sender {
      Sender::Bounded(sender) => match sender.try_send(element) {
        Ok(()) => Ok(()),
        Err(TrySendError::Full(element)) => Err(QueueError::Full(element)),
        // the queue owns its receiver for its whole lifetime
        Err(TrySendError::Closed(_)) => unreachable!("receiver dropped while the queue is alive"),
      },
      Sender::Limitless { sender, count } => {
        // incremented before the send so a consumer's decrement always
        // observes the matching increment
        count.fetch_add(1, Ordering::Relaxed);
        if sender.send(element).is_err() {
          unreachable!("receiver dropped while the queue is alive");
        }
        Ok(())
      }
    }
  }
}

#[async_trait]
impl<E: Element> QueueReader<E> for ChannelOutboundQueue<E> {
  async fn dequeue(&mut self) -> E {
    // Waiters park on the mutex in arrival order, so the first consumer to
    // start waiting is the first to be handed an element. `recv` is
    // cancel-safe: an abandoned call loses nothing from the channel.
    let mut receiver_mg = self.receiver.lock().await;
    let received = match &mut *receiver_mg {
      Receiver::Bounded(receiver) => receiver.recv().await,
      Receiver::Limitless(receiver) => receiver.recv().await,
    };
    drop(receiver_mg);
    match received {
      Some(element) => {
        if let Sender::Limitless { count, .. } = &self.sender {
          count.fetch_sub(1, Ordering::Relaxed);
        }
        element
      }
      None => unreachable!("sender dropped while the queue is alive"),
    }
  }
}
