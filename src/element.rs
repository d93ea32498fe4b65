use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::Arc;

/// Fundamental constraints for items that can be buffered in an outbound queue.
///
/// By requiring `Debug`, `Send`, `Sync`, and `'static`, this trait ensures
/// element types that can be safely handed between producer and consumer tasks.
/// The queue never inspects element contents.
pub trait Element: Debug + Send + Sync + 'static {}

macro_rules! impl_element_for_primitives {
  ($($ty:ty),* $(,)?) => {
    $(impl Element for $ty {})*
  };
}

impl_element_for_primitives!(i8, i16, i32, i64, isize);
impl_element_for_primitives!(u8, u16, u32, u64, usize);
impl_element_for_primitives!(f32, f64, bool, char);

impl Element for String {}

impl Element for serde_json::Value {}

impl Element for serde_json::Map<String, serde_json::Value> {}

impl<T> Element for Box<T> where T: Debug + Send + Sync + 'static {}

impl<T> Element for Arc<T> where T: Debug + Send + Sync + 'static {}

impl<T> Element for Option<T> where T: Debug + Send + Sync + 'static {}

impl<T> Element for Vec<T> where T: Debug + Send + Sync + 'static {}

impl<T> Element for HashMap<String, T> where T: Debug + Send + Sync + 'static {}
