use super::compact_map::Transform;

/// Transform of [`map`](crate::observable::ObservableExt::map): never drops,
/// never fails.
#[derive(Clone)]
pub struct MapFn<F>(pub F);

impl<F, Item, Err, R> Transform<Item, Err> for MapFn<F>
where
  F: FnMut(Item) -> R,
{
  type Output = R;

  #[inline]
  fn apply(&mut self, item: Item) -> Result<Option<R>, Err> { Ok(Some((self.0)(item))) }
}

#[cfg(test)]
mod tests {
  use std::sync::{Arc, Mutex};

  use crate::prelude::*;

  #[rxsink_macro::test]
  fn primitive_type() {
    let sum = Arc::new(Mutex::new(0));
    let c_sum = sum.clone();
    observable::from_iter(100..101)
      .map(|v| v * 2)
      .subscribe_next(move |v| *c_sum.lock().unwrap() += v);
    assert_eq!(*sum.lock().unwrap(), 200);
  }

  #[rxsink_macro::test]
  fn map_types_mixed() {
    let seen = Arc::new(Mutex::new(vec![]));
    let c_seen = seen.clone();
    observable::from_iter(vec!['a', 'b', 'c'])
      .map(|c| c as u32)
      .map(|v| v - 'a' as u32)
      .subscribe_next(move |v| c_seen.lock().unwrap().push(v));
    assert_eq!(*seen.lock().unwrap(), vec![0, 1, 2]);
  }

  #[rxsink_macro::test]
  fn error_passes_through() {
    let err = Arc::new(Mutex::new(None));
    let c_err = err.clone();
    observable::throw::<i32, _>("boom").map(|v| v + 1).subscribe_with(
      |_| {},
      move |e| *c_err.lock().unwrap() = Some(e),
      || {},
    );
    assert_eq!(*err.lock().unwrap(), Some("boom"));
  }
}
