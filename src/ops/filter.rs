use super::compact_map::Transform;

/// Transform of [`filter`](crate::observable::ObservableExt::filter).
#[derive(Clone)]
pub struct FilterFn<F>(pub F);

impl<F, Item, Err> Transform<Item, Err> for FilterFn<F>
where
  F: FnMut(&Item) -> bool,
{
  type Output = Item;

  #[inline]
  fn apply(&mut self, item: Item) -> Result<Option<Item>, Err> {
    Ok((self.0)(&item).then_some(item))
  }
}
