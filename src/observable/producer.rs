use crate::disposable::{Disposable, SinkDisposer};

/// Subscribe-time plumbing shared by every sink-based observable.
///
/// Mints a fresh [`SinkDisposer`], lets `run` build its sink around it and
/// subscribe that sink upstream, then stores the upstream subscription in the
/// disposer. The disposer is what the subscriber gets back: disposing it
/// disposes the sink and the upstream subscription together.
///
/// `run` may already have disposed the sink by the time it returns (a
/// synchronous source that completed during `subscribe`); the upstream
/// subscription is then released right away.
pub fn produce<F, U>(run: F) -> SinkDisposer
where
  F: FnOnce(SinkDisposer) -> U,
  U: Disposable + Send + 'static,
{
  let disposer = SinkDisposer::new();
  let subscription = run(disposer.clone());
  disposer.set_subscription(subscription);
  disposer
}
