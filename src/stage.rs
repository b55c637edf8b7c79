//! The Stage primitive
//!
//! A [`Stage`] is the receiving half of a depth-one tokio channel plus the
//! worker task that fills it. The worker closes the Stage by finishing; a
//! consumer sees the close as `None` from [`Stage::recv`], every time it asks.
//!
//! Dropping a Stage is the cancellation signal. The worker notices on its next
//! send, or while it waits on its own upstream, stops, and drops its upstream
//! Stages in turn, so an early-terminating consumer such as `take` never
//! leaves a chain of blocked workers behind.

use futures_core::Stream;
use futures_util::pin_mut;
use futures_util::stream::StreamExt;
use std::fmt;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::spawn;
use tokio::sync::mpsc;

use crate::ops::{aggregate, inspect, merge, pad, split, transform};
use crate::stage_configuration::StageConfig;

/// A value paired with its ordinal position, produced by [`Stage::enumerate`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Indexed<T> {
    pub index: usize,
    pub value: T,
}

/// Handle to an in-flight, ordered sequence produced by one background worker.
///
/// A Stage has exactly one consumer. Operators take it by value, so ownership
/// moves down the pipeline with it.
pub struct Stage<T> {
    rx: mpsc::Receiver<T>,
}

/// A Stage whose values are themselves Stages
pub type StageOfStages<T> = Stage<Stage<T>>;

impl<T> Stage<T>
where
    T: Send + 'static,
{
    /// Spawn a worker that pumps `source` into a new Stage.
    ///
    /// Must be called from within a tokio runtime.
    pub fn from_stream<S>(source: S) -> Self
    where
        S: Stream<Item = T> + Send + 'static,
    {
        Self::from_stream_with(StageConfig::default(), source)
    }

    /// Spawn a worker with an explicit queue depth and log label
    pub fn from_stream_with<S>(config: StageConfig, source: S) -> Self
    where
        S: Stream<Item = T> + Send + 'static,
    {
        let (tx, stage) = Self::channel(config.channel_depth());
        let label = config.label().to_string();

        spawn(async move {
            pin_mut!(source);
            let mut sent: u64 = 0;
            log::trace!("{} worker started", label);

            loop {
                let item = tokio::select! {
                    item = source.next() => item,
                    _ = tx.closed() => None,
                };
                let Some(item) = item else { break };

                if tx.send(item).await.is_err() {
                    break;
                }
                sent += 1;
            }

            if tx.is_closed() {
                log::debug!(
                    "{} consumer dropped after {} values; stopping worker",
                    label,
                    sent
                );
            } else {
                log::trace!("{} worker closed after {} values", label, sent);
            }
        });

        stage
    }

    /// A Stage that is already fully populated and closed.
    ///
    /// No worker is spawned; the values sit in the queue until drained.
    pub fn settled(values: Vec<T>) -> Self {
        let (tx, stage) = Self::channel(values.len().max(1));
        for value in values {
            if tx.try_send(value).is_err() {
                break;
            }
        }
        stage
    }

    pub(crate) fn channel(depth: usize) -> (mpsc::Sender<T>, Self) {
        let (tx, rx) = mpsc::channel(depth);
        (tx, Stage { rx })
    }

    /// Pull the next value, or `None` once the Stage is closed and drained.
    pub async fn recv(&mut self) -> Option<T> {
        self.rx.recv().await
    }

    /// True once the worker has finished; buffered values may still remain
    pub fn is_closed(&self) -> bool {
        self.rx.is_closed()
    }

    // ================================
    // Transform operators
    // ================================

    /// Emit at most the first `n` values
    pub fn take(self, n: usize) -> Stage<T> {
        transform::take(self, n)
    }

    /// Emit values until `predicate` holds; the triggering value is discarded
    pub fn until<F>(self, predicate: F) -> Stage<T>
    where
        F: FnMut(&T) -> bool + Send + 'static,
    {
        transform::until(self, predicate)
    }

    /// Emit `f(value)` for every value
    pub fn map<U, F>(self, f: F) -> Stage<U>
    where
        U: Send + 'static,
        F: FnMut(T) -> U + Send + 'static,
    {
        transform::map(self, f)
    }

    /// Emit only the values for which `predicate` holds
    pub fn filter<F>(self, predicate: F) -> Stage<T>
    where
        F: FnMut(&T) -> bool + Send + 'static,
    {
        transform::filter(self, predicate)
    }

    /// Discard the first `n` values, then forward the rest
    pub fn drop(self, n: usize) -> Stage<T> {
        transform::drop(self, n)
    }

    /// Emit the values at positions 0, n, 2n, …
    ///
    /// # Panics
    ///
    /// Panics if `n` is zero.
    pub fn stride(self, n: usize) -> Stage<T> {
        transform::stride(self, n)
    }

    // ================================
    // Aggregating operators
    // ================================

    /// Fold every value into one, seeded by the first value
    pub fn reduce<F>(self, f: F) -> Stage<T>
    where
        F: FnMut(T, T) -> T + Send + 'static,
    {
        aggregate::reduce(self, f)
    }

    /// Emit only the final value
    pub fn last(self) -> Stage<T> {
        aggregate::last(self)
    }

    /// Emit the final `n` values in their original order
    pub fn tail(self, n: usize) -> Stage<T> {
        aggregate::tail(self, n)
    }

    // ================================
    // Merge operators
    // ================================

    /// Append every value of `other` once this Stage is exhausted
    pub fn chain(self, other: Stage<T>) -> Stage<T> {
        merge::chain(vec![self, other])
    }

    /// Alternate with `other`, stopping when either is exhausted
    pub fn zip(self, other: Stage<T>) -> Stage<T> {
        merge::zip(vec![self, other])
    }

    /// Alternate with `other`, skipping whichever is exhausted first
    pub fn round_robin(self, other: Stage<T>) -> Stage<T> {
        merge::round_robin(vec![self, other])
    }

    // ================================
    // Split, padding and inspection
    // ================================

    /// Group consecutive values into settled Stages of `n` values
    ///
    /// # Panics
    ///
    /// Panics if `n` is zero.
    pub fn chunk(self, n: usize) -> StageOfStages<T> {
        split::chunk(self, n)
    }

    /// Pad with copies of `value` at the end until `n` values were emitted
    pub fn pad_right(self, value: T, n: usize) -> Stage<T>
    where
        T: Clone,
    {
        pad::pad_right(self, value, n)
    }

    /// Pad with copies of `value` at the front so at least `n` values are emitted
    pub fn pad_left(self, value: T, n: usize) -> Stage<T>
    where
        T: Clone,
    {
        pad::pad_left(self, value, n)
    }

    /// Call `f` on every value before forwarding it unchanged
    pub fn tee<F>(self, f: F) -> Stage<T>
    where
        F: FnMut(&T) + Send + 'static,
    {
        inspect::tee(self, f)
    }

    /// Pair every value with its position, counting from `start`
    pub fn enumerate(self, start: usize) -> Stage<Indexed<T>> {
        inspect::enumerate(self, start)
    }

    /// Discard values until one equals `value`, then forward it and the rest
    pub fn find(self, value: T) -> Stage<T>
    where
        T: PartialEq,
    {
        transform::find(self, value)
    }

    /// Replace every value equal to `from` with a copy of `to`
    pub fn substitute(self, from: T, to: T) -> Stage<T>
    where
        T: PartialEq + Clone,
    {
        transform::substitute(self, from, to)
    }

    /// Re-stage behind a queue of depth `n`, letting upstream run ahead
    pub fn prefetch(self, n: usize) -> Stage<T> {
        Stage::from_stream_with(StageConfig::new().depth(n).name("prefetch"), self)
    }
}

impl<T> Stream for Stage<T> {
    type Item = T;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<T>> {
        self.rx.poll_recv(cx)
    }
}

impl<T> fmt::Debug for Stage<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stage")
            .field("buffered", &self.rx.len())
            .field("is_closed", &self.rx.is_closed())
            .finish()
    }
}
