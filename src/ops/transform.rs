//! Unary Stage→Stage operators that never buffer.

use async_stream::stream;

use crate::stage::Stage;

/// Slice: emit at most the first `n` values.
///
/// Once `n` values went out the upstream Stage is dropped rather than drained.
pub fn take<T>(upstream: Stage<T>, n: usize) -> Stage<T>
where
    T: Send + 'static,
{
    Stage::from_stream(stream! {
        let mut upstream = upstream;
        for _ in 0..n {
            match upstream.recv().await {
                Some(item) => yield item,
                None => break,
            }
        }
    })
}

/// Emit values until `predicate` holds. The triggering value is consumed but
/// never emitted.
pub fn until<T, F>(upstream: Stage<T>, mut predicate: F) -> Stage<T>
where
    T: Send + 'static,
    F: FnMut(&T) -> bool + Send + 'static,
{
    Stage::from_stream(stream! {
        let mut upstream = upstream;
        while let Some(item) = upstream.recv().await {
            if predicate(&item) {
                break;
            }
            yield item;
        }
    })
}

pub fn map<T, U, F>(upstream: Stage<T>, mut f: F) -> Stage<U>
where
    T: Send + 'static,
    U: Send + 'static,
    F: FnMut(T) -> U + Send + 'static,
{
    Stage::from_stream(stream! {
        let mut upstream = upstream;
        while let Some(item) = upstream.recv().await {
            yield f(item);
        }
    })
}

pub fn filter<T, F>(upstream: Stage<T>, mut predicate: F) -> Stage<T>
where
    T: Send + 'static,
    F: FnMut(&T) -> bool + Send + 'static,
{
    Stage::from_stream(stream! {
        let mut upstream = upstream;
        while let Some(item) = upstream.recv().await {
            if predicate(&item) {
                yield item;
            }
        }
    })
}

/// Slice: discard the first `n` values (or all of them, if fewer arrive)
pub fn drop<T>(upstream: Stage<T>, n: usize) -> Stage<T>
where
    T: Send + 'static,
{
    Stage::from_stream(stream! {
        let mut upstream = upstream;
        let mut skipped = 0;
        while let Some(item) = upstream.recv().await {
            if skipped < n {
                skipped += 1;
                continue;
            }
            yield item;
        }
    })
}

/// Keep the values at positions 0, n, 2n, …
pub fn stride<T>(upstream: Stage<T>, n: usize) -> Stage<T>
where
    T: Send + 'static,
{
    assert!(n > 0, "stride step must be non-zero");

    Stage::from_stream(stream! {
        let mut upstream = upstream;
        let mut position = 0;
        while let Some(item) = upstream.recv().await {
            if position == 0 {
                yield item;
            }
            position += 1;
            if position == n {
                position = 0;
            }
        }
    })
}

/// Drop values until one equals `target`; forward it and everything after.
pub fn find<T>(upstream: Stage<T>, target: T) -> Stage<T>
where
    T: PartialEq + Send + 'static,
{
    Stage::from_stream(stream! {
        let mut upstream = upstream;
        let mut found = false;
        while let Some(item) = upstream.recv().await {
            if !found && item != target {
                continue;
            }
            found = true;
            yield item;
        }
    })
}

pub fn substitute<T>(upstream: Stage<T>, from: T, to: T) -> Stage<T>
where
    T: PartialEq + Clone + Send + 'static,
{
    Stage::from_stream(stream! {
        let mut upstream = upstream;
        while let Some(item) = upstream.recv().await {
            if item == from {
                yield to.clone();
            } else {
                yield item;
            }
        }
    })
}
