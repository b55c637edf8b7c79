//! Operators that hold values back until upstream closes.
//!
//! An empty upstream leaves the output Stage closed with no values; the
//! single-value sink `Stage::pop` reports that as `StreamError::EmptyStream`.

use async_stream::stream;
use std::collections::VecDeque;

use crate::stage::Stage;

/// Fold all values left to right, seeded by the first value
pub fn reduce<T, F>(upstream: Stage<T>, mut f: F) -> Stage<T>
where
    T: Send + 'static,
    F: FnMut(T, T) -> T + Send + 'static,
{
    Stage::from_stream(stream! {
        let mut upstream = upstream;
        let mut acc = match upstream.recv().await {
            Some(first) => first,
            None => return,
        };
        while let Some(item) = upstream.recv().await {
            acc = f(acc, item);
        }
        yield acc;
    })
}

pub fn last<T>(upstream: Stage<T>) -> Stage<T>
where
    T: Send + 'static,
{
    Stage::from_stream(stream! {
        let mut upstream = upstream;
        let mut last = None;
        while let Some(item) = upstream.recv().await {
            last = Some(item);
        }
        if let Some(item) = last {
            yield item;
        }
    })
}

/// Keep a ring of the `n` most recent values and emit it once upstream closes
pub fn tail<T>(upstream: Stage<T>, n: usize) -> Stage<T>
where
    T: Send + 'static,
{
    Stage::from_stream(stream! {
        let mut upstream = upstream;
        let mut ring = VecDeque::new();
        while let Some(item) = upstream.recv().await {
            if n == 0 {
                continue;
            }
            if ring.len() == n {
                ring.pop_front();
            }
            ring.push_back(item);
        }
        for item in ring {
            yield item;
        }
    })
}
