//! Padding operators. Upstream values are never truncated.

use async_stream::stream;

use crate::stage::Stage;

/// Forward everything, then append copies of `value` up to `n` total values
pub fn pad_right<T>(upstream: Stage<T>, value: T, n: usize) -> Stage<T>
where
    T: Clone + Send + 'static,
{
    Stage::from_stream(stream! {
        let mut upstream = upstream;
        let mut emitted = 0;
        while let Some(item) = upstream.recv().await {
            emitted += 1;
            yield item;
        }
        for _ in emitted..n {
            yield value.clone();
        }
    })
}

/// Prefix copies of `value` so that at least `n` values are emitted.
///
/// Holds back the first `n` upstream values. If upstream closes first, the
/// output is `n - count` pads followed by the held values; otherwise the held
/// values go out unpadded and the rest streams through.
pub fn pad_left<T>(upstream: Stage<T>, value: T, n: usize) -> Stage<T>
where
    T: Clone + Send + 'static,
{
    Stage::from_stream(stream! {
        let mut upstream = upstream;
        let mut held = Vec::new();
        while held.len() < n {
            match upstream.recv().await {
                Some(item) => held.push(item),
                None => break,
            }
        }

        for _ in held.len()..n {
            yield value.clone();
        }
        for item in held {
            yield item;
        }
        while let Some(item) = upstream.recv().await {
            yield item;
        }
    })
}
