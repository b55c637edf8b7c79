use async_stream::stream;

use crate::stage::{Indexed, Stage};

/// Run `f` on each value for its side effect, forwarding the value unchanged
pub fn tee<T, F>(upstream: Stage<T>, mut f: F) -> Stage<T>
where
    T: Send + 'static,
    F: FnMut(&T) + Send + 'static,
{
    Stage::from_stream(stream! {
        let mut upstream = upstream;
        while let Some(item) = upstream.recv().await {
            f(&item);
            yield item;
        }
    })
}

/// Pair each value with its position, counting up from `start`.
///
/// Closes after the value indexed `usize::MAX`.
pub fn enumerate<T>(upstream: Stage<T>, start: usize) -> Stage<Indexed<T>>
where
    T: Send + 'static,
{
    Stage::from_stream(stream! {
        let mut upstream = upstream;
        let mut next = Some(start);
        while let Some(index) = next {
            match upstream.recv().await {
                Some(value) => {
                    yield Indexed { index, value };
                }
                None => break,
            }
            next = index.checked_add(1);
        }
    })
}
