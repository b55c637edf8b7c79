use async_stream::stream;

use crate::stage::{Stage, StageOfStages};

/// Group consecutive values into Stages of exactly `n` values.
///
/// The trailing group may be shorter; an empty trailing group is never
/// emitted. Each inner Stage is settled (full and closed) before the outer
/// Stage hands it out.
pub fn chunk<T>(upstream: Stage<T>, n: usize) -> StageOfStages<T>
where
    T: Send + 'static,
{
    assert!(n > 0, "chunk size must be non-zero");

    Stage::from_stream(stream! {
        let mut upstream = upstream;
        let mut group = Vec::new();
        while let Some(item) = upstream.recv().await {
            group.push(item);
            if group.len() == n {
                yield Stage::settled(std::mem::take(&mut group));
            }
        }
        if !group.is_empty() {
            yield Stage::settled(group);
        }
    })
}
