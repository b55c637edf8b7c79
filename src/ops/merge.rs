//! Many-to-one operators: chain, zip and round-robin.
//!
//! Sources are always visited in argument order. A source is dropped as soon
//! as the operator no longer needs it, which stops its worker.

use async_stream::stream;

use crate::stage::{Stage, StageOfStages};

/// Concatenate the sources: drain the first, then the second, and so on
pub fn chain<T>(sources: Vec<Stage<T>>) -> Stage<T>
where
    T: Send + 'static,
{
    Stage::from_stream(stream! {
        for mut source in sources {
            while let Some(item) = source.recv().await {
                yield item;
            }
        }
    })
}

/// Emit one value from each source per round, in argument order.
///
/// The first exhausted source ends the whole operator. A round is only
/// emitted once every source contributed to it, so a partial round is never
/// seen downstream.
pub fn zip<T>(sources: Vec<Stage<T>>) -> Stage<T>
where
    T: Send + 'static,
{
    Stage::from_stream(stream! {
        let mut sources = sources;
        if sources.is_empty() {
            return;
        }
        loop {
            let mut round = Vec::with_capacity(sources.len());
            for source in sources.iter_mut() {
                match source.recv().await {
                    Some(item) => round.push(item),
                    None => return,
                }
            }
            for item in round {
                yield item;
            }
        }
    })
}

/// Like [`zip`], but each complete round is emitted as its own settled Stage
pub fn zip_rounds<T>(sources: Vec<Stage<T>>) -> StageOfStages<T>
where
    T: Send + 'static,
{
    Stage::from_stream(stream! {
        let mut sources = sources;
        if sources.is_empty() {
            return;
        }
        loop {
            let mut round = Vec::with_capacity(sources.len());
            for source in sources.iter_mut() {
                match source.recv().await {
                    Some(item) => round.push(item),
                    None => return,
                }
            }
            yield Stage::settled(round);
        }
    })
}

/// Interleave the sources one value at a time, skipping exhausted ones.
///
/// Ends once a full round produced nothing, i.e. every source is exhausted.
pub fn round_robin<T>(sources: Vec<Stage<T>>) -> Stage<T>
where
    T: Send + 'static,
{
    Stage::from_stream(stream! {
        let mut live = sources;
        while !live.is_empty() {
            let mut index = 0;
            while index < live.len() {
                match live[index].recv().await {
                    Some(item) => {
                        yield item;
                        index += 1;
                    }
                    None => {
                        live.remove(index);
                    }
                }
            }
        }
    })
}
