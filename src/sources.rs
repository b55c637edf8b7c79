//! Source adapters
//!
//! Every adapter returns a fresh [`Stage`] backed by its own worker. Pull-based
//! generators are plain iterators (`next()` is the pull: a value, or `None`
//! once exhausted) handed to [`from_iter`]. Infinite adapters never close on
//! their own and must be bounded downstream with `take` or `until`.

use futures::stream;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_stream::wrappers::ReceiverStream;

use crate::error::StreamResult;
use crate::stage::Stage;

const READ_CHUNK: usize = 8192;

// ================================
// Core constructors
// ================================

/// Stage the values of an iterator, closing when it is exhausted
pub fn from_iter<I, T>(iter: I) -> Stage<T>
where
    I: IntoIterator<Item = T> + Send + 'static,
    <I as IntoIterator>::IntoIter: Send,
    T: Send + 'static,
{
    Stage::from_stream(stream::iter(iter))
}

/// Stage the values of a tokio channel, closing when every sender is gone
pub fn from_receiver<T>(rx: mpsc::Receiver<T>) -> Stage<T>
where
    T: Send + 'static,
{
    Stage::from_stream(ReceiverStream::new(rx))
}

/// Repeat the values in order forever. An empty input closes immediately.
pub fn cycle<T>(values: Vec<T>) -> Stage<T>
where
    T: Clone + Send + 'static,
{
    from_iter(values.into_iter().cycle())
}

/// Repeat one value forever
pub fn repeat<T>(value: T) -> Stage<T>
where
    T: Clone + Send + 'static,
{
    Stage::from_stream(stream::repeat(value))
}

/// Emit whatever `f` returns, forever
pub fn generate<T, F>(f: F) -> Stage<T>
where
    T: Send + 'static,
    F: FnMut() -> T + Send + 'static,
{
    Stage::from_stream(stream::repeat_with(f))
}

// ================================
// Text
// ================================

/// Split `text` on `sep`. An empty separator yields each character as its own string.
pub fn from_string(text: &str, sep: &str) -> Stage<String> {
    let parts: Vec<String> = if sep.is_empty() {
        text.chars().map(String::from).collect()
    } else {
        text.split(sep).map(String::from).collect()
    };
    from_iter(parts)
}

pub fn from_chars(text: &str) -> Stage<char> {
    from_iter(text.chars().collect::<Vec<_>>())
}

// ================================
// Numeric sequences
// ================================

/// Half-open arithmetic progression `start, start + step, …` below `end`
#[derive(Debug, Clone)]
pub struct Iota {
    next: Option<i64>,
    end: i64,
    step: i64,
}

impl Iterator for Iota {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        let current = self.next.filter(|value| *value < self.end)?;
        self.next = current.checked_add(self.step);
        Some(current)
    }
}

/// Integers from `start` (inclusive) to `end` (exclusive) by `step`.
///
/// A non-positive step never reaches `end` and yields an infinite sequence.
pub fn iota(start: i64, end: i64, step: i64) -> Stage<i64> {
    from_iter(Iota {
        next: Some(start),
        end,
        step,
    })
}

/// Fibonacci numbers starting 1, 2, 3, 5, …; ends when `u128` overflows
#[derive(Debug, Clone)]
pub struct Fibonacci {
    a: u128,
    b: u128,
}

impl Default for Fibonacci {
    fn default() -> Self {
        Fibonacci { a: 0, b: 1 }
    }
}

impl Iterator for Fibonacci {
    type Item = u128;

    fn next(&mut self) -> Option<u128> {
        let sum = self.a.checked_add(self.b)?;
        self.a = self.b;
        self.b = sum;
        Some(sum)
    }
}

pub fn fibonacci() -> Stage<u128> {
    from_iter(Fibonacci::default())
}

/// Primes by trial division against the primes found so far
#[derive(Debug, Clone, Default)]
pub struct Primes {
    found: Vec<u64>,
}

impl Iterator for Primes {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        let mut candidate = match self.found.last().copied() {
            None => {
                self.found.push(2);
                return Some(2);
            }
            Some(2) => 3,
            Some(last) => last.checked_add(2)?,
        };
        loop {
            let is_prime = self
                .found
                .iter()
                .take_while(|&&p| p.saturating_mul(p) <= candidate)
                .all(|&p| candidate % p != 0);
            if is_prime {
                self.found.push(candidate);
                return Some(candidate);
            }
            candidate = candidate.checked_add(2)?;
        }
    }
}

pub fn primes() -> Stage<u64> {
    from_iter(Primes::default())
}

// ================================
// Random
// ================================

/// Non-negative random integers, forever
pub fn rand_int() -> Stage<i64> {
    let mut rng = StdRng::from_entropy();
    generate(move || rng.gen_range(0..=i64::MAX))
}

/// Random floats in `[0, 1)`, forever
pub fn rand_f32() -> Stage<f32> {
    let mut rng = StdRng::from_entropy();
    generate(move || rng.gen::<f32>())
}

/// Random floats in `[0, 1)`, forever
pub fn rand_f64() -> Stage<f64> {
    let mut rng = StdRng::from_entropy();
    generate(move || rng.gen::<f64>())
}

// ================================
// Bytes
// ================================

/// Completion of a [`read_from`] worker.
///
/// The byte Stage closes both on end of input and on a read failure; awaiting
/// the outcome tells the two apart.
#[derive(Debug)]
pub struct ReadOutcome {
    handle: JoinHandle<StreamResult<u64>>,
}

impl ReadOutcome {
    /// Total bytes read, or the error that stopped the reader
    pub async fn wait(self) -> StreamResult<u64> {
        self.handle.await?
    }
}

/// Stage the bytes of `reader`, closing at end of input or on the first error
pub fn read_from<R>(reader: R) -> (Stage<u8>, ReadOutcome)
where
    R: AsyncRead + Unpin + Send + 'static,
{
    let (tx, stage) = Stage::channel(1);

    let handle = tokio::spawn(async move {
        let mut reader = reader;
        let mut buf = vec![0u8; READ_CHUNK];
        let mut total: u64 = 0;
        loop {
            let n = match reader.read(&mut buf).await {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) => {
                    log::warn!("read_from stopped after {} bytes: {}", total, e);
                    return Err(e.into());
                }
            };
            for &byte in &buf[..n] {
                if tx.send(byte).await.is_err() {
                    log::debug!("read_from consumer dropped after {} bytes", total);
                    return Ok(total);
                }
                total += 1;
            }
        }
        log::trace!("read_from reached end of input after {} bytes", total);
        Ok(total)
    });

    (stage, ReadOutcome { handle })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iota_stops_before_end() {
        let values: Vec<i64> = Iota { next: Some(1), end: 4, step: 1 }.collect();
        assert_eq!(values, vec![1, 2, 3]);
    }

    #[test]
    fn iota_stops_on_overflow() {
        let values: Vec<i64> = Iota {
            next: Some(i64::MAX - 1),
            end: i64::MAX,
            step: 5,
        }
        .collect();
        assert_eq!(values, vec![i64::MAX - 1]);
    }

    #[test]
    fn fibonacci_is_finite_in_u128() {
        let count = Fibonacci::default().count();
        assert!(count > 100 && count < 200);
    }

    #[test]
    fn primes_start_with_two() {
        let first: Vec<u64> = Primes::default().take(5).collect();
        assert_eq!(first, vec![2, 3, 5, 7, 11]);
    }
}
