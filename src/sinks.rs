//! Sink adapters: drain a Stage into a collection, a single value, encoded
//! bytes or a display string.

use std::fmt::Display;
use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::error::{StreamError, StreamResult};
use crate::stage::Stage;

/// Fixed-width little-endian binary encoding used by [`Stage::write_to`].
///
/// | Type | Bytes |
/// |------|-------|
/// | `isize`, `usize` | widened to 8-byte little-endian |
/// | `i8`–`i128`, `u8`–`u128`, `f32`, `f64` | natural width, little-endian |
/// | `char` | 4-byte little-endian Unicode scalar value |
/// | `bool` | one byte, `0` or `1` |
/// | `String`, `&str` | raw UTF-8, no length prefix |
pub trait Encode {
    fn encode(&self, out: &mut Vec<u8>);
}

macro_rules! encode_le {
    ($($t:ty),*) => {
        $(
            impl Encode for $t {
                fn encode(&self, out: &mut Vec<u8>) {
                    out.extend_from_slice(&self.to_le_bytes());
                }
            }
        )*
    };
}

encode_le!(i8, i16, i32, i64, i128, u8, u16, u32, u64, u128, f32, f64);

impl Encode for isize {
    fn encode(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&(*self as i64).to_le_bytes());
    }
}

impl Encode for usize {
    fn encode(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&(*self as u64).to_le_bytes());
    }
}

impl Encode for char {
    fn encode(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&u32::from(*self).to_le_bytes());
    }
}

impl Encode for bool {
    fn encode(&self, out: &mut Vec<u8>) {
        out.push(u8::from(*self));
    }
}

impl Encode for String {
    fn encode(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(self.as_bytes());
    }
}

impl Encode for &str {
    fn encode(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(self.as_bytes());
    }
}

/// How a drained sequence renders as text.
///
/// Character sequences concatenate; everything else renders as `[a b c]`.
pub trait Render: Sized {
    fn render(values: &[Self]) -> String;
}

fn bracketed<T: Display>(values: &[T]) -> String {
    let parts: Vec<String> = values.iter().map(ToString::to_string).collect();
    format!("[{}]", parts.join(" "))
}

macro_rules! render_bracketed {
    ($($t:ty),*) => {
        $(
            impl Render for $t {
                fn render(values: &[Self]) -> String {
                    bracketed(values)
                }
            }
        )*
    };
}

render_bracketed!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, String
);

impl Render for &str {
    fn render(values: &[Self]) -> String {
        bracketed(values)
    }
}

impl Render for char {
    fn render(values: &[Self]) -> String {
        values.iter().collect()
    }
}

impl<T> Stage<T>
where
    T: Send + 'static,
{
    /// Drain every value into a `Vec`
    pub async fn collect_vec(mut self) -> Vec<T> {
        let mut out = Vec::new();
        while let Some(item) = self.recv().await {
            out.push(item);
        }
        out
    }

    /// Drain and discard every remaining value
    pub async fn drain(&mut self) {
        while self.recv().await.is_some() {}
    }

    /// Take one value. A Stage that closes without one is `EmptyStream`.
    pub async fn pop(&mut self) -> StreamResult<T> {
        self.recv().await.ok_or(StreamError::EmptyStream)
    }

    /// Encode every value with [`Encode`] and write it to `writer`.
    ///
    /// Returns the number of bytes written. The first failed write stops the
    /// drain and is returned; the failed value is not retried.
    pub async fn write_to<W>(mut self, writer: &mut W) -> StreamResult<u64>
    where
        T: Encode,
        W: AsyncWrite + Unpin + ?Sized,
    {
        let mut scratch = Vec::new();
        let mut written: u64 = 0;
        while let Some(item) = self.recv().await {
            scratch.clear();
            item.encode(&mut scratch);
            if let Err(e) = writer.write_all(&scratch).await {
                log::error!("write_to failed after {} bytes: {}", written, e);
                return Err(e.into());
            }
            written += scratch.len() as u64;
        }
        writer.flush().await?;
        Ok(written)
    }

    /// Drain and render the values as text
    pub async fn render(self) -> String
    where
        T: Render,
    {
        let values = self.collect_vec().await;
        T::render(&values)
    }

    /// Drain and print the rendering to stdout
    pub async fn print(self)
    where
        T: Render,
    {
        println!("{}", self.render().await);
    }
}
