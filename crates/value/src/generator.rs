//! Lazy value producers
//!
//! A [`Generator`] yields values one at a time until it signals the end of
//! input, and must be closed exactly once afterwards. Producers travel inside
//! [`Value::Generator`] as a [`GeneratorHandle`]; consumers take the producer
//! out of the handle with [`GeneratorHandle::acquire`], which returns a
//! [`GeneratorGuard`] that closes it on every exit path.

use crate::error::{Error, Result};
use crate::types::Value;
use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;

/// A pull-based source of values.
pub trait Generator: Send {
    /// Returns the next value, or `None` once the input is exhausted.
    fn next(&mut self) -> Result<Option<Value>>;

    /// Releases any resources held by the producer.
    fn close(&mut self) -> Result<()>;
}

/// Shared handle to a producer that can be consumed once.
#[derive(Clone)]
pub struct GeneratorHandle {
    slot: Arc<Mutex<Option<Box<dyn Generator>>>>,
}

impl GeneratorHandle {
    pub fn new<G: Generator + 'static>(generator: G) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Some(Box::new(generator)))),
        }
    }

    /// Wraps a finite collection of values as a producer with a no-op close.
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = Value>,
        I::IntoIter: Send + 'static,
    {
        Self::new(IterGenerator(values.into_iter()))
    }

    /// Takes the producer out of the handle. Fails if it was already taken.
    pub fn acquire(&self) -> Result<GeneratorGuard> {
        let generator = self
            .slot
            .lock()
            .take()
            .ok_or_else(|| Error::Generator("generator already consumed".into()))?;
        Ok(GeneratorGuard {
            generator: Some(generator),
        })
    }

    /// Whether the producer has already been taken by a consumer.
    pub fn is_consumed(&self) -> bool {
        self.slot.lock().is_none()
    }
}

impl PartialEq for GeneratorHandle {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.slot, &other.slot)
    }
}

impl fmt::Debug for GeneratorHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_consumed() {
            write!(f, "Generator(consumed)")
        } else {
            write!(f, "Generator(..)")
        }
    }
}

/// Scoped ownership of a producer.
///
/// [`GeneratorGuard::release`] closes the producer and reports the close
/// error. If the guard is dropped first (early return, `?`, panic) the
/// producer is closed on drop and a close failure is logged.
pub struct GeneratorGuard {
    generator: Option<Box<dyn Generator>>,
}

impl GeneratorGuard {
    /// Pulls the next value. Returns `None` at end of input.
    pub fn next(&mut self) -> Result<Option<Value>> {
        match self.generator.as_mut() {
            Some(generator) => generator.next(),
            None => Ok(None),
        }
    }

    /// Closes the producer.
    pub fn release(mut self) -> Result<()> {
        match self.generator.take() {
            Some(mut generator) => generator.close(),
            None => Ok(()),
        }
    }
}

impl Drop for GeneratorGuard {
    fn drop(&mut self) {
        if let Some(mut generator) = self.generator.take() {
            if let Err(e) = generator.close() {
                tracing::warn!("Failed to close generator after aborted drain: {}", e);
            }
        }
    }
}

struct IterGenerator<I>(I);

impl<I> Generator for IterGenerator<I>
where
    I: Iterator<Item = Value> + Send,
{
    fn next(&mut self) -> Result<Option<Value>> {
        Ok(self.0.next())
    }

    fn close(&mut self) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Counting {
        remaining: Vec<Value>,
        closed: Arc<AtomicUsize>,
    }

    impl Generator for Counting {
        fn next(&mut self) -> Result<Option<Value>> {
            if self.remaining.is_empty() {
                return Ok(None);
            }
            Ok(Some(self.remaining.remove(0)))
        }

        fn close(&mut self) -> Result<()> {
            self.closed.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    fn counting(values: Vec<Value>) -> (GeneratorHandle, Arc<AtomicUsize>) {
        let closed = Arc::new(AtomicUsize::new(0));
        let handle = GeneratorHandle::new(Counting {
            remaining: values,
            closed: closed.clone(),
        });
        (handle, closed)
    }

    #[test]
    fn test_release_closes_once() {
        let (handle, closed) = counting(vec![Value::integer(1)]);
        let mut guard = handle.acquire().unwrap();
        assert_eq!(guard.next().unwrap(), Some(Value::integer(1)));
        assert_eq!(guard.next().unwrap(), None);
        guard.release().unwrap();
        assert_eq!(closed.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_drop_closes_once() {
        let (handle, closed) = counting(vec![Value::integer(1), Value::integer(2)]);
        {
            let mut guard = handle.acquire().unwrap();
            guard.next().unwrap();
        }
        assert_eq!(closed.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_handle_is_single_use() {
        let (handle, closed) = counting(vec![]);
        let copy = handle.clone();
        assert_eq!(handle, copy);

        handle.acquire().unwrap().release().unwrap();
        assert!(copy.is_consumed());
        assert!(matches!(copy.acquire(), Err(Error::Generator(_))));
        assert_eq!(closed.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_from_values() {
        let handle = GeneratorHandle::from_values(vec![Value::integer(7)]);
        let mut guard = handle.acquire().unwrap();
        assert_eq!(guard.next().unwrap(), Some(Value::integer(7)));
        assert_eq!(guard.next().unwrap(), None);
    }
}
