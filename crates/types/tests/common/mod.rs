//! Common test utilities for type integration tests
#![allow(dead_code)]

use std::cmp;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use strata_types::{Generator, GeneratorHandle, Type, Value};

/// Counts how many times the producers sharing it were closed.
#[derive(Clone, Default)]
pub struct CloseCounter(Arc<AtomicUsize>);

impl CloseCounter {
    pub fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }

    fn bump(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }
}

/// Step yielded by a scripted producer.
pub enum Step {
    Yield(Value),
    Fail(&'static str),
}

/// A producer that plays back a script and records closes.
pub struct Scripted {
    steps: VecDeque<Step>,
    closed: CloseCounter,
    fail_close: bool,
}

impl Generator for Scripted {
    fn next(&mut self) -> strata_value::Result<Option<Value>> {
        match self.steps.pop_front() {
            None => Ok(None),
            Some(Step::Yield(v)) => Ok(Some(v)),
            Some(Step::Fail(msg)) => Err(strata_value::Error::Generator(msg.into())),
        }
    }

    fn close(&mut self) -> strata_value::Result<()> {
        self.closed.bump();
        if self.fail_close {
            return Err(strata_value::Error::Generator("close failed".into()));
        }
        Ok(())
    }
}

/// Creates a producer yielding the given values.
pub fn producer(values: Vec<Value>) -> (Value, CloseCounter) {
    scripted(values.into_iter().map(Step::Yield).collect(), false)
}

/// Creates a producer that plays back the given steps.
pub fn scripted(steps: Vec<Step>, fail_close: bool) -> (Value, CloseCounter) {
    let closed = CloseCounter::default();
    let generator = Scripted {
        steps: steps.into(),
        closed: closed.clone(),
        fail_close,
    };
    (Value::Generator(GeneratorHandle::new(generator)), closed)
}

/// Asserts that comparing every pair and triple of the given canonical values
/// under `t` is antisymmetric and transitive.
pub fn assert_total_order(t: &Type, values: &[Value]) {
    for a in values {
        for b in values {
            let ab = t.compare(a, b).unwrap();
            let ba = t.compare(b, a).unwrap();
            assert_eq!(ab, ba.reverse(), "{}: {} vs {}", t, a, b);
            for c in values {
                let bc = t.compare(b, c).unwrap();
                if ab != cmp::Ordering::Greater && bc != cmp::Ordering::Greater {
                    let ac = t.compare(a, c).unwrap();
                    assert_ne!(ac, cmp::Ordering::Greater, "{}: {} <= {} <= {}", t, a, b, c);
                    if ab == cmp::Ordering::Less || bc == cmp::Ordering::Less {
                        assert_eq!(ac, cmp::Ordering::Less, "{}: {} < {}", t, a, c);
                    }
                }
            }
        }
    }
}
