//! Testing utilities for Visita.
//!
//! This module provides utilities to make testing visitors and registries easier.
//!
//! # Features
//!
//! - [`RecordingVisitor`]: A fallback-only visitor that records every node type it sees
//! - [`CountingVisitor`]: A visitor that counts visits
//! - [`Probe`]: Builds registry handlers that record the arguments they receive

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};
use visita_core::{Node, Visitor};

// ============================================================================
// Recording Visitor
// ============================================================================

/// A visitor that records the type name of every node it visits.
///
/// Has no type-specific handlers, so every node reaches `generic_visit`.
/// Clones share the same record.
///
/// # Example
///
/// ```rust,ignore
/// let recorder = RecordingVisitor::new();
/// dog.accept(&recorder);
/// assert_eq!(recorder.visited(), ["Dog"]);
/// ```
#[derive(Clone, Default)]
pub struct RecordingVisitor {
    visited: Arc<Mutex<Vec<&'static str>>>,
}

impl RecordingVisitor {
    /// Create a new, empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a copy of the recorded type names, in visit order.
    pub fn visited(&self) -> Vec<&'static str> {
        self.visited.lock().unwrap().clone()
    }

    /// Get the number of recorded visits.
    pub fn count(&self) -> usize {
        self.visited.lock().unwrap().len()
    }

    /// Clear all recorded visits.
    pub fn clear(&self) {
        self.visited.lock().unwrap().clear();
    }
}

impl<A> Visitor<A, ()> for RecordingVisitor {
    fn generic_visit(&self, node: &dyn Node, _args: A) {
        self.visited.lock().unwrap().push(node.type_name());
    }
}

// ============================================================================
// Counting Visitor
// ============================================================================

/// A visitor that counts invocations and returns the running count.
///
/// Clones share the counter.
#[derive(Clone, Default)]
pub struct CountingVisitor {
    count: Arc<AtomicUsize>,
}

impl CountingVisitor {
    /// Create a new counting visitor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current count.
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    /// Reset the counter.
    pub fn reset(&self) {
        self.count.store(0, Ordering::SeqCst);
    }
}

impl<A> Visitor<A, usize> for CountingVisitor {
    fn generic_visit(&self, _node: &dyn Node, _args: A) -> usize {
        self.count.fetch_add(1, Ordering::SeqCst) + 1
    }
}

// ============================================================================
// Probe
// ============================================================================

/// Records the calls made to registry handlers it builds.
///
/// Every call records the visited node's type name, the label of the handler
/// that ran, and the forwarded arguments.
///
/// # Example
///
/// ```rust,ignore
/// let probe = Probe::new();
/// let registry = Registry::builder()
///     .on::<Dog, _>(probe.handler("dog", "bark"))
///     .build()?;
///
/// registry.try_visit(&Dog, (1, 2))?;
/// assert_eq!(probe.calls(), [("Dog", "dog", (1, 2))]);
/// ```
pub struct Probe<A> {
    calls: Arc<Mutex<Vec<(&'static str, &'static str, A)>>>,
}

impl<A> Probe<A> {
    /// Create a new probe with no recorded calls.
    pub fn new() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Get the number of recorded calls.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl<A: Clone> Probe<A> {
    /// Get a copy of the recorded calls: `(node type, handler label, args)`.
    pub fn calls(&self) -> Vec<(&'static str, &'static str, A)> {
        self.calls.lock().unwrap().clone()
    }
}

impl<A: Send + 'static> Probe<A> {
    /// Build a handler labelled `label` that records its call and returns `result`.
    pub fn handler<R>(
        &self,
        label: &'static str,
        result: R,
    ) -> impl Fn(&dyn Node, A) -> R + Send + Sync + 'static + use<A, R>
    where
        R: Clone + Send + Sync + 'static,
    {
        let calls = self.calls.clone();
        move |node: &dyn Node, args: A| {
            calls.lock().unwrap().push((node.type_name(), label, args));
            result.clone()
        }
    }
}

impl<A> Default for Probe<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> Clone for Probe<A> {
    fn clone(&self) -> Self {
        Self {
            calls: self.calls.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dynamic::Registry;
    use visita_core::Visitee;

    #[test]
    fn test_recording_visitor() {
        let recorder = RecordingVisitor::new();
        let shared = recorder.clone();

        1_u8.accept(&recorder);
        recorder.visit(&"s", ("ignored",));

        assert_eq!(shared.visited(), ["u8", "str"]);
        assert_eq!(shared.count(), 2);
        shared.clear();
        assert_eq!(recorder.count(), 0);
    }

    #[test]
    fn test_counting_visitor() {
        let counter = CountingVisitor::new();
        assert_eq!(counter.visit(&true, ()), 1);
        assert_eq!(counter.visit(&false, ()), 2);
        assert_eq!(counter.clone().count(), 2);
        counter.reset();
        assert_eq!(counter.count(), 0);
    }

    #[test]
    fn test_probe_records_handler_calls() {
        let probe = Probe::<(i32, i32)>::new();
        let registry = Registry::builder()
            .on::<u8, _>(probe.handler("byte", 'b'))
            .fallback(probe.handler("fallback", 'f'))
            .build()
            .unwrap();

        assert_eq!(registry.try_visit(&7_u8, (1, 2)), Ok('b'));
        assert_eq!(registry.try_visit(&7_u16, (3, 4)), Ok('f'));
        assert_eq!(
            probe.calls(),
            [("u8", "byte", (1, 2)), ("u16", "fallback", (3, 4))]
        );
        assert_eq!(probe.call_count(), 2);
    }
}
