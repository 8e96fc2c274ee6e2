//! Subscriber setup for binaries and tests.
//!
//! The library itself only emits spans and events; nothing is printed until
//! [`init_tracing`] installs a subscriber.  Log output goes to stderr and is
//! filtered by `RUST_LOG`, defaulting to warnings from this crate.  Span
//! timings are collected for every span regardless of the log filter, so
//! [`dump_span_timings`] reports algorithm and conversion costs even when
//! nothing is logged.

use std::{
    cell::RefCell,
    collections::BTreeMap,
    sync::Once,
    time::{Duration, Instant},
};

use tracing_subscriber::{
    EnvFilter, Layer, Registry, layer::Context, layer::SubscriberExt, registry::LookupSpan,
    util::SubscriberInitExt,
};

const DEFAULT_FILTER: &str = "duograph=warn";

thread_local! {
    static SPAN_TIMINGS: RefCell<BTreeMap<&'static str, (Duration, usize)>> =
        const { RefCell::new(BTreeMap::new()) };
}

struct TimingLayer;

impl<S> Layer<S> for TimingLayer
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_new_span(
        &self,
        _attrs: &tracing::span::Attributes<'_>,
        id: &tracing::Id,
        ctx: Context<'_, S>,
    ) {
        if let Some(span) = ctx.span(id) {
            span.extensions_mut().insert(Instant::now());
        }
    }

    fn on_close(&self, id: tracing::Id, ctx: Context<'_, S>) {
        let Some(span) = ctx.span(&id) else {
            return;
        };
        let name = span.metadata().name();
        if let Some(start) = span.extensions().get::<Instant>() {
            let elapsed = start.elapsed();
            SPAN_TIMINGS.with(|totals| {
                let mut totals = totals.borrow_mut();
                let entry = totals.entry(name).or_insert((Duration::ZERO, 0));
                entry.0 += elapsed;
                entry.1 += 1;
            });
        }
    }
}

/// Installs the global subscriber.  Safe to call any number of times; only
/// the first call has an effect, and a subscriber installed elsewhere is
/// left in place.
pub fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
        let _ = Registry::default()
            .with(TimingLayer)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_filter(filter),
            )
            .try_init();
    });
}

/// Gets the total time and count of closed spans on this thread, by span
/// name.
pub fn span_timings() -> Vec<(&'static str, Duration, usize)> {
    SPAN_TIMINGS.with(|totals| {
        totals
            .borrow()
            .iter()
            .map(|(&name, &(duration, count))| (name, duration, count))
            .collect()
    })
}

pub fn reset_span_timings() {
    SPAN_TIMINGS.with(|totals| totals.borrow_mut().clear());
}

/// Prints this thread's span timings to stderr, slowest first.
pub fn dump_span_timings() {
    let mut entries = span_timings();
    entries.sort_by(|a, b| b.1.cmp(&a.1));
    eprintln!("span timings (desc):");
    for (name, duration, count) in entries {
        eprintln!("  {name}: {duration:?} ({count}x)");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Directedness, Graph, ListGraph, MatrixGraph};

    #[test]
    fn test_conversion_span_is_timed() {
        init_tracing();
        reset_span_timings();
        let mut graph: ListGraph<&str, i32, u32> = ListGraph::new(Directedness::Directed);
        let a = graph.insert_vertex("a", 0);
        graph.insert_edge(a, a).unwrap();
        let matrix = MatrixGraph::from(graph);
        assert_eq!(matrix.num_edges(), 1);

        let timings = span_timings();
        assert!(
            timings
                .iter()
                .any(|&(name, _, count)| name == "matrix_graph_from_list" && count == 1)
        );
    }
}
