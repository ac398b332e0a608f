//! Cycle detection over the updater graph.
//!
//! `a -> b` when `a` writes (through a generated setter) a property that `b`
//! reads. Every back edge found by a depth-first walk in discovery order is
//! one cycle, so the result is reproducible for identical input.

use std::fmt;

use crate::parse::metadata::DependentUpdater;

/// One step of a cycle: `updater` writes `property`, which the next updater
/// in the cycle reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleStep {
    pub updater: String,
    pub property: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdaterCycle {
    pub steps: Vec<CycleStep>,
}

impl UpdaterCycle {
    /// Updater the cycle was entered through.
    pub fn entry(&self) -> &str {
        self.steps.first().map(|s| s.updater.as_str()).unwrap_or_default()
    }
}

impl fmt::Display for UpdaterCycle {
    /// `update_a -> Q -> update_b -> P -> update_a`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for step in &self.steps {
            write!(f, "{} -> {} -> ", step.updater, step.property)?;
        }
        write!(f, "{}", self.entry())
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    OnStack,
    Done,
}

struct CycleSearch<'a> {
    updaters: &'a [DependentUpdater],
    marks: Vec<Mark>,
    stack: Vec<(usize, String)>,
    found: Vec<UpdaterCycle>,
}

impl CycleSearch<'_> {
    /// Successors of `from` with the property linking them, in discovery order.
    fn successors(&self, from: usize) -> Vec<(usize, String)> {
        let writer = &self.updaters[from];
        self.updaters
            .iter()
            .enumerate()
            .filter_map(|(to, reader)| {
                writer
                    .writes
                    .iter()
                    .find(|property| reader.reads.contains(property))
                    .map(|property| (to, property.clone()))
            })
            .collect()
    }

    fn visit(&mut self, node: usize) {
        self.marks[node] = Mark::OnStack;
        for (next, property) in self.successors(node) {
            self.stack.push((node, property));
            match self.marks[next] {
                Mark::Unvisited => self.visit(next),
                Mark::OnStack => self.record(next),
                Mark::Done => {}
            }
            self.stack.pop();
        }
        self.marks[node] = Mark::Done;
    }

    fn record(&mut self, entry: usize) {
        let Some(start) = self.stack.iter().rposition(|(node, _)| *node == entry) else {
            return;
        };
        let steps = self.stack[start..]
            .iter()
            .map(|(node, property)| CycleStep {
                updater: self.updaters[*node].name.to_string(),
                property: property.clone(),
            })
            .collect();
        self.found.push(UpdaterCycle { steps });
    }
}

/// All cycles among `updaters`, in discovery order.
pub fn find_cycles(updaters: &[DependentUpdater]) -> Vec<UpdaterCycle> {
    let mut search = CycleSearch {
        updaters,
        marks: vec![Mark::Unvisited; updaters.len()],
        stack: Vec::new(),
        found: Vec::new(),
    };
    for node in 0..updaters.len() {
        if search.marks[node] == Mark::Unvisited {
            search.visit(node);
        }
    }
    search.found
}
