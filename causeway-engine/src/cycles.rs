//! Cycle diagnostics over the adjacency fields.
//!
//! The aggregation engine itself tolerates cycles (stale-read semantics),
//! so this module only reports them. The exception is when cycle rejection
//! is enabled in config, in which case `would_create_cycle` gates `causes`
//! edits before they are written.

use std::collections::HashMap;

use petgraph::algo::tarjan_scc;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::Dfs;

use causeway_core::entity::IdList;

use crate::snapshot::Snapshot;

/// Directed graph over entity ids: an edge `a → b` means `a` leads to `b`.
/// Built from both adjacency fields: a cause's `causes` list points
/// forward at outcomes, and every `caused_by` token points back in.
struct IdGraph {
    graph: DiGraph<String, ()>,
    nodes: HashMap<String, NodeIndex>,
}

impl IdGraph {
    fn ensure_node(&mut self, id: &str) -> NodeIndex {
        if let Some(&idx) = self.nodes.get(id) {
            return idx;
        }
        let idx = self.graph.add_node(id.to_string());
        self.nodes.insert(id.to_string(), idx);
        idx
    }

    fn add_edge(&mut self, from: &str, to: &str) {
        let from = self.ensure_node(from);
        let to = self.ensure_node(to);
        if self.graph.find_edge(from, to).is_none() {
            self.graph.add_edge(from, to, ());
        }
    }

    /// DFS-based reachability check: can we reach `to` from `from`?
    fn has_path(&self, from: &str, to: &str) -> bool {
        let (Some(&from), Some(&to)) = (self.nodes.get(from), self.nodes.get(to)) else {
            return false;
        };
        let mut dfs = Dfs::new(&self.graph, from);
        while let Some(node) = dfs.next(&self.graph) {
            if node == to {
                return true;
            }
        }
        false
    }
}

/// Build the id graph from a snapshot. When `skip_causes_of` is set, that
/// cause's forward edges are left out, so an edit that replaces the
/// `causes` field can be checked against the rest of the graph.
fn build(snapshot: &Snapshot, skip_causes_of: Option<&str>) -> IdGraph {
    let mut g = IdGraph {
        graph: DiGraph::new(),
        nodes: HashMap::new(),
    };
    for cause in &snapshot.causes {
        g.ensure_node(&cause.id);
        if skip_causes_of != Some(cause.id.as_str()) {
            for target in cause.causes.iter() {
                g.add_edge(&cause.id, target);
            }
        }
        for source in cause.caused_by.iter() {
            g.add_edge(source, &cause.id);
        }
    }
    for outcome in &snapshot.outcomes {
        g.ensure_node(&outcome.id);
        for source in outcome.caused_by.iter() {
            g.add_edge(source, &outcome.id);
        }
    }
    g
}

/// Report all cycles in the current graph: strongly connected components
/// with more than one node, plus direct self-references.
pub fn find_cycles(snapshot: &Snapshot) -> Vec<Vec<String>> {
    let g = build(snapshot, None);
    let mut cycles: Vec<Vec<String>> = tarjan_scc(&g.graph)
        .into_iter()
        .filter(|scc| scc.len() > 1)
        .map(|scc| scc.iter().map(|&idx| g.graph[idx].clone()).collect())
        .collect();
    for (id, &idx) in &g.nodes {
        if g.graph.find_edge(idx, idx).is_some() {
            cycles.push(vec![id.clone()]);
        }
    }
    cycles
}

/// Check whether writing `causes` (and `caused_by`) on `cause_id` would
/// close a cycle. Returns a description of the offending path, or `None`
/// when the edit is safe.
///
/// The check replaces the cause's existing forward edges with the
/// candidate set; edges out of the cause cannot create new paths back into
/// it, so each target is tested against the base graph independently.
pub fn would_create_cycle(
    snapshot: &Snapshot,
    cause_id: &str,
    caused_by: &IdList,
    causes: &IdList,
) -> Option<String> {
    let mut g = build(snapshot, Some(cause_id));
    g.ensure_node(cause_id);
    for source in caused_by.iter() {
        g.add_edge(source, cause_id);
    }

    for target in causes.iter() {
        if target == cause_id {
            return Some(format!("{cause_id} -> {cause_id}"));
        }
        if g.has_path(target, cause_id) {
            return Some(format!("{cause_id} -> {target} -> ... -> {cause_id}"));
        }
    }
    None
}
