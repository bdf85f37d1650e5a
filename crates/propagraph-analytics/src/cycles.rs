//! Directed cycle detection.
//!
//! # Algorithm
//!
//! Depth-first search from every still-unvisited node, in index order. Each
//! node carries a frame state: `Unvisited`, `OnPath` while it is on the
//! current DFS path, and `Done` once all its successors are explored. An
//! edge into an `OnPath` node is a back edge and closes a cycle; self-loops
//! count. `Done` persists across roots, so every node is expanded once.
//!
//! The DFS is iterative (explicit stack of frames) so deep graphs cannot
//! overflow the call stack.

use propagraph_core::WeightedDigraph;
use tracing::{debug, instrument};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    OnPath,
    Done,
}

/// One DFS frame: a node, its successors, and how many have been tried.
struct Frame {
    node: usize,
    successors: Vec<usize>,
    cursor: usize,
}

impl Frame {
    fn open<G: WeightedDigraph>(graph: &G, node: usize) -> Self {
        Self {
            node,
            successors: graph.successors(node).collect(),
            cursor: 0,
        }
    }
}

/// Whether the graph contains a directed cycle.
#[must_use]
pub fn has_cycle<G: WeightedDigraph>(graph: &G) -> bool {
    find_cycle(graph).is_some()
}

/// The first directed cycle found by the DFS, if any.
///
/// The cycle is returned as a closed walk `[v, ..., v]`: it starts and ends
/// at the node the back edge points to. A self-loop on `v` is `[v, v]`.
#[must_use]
#[instrument(skip(graph))]
pub fn find_cycle<G: WeightedDigraph>(graph: &G) -> Option<Vec<usize>> {
    let n = graph.node_count();
    let mut marks = vec![Mark::Unvisited; n];
    let mut stack: Vec<Frame> = Vec::new();

    for root in 0..n {
        if marks[root] != Mark::Unvisited {
            continue;
        }
        marks[root] = Mark::OnPath;
        stack.push(Frame::open(graph, root));

        while let Some(frame) = stack.last_mut() {
            let Some(&next) = frame.successors.get(frame.cursor) else {
                marks[frame.node] = Mark::Done;
                stack.pop();
                continue;
            };
            frame.cursor += 1;

            match marks[next] {
                Mark::OnPath => {
                    let cycle = close_cycle(&stack, next);
                    debug!(root, len = cycle.len(), "back edge found");
                    return Some(cycle);
                }
                Mark::Unvisited => {
                    marks[next] = Mark::OnPath;
                    stack.push(Frame::open(graph, next));
                }
                Mark::Done => {}
            }
        }
    }

    None
}

/// Slice the current DFS path from `target` to the top and close it.
fn close_cycle(stack: &[Frame], target: usize) -> Vec<usize> {
    let start = stack
        .iter()
        .position(|frame| frame.node == target)
        .unwrap_or(0);
    let mut cycle: Vec<usize> = stack[start..].iter().map(|frame| frame.node).collect();
    cycle.push(target);
    cycle
}
