//! Dijkstra's shortest paths over any [`MinPriorityQueue`]
//!
//! The search keys the queue by node and uses the node's tentative distance as
//! its priority. A relaxation that finds a shorter route to a queued node calls
//! `change_priority`; a newly discovered node is `add`ed. Membership is checked
//! with `contains` first, so the queue never sees a duplicate add or an update
//! for a node it no longer holds.
//!
//! Any of the crate's queues can drive the search. They return the same costs;
//! when several shortest paths exist, the path chosen may depend on the queue's
//! tie-breaking.
//!
//! # Example
//!
//! ```rust
//! use indexed_minpq::pathfinding::{dijkstra, SearchNode};
//! use indexed_minpq::optimized::OptimizedIndexedHeapMinPQ;
//!
//! // Node carries its goal coordinates
//! #[derive(Clone, PartialEq, Eq, Hash)]
//! struct GridPos { x: i32, y: i32, goal_x: i32, goal_y: i32 }
//!
//! impl SearchNode for GridPos {
//!     type Cost = u32;
//!
//!     fn successors(&self) -> Vec<(Self, Self::Cost)> {
//!         vec![
//!             (GridPos { x: self.x + 1, ..self.clone() }, 1),
//!             (GridPos { x: self.x - 1, ..self.clone() }, 1),
//!             (GridPos { y: self.y + 1, ..self.clone() }, 1),
//!             (GridPos { y: self.y - 1, ..self.clone() }, 1),
//!         ]
//!     }
//!
//!     fn is_goal(&self) -> bool {
//!         self.x == self.goal_x && self.y == self.goal_y
//!     }
//! }
//!
//! let start = GridPos { x: 0, y: 0, goal_x: 2, goal_y: 2 };
//! let (path, cost) = dijkstra::<_, OptimizedIndexedHeapMinPQ<_, _>>(&start).unwrap();
//! assert_eq!(cost, 4);
//! assert_eq!(path.len(), 5);
//! ```

use crate::traits::MinPriorityQueue;
use rustc_hash::{FxHashMap, FxHashSet};
use std::hash::Hash;
use std::ops::Add;
use tracing::{debug, trace};

/// Trait for types that can be used as path costs.
///
/// Costs must be orderable, copyable and addable, with `Default` as zero.
/// Edge costs must not be negative.
pub trait Cost: Ord + Copy + Add<Output = Self> + Default {}

impl<T> Cost for T where T: Ord + Copy + Add<Output = Self> + Default {}

/// Trait for nodes in a search graph.
///
/// The node type is also the queue element, so it must be hashable and
/// cloneable.
pub trait SearchNode: Clone + Eq + Hash {
    /// The cost type for edge weights (e.g. `u32`, or `OrderedFloat<f64>`)
    type Cost: Cost;

    /// Returns every neighbor of this node with the cost of the connecting edge
    fn successors(&self) -> Vec<(Self, Self::Cost)>;

    /// Returns true if the search may stop at this node
    ///
    /// Only [`dijkstra`] consults this. Nodes used solely with
    /// [`ShortestPathTree`] can keep the default.
    fn is_goal(&self) -> bool {
        false
    }
}

/// Distances and predecessor links discovered by a search
struct Explored<N: SearchNode> {
    dist_to: FxHashMap<N, N::Cost>,
    edge_to: FxHashMap<N, N>,
    settled: FxHashSet<N>,
}

impl<N: SearchNode> Explored<N> {
    fn new(start: &N) -> Self {
        let mut dist_to = FxHashMap::default();
        dist_to.insert(start.clone(), N::Cost::default());
        Explored {
            dist_to,
            edge_to: FxHashMap::default(),
            settled: FxHashSet::default(),
        }
    }

    /// Walks predecessor links back from `goal`
    fn path_to(&self, goal: &N) -> Vec<N> {
        if !self.dist_to.contains_key(goal) {
            return Vec::new();
        }
        let mut path = vec![goal.clone()];
        let mut current = goal;
        while let Some(prev) = self.edge_to.get(current) {
            path.push(prev.clone());
            current = prev;
        }
        path.reverse();
        path
    }
}

/// Runs the search until the queue drains, or until a goal is settled when
/// `stop_at_goal` is set. Returns the settled goal, if any.
fn explore<N, Q>(start: &N, queue: &mut Q, stop_at_goal: bool) -> (Explored<N>, Option<N>)
where
    N: SearchNode,
    Q: MinPriorityQueue<N, N::Cost> + ?Sized,
{
    while queue.remove_min().is_ok() {}

    let mut explored = Explored::new(start);
    queue.add_or_change_priority(start.clone(), N::Cost::default());

    while let Ok(current) = queue.remove_min() {
        let Some(&current_cost) = explored.dist_to.get(&current) else {
            continue;
        };
        explored.settled.insert(current.clone());

        if stop_at_goal && current.is_goal() {
            return (explored, Some(current));
        }

        for (next, edge_cost) in current.successors() {
            if explored.settled.contains(&next) {
                continue;
            }
            let tentative = current_cost + edge_cost;
            let improves = explored
                .dist_to
                .get(&next)
                .map_or(true, |&known| tentative < known);
            if improves {
                trace!(queued = queue.len(), "relaxing edge");
                explored.dist_to.insert(next.clone(), tentative);
                explored.edge_to.insert(next.clone(), current.clone());
                queue.add_or_change_priority(next, tentative);
            }
        }
    }

    (explored, None)
}

/// Runs Dijkstra's algorithm from `start` until a node with `is_goal()` is settled.
///
/// # Type Parameters
/// - `N`: The node type implementing [`SearchNode`]
/// - `Q`: The queue implementation driving the search
///
/// # Returns
/// - `Some((path, cost))` with the path from `start` to the goal, both inclusive
/// - `None` if no goal is reachable
pub fn dijkstra<N, Q>(start: &N) -> Option<(Vec<N>, N::Cost)>
where
    N: SearchNode,
    Q: MinPriorityQueue<N, N::Cost>,
{
    let mut queue = Q::new();
    dijkstra_with(start, &mut queue)
}

/// Like [`dijkstra`], but drives the search with a caller-supplied queue
///
/// Anything already in `queue` is discarded first, which allows a boxed queue
/// from [`QueueKind::build`](crate::QueueKind::build) to be reused.
pub fn dijkstra_with<N, Q>(start: &N, queue: &mut Q) -> Option<(Vec<N>, N::Cost)>
where
    N: SearchNode,
    Q: MinPriorityQueue<N, N::Cost> + ?Sized,
{
    debug!("dijkstra search started");
    let (explored, goal) = explore(start, queue, true);
    let Some(goal) = goal else {
        debug!(settled = explored.settled.len(), "dijkstra search found no goal");
        return None;
    };
    let cost = explored.dist_to.get(&goal).copied()?;
    debug!(settled = explored.settled.len(), "dijkstra search reached goal");
    Some((explored.path_to(&goal), cost))
}

/// Shortest distances from one start node to every reachable node
pub struct ShortestPathTree<N: SearchNode> {
    explored: Explored<N>,
}

impl<N: SearchNode> ShortestPathTree<N> {
    /// Explores everything reachable from `start` using a fresh queue of type `Q`
    pub fn build<Q>(start: &N) -> Self
    where
        Q: MinPriorityQueue<N, N::Cost>,
    {
        let mut queue = Q::new();
        Self::build_with(start, &mut queue)
    }

    /// Explores everything reachable from `start` using `queue`
    pub fn build_with<Q>(start: &N, queue: &mut Q) -> Self
    where
        Q: MinPriorityQueue<N, N::Cost> + ?Sized,
    {
        let (explored, _) = explore(start, queue, false);
        debug!(reachable = explored.settled.len(), "shortest path tree built");
        ShortestPathTree { explored }
    }

    /// Length of the shortest path to `node`, or `None` if it is unreachable
    pub fn distance(&self, node: &N) -> Option<N::Cost> {
        self.explored.dist_to.get(node).copied()
    }

    /// The shortest path from the start to `node`, both inclusive
    ///
    /// Empty if `node` is unreachable.
    pub fn path_to(&self, node: &N) -> Vec<N> {
        self.explored.path_to(node)
    }

    /// Number of nodes reachable from the start, the start included
    pub fn reachable(&self) -> usize {
        self.explored.settled.len()
    }
}
