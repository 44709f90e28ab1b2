//! Fixture problems shared by the unit tests.

use crate::problem::{
    GeneticProblem, HeuristicProblem, Problem, RandomStateProblem, SearchProblem, ValueProblem,
};
use rand::Rng;
use std::cell::RefCell;
use std::collections::HashMap;
use tracing_subscriber::EnvFilter;

/// Routes `tracing` output to the test harness, filtered by `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

// ---- 8-puzzle ----

pub const PUZZLE_GOAL: [u8; 9] = [1, 2, 3, 4, 5, 6, 7, 8, 0];

/// Sliding 3x3 puzzle. An action is the cell index the blank moves to.
pub struct EightPuzzle {
    pub start: [u8; 9],
}

impl EightPuzzle {
    pub fn new(start: [u8; 9]) -> Self {
        Self { start }
    }

    fn blank(state: &[u8; 9]) -> usize {
        state.iter().position(|&t| t == 0).unwrap_or(0)
    }
}

impl Problem for EightPuzzle {
    type State = [u8; 9];
    type Action = usize;

    fn initial_state(&self) -> [u8; 9] {
        self.start
    }
}

impl SearchProblem for EightPuzzle {
    fn actions(&self, state: &[u8; 9]) -> Vec<usize> {
        let blank = Self::blank(state);
        let (row, col) = (blank / 3, blank % 3);
        let mut moves = Vec::with_capacity(4);
        if row > 0 {
            moves.push(blank - 3);
        }
        if row < 2 {
            moves.push(blank + 3);
        }
        if col > 0 {
            moves.push(blank - 1);
        }
        if col < 2 {
            moves.push(blank + 1);
        }
        moves
    }

    fn result(&self, state: &[u8; 9], action: &usize) -> [u8; 9] {
        let mut next = *state;
        next.swap(Self::blank(state), *action);
        next
    }

    fn is_goal(&self, state: &[u8; 9]) -> bool {
        *state == PUZZLE_GOAL
    }
}

impl HeuristicProblem for EightPuzzle {
    /// Manhattan distance of every tile to its goal cell.
    fn heuristic(&self, state: &[u8; 9]) -> f64 {
        state
            .iter()
            .enumerate()
            .filter(|&(_, &t)| t != 0)
            .map(|(i, &t)| {
                let goal = usize::from(t) - 1;
                let dr = (i / 3).abs_diff(goal / 3);
                let dc = (i % 3).abs_diff(goal % 3);
                (dr + dc) as f64
            })
            .sum()
    }
}

// ---- 1-D hill ----

/// Integer line with a single peak; moves are +1 and -1.
pub struct Hill {
    pub peak: i64,
    pub start: i64,
}

impl Hill {
    pub fn new(peak: i64) -> Self {
        Self { peak, start: 0 }
    }
}

impl Problem for Hill {
    type State = i64;
    type Action = i64;

    fn initial_state(&self) -> i64 {
        self.start
    }
}

impl SearchProblem for Hill {
    fn actions(&self, _state: &i64) -> Vec<i64> {
        vec![-1, 1]
    }

    fn result(&self, state: &i64, action: &i64) -> i64 {
        state + action
    }
}

impl ValueProblem for Hill {
    fn value(&self, state: &i64) -> f64 {
        let d = (state - self.peak) as f64;
        -(d * d)
    }
}

impl RandomStateProblem for Hill {
    fn generate_random_state<R: Rng>(&self, rng: &mut R) -> i64 {
        rng.random_range(-20..=20)
    }
}

// ---- two-peak line ----

/// Integer line on `[0, 30]` with a local peak at 5 (value 10) and the
/// global peak at 25 (value 20).
pub struct TwoPeaks;

impl Problem for TwoPeaks {
    type State = i64;
    type Action = i64;

    fn initial_state(&self) -> i64 {
        0
    }
}

impl SearchProblem for TwoPeaks {
    fn actions(&self, state: &i64) -> Vec<i64> {
        [-1, 1]
            .into_iter()
            .filter(|d| (0..=30).contains(&(state + d)))
            .collect()
    }

    fn result(&self, state: &i64, action: &i64) -> i64 {
        state + action
    }
}

impl ValueProblem for TwoPeaks {
    fn value(&self, state: &i64) -> f64 {
        let local = 10 - (state - 5).abs();
        let global = 20 - (state - 25).abs();
        local.max(global) as f64
    }
}

impl RandomStateProblem for TwoPeaks {
    fn generate_random_state<R: Rng>(&self, rng: &mut R) -> i64 {
        rng.random_range(0..=30)
    }
}

// ---- weighted graphs ----

/// Directed graph over `u32` vertices. An action is the target vertex.
pub struct WeightedGraph {
    pub start: u32,
    pub goal: Option<u32>,
    pub edges: Vec<Vec<(u32, f64)>>,
    pub estimates: Vec<f64>,
}

impl WeightedGraph {
    /// Two routes to the goal: 0-1-3-4 costs 8, 0-2-3-4 costs 6.
    pub fn diamond() -> Self {
        Self {
            start: 0,
            goal: Some(4),
            edges: vec![
                vec![(1, 1.0), (2, 4.0)],
                vec![(3, 6.0)],
                vec![(3, 1.0)],
                vec![(4, 1.0)],
                vec![],
            ],
            estimates: vec![5.0, 5.0, 2.0, 1.0, 0.0],
        }
    }

    /// The vertex that looks closest (1) is the expensive way to the goal.
    pub fn trap() -> Self {
        Self {
            start: 0,
            goal: Some(3),
            edges: vec![vec![(1, 10.0), (2, 1.0)], vec![(3, 1.0)], vec![(3, 1.0)], vec![]],
            estimates: vec![2.0, 1.0, 3.0, 0.0],
        }
    }

    /// Undirected ring of `n` vertices.
    pub fn ring(n: u32, goal: Option<u32>) -> Self {
        let edges = (0..n)
            .map(|v| vec![((v + 1) % n, 1.0), ((v + n - 1) % n, 1.0)])
            .collect();
        Self {
            start: 0,
            goal,
            edges,
            estimates: vec![0.0; n as usize],
        }
    }

    /// Complete binary tree of the given height, vertices numbered in
    /// heap order (children of `v` are `2v + 1` and `2v + 2`).
    pub fn binary_tree(height: u32, goal: Option<u32>) -> Self {
        let count = (1u32 << (height + 1)) - 1;
        let edges = (0..count)
            .map(|v| {
                [2 * v + 1, 2 * v + 2]
                    .into_iter()
                    .filter(|&c| c < count)
                    .map(|c| (c, 1.0))
                    .collect()
            })
            .collect();
        Self {
            start: 0,
            goal,
            edges,
            estimates: vec![0.0; count as usize],
        }
    }

    pub fn edge_cost(&self, from: u32, to: u32) -> f64 {
        self.edges[from as usize]
            .iter()
            .find(|&&(t, _)| t == to)
            .map_or(f64::INFINITY, |&(_, c)| c)
    }
}

impl Problem for WeightedGraph {
    type State = u32;
    type Action = u32;

    fn initial_state(&self) -> u32 {
        self.start
    }
}

impl SearchProblem for WeightedGraph {
    fn actions(&self, state: &u32) -> Vec<u32> {
        self.edges[*state as usize].iter().map(|&(t, _)| t).collect()
    }

    fn result(&self, _state: &u32, action: &u32) -> u32 {
        *action
    }

    fn cost(&self, from: &u32, _action: &u32, to: &u32) -> f64 {
        self.edge_cost(*from, *to)
    }

    fn is_goal(&self, state: &u32) -> bool {
        self.goal == Some(*state)
    }
}

impl HeuristicProblem for WeightedGraph {
    fn heuristic(&self, state: &u32) -> f64 {
        self.estimates[*state as usize]
    }
}

// ---- expansion counting ----

/// Wraps a problem and counts how often each state's actions are asked for.
pub struct Counting<P: Problem> {
    pub inner: P,
    pub expansions: RefCell<HashMap<P::State, usize>>,
}

impl<P: Problem> Counting<P> {
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            expansions: RefCell::new(HashMap::new()),
        }
    }

    pub fn max_expansions(&self) -> usize {
        self.expansions.borrow().values().copied().max().unwrap_or(0)
    }

    pub fn total_expansions(&self) -> usize {
        self.expansions.borrow().values().sum()
    }
}

impl<P: Problem> Problem for Counting<P> {
    type State = P::State;
    type Action = P::Action;

    fn initial_state(&self) -> P::State {
        self.inner.initial_state()
    }
}

impl<P: SearchProblem> SearchProblem for Counting<P> {
    fn actions(&self, state: &P::State) -> Vec<P::Action> {
        *self
            .expansions
            .borrow_mut()
            .entry(state.clone())
            .or_insert(0) += 1;
        self.inner.actions(state)
    }

    fn result(&self, state: &P::State, action: &P::Action) -> P::State {
        self.inner.result(state, action)
    }

    fn cost(&self, from: &P::State, action: &P::Action, to: &P::State) -> f64 {
        self.inner.cost(from, action, to)
    }

    fn is_goal(&self, state: &P::State) -> bool {
        self.inner.is_goal(state)
    }
}

impl<P: ValueProblem> ValueProblem for Counting<P> {
    fn value(&self, state: &P::State) -> f64 {
        self.inner.value(state)
    }
}

// ---- a state with no neighbors ----

pub struct Isolated;

impl Problem for Isolated {
    type State = u8;
    type Action = ();

    fn initial_state(&self) -> u8 {
        42
    }
}

impl SearchProblem for Isolated {
    fn actions(&self, _state: &u8) -> Vec<()> {
        Vec::new()
    }

    fn result(&self, state: &u8, _action: &()) -> u8 {
        *state
    }
}

impl ValueProblem for Isolated {
    fn value(&self, state: &u8) -> f64 {
        f64::from(*state)
    }
}

// ---- OneMax ----

/// Bit strings scored by their number of set bits.
pub struct OneMax {
    pub bits: usize,
}

impl Problem for OneMax {
    type State = Vec<bool>;
    type Action = ();

    fn initial_state(&self) -> Vec<bool> {
        vec![false; self.bits]
    }
}

impl ValueProblem for OneMax {
    fn value(&self, state: &Vec<bool>) -> f64 {
        state.iter().filter(|&&b| b).count() as f64
    }
}

impl RandomStateProblem for OneMax {
    fn generate_random_state<R: Rng>(&self, rng: &mut R) -> Vec<bool> {
        (0..self.bits).map(|_| rng.random_bool(0.5)).collect()
    }
}

impl GeneticProblem for OneMax {
    fn crossover<R: Rng>(&self, a: &Vec<bool>, b: &Vec<bool>, rng: &mut R) -> Vec<bool> {
        let point = rng.random_range(0..=self.bits);
        a[..point].iter().chain(&b[point..]).copied().collect()
    }

    fn mutate<R: Rng>(&self, state: &Vec<bool>, rng: &mut R) -> Vec<bool> {
        let mut next = state.clone();
        if !next.is_empty() {
            let i = rng.random_range(0..next.len());
            next[i] = !next[i];
        }
        next
    }
}
