//! Bounded FIFO memory of recent moves.

use std::collections::VecDeque;

use crate::neighborhood::Move;

/// The last `capacity` accepted moves, oldest evicted first.
///
/// # Examples
///
/// ```
/// use cvrp_tabu::neighborhood::Move;
/// use cvrp_tabu::tabu::TabuList;
///
/// let mut tabu = TabuList::new(2);
/// let mv = |b| Move::TwoOpt { route: 0, pos_a: 0, pos_b: b };
/// tabu.push(mv(2));
/// tabu.push(mv(3));
/// tabu.push(mv(4));
/// assert_eq!(tabu.len(), 2);
/// assert!(!tabu.contains(&mv(2)));
/// assert!(tabu.contains(&mv(4)));
/// ```
#[derive(Debug, Clone)]
pub struct TabuList {
    moves: VecDeque<Move>,
    capacity: usize,
}

impl TabuList {
    /// Creates an empty list holding at most `capacity` moves.
    pub fn new(capacity: usize) -> Self {
        Self {
            moves: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Records a move, evicting the oldest entries beyond capacity.
    pub fn push(&mut self, mv: Move) {
        self.moves.push_back(mv);
        while self.moves.len() > self.capacity {
            self.moves.pop_front();
        }
    }

    /// Returns `true` if an identical move is remembered.
    pub fn contains(&self, mv: &Move) -> bool {
        self.moves.contains(mv)
    }

    /// Forgets every move.
    pub fn clear(&mut self) {
        self.moves.clear();
    }

    /// Number of remembered moves.
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Returns `true` if no move is remembered.
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Maximum number of remembered moves.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Remembered moves, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Move> {
        self.moves.iter()
    }
}
