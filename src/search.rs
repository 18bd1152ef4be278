//! An agent to choose moves in Simacogo

use log::{debug, trace};

use crate::{
    board::Cell,
    error::GameError,
    node::{Action, GameNode},
    score::MAX_MOVE_POINTS,
    CELLS,
};

/// The maximum possible evaluation of a position, every O placement scoring in full
pub const MAX_SCORE: i32 = MAX_MOVE_POINTS * ((CELLS + 1) / 2) as i32;
/// The minimum possible evaluation of a position
pub const MIN_SCORE: i32 = -MAX_SCORE;

/// Starting bound for the maximizing side, below any reachable evaluation
pub const NEG_INFINITY: i32 = i32::MIN;
/// Starting bound for the minimizing side, above any reachable evaluation
pub const INFINITY: i32 = i32::MAX;

/// How the computer searches for its move
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct SearchOptions {
    /// The ply budget, counting the computer's own move
    pub depth: usize,
    /// Use alpha-beta pruning instead of plain minimax
    pub use_alpha_beta: bool,
    /// Mirror the opponent's last column when the search cannot tell moves apart
    pub avoid_winning: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            depth: 4,
            use_alpha_beta: true,
            avoid_winning: false,
        }
    }
}

/// A candidate move at the root together with its searched value
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Decision {
    pub action: Action,
    pub value: i32,
}

impl Decision {
    pub fn column(&self) -> usize {
        self.action.column
    }
}

/// A depth limited game tree searcher
///
/// # Position Scoring
/// A position is worth `O score - X score`. O (the computer) is always the
/// maximizing side and X always the minimizing side, whoever is to move at
/// the root. The tree is generated as it is walked and dropped straight
/// after, so at most `depth` levels of siblings are alive at once.
#[derive(Clone, Debug)]
pub struct Searcher {
    options: SearchOptions,

    /// The number of nodes visited by this `Searcher` so far (for diagnostics only)
    pub node_count: usize,
}

impl Searcher {
    /// Creates a new `Searcher` with the given options
    pub fn new(options: SearchOptions) -> Self {
        Self {
            options,
            node_count: 0,
        }
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// Plain minimax to `depth` plies
    ///
    /// Returns the static evaluation once the depth is spent or the board is
    /// full.
    pub fn minimax(&mut self, node: &GameNode, depth: usize, maximizing: bool) -> i32 {
        self.node_count += 1;

        if depth == 0 || node.is_terminal() {
            return node.evaluation();
        }

        let children = node.children();
        // no moves left, fall back to the static evaluation
        if children.is_empty() {
            return node.evaluation();
        }

        if maximizing {
            children
                .iter()
                .map(|child| self.minimax(child, depth - 1, false))
                .fold(NEG_INFINITY, i32::max)
        } else {
            children
                .iter()
                .map(|child| self.minimax(child, depth - 1, true))
                .fold(INFINITY, i32::min)
        }
    }

    /// Minimax with alpha-beta pruning
    ///
    /// Returns the same value as [`Searcher::minimax`] for a full window, but
    /// stops exploring a node's children as soon as the opponent would never
    /// allow the line.
    pub fn alpha_beta(
        &mut self,
        node: &GameNode,
        depth: usize,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> i32 {
        self.node_count += 1;

        if depth == 0 || node.is_terminal() {
            return node.evaluation();
        }

        let children = node.children();
        if children.is_empty() {
            return node.evaluation();
        }

        if maximizing {
            let mut best_value = NEG_INFINITY;
            for child in children.iter() {
                best_value = best_value.max(self.alpha_beta(child, depth - 1, alpha, beta, false));
                alpha = alpha.max(best_value);
                // the minimizing side already has something better elsewhere
                if best_value >= beta {
                    return best_value;
                }
            }
            best_value
        } else {
            let mut best_value = INFINITY;
            for child in children.iter() {
                best_value = best_value.min(self.alpha_beta(child, depth - 1, alpha, beta, true));
                beta = beta.min(best_value);
                if best_value <= alpha {
                    return best_value;
                }
            }
            best_value
        }
    }

    /// Searches `node` with the configured strategy and a full window
    pub fn search(&mut self, node: &GameNode, depth: usize, maximizing: bool) -> i32 {
        if self.options.use_alpha_beta {
            self.alpha_beta(node, depth, NEG_INFINITY, INFINITY, maximizing)
        } else {
            self.minimax(node, depth, maximizing)
        }
    }

    /// Values every move available at `node`, best first
    ///
    /// Moves of equal value keep their column order.
    pub fn root_decisions(&mut self, node: &GameNode) -> Result<Vec<Decision>, GameError> {
        if node.is_terminal() {
            return Err(GameError::NoLegalMove);
        }

        let depth = self.options.depth.saturating_sub(1);
        let mut decisions = Vec::new();
        for child in node.children() {
            // the opponent replies to each candidate, so the recursion starts minimizing
            let value = self.search(&child, depth, false);
            let action = *child.action().ok_or(GameError::NoLegalMove)?;
            debug!("column {}: value {}", action.column + 1, value);
            decisions.push(Decision { action, value });
        }
        if decisions.is_empty() {
            return Err(GameError::NoLegalMove);
        }

        // sort_by is stable, ties stay in column order
        decisions.sort_by(|a, b| b.value.cmp(&a.value));
        Ok(decisions)
    }

    /// Chooses the column to play at `node`
    ///
    /// Fails with `NoLegalMove` if the game is already over.
    pub fn decide(&mut self, node: &GameNode) -> Result<usize, GameError> {
        let decisions = self.root_decisions(node)?;

        if self.options.avoid_winning {
            if let Some(column) = tie_break(node, &decisions) {
                debug!("no preference found, mirroring column {}", column + 1);
                return Ok(column);
            }
        }

        trace!("searched {} nodes", self.node_count);
        Ok(decisions[0].column())
    }
}

/// The "guarantee loss/tie" override
///
/// When every root move is worth the same, prefer stacking on the column the
/// opponent has just played, as long as that column still has room and its
/// top tile is not already the opponent's. Returns `None` when the override
/// does not apply.
pub fn tie_break(node: &GameNode, decisions: &[Decision]) -> Option<usize> {
    let first = decisions.first()?;
    if decisions.iter().any(|decision| decision.value != first.value) {
        return None;
    }

    let last = node.action()?;
    let column = last.column;
    match node.board().cell(0, column) {
        Cell::Empty => Some(column),
        _ => None,
    }
}
