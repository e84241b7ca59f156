use std::collections::HashSet;

use strum::VariantArray;

use crate::{
    env::{DiscreteActionSpace, Environment},
    error::{Error, Result},
    grid::{Grid, GridAction, Pos},
};

/// The classic 5x5 grid world
///
/// The agent starts in the top-left corner. Two obstacles sit diagonally next to the goal;
/// walking into one costs 1 and ends the episode, reaching the goal pays 1 and ends the episode.
/// Every other move pays nothing, and moves into the boundary leave the agent in place.
///
/// Intended for use with a [`MonteCarloVAgent`](crate::algo::MonteCarloVAgent) or
/// [`MonteCarloQAgent`](crate::algo::MonteCarloQAgent)
#[derive(Debug, Clone)]
pub struct GridWorld {
    grid: Grid,
    start: Pos,
    goal: Pos,
    obstacles: HashSet<Pos>,
    pos: Pos,
}

impl GridWorld {
    pub fn new() -> Self {
        Self {
            grid: Grid::default(),
            start: Pos::new(0, 0),
            goal: Pos::new(2, 2),
            obstacles: HashSet::from([Pos::new(1, 2), Pos::new(2, 1)]),
            pos: Pos::new(0, 0),
        }
    }

    /// Build a grid world with a custom layout
    ///
    /// **Errors** if any cell lies outside `grid`, or if the start or goal is an obstacle
    pub fn with_layout(
        grid: Grid,
        start: Pos,
        goal: Pos,
        obstacles: impl IntoIterator<Item = Pos>,
    ) -> Result<Self> {
        let obstacles = obstacles.into_iter().collect::<HashSet<_>>();
        if let Some(&cell) = [start, goal]
            .iter()
            .chain(&obstacles)
            .find(|&&cell| !grid.contains(cell))
        {
            return Err(Error::InvalidConfig {
                message: format!(
                    "cell {cell:?} is outside the {}x{} grid",
                    grid.width(),
                    grid.height()
                ),
            });
        }
        if obstacles.contains(&start) || obstacles.contains(&goal) {
            return Err(Error::InvalidConfig {
                message: String::from("start and goal must not be obstacles"),
            });
        }

        Ok(Self {
            grid,
            start,
            goal,
            obstacles,
            pos: start,
        })
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn pos(&self) -> Pos {
        self.pos
    }

    pub fn goal(&self) -> Pos {
        self.goal
    }

    pub fn is_obstacle(&self, pos: Pos) -> bool {
        self.obstacles.contains(&pos)
    }
}

impl Default for GridWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl Environment for GridWorld {
    type State = Pos;
    type Action = GridAction;

    fn reset(&mut self) -> Self::State {
        self.pos = self.start;
        self.pos
    }

    fn step(&mut self, action: Self::Action) -> (Self::State, f64, bool) {
        self.pos = self.grid.neighbor(self.pos, action).unwrap_or(self.pos);

        let (reward, done) = if self.pos == self.goal {
            (1.0, true)
        } else if self.obstacles.contains(&self.pos) {
            (-1.0, true)
        } else {
            (0.0, false)
        };

        (self.pos, reward, done)
    }
}

impl DiscreteActionSpace for GridWorld {
    fn actions(&self) -> Vec<Self::Action> {
        GridAction::VARIANTS.to_vec()
    }
}
