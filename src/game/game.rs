use std::fmt::{self, Debug};

use owo_colors::{OwoColorize, Style};

use super::{Cell, Grid};
use crate::env::{v2, Direction, Vec2D};
use crate::error::{Error, Result};
use crate::eval::{Adversary, GridState};
use crate::search::GameState;

/// Turns a ghost stays harmless after a capsule was eaten.
pub const SCARED_TIME: u16 = 40;
pub const TIME_PENALTY: i64 = 1;
pub const FOOD_SCORE: i64 = 10;
pub const WIN_SCORE: i64 = 500;
pub const LOSE_PENALTY: i64 = 500;
pub const GHOST_SCORE: i64 = 200;

/// The outcome of a simulated game.
/// If the game did not end the outcome is `None`.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum Outcome {
    None,
    Win,
    Lose,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ghost {
    pub start: Vec2D,
    pub pos: Vec2D,
    /// Last move, ghosts do not turn around unless they have to.
    pub dir: Direction,
    /// Number of turns the ghost remains scared.
    pub scared: u16,
}

impl Ghost {
    pub fn new(start: Vec2D) -> Ghost {
        Ghost {
            start,
            pos: start,
            dir: Direction::Stop,
            scared: 0,
        }
    }

    fn respawn(&mut self) {
        *self = Ghost::new(self.start);
    }
}

/// Game holds the complete game state.
/// This also provides methods to execute moves and evaluate their outcome.
///
/// Pacman is agent 0, ghost `i` is agent `i + 1`.
#[derive(Clone)]
pub struct Game {
    pub grid: Grid,
    pub pacman: Vec2D,
    pub ghosts: Vec<Ghost>,
    pub score: i64,
    pub outcome: Outcome,
}

impl Game {
    pub fn new(grid: Grid, pacman: Vec2D, ghosts: Vec<Ghost>) -> Game {
        Game {
            grid,
            pacman,
            ghosts,
            score: 0,
            outcome: Outcome::None,
        }
    }

    pub fn num_agents(&self) -> usize {
        self.ghosts.len() + 1
    }

    pub fn food_left(&self) -> usize {
        self.grid.count(Cell::Food)
    }

    /// Returns all moves of an agent that do not run into walls.
    ///
    /// Pacman may always stop (as last option).
    /// Ghosts never stop and only reverse if there is no other way.
    /// No agent can move after the game has ended.
    pub fn valid_moves(&self, agent: usize) -> Vec<Direction> {
        if self.outcome != Outcome::None {
            return Vec::new();
        }

        if agent == 0 {
            let mut moves: Vec<Direction> = Direction::iter()
                .filter(|&d| self.grid.walkable(self.pacman.apply(d)))
                .collect();
            moves.push(Direction::Stop);
            moves
        } else {
            let ghost = &self.ghosts[agent - 1];
            let mut moves: Vec<Direction> = Direction::iter()
                .filter(|&d| self.grid.walkable(ghost.pos.apply(d)))
                .collect();
            if moves.len() > 1 {
                moves.retain(|&d| d != ghost.dir.invert());
            }
            if moves.is_empty() {
                moves.push(Direction::Stop);
            }
            moves
        }
    }

    pub fn move_is_valid(&self, agent: usize, dir: Direction) -> bool {
        agent < self.num_agents() && self.valid_moves(agent).contains(&dir)
    }

    /// Executes the move of one agent.
    /// This method also checks for eating and collisions.
    ///
    /// Panics if the move is not valid.
    pub fn step(&mut self, agent: usize, dir: Direction) {
        assert!(
            self.move_is_valid(agent, dir),
            "illegal action {:?} for agent {}",
            dir,
            agent
        );

        if agent == 0 {
            self.step_pacman(dir);
        } else {
            self.step_ghost(agent - 1, dir);
        }
    }

    /// Like [`Game::step`] but reports invalid moves.
    pub fn try_step(&mut self, agent: usize, dir: Direction) -> Result<()> {
        if !self.move_is_valid(agent, dir) {
            return Err(Error::IllegalAction { agent, action: dir });
        }
        self.step(agent, dir);
        Ok(())
    }

    fn step_pacman(&mut self, dir: Direction) {
        let p = self.pacman.apply(dir);
        self.pacman = p;
        self.score -= TIME_PENALTY;

        match self.grid[p] {
            Cell::Food => {
                self.grid[p] = Cell::Free;
                self.score += FOOD_SCORE;
                if self.food_left() == 0 && self.outcome != Outcome::Lose {
                    self.score += WIN_SCORE;
                    self.outcome = Outcome::Win;
                }
            }
            Cell::Capsule => {
                self.grid[p] = Cell::Free;
                for ghost in &mut self.ghosts {
                    ghost.scared = SCARED_TIME;
                }
            }
            Cell::Free | Cell::Wall => {}
        }

        for i in 0..self.ghosts.len() {
            self.check_collision(i);
        }
    }

    fn step_ghost(&mut self, i: usize, dir: Direction) {
        let ghost = &mut self.ghosts[i];
        ghost.pos = ghost.pos.apply(dir);
        ghost.dir = dir;
        ghost.scared = ghost.scared.saturating_sub(1);
        self.check_collision(i);
    }

    /// Pacman either eats a scared ghost, which respawns, or is eaten.
    fn check_collision(&mut self, i: usize) {
        let ghost = &mut self.ghosts[i];
        if ghost.pos != self.pacman {
            return;
        }

        if ghost.scared > 0 {
            self.score += GHOST_SCORE;
            ghost.respawn();
        } else if self.outcome != Outcome::Win {
            self.score -= LOSE_PENALTY;
            self.outcome = Outcome::Lose;
        }
    }
}

impl Game {
    /// Parses a textual layout.
    ///
    /// `%` are walls, `.` food, `o` capsules, `P` pacman and `G` ghosts.
    /// The first line is the top of the board.
    /// Ghosts are numbered by their position (column first).
    pub fn parse(txt: &str) -> Result<Game> {
        let lines: Vec<(usize, &str)> = txt
            .lines()
            .enumerate()
            .map(|(i, l)| (i + 1, l.trim()))
            .filter(|(_, l)| !l.is_empty())
            .collect();

        let (first_line, first) = lines.first().copied().ok_or_else(|| Error::Layout {
            line: 0,
            message: "layout is empty".into(),
        })?;
        let width = first.chars().count();
        let height = lines.len();
        if width > i16::MAX as usize || height > i16::MAX as usize {
            return Err(Error::Layout {
                line: first_line,
                message: "layout is too large".into(),
            });
        }

        let mut grid = Grid::new(width, height);
        let mut pacman = None;
        let mut ghosts = Vec::new();

        for (row, &(line, row_txt)) in lines.iter().enumerate() {
            if row_txt.chars().count() != width {
                return Err(Error::Layout {
                    line,
                    message: format!("expected {} columns, got {}", width, row_txt.chars().count()),
                });
            }

            let y = (height - row - 1) as i16;
            for (x, c) in row_txt.chars().enumerate() {
                let p = v2(x as _, y);
                match c {
                    '%' => grid[p] = Cell::Wall,
                    '.' => grid[p] = Cell::Food,
                    'o' => grid[p] = Cell::Capsule,
                    'P' => {
                        if pacman.replace(p).is_some() {
                            return Err(Error::Layout {
                                line,
                                message: "more than one pacman".into(),
                            });
                        }
                    }
                    'G' => ghosts.push(p),
                    ' ' => {}
                    c => {
                        return Err(Error::Layout {
                            line,
                            message: format!("unexpected character '{}'", c),
                        })
                    }
                }
            }
        }

        let pacman = pacman.ok_or_else(|| Error::Layout {
            line: first_line,
            message: "no pacman".into(),
        })?;
        ghosts.sort();

        Ok(Game::new(
            grid,
            pacman,
            ghosts.into_iter().map(Ghost::new).collect(),
        ))
    }
}

impl GameState for Game {
    type Action = Direction;

    fn legal_actions(&self, agent: usize) -> Vec<Direction> {
        self.valid_moves(agent)
    }

    fn successor(&self, agent: usize, action: Direction) -> Game {
        let mut game = self.clone();
        game.step(agent, action);
        game
    }

    fn is_win(&self) -> bool {
        self.outcome == Outcome::Win
    }

    fn is_lose(&self) -> bool {
        self.outcome == Outcome::Lose
    }

    fn num_agents(&self) -> usize {
        Game::num_agents(self)
    }

    fn score(&self) -> f64 {
        self.score as f64
    }
}

impl GridState for Game {
    fn agent_position(&self) -> Vec2D {
        self.pacman
    }

    fn targets(&self) -> Vec<Vec2D> {
        self.grid.positions(Cell::Food).collect()
    }

    fn adversaries(&self) -> Vec<Adversary> {
        self.ghosts
            .iter()
            .map(|g| Adversary {
                pos: g.pos,
                scared: g.scared,
            })
            .collect()
    }
}

impl Debug for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn ghost_style(ghost: &Ghost) -> Style {
            if ghost.scared > 0 {
                Style::new().white()
            } else {
                Style::new().red()
            }
        }

        writeln!(f, "Game {{")?;

        for y in (0..self.grid.height as i16).rev() {
            write!(f, "  ")?;
            for x in 0..self.grid.width as i16 {
                let p = v2(x, y);
                if p == self.pacman {
                    write!(f, "{}", "P".yellow())?;
                } else if let Some(ghost) = self.ghosts.iter().find(|g| g.pos == p) {
                    write!(f, "{}", "G".style(ghost_style(ghost)))?;
                } else {
                    match self.grid[p] {
                        Cell::Free => write!(f, " ")?,
                        Cell::Wall => write!(f, "{}", "%".blue())?,
                        Cell::Food => write!(f, ".")?,
                        Cell::Capsule => write!(f, "{}", "o".bright_white())?,
                    }
                }
            }
            writeln!(f)?;
        }

        write!(f, "  Score: {} {:?}, Ghosts: [", self.score, self.outcome)?;
        let mut first = true;
        for (i, ghost) in self.ghosts.iter().enumerate() {
            if !first {
                write!(f, ", ")?;
            } else {
                first = false;
            }
            write!(f, "({}: {}/{} {})", i + 1, ghost.pos.x, ghost.pos.y, ghost.scared)?;
        }
        writeln!(f, "]")?;

        writeln!(f, "}}")?;
        Ok(())
    }
}
