use clap::ValueEnum;
use pursuit_agents::{GreedyPolicy, MoveSelector, Policy, RandomWalkPolicy, DEFAULT_DEPTH};
use pursuit_core::{BoardExtent, Coord, GridState, Result, Role};
use std::fmt;
use tracing::info;

/// Which policy drives an agent during the pursuit phase.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum PolicyKind {
    Minimax,
    Greedy,
    Random,
}

impl PolicyKind {
    pub fn build(self, depth: u8, seed: Option<u64>) -> Box<dyn Policy> {
        match (self, seed) {
            (PolicyKind::Minimax, Some(seed)) => Box::new(MoveSelector::with_seed(depth, seed)),
            (PolicyKind::Minimax, None) => Box::new(MoveSelector::new(depth)),
            (PolicyKind::Greedy, _) => Box::new(GreedyPolicy::new()),
            (PolicyKind::Random, Some(seed)) => Box::new(RandomWalkPolicy::with_seed(seed)),
            (PolicyKind::Random, None) => Box::new(RandomWalkPolicy::new()),
        }
    }
}

#[derive(Clone, Debug)]
pub struct SimulationConfig {
    pub extent: BoardExtent,
    pub evader_start: Coord,
    pub pursuer_start: Coord,
    pub depth: u8,
    /// Rounds played before the evader is declared to have escaped.
    pub max_turns: u32,
    /// Leading rounds in which only the evader moves, at random.
    pub wander_turns: u32,
    pub evader_policy: PolicyKind,
    pub pursuer_policy: PolicyKind,
    /// Fixes every random choice in the run when set.
    pub seed: Option<u64>,
}

impl SimulationConfig {
    /// Default settings on a board of the given size, agents in opposite corners.
    pub fn with_extent(extent: BoardExtent) -> Self {
        Self {
            extent,
            evader_start: Coord::new(0, 0),
            pursuer_start: extent.far_corner(),
            depth: DEFAULT_DEPTH,
            max_turns: 81,
            wander_turns: 31,
            evader_policy: PolicyKind::Minimax,
            pursuer_policy: PolicyKind::Minimax,
            seed: None,
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::with_extent(BoardExtent::default())
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Phase {
    /// The evader drifts randomly while the pursuer waits.
    Wandering,
    /// Both agents play their configured policies.
    Pursuit,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Outcome {
    /// Agents met in `round` (1-based). `mover` is whoever stepped onto the
    /// other, or None if they started on the same cell.
    Captured { round: u32, mover: Option<Role> },
    /// The round limit ran out first.
    Escaped { rounds: u32 },
}

impl Outcome {
    pub fn is_capture(&self) -> bool {
        matches!(self, Outcome::Captured { .. })
    }

    /// Rounds played before the run ended.
    pub fn rounds(&self) -> u32 {
        match *self {
            Outcome::Captured { round, .. } => round,
            Outcome::Escaped { rounds } => rounds,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Outcome::Captured { mover: None, .. } => {
                write!(f, "The agents started on the same cell. Game over.")
            }
            Outcome::Captured {
                round,
                mover: Some(Role::Evader),
            } => write!(f, "The evader walked into the pursuer in round {}. Game over.", round),
            Outcome::Captured {
                round,
                mover: Some(Role::Pursuer),
            } => write!(f, "The pursuer caught the evader in round {}. Game over.", round),
            Outcome::Escaped { rounds } => {
                write!(f, "The evader escaped! The pursuer gave up after {} rounds.", rounds)
            }
        }
    }
}

/// One agent move, as played.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MoveRecord {
    /// 1-based round number.
    pub round: u32,
    pub phase: Phase,
    /// 1-based turn number counted from the start of `phase`.
    pub phase_turn: u32,
    pub role: Role,
    pub policy: String,
    pub from: Coord,
    pub to: Coord,
}

/// A single game: owns the live board and both agents' policies.
pub struct Simulation {
    config: SimulationConfig,
    state: GridState,
    /// 0-based index of the round in progress.
    round: u32,
    to_move: Role,
    outcome: Option<Outcome>,
    wander: RandomWalkPolicy,
    evader: Box<dyn Policy>,
    pursuer: Box<dyn Policy>,
}

impl Simulation {
    pub fn new(config: SimulationConfig) -> Result<Self> {
        let state = GridState::new(config.extent, config.evader_start, config.pursuer_start)?;

        let seed = config.seed;
        let derive = |offset: u64| seed.map(|s| s.wrapping_add(offset));
        let wander = match derive(0) {
            Some(seed) => RandomWalkPolicy::with_seed(seed),
            None => RandomWalkPolicy::new(),
        };
        let evader = config.evader_policy.build(config.depth, derive(1));
        let pursuer = config.pursuer_policy.build(config.depth, derive(2));

        let outcome = if state.is_capture() {
            Some(Outcome::Captured {
                round: 0,
                mover: None,
            })
        } else if config.max_turns == 0 {
            Some(Outcome::Escaped { rounds: 0 })
        } else {
            None
        };

        info!(
            extent = %config.extent,
            evader = %state.evader(),
            pursuer = %state.pursuer(),
            evader_policy = evader.name(),
            pursuer_policy = pursuer.name(),
            "simulation ready"
        );

        Ok(Simulation {
            config,
            state,
            round: 0,
            to_move: Role::Evader,
            outcome,
            wander,
            evader,
            pursuer,
        })
    }

    pub fn state(&self) -> &GridState {
        &self.state
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn is_finished(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn phase(&self) -> Phase {
        if self.round < self.config.wander_turns {
            Phase::Wandering
        } else {
            Phase::Pursuit
        }
    }

    /// The agent whose move `step` will play next.
    pub fn next_mover(&self) -> Option<Role> {
        if self.is_finished() {
            None
        } else {
            Some(self.to_move)
        }
    }

    fn phase_turn(&self) -> u32 {
        match self.phase() {
            Phase::Wandering => self.round + 1,
            Phase::Pursuit => self.round - self.config.wander_turns + 1,
        }
    }

    /// Plays one agent move. Returns None once the game is over.
    pub fn step(&mut self) -> Result<Option<MoveRecord>> {
        if self.outcome.is_some() {
            return Ok(None);
        }

        let role = self.to_move;
        let phase = self.phase();
        let from = role.position_of(&self.state);

        let (to, policy) = match (phase, role) {
            (Phase::Wandering, Role::Evader) => (
                self.wander.choose_move(from, self.state.extent()),
                self.wander.name().to_string(),
            ),
            (_, Role::Evader) => (
                self.evader.choose_move(role, &self.state),
                self.evader.name().to_string(),
            ),
            (_, Role::Pursuer) => (
                self.pursuer.choose_move(role, &self.state),
                self.pursuer.name().to_string(),
            ),
        };
        self.state = role.apply_move(&self.state, to)?;

        let record = MoveRecord {
            round: self.round + 1,
            phase,
            phase_turn: self.phase_turn(),
            role,
            policy,
            from,
            to,
        };

        if self.state.is_capture() {
            let outcome = Outcome::Captured {
                round: record.round,
                mover: Some(role),
            };
            info!(%outcome, "capture");
            self.outcome = Some(outcome);
            return Ok(Some(record));
        }

        // The pursuer sits out wandering rounds.
        if role == Role::Evader && phase == Phase::Pursuit {
            self.to_move = Role::Pursuer;
        } else {
            self.round += 1;
            self.to_move = Role::Evader;

            if self.round == self.config.wander_turns && self.round < self.config.max_turns {
                info!(round = self.round, "wandering over, pursuit begins");
            }
            if self.round >= self.config.max_turns {
                let outcome = Outcome::Escaped { rounds: self.round };
                info!(%outcome, "round limit reached");
                self.outcome = Some(outcome);
            }
        }

        Ok(Some(record))
    }

    /// Steps until the game ends.
    pub fn run(&mut self) -> Result<Outcome> {
        loop {
            if let Some(outcome) = self.outcome {
                return Ok(outcome);
            }
            self.step()?;
        }
    }
}
