use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info, warn};

use super::{
    action::{Action, Direction},
    config::GameConfig,
    food::{FoodSlot, OrbitalKind, Spin},
    grid::SpawnError,
    orbital::OrbitalLabel,
    rules::{FillOutcome, FillState, FlashMessage, Phase, RuleEvent, Tone},
    spawner::Spawner,
    state::{CollisionType, GameState, Position, Snake},
};

/// Information about a step
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepInfo {
    /// Kind of orbital eaten this step, if any
    pub ate_orbital: Option<OrbitalKind>,
    /// Spin of the electron eaten this step, if any
    pub ate_electron: Option<Spin>,
    /// Whether the snake kept its tail this step
    pub grew: bool,
    /// Type of collision if one occurred
    pub collision_type: Option<CollisionType>,
    /// Rule events in the order they were applied
    pub events: Vec<RuleEvent>,
}

/// Result of a game step
#[derive(Debug, Clone, PartialEq)]
pub struct StepResult {
    /// Change in score caused by this step
    pub score_delta: i32,
    /// Whether the game has ended, by collision or by winning
    pub terminated: bool,
    /// Additional information about the step
    pub info: StepInfo,
}

/// The game engine that handles all game logic
pub struct GameEngine {
    config: GameConfig,
    spawner: Spawner,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let spawner = Spawner::new(rng, config.grid_width, config.grid_height);

        Self { config, spawner }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Start a new game: snake in the centre heading right, "1s" to find
    pub fn reset(&mut self) -> Result<GameState, SpawnError> {
        let center_x = (self.config.grid_width / 2) as i32;
        let center_y = (self.config.grid_height / 2) as i32;

        let snake = Snake::new(
            Position::new(center_x, center_y),
            Direction::Right,
            self.config.initial_snake_length,
        );

        let orbitals = self
            .spawner
            .spawn_orbital_set(OrbitalLabel::FIRST, &snake.body)?;
        let mut occupied = snake.body.clone();
        occupied.extend(orbitals.iter().map(|orbital| orbital.position));
        let electrons = self.spawner.spawn_electron_set(&occupied)?;

        info!(
            width = self.config.grid_width,
            height = self.config.grid_height,
            "new game"
        );

        Ok(GameState::new(
            snake,
            orbitals,
            electrons,
            self.config.grid_width,
            self.config.grid_height,
        ))
    }

    /// Execute one step of the game
    ///
    /// Order within a step: turn, move the head, check walls and body, then
    /// resolve an orbital (only while seeking) before an electron. The tail
    /// is kept if anything was eaten.
    pub fn step(&mut self, state: &mut GameState, action: Action) -> Result<StepResult, SpawnError> {
        if state.progress.game_over {
            return Ok(StepResult {
                score_delta: 0,
                terminated: true,
                info: StepInfo::default(),
            });
        }

        let expired = state.flash.as_mut().is_some_and(|flash| !flash.tick());
        if expired {
            state.flash = None;
        }

        if let Action::Move(direction) = action {
            state.snake.turn(direction);
        }

        let new_head = state.snake.next_head();
        let score_before = state.progress.score;

        if let Some(collision_type) = self.check_collision(state, new_head) {
            state.progress.game_over = true;
            state.progress.win = false;
            state.steps += 1;
            info!(?collision_type, score = state.progress.score, "game over");

            return Ok(StepResult {
                score_delta: 0,
                terminated: true,
                info: StepInfo {
                    collision_type: Some(collision_type),
                    ..Default::default()
                },
            });
        }

        let (orbital_slot, electron_slot) = state.food_at(new_head);
        let grew = orbital_slot.is_some() || electron_slot.is_some();
        state.snake.move_snake(grew);

        let mut info = StepInfo {
            grew,
            ..Default::default()
        };

        if let Some(slot) = orbital_slot {
            self.eat_orbital(state, slot, &mut info)?;
        }
        if let Some(slot) = electron_slot {
            self.eat_electron(state, slot, &mut info)?;
        }

        state.steps += 1;

        Ok(StepResult {
            score_delta: state.progress.score - score_before,
            terminated: state.progress.game_over,
            info,
        })
    }

    /// Check if the new head position causes a collision
    fn check_collision(&self, state: &GameState, pos: Position) -> Option<CollisionType> {
        if !state.is_in_bounds(pos) {
            return Some(CollisionType::Wall);
        }

        // The whole body counts, tail included, since it has not moved yet
        if state.snake.occupies(pos) {
            return Some(CollisionType::SelfCollision);
        }

        None
    }

    fn eat_orbital(
        &mut self,
        state: &mut GameState,
        slot: usize,
        info: &mut StepInfo,
    ) -> Result<(), SpawnError> {
        let Phase::Seeking { orbitals } = &state.phase else {
            return Ok(());
        };
        let eaten = orbitals[slot];

        state.progress.orbitals_eaten += 1;
        info.ate_orbital = Some(eaten.kind);

        match eaten.kind {
            OrbitalKind::Correct => {
                state.phase = Phase::Filling(FillState::new(eaten.label));
                self.flash(state, format!("Fill {}!", eaten.label), Tone::Reward);
                info.events.push(RuleEvent::OrbitalFound(eaten.label));
                info!(orbital = %eaten.label, "orbital found, filling");
            }
            OrbitalKind::Decoy => {
                state.progress.score -= self.config.penalty;
                self.flash(
                    state,
                    format!("-{} (Wrong Orbital)", self.config.penalty),
                    Tone::Penalty,
                );
                info.events.push(RuleEvent::WrongOrbital(eaten.label));
                debug!(orbital = %eaten.label, "decoy eaten");

                let occupied = state.occupied_except(Some(FoodSlot::Orbital(slot)));
                if let (Some(target), Phase::Seeking { orbitals }) =
                    (state.progress.target(), &mut state.phase)
                {
                    self.spawner
                        .respawn_decoy(&mut orbitals[slot], target, &occupied)?;
                }
            }
        }

        Ok(())
    }

    fn eat_electron(
        &mut self,
        state: &mut GameState,
        slot: usize,
        info: &mut StepInfo,
    ) -> Result<(), SpawnError> {
        let spin = state.electrons[slot].spin;
        info.ate_electron = Some(spin);

        let placed = match &mut state.phase {
            Phase::Filling(fill) => Some((fill.active, fill.place(spin))),
            _ => None,
        };

        match placed {
            None => {
                state.progress.score -= self.config.penalty;
                self.flash(
                    state,
                    format!("-{} (Must eat orbital first!)", self.config.penalty),
                    Tone::Penalty,
                );
                info.events.push(RuleEvent::ElectronTooEarly(spin));
                debug!(?spin, "electron eaten before its orbital");
            }
            Some((orbital, FillOutcome::Accepted)) => {
                info.events.push(RuleEvent::ElectronPlaced(spin));
                debug!(?spin, %orbital, "electron placed");
            }
            Some((orbital, FillOutcome::PairingError)) => {
                state.progress.score -= self.config.penalty;
                self.flash(
                    state,
                    format!("-{} (Pairing Error)", self.config.penalty),
                    Tone::Penalty,
                );
                info.events.push(RuleEvent::PairingError(spin));
                warn!(?spin, %orbital, "pairing error, fill discarded");
            }
            Some((orbital, FillOutcome::Full)) => {
                state.progress.score += self.config.fill_bonus;
                self.flash(
                    state,
                    format!("+{} (Orbital Full!)", self.config.fill_bonus),
                    Tone::Reward,
                );
                info.events.push(RuleEvent::ElectronPlaced(spin));
                info.events.push(RuleEvent::OrbitalFull(orbital));
                info!(%orbital, score = state.progress.score, "orbital full");
                self.advance(state, info)?;
            }
        }

        let occupied = state.occupied_except(Some(FoodSlot::Electron(slot)));
        self.spawner
            .respawn_electron(&mut state.electrons[slot], &occupied)?;

        Ok(())
    }

    /// Move on to the next orbital of the order, or finish the game
    fn advance(&mut self, state: &mut GameState, info: &mut StepInfo) -> Result<(), SpawnError> {
        state.progress.current_orbital_index += 1;

        match state.progress.target() {
            None => {
                state.phase = Phase::Complete;
                state.progress.game_over = true;
                state.progress.win = true;
                info.events.push(RuleEvent::Won);
                info!(score = state.progress.score, "every orbital filled, game won");
            }
            Some(next) => {
                // Still filling here, so this is the snake plus the electrons
                let occupied = state.occupied_except(None);
                let orbitals = self.spawner.spawn_orbital_set(next, &occupied)?;
                state.phase = Phase::Seeking { orbitals };
                debug!(orbital = %next, "next orbital set spawned");
            }
        }

        Ok(())
    }

    fn flash(&self, state: &mut GameState, text: String, tone: Tone) {
        state.flash = Some(FlashMessage::new(text, tone, self.config.flash_ticks));
    }
}
