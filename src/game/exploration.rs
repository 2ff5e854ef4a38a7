//! Exploration engine: walks the room graph and gathers evidence.
//!
//! The engine is a small state machine, `Idle -> InRoom(room) -> Exited`.
//! Entering a room collects its clue; each player command either moves to a
//! child room, leaves the mansion, or is rejected without changing state.
//! [`ExplorationEngine::run`] drives the machine from a [`Console`] in a plain
//! loop, so any number of rejected commands costs no stack.

use tracing::{debug, info, instrument};

use super::console::Console;
use super::evidence::Evidence;
use super::rules::SuspectRules;
use crate::config::DeadEndPolicy;
use crate::data_structures::room_graph::{Room, RoomGraph, RoomId, Side};
use crate::error::game::GameError;

/// A navigation command typed by the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Go to the child room on this side (`e` left, `d` right)
    Move(Side),
    /// Leave the mansion (`s`)
    Exit,
}

impl Command {
    /// Parses a single-character token, ignoring case and surrounding blanks.
    pub fn parse(token: &str) -> Option<Self> {
        let mut chars = token.trim().chars();
        let command = match chars.next()?.to_ascii_lowercase() {
            'e' => Command::Move(Side::Left),
            'd' => Command::Move(Side::Right),
            's' => Command::Exit,
            _ => return None,
        };
        chars.next().is_none().then_some(command)
    }
}

/// Where the exploration stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExplorationState {
    /// Not started yet
    Idle,
    /// Standing in a room
    InRoom(RoomId),
    /// Left the mansion; terminal
    Exited,
}

/// Why a command left the state unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// The token is not a navigation command
    UnknownToken(String),
    /// There is no room on that side
    NoRoom(Side),
    /// The engine is not inside a room
    NotExploring,
}

/// Clue collected on entering a room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Discovery {
    /// The clue text
    pub clue: String,
    /// The suspect it points at
    pub suspect: String,
}

/// Result of applying a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Moved into `room`, collecting `discovery` if the room had a clue
    Moved {
        /// The room entered
        room: RoomId,
        /// Clue found there
        discovery: Option<Discovery>,
    },
    /// Left the mansion
    Exited,
    /// Nothing happened
    Stayed(Rejection),
}

/// Totals of a finished exploration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExplorationSummary {
    /// Clues picked up, one per clue room entered
    pub clues_collected: usize,
    /// Rooms entered, the start room included
    pub rooms_visited: usize,
}

/// Drives one walk through the mansion.
#[derive(Debug)]
pub struct ExplorationEngine<'s> {
    graph: &'s RoomGraph,
    rules: &'s SuspectRules,
    evidence: &'s mut Evidence,
    policy: DeadEndPolicy,
    state: ExplorationState,
    summary: ExplorationSummary,
}

impl<'s> ExplorationEngine<'s> {
    /// Creates an idle engine.
    ///
    /// # Arguments
    ///
    /// * `graph` - The rooms to explore.
    /// * `rules` - Classification rules for discovered clues.
    /// * `evidence` - Where clues and suspect bindings are recorded.
    /// * `policy` - What to do in rooms without children.
    pub fn new(
        graph: &'s RoomGraph,
        rules: &'s SuspectRules,
        evidence: &'s mut Evidence,
        policy: DeadEndPolicy,
    ) -> Self {
        Self {
            graph,
            rules,
            evidence,
            policy,
            state: ExplorationState::Idle,
            summary: ExplorationSummary::default(),
        }
    }

    /// Current state.
    pub fn state(&self) -> ExplorationState {
        self.state
    }

    /// Totals so far.
    pub fn summary(&self) -> ExplorationSummary {
        self.summary
    }

    /// Enters the start room.
    ///
    /// Only valid from `Idle`; later calls leave the state alone and return
    /// [`Transition::Stayed`].
    pub fn start(&mut self) -> Transition {
        if self.state != ExplorationState::Idle {
            return Transition::Stayed(Rejection::NotExploring);
        }
        self.enter(self.graph.root())
    }

    /// Applies a player command.
    pub fn step(&mut self, command: Command) -> Transition {
        let current = match self.state {
            ExplorationState::InRoom(room) => room,
            ExplorationState::Idle | ExplorationState::Exited => {
                return Transition::Stayed(Rejection::NotExploring)
            }
        };

        match command {
            Command::Exit => {
                self.state = ExplorationState::Exited;
                info!(clues = self.summary.clues_collected, "Player left the mansion");
                Transition::Exited
            }
            Command::Move(side) => match self.graph.child(current, side) {
                Some(next) => self.enter(next),
                None => {
                    debug!(?side, room = current.index(), "No room on that side");
                    Transition::Stayed(Rejection::NoRoom(side))
                }
            },
        }
    }

    /// Ends the exploration if the policy says dead ends are final and the
    /// current room is one.
    pub fn exit_if_dead_end(&mut self) -> bool {
        let ExplorationState::InRoom(current) = self.state else {
            return false;
        };
        let dead_end = self
            .graph
            .room(current)
            .is_some_and(Room::is_dead_end);

        if self.policy == DeadEndPolicy::AutoExit && dead_end {
            self.state = ExplorationState::Exited;
            info!(room = current.index(), "Dead end reached, exploration over");
            return true;
        }
        false
    }

    fn enter(&mut self, room: RoomId) -> Transition {
        self.state = ExplorationState::InRoom(room);
        self.summary.rooms_visited += 1;

        let discovery = self.graph.clue(room).map(|clue| {
            let suspect = self.rules.classify(clue);
            self.evidence.record(clue, suspect);
            self.summary.clues_collected += 1;
            debug!(room = room.index(), clue, suspect, "Clue collected");
            Discovery {
                clue: clue.to_string(),
                suspect: suspect.to_string(),
            }
        });

        Transition::Moved { room, discovery }
    }

    /// Plays the exploration phase on `console` until the player leaves.
    ///
    /// End of input counts as leaving.
    #[instrument(level = "debug", skip_all)]
    pub fn run<C: Console + ?Sized>(
        &mut self,
        console: &mut C,
    ) -> Result<ExplorationSummary, GameError> {
        let arrival = self.start();
        self.narrate(console, &arrival)?;

        while let ExplorationState::InRoom(current) = self.state {
            if self.exit_if_dead_end() {
                console.say("This room has no other exits. The exploration ends here.")?;
                break;
            }

            self.present_choices(console, current)?;
            let transition = match console.read_line()? {
                Some(line) => match Command::parse(&line) {
                    Some(command) => self.step(command),
                    None => Transition::Stayed(Rejection::UnknownToken(line.trim().to_string())),
                },
                None => {
                    debug!("Input closed while exploring");
                    self.step(Command::Exit)
                }
            };
            self.narrate(console, &transition)?;
        }

        Ok(self.summary)
    }

    fn present_choices<C: Console + ?Sized>(
        &self,
        console: &mut C,
        current: RoomId,
    ) -> Result<(), GameError> {
        console.say("")?;
        console.say("Where to next?")?;
        if let Some(name) = self.graph.left(current).and_then(|room| self.graph.name(room)) {
            console.say(&format!("  [e] Left: {name}"))?;
        }
        if let Some(name) = self.graph.right(current).and_then(|room| self.graph.name(room)) {
            console.say(&format!("  [d] Right: {name}"))?;
        }
        console.say("  [s] Leave the mansion")?;
        console.prompt("> ")?;
        Ok(())
    }

    fn narrate<C: Console + ?Sized>(
        &self,
        console: &mut C,
        transition: &Transition,
    ) -> Result<(), GameError> {
        match transition {
            Transition::Moved { room, discovery } => {
                let name = self.graph.name(*room).unwrap_or_default();
                console.say("")?;
                console.say(&format!("--- You are in: {name} ---"))?;
                match discovery {
                    Some(found) => {
                        console.say("You found a clue!")?;
                        console.say(&format!("   Clue: \"{}\"", found.clue))?;
                        console.say(&format!("   Clue collected, it points to: {}", found.suspect))?;
                    }
                    None => console.say("   There is nothing to collect in this room.")?,
                }
            }
            Transition::Exited => {
                console.say("")?;
                console.say("Leaving the mansion... The accusation phase begins!")?;
            }
            Transition::Stayed(Rejection::UnknownToken(_)) => {
                console.say("Invalid choice. Use 'e', 'd' or 's'.")?;
            }
            Transition::Stayed(Rejection::NoRoom(_)) => {
                let name = match self.state {
                    ExplorationState::InRoom(room) => self.graph.name(room).unwrap_or_default(),
                    _ => "",
                };
                console.say(&format!("There is no room in that direction. You stay in {name}."))?;
            }
            Transition::Stayed(Rejection::NotExploring) => {}
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_structures::room_graph::RoomBlueprint;
    use test_case::test_case;

    #[test_case("e" => Some(Command::Move(Side::Left)); "left")]
    #[test_case("D" => Some(Command::Move(Side::Right)); "right uppercase")]
    #[test_case("  s  " => Some(Command::Exit); "exit padded")]
    #[test_case("x" => None; "unknown letter")]
    #[test_case("ed" => None; "two letters")]
    #[test_case("" => None; "blank")]
    fn test_parse_command(token: &str) -> Option<Command> {
        Command::parse(token)
    }

    fn engine<'s>(
        graph: &'s RoomGraph,
        rules: &'s SuspectRules,
        evidence: &'s mut Evidence,
        policy: DeadEndPolicy,
    ) -> ExplorationEngine<'s> {
        ExplorationEngine::new(graph, rules, evidence, policy)
    }

    #[test]
    fn test_start_collects_first_clue() {
        let graph = RoomGraph::build();
        let rules = SuspectRules::standard();
        let mut evidence = Evidence::default();
        let mut explorer = engine(&graph, &rules, &mut evidence, DeadEndPolicy::RequireExit);

        assert_eq!(explorer.state(), ExplorationState::Idle);
        let transition = explorer.start();
        assert_eq!(
            transition,
            Transition::Moved {
                room: graph.root(),
                discovery: Some(Discovery {
                    clue: "Um casaco de inverno molhado no chão.".to_string(),
                    suspect: "Unknown".to_string(),
                }),
            }
        );
        assert_eq!(explorer.state(), ExplorationState::InRoom(graph.root()));
        assert_eq!(explorer.start(), Transition::Stayed(Rejection::NotExploring));
    }

    #[test]
    fn test_missing_child_keeps_position() {
        let graph = RoomGraph::build();
        let rules = SuspectRules::standard();
        let mut evidence = Evidence::default();
        let mut explorer = engine(&graph, &rules, &mut evidence, DeadEndPolicy::RequireExit);
        explorer.start();
        explorer.step(Command::Move(Side::Left));
        let cellar = match explorer.step(Command::Move(Side::Left)) {
            Transition::Moved { room, .. } => room,
            other => panic!("unexpected transition: {other:?}"),
        };

        let before = explorer.summary();
        for _ in 0..1_000 {
            assert_eq!(
                explorer.step(Command::Move(Side::Right)),
                Transition::Stayed(Rejection::NoRoom(Side::Right))
            );
        }
        assert_eq!(explorer.state(), ExplorationState::InRoom(cellar));
        assert_eq!(explorer.summary(), before);
    }

    #[test]
    fn test_exit_is_terminal() {
        let graph = RoomGraph::build();
        let rules = SuspectRules::standard();
        let mut evidence = Evidence::default();
        let mut explorer = engine(&graph, &rules, &mut evidence, DeadEndPolicy::RequireExit);
        explorer.start();

        assert_eq!(explorer.step(Command::Exit), Transition::Exited);
        assert_eq!(explorer.state(), ExplorationState::Exited);
        assert_eq!(
            explorer.step(Command::Move(Side::Left)),
            Transition::Stayed(Rejection::NotExploring)
        );
    }

    #[test]
    fn test_dead_end_policies() {
        let graph = RoomGraph::from_blueprint(
            RoomBlueprint::new("Hall", "").with_left(RoomBlueprint::new("Despensa", "Lata caída")),
        )
        .unwrap();
        let rules = SuspectRules::standard();

        let mut evidence = Evidence::default();
        let mut explorer = engine(&graph, &rules, &mut evidence, DeadEndPolicy::RequireExit);
        explorer.start();
        assert!(!explorer.exit_if_dead_end());
        explorer.step(Command::Move(Side::Left));
        assert!(!explorer.exit_if_dead_end());
        assert!(matches!(explorer.state(), ExplorationState::InRoom(_)));

        let mut evidence = Evidence::default();
        let mut explorer = engine(&graph, &rules, &mut evidence, DeadEndPolicy::AutoExit);
        explorer.start();
        assert!(!explorer.exit_if_dead_end());
        explorer.step(Command::Move(Side::Left));
        assert!(explorer.exit_if_dead_end());
        assert_eq!(explorer.state(), ExplorationState::Exited);
        assert_eq!(explorer.summary().clues_collected, 1);
    }

    #[test]
    fn test_evidence_is_recorded() {
        let graph = RoomGraph::build();
        let rules = SuspectRules::standard();
        let mut evidence = Evidence::default();
        {
            let mut explorer = engine(&graph, &rules, &mut evidence, DeadEndPolicy::RequireExit);
            explorer.start();
            explorer.step(Command::Move(Side::Right));
            explorer.step(Command::Move(Side::Left));
            explorer.step(Command::Exit);
            assert_eq!(
                explorer.summary(),
                ExplorationSummary {
                    clues_collected: 3,
                    rooms_visited: 3,
                }
            );
        }

        let knife = "Uma faca de cozinha usada e jogada na pia (aponta para Carlos).";
        let shoes = "Um par de sapatos enlameados na entrada (aponta para Carlos).";
        assert!(evidence.clues().contains(knife));
        assert_eq!(evidence.suspects().lookup(knife), Some("Carlos"));
        assert_eq!(evidence.suspects().lookup(shoes), Some("Carlos"));
    }
}
