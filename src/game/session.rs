//! A full game: exploration followed by the accusation.

use tracing::{info, instrument};

use super::console::Console;
use super::evidence::Evidence;
use super::exploration::{ExplorationEngine, ExplorationSummary};
use super::rules::SuspectRules;
use super::verdict::{normalize_accusation, Outcome, Verdict, VerdictEngine};
use crate::config::GameConfig;
use crate::data_structures::{RoomGraph, SuspectLookup};
use crate::error::game::GameError;

/// How the accusation phase ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrialOutcome {
    /// The player accused someone and the evidence was weighed
    Judged(Verdict),
    /// No clue was collected, so no accusation was asked for
    NoClues,
    /// The accusation could not be read
    InvalidAccusation,
}

/// Summary of a finished game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameReport {
    /// Clues picked up while exploring
    pub clues_collected: usize,
    /// Rooms entered while exploring
    pub rooms_visited: usize,
    /// Distinct clues, ascending, as shown before the accusation
    pub collected: Vec<String>,
    /// The accusation result
    pub trial: TrialOutcome,
}

impl GameReport {
    /// Whether the player solved the case.
    pub fn is_solved(&self) -> bool {
        matches!(&self.trial, TrialOutcome::Judged(verdict) if verdict.is_solved())
    }
}

/// Owns everything one game needs.
#[derive(Debug)]
pub struct Session {
    graph: RoomGraph,
    rules: SuspectRules,
    evidence: Evidence,
    config: GameConfig,
}

impl Session {
    /// Creates a session in the fixed mansion.
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        Self::with_graph(RoomGraph::build(), config)
    }

    /// Creates a session in a custom room graph.
    ///
    /// # Errors
    ///
    /// Fails if `config.bucket_count` is zero.
    pub fn with_graph(graph: RoomGraph, config: GameConfig) -> Result<Self, GameError> {
        let suspects = SuspectLookup::with_bucket_count(config.bucket_count)?;
        Ok(Self {
            graph,
            rules: SuspectRules::with_fallback(config.unknown_suspect.as_str()),
            evidence: Evidence::new(suspects),
            config,
        })
    }

    /// The room graph being explored.
    pub fn graph(&self) -> &RoomGraph {
        &self.graph
    }

    /// Evidence gathered so far.
    pub fn evidence(&self) -> &Evidence {
        &self.evidence
    }

    /// Plays one game on `console`.
    ///
    /// Evidence is released when the game ends, whatever the outcome.
    #[instrument(level = "info", skip_all)]
    pub fn play<C: Console + ?Sized>(&mut self, console: &mut C) -> Result<GameReport, GameError> {
        let result = self.play_phases(console);
        self.evidence.release();
        result
    }

    fn play_phases<C: Console + ?Sized>(
        &mut self,
        console: &mut C,
    ) -> Result<GameReport, GameError> {
        console.say("==========================================")?;
        console.say("   DETECTIVE QUEST: the mansion mystery")?;
        console.say("==========================================")?;
        console.say("Explore the rooms, collect clues and find the culprit.")?;

        info!("Exploration phase started");
        let summary = ExplorationEngine::new(
            &self.graph,
            &self.rules,
            &mut self.evidence,
            self.config.dead_end,
        )
        .run(console)?;

        info!(clues = summary.clues_collected, "Accusation phase started");
        let collected: Vec<String> = self
            .evidence
            .clues()
            .in_order()
            .map(str::to_string)
            .collect();
        let trial = self.trial(console, summary, &collected)?;

        Ok(GameReport {
            clues_collected: summary.clues_collected,
            rooms_visited: summary.rooms_visited,
            collected,
            trial,
        })
    }

    fn trial<C: Console + ?Sized>(
        &self,
        console: &mut C,
        summary: ExplorationSummary,
        collected: &[String],
    ) -> Result<TrialOutcome, GameError> {
        console.say("")?;
        console.say("========== ACCUSATION ==========")?;

        if summary.clues_collected == 0 {
            console.say("Accusation impossible: no clue was collected.")?;
            console.say("The culprit escaped. Game over.")?;
            return Ok(TrialOutcome::NoClues);
        }

        console.say("Collected clues (alphabetical order):")?;
        for clue in collected {
            console.say(&format!(" -> {clue}"))?;
        }

        let roster = self.rules.suspects().collect::<Vec<_>>().join(", ");
        console.say("")?;
        console.prompt(&format!("Based on the evidence, who do you accuse? ({roster}): "))?;

        let accused = match console.read_line()?.as_deref().and_then(normalize_accusation) {
            Some(name) => name,
            None => {
                console.say("")?;
                console.say("Invalid input. Game over.")?;
                info!("Accusation could not be read");
                return Ok(TrialOutcome::InvalidAccusation);
            }
        };

        let verdict = VerdictEngine::new(self.config.win_threshold).accuse(
            &accused,
            self.evidence.clues(),
            self.evidence.suspects(),
        );

        console.say("")?;
        console.say(&format!("You accused: {}", verdict.accused))?;
        console.say(&format!(
            "Clues pointing at {}: {}",
            verdict.accused, verdict.match_count
        ))?;
        console.say(&closing_line(&verdict))?;

        Ok(TrialOutcome::Judged(verdict))
    }
}

/// Final line announcing how the accusation ended.
fn closing_line(verdict: &Verdict) -> String {
    match verdict.outcome {
        Outcome::Solved => {
            "VICTORY! The evidence is conclusive and the culprit was arrested.".to_string()
        }
        Outcome::Unproven => format!(
            "FAILURE. At least {} clues are needed to sustain the accusation. The culprit went free.",
            verdict.threshold
        ),
        Outcome::NoEvidence => {
            "FAILURE. There was no evidence to weigh against the accused. The culprit went free."
                .to_string()
        }
    }
}
