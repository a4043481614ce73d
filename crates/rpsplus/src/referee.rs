//! The referee session: one game over one line channel.
//!
//! The flow is:
//!   1. Send the rules (unless disabled)
//!   2. Loop until terminal: prompt → read a line → bot picks → resolve →
//!      send the round report
//!   3. Send the final report

use rpsplus_core::{validate, BotStrategy, GameState, Outcome};
use rpsplus_protocol::{PromptReport, Report, RoundReport, RulesReport};
use rpsplus_transport::LineChannel;

use crate::{JsonNarrator, Narrator, OutputFormat, RefereeConfig, RpsPlusError, TextNarrator};

/// Referees a single game between the user on `channel` and a bot.
///
/// The referee owns the [`GameState`] for the length of the game; nothing
/// else reads or writes it.
pub struct Referee<C: LineChannel> {
    channel: C,
    narrator: Box<dyn Narrator>,
    bot: Box<dyn BotStrategy>,
    show_rules: bool,
    state: GameState,
}

impl<C: LineChannel> Referee<C> {
    /// Creates a referee for a fresh game.
    pub fn new(channel: C, narrator: Box<dyn Narrator>, bot: Box<dyn BotStrategy>) -> Self {
        Self {
            channel,
            narrator,
            bot,
            show_rules: true,
            state: GameState::new(),
        }
    }

    /// Creates a referee with the bot and narrator `config` asks for.
    pub fn from_config(channel: C, config: &RefereeConfig) -> Self {
        let narrator: Box<dyn Narrator> = match config.format {
            OutputFormat::Text => Box::new(TextNarrator),
            OutputFormat::Json => Box::new(JsonNarrator::default()),
        };
        Self::new(channel, narrator, config.build_bot()).show_rules(config.show_rules)
    }

    /// Sets whether the rules are sent before round 1.
    pub fn show_rules(mut self, show: bool) -> Self {
        self.show_rules = show;
        self
    }

    /// The game as it stands.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Gives back the channel, e.g. to inspect a scripted session.
    pub fn into_channel(self) -> C {
        self.channel
    }

    /// Plays the game to the end.
    ///
    /// Blank lines are ignored and the user is asked again; every other
    /// line is a move, legal or not, and uses up a round.
    ///
    /// Returns `Ok(None)` if the input closes before the last round. The
    /// game is simply abandoned; there is nothing to clean up.
    ///
    /// # Errors
    /// Transport and encoding failures, or [`GameError::GameOver`] if this
    /// referee already finished its game.
    ///
    /// [`GameError::GameOver`]: rpsplus_core::GameError::GameOver
    pub async fn run(&mut self) -> Result<Option<Outcome>, RpsPlusError> {
        if self.state.is_terminal() {
            return Err(rpsplus_core::GameError::GameOver.into());
        }
        tracing::info!("game started");

        if self.show_rules {
            self.emit(&Report::Rules(RulesReport::default())).await?;
        }

        while let Some(prompt) = PromptReport::for_state(&self.state) {
            self.emit(&Report::Prompt(prompt)).await?;

            let Some(line) = self.channel.read_line().await? else {
                tracing::info!(round = prompt.round, "input closed, game abandoned");
                return Ok(None);
            };
            if line.trim().is_empty() {
                tracing::debug!(round = prompt.round, "blank input, asking again");
                if let Some(msg) = self.narrator.blank_input() {
                    self.channel.write_line(&msg).await?;
                }
                continue;
            }

            let user_move = validate(&line);
            let bot_move = self.bot.choose(&self.state);
            tracing::debug!(raw = %line, %user_move, %bot_move, "moves received");

            let result = self.state.resolve_round(user_move, bot_move)?;
            tracing::info!(
                round = result.round,
                winner = %result.winner,
                reason = %result.reason,
                "round resolved"
            );
            self.emit(&Report::Round(RoundReport::new(&result, &self.state)))
                .await?;
        }

        let outcome = self.state.final_result()?;
        tracing::info!(
            verdict = %outcome.verdict,
            user_score = outcome.user_score,
            bot_score = outcome.bot_score,
            "game over"
        );
        self.emit(&Report::Final(outcome.into())).await?;
        Ok(Some(outcome))
    }

    async fn emit(&mut self, report: &Report) -> Result<(), RpsPlusError> {
        let narration = self.narrator.narrate(report)?;
        for line in &narration.lines {
            self.channel.write_line(line).await?;
        }
        if let Some(prompt) = &narration.prompt {
            self.channel.write_prompt(prompt).await?;
        }
        Ok(())
    }
}
