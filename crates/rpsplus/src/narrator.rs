//! Turning reports into text for a human, or for another program.

use rpsplus_core::{Move, RoundWinner, Verdict};
use rpsplus_protocol::{
    Codec, FinalReport, JsonCodec, PromptReport, ProtocolError, Report, RoundReport, RulesReport,
};

const RULE: &str = "==================================================";

/// Output for one report: whole lines, then an optional prompt left open
/// on the last line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Narration {
    pub lines: Vec<String>,
    pub prompt: Option<String>,
}

impl Narration {
    fn lines(lines: Vec<String>) -> Self {
        Self {
            lines,
            prompt: None,
        }
    }
}

/// Phrases reports. Presentation only; a narrator never sees the game
/// state itself.
pub trait Narrator: Send {
    /// # Errors
    /// Returns a [`ProtocolError`] if the report cannot be encoded.
    fn narrate(&self, report: &Report) -> Result<Narration, ProtocolError>;

    /// What to say when the user sends an empty line. `None` says nothing.
    fn blank_input(&self) -> Option<String> {
        None
    }
}

// ---------------------------------------------------------------------------
// TextNarrator
// ---------------------------------------------------------------------------

/// Plain-text banners for a terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextNarrator;

impl TextNarrator {
    fn rules(rules: &RulesReport) -> Vec<String> {
        let moves: Vec<&str> = rules.moves.iter().map(|m| m.as_str()).collect();
        vec![
            RULE.to_string(),
            "ROCK-PAPER-SCISSORS-PLUS RULES:".to_string(),
            format!("- Best of {} rounds", rules.rounds),
            format!("- Moves: {}", moves.join(", ")),
            format!(
                "- bomb beats everything except bomb ({} use per player)",
                rules.bombs_per_player
            ),
            "- rock beats scissors, scissors beats paper, paper beats rock".to_string(),
            "- Invalid input wastes the round".to_string(),
            RULE.to_string(),
        ]
    }

    fn prompt(prompt: &PromptReport) -> Narration {
        let bomb = if prompt.bomb_available {
            "Your bomb: AVAILABLE"
        } else {
            "Your bomb: USED"
        };
        Narration {
            lines: vec![
                String::new(),
                format!(">>> ROUND {} <<<", prompt.round),
                bomb.to_string(),
            ],
            prompt: Some("Your move (rock/paper/scissors/bomb): ".to_string()),
        }
    }

    fn round(report: &RoundReport) -> Vec<String> {
        let shown = |m: Move| m.as_str().to_uppercase();
        let verdict = match report.winner {
            RoundWinner::User => format!("You win this round! ({})", report.reason),
            RoundWinner::Bot => format!("Bot wins this round! ({})", report.reason),
            RoundWinner::Draw => format!("It's a draw! ({})", report.reason),
            RoundWinner::Void => format!("Round wasted: {}.", report.reason),
        };
        vec![
            RULE.to_string(),
            format!("ROUND {} RESULTS", report.round),
            RULE.to_string(),
            format!("You played: {}", shown(report.user_move)),
            format!("Bot played: {}", shown(report.bot_move)),
            String::new(),
            verdict,
            String::new(),
            "Current Score:".to_string(),
            format!("  You: {}", report.user_score),
            format!("  Bot: {}", report.bot_score),
            RULE.to_string(),
        ]
    }

    fn fin(report: &FinalReport) -> Vec<String> {
        let banner = match report.verdict {
            Verdict::UserWins => "YOU WIN THE GAME!",
            Verdict::BotWins => "BOT WINS THE GAME!",
            Verdict::Draw => "IT'S A DRAW!",
        };
        vec![
            String::new(),
            RULE.to_string(),
            "GAME OVER!".to_string(),
            RULE.to_string(),
            format!(
                "FINAL SCORE: You {} - {} Bot",
                report.user_score, report.bot_score
            ),
            String::new(),
            banner.to_string(),
            RULE.to_string(),
        ]
    }
}

impl Narrator for TextNarrator {
    fn narrate(&self, report: &Report) -> Result<Narration, ProtocolError> {
        Ok(match report {
            Report::Rules(r) => Narration::lines(Self::rules(r)),
            Report::Prompt(p) => Self::prompt(p),
            Report::Round(r) => Narration::lines(Self::round(r)),
            Report::Final(f) => Narration::lines(Self::fin(f)),
        })
    }

    fn blank_input(&self) -> Option<String> {
        Some("Please enter a move.".to_string())
    }
}

// ---------------------------------------------------------------------------
// JsonNarrator
// ---------------------------------------------------------------------------

/// One JSON object per report, one report per line.
///
/// Leaves the phrasing to whatever reads the stream.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonNarrator {
    codec: JsonCodec,
}

impl Narrator for JsonNarrator {
    fn narrate(&self, report: &Report) -> Result<Narration, ProtocolError> {
        let bytes = self.codec.encode(report)?;
        Ok(Narration::lines(vec![
            String::from_utf8_lossy(&bytes).into_owned(),
        ]))
    }
}
