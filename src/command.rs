#![cfg(feature = "std")]
//! Chat text to engine calls.

use crate::manager::SessionManager;
use crate::session::{PlayerId, SessionError};

const START_WORDS: [&str; 5] = ["start", "new game", "/start", "старт", "морской бой"];
const SURRENDER_WORDS: [&str; 3] = ["surrender", "give up", "сдаться"];

/// One inbound chat message, classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start,
    Surrender,
    /// Anything else; treated as an attempted coordinate.
    Shot(String),
}

impl Command {
    pub fn parse(text: &str) -> Command {
        let normalized = text.trim().to_lowercase();
        if START_WORDS.contains(&normalized.as_str()) {
            Command::Start
        } else if SURRENDER_WORDS.contains(&normalized.as_str()) {
            Command::Surrender
        } else {
            Command::Shot(text.trim().to_string())
        }
    }
}

/// Handle one message from `player` and produce the reply.
///
/// `Ok(None)` means the message is not addressed to the game: the player has
/// no game running and the text is not a coordinate. Defects are returned as
/// errors and must not be shown to the player.
pub async fn dispatch(
    manager: &SessionManager,
    player: PlayerId,
    text: &str,
) -> Result<Option<String>, SessionError> {
    match Command::parse(text) {
        Command::Start => {
            manager.start(player, None).await?;
            Ok(Some(
                "The battle begins! Ten ships are hidden on a 10x10 board. Fire away, e.g. A1."
                    .to_string(),
            ))
        }
        Command::Surrender => match manager.surrender(player).await {
            Ok(session) => Ok(Some(format!(
                "You surrendered after {} moves. Send \"start\" for a rematch.",
                session.moves()
            ))),
            Err(e) if e.is_user_error() => Ok(e.user_message()),
            Err(e) => Err(e),
        },
        Command::Shot(text) => match manager.play_text(player, &text).await {
            Ok(report) => Ok(Some(report.reply())),
            Err(SessionError::InvalidCoordinate(e)) => {
                if manager.active_session(player).await?.is_some() {
                    Ok(SessionError::InvalidCoordinate(e).user_message())
                } else {
                    Ok(None)
                }
            }
            Err(e) if e.is_user_error() => Ok(e.user_message()),
            Err(e) => Err(e),
        },
    }
}
