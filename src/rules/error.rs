//! Rule errors: every way a proposed action can be rejected.

use thiserror::Error;

/// A rejected action or an out-of-order engine request.
///
/// All variants are recoverable reports. The engine never partially applies
/// an action: on any error the input state is untouched, because validation
/// happens before the state is even cloned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum RuleError {
    /// Action submitted for a player who is not the current player.
    #[error("not this player's turn")]
    NotPlayersTurn,

    /// Play/discard submitted during DRAW, or a draw submitted during PLAY.
    #[error("action does not match the current phase")]
    WrongPhase,

    /// Referenced card is absent from the acting player's hand.
    #[error("card not in hand")]
    CardNotInHand,

    /// Declared target color differs from the card's color.
    #[error("target color does not match the card")]
    ColorMismatch,

    /// Handshake after a number card, or a non-ascending number value.
    #[error("card breaks the expedition's handshake-then-ascending order")]
    InvalidExpeditionMove,

    /// Draw requested from an empty deck or empty discard pile.
    #[error("draw source is empty")]
    EmptySource,

    /// Draw requested from the pile the player discarded to this same turn.
    #[error("cannot draw the card just discarded this turn")]
    DrewOwnDiscard,

    /// Any action submitted once the game is over.
    #[error("game is already over")]
    GameAlreadyOver,

    /// Scoring requested before the game is over.
    #[error("game is still in progress")]
    GameInProgress,
}
