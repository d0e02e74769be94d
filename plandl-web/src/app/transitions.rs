use crate::game::{
    Advance, DailySession, EngineError, GameEngine, GameError, GameStorage, GuessInput,
};

/// Keep the played move when only persistence failed.
fn settle<S: GameStorage, T>(
    what: &str,
    result: Result<T, EngineError<S::Error>>,
) -> Result<Option<T>, GameError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(err) => {
            let message = err.to_string();
            match err.into_rule_violation() {
                Some(rule) => Err(rule),
                None => {
                    log::warn!("{what} not saved: {message}");
                    Ok(None)
                }
            }
        }
    }
}

/// Apply a guess to a copy of `held` and return the session to show next.
///
/// # Errors
///
/// Returns the rule violation when the guess is not accepted; `held` is then
/// still current.
pub fn submit<S: GameStorage>(
    engine: &GameEngine<S>,
    held: &DailySession,
    input: GuessInput,
) -> Result<DailySession, GameError> {
    let mut session = held.clone();
    let result = engine.submit_guess(&mut session, input);
    if let Some(outcome) = settle::<S, _>("guess", result)? {
        log::debug!(
            "round {} resolved: {:?}, +{}",
            outcome.round,
            outcome.correct,
            outcome.points
        );
    }
    Ok(session)
}

/// Move past the resolved round on a copy of `held`.
///
/// # Errors
///
/// Returns the rule violation when there is nothing to advance.
pub fn advance<S: GameStorage>(
    engine: &GameEngine<S>,
    held: &DailySession,
) -> Result<DailySession, GameError> {
    let mut session = held.clone();
    let result = engine.advance(&mut session);
    match settle::<S, _>("round change", result)? {
        Some(Advance::NextRound(round)) => log::debug!("advanced to round {round}"),
        Some(Advance::Completed { final_score }) => {
            log::info!("game complete with {final_score} points");
        }
        None => {}
    }
    Ok(session)
}
