//! Logging utilities
//!
//! Thin wrappers over the `log` facade so engine call sites read as match
//! narration. The host decides where records go (env_logger, console, none).

const TARGET: &str = "influence";

/// Log an info message
#[inline]
pub fn info(msg: &str) {
    ::log::info!(target: TARGET, "{msg}");
}

/// Log a warning message
#[inline]
pub fn warn(msg: &str) {
    ::log::warn!(target: TARGET, "{msg}");
}

/// Log a debug message with a label
#[inline]
pub fn debug(label: &str, msg: &str) {
    ::log::debug!(target: TARGET, "[{label}] {msg}");
}

/// Log match state summary
#[inline]
pub fn state_summary(
    phase: &str,
    round: usize,
    player_points: u8,
    ai_points: u8,
    player_hand: usize,
    ai_hand: usize,
) {
    ::log::debug!(
        target: TARGET,
        "phase={phase} round={round} score={player_points}-{ai_points} hands={player_hand}/{ai_hand}"
    );
}

/// Log an action being performed
#[inline]
pub fn action(name: &str, details: &str) {
    ::log::debug!(target: TARGET, "> {name}: {details}");
}

/// Log action result
#[inline]
pub fn result(success: bool, msg: &str) {
    if success {
        ::log::debug!(target: TARGET, "ok: {msg}");
    } else {
        ::log::warn!(target: TARGET, "rejected: {msg}");
    }
}
