//! Exchanging history with a remote: pull, rebase, push.

use crate::history::{CommandOutcome, VersionedHistory, args};

/// Runs `pull <remote> <branch>`, `rebase <remote>/<branch>` and `push <remote> <branch>`
/// in order, stopping at the first step that fails. Returns the outcome of every step
/// that ran.
pub fn sync_history<H: VersionedHistory + ?Sized>(
    history: &H,
    remote: &str,
    branch: &str,
) -> Vec<CommandOutcome> {
    let upstream = format!("{remote}/{branch}");
    let steps = [
        args(["pull", remote, branch]),
        args(["rebase", upstream.as_str()]),
        args(["push", remote, branch]),
    ];

    let mut outcomes = Vec::new();
    for step in steps {
        let outcome = CommandOutcome::from_result(&step, history.run(&step));
        let failed = !outcome.is_success();
        outcomes.push(outcome);
        if failed {
            break;
        }
    }
    outcomes
}
