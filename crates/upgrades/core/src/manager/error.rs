use thiserror::Error;

/// Non-fatal upgrade operation failures.
///
/// All of these are expected at runtime (UI races, debug commands); callers
/// decide whether to surface or swallow them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UpgradeError {
    #[error("no upgrade registered with id `{0}`")]
    UnknownUpgrade(String),

    #[error("upgrade `{id}` is already at max stacks ({max})")]
    MaxStacksReached { id: String, max: u32 },

    #[error("upgrade `{0}` has no stacks to revoke")]
    NothingToRevoke(String),
}
