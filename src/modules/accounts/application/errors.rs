use crate::modules::accounts::core::decision::DecideError;
use crate::modules::accounts::core::evolve::EvolveError;
use crate::modules::accounts::core::ports::RepositoryError;
use crate::shared::core::primitives::AccountId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("account {0} does not exist or is deleted")]
    AccountNotFound(AccountId),

    #[error("domain rejected: {0}")]
    Domain(#[from] DecideError),

    #[error(transparent)]
    History(#[from] EvolveError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
