use thiserror::Error;

// Errors raised locally, before any request leaves the process. Everything the
// sponsor service or the fullnode reports is propagated as-is.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SponsorError {
    #[error("gas sponsor is not initialized, call init_gas_sponsor(gas_access_key) first")]
    NotInitialized,
}
