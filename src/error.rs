use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum Error {
    #[error("failed to parse input, reason: `{0}`")]
    ParsingFailure(String),
    #[error("profit/loss value `{0}` is not an integer")]
    MalformedProfitLoss(String),
}
