pub mod error;
pub mod gain;
pub mod parser;
pub mod record;
pub mod sru;
