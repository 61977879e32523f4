pub mod commands;
pub mod config;
pub mod form;
pub mod session;

pub use commands::run;
pub use config::{Command, Opts};
pub use form::{SubmitOutcome, VotingForm};
pub use session::Session;
