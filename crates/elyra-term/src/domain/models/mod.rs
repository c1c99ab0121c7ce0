mod command;
mod gateway;
mod line;

pub use command::*;
pub use gateway::*;
pub use line::*;
