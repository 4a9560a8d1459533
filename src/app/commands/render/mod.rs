pub mod command;
pub mod plan;

pub use command::execute;
pub use plan::RenderPlan;
