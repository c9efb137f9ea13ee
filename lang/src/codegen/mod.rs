pub mod compiler;
pub mod context;
pub mod pipeline;
