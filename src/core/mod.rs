pub mod log;
pub mod mark;
pub mod matrix;
pub mod publish;
pub mod session;
pub mod stats;
