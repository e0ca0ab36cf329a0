pub mod assemble;
pub mod dispatch;
pub mod key;
pub mod plan;
