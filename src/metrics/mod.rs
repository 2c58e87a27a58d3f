mod branch;
mod nesting;

pub use branch::BranchDensity;
pub use nesting::NestingDepth;
