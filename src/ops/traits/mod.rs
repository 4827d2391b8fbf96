//! Operation traits implemented by backend clients

mod broadcast;
mod factor;
mod level1;
mod level2;
mod level3;
mod matrix;
mod reduce;

pub use broadcast::BroadcastOps;
pub use factor::{FactorOps, FactorUpdateOps};
pub use level1::Level1Ops;
pub use level2::Level2Ops;
pub use level3::Level3Ops;
pub use matrix::MatrixOps;
pub use reduce::ReduceOps;
