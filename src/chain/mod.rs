mod chainer;
mod container;

pub use chainer::Chainer;
pub use container::{Chain, ChainExt};

#[cfg(test)]
pub use chainer::MockChainer;
