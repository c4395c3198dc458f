use crate::held::{Held, IntoHeld};

/// A single step of a chain, applied to a present value.
///
/// Every `FnOnce(T) -> impl IntoHeld` closure is a [`Chainer`]. Implement it
/// by hand for accessors that are reused across many chains.
#[cfg_attr(test, mockall::automock(type Chained=u32;))]
pub trait Chainer<T> {
    type Chained;

    fn chain(self, value: T) -> Held<Self::Chained>;
}

impl<T, Fn, R> Chainer<T> for Fn
where
    Fn: FnOnce(T) -> R,
    R: IntoHeld,
{
    type Chained = R::Value;

    fn chain(self, value: T) -> Held<Self::Chained> {
        self(value).into_held()
    }
}
