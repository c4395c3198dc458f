use crate::{
    absent::Absent,
    error::AbsentError,
    held::{Held, IntoHeld},
};

use super::chainer::Chainer;

/// An immutable, possibly absent value that further values can be derived from.
///
/// Each chaining method consumes the container and returns a new one. Once a
/// step is absent, later [`Chain::chain`] steps are skipped and the absence
/// kind is carried to the end, unless a fallback replaces it.
///
/// ```
/// use composable_chain::chain::Chain;
///
/// struct Config {
///     server: Option<Server>,
/// }
///
/// struct Server {
///     port: Option<u16>,
/// }
///
/// let config = Config {
///     server: Some(Server { port: None }),
/// };
///
/// let port = Chain::present(config)
///     .chain(|config| config.server)
///     .chain_or(|server| server.port, 8080)
///     .extract_or(80);
///
/// assert_eq!(port, 8080);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Chain<T> {
    held: Held<T>,
}

impl<T> Chain<T> {
    pub fn new(initial: impl Into<Held<T>>) -> Self {
        Self {
            held: initial.into(),
        }
    }

    pub const fn present(value: T) -> Self {
        Self {
            held: Held::Present(value),
        }
    }

    pub const fn absent(kind: Absent) -> Self {
        Self {
            held: Held::Absent(kind),
        }
    }

    pub fn chain<Fn, R>(self, chain: Fn) -> Chain<R::Value>
    where
        Fn: FnOnce(T) -> R,
        R: IntoHeld,
    {
        self.chain_with(chain)
    }

    pub fn chain_or<Fn, R>(self, chain: Fn, fallback: R::Value) -> Chain<R::Value>
    where
        Fn: FnOnce(T) -> R,
        R: IntoHeld,
    {
        self.chain_with(chain).or_else(|| fallback)
    }

    pub fn chain_or_else<Fn, R, F>(self, chain: Fn, fallback: F) -> Chain<R::Value>
    where
        Fn: FnOnce(T) -> R,
        R: IntoHeld,
        F: FnOnce() -> R::Value,
    {
        self.chain_with(chain).or_else(fallback)
    }

    /// Applies `chainer` to the present value. An absent value skips it.
    #[tracing::instrument(level = "trace", skip_all)]
    pub fn chain_with<C>(self, chainer: C) -> Chain<C::Chained>
    where
        C: Chainer<T>,
    {
        match self.held {
            Held::Present(value) => Chain::new(chainer.chain(value)),
            Held::Absent(kind) => {
                tracing::trace!(%kind, "Skipping chain step");

                Chain::absent(kind)
            }
        }
    }

    /// Like [`Chain::chain`], but `chain` runs even when the value is absent
    /// and receives the absence marker itself.
    #[tracing::instrument(level = "trace", skip_all)]
    pub fn chain_unconditional<Fn, R>(self, chain: Fn) -> Chain<R::Value>
    where
        Fn: FnOnce(Held<T>) -> R,
        R: IntoHeld,
    {
        Chain::new(chain(self.held).into_held())
    }

    pub fn chain_unconditional_or<Fn, R>(self, chain: Fn, fallback: R::Value) -> Chain<R::Value>
    where
        Fn: FnOnce(Held<T>) -> R,
        R: IntoHeld,
    {
        self.chain_unconditional(chain).or_else(|| fallback)
    }

    pub fn chain_unconditional_or_else<Fn, R, F>(self, chain: Fn, fallback: F) -> Chain<R::Value>
    where
        Fn: FnOnce(Held<T>) -> R,
        R: IntoHeld,
        F: FnOnce() -> R::Value,
    {
        self.chain_unconditional(chain).or_else(fallback)
    }

    /// Chains a fallible step. Errors are returned as-is; absence short-circuits
    /// without calling `chain`.
    pub fn try_chain<Fn, R, E>(self, chain: Fn) -> Result<Chain<R::Value>, E>
    where
        Fn: FnOnce(T) -> Result<R, E>,
        R: IntoHeld,
    {
        match self.held {
            Held::Present(value) => Ok(Chain::new(chain(value)?.into_held())),
            Held::Absent(kind) => {
                tracing::trace!(%kind, "Skipping fallible chain step");

                Ok(Chain::absent(kind))
            }
        }
    }

    pub const fn extract(&self) -> &Held<T> {
        &self.held
    }

    pub fn into_held(self) -> Held<T> {
        self.held
    }

    pub fn extract_or(self, fallback: T) -> T {
        self.held.unwrap_or(fallback)
    }

    pub fn extract_or_else<F>(self, fallback: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self.held {
            Held::Present(value) => value,
            Held::Absent(_) => fallback(),
        }
    }

    pub fn extract_or_default(self) -> T
    where
        T: Default,
    {
        self.extract_or_else(T::default)
    }

    pub fn extract_value(self) -> Result<T, AbsentError> {
        self.held.into_result()
    }

    pub fn into_option(self) -> Option<T> {
        self.held.into_option()
    }

    pub const fn is_present(&self) -> bool {
        self.held.is_present()
    }

    pub const fn is_absent(&self) -> bool {
        self.held.is_absent()
    }

    pub const fn absence(&self) -> Option<Absent> {
        self.held.absence()
    }

    fn or_else<F>(self, fallback: F) -> Self
    where
        F: FnOnce() -> T,
    {
        match self.held {
            Held::Present(_) => self,
            Held::Absent(kind) => {
                tracing::trace!(%kind, "Substituting fallback");

                Self::present(fallback())
            }
        }
    }
}

impl<T> Default for Chain<T> {
    fn default() -> Self {
        Self::absent(Absent::Unset)
    }
}

impl<T> From<Held<T>> for Chain<T> {
    fn from(held: Held<T>) -> Self {
        Self { held }
    }
}

impl<T> From<Option<T>> for Chain<T> {
    fn from(value: Option<T>) -> Self {
        Self::new(value)
    }
}

impl<T> From<Chain<T>> for Held<T> {
    fn from(chain: Chain<T>) -> Self {
        chain.held
    }
}

pub trait ChainExt: Sized {
    /// Starts a chain with `self` as the present value.
    ///
    /// An `Option` becomes a present `Option`; use [`Chain::from`] to treat
    /// `None` as absent instead.
    fn chained(self) -> Chain<Self>;
}

impl<T> ChainExt for T
where
    T: Sized,
{
    fn chained(self) -> Chain<Self> {
        Chain::present(self)
    }
}
