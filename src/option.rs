use std::fmt;

type StdOption<T> = std::option::Option<T>;

/// A value of type `T` that is either present or deliberately absent.
///
/// Unlike a nullable slot there is no third state: every container is
/// `Present(value)` or `Absent`, and two containers compare equal exactly when
/// both are absent or both hold values equal under `T`'s own equality.
///
/// `T` is not required to be nullable itself, so `Option<Option<U>>` tracks
/// the presence of each layer independently.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Option<T> {
    Present(T),
    Absent,
}

pub use self::Option::{Absent, Present};

impl<T> Option<T> {
    /// Builds a container holding `value`.
    pub fn present(value: T) -> Self {
        Present(value)
    }

    /// Builds an empty container.
    pub fn absent() -> Self {
        Absent
    }

    /// Bridges the "value plus found flag" convention of lookup APIs.
    ///
    /// ```
    /// use optional_value::Option;
    ///
    /// assert_eq!(Option::from_pair(1, true), Option::present(1));
    /// assert_eq!(Option::from_pair(1, false), Option::absent());
    /// ```
    pub fn from_pair(value: T, ok: bool) -> Self {
        if ok {
            Present(value)
        } else {
            Absent
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, Present(_))
    }

    pub fn is_absent(&self) -> bool {
        !self.is_present()
    }

    /// Returns the stored value and `true`, or `T::default()` and `false`.
    ///
    /// The default returned for an absent container carries no meaning; only
    /// the flag tells the two cases apart.
    pub fn try_get(&self) -> (T, bool)
    where
        T: Clone + Default,
    {
        match self {
            Present(value) => (value.clone(), true),
            Absent => (T::default(), false),
        }
    }

    /// Returns the stored value, panicking if the container is absent.
    ///
    /// Only call this where presence is already established; reading an
    /// absent container here is a programming error, not a recoverable one.
    #[track_caller]
    pub fn must_get(&self) -> T
    where
        T: Clone,
    {
        match self {
            Present(value) => value.clone(),
            Absent => panic!("called `must_get` on an absent value"),
        }
    }

    pub fn get_or_default(&self, fallback: T) -> T
    where
        T: Clone,
    {
        match self {
            Present(value) => value.clone(),
            Absent => fallback,
        }
    }

    pub fn get(&self) -> StdOption<&T> {
        match self {
            Present(value) => Some(value),
            Absent => None,
        }
    }

    pub fn get_mut(&mut self) -> StdOption<&mut T> {
        match self {
            Present(value) => Some(value),
            Absent => None,
        }
    }

    /// Takes the value out, leaving the container absent.
    pub fn take(&mut self) -> StdOption<T> {
        std::mem::replace(self, Absent).into_inner()
    }

    pub fn into_inner(self) -> StdOption<T> {
        match self {
            Present(value) => Some(value),
            Absent => None,
        }
    }

    /// Stores `value`, whatever the previous state was.
    pub fn update(&mut self, value: T) {
        *self = Present(value);
    }

    /// Replaces a present value with `f(value)`. Absent containers are left
    /// untouched and `f` is not called.
    pub fn transform<F>(&mut self, f: F)
    where
        F: FnOnce(T) -> T,
    {
        if let Present(value) = std::mem::replace(self, Absent) {
            *self = Present(f(value));
        }
    }

    /// `"None"` when absent, `"Some(<value>)"` otherwise.
    pub fn describe(&self) -> String
    where
        T: fmt::Display,
    {
        self.to_string()
    }
}

impl<T> Default for Option<T> {
    fn default() -> Self {
        Absent
    }
}

impl<T: fmt::Display> fmt::Display for Option<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Present(value) => write!(f, "Some({value})"),
            Absent => f.write_str("None"),
        }
    }
}

impl<T> From<StdOption<T>> for Option<T> {
    fn from(value: StdOption<T>) -> Self {
        match value {
            Some(value) => Present(value),
            None => Absent,
        }
    }
}

impl<T> From<Option<T>> for StdOption<T> {
    fn from(value: Option<T>) -> Self {
        value.into_inner()
    }
}
