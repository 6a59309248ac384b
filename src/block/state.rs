//! The binding-state record threaded through a do-block evaluation.

use std::any::{Any, type_name};
use std::error::Error;
use std::fmt;
use std::rc::Rc;

/// A resolved binding value, type-erased.
///
/// Values are shared behind `Rc` because multi-valued instances replay the
/// continuation once per element, and every replay starts from the state
/// accumulated so far.
#[derive(Clone)]
pub struct BindingValue(Rc<dyn Any>);

impl BindingValue {
    /// Erases a value for storage in a [`DoState`] record.
    pub fn new<T>(value: T) -> Self
    where
        T: 'static,
    {
        Self(Rc::new(value))
    }

    /// Recovers the value as a `T`, or `None` if the stored type differs.
    pub fn downcast<T>(&self) -> Option<T>
    where
        T: Clone + 'static,
    {
        self.0.downcast_ref::<T>().cloned()
    }

    /// Whether the stored value is a `T`.
    pub fn is<T>(&self) -> bool
    where
        T: 'static,
    {
        self.0.is::<T>()
    }
}

impl fmt::Debug for BindingValue {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("BindingValue(..)")
    }
}

/// A failed read of the binding-state record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindingError {
    /// The name has not been resolved at this point in the sequence.
    Unresolved {
        /// The requested binding name.
        name: String,
    },
    /// The binding exists but holds a value of a different type.
    Mismatch {
        /// The requested binding name.
        name: String,
        /// The type the caller asked for.
        expected: &'static str,
    },
}

impl fmt::Display for BindingError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unresolved { name } => {
                write!(
                    formatter,
                    "binding `{name}` is not resolved at this point in the sequence"
                )
            }
            Self::Mismatch { name, expected } => {
                write!(
                    formatter,
                    "binding `{name}` does not hold a value of type `{expected}`"
                )
            }
        }
    }
}

impl Error for BindingError {}

/// The accumulating name-to-value record of an in-progress do-block.
///
/// When the `i`-th declared binding expression runs, the record holds the
/// seed entries plus exactly the bindings declared before it, in declaration
/// order. The record is exclusively owned by one in-flight evaluation; it is
/// never shared across threads.
///
/// # Examples
///
/// ```rust
/// use dobind::block::{BindingValue, DoState};
///
/// let mut state = DoState::new();
/// state.insert("x", BindingValue::new(7_i32));
/// assert_eq!(state.get::<i32>("x").unwrap(), 7);
/// assert!(state.get::<i32>("y").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct DoState {
    entries: Vec<(&'static str, BindingValue)>,
}

impl DoState {
    /// Creates an empty record.
    #[inline]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Stores a resolved binding, overwriting in place if the name already
    /// exists (later loop passes overwrite by key, keeping the original
    /// position).
    pub fn insert(&mut self, name: &'static str, value: BindingValue) {
        match self.entries.iter_mut().find(|(key, _)| *key == name) {
            Some(slot) => slot.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Reads a previously resolved binding as a `T`.
    ///
    /// # Errors
    ///
    /// [`BindingError::Unresolved`] if `name` has not been resolved at this
    /// point in the sequence; [`BindingError::Mismatch`] if the stored value
    /// is not a `T`.
    pub fn get<T>(&self, name: &str) -> Result<T, BindingError>
    where
        T: Clone + 'static,
    {
        let value = self
            .entries
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value)
            .ok_or_else(|| BindingError::Unresolved {
                name: name.to_owned(),
            })?;
        value.downcast::<T>().ok_or_else(|| BindingError::Mismatch {
            name: name.to_owned(),
            expected: type_name::<T>(),
        })
    }

    /// Reads a binding, falling back to `default` when it is unresolved or
    /// of a different type. Useful in loop bodies whose first pass precedes
    /// the binding.
    pub fn get_or<T>(&self, name: &str, default: T) -> T
    where
        T: Clone + 'static,
    {
        self.get(name).unwrap_or(default)
    }

    /// Whether `name` has been resolved.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(key, _)| *key == name)
    }

    /// The whole record, in declaration order. Escape hatch for callers that
    /// want to walk the accumulated state rather than project single names.
    #[inline]
    pub fn entries(&self) -> &[(&'static str, BindingValue)] {
        &self.entries
    }

    /// Number of resolved bindings.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no bindings have been resolved.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
