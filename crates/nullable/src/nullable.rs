use crate::error::Error;
use crate::kind::Kind;

/// A primitive value plus a validity flag.
///
/// `valid == false` means "no value" (SQL `NULL`, JSON `null`, BSON null).
/// The stored `value` is kept as-is for inspection, but every codec and
/// [`equal`](Nullable::equal) ignore it while the scalar is invalid.
#[derive(Clone, Debug)]
pub struct Nullable<T: Kind> {
    pub value: T,
    pub valid: bool,
}

impl<T: Kind + Copy> Copy for Nullable<T> {}

impl<T: Kind> Nullable<T> {
    /// Stores exactly what was passed; `new(5, false)` keeps the `5`.
    pub fn new(value: T, valid: bool) -> Self {
        Self { value, valid }
    }

    /// A present value.
    pub fn from_value(value: T) -> Self {
        Self::new(value, true)
    }

    /// An invalid scalar holding the kind's zero value.
    pub fn null() -> Self {
        Self::new(T::zero(), false)
    }

    /// Present iff `ptr` is `Some`.
    pub fn from_ptr(ptr: Option<&T>) -> Self {
        ptr.map_or_else(Self::null, |v| Self::from_value(v.clone()))
    }

    pub fn from_option(value: Option<T>) -> Self {
        value.map_or_else(Self::null, Self::from_value)
    }

    /// Borrow of the value when present.
    pub fn ptr(&self) -> Option<&T> {
        if self.valid {
            Some(&self.value)
        } else {
            None
        }
    }

    pub fn into_option(self) -> Option<T> {
        if self.valid {
            Some(self.value)
        } else {
            None
        }
    }

    pub fn value_or_zero(&self) -> T {
        self.ptr().cloned().unwrap_or_else(T::zero)
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// True iff an omit-empty encoder should skip the field.
    ///
    /// This is not a default-value check: a present zero
    /// (`NullInt::from_value(0)`, `NullString::from_value(String::new())`)
    /// is *not* zero, because it still has to be written out.
    pub fn is_zero(&self) -> bool {
        T::is_zero(&self.value, self.valid)
    }

    /// Sets the value and marks it present.
    pub fn set_valid(&mut self, value: T) {
        self.value = value;
        self.valid = true;
    }

    /// Two invalid scalars are equal whatever they store; two valid ones
    /// compare their values; mixed validity is never equal.
    pub fn equal(&self, other: &Self) -> bool {
        match (self.valid, other.valid) {
            (false, false) => true,
            (true, true) => self.value.same(&other.value),
            _ => false,
        }
    }

    /// Stores a decode outcome; a failed decode leaves `self` invalid and zero.
    pub(crate) fn settle(&mut self, decoded: Result<Self, Error>) -> Result<(), Error> {
        match decoded {
            Ok(n) => {
                *self = n;
                Ok(())
            }
            Err(err) => {
                *self = Self::null();
                Err(err)
            }
        }
    }
}

impl<T: Kind> Default for Nullable<T> {
    fn default() -> Self {
        Self::null()
    }
}

impl<T: Kind> PartialEq for Nullable<T> {
    fn eq(&self, other: &Self) -> bool {
        self.equal(other)
    }
}

impl<T: Kind> From<T> for Nullable<T> {
    fn from(value: T) -> Self {
        Self::from_value(value)
    }
}

impl<T: Kind> From<Option<T>> for Nullable<T> {
    fn from(value: Option<T>) -> Self {
        Self::from_option(value)
    }
}

impl<T: Kind> From<Nullable<T>> for Option<T> {
    fn from(n: Nullable<T>) -> Self {
        n.into_option()
    }
}

impl From<&str> for Nullable<String> {
    fn from(value: &str) -> Self {
        Self::from_value(value.to_string())
    }
}
