//! Flat text codec, for form fields, CLI arguments and flat-file columns.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::kind::Kind;
use crate::nullable::Nullable;

impl<T: Kind> Nullable<T> {
    /// Empty text and the literal `null` are both absent.
    pub fn from_text(text: &str) -> Result<Self, Error> {
        match text {
            "" | "null" => Ok(Self::null()),
            text => T::parse_text(text).map(Self::from_value),
        }
    }

    /// Decodes `data` into `self`; on error `self` becomes invalid and zero.
    pub fn unmarshal_text(&mut self, data: &[u8]) -> Result<(), Error> {
        let decoded = std::str::from_utf8(data)
            .map_err(|err| Error::parse(T::NAME, &String::from_utf8_lossy(data), err))
            .and_then(Self::from_text);
        self.settle(decoded)
    }

    /// Empty when invalid, the kind's canonical text otherwise.
    pub fn marshal_text(&self) -> Vec<u8> {
        self.to_string().into_bytes()
    }
}

impl<T: Kind> FromStr for Nullable<T> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_text(s)
    }
}

impl<T: Kind> fmt::Display for Nullable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.ptr() {
            Some(value) => f.write_str(&value.format_text()),
            None => Ok(()),
        }
    }
}
