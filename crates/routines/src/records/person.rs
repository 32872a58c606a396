//! Person and address records.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

/// Postal address.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Address {
    /// Street line.
    pub street: String,

    /// City name.
    pub city: String,

    /// Numeric postal code.
    pub postal_code: u32,
}

impl Address {
    /// Create an address.
    pub fn new(street: impl Into<String>, city: impl Into<String>, postal_code: u32) -> Self {
        Self {
            street: street.into(),
            city: city.into(),
            postal_code,
        }
    }
}

/// A person with a nested address.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Person {
    /// Display name.
    pub name: String,

    /// Age in years.
    pub age: u32,

    /// Whether the person is enrolled as a student.
    pub is_student: bool,

    /// Postal address.
    pub address: Address,
}

impl Person {
    /// Create a person.
    pub fn new(name: impl Into<String>, age: u32, is_student: bool, address: Address) -> Self {
        Self {
            name: name.into(),
            age,
            is_student,
            address,
        }
    }
}

impl Display for Address {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{} {} {}", self.street, self.city, self.postal_code)
    }
}

impl Display for Person {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{} {} {}", self.name, self.age, self.is_student)
    }
}
