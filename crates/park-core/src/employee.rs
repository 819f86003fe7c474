//! Ride operators.

use std::fmt;

/// An employee who can operate a ride.
///
/// The simulator only reads `name` and `specialization` for cycle reports;
/// no behavior depends on the specialization text.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Employee {
    name:           String,
    age:            u32,
    contact:        String,
    employee_id:    String,
    specialization: String,
}

impl Employee {
    pub fn new(
        name:           impl Into<String>,
        age:            u32,
        contact:        impl Into<String>,
        employee_id:    impl Into<String>,
        specialization: impl Into<String>,
    ) -> Self {
        Self {
            name:           name.into(),
            age,
            contact:        contact.into(),
            employee_id:    employee_id.into(),
            specialization: specialization.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn contact(&self) -> &str {
        &self.contact
    }

    pub fn employee_id(&self) -> &str {
        &self.employee_id
    }

    /// Ride type this operator is trained on (e.g. "Roller Coaster").
    pub fn specialization(&self) -> &str {
        &self.specialization
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (Specialization: {})", self.name, self.specialization)
    }
}
