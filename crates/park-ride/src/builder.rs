//! Fluent builder for constructing a [`RideState`] in a known starting
//! state, as scenario drivers and tests need.

use park_core::{Employee, RideConfig, Visitor};

use crate::RideState;

/// Fluent builder for [`RideState`].
///
/// # Optional inputs (have defaults)
///
/// | Method            | Default                         |
/// |-------------------|---------------------------------|
/// | `.capacity(n)`    | `DEFAULT_MAX_CAPACITY`          |
/// | `.operator(e)`    | no operator                     |
/// | `.queue(v)`       | empty queue                     |
/// | `.history(v)`     | empty history                   |
///
/// # Example
///
/// ```rust,ignore
/// let mut ride = RideBuilder::new("Velocity X")
///     .capacity(4)
///     .operator(Employee::new("Sarah Lee", 32, "555-6666", "EMP003", "Roller Coaster"))
///     .queue(visitors)
///     .build();
/// ride.run_cycle()?;
/// ```
pub struct RideBuilder {
    name:     String,
    capacity: i64,
    operator: Option<Employee>,
    queue:    Vec<Visitor>,
    history:  Vec<Visitor>,
}

impl RideBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name:     name.into(),
            capacity: 0,
            operator: None,
            queue:    Vec::new(),
            history:  Vec::new(),
        }
    }

    /// Visitors per cycle.  Values below 1 fall back to the default.
    pub fn capacity(mut self, capacity: i64) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn operator(mut self, operator: Employee) -> Self {
        self.operator = Some(operator);
        self
    }

    /// Visitors to enqueue, in arrival order.
    pub fn queue(mut self, visitors: impl IntoIterator<Item = Visitor>) -> Self {
        self.queue.extend(visitors);
        self
    }

    /// Visitors to record in history.  Duplicate ticket ids are dropped,
    /// exactly as with [`RideState::add_to_history`].
    pub fn history(mut self, visitors: impl IntoIterator<Item = Visitor>) -> Self {
        self.history.extend(visitors);
        self
    }

    pub fn build(self) -> RideState {
        let mut ride = RideState::from_config(RideConfig::new(self.name, self.capacity), self.operator);
        ride.queue.extend(self.queue);
        for v in self.history {
            ride.insert_history(v);
        }
        ride
    }
}
