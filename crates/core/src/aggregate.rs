//! Aggregate root traits and the handle-then-apply execution helper.

/// Aggregate root marker + minimal interface.
pub trait AggregateRoot {
    /// Strongly-typed aggregate identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the aggregate identifier.
    fn id(&self) -> &Self::Id;

    /// Monotonically increasing version of the aggregate's state.
    ///
    /// Corresponds to the number of events applied so far.
    fn version(&self) -> u64;
}

/// Aggregate execution semantics (pure, deterministic).
///
/// - **Decision logic**: `handle(&self, cmd)` returns events.
/// - **State mutation**: `apply(&mut self, event)` evolves state.
///
/// Aggregates must not perform IO or side effects.
pub trait Aggregate: AggregateRoot {
    type Command: Clone + core::fmt::Debug;
    type Event: Clone + core::fmt::Debug;
    type Error: core::fmt::Debug;

    /// Evolve in-memory state from a single event (+1 version per event).
    fn apply(&mut self, event: &Self::Event);

    /// Decide which events to emit given the current state and a command.
    ///
    /// This must not mutate state. State evolution is done through `apply`.
    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error>;
}

/// Run a command against an aggregate: decide, then apply every resulting event.
///
/// Nothing is applied when `handle` rejects the command, so a failed command
/// leaves the aggregate untouched.
pub fn execute<A: Aggregate>(
    aggregate: &mut A,
    command: &A::Command,
) -> Result<Vec<A::Event>, A::Error> {
    let events = match aggregate.handle(command) {
        Ok(events) => events,
        Err(err) => {
            tracing::debug!(
                aggregate_id = ?aggregate.id(),
                version = aggregate.version(),
                error = ?err,
                "command rejected"
            );
            return Err(err);
        }
    };

    for event in &events {
        aggregate.apply(event);
    }

    tracing::trace!(
        aggregate_id = ?aggregate.id(),
        version = aggregate.version(),
        events = events.len(),
        "command applied"
    );

    Ok(events)
}
