//! A generic reset/step environment interface.

/// An episodic environment driven by discrete actions.
///
/// Agents written against this trait can be pointed at any environment that
/// follows the reset/step loop.
pub trait Environment {
    /// What the agent sees.
    type Observation;
    /// What the agent can do.
    type Action;
    /// Result of a single step.
    type Step;
    /// Error returned when a step is rejected.
    type Error;

    /// Starts a new episode and returns its first observation.
    fn reset(&mut self) -> Self::Observation;

    /// Applies one action.
    ///
    /// # Errors
    ///
    /// Returns an error if the action is not allowed in the current state.
    fn step(&mut self, action: Self::Action) -> Result<Self::Step, Self::Error>;

    /// Returns every action in the action space.
    fn action_space(&self) -> &'static [Self::Action];
}
