use crate::game::BoardEngine;

/// Chooses the column for the next drop.
pub trait Agent {
    /// Select a column given the current engine state. The column may be full
    /// or off the board; the engine applies its own rules to the drop.
    fn select_column(&mut self, engine: &BoardEngine) -> usize;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}
