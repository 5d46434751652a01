//! Time-travel move list.

use std::iter::FusedIterator;
use std::ops::Range;

/// One entry of the move list: a history step a player can jump back to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_new::new)]
pub struct MoveLabel {
    /// History index this entry jumps to.
    step: usize,
    /// Whether this step is the one currently shown.
    is_current: bool,
}

impl MoveLabel {
    /// History index this entry jumps to.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Whether this step is the one currently shown.
    ///
    /// Front-ends disable the button for the current step.
    pub fn is_current(&self) -> bool {
        self.is_current
    }
}

impl std::fmt::Display for MoveLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.step, self.is_current) {
            (0, _) => write!(f, "Go to game start"),
            (step, true) => write!(f, "Go to move #{step} (current)"),
            (step, false) => write!(f, "Go to move #{step}"),
        }
    }
}

/// Lazy iterator over the move list of a game.
///
/// Cloning yields an independent iterator starting from the same position,
/// so the list can be walked any number of times.
#[derive(Debug, Clone)]
pub struct Moves {
    steps: Range<usize>,
    current_step: usize,
}

impl Moves {
    pub(crate) fn new(len: usize, current_step: usize) -> Self {
        Self {
            steps: 0..len,
            current_step,
        }
    }
}

impl Iterator for Moves {
    type Item = MoveLabel;

    fn next(&mut self) -> Option<Self::Item> {
        self.steps
            .next()
            .map(|step| MoveLabel::new(step, step == self.current_step))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.steps.size_hint()
    }
}

impl ExactSizeIterator for Moves {}

impl FusedIterator for Moves {}
