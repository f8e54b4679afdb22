use super::direction::Direction;
use super::grid::Position;

/// The snake in the game
///
/// Direction changes are two-phase: input writes `pending_direction`, and the next
/// [`Snake::advance`] promotes it to `current_direction`. Only the last accepted input
/// before a tick takes effect.
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0
    body: Vec<Position>,
    /// Direction applied on the tick in progress
    current_direction: Direction,
    /// Buffered input, applied on the next tick
    pending_direction: Direction,
}

impl Snake {
    /// Create a new snake with given starting position and direction
    pub fn new(head: Position, direction: Direction, length: usize) -> Self {
        let mut body = vec![head];

        // Add initial body segments behind the head
        let (dx, dy) = direction.opposite().delta();
        for i in 1..length.max(1) {
            let prev = body[i - 1];
            body.push(prev.moved_by(dx, dy));
        }

        Self::from_body(body, direction)
    }

    /// Build a snake from explicit segments, head first
    pub fn from_body(body: Vec<Position>, direction: Direction) -> Self {
        debug_assert!(!body.is_empty(), "snake body must not be empty");
        Self {
            body,
            current_direction: direction,
            pending_direction: direction,
        }
    }

    pub fn body(&self) -> &[Position] {
        &self.body
    }

    pub fn current_direction(&self) -> Direction {
        self.current_direction
    }

    pub fn pending_direction(&self) -> Direction {
        self.pending_direction
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Get the tail position (last segment)
    pub fn tail(&self) -> Position {
        self.body[self.body.len() - 1]
    }

    /// Buffer a direction for the next tick.
    ///
    /// A reversal of the current direction is ignored. Returns whether the input was taken.
    pub fn set_pending_direction(&mut self, direction: Direction) -> bool {
        if self.current_direction.is_opposite(direction) {
            return false;
        }
        self.pending_direction = direction;
        true
    }

    /// Apply the pending direction and return where the head moves to.
    ///
    /// The body is left untouched; the caller decides between [`Snake::push_head`] and
    /// [`Snake::drop_tail`] once collisions are known.
    pub fn advance(&mut self) -> Position {
        self.current_direction = self.pending_direction;
        self.head().moved_in_direction(self.current_direction)
    }

    /// Check if position is occupied by any segment, the tail included
    pub fn occupies(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    pub fn push_head(&mut self, head: Position) {
        self.body.insert(0, head);
    }

    pub fn drop_tail(&mut self) {
        if self.body.len() > 1 {
            self.body.pop();
        }
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Check if the snake is empty (should never happen in practice)
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}
