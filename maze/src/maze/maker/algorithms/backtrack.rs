use log::{debug, trace};

use super::super::{Cell, DirectionSource, MazeMaker};

pub trait Backtrack {
    fn backtrack(&mut self);
}

impl<R: DirectionSource> Backtrack for MazeMaker<R> {
    /// Depth-first carve from the top-left cell. The top of the stack is the
    /// cell currently being extended; it is only dropped once every neighbour
    /// has been visited, which is the point where a recursive version would
    /// return to its caller.
    fn backtrack(&mut self) {
        let initial_cell = Cell::new(0, 0);
        self.visit_cell(initial_cell);

        let mut stack = vec![initial_cell];
        let mut deepest = stack.len();
        let mut carved = 0;

        while let Some(curr) = stack.pop() {
            if !self.has_unvisited_neighbor(curr) {
                continue;
            }

            let (direction, next) = self.pick_unvisited_neighbor(curr);
            trace!("carving {:?} from {:?} into {:?}", direction, curr, next);
            stack.push(curr);
            self.remove_wall_between(curr, direction);
            self.visit_cell(next);
            stack.push(next);

            carved += 1;
            deepest = deepest.max(stack.len());
        }

        debug_assert_eq!(carved, self.size() * self.size() - 1);
        debug!(
            "carved {} passages in a {}x{} maze with {} draws, deepest path {}",
            carved,
            self.size(),
            self.size(),
            self.draws(),
            deepest
        );
    }
}
