//! Game state: falling figure, collision, gravity, landing, line clears, score.

use crate::cup::{CellState, Cup};
use crate::figure::{Figure, FigureKind, Rotation, rotated};
use crate::geometry::Point;
use rand::Rng;

/// The single game context per run: the cup of settled cells, the falling
/// figure with its offset, the pending next figure, and the score.
#[derive(Debug)]
pub struct GameState {
    pub cup: Cup,
    pub figure: Figure,
    /// Translation added to the figure's local points to obtain cup
    /// coordinates. Movement changes only this; rotation only the local points.
    pub offset: Point,
    pub next: FigureKind,
    pub score: u32,
    pub game_over: bool,
}

impl GameState {
    pub fn new(width: u16, height: u16) -> Self {
        let mut state = Self {
            cup: Cup::new(width, height),
            figure: Figure::new(FigureKind::Square),
            offset: Point::default(),
            next: random_kind(),
            score: 0,
            game_over: false,
        };
        state.spawn();
        state
    }

    /// Spawn translation: horizontal centre of the cup, one row below the top.
    fn spawn_offset(&self) -> Point {
        Point::new(self.cup.width() as i32 / 2, 1)
    }

    /// Consume the pending next figure and immediately redraw a fresh one.
    /// Spawning never rejects; an overlapping spawn is caught by the top-row
    /// check at the following landing.
    pub fn spawn(&mut self) {
        self.offset = self.spawn_offset();
        self.figure = Figure::new(self.next);
        self.next = random_kind();
    }

    /// A point is blocked when it lies outside the cup bounds or on a settled
    /// cell. The bound check is symmetric on both axes; shadow cells never
    /// enter the cup, so only settled cells block.
    pub fn point_is_blocked(&self, p: Point) -> bool {
        if p.x < 0 || p.y < 0 || p.x >= self.cup.width() as i32 || p.y >= self.cup.height() as i32 {
            return true;
        }
        self.cup
            .get(p.x as usize, p.y as usize)
            .is_some_and(CellState::is_filled)
    }

    /// The single predicate gating every transform: any of the 4 points
    /// blocked at the given offset.
    fn collides(&self, points: &[Point; 4], offset: Point) -> bool {
        points.iter().any(|&p| self.point_is_blocked(p + offset))
    }

    /// Shift the figure by `delta` if the target position is free. The offset
    /// is untouched on rejection.
    pub fn try_translate(&mut self, delta: Point) -> bool {
        let candidate = self.offset + delta;
        if self.collides(&self.figure.points, candidate) {
            return false;
        }
        self.offset = candidate;
        true
    }

    /// Rotate the figure in place if the rotated position is free. Local
    /// points are replaced wholesale on success; the offset is never touched.
    pub fn try_rotate(&mut self, dir: Rotation) -> bool {
        let candidate = rotated(self.figure.points, dir);
        if self.collides(&candidate, self.offset) {
            return false;
        }
        self.figure.points = candidate;
        true
    }

    pub fn move_left(&mut self) -> bool {
        self.try_translate(Point::new(-1, 0))
    }

    pub fn move_right(&mut self) -> bool {
        self.try_translate(Point::new(1, 0))
    }

    /// One downward step. Returns false when the figure cannot fall further.
    pub fn fall(&mut self) -> bool {
        self.try_translate(Point::new(0, 1))
    }

    /// Gravity tick: fall one step, landing the figure when the step is
    /// rejected.
    pub fn tick_gravity(&mut self) {
        if self.game_over {
            return;
        }
        if !self.fall() {
            self.land();
        }
    }

    /// Single soft-drop step; landing is left to the gravity cadence.
    pub fn soft_drop(&mut self) {
        if self.game_over {
            return;
        }
        self.fall();
    }

    /// Repeat the fall until rejection, then land.
    pub fn hard_drop(&mut self) {
        if self.game_over {
            return;
        }
        while self.fall() {}
        self.land();
    }

    /// Landing: merge the figure's cells permanently into the cup, clear and
    /// score complete lines, then either end the game or spawn the next
    /// figure. Spawn always follows merge.
    fn land(&mut self) {
        let kind = self.figure.kind;
        for p in self.figure_cells() {
            if p.x >= 0 && p.y >= 0 {
                self.cup
                    .set(p.x as usize, p.y as usize, CellState::Settled(kind));
            }
        }
        let lines = self.cup.scan_and_clear_lines();
        self.score += lines * lines;
        if self.cup.is_top_row_filled() {
            self.game_over = true;
        } else {
            self.spawn();
        }
    }

    /// Cup coordinates of the falling figure.
    pub fn figure_cells(&self) -> [Point; 4] {
        self.figure.points.map(|p| p + self.offset)
    }

    /// Offset the figure would land at if dropped now. Computed against a
    /// candidate copy; the live offset and figure are not touched.
    pub fn shadow_offset(&self) -> Point {
        let mut candidate = self.offset;
        loop {
            let below = candidate + Point::new(0, 1);
            if self.collides(&self.figure.points, below) {
                return candidate;
            }
            candidate = below;
        }
    }

    /// Cup coordinates of the shadow projection.
    pub fn shadow_cells(&self) -> [Point; 4] {
        let off = self.shadow_offset();
        self.figure.points.map(|p| p + off)
    }
}

/// Uniform draw over the catalog; no seed-reproducibility requirement.
fn random_kind() -> FigureKind {
    FigureKind::ALL[rand::thread_rng().gen_range(0..FigureKind::ALL.len())]
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Force a known figure at a known offset, bypassing the random draw.
    fn place(state: &mut GameState, kind: FigureKind, offset: Point) {
        state.figure = Figure::new(kind);
        state.offset = offset;
    }

    fn fill_bottom_row_except(state: &mut GameState, gap: &[usize]) {
        let y = state.cup.height() - 1;
        for x in 0..state.cup.width() {
            if !gap.contains(&x) {
                state.cup.set(x, y, CellState::Settled(FigureKind::L));
            }
        }
    }

    #[test]
    fn spawn_on_empty_cup_does_not_collide() {
        let mut state = GameState::new(10, 20);
        place(&mut state, FigureKind::Stick, Point::new(5, 1));
        assert!(!state.collides(&state.figure.points, state.offset));
    }

    #[test]
    fn spawn_consumes_next_and_redraws() {
        let mut state = GameState::new(10, 20);
        state.next = FigureKind::J;
        state.spawn();
        assert_eq!(state.figure.kind, FigureKind::J);
        assert_eq!(state.offset, Point::new(5, 1));
    }

    #[test]
    fn translate_then_inverse_restores_offset() {
        let mut state = GameState::new(10, 20);
        place(&mut state, FigureKind::T, Point::new(5, 5));
        assert!(state.try_translate(Point::new(1, 2)));
        assert!(state.try_translate(Point::new(-1, -2)));
        assert_eq!(state.offset, Point::new(5, 5));
    }

    #[test]
    fn move_left_at_wall_is_rejected_and_offset_unchanged() {
        let mut state = GameState::new(10, 20);
        // Stick's leftmost local point is -1, so global x reaches 0 at offset 1.
        place(&mut state, FigureKind::Stick, Point::new(1, 5));
        assert!(!state.move_left());
        assert_eq!(state.offset, Point::new(1, 5));
    }

    #[test]
    fn rotate_rejected_by_settled_cell_leaves_points_unchanged() {
        let mut state = GameState::new(10, 20);
        place(&mut state, FigureKind::Stick, Point::new(5, 5));
        // Left rotation stands the stick up through (5, 4); settle that cell.
        state.cup.set(5, 4, CellState::Settled(FigureKind::Square));
        let before = state.figure.points;
        assert!(!state.try_rotate(Rotation::Left));
        assert_eq!(state.figure.points, before);
    }

    #[test]
    fn rotate_left_then_right_restores_live_figure() {
        let mut state = GameState::new(10, 20);
        place(&mut state, FigureKind::J, Point::new(5, 5));
        let before = state.figure.points;
        assert!(state.try_rotate(Rotation::Left));
        assert!(state.try_rotate(Rotation::Right));
        assert_eq!(state.figure.points, before);
        assert_eq!(state.offset, Point::new(5, 5));
    }

    #[test]
    fn blocked_at_settled_cells_free_at_the_gap() {
        let mut state = GameState::new(10, 20);
        fill_bottom_row_except(&mut state, &[4]);
        let y = state.cup.height() as i32 - 1;
        for x in 0..10 {
            let blocked = state.point_is_blocked(Point::new(x, y));
            assert_eq!(blocked, x != 4, "x = {}", x);
        }
    }

    #[test]
    fn points_outside_bounds_are_blocked() {
        let state = GameState::new(10, 20);
        assert!(state.point_is_blocked(Point::new(-1, 5)));
        assert!(state.point_is_blocked(Point::new(10, 5)));
        assert!(state.point_is_blocked(Point::new(5, 20)));
        assert!(state.point_is_blocked(Point::new(5, -1)));
    }

    #[test]
    fn hard_drop_settles_figure_on_the_floor() {
        let mut state = GameState::new(10, 20);
        place(&mut state, FigureKind::Square, Point::new(4, 1));
        state.hard_drop();
        assert_eq!(
            state.cup.get(4, 19),
            Some(CellState::Settled(FigureKind::Square))
        );
        assert_eq!(
            state.cup.get(5, 18),
            Some(CellState::Settled(FigureKind::Square))
        );
    }

    #[test]
    fn four_stick_drops_fill_and_clear_one_row() {
        // 16-wide cup: four horizontal sticks cover exactly one row.
        let mut state = GameState::new(16, 20);
        for lane in [1, 5, 9, 13] {
            place(&mut state, FigureKind::Stick, Point::new(lane, 1));
            state.hard_drop();
        }
        assert_eq!(state.score, 1);
        assert!(!state.game_over);
        for x in 0..16 {
            assert_eq!(state.cup.get(x, 19), Some(CellState::Empty));
        }
    }

    #[test]
    fn clearing_two_rows_in_one_pass_scores_four() {
        let mut state = GameState::new(10, 20);
        fill_bottom_row_except(&mut state, &[4, 5]);
        for x in 0..10 {
            if x != 4 && x != 5 {
                state.cup.set(x, 18, CellState::Settled(FigureKind::L));
            }
        }
        // Square at offset (4, 18) fills the two-cell gap in both rows.
        place(&mut state, FigureKind::Square, Point::new(4, 18));
        state.hard_drop();
        assert_eq!(state.score, 4);
    }

    #[test]
    fn landing_with_a_filled_top_row_ends_the_game() {
        let mut state = GameState::new(10, 20);
        state.cup.set(0, 0, CellState::Settled(FigureKind::T));
        place(&mut state, FigureKind::Square, Point::new(4, 18));
        state.tick_gravity();
        assert!(state.game_over);
    }

    #[test]
    fn shadow_projection_does_not_mutate_live_state() {
        let mut state = GameState::new(10, 20);
        place(&mut state, FigureKind::Z, Point::new(5, 3));
        let offset = state.offset;
        let figure = state.figure;
        let _ = state.shadow_cells();
        assert_eq!(state.offset, offset);
        assert_eq!(state.figure, figure);
    }

    #[test]
    fn shadow_lands_on_top_of_settled_cells() {
        let mut state = GameState::new(10, 20);
        fill_bottom_row_except(&mut state, &[]);
        place(&mut state, FigureKind::Square, Point::new(4, 1));
        // Bottom row is full, so the square rests one row above it.
        assert_eq!(state.shadow_offset(), Point::new(4, 17));
    }

    #[test]
    fn no_transforms_after_game_over() {
        let mut state = GameState::new(10, 20);
        state.game_over = true;
        let offset = state.offset;
        state.tick_gravity();
        state.soft_drop();
        state.hard_drop();
        assert_eq!(state.offset, offset);
    }
}
