use super::super::{BoardState, Color, Position, BOARD_SIZE};
use super::Candidates;

pub(crate) const ROOK_DIRECTIONS: [(isize, isize); 4] = [(0, 1), (0, -1), (-1, 0), (1, 0)];
pub(crate) const BISHOP_DIRECTIONS: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub(crate) const QUEEN_DIRECTIONS: [(isize, isize); 8] = [
    (0, 1),
    (0, -1),
    (-1, 0),
    (1, 0),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// Longest possible ray on an 8x8 board.
const MAX_STEPS: isize = BOARD_SIZE as isize - 1;

impl BoardState {
    pub(crate) fn sliding_candidates(
        &self,
        from: Position,
        color: Color,
        directions: &[(isize, isize)],
    ) -> Candidates {
        let mut candidates = Candidates::new();
        for &(df, dr) in directions {
            for step in 1..=MAX_STEPS {
                let Some(to) = from.offset(df * step, dr * step) else {
                    break;
                };
                match self.color_at(to) {
                    None => candidates.push(to.coords()),
                    Some(occupant) if occupant == color => break,
                    Some(_) => {
                        candidates.push(to.coords());
                        break;
                    }
                }
            }
        }
        candidates
    }
}
