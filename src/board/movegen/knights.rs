use super::super::{BoardState, Color, Position};
use super::Candidates;

const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (-2, -1),
    (-2, 1),
    (2, -1),
    (2, 1),
    (-1, -2),
    (1, -2),
    (-1, 2),
    (1, 2),
];

impl BoardState {
    pub(crate) fn knight_candidates(&self, from: Position, color: Color) -> Candidates {
        let (f, r) = from.coords();
        KNIGHT_OFFSETS
            .iter()
            .map(|&(df, dr)| (f + df, r + dr))
            .filter(|&(tf, tr)| self.color_at_coords(tf, tr) != Some(color))
            .collect()
    }
}
