use super::super::{BoardState, Color, Position};
use super::Candidates;

const KING_OFFSETS: [(isize, isize); 8] = [
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

impl BoardState {
    pub(crate) fn king_candidates(&self, from: Position, color: Color) -> Candidates {
        let (f, r) = from.coords();
        KING_OFFSETS
            .iter()
            .map(|&(df, dr)| (f + df, r + dr))
            .filter(|&(tf, tr)| self.color_at_coords(tf, tr) != Some(color))
            .collect()
    }
}
