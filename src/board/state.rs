use std::collections::BTreeMap;

use super::{Color, Layout, PieceId, PieceKind, Position, BOARD_SIZE};

/// A piece together with the square it currently occupies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PieceRecord {
    pub id: PieceId,
    pub position: Position,
}

impl PieceRecord {
    #[inline]
    #[must_use]
    pub fn kind(&self) -> PieceKind {
        self.id.kind()
    }

    #[inline]
    #[must_use]
    pub fn color(&self) -> Color {
        self.id.color()
    }
}

/// Authoritative map from piece identifier to position.
///
/// A square-indexed mailbox mirrors the map so occupancy checks do not scan.
/// No rule checking happens here; callers are responsible for keeping at most
/// one piece per square.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardState {
    positions: BTreeMap<PieceId, Position>,
    mailbox: [[Option<PieceId>; BOARD_SIZE]; BOARD_SIZE], // [rank][file]
}

impl BoardState {
    /// A board with no pieces on it.
    #[must_use]
    pub fn empty() -> Self {
        BoardState {
            positions: BTreeMap::new(),
            mailbox: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// The standard 32-piece starting board.
    #[must_use]
    pub fn standard() -> Self {
        BoardState::from_layout(&Layout::standard())
    }

    #[must_use]
    pub fn from_layout(layout: &Layout) -> Self {
        let mut board = BoardState::empty();
        for &(id, pos) in layout.pieces() {
            board.insert(id, pos);
        }
        board
    }

    pub fn position_of(&self, id: PieceId) -> Option<Position> {
        self.positions.get(&id).copied()
    }

    /// Occupant of `pos`; `None` when empty or off the board.
    pub fn piece_at(&self, pos: Position) -> Option<PieceId> {
        self.mailbox
            .get(pos.rank())
            .and_then(|row| row.get(pos.file()))
            .copied()
            .flatten()
    }

    pub fn color_at(&self, pos: Position) -> Option<Color> {
        self.piece_at(pos).map(PieceId::color)
    }

    /// Color of the occupant at signed coordinates; `None` when empty or off the board.
    pub(crate) fn color_at_coords(&self, file: isize, rank: isize) -> Option<Color> {
        Position::from_coords(file, rank).and_then(|pos| self.color_at(pos))
    }

    pub fn is_empty_square(&self, pos: Position) -> bool {
        self.piece_at(pos).is_none()
    }

    pub fn piece(&self, id: PieceId) -> Option<PieceRecord> {
        self.position_of(id).map(|position| PieceRecord { id, position })
    }

    /// All pieces in identifier order.
    pub fn pieces(&self) -> impl Iterator<Item = PieceRecord> + '_ {
        self.positions
            .iter()
            .map(|(&id, &position)| PieceRecord { id, position })
    }

    pub fn pieces_of_color(&self, color: Color) -> Vec<PieceId> {
        self.positions
            .keys()
            .copied()
            .filter(|id| id.color() == color)
            .collect()
    }

    pub fn king_position(&self, color: Color) -> Option<Position> {
        self.position_of(PieceId::king(color)).or_else(|| {
            self.pieces()
                .find(|p| p.color() == color && p.kind() == PieceKind::King)
                .map(|p| p.position)
        })
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Place a piece, replacing any stored position for the same identifier.
    pub fn insert(&mut self, id: PieceId, pos: Position) {
        self.move_piece(id, pos);
    }

    /// Overwrite the stored position of `id`. Does not capture.
    ///
    /// Off-board positions are ignored.
    pub fn move_piece(&mut self, id: PieceId, pos: Position) {
        if !pos.is_on_board() {
            return;
        }
        if let Some(old) = self.positions.insert(id, pos) {
            let slot = &mut self.mailbox[old.rank()][old.file()];
            if *slot == Some(id) {
                *slot = None;
            }
        }
        self.mailbox[pos.rank()][pos.file()] = Some(id);
    }

    /// Take a piece off the board, returning where it stood.
    pub fn remove(&mut self, id: PieceId) -> Option<Position> {
        let pos = self.positions.remove(&id)?;
        let slot = &mut self.mailbox[pos.rank()][pos.file()];
        if *slot == Some(id) {
            *slot = None;
        }
        Some(pos)
    }
}

impl Default for BoardState {
    fn default() -> Self {
        BoardState::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(token: &str) -> PieceId {
        token.parse().unwrap()
    }

    #[test]
    fn test_standard_board_lookups() {
        let board = BoardState::standard();
        assert_eq!(board.len(), 32);
        assert_eq!(board.position_of(id("K0")), Some(Position(4, 7)));
        assert_eq!(board.piece_at(Position(3, 0)), Some(id("q0")));
        assert_eq!(board.color_at(Position(0, 6)), Some(Color::White));
        assert!(board.is_empty_square(Position(4, 4)));
        assert_eq!(board.pieces_of_color(Color::Black).len(), 16);
    }

    #[test]
    fn test_move_keeps_mailbox_in_sync() {
        let mut board = BoardState::standard();
        board.move_piece(id("P4"), Position(4, 4));
        assert_eq!(board.piece_at(Position(4, 4)), Some(id("P4")));
        assert!(board.is_empty_square(Position(4, 6)));
        assert_eq!(board.position_of(id("P4")), Some(Position(4, 4)));
    }

    #[test]
    fn test_remove() {
        let mut board = BoardState::standard();
        assert_eq!(board.remove(id("n0")), Some(Position(1, 0)));
        assert!(board.is_empty_square(Position(1, 0)));
        assert_eq!(board.remove(id("n0")), None);
        assert_eq!(board.len(), 31);
    }

    #[test]
    fn test_king_position_falls_back_to_scan() {
        let mut board = BoardState::empty();
        board.insert(PieceId::new(Color::Black, PieceKind::King, 3), Position(2, 2));
        assert_eq!(board.king_position(Color::Black), Some(Position(2, 2)));
        assert_eq!(board.king_position(Color::White), None);
    }

    #[test]
    fn test_off_board_positions_are_ignored() {
        let mut board = BoardState::standard();
        assert_eq!(board.piece_at(Position(8, 0)), None);
        assert_eq!(board.piece_at(Position(0, 8)), None);

        board.move_piece(id("K0"), Position(3, 8));
        assert_eq!(board.position_of(id("K0")), Some(Position(4, 7)));

        let mut empty = BoardState::empty();
        empty.insert(id("k0"), Position(9, 9));
        assert!(empty.is_empty());
    }

    #[test]
    fn test_clone_is_isolated() {
        let board = BoardState::standard();
        let mut scratch = board.clone();
        scratch.remove(id("Q0"));
        assert!(board.position_of(id("Q0")).is_some());
        assert_ne!(board, scratch);
    }
}
