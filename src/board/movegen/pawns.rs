use super::super::{BoardState, Color, PieceId, PieceKind, Position};
use super::Candidates;

impl BoardState {
    pub(crate) fn pawn_candidates(
        &self,
        from: Position,
        color: Color,
        en_passant: Option<Position>,
    ) -> Candidates {
        let mut candidates = Candidates::new();
        let dir = color.pawn_direction();
        let (f, r) = from.coords();

        let single = (f, r + dir);
        if self.is_empty_coords(single) {
            candidates.push(single);
            let double = (f, r + 2 * dir);
            if from.rank() == color.pawn_start_rank() && self.is_empty_coords(double) {
                candidates.push(double);
            }
        }

        for df in [-1, 1] {
            let (tf, tr) = (f + df, r + dir);
            let Some(target) = Position::from_coords(tf, tr) else {
                continue;
            };
            match self.color_at(target) {
                Some(occupant) if occupant != color => candidates.push((tf, tr)),
                Some(_) => {}
                None => {
                    if Some(target) == en_passant
                        && self.en_passant_victim_square(target, color).is_some()
                    {
                        candidates.push((tf, tr));
                    }
                }
            }
        }

        candidates
    }

    fn is_empty_coords(&self, (file, rank): (isize, isize)) -> bool {
        Position::from_coords(file, rank).is_some_and(|pos| self.is_empty_square(pos))
    }

    /// Square of the opponent pawn that an en-passant capture onto `target` removes.
    ///
    /// The victim stands one rank behind the target on the capturer's side.
    fn en_passant_victim_square(&self, target: Position, capturer: Color) -> Option<Position> {
        let victim = target.offset(0, -capturer.pawn_direction())?;
        let id = self.piece_at(victim)?;
        (id.color() != capturer && id.kind() == PieceKind::Pawn).then_some(victim)
    }

    /// If moving `piece` to `to` is an en-passant capture, the square of the captured pawn.
    pub fn en_passant_victim(
        &self,
        piece: PieceId,
        to: Position,
        en_passant: Option<Position>,
    ) -> Option<Position> {
        if piece.kind() != PieceKind::Pawn || en_passant != Some(to) {
            return None;
        }
        let from = self.position_of(piece)?;
        if from.file() == to.file() || !self.is_empty_square(to) {
            return None;
        }
        self.en_passant_victim_square(to, piece.color())
    }

    /// The skipped square when `piece` advances two ranks from `from` to `to`.
    pub fn double_step_target(piece: PieceId, from: Position, to: Position) -> Option<Position> {
        if piece.kind() != PieceKind::Pawn || from.file() != to.file() {
            return None;
        }
        let dir = piece.color().pawn_direction();
        let (_, fr) = from.coords();
        let (_, tr) = to.coords();
        if tr - fr == 2 * dir {
            from.offset(0, dir)
        } else {
            None
        }
    }
}
