use super::Game;

impl Game {
    /// Count leaf positions `depth` plies ahead.
    ///
    /// Each child is explored on a clone, so `self` is left untouched.
    pub fn perft(&self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.legal_moves_for(self.turn);
        if depth == 1 {
            return moves.iter().map(|(_, targets)| targets.len() as u64).sum();
        }

        let mut nodes = 0;
        for (piece, targets) in &moves {
            let Some(from) = self.board.position_of(*piece) else {
                continue;
            };
            for &to in targets {
                let mut child = self.clone();
                child.apply(*piece, from, to);
                nodes += child.perft(depth - 1);
            }
        }

        nodes
    }
}
