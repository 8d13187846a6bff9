//! Immutable board snapshots and their builder.
//!
//! A `Board` is materialised once from a `BoardBuilder` and never changes
//! afterwards. Construction derives both sides' piece lists, their
//! pseudo-legal move lists and the two player states; every transition
//! produces a brand-new `Board` through `Move::execute`.

use std::collections::HashMap;
use std::fmt;

use crate::board::alliance::Alliance;
use crate::board::board_utils::{Coordinate, NUMBER_OF_TILES};
use crate::board::piece::{Piece, PieceKind};
use crate::board::tile::Tile;
use crate::errors::BoardError;
use crate::move_generation::chess_move::Move;
use crate::moves::piece_moves::generate_piece_moves;
use crate::player::castling::castle_moves;
use crate::player::player::{Player, PlayerState};
use crate::utils::render_board::render_board;

const BACK_ROW_LAYOUT: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

#[derive(Debug, Clone)]
pub struct Board {
    tiles: [Tile; NUMBER_OF_TILES],
    white_pieces: Vec<Piece>,
    black_pieces: Vec<Piece>,
    white_player: PlayerState,
    black_player: PlayerState,
    next_move_maker: Alliance,
    en_passant_pawn: Option<Piece>,
}

impl Board {
    /// The standard starting position: Black on rows 1-2, White on rows 7-8,
    /// White to move.
    pub fn standard() -> Self {
        let mut builder = BoardBuilder::new();
        for (col, kind) in BACK_ROW_LAYOUT.iter().copied().enumerate() {
            let col = col as Coordinate;
            builder
                .set_piece(Piece::new(kind, Alliance::Black, col))
                .set_piece(Piece::new(PieceKind::Pawn, Alliance::Black, 8 + col))
                .set_piece(Piece::new(PieceKind::Pawn, Alliance::White, 48 + col))
                .set_piece(Piece::new(kind, Alliance::White, 56 + col));
        }
        builder.set_next_move_maker(Alliance::White);
        builder
            .build()
            .expect("standard layout should always build")
    }

    #[inline]
    pub fn tile(&self, coordinate: Coordinate) -> &Tile {
        &self.tiles[coordinate as usize]
    }

    #[inline]
    pub fn tiles(&self) -> &[Tile; NUMBER_OF_TILES] {
        &self.tiles
    }

    #[inline]
    pub fn piece_at(&self, coordinate: Coordinate) -> Option<&Piece> {
        self.tile(coordinate).piece()
    }

    pub fn white_pieces(&self) -> &[Piece] {
        &self.white_pieces
    }

    pub fn black_pieces(&self) -> &[Piece] {
        &self.black_pieces
    }

    pub fn active_pieces(&self, alliance: Alliance) -> &[Piece] {
        match alliance {
            Alliance::White => &self.white_pieces,
            Alliance::Black => &self.black_pieces,
        }
    }

    pub fn white_player(&self) -> Player<'_> {
        self.player(Alliance::White)
    }

    pub fn black_player(&self) -> Player<'_> {
        self.player(Alliance::Black)
    }

    pub fn player(&self, alliance: Alliance) -> Player<'_> {
        Player::new(self, self.player_state(alliance))
    }

    /// The player whose turn it is.
    pub fn current_player(&self) -> Player<'_> {
        self.player(self.next_move_maker)
    }

    #[inline]
    pub fn next_move_maker(&self) -> Alliance {
        self.next_move_maker
    }

    /// The pawn that double-stepped on the previous ply, if any.
    #[inline]
    pub fn en_passant_pawn(&self) -> Option<&Piece> {
        self.en_passant_pawn.as_ref()
    }

    /// Both sides' move lists, White first.
    pub fn all_legal_moves(&self) -> impl Iterator<Item = &Move> + '_ {
        self.white_player
            .legal_moves
            .iter()
            .chain(self.black_player.legal_moves.iter())
    }

    pub(crate) fn player_state(&self, alliance: Alliance) -> &PlayerState {
        match alliance {
            Alliance::White => &self.white_player,
            Alliance::Black => &self.black_player,
        }
    }

    /// Pseudo-legal moves of every active piece of `alliance`, without castling.
    fn calculate_standard_moves(&self, alliance: Alliance) -> Vec<Move> {
        let mut moves = Vec::with_capacity(64);
        for piece in self.active_pieces(alliance) {
            generate_piece_moves(piece, self, &mut moves);
        }
        moves
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_board(self))
    }
}

/// Single-use assembler for a `Board`; `build` consumes it.
#[derive(Debug, Clone, Default)]
pub struct BoardBuilder {
    board_config: HashMap<Coordinate, Piece>,
    next_move_maker: Option<Alliance>,
    en_passant_pawn: Option<Piece>,
}

impl BoardBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Places `piece` on its own position, replacing whatever was there.
    pub fn set_piece(&mut self, piece: Piece) -> &mut Self {
        self.board_config.insert(piece.position, piece);
        self
    }

    pub fn set_next_move_maker(&mut self, alliance: Alliance) -> &mut Self {
        self.next_move_maker = Some(alliance);
        self
    }

    pub fn set_en_passant_pawn(&mut self, pawn: Piece) -> &mut Self {
        self.en_passant_pawn = Some(pawn);
        self
    }

    pub fn piece(&self, coordinate: Coordinate) -> Option<&Piece> {
        self.board_config.get(&coordinate)
    }

    pub fn build(self) -> Result<Board, BoardError> {
        let next_move_maker = self.next_move_maker.ok_or(BoardError::MissingNextMover)?;
        if let Some(&coordinate) = self
            .board_config
            .keys()
            .find(|coordinate| **coordinate as usize >= NUMBER_OF_TILES)
        {
            return Err(BoardError::InvalidCoordinate(coordinate));
        }

        let tiles: [Tile; NUMBER_OF_TILES] = std::array::from_fn(|index| {
            let coordinate = index as Coordinate;
            Tile::create(coordinate, self.board_config.get(&coordinate).copied())
        });
        let white_pieces = calculate_active_pieces(&tiles, Alliance::White);
        let black_pieces = calculate_active_pieces(&tiles, Alliance::Black);
        let white_king = establish_king(&white_pieces, Alliance::White)?;
        let black_king = establish_king(&black_pieces, Alliance::Black)?;

        let mut board = Board {
            tiles,
            white_pieces,
            black_pieces,
            white_player: PlayerState::new(Alliance::White, white_king),
            black_player: PlayerState::new(Alliance::Black, black_king),
            next_move_maker,
            en_passant_pawn: self.en_passant_pawn,
        };

        let white_standard = board.calculate_standard_moves(Alliance::White);
        let black_standard = board.calculate_standard_moves(Alliance::Black);
        let white_castles = castle_moves(&board, Alliance::White, &black_standard);
        let black_castles = castle_moves(&board, Alliance::Black, &white_standard);

        board
            .white_player
            .settle(white_standard.clone(), white_castles, &black_standard);
        board
            .black_player
            .settle(black_standard, black_castles, &white_standard);

        Ok(board)
    }
}

fn calculate_active_pieces(tiles: &[Tile; NUMBER_OF_TILES], alliance: Alliance) -> Vec<Piece> {
    tiles
        .iter()
        .filter_map(Tile::piece)
        .filter(|piece| piece.alliance == alliance)
        .copied()
        .collect()
}

fn establish_king(pieces: &[Piece], alliance: Alliance) -> Result<Piece, BoardError> {
    let mut kings = pieces.iter().filter(|piece| piece.is_king());
    match (kings.next(), kings.count()) {
        (Some(king), 0) => Ok(*king),
        (None, _) => Err(BoardError::KingCount { alliance, count: 0 }),
        (Some(_), extra) => Err(BoardError::KingCount {
            alliance,
            count: extra + 1,
        }),
    }
}
