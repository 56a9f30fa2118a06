#![cfg(feature = "serde")]

use chess_tools::board::{ChessToolsError, Color, GameResult, Piece, PieceKind, Square};

#[test]
fn square_serializes_as_struct() {
    let sq = Square::new(5, 4).unwrap();
    let json = serde_json::to_string(&sq).unwrap();
    assert_eq!(json, r#"{"column":5,"row":4}"#);
    assert_eq!(serde_json::from_str::<Square>(&json).unwrap(), sq);
}

#[test]
fn square_rejects_out_of_domain_values() {
    let err = serde_json::from_str::<Square>(r#"{"column":0,"row":4}"#).unwrap_err();
    let expected = ChessToolsError::InvalidCoordinate { column: 0, row: 4 }.to_string();
    assert!(err.to_string().contains(&expected));
}

#[test]
fn square_rejects_wrong_kinds() {
    let err = serde_json::from_str::<Square>(r#"{"column":"a","row":4}"#).unwrap_err();
    assert!(err.is_data());
    assert!(err.to_string().contains("invalid type"));
}

#[test]
fn piece_and_enums() {
    let piece = Piece::new(PieceKind::Knight, Color::Black);
    let json = serde_json::to_string(&piece).unwrap();
    assert_eq!(json, r#"{"kind":"Knight","color":"black"}"#);
    assert_eq!(serde_json::from_str::<Piece>(&json).unwrap(), piece);

    let result: GameResult = serde_json::from_str(r#""Draw""#).unwrap();
    assert_eq!(result, GameResult::Draw);
}
