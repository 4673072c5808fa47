use proptest::prelude::*;
use seabattle::{decode, encode, Coord, CoordError};

fn at(col: usize, row: usize) -> Coord {
    Coord::new(col, row).unwrap()
}

#[test]
fn test_decode_latin() {
    assert_eq!(decode("A1"), Ok(at(0, 0)));
    assert_eq!(decode("J10"), Ok(at(9, 9)));
    assert_eq!(decode("  b5 "), Ok(at(1, 4)));
    assert_eq!(decode("e07"), Ok(at(4, 6)));
}

#[test]
fn test_decode_alternate_alphabet() {
    assert_eq!(decode("к10"), Ok(at(9, 9)));
    assert_eq!(decode("А1"), Ok(at(0, 0)));
    assert_eq!(decode("Б5"), Ok(at(1, 4)));
    assert_eq!(decode("и3"), Ok(at(8, 2)));
}

#[test]
fn test_decode_out_of_range() {
    assert_eq!(decode("K11"), Err(CoordError::OutOfRange));
    assert_eq!(decode("K1"), Err(CoordError::OutOfRange));
    assert_eq!(decode("A0"), Err(CoordError::OutOfRange));
    assert_eq!(decode("A11"), Err(CoordError::OutOfRange));
    // Й is not part of the board alphabet
    assert_eq!(decode("Й1"), Err(CoordError::OutOfRange));
    assert_eq!(
        decode("A99999999999999999999999999"),
        Err(CoordError::OutOfRange)
    );
}

#[test]
fn test_decode_invalid_format() {
    for text in ["", "   ", "A", "1A", "AA1", "A 1", "A1x", "?1", "A-1", "hello"] {
        assert_eq!(decode(text), Err(CoordError::InvalidFormat), "{:?}", text);
    }
}

#[test]
fn test_encode() {
    assert_eq!(encode(0, 0).unwrap(), "A1");
    assert_eq!(encode(9, 9).unwrap(), "J10");
    assert_eq!(encode(3, 4).unwrap(), "D5");
    assert_eq!(encode(10, 0), Err(CoordError::OutOfRange));
    assert_eq!(encode(0, 10), Err(CoordError::OutOfRange));
}

#[test]
fn test_from_str_and_display() {
    let c: Coord = "h8".parse().unwrap();
    assert_eq!(c, at(7, 7));
    assert_eq!(c.to_string(), "H8");
    assert!("Z9".parse::<Coord>().is_err());
}

#[test]
fn test_neighbours_clip_at_edges() {
    assert_eq!(at(0, 0).neighbours().count(), 2);
    assert_eq!(at(0, 5).neighbours().count(), 3);
    assert_eq!(at(5, 5).neighbours().count(), 4);
    assert_eq!(at(0, 0).ring().count(), 3);
    assert_eq!(at(9, 4).ring().count(), 5);
    assert_eq!(at(4, 4).ring().count(), 8);
}

proptest! {
    #[test]
    fn decode_inverts_encode(col in 0usize..10, row in 0usize..10) {
        let text = encode(col, row).unwrap();
        let c = decode(&text).unwrap();
        prop_assert_eq!((c.col(), c.row()), (col, row));
    }

    #[test]
    fn decode_is_case_insensitive(col in 0usize..10, row in 0usize..10) {
        let text = encode(col, row).unwrap().to_lowercase();
        prop_assert_eq!(decode(&text).unwrap(), Coord::new(col, row).unwrap());
    }

    #[test]
    fn index_roundtrip(index in 0usize..100) {
        let c = Coord::from_index(index).unwrap();
        prop_assert_eq!(c.index(), index);
    }
}
