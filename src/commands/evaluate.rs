//! Single-rack evaluation command

use crate::core::{TileError, TileSet};
use crate::generator::{EvaluatedSet, evaluate};
use crate::wordlists::Dictionary;

/// Parse and evaluate one rack
///
/// # Errors
/// Returns `TileError` if `rack` is not `tile_count` ASCII letters.
pub fn evaluate_rack(
    rack: &str,
    dictionary: &Dictionary,
    tile_count: usize,
    max_display: usize,
) -> Result<EvaluatedSet, TileError> {
    let tiles = TileSet::parse(rack, tile_count)?;
    Ok(evaluate(tiles, dictionary, max_display))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::LengthFilter;

    #[test]
    fn evaluates_parsed_rack() {
        let dictionary =
            Dictionary::from_lines(["cat", "act", "tac", "dog"], LengthFilter::default());
        let set = evaluate_rack("CATXXXX", &dictionary, 7, 10).unwrap();
        assert_eq!(set.words(), ["cat", "act", "tac"]);
        assert_eq!(set.score(), 15);
    }

    #[test]
    fn rejects_wrong_size_rack() {
        let dictionary = Dictionary::default();
        assert!(matches!(
            evaluate_rack("cat", &dictionary, 7, 10),
            Err(TileError::InvalidLength { expected: 7, actual: 3 })
        ));
    }
}
