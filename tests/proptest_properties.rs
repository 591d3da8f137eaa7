mod common;

use common::Item;
use proptest::prelude::*;
use resdiff::compare::CompareError;
use resdiff::io::{compare_color_files, compare_index_files};

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

/// Index items with values kept clear of the binary sentinel range.
fn index_item() -> impl Strategy<Value = Item> {
    prop_oneof![
        8 => (0u64..u64::MAX - 3).prop_map(Item::Value),
        1 => Just(Item::NotFound),
        1 => Just(Item::Invalid),
    ]
}

fn index_lines() -> impl Strategy<Value = Vec<Vec<Item>>> {
    proptest::collection::vec(proptest::collection::vec(index_item(), 0..12), 0..16)
}

/// Color values restricted to the single-byte packed range so every color
/// encoder (including one-hot CSV) can render them. Lines are strictly
/// increasing, as the CSV scan order requires.
fn color_lines() -> impl Strategy<Value = Vec<Vec<u64>>> {
    proptest::collection::vec(
        proptest::collection::btree_set(0u64..0x40, 0..10)
            .prop_map(|set| set.into_iter().collect::<Vec<_>>()),
        0..16,
    )
}

fn index_encoders() -> [(&'static str, fn(&[Vec<Item>]) -> Vec<u8>); 3] {
    [
        ("ascii", common::ascii_index),
        ("binary", common::binary_index),
        ("packedint", common::packed_index),
    ]
}

fn color_encoders() -> [(&'static str, fn(&[Vec<u64>]) -> Vec<u8>); 3] {
    [
        ("ascii", common::ascii_color),
        ("binary", common::binary_color),
        ("packedint", common::packed_color),
    ]
}

proptest! {
    #[test]
    fn prop_index_encodings_agree(lines in index_lines()) {
        let dir = tempfile::tempdir().unwrap();
        for (left_name, left_enc) in index_encoders() {
            for (right_name, right_enc) in index_encoders() {
                let left = common::write_file(dir.path(), left_name, &left_enc(&lines));
                let right = common::write_file(
                    dir.path(),
                    &format!("{right_name}.2"),
                    &right_enc(&lines),
                );
                let stats = compare_index_files(&left, &right)
                    .map_err(|e| TestCaseError::fail(format!("{left_name} vs {right_name}: {e}")))?;
                prop_assert_eq!(stats.lines, lines.len() as u64);
            }
        }
    }

    #[test]
    fn prop_color_encodings_agree(lines in color_lines()) {
        let dir = tempfile::tempdir().unwrap();
        for (left_name, left_enc) in color_encoders() {
            for (right_name, right_enc) in color_encoders() {
                let left = common::write_file(dir.path(), left_name, &left_enc(&lines));
                let right = common::write_file(
                    dir.path(),
                    &format!("{right_name}.2"),
                    &right_enc(&lines),
                );
                let stats = compare_color_files(&left, &right)
                    .map_err(|e| TestCaseError::fail(format!("{left_name} vs {right_name}: {e}")))?;
                prop_assert_eq!(stats.lines, lines.len() as u64);
            }
        }
    }

    #[test]
    fn prop_csv_agrees_with_tagged_color_formats(lines in color_lines()) {
        let dir = tempfile::tempdir().unwrap();
        let csv = common::write_file(dir.path(), "a.csv", &common::csv_color(&lines, 0x40));
        for (name, enc) in color_encoders() {
            let other = common::write_file(dir.path(), name, &enc(&lines));
            compare_color_files(&csv, &other)
                .map_err(|e| TestCaseError::fail(format!("csv vs {name}: {e}")))?;
        }
    }

    #[test]
    fn prop_single_cell_corruption_is_localized(
        lines in index_lines(),
        line_pick in any::<prop::sample::Index>(),
        pos_pick in any::<prop::sample::Index>(),
    ) {
        // Only lines that actually carry a value can be corrupted.
        let candidates: Vec<usize> = lines
            .iter()
            .enumerate()
            .filter(|(_, l)| !l.is_empty())
            .map(|(i, _)| i)
            .collect();
        prop_assume!(!candidates.is_empty());
        let target_line = candidates[line_pick.index(candidates.len())];
        let target_pos = pos_pick.index(lines[target_line].len());

        let mut corrupted = lines.clone();
        corrupted[target_line][target_pos] = match corrupted[target_line][target_pos] {
            Item::Value(v) => Item::Value(v ^ 1),
            Item::NotFound => Item::Invalid,
            Item::Invalid => Item::NotFound,
        };

        let dir = tempfile::tempdir().unwrap();
        let left = common::write_file(dir.path(), "l", &common::binary_index(&lines));
        let right = common::write_file(dir.path(), "r", &common::ascii_index(&corrupted));
        match compare_index_files(&left, &right) {
            Err(CompareError::Mismatch { line, position, .. }) => {
                prop_assert_eq!(line, target_line as u64);
                prop_assert_eq!(position, target_pos as u64);
            }
            Ok(_) => return Err(TestCaseError::fail("corruption went undetected")),
            Err(other) => return Err(TestCaseError::fail(format!("decode failed: {other}"))),
        }
    }

    #[test]
    fn prop_bool_rendition_agrees_with_full_sentinels(lines in index_lines()) {
        let dir = tempfile::tempdir().unwrap();
        let bool_file = common::write_file(dir.path(), "bool", &common::bool_index(&lines));
        let full = common::write_file(dir.path(), "bin", &common::binary_index(&lines));
        compare_index_files(&bool_file, &full)
            .map_err(|e| TestCaseError::fail(format!("bool vs binary: {e}")))?;
    }

    #[test]
    fn prop_truncated_stream_never_compares_equal(lines in index_lines()) {
        // Drop the last line entirely; the longer side must be flagged.
        prop_assume!(!lines.is_empty());
        let shorter = lines[..lines.len() - 1].to_vec();

        let dir = tempfile::tempdir().unwrap();
        let left = common::write_file(dir.path(), "l", &common::binary_index(&lines));
        let right = common::write_file(dir.path(), "r", &common::binary_index(&shorter));
        prop_assert!(compare_index_files(&left, &right).is_err());
    }
}
