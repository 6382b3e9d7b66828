//! Line pipeline tests - compress, merge and the full slide

use tui_2048::core::{compress, merge, slide_line};

/// Every 4-cell line over {0, 2, 4, 8}.
fn all_lines() -> Vec<[u32; 4]> {
    const VALUES: [u32; 4] = [0, 2, 4, 8];
    let mut out = Vec::new();
    for a in VALUES {
        for b in VALUES {
            for c in VALUES {
                for d in VALUES {
                    out.push([a, b, c, d]);
                }
            }
        }
    }
    out
}

#[test]
fn test_compress_idempotent() {
    for line in all_lines() {
        let mut once = line;
        compress(&mut once);
        let mut twice = once;
        compress(&mut twice);
        assert_eq!(once, twice, "compress not idempotent for {:?}", line);
    }
}

#[test]
fn test_compress_preserves_tiles_and_order() {
    for line in all_lines() {
        let mut packed = line;
        compress(&mut packed);

        let before: Vec<u32> = line.iter().copied().filter(|&v| v != 0).collect();
        let after: Vec<u32> = packed.iter().copied().filter(|&v| v != 0).collect();
        assert_eq!(before, after, "tiles reordered for {:?}", line);

        // All tiles first, then all blanks.
        let first_blank = packed.iter().position(|&v| v == 0).unwrap_or(4);
        assert!(packed[first_blank..].iter().all(|&v| v == 0));
    }
}

#[test]
fn test_merge_points_equal_new_tiles() {
    for line in all_lines() {
        let mut work = line;
        compress(&mut work);
        let packed = work;
        let stats = merge(&mut work);

        // Every position that changed to a larger value is a new tile.
        let created: u32 = packed
            .iter()
            .zip(work.iter())
            .filter(|(old, new)| **new > **old)
            .map(|(_, new)| *new)
            .sum();
        assert_eq!(stats.points, created, "points mismatch for {:?}", line);
    }
}

#[test]
fn test_merge_never_remerges_result() {
    // [4, 4, 8, _] must not chain into 16.
    let mut line = [4, 4, 8, 0];
    merge(&mut line);
    assert_eq!(line, [8, 0, 8, 0]);

    let mut line = [2, 2, 4, 8];
    let stats = slide_line(&mut line);
    assert_eq!(line, [4, 4, 8, 0]);
    assert_eq!(stats.points, 4);
}

#[test]
fn test_slide_reference_example() {
    let mut line = [2, 0, 2, 4];
    compress(&mut line);
    assert_eq!(line, [2, 2, 4, 0]);
    let stats = merge(&mut line);
    assert_eq!(line, [4, 0, 4, 0]);
    assert_eq!(stats.points, 4);
    compress(&mut line);
    assert_eq!(line, [4, 4, 0, 0]);
}

#[test]
fn test_slide_is_stable_after_one_pass_without_equal_neighbours() {
    for line in all_lines() {
        let mut once = line;
        slide_line(&mut once);
        let has_pair = once.windows(2).any(|w| w[0] != 0 && w[0] == w[1]);
        if has_pair {
            continue;
        }
        let mut twice = once;
        let stats = slide_line(&mut twice);
        assert_eq!(once, twice);
        assert_eq!(stats.points, 0);
    }
}

#[test]
fn test_empty_line_is_untouched() {
    let mut line = [0u32; 4];
    let stats = slide_line(&mut line);
    assert_eq!(line, [0; 4]);
    assert_eq!(stats.merges, 0);
}
