use std::collections::HashSet;

use ordered_tree::record::VideoGame;
use ordered_tree::tree::OrderedTree;

use crate::init_logging;

/// Builds a game from small numbers so quickcheck produces plenty of collisions.
fn game(isbn: u8, title: u8, year: i16) -> VideoGame {
    VideoGame::new(
        format!("{:03}", isbn % 16),
        format!("title {}", title % 4),
        i32::from(year),
        "studio",
        "E",
    )
}

quickcheck::quickcheck! {
    fn games_come_out_sorted(games: Vec<(u8, u8, i16)>) -> bool {
        init_logging();
        let mut expected: Vec<VideoGame> = games.iter().map(|&(i, t, y)| game(i, t, y)).collect();
        let tree: OrderedTree<VideoGame> = expected.iter().cloned().collect();
        expected.sort();

        tree.in_order().eq(expected.iter())
    }
}

quickcheck::quickcheck! {
    fn hash_agrees_with_tree_membership(games: Vec<(u8, u8, i16)>, probes: Vec<(u8, u8)>) -> bool {
        let games: Vec<VideoGame> = games.iter().map(|&(i, t, y)| game(i, t, y)).collect();
        let tree: OrderedTree<VideoGame> = games.iter().cloned().collect();
        let set: HashSet<VideoGame> = games.into_iter().collect();

        probes
            .iter()
            .map(|&(i, t)| game(i, t, 0))
            .all(|probe| tree.contains(&probe) == set.contains(&probe))
    }
}

#[test]
fn remove_by_identity() {
    let mut tree = OrderedTree::new();
    tree.insert(VideoGame::new("2", "Halo", 2001, "Bungie", "M"));
    tree.insert(VideoGame::new("1", "Tetris", 1984, "Pajitnov", "E"));
    tree.insert(VideoGame::new("3", "Portal", 2007, "Valve", "T"));

    // The year doesn't matter when looking a game up.
    let removed = tree.remove(&VideoGame::new("2", "Halo", 0, "", "")).unwrap();
    assert_eq!(removed.year(), 2001);
    assert_eq!(tree.root().map(VideoGame::title), Ok("Portal"));
    assert_eq!(
        tree.in_order().map(VideoGame::isbn).collect::<Vec<_>>(),
        vec!["1", "3"]
    );
}
