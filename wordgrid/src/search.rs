use std::cmp::Reverse;
use std::collections::BTreeSet;

use tracing::{debug, trace};

use crate::{rack_after_move, Board, Dictionary, Direction, Move, Rack, Word, BOARD_SIZE};

type RankingKey<'a> = (
    u32,
    Reverse<&'a Word>,
    Reverse<(usize, usize)>,
    Reverse<Direction>,
);

/// Limits for [`MoveSearch`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchConfig {
    /// How many placements to check at most. Once reached, the search
    /// stops and settles for the best placement found so far, if any.
    pub max_candidates: Option<usize>,
}

/// A legal placement, with the points it earns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoredMove {
    pub mv: Move,
    pub score: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchState {
    Idle,
    Searching,
    Found(ScoredMove),
    /// No legal placement exists (or none was found within the budget).
    /// The player should swap tiles or pass.
    Exhausted,
}

/// Finds the best scoring legal placement for a rack.
///
/// Candidates come from the dictionary: every word the rack could spell,
/// laid through an anchor in both directions. Among the legal ones, the
/// highest score wins, ties going to the alphabetically smallest word, then
/// the smallest `(row, col)`, then horizontal.
#[derive(Clone, Debug)]
pub struct MoveSearch {
    config: SearchConfig,
    state: SearchState,
}

impl ScoredMove {
    // Larger is better
    fn ranking_key(&self) -> RankingKey<'_> {
        (
            self.score,
            Reverse(&self.mv.word),
            Reverse(self.mv.origin()),
            Reverse(self.mv.direction),
        )
    }
}

impl Default for MoveSearch {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

impl MoveSearch {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            state: SearchState::Idle,
        }
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    /// Runs a search and returns the chosen placement, if any.
    ///
    /// The move in the result marks which letters are played with blanks.
    pub fn run<D: Dictionary>(
        &mut self,
        board: &Board,
        rack: &Rack,
        dict: &D,
    ) -> Option<&ScoredMove> {
        self.state = SearchState::Searching;
        let best = self.best_placement(board, rack, dict);
        self.state = match best {
            Some(scored) => SearchState::Found(scored),
            None => SearchState::Exhausted,
        };
        match &self.state {
            SearchState::Found(scored) => Some(scored),
            _ => None,
        }
    }

    fn best_placement<D: Dictionary>(
        &self,
        board: &Board,
        rack: &Rack,
        dict: &D,
    ) -> Option<ScoredMove> {
        if rack.is_empty() {
            return None;
        }

        let first_move = board.is_empty();
        let anchors = anchors(board);
        // On a board with tiles, one letter of the word can come from the anchor
        let spare = if first_move { 0 } else { 1 };

        let mut best: Option<ScoredMove> = None;
        let mut num_checked = 0;

        'words: for word in dict.candidates() {
            if word.len() < 2 || word.len() > BOARD_SIZE || !rack.can_form(word, spare) {
                continue;
            }

            let mut placements = BTreeSet::new();
            for &anchor in &anchors {
                let anchor_letter = board.letter_at(anchor.0, anchor.1);
                for direction in Direction::BOTH {
                    for (idx, &letter) in word.letters().iter().enumerate() {
                        if !first_move && anchor_letter != Some(letter) {
                            continue;
                        }
                        if let Some(origin) = direction.retreat(anchor, idx) {
                            placements.insert((origin, direction));
                        }
                    }
                }
            }

            for ((row, col), direction) in placements {
                if self
                    .config
                    .max_candidates
                    .is_some_and(|max| num_checked >= max)
                {
                    debug!(num_checked, "Search budget used up");
                    break 'words;
                }
                num_checked += 1;

                let mv = Move::new(word.clone(), row, col, direction);
                let Ok(mut calculation) = board.calculate(&mv, dict) else {
                    continue;
                };
                let Ok((_, blanks)) = rack_after_move(rack, calculation.mv(), calculation.placed())
                else {
                    continue;
                };
                calculation.assign_blanks(blanks);
                let candidate = ScoredMove {
                    score: calculation.score(),
                    mv: calculation.into_move(),
                };
                trace!(mv = %candidate.mv, score = candidate.score, "Legal placement");

                let is_better = best
                    .as_ref()
                    .map_or(true, |b| candidate.ranking_key() > b.ranking_key());
                if is_better {
                    best = Some(candidate);
                }
            }
        }

        debug!(
            num_checked,
            num_anchors = anchors.len(),
            best = ?best.as_ref().map(|b| (b.mv.to_string(), b.score)),
            "Search finished"
        );
        best
    }
}

/// The cells that new words are laid through.
///
/// On an empty board, that's only the opening cell. Otherwise, it's every
/// occupied cell with at least one free neighbor.
pub fn anchors(board: &Board) -> Vec<(usize, usize)> {
    if board.is_empty() {
        return vec![board.opening()];
    }
    board
        .occupied()
        .filter(|&(row, col, _)| {
            Board::neighbors(row, col).any(|(r, c)| !board.is_occupied(r, c))
        })
        .map(|(row, col, _)| (row, col))
        .collect()
}

/// Searches with the default configuration and returns the chosen move.
pub fn search_move<D: Dictionary>(board: &Board, rack: &Rack, dict: &D) -> Option<Move> {
    MoveSearch::default()
        .run(board, rack, dict)
        .map(|scored| scored.mv.clone())
}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;

    use super::*;
    use crate::arbitrary::SearchInput;
    use crate::{validate_and_commit, word, WordList, OPENING};

    fn rack(s: &str) -> Rack {
        s.parse().unwrap()
    }

    fn board_with_hello() -> Board {
        let mut board = Board::new();
        board.commit(&Move::new(word!("HELLO"), 7, 3, Direction::Horizontal));
        board
    }

    quickcheck! {
        fn search_result_is_accepted(input: SearchInput) -> bool {
            let dict = SearchInput::dictionary();
            let board = input.board(&dict);
            let mut search = MoveSearch::default();
            match search.run(&board, &input.rack, &dict) {
                Some(found) => {
                    let mut board = board.clone();
                    let mut rack = input.rack.clone();
                    validate_and_commit(&mut board, &found.mv, &mut rack, &dict)
                        .is_ok_and(|delta| delta.points == found.score)
                }
                None => true,
            }
        }
    }

    #[test]
    fn empty_rack_or_dictionary_is_exhausted() {
        let mut search = MoveSearch::default();
        assert_eq!(search.state(), &SearchState::Idle);
        let dict = WordList::from_words(["hello"]).unwrap();
        assert!(search.run(&Board::new(), &Rack::new(), &dict).is_none());
        assert_eq!(search.state(), &SearchState::Exhausted);
        assert!(search
            .run(&Board::new(), &rack("HELLO"), &WordList::new())
            .is_none());
        assert_eq!(search.state(), &SearchState::Exhausted);
    }

    #[test]
    fn first_move_covers_opening() {
        let dict = WordList::from_words(["hello", "zzz"]).unwrap();
        let mut search = MoveSearch::default();
        let found = search.run(&Board::new(), &rack("OLLEHAB"), &dict).cloned();
        let found = found.unwrap();
        assert!(crate::covers(&found.mv, OPENING));
        // Placing the H on one of the double letter squares at (7, 3) or (3, 7)
        // is worth the most, and (3, 7) is the smaller origin
        assert_eq!(found.mv, Move::new(word!("HELLO"), 3, 7, Direction::Vertical));
        assert_eq!(found.score, 24);
        assert!(matches!(search.state(), SearchState::Found(_)));
    }

    #[test]
    fn ties_go_to_the_smaller_word() {
        // AB and BA score the same everywhere around the opening cell
        let dict = WordList::from_words(["ba", "ab"]).unwrap();
        let mv = search_move(&Board::new(), &rack("AB"), &dict).unwrap();
        assert_eq!(mv.word, word!("AB"));
        assert_eq!(mv, Move::new(word!("AB"), 6, 7, Direction::Vertical));
    }

    #[test]
    fn ties_on_the_same_origin_go_to_horizontal() {
        let a = ScoredMove {
            mv: Move::new(word!("AB"), 7, 7, Direction::Horizontal),
            score: 8,
        };
        let b = ScoredMove {
            mv: Move::new(word!("AB"), 7, 7, Direction::Vertical),
            score: 8,
        };
        assert!(a.ranking_key() > b.ranking_key());
    }

    #[test]
    fn builds_on_existing_tiles() {
        let dict = WordList::from_words(["hello", "hex", "ox"]).unwrap();
        let board = board_with_hello();
        let mv = search_move(&board, &rack("HX"), &dict).unwrap();
        let mut board_after = board.clone();
        let mut r = rack("HX");
        let delta = validate_and_commit(&mut board_after, &mv, &mut r, &dict).unwrap();
        assert!(delta.points > 0);
        assert_eq!(board_after.num_occupied(), board.num_occupied() + mv.word.len() - 1);
    }

    #[test]
    fn blanks_are_marked_in_the_result() {
        let dict = WordList::from_words(["quiz"]).unwrap();
        let mv = search_move(&Board::new(), &rack("QU?Z"), &dict).unwrap();
        assert_eq!(mv.word, word!("QUIZ"));
        assert_eq!(mv.blanks, BTreeSet::from([2]));
    }

    #[test]
    fn no_legal_placement_is_exhausted() {
        let dict = WordList::from_words(["hello", "quiz"]).unwrap();
        let mut search = MoveSearch::default();
        assert!(search.run(&board_with_hello(), &rack("QUI"), &dict).is_none());
        assert_eq!(search.state(), &SearchState::Exhausted);
    }

    #[test]
    fn budget_stops_the_search() {
        let dict = WordList::from_words(["ab", "ba"]).unwrap();
        let config = SearchConfig {
            max_candidates: Some(0),
        };
        let mut search = MoveSearch::new(config);
        assert!(search.run(&Board::new(), &rack("AB"), &dict).is_none());
        assert_eq!(search.state(), &SearchState::Exhausted);

        let config = SearchConfig {
            max_candidates: Some(1),
        };
        let mut search = MoveSearch::new(config);
        let found = search.run(&Board::new(), &rack("AB"), &dict).unwrap();
        assert_eq!(found.mv.word, word!("AB"));
    }

    #[test]
    fn words_longer_than_the_board_are_skipped() {
        let dict = WordList::from_words(["a".repeat(300), String::from("ab")]).unwrap();
        let mv = search_move(&Board::new(), &rack("AB"), &dict).unwrap();
        assert_eq!(mv.word, word!("AB"));
    }

    #[test]
    fn anchors_are_tiles_with_free_neighbors() {
        assert_eq!(anchors(&Board::new()), vec![OPENING]);
        let board = board_with_hello();
        assert_eq!(
            anchors(&board),
            vec![(7, 3), (7, 4), (7, 5), (7, 6), (7, 7)]
        );
    }
}
