// camel cards: rank hands by type and card values

use super::{Answer, PuzzleError, PuzzleResult};
use crate::configuration::PuzzleSettings;
use itertools::Itertools;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum HandType {
    HighCard,
    OnePair,
    TwoPair,
    ThreeOfAKind,
    FullHouse,
    FourOfAKind,
    FiveOfAKind,
}

impl HandType {
    fn classify(cards: &[u8]) -> Self {
        // group sizes, largest first
        let groups: Vec<usize> = cards
            .iter()
            .counts()
            .into_values()
            .sorted_unstable_by(|a, b| b.cmp(a))
            .collect();
        match groups.as_slice() {
            [5] => HandType::FiveOfAKind,
            [4, ..] => HandType::FourOfAKind,
            [3, 2] => HandType::FullHouse,
            [3, ..] => HandType::ThreeOfAKind,
            [2, 2, ..] => HandType::TwoPair,
            [2, ..] => HandType::OnePair,
            _ => HandType::HighCard,
        }
    }
}

fn card_value(card: char) -> Option<u8> {
    match card {
        'T' => Some(10),
        'J' => Some(11),
        'Q' => Some(12),
        'K' => Some(13),
        'A' => Some(14),
        _ => card.to_digit(10).filter(|d| *d >= 2).map(|d| d as u8),
    }
}

// field order gives ordering: hand type first, card values second
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct Hand {
    hand_type: HandType,
    cards: Vec<u8>,
    bid: i64,
}

impl Hand {
    fn parse(index: usize, line: &str) -> PuzzleResult<Self> {
        let (cards, bid) = line
            .split_once(' ')
            .ok_or_else(|| PuzzleError::malformed_line(index, line))?;
        let cards = cards
            .chars()
            .map(card_value)
            .collect::<Option<Vec<u8>>>()
            .filter(|cards| cards.len() == 5)
            .ok_or_else(|| PuzzleError::malformed_line(index, line))?;
        Ok(Self {
            hand_type: HandType::classify(&cards),
            cards,
            bid: bid.trim().parse()?,
        })
    }
}

pub fn solve(input: &str, _settings: &PuzzleSettings) -> PuzzleResult<Answer> {
    let hands = input
        .lines()
        .enumerate()
        .map(|(index, line)| Hand::parse(index, line))
        .collect::<PuzzleResult<Vec<Hand>>>()?;
    let winnings = hands
        .into_iter()
        .sorted()
        .enumerate()
        .map(|(rank, hand)| (rank as i64 + 1) * hand.bid)
        .sum();
    Ok(Answer::only_part1(winnings))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example() {
        let input = "32T3K 765\nT55J5 684\nKK677 28\nKTJJT 220\nQQQJA 483\n";
        let answer = solve(input, &PuzzleSettings::default()).unwrap();
        assert_eq!(answer, Answer::only_part1(6440));
    }

    #[test]
    fn test_classify() {
        let classify = |cards: &str| {
            let values: Vec<u8> = cards.chars().filter_map(card_value).collect();
            HandType::classify(&values)
        };
        assert_eq!(classify("AAAAA"), HandType::FiveOfAKind);
        assert_eq!(classify("AA8AA"), HandType::FourOfAKind);
        assert_eq!(classify("23332"), HandType::FullHouse);
        assert_eq!(classify("TTT98"), HandType::ThreeOfAKind);
        assert_eq!(classify("23432"), HandType::TwoPair);
        assert_eq!(classify("A23A4"), HandType::OnePair);
        assert_eq!(classify("23456"), HandType::HighCard);
    }

    #[test]
    fn test_invalid_card() {
        let err = solve("32X3K 765\n", &PuzzleSettings::default()).unwrap_err();
        assert!(matches!(err, PuzzleError::MalformedLine { line: 1, .. }));
    }
}
