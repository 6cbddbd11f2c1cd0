use crate::types::{Color, Dozen, Half};

/// The 18 red pockets of a European wheel.
pub const RED_POCKETS: [u8; 18] = [
    1, 3, 5, 7, 9, 12, 14, 16, 18, 19, 21, 23, 25, 27, 30, 32, 34, 36,
];

pub fn color_of(outcome: u8) -> Color {
    if outcome == 0 {
        Color::Green
    } else if RED_POCKETS.contains(&outcome) {
        Color::Red
    } else {
        Color::Black
    }
}

pub fn dozen_of(outcome: u8) -> Option<Dozen> {
    match outcome {
        1..=12 => Some(Dozen::First),
        13..=24 => Some(Dozen::Second),
        25..=36 => Some(Dozen::Third),
        _ => None,
    }
}

pub fn half_of(outcome: u8) -> Option<Half> {
    match outcome {
        1..=18 => Some(Half::Low),
        19..=36 => Some(Half::High),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_green_only_for_zero() {
        for n in 0..=36u8 {
            let color = color_of(n);
            assert_eq!(color == Color::Green, n == 0, "pocket {n}");
        }
    }

    #[test]
    fn test_color_red_black_split() {
        let reds = (1..=36u8).filter(|&n| color_of(n) == Color::Red).count();
        let blacks = (1..=36u8).filter(|&n| color_of(n) == Color::Black).count();
        assert_eq!(reds, 18);
        assert_eq!(blacks, 18);
        assert_eq!(color_of(32), Color::Red);
        assert_eq!(color_of(26), Color::Black);
    }

    #[test]
    fn test_dozens_partition_one_to_thirty_six() {
        assert_eq!(dozen_of(0), None);
        let mut counts = [0usize; 3];
        for n in 1..=36u8 {
            counts[dozen_of(n).expect("1..=36 always classified").index()] += 1;
        }
        assert_eq!(counts, [12, 12, 12]);
        assert_eq!(dozen_of(12), Some(Dozen::First));
        assert_eq!(dozen_of(13), Some(Dozen::Second));
        assert_eq!(dozen_of(25), Some(Dozen::Third));
    }

    #[test]
    fn test_halves_partition_one_to_thirty_six() {
        assert_eq!(half_of(0), None);
        let mut counts = [0usize; 2];
        for n in 1..=36u8 {
            counts[half_of(n).expect("1..=36 always classified").index()] += 1;
        }
        assert_eq!(counts, [18, 18]);
        assert_eq!(half_of(18), Some(Half::Low));
        assert_eq!(half_of(19), Some(Half::High));
    }
}
