pub const WORD_LENGTH: usize = 5;

pub const WORDS: [&str; 50] = [
    "REACT", "SWIFT", "PLANT", "WORLD", "CHAIR",
    "TABLE", "BRUSH", "GHOST", "WATER", "TRUCK",
    "BLEND", "CRISP", "SUGAR", "NIGHT", "ALERT",
    "CLOUD", "TREND", "SHEEP", "MOUSE", "GRAPE",
    "PAINT", "VIRUS", "ROBOT", "LUNCH", "FRUIT",
    "TRAIL", "FLOOD", "MUSIC", "VOICE", "STORM",
    "DREAM", "BRICK", "GLASS", "SHAPE", "DANCE",
    "LASER", "PIZZA", "MOVIE", "WOMAN", "GLOVE",
    "STAGE", "SCORE", "BRAIN", "FIELD", "SMILE",
    "PHOTO", "DOUBT", "BRAVE", "SLEEP", "CYCLE",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_list_is_well_formed() {
        for word in WORDS {
            assert_eq!(word.len(), WORD_LENGTH, "{}", word);
            assert!(word.chars().all(|c| c.is_ascii_uppercase()), "{}", word);
        }
    }
}
