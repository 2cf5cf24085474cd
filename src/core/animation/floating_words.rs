use rand::Rng;
use std::time::Duration;

const DELAY_STEP: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, PartialEq)]
pub struct WordPlacement {
    pub word: String,
    pub left_percent: f64,
    pub top_percent: f64,
    pub delay: Duration,
}

/// Random position in the hero area, staggered start per word.
pub fn place_words<R: Rng + ?Sized>(words: &[String], rng: &mut R) -> Vec<WordPlacement> {
    words
        .iter()
        .enumerate()
        .map(|(index, word)| WordPlacement {
            word: word.clone(),
            left_percent: rng.gen::<f64>() * 100.0,
            top_percent: rng.gen::<f64>() * 100.0,
            delay: DELAY_STEP * index as u32,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn staggers_in_half_second_steps() {
        let words: Vec<String> = ["Security", "Cyber", "Defense"]
            .iter()
            .map(|w| w.to_string())
            .collect();
        let placed = place_words(&words, &mut StdRng::seed_from_u64(1));

        assert_eq!(placed.len(), 3);
        assert_eq!(placed[2].delay, Duration::from_millis(1000));
        assert_eq!(placed[1].word, "Cyber");
        for p in &placed {
            assert!((0.0..100.0).contains(&p.left_percent));
            assert!((0.0..100.0).contains(&p.top_percent));
        }
    }
}
