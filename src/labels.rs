/// Class labels for the tomato leaf model, index-aligned with the
/// probability vector it returns. Fixed at compile time, never mutated.
pub const CLASS_NAMES: [&str; 10] = [
    "Tomato_Bacterial_spot",
    "Tomato_Early_blight",
    "Tomato_Late_blight",
    "Tomato_Leaf_Mold",
    "Tomato_Septoria_leaf_spot",
    "Tomato_Spider_mites_Two_spotted_spider_mite",
    "Tomato__Target_Spot",
    "Tomato__Tomato_YellowLeaf__Curl_Virus",
    "Tomato__Tomato_mosaic_virus",
    "Tomato_healthy",
];

/// Index and value of the largest score. Ties resolve to the first
/// occurrence; `None` for an empty slice.
pub fn argmax(scores: &[f64]) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;
    for (index, &score) in scores.iter().enumerate() {
        let replace = match best {
            None => true,
            Some((_, top)) => score > top,
        };
        if replace {
            best = Some((index, score));
        }
    }
    best
}
