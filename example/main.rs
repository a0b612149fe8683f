use textnorm::{
    normalize_records, normalize_single_text, NormalizeOptions, Normalizer, RankedWords, Toolkit,
};

fn main() {
    let toolkit = Toolkit::english();

    let text = "The quick brown foxes were jumping over the lazy dogs. \
                Mr. Brown watched them closely! Nobody expected the dogs to sleep through it.";

    let options = NormalizeOptions::new()
        .pattern("[^a-zA-Z]")
        .lemmatizing(true);

    let bar = indicatif::ProgressBar::new(0);
    let corpora = Normalizer::new(&toolkit)
        .progress(&bar)
        .document(text, &options)
        .expect("pattern is valid");

    println!("stems:  {:?}", corpora.stems);
    println!("lemmas: {:?}", corpora.lemmas);

    let reviews = serde_json::json!([
        {"review": "Wow... Loved this place."},
        {"review": "Crust is not good."},
        {"review": "Not tasty and the texture was just nasty."},
    ]);
    let records = reviews.as_array().cloned().unwrap_or_default();
    let (stems, _) = normalize_records(&toolkit, &records, "review", &options)
        .expect("every review is text")
        .into_pair();

    for word in RankedWords::rank(&stems).top(5) {
        println!("{}: {}x", word.content, word.count);
    }

    println!(
        "{}",
        normalize_single_text(&toolkit, "Loving the new release @team #shipit https://x.co 2024!")
    );
}
