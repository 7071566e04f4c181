use lemmy::{Lemmatize, Trained};

fn prepare(data: &[(&str, &str, &str)]) -> (Vec<(String, String)>, Vec<String>) {
    let forms = data
        .iter()
        .map(|(word_class, full_form, _)| (word_class.to_string(), full_form.to_string()))
        .collect();
    let lemmas = data.iter().map(|(_, _, lemma)| lemma.to_string()).collect();
    (forms, lemmas)
}

fn fit(data: &[(&str, &str, &str)]) -> Trained {
    let (forms, lemmas) = prepare(data);
    let mut lemmatizer = Trained::new(None);
    lemmatizer.fit(&forms, &lemmas).unwrap();
    lemmatizer
}

#[test]
fn test_fit_whole_word_exception() {
    let lemmatizer = fit(&[
        ("sb.", "skaber", "skaber"),
        ("sb.", "venskaber", "venskab"),
    ]);

    assert_eq!(lemmatizer.lemmatize("sb.", "skaber", None).unwrap(), vec!["skaber"]);
    assert_eq!(
        lemmatizer.lemmatize("sb.", "venskaber", None).unwrap(),
        vec!["venskab"]
    );
}

#[test]
fn test_fit_whole_word_exception_with_shorter_form() {
    let lemmatizer = fit(&[
        ("sb.", "skab", "skab"),
        ("sb.", "skaber", "skaber"),
        ("sb.", "venskaber", "venskab"),
    ]);

    assert_eq!(lemmatizer.lemmatize("sb.", "skab", None).unwrap(), vec!["skab"]);
    assert_eq!(lemmatizer.lemmatize("sb.", "skaber", None).unwrap(), vec!["skaber"]);
    assert_eq!(
        lemmatizer.lemmatize("sb.", "venskaber", None).unwrap(),
        vec!["venskab"]
    );
}

#[test]
fn test_fit_ambiguous_form_keeps_both_lemmas() {
    let lemmatizer = fit(&[("sb.", "alen", "alen"), ("sb.", "alen", "ale")]);

    let mut lemmas = lemmatizer.lemmatize("sb.", "alen", None).unwrap();
    lemmas.sort();
    assert_eq!(lemmas, vec!["ale", "alen"]);
}

#[test]
fn test_fit_ambiguous_form_order_independent() {
    let lemmatizer = fit(&[("sb.", "alen", "ale"), ("sb.", "alen", "alen")]);

    let mut lemmas = lemmatizer.lemmatize("sb.", "alen", None).unwrap();
    lemmas.sort();
    assert_eq!(lemmas, vec!["ale", "alen"]);
}

#[test]
fn test_fit_recall_on_training_data() {
    let data = [
        ("sb.", "huset", "hus"),
        ("sb.", "husene", "hus"),
        ("sb.", "biler", "bil"),
        ("sb.", "bilerne", "bil"),
        ("sb.", "alen", "alen"),
        ("sb.", "alen", "ale"),
        ("vb.", "spiste", "spise"),
        ("vb.", "spiser", "spise"),
        ("adj.", "største", "stor"),
    ];
    let lemmatizer = fit(&data);

    // The learned (and pruned) rule set must still explain every training
    // pair, modulo genuine ambiguity.
    for (word_class, full_form, lemma) in data {
        let lemmas = lemmatizer.lemmatize(word_class, full_form, None).unwrap();
        assert!(
            lemmas.iter().any(|predicted| predicted == lemma),
            "{word_class} {full_form}: expected {lemma} in {lemmas:?}"
        );
    }
}

#[test]
fn test_fit_generalizes_to_unseen_forms() {
    let lemmatizer = fit(&[
        ("sb.", "biler", "bil"),
        ("sb.", "veje", "vej"),
        ("sb.", "huse", "hus"),
    ]);

    // "er" -> "" and "e" -> "" carry over to nouns never seen in training.
    assert_eq!(lemmatizer.lemmatize("sb.", "bøger", None).unwrap(), vec!["bøg"]);
    assert_eq!(lemmatizer.lemmatize("sb.", "dage", None).unwrap(), vec!["dag"]);
}

#[test]
fn test_unknown_class_round_trips() {
    let lemmatizer = fit(&[("sb.", "biler", "bil")]);

    assert_eq!(
        lemmatizer.lemmatize("interj.", "hej", None).unwrap(),
        vec!["hej"]
    );
}

#[test]
fn test_trait_query_without_history() {
    let lemmatizer = fit(&[("sb.", "biler", "bil")]);

    assert_eq!(
        Lemmatize::lemmatize(&lemmatizer, "sb.", "cykler").unwrap(),
        vec!["cykl"]
    );
}
