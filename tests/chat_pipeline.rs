//! End-to-end pipeline tests: corpus → model → selector → handle.

use std::collections::HashSet;
use std::sync::Arc;

use rand::SeedableRng;
use rand::rngs::StdRng;

use retort::corpus::{Corpus, CorpusRow};
use retort::error::RetortError;
use retort::model::IntentModel;
use retort::selector::{DEFAULT_FALLBACK, ResponseSelector};
use retort::service::ChatService;

fn row(pattern: &str, intent: &str, response: &str) -> CorpusRow {
    CorpusRow {
        pattern: pattern.to_string(),
        intent: intent.to_string(),
        response: response.to_string(),
    }
}

fn greeting_corpus() -> Corpus {
    Corpus::from_rows(vec![
        row("hi", "greeting", "Hello!"),
        row("hello", "greeting", "Hi there!"),
        row("bye", "farewell", "Goodbye!"),
    ])
}

fn seeded_selector(seed: u64) -> ResponseSelector {
    ResponseSelector::with_rng(Box::new(StdRng::seed_from_u64(seed)))
}

#[test]
fn predict_recovers_trained_greeting() {
    let corpus = greeting_corpus();
    let model = IntentModel::fit(&corpus.training_set()).unwrap();

    assert_eq!(model.predict("hi").unwrap(), "greeting");
    assert_eq!(model.predict("bye").unwrap(), "farewell");
}

#[test]
fn select_greeting_draws_from_pool() {
    let corpus = greeting_corpus();
    let selector = seeded_selector(3);

    let response = selector.select("greeting", &corpus);
    assert!(response == "Hello!" || response == "Hi there!");
}

#[test]
fn gibberish_stays_inside_trained_labels() {
    let corpus = greeting_corpus();
    let model = IntentModel::fit(&corpus.training_set()).unwrap();

    let intent = model.predict("unknown gibberish xyz").unwrap();
    assert!(intent == "greeting" || intent == "farewell");
}

#[test]
fn untrained_label_is_never_predicted() {
    let corpus = greeting_corpus();
    let model = IntentModel::fit(&corpus.training_set()).unwrap();

    // "farewell2" never appears in training, so no input can reach it.
    for input in ["hi", "bye", "farewell2", "", "completely new words"] {
        assert_ne!(model.predict(input).unwrap(), "farewell2");
    }
}

#[test]
fn empty_corpus_fails_fast_at_fit() {
    let corpus = Corpus::from_rows(vec![]);
    let err = IntentModel::fit(&corpus.training_set()).unwrap_err();

    assert!(matches!(err, RetortError::Training(_)));
}

#[test]
fn select_fallback_iff_pool_is_empty() {
    let corpus = greeting_corpus();
    let selector = seeded_selector(5);

    assert_ne!(selector.select("greeting", &corpus), DEFAULT_FALLBACK);
    assert_eq!(selector.select("never-trained", &corpus), DEFAULT_FALLBACK);
}

#[test]
fn repeated_draws_exercise_multiple_responses() {
    let corpus = greeting_corpus();
    let selector = seeded_selector(11);

    let seen: HashSet<String> = (0..200)
        .map(|_| selector.select("greeting", &corpus))
        .collect();
    assert!(seen.len() > 1);
}

#[test]
fn handle_empty_message_returns_some_string() {
    let corpus = greeting_corpus();
    let model = IntentModel::fit(&corpus.training_set()).unwrap();
    let service = ChatService::new(model, corpus, seeded_selector(9));

    let response = service.handle("");
    assert!(!response.is_empty());
}

#[test]
fn predict_is_pure_for_a_fitted_model() {
    let corpus = greeting_corpus();
    let model = IntentModel::fit(&corpus.training_set()).unwrap();

    for input in ["hi", "", "mixed case HI", "out of vocabulary stuff"] {
        let first = model.predict(input).unwrap().to_string();
        let second = model.predict(input).unwrap().to_string();
        assert_eq!(first, second);
    }
}

#[test]
fn memorization_holds_for_majority_of_training_set() {
    let corpus = Corpus::from_reader(
        "pattern,intent,response\n\
         hi,greeting,Hello!\n\
         hello there,greeting,Hi!\n\
         good morning,greeting,Morning!\n\
         bye,farewell,Goodbye!\n\
         see you later,farewell,Later!\n\
         goodbye friend,farewell,Bye!\n\
         thanks a lot,thanks,Welcome!\n\
         thank you,thanks,Any time!\n"
            .as_bytes(),
    )
    .unwrap();
    let samples = corpus.training_set();
    let model = IntentModel::fit(&samples).unwrap();

    let correct = samples
        .iter()
        .filter(|s| model.predict(&s.pattern).unwrap() == s.intent)
        .count();
    assert!(correct * 2 > samples.len());
}

#[test]
fn duplicate_rows_weight_the_draw() {
    let corpus = Corpus::from_rows(vec![
        row("hi", "greeting", "Hello!"),
        row("hey", "greeting", "Hello!"),
        row("hello", "greeting", "Hi there!"),
    ]);
    let selector = seeded_selector(17);

    let hello_count = (0..300)
        .filter(|_| selector.select("greeting", &corpus) == "Hello!")
        .count();
    // "Hello!" appears twice in the pool, so it should win well over a
    // third of the draws.
    assert!(hello_count > 120, "Hello! drawn only {hello_count}/300");
}

#[test]
fn shared_service_answers_concurrent_callers() {
    let corpus = greeting_corpus();
    let model = IntentModel::fit(&corpus.training_set()).unwrap();
    let service = Arc::new(ChatService::new(model, corpus, ResponseSelector::new()));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let service = Arc::clone(&service);
            std::thread::spawn(move || {
                for _ in 0..50 {
                    assert!(!service.handle("hi").is_empty());
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}
