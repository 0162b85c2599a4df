use super::*;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Default)]
struct Calls {
    loaded: Vec<String>,
    tokenized: Vec<(String, usize)>,
    loss_inputs: Vec<Vec<u32>>,
}

/// One token per whitespace-separated word; loss is a fixed value.
struct StubHub {
    loss: f64,
    fail_load: bool,
    fail_loss_on: Option<&'static str>,
    empty_tokens: bool,
    calls: Rc<RefCell<Calls>>,
}

impl StubHub {
    fn new(loss: f64) -> Self {
        Self {
            loss,
            fail_load: false,
            fail_loss_on: None,
            empty_tokens: false,
            calls: Rc::new(RefCell::new(Calls::default())),
        }
    }
}

struct StubModel {
    loss: f64,
    fail_loss_on: Option<&'static str>,
    empty_tokens: bool,
    calls: Rc<RefCell<Calls>>,
}

impl LanguageModelHub for StubHub {
    fn load(&self, model_name: &str) -> Result<Box<dyn LanguageModel>, BackendError> {
        self.calls.borrow_mut().loaded.push(model_name.to_string());
        if self.fail_load {
            return Err(BackendError::Status {
                status: 404,
                body: "no such model".to_string(),
            });
        }
        Ok(Box::new(StubModel {
            loss: self.loss,
            fail_loss_on: self.fail_loss_on,
            empty_tokens: self.empty_tokens,
            calls: Rc::clone(&self.calls),
        }))
    }
}

impl LanguageModel for StubModel {
    fn name(&self) -> &str {
        "stub"
    }

    fn tokenize(&self, text: &str, max_length: usize) -> Result<Vec<u32>, BackendError> {
        self.calls
            .borrow_mut()
            .tokenized
            .push((text.to_string(), max_length));
        if self.empty_tokens {
            return Ok(Vec::new());
        }
        if Some(text) == self.fail_loss_on {
            // Marker id picked up by `loss`.
            return Ok(vec![u32::MAX]);
        }
        let ids: Vec<u32> = (0..text.split_whitespace().count() as u32).collect();
        Ok(ids.into_iter().take(max_length).collect())
    }

    fn loss(&self, input_ids: &[u32]) -> Result<f64, BackendError> {
        self.calls.borrow_mut().loss_inputs.push(input_ids.to_vec());
        if input_ids.contains(&u32::MAX) {
            return Err(BackendError::Malformed("inference failed".to_string()));
        }
        Ok(self.loss)
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_blank_candidates_are_skipped() {
    let hub = StubHub::new(2.0);
    let score = try_evaluate_perplexity(&hub, &strings(&["", "   ", "hello"]), "gpt2", 512).unwrap();

    assert_eq!(score.scored(), 1);
    assert_eq!(score.skipped, 2);
    let calls = hub.calls.borrow();
    assert_eq!(calls.tokenized, vec![("hello".to_string(), 512)]);
    assert_eq!(calls.loss_inputs.len(), 1);
}

#[test]
fn test_perplexity_divides_loss_by_token_count() {
    let hub = StubHub::new(3.0);
    let score = try_evaluate_perplexity(&hub, &strings(&["one two three"]), "gpt2", 512).unwrap();
    let expected = (3.0f64 / 3.0).exp();
    assert!((score.average - expected).abs() < 1e-12);
}

#[test]
fn test_average_over_scored_candidates() {
    let hub = StubHub::new(2.0);
    let candidates = strings(&["a", "a b", ""]);
    let score = try_evaluate_perplexity(&hub, &candidates, "gpt2", 512).unwrap();

    let expected = (2.0f64.exp() + 1.0f64.exp()) / 2.0;
    assert!((score.average - expected).abs() < 1e-12);
    assert_eq!(score.per_candidate.len(), 2);
}

#[test]
fn test_infinite_loss_carries_into_average() {
    let hub = StubHub::new(f64::INFINITY);
    let score = try_evaluate_perplexity(&hub, &strings(&["a b", "c"]), "gpt2", 512).unwrap();
    assert_eq!(score.average, f64::INFINITY);
    assert_eq!(score.scored(), 2);
}

#[test]
fn test_ids_are_both_input_and_labels_and_truncated() {
    let hub = StubHub::new(1.0);
    let long = vec!["w"; 600].join(" ");
    let score = try_evaluate_perplexity(&hub, &[long], "gpt2", MAX_SEQUENCE_LENGTH).unwrap();

    let calls = hub.calls.borrow();
    assert_eq!(calls.tokenized[0].1, 512);
    assert_eq!(calls.loss_inputs[0].len(), 512);
    let expected = (1.0f64 / 512.0).exp();
    assert!((score.average - expected).abs() < 1e-12);
}

#[test]
fn test_empty_list_yields_nan() {
    let hub = StubHub::new(1.0);
    assert!(evaluate_perplexity(&hub, &[], "gpt2", 512).is_nan());
}

#[test]
fn test_all_blank_list_yields_nan() {
    let hub = StubHub::new(1.0);
    let out = evaluate_perplexity(&hub, &strings(&["", " ", "\t\n"]), "gpt2", 512);
    assert!(out.is_nan());
    assert!(hub.calls.borrow().tokenized.is_empty());
}

#[test]
fn test_load_failure_yields_nan() {
    let mut hub = StubHub::new(1.0);
    hub.fail_load = true;
    let candidates = strings(&["hello"]);

    assert!(try_evaluate_perplexity(&hub, &candidates, "missing", 512).is_err());
    assert!(evaluate_perplexity(&hub, &candidates, "missing", 512).is_nan());
    assert_eq!(hub.calls.borrow().loaded, vec!["missing".to_string(); 2]);
}

#[test]
fn test_inference_failure_discards_whole_call() {
    let mut hub = StubHub::new(1.0);
    hub.fail_loss_on = Some("bad");
    let out = evaluate_perplexity(&hub, &strings(&["good", "bad", "good"]), "gpt2", 512);
    assert!(out.is_nan());
}

#[test]
fn test_empty_tokenization_is_an_error() {
    let mut hub = StubHub::new(1.0);
    hub.empty_tokens = true;
    let err = try_evaluate_perplexity(&hub, &strings(&["hello"]), "gpt2", 512).unwrap_err();
    assert!(matches!(err, BackendError::EmptyTokens));
}

#[test]
fn test_sequence_perplexity_formula() {
    assert!((sequence_perplexity(0.0, 4) - 1.0).abs() < 1e-12);
    assert!((sequence_perplexity(8.0, 4) - 2.0f64.exp()).abs() < 1e-12);
}

#[test]
fn test_with_default_records_load_failure() {
    let mut hub = StubHub::new(1.0);
    hub.fail_load = true;
    let out = perplexity_with_default(&hub, &strings(&["hello"]), "gpt2", 512);
    assert!(out.failure.is_some());
    assert!(out.value.average.is_nan());
    assert_eq!(out.value.scored(), 0);
    assert!(out.failure.unwrap().contains("404"));
}
