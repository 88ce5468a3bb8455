use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::core::MatchVerdict;
use crate::matching::{AnswerMatcher, MatchOptions, Normalizer};

/// Python wrapper for AnswerMatcher
#[pyclass]
struct Matcher {
    matcher: AnswerMatcher,
}

#[pymethods]
impl Matcher {
    /// Create a matcher, optionally with custom thresholds
    #[new]
    #[pyo3(signature = (fuzzy_threshold=None, partial_threshold=None, fold_diacritics=false))]
    fn new(
        fuzzy_threshold: Option<f64>,
        partial_threshold: Option<f64>,
        fold_diacritics: bool,
    ) -> Self {
        let defaults = MatchOptions::default();
        let options = MatchOptions {
            fuzzy_threshold: fuzzy_threshold.unwrap_or(defaults.fuzzy_threshold),
            partial_threshold: partial_threshold.unwrap_or(defaults.partial_threshold),
            fold_diacritics,
        };
        Self {
            matcher: AnswerMatcher::new(options),
        }
    }

    /// Check an answer against acceptable titles
    fn check(&self, user_answer: &str, titles: Vec<String>) -> PyResult<PyObject> {
        let verdict = self.matcher.check(user_answer, &titles);
        Python::with_gil(|py| verdict_to_py(py, &verdict))
    }

    fn normalize(&self, text: &str) -> String {
        self.matcher.normalizer().normalize(text)
    }
}

/// Convert MatchVerdict to Python dict
fn verdict_to_py(py: Python, verdict: &MatchVerdict) -> PyResult<PyObject> {
    let dict = PyDict::new(py);
    dict.set_item("is_correct", verdict.is_correct())?;
    dict.set_item("confidence", verdict.confidence())?;
    dict.set_item("match_type", verdict.match_type().as_str())?;
    Ok(dict.into())
}

/// Normalize a title or answer
#[pyfunction]
#[pyo3(signature = (text, fold_diacritics=false))]
fn normalize(text: &str, fold_diacritics: bool) -> String {
    Normalizer { fold_diacritics }.normalize(text)
}

/// Match an answer with the default thresholds
#[pyfunction]
fn match_answer(py: Python, user_answer: &str, titles: Vec<String>) -> PyResult<PyObject> {
    let verdict = crate::matching::match_answer(user_answer, &titles);
    verdict_to_py(py, &verdict)
}

/// Points for one attempt
#[pyfunction]
fn score_for_attempt(elapsed_secs: f64, is_correct: bool) -> u32 {
    crate::scoring::score_for_attempt(elapsed_secs, is_correct)
}

/// Time bonus shown next to the score
#[pyfunction]
fn time_bonus(elapsed_secs: f64) -> u32 {
    crate::scoring::time_bonus(elapsed_secs)
}

/// Python module
#[pymodule]
fn guess_frame_engine(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_class::<Matcher>()?;
    m.add_function(wrap_pyfunction!(normalize, m)?)?;
    m.add_function(wrap_pyfunction!(match_answer, m)?)?;
    m.add_function(wrap_pyfunction!(score_for_attempt, m)?)?;
    m.add_function(wrap_pyfunction!(time_bonus, m)?)?;
    m.add("__version__", crate::VERSION)?;
    Ok(())
}
