// Dictionary lifecycle. The host loads the three role dictionaries once;
// until they arrive, correction requests are refused rather than run
// against partial or empty dictionaries.

use crate::dictionary::Dictionaries;
use crate::error::CheckerError;
use crate::pipeline;
use crate::types::CorrectionResponse;

enum State {
    Uninitialized,
    Loading,
    Ready(Dictionaries),
    LoadFailed(String),
}

/// Correction context owning the dictionaries and their loading state.
///
/// Lifecycle: Uninitialized → Loading → Ready | LoadFailed. Once ready the
/// context is immutable and every call to [`GrammarContext::correct`] is
/// independent, so shared references can serve concurrent callers.
pub struct GrammarContext {
    state: State,
}

impl GrammarContext {
    pub fn new() -> Self {
        Self {
            state: State::Uninitialized,
        }
    }

    /// A context that is immediately ready with the given dictionaries.
    pub fn ready(dicts: Dictionaries) -> Self {
        Self {
            state: State::Ready(dicts),
        }
    }

    /// Mark the context as loading. Requests are refused until
    /// [`GrammarContext::finish_load`] is called.
    pub fn begin_load(&mut self) {
        self.state = State::Loading;
    }

    /// Record the outcome of the host's dictionary load.
    pub fn finish_load(&mut self, result: Result<Dictionaries, String>) {
        self.state = match result {
            Ok(dicts) => State::Ready(dicts),
            Err(reason) => State::LoadFailed(reason),
        };
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.state, State::Ready(_))
    }

    /// Correct a sentence, or refuse if the dictionaries are unavailable.
    pub fn correct(&self, sentence: &str) -> Result<CorrectionResponse, CheckerError> {
        match &self.state {
            State::Ready(dicts) => Ok(pipeline::correct(sentence, dicts)),
            State::LoadFailed(reason) => {
                Err(CheckerError::DictionaryUnavailable(reason.clone()))
            }
            State::Uninitialized | State::Loading => Err(CheckerError::NotReady),
        }
    }
}

impl Default for GrammarContext {
    fn default() -> Self {
        Self::new()
    }
}
