//! A calculator session owning its state and completion callback.

use std::sync::Arc;

use super::action::CalculatorAction;
use super::model::CalculatorState;
use super::sink::CompletionSink;
use super::transition::transition;

/// One calculator session.
///
/// Actions are applied one at a time, each fully completed before
/// `dispatch` returns. Sessions share nothing with each other.
#[derive(Default)]
pub struct Calculator {
    state: CalculatorState,
    on_complete: Option<Arc<dyn CompletionSink + Send + Sync>>,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the sink notified after each successful, non-zero calculation.
    pub fn set_on_complete(&mut self, sink: impl CompletionSink + Send + Sync + 'static) {
        self.on_complete = Some(Arc::new(sink));
    }

    /// Builder form of [`set_on_complete`](Self::set_on_complete).
    pub fn with_on_complete(mut self, sink: impl CompletionSink + Send + Sync + 'static) -> Self {
        self.set_on_complete(sink);
        self
    }

    /// The current state snapshot.
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Apply a single action.
    pub fn dispatch(&mut self, action: CalculatorAction) -> &CalculatorState {
        let sink = self
            .on_complete
            .as_deref()
            .map(|sink| sink as &dyn CompletionSink);
        let next = transition(&self.state, &action, sink);

        if next == self.state {
            tracing::debug!(%action, "action left state unchanged");
        } else {
            tracing::debug!(
                %action,
                expression = %next.expression(),
                result = %next.result(),
                has_result = next.has_result(),
                error = next.error(),
                "dispatched"
            );
        }

        self.state = next;
        &self.state
    }

    /// Apply actions in order.
    pub fn dispatch_all(
        &mut self,
        actions: impl IntoIterator<Item = CalculatorAction>,
    ) -> &CalculatorState {
        for action in actions {
            self.dispatch(action);
        }
        &self.state
    }

    /// Apply an action given by kind name; unknown kinds leave the state as is.
    pub fn dispatch_kind(&mut self, kind: &str, value: Option<&str>) -> &CalculatorState {
        match CalculatorAction::from_kind(kind, value) {
            Some(action) => self.dispatch(action),
            None => {
                tracing::debug!(kind, "ignoring unknown action");
                &self.state
            }
        }
    }
}
