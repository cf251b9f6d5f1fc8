//! Notification of completed calculations.

/// Receives every successful, non-zero calculation.
///
/// Called synchronously from inside a transition. Implementations must not
/// block; the calculator never looks at the outcome of a notification.
pub trait CompletionSink {
    fn calculation_completed(&self, expression: &str, result: &str);
}

impl<F> CompletionSink for F
where
    F: Fn(&str, &str),
{
    fn calculation_completed(&self, expression: &str, result: &str) {
        self(expression, result)
    }
}
