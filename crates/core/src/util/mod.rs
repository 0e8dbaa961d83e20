pub mod unit;

/// A macro to measure the evaluation time of an expression. Wraps an
/// expression, logs the elapsed time at the given level (default `Debug`),
/// and evaluates to the value of the expression.
#[macro_export]
macro_rules! timed {
    ($label:expr, $ex:expr) => {
        $crate::timed!($label, log::Level::Debug, $ex)
    };
    ($label:expr, $log_level:expr, $ex:expr) => {{
        let now = std::time::Instant::now();
        let value = $ex;
        let elapsed = now.elapsed();
        log::log!($log_level, "{} took {} ms", $label, elapsed.as_millis());
        value
    }};
}

/// Floor division for floats that clamps negative results to zero. Used to
/// count how many tiles fit in a span, where a too-small span means none.
pub fn fit_count(span: f64, pitch: f64) -> usize {
    let count = (span / pitch).floor();
    if count > 0.0 {
        count as usize
    } else {
        0
    }
}
