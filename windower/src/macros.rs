// Logging shims. With `feature = "tracing"` these forward to `tracing` under the
// `windower` target; otherwise they expand to an empty block.

macro_rules! vtrace {
    ($($tt:tt)*) => {{
        #[cfg(feature = "tracing")]
        {
            tracing::trace!(target: "windower", $($tt)*);
        }
    }};
}

macro_rules! vdebug {
    ($($tt:tt)*) => {{
        #[cfg(feature = "tracing")]
        {
            tracing::debug!(target: "windower", $($tt)*);
        }
    }};
}

macro_rules! vwarn {
    ($($tt:tt)*) => {{
        #[cfg(feature = "tracing")]
        {
            tracing::warn!(target: "windower", $($tt)*);
        }
    }};
}
