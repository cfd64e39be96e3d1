// Logging shims. With `feature = "tracing"` these forward to `tracing` under the
// `windower_adapter` target; otherwise they expand to an empty block.

macro_rules! vtrace {
    ($($tt:tt)*) => {{
        #[cfg(feature = "tracing")]
        {
            tracing::trace!(target: "windower_adapter", $($tt)*);
        }
    }};
}

macro_rules! vdebug {
    ($($tt:tt)*) => {{
        #[cfg(feature = "tracing")]
        {
            tracing::debug!(target: "windower_adapter", $($tt)*);
        }
    }};
}

macro_rules! vwarn {
    ($($tt:tt)*) => {{
        #[cfg(feature = "tracing")]
        {
            tracing::warn!(target: "windower_adapter", $($tt)*);
        }
    }};
}
