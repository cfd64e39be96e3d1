use crate::HostEvent;

/// Why [`crate::mount`] failed. No subscription outlives a failed mount.
#[derive(Debug, thiserror::Error)]
pub enum MountError<E> {
    #[error("scroll host has no container attached")]
    Detached,
    #[error("failed to subscribe to {event} events")]
    Subscribe {
        event: HostEvent,
        #[source]
        source: E,
    },
}
