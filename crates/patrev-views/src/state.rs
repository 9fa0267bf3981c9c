//! Page load state and the stale-response guard.

use patrev_client::ClientError;

/// What a page is currently showing.
///
/// `Loading` moves to exactly one of the other three. `Ready` stays `Ready`
/// across mutations; only a reload returns to `Loading`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageState<T> {
    Loading,
    Ready(T),
    NotFound,
    Error(String),
}

impl<T> PageState<T> {
    /// Map a load result: a 404 becomes `NotFound`, any other failure
    /// becomes `Error` with the failure's message.
    #[must_use]
    pub fn from_result(result: Result<T, ClientError>) -> Self {
        match result {
            Ok(value) => Self::Ready(value),
            Err(error) if error.is_not_found() => Self::NotFound,
            Err(error) => Self::Error(error.to_string()),
        }
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    #[must_use]
    pub const fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub const fn ready_mut(&mut self) -> Option<&mut T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// Identifies one load attempt. Only the newest ticket may apply its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// Generation counter plus mounted flag.
#[derive(Debug)]
pub struct LoadGuard {
    generation: u64,
    mounted: bool,
}

impl Default for LoadGuard {
    fn default() -> Self {
        Self {
            generation: 0,
            mounted: true,
        }
    }
}

impl LoadGuard {
    /// Start a new load, invalidating every earlier ticket.
    pub const fn begin(&mut self) -> LoadTicket {
        self.generation += 1;
        LoadTicket(self.generation)
    }

    /// Whether a result fetched under `ticket` may still be applied.
    #[must_use]
    pub const fn accepts(&self, ticket: LoadTicket) -> bool {
        self.mounted && ticket.0 == self.generation
    }

    /// The page went away; every outstanding result is dropped.
    pub const fn unmount(&mut self) {
        self.mounted = false;
    }

    #[must_use]
    pub const fn is_mounted(&self) -> bool {
        self.mounted
    }
}
