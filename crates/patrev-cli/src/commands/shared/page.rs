use patrev_views::PageState;

/// The loaded value of a page, or the page's failure as an error.
pub fn loaded<'a, T>(state: &'a PageState<T>, what: &str) -> anyhow::Result<&'a T> {
    match state {
        PageState::Ready(value) => Ok(value),
        PageState::NotFound => anyhow::bail!("{what} not found"),
        PageState::Error(message) => anyhow::bail!("{message}"),
        PageState::Loading => anyhow::bail!("{what} did not finish loading"),
    }
}
