// ---------------------------------------------------------------------------
// Remote
// ---------------------------------------------------------------------------

/// Lifecycle of remotely fetched content, as a single sum type instead of
/// parallel `loading`/`error` flags.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Remote<T> {
    /// Nothing requested yet.
    #[default]
    Idle,
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> Remote<T> {
    pub fn is_idle(&self) -> bool {
        matches!(self, Remote::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Remote::Loading)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Remote::Failed(_))
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Remote::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Remote<U> {
        match self {
            Remote::Idle => Remote::Idle,
            Remote::Loading => Remote::Loading,
            Remote::Ready(value) => Remote::Ready(f(value)),
            Remote::Failed(reason) => Remote::Failed(reason),
        }
    }
}

impl<T, E: std::fmt::Display> From<std::result::Result<T, E>> for Remote<T> {
    fn from(result: std::result::Result<T, E>) -> Self {
        match result {
            Ok(value) => Remote::Ready(value),
            Err(err) => Remote::Failed(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_idle() {
        let remote: Remote<u32> = Remote::default();
        assert!(remote.is_idle());
    }

    #[test]
    fn result_conversion() {
        let ok: Remote<u32> = Ok::<_, crate::error::CmsError>(4).into();
        assert_eq!(ok.ready(), Some(&4));

        let err: Remote<u32> = Err::<u32, _>(crate::error::CmsError::MissingBaseUrl).into();
        assert!(err.is_failed());
    }

    #[test]
    fn map_preserves_failure() {
        let failed: Remote<u32> = Remote::Failed("boom".to_string());
        assert_eq!(failed.map(|n| n + 1), Remote::Failed("boom".to_string()));
    }
}
