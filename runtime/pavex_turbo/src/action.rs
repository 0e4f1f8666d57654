use std::fmt;

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
/// How Turbo should apply a navigation to the browser history.
pub enum TurboAction {
    /// Push a new entry onto the history stack.
    ///
    /// This is the default.
    #[default]
    Active,
    /// Replace the current history entry.
    Replace,
}

impl TurboAction {
    /// The token Turbo expects in its `action` option.
    ///
    /// ```rust
    /// use pavex_turbo::TurboAction;
    ///
    /// assert_eq!(TurboAction::Active.as_str(), "active");
    /// assert_eq!(TurboAction::Replace.as_str(), "replace");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            TurboAction::Active => "active",
            TurboAction::Replace => "replace",
        }
    }
}

impl fmt::Display for TurboAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
