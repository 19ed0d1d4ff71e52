/// Shallow partial-merge capability for a state type.
///
/// A `Patch` carries a subset of the state's fields; merging overwrites the
/// fields the patch carries and preserves the rest. The merge is shallow by
/// contract: a field present in the patch replaces the current field
/// wholesale, even when both are nested structures. Implementations must
/// not descend into nested values — deepening the merge changes observable
/// behavior for every subscriber.
///
/// # Example
///
/// ```
/// use canister::Merge;
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Settings {
///     volume: u8,
///     theme: String,
/// }
///
/// #[derive(Default)]
/// struct SettingsPatch {
///     volume: Option<u8>,
///     theme: Option<String>,
/// }
///
/// impl Merge for Settings {
///     type Patch = SettingsPatch;
///
///     fn merge(&self, patch: SettingsPatch) -> Self {
///         Self {
///             volume: patch.volume.unwrap_or(self.volume),
///             theme: patch.theme.unwrap_or_else(|| self.theme.clone()),
///         }
///     }
/// }
///
/// let current = Settings { volume: 7, theme: "dark".to_string() };
/// let next = current.merge(SettingsPatch { volume: Some(9), ..Default::default() });
/// assert_eq!(next, Settings { volume: 9, theme: "dark".to_string() });
/// ```
pub trait Merge: Sized {
    /// The partial form of this state: every field optional, absent meaning
    /// "keep the current value".
    type Patch;

    /// Produce the next state by overwriting the fields the patch carries.
    fn merge(&self, patch: Self::Patch) -> Self;
}
