/// A lightweight, serializable snapshot of the paging state.
///
/// This is useful for restoring a carousel across sessions without coupling
/// the engine to any specific UI framework. With `feature = "serde"`, this
/// type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PagingState {
    pub requested_index: usize,
    pub settled_index: usize,
    pub is_scrolling: bool,
}
