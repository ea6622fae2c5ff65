/// Id carried by a record that has never been saved.
/// Store-assigned ids start at 1.
pub const UNSAVED_ID: i32 = 0;

/// A persisted record keyed by a store-assigned integer id.
pub trait Entity: Clone + Send + Sync + 'static {
    fn id(&self) -> i32;

    fn assign_id(&mut self, id: i32);

    fn is_new(&self) -> bool {
        self.id() <= UNSAVED_ID
    }
}
