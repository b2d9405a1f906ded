use crate::layouts::{Backend, Group};

/// # THIS TRAIT IS AN OPEN EXTENSION POINT (unsafe)
/// * See [crate::api::GroupNew] for the corresponding public API.
/// * Implementors guarantee that every lane primitive they provide behaves
///   as one synchronous lock-step instruction over the whole group.
pub unsafe trait GroupNewImpl<B: Backend> {
    fn group_new_impl(width: usize) -> Group<B>;
}
