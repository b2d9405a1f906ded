use crate::{
    api::GroupNew,
    layouts::{Backend, Group},
    oep::GroupNewImpl,
};

impl<B> GroupNew<B> for Group<B>
where
    B: Backend + GroupNewImpl<B>,
{
    fn new(width: usize) -> Group<B> {
        B::group_new_impl(width)
    }
}
