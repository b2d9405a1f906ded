use crate::{
    api::{LaneBroadcast, LaneRotateUp, LaneRotateUpZero, LaneVote},
    layouts::{Backend, Group, LaneMask},
    oep::{LaneBroadcastImpl, LaneRotateUpImpl, LaneRotateUpZeroImpl, LaneVoteImpl},
};

impl<B> LaneBroadcast<B> for Group<B>
where
    B: Backend + LaneBroadcastImpl<B>,
{
    fn lane_broadcast(&self, reg: &[B::Word], src: usize) -> B::Word {
        B::lane_broadcast_impl(self, reg, src)
    }
}

impl<B> LaneRotateUp<B> for Group<B>
where
    B: Backend + LaneRotateUpImpl<B>,
{
    fn lane_rotate_up(&self, reg: &mut [B::Word], distance: usize) {
        B::lane_rotate_up_impl(self, reg, distance)
    }
}

impl<B> LaneRotateUpZero<B> for Group<B>
where
    B: Backend + LaneRotateUpZeroImpl<B>,
{
    fn lane_rotate_up_zero(&self, reg: &mut [B::Word], distance: usize) {
        B::lane_rotate_up_zero_impl(self, reg, distance)
    }
}

impl<B> LaneVote<B> for Group<B>
where
    B: Backend + LaneVoteImpl<B>,
{
    fn lane_vote<F>(&self, reg: &[B::Word], pred: F) -> LaneMask
    where
        F: Fn(usize, B::Word) -> bool,
    {
        B::lane_vote_impl(self, reg, pred)
    }
}
