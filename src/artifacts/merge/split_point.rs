//! Split point search for merges
//!
//! History here is a set of singly-linked parent chains, so the merge base of
//! two commits is the first commit on the given side's chain that also lies
//! on the current side's chain.
//!
//! ## Algorithm
//!
//! 1. Walk the current commit's chain (itself included) and mark every commit
//!    as visited from the current side
//! 2. If the given commit is already marked, the given branch is an ancestor
//!    of the current one and there is nothing to merge
//! 3. Otherwise walk the given commit's chain, marking commits as visited from
//!    the given side, and stop at the first commit visited from both sides
//!
//! This is a linear-ancestry merge base, not a general DAG lowest common
//! ancestor: it assumes a branch's history does not re-merge with itself
//! before the merge point.

use crate::artifacts::objects::object_id::ObjectId;
use bitflags::bitflags;
use std::collections::HashMap;
use std::fmt;

bitflags! {
    #[derive(Clone, Copy, PartialEq, Eq, Hash)]
    struct VisitState: u8 {
        const NONE = 0b00;
        const VISITED_FROM_CURRENT = 0b01;
        const VISITED_FROM_GIVEN = 0b10;
        const VISITED_FROM_BOTH = Self::VISITED_FROM_CURRENT.bits() | Self::VISITED_FROM_GIVEN.bits();
    }
}

impl fmt::Debug for VisitState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut flags = Vec::new();
        if self.contains(VisitState::VISITED_FROM_CURRENT) {
            flags.push("CURRENT");
        }
        if self.contains(VisitState::VISITED_FROM_GIVEN) {
            flags.push("GIVEN");
        }
        if flags.is_empty() {
            write!(f, "NONE")
        } else {
            write!(f, "{}", flags.join("|"))
        }
    }
}

/// Outcome of the split point search
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SplitPoint {
    /// The given commit already lies on the current chain
    GivenIsAncestor,
    /// The nearest commit shared by both chains
    Base(ObjectId),
}

/// Finds the split point between two commits
///
/// The parent loader returns the parent of a commit, or `None` for the root
/// and for unknown ids, so the finder works over any commit storage.
pub struct SplitPointFinder<ParentLoaderFn>
where
    ParentLoaderFn: Fn(&ObjectId) -> Option<ObjectId>,
{
    parent_loader: ParentLoaderFn,
}

impl<ParentLoaderFn> SplitPointFinder<ParentLoaderFn>
where
    ParentLoaderFn: Fn(&ObjectId) -> Option<ObjectId>,
{
    pub fn new(parent_loader: ParentLoaderFn) -> Self {
        Self { parent_loader }
    }

    /// Find where `given` split off from `current`
    ///
    /// Returns `None` only when the two chains share no commit at all.
    pub fn find(&self, current: &ObjectId, given: &ObjectId) -> Option<SplitPoint> {
        let mut states = HashMap::<ObjectId, VisitState>::new();

        for commit_id in self.chain(current) {
            states.insert(commit_id, VisitState::VISITED_FROM_CURRENT);
        }

        if states.contains_key(given) {
            tracing::trace!(%given, %current, "given commit is an ancestor of current");
            return Some(SplitPoint::GivenIsAncestor);
        }

        for commit_id in self.chain(given) {
            let state = states.entry(commit_id.clone()).or_insert(VisitState::NONE);
            *state |= VisitState::VISITED_FROM_GIVEN;

            tracing::trace!(commit = %commit_id, state = ?*state, "visited commit");

            if state.contains(VisitState::VISITED_FROM_BOTH) {
                return Some(SplitPoint::Base(commit_id));
            }
        }

        None
    }

    fn chain(&self, start: &ObjectId) -> impl Iterator<Item = ObjectId> + '_ {
        std::iter::successors(Some(start.clone()), move |commit_id| {
            (self.parent_loader)(commit_id)
        })
    }
}
