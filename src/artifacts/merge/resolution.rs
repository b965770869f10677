//! Three-way file resolution
//!
//! Every file present in the split point, the current head or the given
//! branch head is resolved on its own by comparing content hashes:
//!
//! | split | current | given | outcome                                   |
//! |-------|---------|-------|-------------------------------------------|
//! | b     | c       | g     | keep if c == g or g == b, take given if c == b, else conflict |
//! | b     | c       | -     | remove if c == b, else conflict           |
//! | b     | -       | g     | keep if g == b, else conflict             |
//! | -     | c       | g     | keep if c == g, else conflict             |
//! | -     | -       | g     | take given                                |
//! | *     | *       | *     | keep                                      |

use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

const CONFLICT_HEAD_MARKER: &str = "<<<<<<< HEAD\n";
const CONFLICT_SEPARATOR: &str = "=======\n";
const CONFLICT_END_MARKER: &str = ">>>>>>>\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileResolution {
    /// Leave the working file and the staging area alone
    Keep,
    /// Restore the given branch's version and stage it
    TakeGiven,
    /// Delete the file and mark it for removal
    Remove,
    /// Write conflict markers around both versions, leaving the file unstaged
    Conflict,
}

pub fn resolve_file(
    base: Option<&ObjectId>,
    current: Option<&ObjectId>,
    given: Option<&ObjectId>,
) -> FileResolution {
    match (base, current, given) {
        (Some(base), Some(current), Some(given)) => {
            if current == given || given == base {
                FileResolution::Keep
            } else if current == base {
                FileResolution::TakeGiven
            } else {
                FileResolution::Conflict
            }
        }
        (Some(base), Some(current), None) => {
            if current == base {
                FileResolution::Remove
            } else {
                FileResolution::Conflict
            }
        }
        (Some(base), None, Some(given)) => {
            if given == base {
                FileResolution::Keep
            } else {
                FileResolution::Conflict
            }
        }
        (None, Some(current), Some(given)) => {
            if current == given {
                FileResolution::Keep
            } else {
                FileResolution::Conflict
            }
        }
        (None, None, Some(_)) => FileResolution::TakeGiven,
        _ => FileResolution::Keep,
    }
}

/// Resolution of every file touched by a merge, in filename order
#[derive(Debug, Clone, Default)]
pub struct MergePlan {
    resolutions: BTreeMap<PathBuf, FileResolution>,
}

impl MergePlan {
    pub fn new(base: &Commit, current: &Commit, given: &Commit) -> Self {
        let files = base
            .tracked_files()
            .keys()
            .chain(current.tracked_files().keys())
            .chain(given.tracked_files().keys())
            .cloned()
            .collect::<BTreeSet<_>>();

        let resolutions = files
            .into_iter()
            .map(|file| {
                let resolution = resolve_file(
                    base.file_oid(&file),
                    current.file_oid(&file),
                    given.file_oid(&file),
                );
                (file, resolution)
            })
            .collect();

        MergePlan { resolutions }
    }

    pub fn resolutions(&self) -> impl Iterator<Item = (&PathBuf, FileResolution)> {
        self.resolutions
            .iter()
            .map(|(file, resolution)| (file, *resolution))
    }

    /// Files whose resolution actually changes something
    pub fn changes(&self) -> impl Iterator<Item = (&PathBuf, FileResolution)> {
        self.resolutions()
            .filter(|(_, resolution)| *resolution != FileResolution::Keep)
    }

    pub fn has_conflicts(&self) -> bool {
        self.resolutions
            .values()
            .any(|resolution| *resolution == FileResolution::Conflict)
    }
}

/// Body of a conflicted file; an absent side contributes nothing
pub fn conflict_content(current: Option<&[u8]>, given: Option<&[u8]>) -> Vec<u8> {
    let mut content = Vec::new();

    content.extend_from_slice(CONFLICT_HEAD_MARKER.as_bytes());
    push_side(&mut content, current);
    content.extend_from_slice(CONFLICT_SEPARATOR.as_bytes());
    push_side(&mut content, given);
    content.extend_from_slice(CONFLICT_END_MARKER.as_bytes());

    content
}

fn push_side(content: &mut Vec<u8>, side: Option<&[u8]>) {
    let Some(side) = side else {
        return;
    };

    content.extend_from_slice(side);
    if !side.is_empty() && !side.ends_with(b"\n") {
        content.push(b'\n');
    }
}
