//! Sub-union graph: cycle detection and leaf flattening.
//!
//! Unions form a graph whose edges are `Member::Union` entries. The graph
//! must be acyclic; each union's leaf set is the ordered, de-duplicated
//! union of its direct variants and the leaves of its sub-unions.

use rustc_hash::FxHashSet;

use sealed_ir::{InvalidVariantReason, Name, SealedError, SealedResult, VariantId};
use sealed_stack::ensure_sufficient_stack;

use crate::registry::Member;

#[derive(Copy, Clone, PartialEq, Eq)]
enum Mark {
    Unvisited,
    InProgress,
    Done,
}

/// Reject a union that contains itself through its sub-unions.
///
/// The error path lists the unions along the cycle, starting and ending with
/// the same name.
pub(crate) fn check_cycles(names: &[Name], members: &[Vec<Member>]) -> SealedResult<()> {
    let mut marks = vec![Mark::Unvisited; members.len()];
    let mut stack = Vec::new();
    for start in 0..members.len() {
        if marks[start] == Mark::Unvisited {
            visit(start, members, &mut marks, &mut stack).map_err(|cycle| {
                let path: Vec<Name> = cycle.iter().map(|&i| names[i].clone()).collect();
                let scope = path.first().cloned().unwrap_or_else(|| names[start].clone());
                SealedError::invalid(scope, InvalidVariantReason::CyclicUnion { path })
            })?;
        }
    }
    Ok(())
}

/// Depth-first walk; on a back edge returns the cycle as union indices.
fn visit(
    node: usize,
    members: &[Vec<Member>],
    marks: &mut [Mark],
    stack: &mut Vec<usize>,
) -> Result<(), Vec<usize>> {
    ensure_sufficient_stack(|| {
        marks[node] = Mark::InProgress;
        stack.push(node);
        for member in &members[node] {
            let Member::Union(sub) = *member else {
                continue;
            };
            let sub = sub.index();
            match marks.get(sub).copied() {
                Some(Mark::InProgress) => {
                    let from = stack.iter().position(|&n| n == sub).unwrap_or(0);
                    let mut cycle = stack[from..].to_vec();
                    cycle.push(sub);
                    return Err(cycle);
                }
                Some(Mark::Unvisited) => visit(sub, members, marks, stack)?,
                Some(Mark::Done) | None => {}
            }
        }
        stack.pop();
        marks[node] = Mark::Done;
        Ok(())
    })
}

/// Flattened leaf set of every union, indexed like `members`.
///
/// Order follows member declaration order with sub-unions expanded in place;
/// a variant reachable twice keeps its first position. Must only be called
/// after [`check_cycles`] succeeded.
pub(crate) fn collect_leaves(members: &[Vec<Member>]) -> Vec<Vec<VariantId>> {
    let mut memo: Vec<Option<Vec<VariantId>>> = vec![None; members.len()];
    for union in 0..members.len() {
        leaves_of(union, members, &mut memo);
    }
    memo.into_iter().map(Option::unwrap_or_default).collect()
}

fn leaves_of(
    union: usize,
    members: &[Vec<Member>],
    memo: &mut [Option<Vec<VariantId>>],
) -> Vec<VariantId> {
    if let Some(done) = &memo[union] {
        return done.clone();
    }
    let leaves = ensure_sufficient_stack(|| {
        let mut seen = FxHashSet::default();
        let mut leaves = Vec::new();
        for member in &members[union] {
            match *member {
                Member::Variant(v) => {
                    if seen.insert(v) {
                        leaves.push(v);
                    }
                }
                Member::Union(sub) if sub.index() < members.len() => {
                    for v in leaves_of(sub.index(), members, memo) {
                        if seen.insert(v) {
                            leaves.push(v);
                        }
                    }
                }
                Member::Union(_) => {}
            }
        }
        leaves
    });
    memo[union] = Some(leaves.clone());
    leaves
}

#[cfg(test)]
mod tests;
