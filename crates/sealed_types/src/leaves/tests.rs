use super::*;
use pretty_assertions::assert_eq;
use sealed_ir::UnionId;

fn v(raw: u32) -> Member {
    Member::Variant(VariantId::from_raw(raw))
}

fn u(raw: u32) -> Member {
    Member::Union(UnionId::from_raw(raw))
}

fn names(list: &[&str]) -> Vec<Name> {
    list.iter().map(|n| Name::new(n)).collect()
}

#[test]
fn test_leaves_flatten_sub_unions_in_place() {
    // Outer = [v0, Inner, v3]; Inner = [v1, v2]
    let members = vec![vec![v(0), u(1), v(3)], vec![v(1), v(2)]];
    let leaves = collect_leaves(&members);
    let raw: Vec<Vec<u32>> = leaves
        .iter()
        .map(|l| l.iter().map(|id| id.raw()).collect())
        .collect();
    assert_eq!(raw, vec![vec![0, 1, 2, 3], vec![1, 2]]);
}

#[test]
fn test_leaves_deduplicate_shared_variants() {
    // Both = [A, B]; A = [v0, v1]; B = [v1, v2]
    let members = vec![vec![u(1), u(2)], vec![v(0), v(1)], vec![v(1), v(2)]];
    let leaves = collect_leaves(&members);
    let raw: Vec<u32> = leaves[0].iter().map(|id| id.raw()).collect();
    assert_eq!(raw, vec![0, 1, 2]);
}

#[test]
fn test_acyclic_graph_passes() {
    let members = vec![vec![u(1), u(2)], vec![u(2)], vec![v(0)]];
    assert!(check_cycles(&names(&["A", "B", "C"]), &members).is_ok());
}

#[test]
fn test_cycle_reports_path() {
    // A -> B -> C -> B
    let members = vec![vec![u(1)], vec![u(2)], vec![v(0), u(1)]];
    let err = check_cycles(&names(&["A", "B", "C"]), &members).unwrap_err();
    assert_eq!(
        err,
        SealedError::invalid(
            "B",
            InvalidVariantReason::CyclicUnion {
                path: names(&["B", "C", "B"])
            }
        )
    );
}

#[test]
fn test_self_membership_is_a_cycle() {
    let members = vec![vec![v(0), u(0)]];
    let err = check_cycles(&names(&["Loop"]), &members).unwrap_err();
    assert_eq!(err.to_string(), "invalid variant in `Loop`: union contains itself: Loop -> Loop");
}
