//! Ordering rules for workflow and rig step lists.
//!
//! Each owner (a workflow or a rig) keeps its steps under a sparse integer
//! key, `step_order`, unique per owner. Gaps are allowed and never
//! compacted. Reordering is always a swap of exactly two keys between a step
//! and its immediate neighbour, so a list never needs renumbering.
//!
//! The database layer locates the target and its neighbour; this module
//! decides what the swap looks like.

use serde::Serialize;

use crate::error::CoreError;
use crate::types::{DbId, StepOrder};

/// Spacing used when a step is appended without an explicit order.
pub const STEP_ORDER_GAP: StepOrder = 10;

/// End of a step list that a move can run into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Boundary {
    Top,
    Bottom,
}

impl std::fmt::Display for Boundary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Top => f.write_str("top"),
            Self::Bottom => f.write_str("bottom"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    /// Towards lower `step_order`.
    Up,
    /// Towards higher `step_order`.
    Down,
}

impl MoveDirection {
    /// The list end that stops a move in this direction.
    pub fn boundary(&self) -> Boundary {
        match self {
            Self::Up => Boundary::Top,
            Self::Down => Boundary::Bottom,
        }
    }

    /// SQL comparison selecting candidate neighbours relative to the target.
    pub fn neighbor_comparison(&self) -> &'static str {
        match self {
            Self::Up => "<",
            Self::Down => ">",
        }
    }

    /// SQL sort direction that puts the immediate neighbour first.
    ///
    /// Up picks the greatest order below the target, Down the least above.
    pub fn neighbor_sort(&self) -> &'static str {
        match self {
            Self::Up => "DESC",
            Self::Down => "ASC",
        }
    }

    /// Whether `candidate` lies on this direction's side of `target`.
    pub fn is_beyond(&self, target: StepOrder, candidate: StepOrder) -> bool {
        match self {
            Self::Up => candidate < target,
            Self::Down => candidate > target,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
        }
    }
}

/// A step's identity and current position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StepSlot {
    pub step_id: DbId,
    pub step_order: StepOrder,
}

/// The two rows touched by a move, with their new positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SwapPlan {
    /// The step the caller asked to move.
    pub moved: StepSlot,
    /// The neighbour it traded places with.
    pub displaced: StepSlot,
}

/// Plan a move of `target` in `direction`, given its immediate neighbour
/// on that side (if any).
///
/// Returns `AlreadyAtBoundary` when there is no neighbour. A neighbour on
/// the wrong side of the target is an `Internal` error: the caller's
/// neighbour lookup is broken.
pub fn plan_swap(
    target: StepSlot,
    neighbor: Option<StepSlot>,
    direction: MoveDirection,
) -> Result<SwapPlan, CoreError> {
    let neighbor = neighbor.ok_or(CoreError::AlreadyAtBoundary {
        boundary: direction.boundary(),
    })?;

    if !direction.is_beyond(target.step_order, neighbor.step_order) {
        return Err(CoreError::Internal(format!(
            "Neighbour step {} (order {}) is not {} of step {} (order {})",
            neighbor.step_id,
            neighbor.step_order,
            direction.label(),
            target.step_id,
            target.step_order,
        )));
    }

    Ok(SwapPlan {
        moved: StepSlot {
            step_id: target.step_id,
            step_order: neighbor.step_order,
        },
        displaced: StepSlot {
            step_id: neighbor.step_id,
            step_order: target.step_order,
        },
    })
}

/// Order value for a step appended to a list whose current maximum is
/// `current_max` (`None` for an empty list).
pub fn next_step_order(current_max: Option<StepOrder>) -> Result<StepOrder, CoreError> {
    match current_max {
        None => Ok(STEP_ORDER_GAP),
        Some(max) => max.checked_add(STEP_ORDER_GAP).ok_or_else(|| {
            CoreError::Validation(format!(
                "Cannot auto-assign step_order after {max}; supply one explicitly"
            ))
        }),
    }
}

/// Caller-supplied orders must be non-negative.
pub fn validate_step_order(step_order: StepOrder) -> Result<(), CoreError> {
    if step_order < 0 {
        return Err(CoreError::Validation(format!(
            "step_order must be non-negative, got {step_order}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn slot(step_id: DbId, step_order: StepOrder) -> StepSlot {
        StepSlot {
            step_id,
            step_order,
        }
    }

    /// Mirrors the SQL neighbour lookup over an in-memory list.
    fn find_neighbor(steps: &[StepSlot], target: StepSlot, dir: MoveDirection) -> Option<StepSlot> {
        let candidates = steps
            .iter()
            .copied()
            .filter(|s| dir.is_beyond(target.step_order, s.step_order));
        match dir {
            MoveDirection::Up => candidates.max_by_key(|s| s.step_order),
            MoveDirection::Down => candidates.min_by_key(|s| s.step_order),
        }
    }

    fn apply_move(steps: &mut [StepSlot], step_id: DbId, dir: MoveDirection) -> Result<(), CoreError> {
        let target = *steps.iter().find(|s| s.step_id == step_id).unwrap();
        let plan = plan_swap(target, find_neighbor(steps, target, dir), dir)?;
        for s in steps.iter_mut() {
            if s.step_id == plan.moved.step_id {
                s.step_order = plan.moved.step_order;
            } else if s.step_id == plan.displaced.step_id {
                s.step_order = plan.displaced.step_order;
            }
        }
        Ok(())
    }

    fn ordered_ids(steps: &[StepSlot]) -> Vec<DbId> {
        let mut sorted = steps.to_vec();
        sorted.sort_by_key(|s| s.step_order);
        sorted.iter().map(|s| s.step_id).collect()
    }

    #[test]
    fn move_up_swaps_with_predecessor() {
        let plan = plan_swap(slot(2, 20), Some(slot(1, 10)), MoveDirection::Up).unwrap();
        assert_eq!(plan.moved, slot(2, 10));
        assert_eq!(plan.displaced, slot(1, 20));
    }

    #[test]
    fn move_down_swaps_with_successor() {
        let plan = plan_swap(slot(2, 20), Some(slot(3, 30)), MoveDirection::Down).unwrap();
        assert_eq!(plan.moved, slot(2, 30));
        assert_eq!(plan.displaced, slot(3, 20));
    }

    #[test]
    fn no_neighbor_is_a_boundary() {
        let err = plan_swap(slot(1, 10), None, MoveDirection::Up).unwrap_err();
        assert!(matches!(
            err,
            CoreError::AlreadyAtBoundary {
                boundary: Boundary::Top
            }
        ));
        assert_eq!(err.to_string(), "Step is already at the top");

        let err = plan_swap(slot(1, 10), None, MoveDirection::Down).unwrap_err();
        assert_eq!(err.to_string(), "Step is already at the bottom");
    }

    #[test]
    fn wrong_side_neighbor_is_internal() {
        let err = plan_swap(slot(1, 10), Some(slot(2, 20)), MoveDirection::Up).unwrap_err();
        assert!(matches!(err, CoreError::Internal(_)));
    }

    #[test]
    fn neighbor_is_immediate_not_any_lower() {
        let steps = [slot(1, 5), slot(2, 40), slot(3, 70), slot(4, 100)];
        let target = steps[3];
        assert_eq!(find_neighbor(&steps, target, MoveDirection::Up), Some(steps[2]));
        assert_eq!(find_neighbor(&steps, steps[0], MoveDirection::Down), Some(steps[1]));
    }

    #[test]
    fn scenario_move_b_up() {
        // A(10), B(20), C(30); MoveUp(B) => B, A, C.
        let mut steps = vec![slot(1, 10), slot(2, 20), slot(3, 30)];
        apply_move(&mut steps, 2, MoveDirection::Up).unwrap();
        assert_eq!(steps[0].step_order, 20);
        assert_eq!(steps[1].step_order, 10);
        assert_eq!(ordered_ids(&steps), vec![2, 1, 3]);
    }

    #[test]
    fn up_then_down_is_identity_with_gaps() {
        let original = vec![slot(1, 3), slot(2, 17), slot(3, 18), slot(4, 90)];
        for id in 1..=4 {
            let mut steps = original.clone();
            if apply_move(&mut steps, id, MoveDirection::Up).is_ok() {
                apply_move(&mut steps, id, MoveDirection::Down).unwrap();
                assert_eq!(steps, original);
            }
        }
    }

    #[test]
    fn orders_stay_unique_under_any_move_sequence() {
        let mut steps = vec![slot(1, 10), slot(2, 25), slot(3, 26), slot(4, 60), slot(5, 61)];
        let moves = [
            (3, MoveDirection::Up),
            (3, MoveDirection::Up),
            (3, MoveDirection::Up),
            (5, MoveDirection::Down),
            (1, MoveDirection::Down),
            (4, MoveDirection::Up),
            (2, MoveDirection::Down),
            (2, MoveDirection::Down),
        ];
        let original_orders: HashSet<StepOrder> = steps.iter().map(|s| s.step_order).collect();
        for (id, dir) in moves {
            let _ = apply_move(&mut steps, id, dir);
            let orders: HashSet<StepOrder> = steps.iter().map(|s| s.step_order).collect();
            assert_eq!(orders.len(), steps.len());
            assert_eq!(orders, original_orders);
        }
    }

    #[test]
    fn next_order_leaves_gap() {
        assert_eq!(next_step_order(None).unwrap(), STEP_ORDER_GAP);
        assert_eq!(next_step_order(Some(35)).unwrap(), 45);
        assert!(next_step_order(Some(StepOrder::MAX)).is_err());
    }

    #[test]
    fn negative_order_rejected() {
        assert!(validate_step_order(0).is_ok());
        let err = validate_step_order(-1).unwrap_err();
        assert!(err.to_string().contains("non-negative"));
    }
}
