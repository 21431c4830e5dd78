//! Hover and selection driven by pointer input.
//!
//! Every event casts a fresh ray; nothing about a pick outlives the event
//! except the hover/selected flags it leaves on the planes.

use crate::camera::Ray;
use crate::plane::{PlaneId, PlaneRegistry};
use smallvec::SmallVec;

/// What a press on empty space does to the current selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SelectionPolicy {
    /// Keep the previous selection.
    #[default]
    Sticky,
    ClearOnMiss,
}

impl SelectionPolicy {
    /// Policy from the page-facing `clearOnMiss` flag.
    pub fn from_clear_on_miss(clear: bool) -> Self {
        if clear {
            Self::ClearOnMiss
        } else {
            Self::Sticky
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PickHit {
    pub plane: PlaneId,
    pub distance: f32,
}

/// Outcome of one pointer event.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PickResult {
    pub hit: Option<PickHit>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PickState {
    #[default]
    Idle,
    Hovering(PlaneId),
}

/// All planes the ray crosses, nearest first. Equal distances keep draw order.
pub fn cast_ray<T>(ray: &Ray, planes: &PlaneRegistry<T>) -> SmallVec<[PickHit; 4]> {
    let mut hits: SmallVec<[PickHit; 4]> = planes
        .iter()
        .filter_map(|p| {
            p.intersect(ray.origin, ray.dir).map(|t| PickHit {
                plane: p.id,
                distance: t,
            })
        })
        .collect();
    hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    hits
}

#[inline]
pub fn nearest_hit<T>(ray: &Ray, planes: &PlaneRegistry<T>) -> Option<PickHit> {
    cast_ray(ray, planes).first().copied()
}

#[derive(Clone, Debug, Default)]
pub struct PickController {
    policy: SelectionPolicy,
    state: PickState,
}

impl PickController {
    pub fn new(policy: SelectionPolicy) -> Self {
        Self {
            policy,
            state: PickState::Idle,
        }
    }

    #[inline]
    pub fn state(&self) -> PickState {
        self.state
    }

    #[inline]
    pub fn policy(&self) -> SelectionPolicy {
        self.policy
    }

    /// Clear all hover flags, then hover the nearest plane under the ray.
    pub fn pointer_move<T>(&mut self, ray: &Ray, planes: &mut PlaneRegistry<T>) -> PickResult {
        let hit = nearest_hit(ray, planes);
        planes.set_hovered(hit.map(|h| h.plane));
        self.state = match hit {
            Some(h) => PickState::Hovering(h.plane),
            None => PickState::Idle,
        };
        PickResult { hit }
    }

    /// Select the nearest plane under the ray. A miss follows the policy.
    pub fn pointer_down<T>(&mut self, ray: &Ray, planes: &mut PlaneRegistry<T>) -> PickResult {
        let hit = nearest_hit(ray, planes);
        match hit {
            Some(h) => {
                // The id came from this registry, so it is always known.
                if let Err(e) = planes.set_selected(h.plane) {
                    log::error!("[pick] {}", e);
                }
            }
            None if self.policy == SelectionPolicy::ClearOnMiss => planes.clear_selection(),
            None => {}
        }
        PickResult { hit }
    }
}
