use glam::{Vec2, Vec3};
use plane_core::{
    PickController, PickState, PlaneDesc, PlaneId, PointerInput, SelectionPolicy, Viewer,
    ViewerConfig, Viewport,
};

const VP: Viewport = Viewport {
    width: 800.0,
    height: 600.0,
};
const CENTER: Vec2 = Vec2::new(400.0, 300.0);
const CORNER: Vec2 = Vec2::new(2.0, 2.0);

fn front_viewer(policy: SelectionPolicy) -> Viewer<()> {
    let config = ViewerConfig {
        camera_eye: Vec3::new(0.0, 0.0, 30.0),
        selection: policy,
        ..Default::default()
    };
    Viewer::new(config, VP)
}

fn flags(v: &Viewer<()>, id: u32) -> (bool, bool) {
    let s = v.planes().get(PlaneId(id)).unwrap().shading;
    (s.hovered, s.selected)
}

#[test]
fn hover_then_click_selects_and_selection_sticks() {
    let mut v = front_viewer(SelectionPolicy::Sticky);
    let id = v.insert_plane(PlaneDesc::new("a.png", 40.0, 40.0), ());

    let res = v.handle_pointer(PointerInput::Move(CENTER));
    assert_eq!(res.hit.map(|h| h.plane), Some(id));
    assert!((res.hit.unwrap().distance - 30.0).abs() < 1e-3);
    assert_eq!(flags(&v, 0), (true, false));
    assert_eq!(v.picker().state(), PickState::Hovering(id));

    v.handle_pointer(PointerInput::Down(CENTER));
    v.handle_pointer(PointerInput::Up(CENTER));
    assert_eq!(flags(&v, 0), (true, true));

    let res = v.handle_pointer(PointerInput::Move(CORNER));
    assert!(res.hit.is_none());
    assert_eq!(flags(&v, 0), (false, true));
    assert_eq!(v.picker().state(), PickState::Idle);
}

#[test]
fn move_without_hit_clears_every_hover_flag() {
    let mut v = front_viewer(SelectionPolicy::Sticky);
    v.insert_plane(PlaneDesc::new("a.png", 4.0, 4.0).at(Vec3::new(-10.0, 0.0, 0.0)), ());
    v.insert_plane(PlaneDesc::new("b.png", 4.0, 4.0).at(Vec3::new(10.0, 0.0, 0.0)), ());
    v.planes_mut().set_hovered(Some(PlaneId(1)));

    let res = v.handle_pointer(PointerInput::Move(CENTER));
    assert!(res.hit.is_none());
    assert!(v.planes().iter().all(|p| !p.shading.hovered));
}

#[test]
fn nearer_of_two_overlapping_planes_wins() {
    let mut v = front_viewer(SelectionPolicy::Sticky);
    let back = v.insert_plane(PlaneDesc::new("back.png", 40.0, 40.0), ());
    let front =
        v.insert_plane(PlaneDesc::new("front.png", 20.0, 20.0).at(Vec3::new(0.0, 0.0, 5.0)), ());

    let res = v.handle_pointer(PointerInput::Move(CENTER));
    assert_eq!(res.hit.map(|h| h.plane), Some(front));
    assert!(!v.planes().get(back).unwrap().shading.hovered);

    v.handle_pointer(PointerInput::Down(CENTER));
    assert!(v.planes().get(front).unwrap().shading.selected);
    assert!(!v.planes().get(back).unwrap().shading.selected);
}

#[test]
fn clear_on_miss_policy_drops_selection() {
    let mut v = front_viewer(SelectionPolicy::ClearOnMiss);
    v.insert_plane(PlaneDesc::new("a.png", 40.0, 40.0), ());
    v.handle_pointer(PointerInput::Down(CENTER));
    v.handle_pointer(PointerInput::Up(CENTER));
    assert_eq!(v.planes().selected_id(), Some(PlaneId(0)));

    v.handle_pointer(PointerInput::Down(CORNER));
    assert_eq!(v.planes().selected_id(), None);
    assert!(!flags(&v, 0).1);
}

#[test]
fn flipped_plane_is_still_pickable_from_behind() {
    let mut v = front_viewer(SelectionPolicy::Sticky);
    let id = v.insert_plane(PlaneDesc::new("a.png", 40.0, 40.0), ());
    v.planes_mut().flip(id).unwrap();
    let res = v.handle_pointer(PointerInput::Move(CENTER));
    assert_eq!(res.hit.map(|h| h.plane), Some(id));
}

#[test]
fn plane_behind_camera_is_ignored() {
    let mut v = front_viewer(SelectionPolicy::Sticky);
    v.insert_plane(PlaneDesc::new("a.png", 40.0, 40.0).at(Vec3::new(0.0, 0.0, 40.0)), ());
    assert!(v.handle_pointer(PointerInput::Move(CENTER)).hit.is_none());
}

#[test]
fn controller_defaults_to_sticky_idle() {
    let c = PickController::default();
    assert_eq!(c.policy(), SelectionPolicy::Sticky);
    assert_eq!(c.state(), PickState::Idle);
}

#[test]
fn clear_on_miss_flag_selects_policy() {
    assert_eq!(
        SelectionPolicy::from_clear_on_miss(true),
        SelectionPolicy::ClearOnMiss
    );
    assert_eq!(
        SelectionPolicy::from_clear_on_miss(false),
        SelectionPolicy::Sticky
    );

    let mut v = front_viewer(SelectionPolicy::from_clear_on_miss(true));
    v.insert_plane(PlaneDesc::new("a.png", 40.0, 40.0), ());
    v.handle_pointer(PointerInput::Down(CENTER));
    v.handle_pointer(PointerInput::Up(CENTER));
    v.handle_pointer(PointerInput::Down(CORNER));
    assert_eq!(v.picker().policy(), SelectionPolicy::ClearOnMiss);
    assert_eq!(v.planes().selected_id(), None);
}
