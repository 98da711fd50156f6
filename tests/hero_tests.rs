use std::{
    path::PathBuf,
    thread,
    time::{Duration, Instant},
};

use cgmath::Vector3;
use vitrine::{
    error::VitrineError,
    gfx::scene::{GroupContent, Node, Transform},
    hero::{
        loader::{self, LoadPoll},
        motion::MotionState,
        normalize::normalize_model,
        HeroConfig, HeroScene, LoadOutcome, MountToken,
    },
};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn mount() -> HeroScene {
    HeroScene::mount(HeroConfig::default(), 1.5)
}

fn model_opacity(hero: &HeroScene) -> Option<f32> {
    match hero.scene().group.content() {
        GroupContent::Model(node) => {
            let mut opacity = None;
            node.visit_surfaces(&cgmath::Matrix4::from_scale(1.0), &mut |_, surface| {
                opacity.get_or_insert(surface.material.effective_opacity());
            });
            opacity
        }
        GroupContent::Fallback(_) => None,
    }
}

#[test]
fn imported_fixture_keeps_node_transform_and_material() {
    let root = loader::import_gltf(&fixture("triangle.gltf")).unwrap();
    assert_eq!(root.name, "triangle");
    assert_eq!(root.triangle_count(), 1);

    let child = &root.children[0];
    assert_eq!(child.name, "triangle");
    assert_eq!(child.transform.translation, Vector3::new(3.0, 0.0, 0.0));
    assert_eq!(child.transform.scale, Vector3::new(4.0, 4.0, 4.0));

    let material = &child.surfaces[0].material;
    assert!((material.base_color[0] - 0.8).abs() < 1e-6);
    assert!((material.roughness - 0.7).abs() < 1e-6);
}

#[test]
fn normalized_fixture_fits_target_and_is_centered() {
    let mut root = loader::import_gltf(&fixture("triangle.gltf")).unwrap();
    let result = normalize_model(&mut root, 2.2).unwrap();
    assert!((result.scale_factor - 0.55).abs() < 1e-5);

    let bounds = root.bounds();
    assert!((bounds.max_dimension() - 2.2).abs() < 1e-4);
    let center = bounds.center();
    assert!(center.x.abs() < 1e-4 && center.y.abs() < 1e-4 && center.z.abs() < 1e-4);
}

#[test]
fn load_that_never_resolves_keeps_the_fallback() {
    let mut hero = mount();
    let (_completer, pending) = loader::channel("assets/never.glb");
    assert!(hero.begin_load(pending));

    let start = Instant::now();
    for frame in 0..600 {
        let now = start + Duration::from_millis(frame * 16);
        assert_eq!(hero.poll_load(now), None);
        hero.tick(now);
    }
    assert!(hero.scene().group.shows_fallback());
    assert!(hero.is_loading());
}

#[test]
fn rejected_load_keeps_the_fallback() {
    let mut hero = mount();
    let (completer, pending) = loader::channel("assets/missing.glb");
    hero.begin_load(pending);
    completer.complete(Err(VitrineError::AssetNotFound("assets/missing.glb".into())));

    assert_eq!(hero.poll_load(Instant::now()), Some(LoadOutcome::KeptFallback));
    assert!(hero.scene().group.shows_fallback());
    assert!(!hero.is_loading());
}

#[test]
fn missing_asset_keeps_the_fallback_through_the_real_loader() {
    let config = HeroConfig::default().with_model_path(fixture("does-not-exist.glb"));
    let mut hero = HeroScene::mount(config, 1.5);
    hero.start_load();

    let deadline = Instant::now() + Duration::from_secs(10);
    let outcome = loop {
        if let Some(outcome) = hero.poll_load(Instant::now()) {
            break outcome;
        }
        assert!(Instant::now() < deadline, "load never finished");
        thread::sleep(Duration::from_millis(5));
    };
    assert_eq!(outcome, LoadOutcome::KeptFallback);
    assert!(hero.scene().group.shows_fallback());
}

#[test]
fn loaded_model_replaces_fallback_and_fades_in() {
    let config = HeroConfig::default()
        .with_model_path(fixture("triangle.gltf"))
        .with_fade_duration(Duration::from_millis(1000));
    let mut hero = HeroScene::mount(config, 1.5);
    hero.start_load();

    let deadline = Instant::now() + Duration::from_secs(10);
    let attached_at = loop {
        let now = Instant::now();
        if let Some(outcome) = hero.poll_load(now) {
            assert_eq!(outcome, LoadOutcome::Attached);
            break now;
        }
        assert!(now < deadline, "load never finished");
        thread::sleep(Duration::from_millis(5));
    };

    let group = &hero.scene().group;
    assert!(group.shows_model() && !group.shows_fallback());
    assert_eq!(model_opacity(&hero), Some(0.0));

    hero.tick(attached_at + Duration::from_millis(500));
    let halfway = model_opacity(&hero).unwrap();
    assert!(halfway > 0.0 && halfway < 1.0);

    hero.tick(attached_at + Duration::from_millis(1500));
    assert_eq!(model_opacity(&hero), Some(1.0));
}

#[test]
fn centered_pointer_returns_camera_to_rest() {
    let mut hero = mount();
    let start = Instant::now();

    hero.on_pointer_move(800.0, 0.0, 800.0, 600.0);
    for _ in 0..200 {
        hero.tick(start);
    }
    let offset = hero.camera_offset();
    assert!((offset.x - 0.5).abs() < 1e-3 && (offset.y - 0.3).abs() < 1e-3);

    hero.on_pointer_move(400.0, 300.0, 800.0, 600.0);
    let mut previous = offset.x.abs() + offset.y.abs();
    for _ in 0..300 {
        hero.tick(start);
        let current = hero.camera_offset().x.abs() + hero.camera_offset().y.abs();
        assert!(current <= previous);
        previous = current;
    }
    assert!(previous < 1e-3);
    assert!((hero.scene().camera.eye.x - hero.camera_offset().x).abs() < 1e-6);
}

#[test]
fn rotation_depends_on_tick_count_not_elapsed_time() {
    let mut steady = mount();
    let mut jittery = mount();
    let start = Instant::now();

    for i in 0..1000u64 {
        steady.tick(start + Duration::from_millis(i * 16));
        jittery.tick(start + Duration::from_millis(i * i % 97 * 50));
    }
    assert_eq!(steady.ticks(), 1000);
    assert_eq!(
        steady.scene().group.transform,
        jittery.scene().group.transform
    );

    let mut motion = MotionState::new(HeroConfig::default().rotation_speed, 0.12);
    for _ in 0..1000 {
        motion.advance();
    }
    let pose = motion.pose();
    let mut expected = Transform::default();
    expected.set_pitch_yaw(pose.pitch, pose.yaw);
    let actual = steady.scene().group.transform.rotation;
    assert!((actual.s - expected.rotation.s).abs() < 1e-6);
    assert!((actual.v.y - expected.rotation.v.y).abs() < 1e-6);
    assert!((f64::from(pose.yaw) - (1000.0 * 0.004f64).rem_euclid(std::f64::consts::TAU)).abs() < 1e-5);
}

#[test]
fn late_completion_after_teardown_is_ignored() {
    let mut hero = mount();
    let token = hero.token();
    let (completer, pending) = loader::channel("assets/House.glb");
    hero.begin_load(pending);

    assert!(hero.is_mounted() && hero.wants_frame());
    assert!(hero.teardown());
    assert!(!token.is_live());
    assert!(!hero.is_mounted() && !hero.wants_frame());
    assert!(!hero.teardown());

    // The receiver went away with the hero's pending load
    assert!(!completer.complete(Ok(Node::new("late"))));
    assert_eq!(hero.poll_load(Instant::now()), None);
    assert_eq!(
        hero.complete_load(Ok(Node::new("late")), Instant::now()),
        LoadOutcome::Discarded
    );
    assert!(hero.scene().group.shows_fallback());

    let ticks = hero.ticks();
    hero.tick(Instant::now());
    assert_eq!(hero.ticks(), ticks);
}

#[test]
fn worker_skips_decoding_for_a_cancelled_mount() {
    let token = MountToken::new();
    token.cancel();
    let mut pending = loader::spawn_gltf_load(fixture("triangle.gltf"), token).unwrap();

    let deadline = Instant::now() + Duration::from_secs(10);
    loop {
        match pending.poll() {
            LoadPoll::Pending => {
                assert!(Instant::now() < deadline, "worker never finished");
                thread::sleep(Duration::from_millis(5));
            }
            LoadPoll::Ready(result) => {
                assert!(matches!(result, Err(VitrineError::LoadAbandoned(_))));
                break;
            }
        }
    }
}
